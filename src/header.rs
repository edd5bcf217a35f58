//! GPT-header object and decoder.

use std::fmt;

use simple_bytes::{Bytes, BytesRead};

use crate::disk::{self, DiskDevice, Sector};
use crate::guid::Guid;
use crate::DumpError;

/// GPT header magic signature.
pub const SIGNATURE: [u8; 8] = *b"EFI PART";

/// LBA of the primary header.
pub const PRIMARY_LBA: u64 = 1;

/// Largest entry count a header may declare.
///
/// Anything above it is treated as a corrupted header rather than trusted
/// as a loop bound.
pub const MAX_ENTRY_COUNT: u32 = 512;

/// Header describing a GPT disk.
///
/// Checksums are carried as stored and never verified.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Header {
    /// GPT header magic signature, always "EFI PART".
    pub signature: [u8; 8], // Offset  0
    /// Raw revision bytes, e.g. `00 00 01 00`.
    pub revision: [u8; 4], // Offset  8
    /// Declared size of the header structure
    pub header_size: u32, // Offset 12
    /// CRC32 of the header as stored
    pub crc_self: u32, // Offset 16
    /// must be 0
    pub reserved: u32, // Offset 20
    /// LBA of this header
    pub lba_self: u64, // Offset 24
    /// LBA of the other header (primary <-> backup)
    pub lba_alt: u64, // Offset 32
    /// First usable LBA for partitions
    pub lba_start: u64, // Offset 40
    /// Last usable LBA for partitions
    pub lba_end: u64, // Offset 48
    /// Disk GUID
    pub disk_guid: Guid, // Offset 56
    /// Starting LBA of the partition entry array
    pub lba_table: u64, // Offset 72
    /// Number of slots in the partition entry array, used or not
    pub entry_count: u32, // Offset 80
    /// Size of one slot, usually 128
    pub entry_size: u32, // Offset 84
    /// CRC32 of the partition entry array as stored
    pub crc_table: u32, // Offset 88
}

impl Header {
    /// Decode a header out of the sector read at `lba`.
    ///
    /// `lba` is only used to label faults.
    pub fn from_bytes(buf: &Sector, lba: u64) -> Result<Self, DumpError> {
        let mut bytes = Bytes::from(&buf[..]);

        let mut signature = [0u8; 8];
        signature.copy_from_slice(bytes.read(8));
        if signature != SIGNATURE {
            debug!("LBA {}: signature {:02x?} is not GPT", lba, signature);
            return Err(DumpError::BadSignature { lba });
        }

        let mut revision = [0u8; 4];
        revision.copy_from_slice(bytes.read(4));

        let h = Header {
            signature,
            revision,
            header_size: bytes.read_le_u32(),
            crc_self: bytes.read_le_u32(),
            reserved: bytes.read_le_u32(),
            lba_self: bytes.read_le_u64(),
            lba_alt: bytes.read_le_u64(),
            lba_start: bytes.read_le_u64(),
            lba_end: bytes.read_le_u64(),
            disk_guid: Guid::from_slice(bytes.read(16))?,
            lba_table: bytes.read_le_u64(),
            entry_count: bytes.read_le_u32(),
            entry_size: bytes.read_le_u32(),
            crc_table: bytes.read_le_u32(),
        };
        trace!("header at LBA {}: {:?}", lba, h);

        if h.entry_count > MAX_ENTRY_COUNT {
            return Err(DumpError::ImplausibleEntryCount {
                lba,
                count: h.entry_count,
            });
        }

        Ok(h)
    }

    /// Size in bytes of the partition entry array this header describes.
    pub fn table_len(&self) -> u64 {
        u64::from(self.entry_count) * u64::from(self.entry_size)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sig: String = self.signature.iter().map(|b| char::from(*b)).collect();
        let rev = self.revision;

        writeln!(f, "signature    = \"{sig}\"")?;
        writeln!(
            f,
            "revision     = {:02x} {:02x} {:02x} {:02x}",
            rev[0], rev[1], rev[2], rev[3]
        )?;
        writeln!(f, "header_size  = {}", self.header_size)?;
        writeln!(f, "crc_self     = {:#x}", self.crc_self)?;
        writeln!(f, "lba_self     = 0x{:016x}", self.lba_self)?;
        writeln!(f, "lba_alt      = 0x{:016x}", self.lba_alt)?;
        writeln!(f, "lba_start    = 0x{:016x}", self.lba_start)?;
        writeln!(f, "lba_end      = 0x{:016x}", self.lba_end)?;
        writeln!(f, "disk_guid    = {}", self.disk_guid)?;
        writeln!(f, "lba_table    = 0x{:016x}", self.lba_table)?;
        writeln!(f, "entry_count  = {}", self.entry_count)?;
        writeln!(f, "entry_size   = {}", self.entry_size)?;
        write!(f, "crc_table    = {:#x}", self.crc_table)
    }
}

/// Read and decode the GPT header at `lba`.
pub fn read_header<D: DiskDevice + ?Sized>(device: &mut D, lba: u64) -> Result<Header, DumpError> {
    debug!("reading GPT header at LBA {}", lba);
    let sector = disk::read_sector(device, lba)?;
    let header = Header::from_bytes(&sector, lba)?;

    if header.lba_self != lba {
        warn!(
            "header read at LBA {} claims to live at LBA {}",
            lba, header.lba_self
        );
    }

    Ok(header)
}

/// Read the primary header at LBA 1.
pub fn read_primary_header<D: DiskDevice + ?Sized>(device: &mut D) -> Result<Header, DumpError> {
    read_header(device, PRIMARY_LBA)
}

/// Read the backup header the primary header points to.
pub fn read_backup_header<D: DiskDevice + ?Sized>(
    device: &mut D,
    primary: &Header,
) -> Result<Header, DumpError> {
    read_header(device, primary.lba_alt)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::disk::SECTOR_SIZE;

    use simple_bytes::{BytesArray, BytesWrite};
    use std::io::Cursor;

    fn header_sector(lba_self: u64, lba_alt: u64, entry_count: u32) -> Sector {
        let disk_guid: Guid = "1b6a2bfa-e92b-184c-a8a7-ed0610d54821".parse().unwrap();
        let mut bytes = BytesArray::from([0u8; SECTOR_SIZE]);

        BytesWrite::write(&mut bytes, SIGNATURE);
        BytesWrite::write(&mut bytes, [0x00, 0x00, 0x01, 0x00]);
        bytes.write_le_u32(92);
        bytes.write_le_u32(0x55f06699);
        bytes.write_le_u32(0);
        bytes.write_le_u64(lba_self);
        bytes.write_le_u64(lba_alt);
        bytes.write_le_u64(34);
        bytes.write_le_u64(38);
        BytesWrite::write(&mut bytes, disk_guid.as_bytes());
        bytes.write_le_u64(2);
        bytes.write_le_u32(entry_count);
        bytes.write_le_u32(128);
        bytes.write_le_u32(0x5fad601b);

        bytes.into_array()
    }

    #[test]
    fn decode_fields() {
        let h = Header::from_bytes(&header_sector(1, 71, 128), 1).unwrap();

        assert_eq!(&h.signature, b"EFI PART");
        assert_eq!(h.revision, [0x00, 0x00, 0x01, 0x00]);
        assert_eq!(h.header_size, 92);
        assert_eq!(h.crc_self, 0x55f06699);
        assert_eq!(h.reserved, 0);
        assert_eq!(h.lba_self, 1);
        assert_eq!(h.lba_alt, 71);
        assert_eq!(h.lba_start, 34);
        assert_eq!(h.lba_end, 38);
        assert_eq!(
            h.disk_guid.to_string(),
            "1b6a2bfa-e92b-184c-a8a7-ed0610d54821"
        );
        assert_eq!(h.lba_table, 2);
        assert_eq!(h.entry_count, 128);
        assert_eq!(h.entry_size, 128);
        assert_eq!(h.crc_table, 0x5fad601b);
        assert_eq!(h.table_len(), 128 * 128);
    }

    #[test]
    fn decode_is_idempotent() {
        let sector = header_sector(1, 71, 128);
        let a = Header::from_bytes(&sector, 1).unwrap();
        let b = Header::from_bytes(&sector, 1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bad_signature() {
        let mut sector = header_sector(1, 71, 128);
        sector[0] = b'X';
        assert!(matches!(
            Header::from_bytes(&sector, 1),
            Err(DumpError::BadSignature { lba: 1 })
        ));
    }

    #[test]
    fn entry_count_ceiling() {
        assert!(Header::from_bytes(&header_sector(1, 71, MAX_ENTRY_COUNT), 1).is_ok());
        assert!(matches!(
            Header::from_bytes(&header_sector(1, 71, 513), 1),
            Err(DumpError::ImplausibleEntryCount { lba: 1, count: 513 })
        ));
        assert!(matches!(
            Header::from_bytes(&header_sector(1, 71, u32::MAX), 1),
            Err(DumpError::ImplausibleEntryCount { .. })
        ));
    }

    #[test]
    fn checksums_are_not_verified() {
        let mut sector = header_sector(1, 71, 128);
        sector[16..20].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        let h = Header::from_bytes(&sector, 1).unwrap();
        assert_eq!(h.crc_self, 0xefbeadde);
    }

    #[test]
    fn read_primary_and_backup() {
        let mut image = vec![0u8; SECTOR_SIZE * 72];
        image[SECTOR_SIZE..SECTOR_SIZE * 2].copy_from_slice(&header_sector(1, 71, 128));
        image[SECTOR_SIZE * 71..].copy_from_slice(&header_sector(71, 1, 128));
        let mut device = Cursor::new(image);

        let primary = read_primary_header(&mut device).unwrap();
        let backup = read_backup_header(&mut device, &primary).unwrap();
        assert_eq!(primary.lba_self, 1);
        assert_eq!(backup.lba_self, 71);
        assert_eq!(backup.lba_alt, 1);
    }

    #[test]
    fn misplaced_header_is_accepted() {
        let mut image = vec![0u8; SECTOR_SIZE * 3];
        image[SECTOR_SIZE * 2..].copy_from_slice(&header_sector(1, 71, 128));
        let mut device = Cursor::new(image);

        let h = read_header(&mut device, 2).unwrap();
        assert_eq!(h.lba_self, 1);
    }

    #[test]
    fn display_fields() {
        let h = Header::from_bytes(&header_sector(1, 0x7ff, 128), 1).unwrap();
        let text = h.to_string();

        assert!(text.starts_with("signature    = \"EFI PART\"\n"));
        assert!(text.contains("revision     = 00 00 01 00\n"));
        assert!(text.contains("crc_self     = 0x55f06699\n"));
        assert!(text.contains("lba_alt      = 0x00000000000007ff\n"));
        assert!(text.contains("disk_guid    = 1b6a2bfa-e92b-184c-a8a7-ed0610d54821\n"));
        assert!(text.ends_with("crc_table    = 0x5fad601b"));
    }
}
