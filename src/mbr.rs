//! Protective MBR decoding.
//!
//! LBA 0 of a GPT disk holds a protective MBR whose 0xEE record covers
//! the disk so that MBR-only tools leave it alone.

use std::fmt;

use simple_bytes::{Bytes, BytesRead, BytesSeek};

use crate::disk::{self, DiskDevice, Sector};
use crate::DumpError;

/// MBR boot signature at offset 510.
pub const MBR_SIGNATURE: [u8; 2] = [0x55, 0xAA];

/// OS type of the record protecting a GPT disk.
pub const PROTECTIVE_OS_TYPE: u8 = 0xEE;

/// Protective MBR, as defined by GPT.
#[derive(Clone, Eq, PartialEq)]
pub struct ProtectiveMBR {
    bootcode: [u8; 440],
    disk_signature: [u8; 4],
    partitions: [PartRecord; 4],
    signature: [u8; 2],
}

impl fmt::Debug for ProtectiveMBR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Protective MBR, partitions: {:#?}", self.partitions)
    }
}

impl ProtectiveMBR {
    /// Parse LBA 0 into a protective-MBR object.
    pub fn from_bytes(buf: &Sector) -> Result<Self, DumpError> {
        let mut bytes = Bytes::from(&buf[..]);

        let mut bootcode = [0u8; 440];
        bootcode.copy_from_slice(bytes.read(440));
        let mut disk_signature = [0u8; 4];
        disk_signature.copy_from_slice(bytes.read(4));
        // reserved, usually zero
        let _ = bytes.read_le_u16();

        let mut partitions = [PartRecord::default(); 4];
        for p in partitions.iter_mut() {
            *p = PartRecord::read(&mut bytes);
        }

        debug_assert_eq!(BytesSeek::position(&bytes), 510);

        let mut signature = [0u8; 2];
        signature.copy_from_slice(bytes.read(2));
        if signature != MBR_SIGNATURE {
            return Err(DumpError::BadMbrSignature);
        }

        Ok(Self {
            bootcode,
            disk_signature,
            partitions,
            signature,
        })
    }

    /// Return the 440 bytes of BIOS bootcode.
    pub fn bootcode(&self) -> &[u8; 440] {
        &self.bootcode
    }

    /// Return the 4 bytes of MBR disk signature.
    pub fn disk_signature(&self) -> &[u8; 4] {
        &self.disk_signature
    }

    /// The four partition records.
    pub fn partitions(&self) -> &[PartRecord; 4] {
        &self.partitions
    }

    /// Whether any record is a GPT protective record.
    pub fn is_protective(&self) -> bool {
        self.partitions
            .iter()
            .any(|p| p.os_type == PROTECTIVE_OS_TYPE)
    }
}

impl fmt::Display for ProtectiveMBR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.disk_signature;
        writeln!(
            f,
            "disk_sig     = {:02x} {:02x} {:02x} {:02x}",
            d[0], d[1], d[2], d[3]
        )?;
        writeln!(
            f,
            "signature    = {:02x} {:02x}",
            self.signature[0], self.signature[1]
        )?;
        write!(
            f,
            "{:<3} {:<4} {:<4} {:<9} {:<9} {:<10} {}",
            "#", "boot", "type", "start_chs", "end_chs", "lb_start", "lb_size"
        )?;
        for (i, p) in self.partitions.iter().enumerate() {
            write!(
                f,
                "\n{:<3} {:02x}   {:02x}   {:02x} {:02x} {:02x}  {:02x} {:02x} {:02x}  0x{:08x} 0x{:08x}",
                i,
                p.boot_indicator,
                p.os_type,
                p.start_head,
                p.start_sector,
                p.start_track,
                p.end_head,
                p.end_sector,
                p.end_track,
                p.lb_start,
                p.lb_size
            )?;
        }
        Ok(())
    }
}

/// A partition record, MBR-style.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PartRecord {
    /// Bit 7 set if partition is active (bootable)
    pub boot_indicator: u8,
    /// CHS address of partition start: 8-bit value of head in CHS address
    pub start_head: u8,
    /// CHS address of partition start: Upper 2 bits are 8th-9th bits of cylinder, lower 6 bits are sector
    pub start_sector: u8,
    /// CHS address of partition start: Lower 8 bits of cylinder
    pub start_track: u8,
    /// Partition type. See <https://www.win.tue.nl/~aeb/partitions/partition_types-1.html>
    pub os_type: u8,
    /// CHS address of partition end: 8-bit value of head in CHS address
    pub end_head: u8,
    /// CHS address of partition end: Upper 2 bits are 8th-9th bits of cylinder, lower 6 bits are sector
    pub end_sector: u8,
    /// CHS address of partition end: Lower 8 bits of cylinder
    pub end_track: u8,
    /// LBA of start of partition
    pub lb_start: u32,
    /// Number of sectors in partition
    pub lb_size: u32,
}

impl PartRecord {
    fn read(bytes: &mut Bytes<'_>) -> Self {
        Self {
            boot_indicator: bytes.read_u8(),
            start_head: bytes.read_u8(),
            start_sector: bytes.read_u8(),
            start_track: bytes.read_u8(),
            os_type: bytes.read_u8(),
            end_head: bytes.read_u8(),
            end_sector: bytes.read_u8(),
            end_track: bytes.read_u8(),
            lb_start: bytes.read_le_u32(),
            lb_size: bytes.read_le_u32(),
        }
    }
}

/// Read LBA 0 and parse it into a protective-MBR object.
pub fn read_protective_mbr<D: DiskDevice + ?Sized>(
    device: &mut D,
) -> Result<ProtectiveMBR, DumpError> {
    debug!("reading protective MBR at LBA 0");
    let sector = disk::read_sector(device, 0)?;
    let pmbr = ProtectiveMBR::from_bytes(&sector)?;

    if !pmbr.is_protective() {
        warn!("MBR at LBA 0 has no protective (0xEE) record");
    }

    Ok(pmbr)
}
