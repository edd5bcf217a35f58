//! Partition entries and the partition entry array decoder.

use bitflags::bitflags;
use simple_bytes::{Bytes, BytesRead};

use crate::disk::{self, DiskDevice, SECTOR_SIZE};
use crate::guid::Guid;
use crate::header::Header;
use crate::DumpError;

/// Number of bytes of an entry slot that carry fields.
pub const ENTRY_LEN: usize = 128;

/// Number of UTF-16 code units in the name field.
pub const NAME_UNITS: usize = 36;

bitflags! {
    /// Well-known partition attribute bits.
    ///
    /// Bits 48..=63 are type specific and have no name here.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct PartitionAttributes: u64 {
        /// Required by the platform to function.
        const REQUIRED = 1;
        /// Firmware must not produce a block IO protocol for it.
        const NO_BLOCK_IO = 1 << 1;
        /// Bootable by legacy BIOS firmware.
        const LEGACY_BIOS_BOOTABLE = 1 << 2;
    }
}

/// A decoded partition entry slot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Partition {
    /// GUID of the partition type, zero when the slot is unused.
    pub type_guid: Guid,
    /// GUID of this partition.
    pub unique_guid: Guid,
    /// First LBA of the partition
    pub lba_start: u64,
    /// Last LBA of the partition (inclusive)
    pub lba_end: u64,
    /// Attribute bits, as stored
    pub attributes: u64,
    /// Name, one byte per UTF-16 code unit, up to the first NUL.
    ///
    /// Only the low byte of each code unit is kept, so names outside
    /// Latin-1 are not rendered faithfully.
    pub name: String,
}

impl Partition {
    /// Decode a partition entry from the start of `buf`.
    ///
    /// Bytes past [`ENTRY_LEN`] are ignored.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, DumpError> {
        if buf.len() < ENTRY_LEN {
            return Err(DumpError::InvalidEntrySize {
                entry_size: buf.len() as u32,
            });
        }

        let mut bytes = Bytes::from(&buf[..ENTRY_LEN]);

        Ok(Partition {
            type_guid: Guid::from_slice(bytes.read(16))?,
            unique_guid: Guid::from_slice(bytes.read(16))?,
            lba_start: bytes.read_le_u64(),
            lba_end: bytes.read_le_u64(),
            attributes: bytes.read_le_u64(),
            name: read_part_name(&mut bytes),
        })
    }

    /// Whether the entry describes a partition.
    pub fn is_used(&self) -> bool {
        !self.type_guid.is_zero()
    }

    /// The attribute bits as flags; unnamed bits are retained.
    pub fn flags(&self) -> PartitionAttributes {
        PartitionAttributes::from_bits_retain(self.attributes)
    }
}

fn read_part_name(bytes: &mut Bytes<'_>) -> String {
    (0..NAME_UNITS)
        .map(|_| bytes.read_le_u16())
        .take_while(|unit| *unit != 0)
        .map(|unit| char::from((unit & 0xFF) as u8))
        .collect()
}

/// The partition entries read from one entry array.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EntryTable {
    /// Emitted entries with their slot index.
    pub entries: Vec<(u32, Partition)>,
    /// Number of slots walked, emitted or not.
    pub slots: u32,
}

impl EntryTable {
    /// Number of slots walked but left out of `entries`.
    pub fn skipped(&self) -> u32 {
        self.slots - self.entries.len() as u32
    }
}

/// Read the partition entry array described by `header`.
///
/// The array is read one sector at a time. All-zero slots are unused and
/// only appear in the result when `include_unused` is set, but every slot
/// is counted; walking a different number of slots than the header
/// declares is a [`DumpError::CountMismatch`].
pub fn read_entries<D: DiskDevice + ?Sized>(
    device: &mut D,
    header: &Header,
    include_unused: bool,
) -> Result<EntryTable, DumpError> {
    let entry_size = header.entry_size as usize;
    if entry_size < ENTRY_LEN || SECTOR_SIZE % entry_size != 0 {
        return Err(DumpError::InvalidEntrySize {
            entry_size: header.entry_size,
        });
    }

    let sectors = header.table_len() / SECTOR_SIZE as u64;
    let per_sector = SECTOR_SIZE / entry_size;
    debug!(
        "reading {} entries of {} bytes from LBA {} ({} sectors)",
        header.entry_count, entry_size, header.lba_table, sectors
    );

    let mut table = EntryTable::default();
    for i in 0..sectors {
        let lba = header
            .lba_table
            .checked_add(i)
            .ok_or(DumpError::Overflow("partition entry array LBA"))?;
        let sector = disk::read_sector(device, lba)?;

        for (j, slot) in sector.chunks_exact(entry_size).enumerate() {
            // bounded by MAX_ENTRY_COUNT
            let index = (i as usize * per_sector + j) as u32;
            table.slots += 1;

            if !include_unused && slot.iter().all(|b| *b == 0) {
                continue;
            }

            let part = Partition::from_bytes(slot)?;
            trace!("entry {}: {:?}", index, part);
            table.entries.push((index, part));
        }
    }

    if table.slots != header.entry_count {
        return Err(DumpError::CountMismatch {
            expected: header.entry_count,
            actual: table.slots,
        });
    }

    Ok(table)
}
