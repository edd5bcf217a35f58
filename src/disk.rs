//! Disk-related types and the sector reader.

use std::io::{self, Read, Seek, SeekFrom};

use crate::DumpError;

/// Size of a logical sector (bytes).
///
/// Only 512-byte logical blocks are supported.
pub const SECTOR_SIZE: usize = 512;

/// One raw logical block.
pub type Sector = [u8; SECTOR_SIZE];

/// A generic device that we can read sectors from.
pub trait DiskDevice: Read + Seek {}
/// Implement the DiskDevice trait for anything that meets the
/// requirements, e.g., `std::fs::File` or `std::io::Cursor`.
impl<T> DiskDevice for T where T: Read + Seek {}

/// Read the logical block at `lba`.
///
/// The read is exact: a device that ends before the sector is complete
/// yields [`DumpError::Io`] with an `UnexpectedEof` cause. There is no retry.
pub fn read_sector<D: DiskDevice + ?Sized>(device: &mut D, lba: u64) -> Result<Sector, DumpError> {
    let offset = lba
        .checked_mul(SECTOR_SIZE as u64)
        .ok_or(DumpError::Overflow("sector offset"))?;
    trace!("reading LBA {} at byte offset {}", lba, offset);

    device
        .seek(SeekFrom::Start(offset))
        .map_err(|source| DumpError::Io { lba, source })?;

    let mut buf = [0u8; SECTOR_SIZE];
    let len = read_full(device, &mut buf).map_err(|source| DumpError::Io { lba, source })?;
    if len != SECTOR_SIZE {
        return Err(DumpError::Io {
            lba,
            source: io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("short read: {len} of {SECTOR_SIZE} bytes"),
            ),
        });
    }

    Ok(buf)
}

/// Like `read_exact`, but reports how many bytes made it into `buf`.
fn read_full<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
