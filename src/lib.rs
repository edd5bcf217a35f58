//! A pure-Rust GPT dumper.
//!
//! It decodes the primary and backup GPT headers of a disk image or
//! block device, walks the partition entry array each of them points to,
//! and prints a human-readable report. Nothing is ever written to the disk,
//! and header or table checksums are shown as stored without verification.
//!
//! ```no_run
//! use gptdump::DumpConfig;
//!
//! fn dump_disk() {
//!     let diskpath = std::path::Path::new("/dev/sdz");
//!
//!     DumpConfig::new()
//!         .resolve_symbols(true)
//!         .dump_path(diskpath, &mut std::io::stdout())
//!         .expect("failed to dump disk");
//! }
//! ```
//!
//! Decoding stops at the first fault:
//!
//! ```
//! use gptdump::{DumpConfig, DumpError};
//!
//! let mut blank = std::io::Cursor::new(vec![0u8; 4096]);
//! let err = DumpConfig::new()
//!     .dump_device(&mut blank, &mut std::io::sink())
//!     .unwrap_err();
//! assert!(matches!(err, DumpError::BadSignature { lba: 1 }));
//! ```

#![deny(missing_docs)]

use std::io::{self, Write};
use std::{fmt, fs, path};

#[macro_use]
mod macros;
#[macro_use]
mod logging;
pub mod disk;
pub mod guid;
pub mod header;
pub mod mbr;
pub mod partition;
pub mod partition_types;
pub mod report;

pub use disk::DiskDevice;
pub use guid::Guid;
pub use header::Header;
pub use partition::{EntryTable, Partition};

use report::Report;

#[non_exhaustive]
#[derive(Debug)]
/// Errors returned while dumping a GPT disk.
///
/// Every error ends the dump; nothing is retried.
pub enum DumpError {
    /// Reading the sector at `lba` failed or came up short
    Io {
        /// LBA being read
        lba: u64,
        /// underlying cause
        source: io::Error,
    },
    /// The sector at `lba` does not start with "EFI PART"
    BadSignature {
        /// LBA of the rejected header
        lba: u64,
    },
    /// A header declares more entries than
    /// [`MAX_ENTRY_COUNT`](header::MAX_ENTRY_COUNT)
    ImplausibleEntryCount {
        /// LBA of the rejected header
        lba: u64,
        /// declared entry count
        count: u32,
    },
    /// Entry slots must be at least 128 bytes and divide the sector size
    InvalidEntrySize {
        /// declared entry size
        entry_size: u32,
    },
    /// The number of entry slots walked differs from the declared count
    CountMismatch {
        /// entry count declared by the header
        expected: u32,
        /// slots actually walked
        actual: u32,
    },
    /// A GUID could not be built from the given bytes
    IdentifierRender {
        /// number of bytes offered
        len: usize,
    },
    /// LBA 0 does not end with the 55 AA signature
    BadMbrSignature,
    /// An LBA or byte offset does not fit in 64 bits
    Overflow(&'static str),
    /// The disk image could not be opened
    Open(io::Error),
    /// Writing the report failed
    Report(io::Error),
}

impl std::error::Error for DumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DumpError::Io { source, .. } => Some(source),
            DumpError::Open(e) | DumpError::Report(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for DumpError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DumpError::*;
        let desc = match self {
            Io { lba, source } => return write!(fmt, "read error at LBA {lba}: {source}"),
            BadSignature { lba } => return write!(fmt, "no GPT signature at LBA {lba}"),
            ImplausibleEntryCount { lba, count } => {
                return write!(
                    fmt,
                    "header at LBA {lba} declares {count} partition entries, likely corrupted"
                )
            }
            InvalidEntrySize { entry_size } => {
                return write!(fmt, "unsupported partition entry size {entry_size}")
            }
            CountMismatch { expected, actual } => {
                return write!(
                    fmt,
                    "walked {actual} partition entry slots but the header declares {expected}"
                )
            }
            IdentifierRender { len } => {
                return write!(fmt, "cannot build a GUID from {len} bytes")
            }
            BadMbrSignature => "invalid MBR signature",
            Overflow(m) => return write!(fmt, "overflow: {m}"),
            Open(e) => return write!(fmt, "cannot open disk image: {e}"),
            Report(e) => return write!(fmt, "cannot write report: {e}"),
        };
        write!(fmt, "{desc}")
    }
}

/// Configuration options to dump a GPT disk.
///
/// ## Default
/// By default unused entry slots are hidden, GUIDs are shown raw, and
/// both the primary and the backup header are dumped.
///
/// ```
/// # use gptdump::DumpConfig;
/// let _default_config = DumpConfig::new()
///     .verbose(false)
///     .resolve_symbols(false)
///     .skip_secondary(false)
///     .show_mbr(false);
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct DumpConfig {
    /// Include unused (all-zero) entry slots in the report.
    verbose: bool,
    /// Show known partition types and attribute bits by name.
    resolve_symbols: bool,
    /// Leave out the backup header and its entry array.
    skip_secondary: bool,
    /// Decode the protective MBR at LBA 0 first.
    show_mbr: bool,
}

impl DumpConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        DumpConfig::default()
    }

    /// Whether unused entry slots are listed.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Whether known partition type GUIDs and attribute bits are named.
    pub fn resolve_symbols(mut self, resolve_symbols: bool) -> Self {
        self.resolve_symbols = resolve_symbols;
        self
    }

    /// Whether the backup header and its entry array are skipped.
    pub fn skip_secondary(mut self, skip_secondary: bool) -> Self {
        self.skip_secondary = skip_secondary;
        self
    }

    /// Whether the protective MBR is decoded as well.
    pub fn show_mbr(mut self, show_mbr: bool) -> Self {
        self.show_mbr = show_mbr;
        self
    }

    /// Open the disk image at the given path read-only and dump it.
    pub fn dump_path<W>(&self, diskpath: impl AsRef<path::Path>, out: &mut W) -> Result<(), DumpError>
    where
        W: Write + ?Sized,
    {
        debug!("opening {} read-only", diskpath.as_ref().display());
        let mut file = fs::File::open(diskpath).map_err(DumpError::Open)?;
        self.dump_device(&mut file, out)
    }

    /// Dump the GPT structures of `device` to `out`.
    ///
    /// Reads happen in a fixed order: protective MBR (if enabled), primary
    /// header, backup header, primary entries, backup entries. Each section
    /// is written as soon as it is decoded.
    pub fn dump_device<D, W>(&self, device: &mut D, out: &mut W) -> Result<(), DumpError>
    where
        D: DiskDevice + ?Sized,
        W: Write + ?Sized,
    {
        debug!("dumping with {:?}", self);
        let mut report = Report::new(out);

        if self.show_mbr {
            let pmbr = mbr::read_protective_mbr(device)?;
            report.mbr(&pmbr).map_err(DumpError::Report)?;
        }

        let primary = header::read_primary_header(device)?;
        report
            .header("primary header", &primary)
            .map_err(DumpError::Report)?;

        let backup = if self.skip_secondary {
            None
        } else {
            let backup = header::read_backup_header(device, &primary)?;
            report
                .header("secondary header", &backup)
                .map_err(DumpError::Report)?;
            Some(backup)
        };

        let table = partition::read_entries(device, &primary, self.verbose)?;
        report
            .entries("primary entries", &table, self.resolve_symbols)
            .map_err(DumpError::Report)?;

        if let Some(backup) = backup {
            let table = partition::read_entries(device, &backup, self.verbose)?;
            report
                .entries("secondary entries", &table, self.resolve_symbols)
                .map_err(DumpError::Report)?;
        }

        report.finish().map_err(DumpError::Report)?;
        Ok(())
    }
}
