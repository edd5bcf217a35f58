//! Line-oriented text report of the decoded structures.
//!
//! The emitter only stringifies records; it never feeds back into decoding.

use std::io::{self, Write};

use crate::header::Header;
use crate::mbr::ProtectiveMBR;
use crate::partition::{EntryTable, Partition};

/// Writes report sections, separated by blank lines.
#[derive(Debug)]
pub struct Report<W> {
    out: W,
    sections: usize,
}

impl<W: Write> Report<W> {
    /// Start a report on `out`.
    pub fn new(out: W) -> Self {
        Self { out, sections: 0 }
    }

    fn section(&mut self, label: &str) -> io::Result<()> {
        if self.sections > 0 {
            writeln!(self.out)?;
        }
        self.sections += 1;
        writeln!(self.out, "{label}")
    }

    /// Emit the protective MBR.
    pub fn mbr(&mut self, pmbr: &ProtectiveMBR) -> io::Result<()> {
        self.section("protective mbr")?;
        writeln!(self.out, "{pmbr}")
    }

    /// Emit every field of a header.
    pub fn header(&mut self, label: &str, header: &Header) -> io::Result<()> {
        self.section(label)?;
        writeln!(self.out, "{header}")
    }

    /// Emit one line per entry followed by the number of slots walked.
    ///
    /// With `resolve_symbols`, known type GUIDs and attribute bits are
    /// shown by name.
    pub fn entries(
        &mut self,
        label: &str,
        table: &EntryTable,
        resolve_symbols: bool,
    ) -> io::Result<()> {
        self.section(label)?;
        writeln!(
            self.out,
            "{:<3} {:<36} {:<36} {:<16} {:<16} {:<16} {}",
            "#", "type", "unique", "first_lba", "last_lba", "attributes", "name"
        )?;

        for (index, part) in &table.entries {
            writeln!(
                self.out,
                "{:<3} {:<36} {:<36} {:016x} {:016x} {:<16} {}",
                index,
                part.type_guid.describe(resolve_symbols),
                part.unique_guid,
                part.lba_start,
                part.lba_end,
                attributes(part, resolve_symbols),
                part.name
            )?;
        }

        writeln!(self.out, "total slots  = {}", table.slots)
    }

    /// Flush and hand the writer back.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

fn attributes(part: &Partition, resolve_symbols: bool) -> String {
    if resolve_symbols && part.attributes != 0 {
        let mut names = String::new();
        if bitflags::parser::to_writer(&part.flags(), &mut names).is_ok() {
            return names;
        }
    }
    format!("{:016x}", part.attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::guid::Guid;
    use crate::partition_types;

    fn part(type_guid: Guid, attributes: u64) -> Partition {
        Partition {
            type_guid,
            unique_guid: "8eee35af-4a93-2c4f-aa7a-5fb193ac6ff7".parse().unwrap(),
            lba_start: 35,
            lba_end: 38,
            attributes,
            name: "data".to_string(),
        }
    }

    fn render(table: &EntryTable, resolve_symbols: bool) -> String {
        let mut report = Report::new(Vec::new());
        report.entries("primary entries", table, resolve_symbols).unwrap();
        String::from_utf8(report.finish().unwrap()).unwrap()
    }

    #[test]
    fn entry_lines() {
        let table = EntryTable {
            entries: vec![(7, part(Guid::from_uuid(&partition_types::LINUX_FS.guid), 0))],
            slots: 128,
        };
        let text = render(&table, false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "primary entries");
        assert!(lines[1].starts_with("#   type "));
        assert_eq!(
            lines[2],
            "7   0fc63daf-8483-4772-8e79-3d69d8477de4 8eee35af-4a93-2c4f-aa7a-5fb193ac6ff7 \
             0000000000000023 0000000000000026 0000000000000000 data"
        );
        assert_eq!(lines[3], "total slots  = 128");
    }

    #[test]
    fn symbolic_names() {
        let table = EntryTable {
            entries: vec![
                (0, part(Guid::from_uuid(&partition_types::EFI.guid), 0x1)),
                (1, part(Guid::from_uuid(&partition_types::BASIC.guid), 0)),
                (2, part("01234567-89ab-cdef-0123-456789abcdef".parse().unwrap(), 0x4 | 1 << 60)),
            ],
            slots: 4,
        };
        let text = render(&table, true);

        assert!(text.contains("\n0   EFI System Partition "));
        assert!(text.contains(" REQUIRED "));
        assert!(text.contains("\n1   Basic Data Partition "));
        assert!(text.contains("\n2   01234567-89ab-cdef-0123-456789abcdef "));
        assert!(text.contains(" LEGACY_BIOS_BOOTABLE | 0x1000000000000000 data"));
    }

    #[test]
    fn sections_are_separated() {
        let mut report = Report::new(Vec::new());
        report.entries("a", &EntryTable::default(), false).unwrap();
        report.entries("b", &EntryTable::default(), false).unwrap();
        let text = String::from_utf8(report.finish().unwrap()).unwrap();

        assert!(text.starts_with("a\n"));
        assert!(text.contains("total slots  = 0\n\nb\n"));
        assert!(text.ends_with("total slots  = 0\n"));
    }
}
