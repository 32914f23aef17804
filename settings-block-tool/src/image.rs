//! Block images and the values they carry.

pub mod generator;
pub mod parser;

use std::fmt::Write;

use settings_block::block::ConfigBlock;
use settings_block::Field;

use crate::error::Error;

pub use settings_block::block::BLOCK_SIZE;
pub use settings_block::platform::SECTOR_SIZE;

/// One field of a sheet. Sound settings carry their signed value, everything else the raw
/// unsigned one; flags are `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetEntry {
    pub field: Field,
    pub value: i64,
}

impl SheetEntry {
    pub fn new(field: Field, value: i64) -> Self {
        Self { field, value }
    }

    /// Interprets a raw value as read from a block.
    pub fn from_raw(field: Field, raw: u32) -> Self {
        let value = if field.is_signed() {
            i64::from((raw as u8).cast_signed())
        } else {
            i64::from(raw)
        };
        Self { field, value }
    }

    /// The raw value to store in a block. Values that don't fit the field, or that would read
    /// back as "unset", are rejected.
    pub fn to_raw(&self) -> Result<u32, Error> {
        let max = self.field.spec().encoding.max();
        let raw = if self.field.is_signed() {
            i8::try_from(self.value)
                .map(|value| u32::from(value.cast_unsigned()))
                .ok()
        } else {
            u32::try_from(self.value).ok().filter(|raw| *raw <= max)
        };
        let raw = raw.ok_or_else(|| {
            Error::InvalidValue(format!("{}: {} is out of range", self.field, self.value))
        })?;

        let mut probe = ConfigBlock::blank();
        probe.write_field(self.field, raw);
        if probe.read_field(self.field) != Some(raw) {
            return Err(Error::InvalidValue(format!(
                "{}: {} is the unset marker",
                self.field, self.value
            )));
        }

        Ok(raw)
    }
}

/// Sixteen bytes per line, offset first.
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::new();
    for (line, chunk) in data.chunks(16).enumerate() {
        let _ = writeln!(out, "{:04x}: {}", line * 16, hex::encode(chunk));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_values() {
        assert_eq!(SheetEntry::new(Field::Balance, -20).to_raw().unwrap(), 0xEC);
        assert_eq!(SheetEntry::from_raw(Field::Balance, 0xEC).value, -20);
        assert!(SheetEntry::new(Field::Bass, 128).to_raw().is_err());
        // -1 is stored as 0xFF
        assert!(SheetEntry::new(Field::Balance, -1).to_raw().is_err());
    }

    #[test]
    fn unsigned_values() {
        assert_eq!(SheetEntry::new(Field::Contrast, 38).to_raw().unwrap(), 38);
        assert!(SheetEntry::new(Field::Contrast, 255).to_raw().is_err());
        assert!(SheetEntry::new(Field::Contrast, -3).to_raw().is_err());
        assert_eq!(SheetEntry::new(Field::ScrollSpeed, 30).to_raw().unwrap(), 30);
        assert!(SheetEntry::new(Field::ScrollSpeed, 31).to_raw().is_err());
        assert!(SheetEntry::new(Field::WpsDisplay, 7).to_raw().is_err());
        assert!(SheetEntry::new(Field::Shuffle, 2).to_raw().is_err());
        assert_eq!(SheetEntry::new(Field::Shuffle, 1).to_raw().unwrap(), 1);
    }

    #[test]
    fn uptime_range() {
        assert_eq!(
            SheetEntry::new(Field::TotalUptime, 0x00FF_FFFF).to_raw().unwrap(),
            0x00FF_FFFF
        );
        assert!(SheetEntry::new(Field::TotalUptime, 0xFF00_0000).to_raw().is_err());
        assert!(SheetEntry::new(Field::TotalUptime, 1 << 32).to_raw().is_err());
    }

    #[test]
    fn dump_lines() {
        let dump = hex_dump(&[0xAB; 20]);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "0010: abababab");
    }
}
