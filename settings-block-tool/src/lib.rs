//! Host side companion of `settings-block`: turns block images pulled off a device into CSV
//! sheets and builds images from hand written sheets.

pub mod error;
pub mod image;

mod csv;

use std::fs;
use std::io::Write;
use std::path::Path;

pub use error::Error;
pub use image::{SheetEntry, BLOCK_SIZE, SECTOR_SIZE};
pub use settings_block::Field;

/// The fields of one settings block, in layout order when parsed from an image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsSheet {
    pub entries: Vec<SheetEntry>,
}

impl SettingsSheet {
    /// The value listed for `field`, if any.
    pub fn get(&self, field: Field) -> Option<i64> {
        self.entries
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.value)
    }

    /// Parse a CSV sheet from a string.
    ///
    /// The header must be `key,value`. Keys are the snake case field names, values are decimal
    /// or `0x` prefixed hex; flags also take `true` and `false`. Lines starting with `#` are
    /// skipped.
    pub fn from_csv(content: &str) -> Result<Self, Error> {
        csv::parser::parse_csv(content)
    }

    /// Parse a CSV sheet file at the given `path`.
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        csv::parser::parse_csv(&content)
    }

    /// Serialize this sheet to CSV and return the content as a `String`.
    pub fn to_csv(&self) -> Result<String, Error> {
        csv::writer::write_csv_content(self)
    }

    /// Serialize this sheet to a CSV file at the given `path`.
    pub fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        csv::writer::write_csv(self, path)
    }

    /// Build a sealed block image in memory. Fields not listed stay erased. With `sector` set the
    /// image is padded with `0xFF` to a full disk sector.
    pub fn generate_block(&self, sector: bool) -> Result<Vec<u8>, Error> {
        image::generator::generate_image(self, sector)
    }

    /// Build a block image and write it to `path`.
    pub fn generate_block_file<P: AsRef<Path>>(&self, path: P, sector: bool) -> Result<(), Error> {
        let data = self.generate_block(sector)?;
        fs::File::create(path)?.write_all(&data)?;
        Ok(())
    }

    /// Parse a block image, either the bare block or a sector holding it at offset 0. The image
    /// must pass validation; every field that isn't marked as unset is listed.
    pub fn parse_block(data: &[u8]) -> Result<Self, Error> {
        image::parser::parse_image(data)
    }

    /// Parse a block image given as hex text, as copied from a debugger memory view. Whitespace
    /// is ignored.
    pub fn parse_block_hex(text: &str) -> Result<Self, Error> {
        let digits: String = text.split_whitespace().collect();
        let data = hex::decode(digits)?;
        image::parser::parse_image(&data)
    }

    /// Parse a block image file at the given `path`.
    pub fn parse_block_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let data = fs::read(path)?;
        image::parser::parse_image(&data)
    }
}
