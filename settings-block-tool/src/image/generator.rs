use settings_block::block::ConfigBlock;
use settings_block::layout::ERASED;
use settings_block::platform::SECTOR_SIZE;

use crate::error::Error;
use crate::SettingsSheet;

/// Write the listed fields into a blank block and seal it.
pub(crate) fn generate_block(sheet: &SettingsSheet) -> Result<ConfigBlock, Error> {
    let mut block = ConfigBlock::blank();
    for entry in &sheet.entries {
        block.write_field(entry.field, entry.to_raw()?);
    }
    block.seal();
    Ok(block)
}

pub(crate) fn generate_image(sheet: &SettingsSheet, sector: bool) -> Result<Vec<u8>, Error> {
    let block = generate_block(sheet)?;
    let mut data = block.as_bytes().to_vec();
    if sector {
        data.resize(SECTOR_SIZE, ERASED);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use settings_block::Field;

    use super::*;
    use crate::image::SheetEntry;

    #[test]
    fn unlisted_fields_stay_erased() {
        let sheet = SettingsSheet {
            entries: vec![SheetEntry::new(Field::Volume, -5)],
        };
        let block = generate_block(&sheet).unwrap();
        assert!(block.is_valid());
        assert_eq!(block.as_bytes()[0x04], 0xFB);
        assert_eq!(block.read_field(Field::Contrast), None);
    }

    #[test]
    fn sector_padding() {
        let data = generate_image(&SettingsSheet::default(), true).unwrap();
        assert_eq!(data.len(), SECTOR_SIZE);
        assert!(data[44..].iter().all(|&b| b == ERASED));
    }

    #[test]
    fn out_of_range_value_fails() {
        let sheet = SettingsSheet {
            entries: vec![SheetEntry::new(Field::Backlight, 300)],
        };
        assert!(matches!(
            generate_block(&sheet),
            Err(Error::InvalidValue(_))
        ));
    }
}
