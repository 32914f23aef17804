use settings_block::block::{ConfigBlock, BLOCK_SIZE};
use settings_block::layout::LAYOUT;
use settings_block::platform::SECTOR_SIZE;

use crate::error::Error;
use crate::image::SheetEntry;
use crate::SettingsSheet;

/// Validate a block image and collect every field that is set.
pub(crate) fn parse_image(data: &[u8]) -> Result<SettingsSheet, Error> {
    if data.len() != BLOCK_SIZE && data.len() != SECTOR_SIZE {
        return Err(Error::InvalidImageSize(data.len()));
    }

    let block = ConfigBlock::from_slice(data).ok_or(Error::InvalidImageSize(data.len()))?;
    block.check()?;

    let entries = LAYOUT
        .iter()
        .filter_map(|spec| {
            block
                .read_field(spec.field)
                .map(|raw| SheetEntry::from_raw(spec.field, raw))
        })
        .collect();

    Ok(SettingsSheet { entries })
}
