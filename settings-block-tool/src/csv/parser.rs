use settings_block::layout::Encoding;
use settings_block::Field;

use crate::error::Error;
use crate::image::SheetEntry;
use crate::SettingsSheet;

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    key: String,
    value: String,
}

/// Parse CSV content from a string into a [`SettingsSheet`].
pub(crate) fn parse_csv(content: &str) -> Result<SettingsSheet, Error> {
    let mut sheet = SettingsSheet::default();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let field: Field = row
            .key
            .parse()
            .map_err(|_| Error::UnknownKey(row.key.clone()))?;

        if sheet.get(field).is_some() {
            return Err(Error::DuplicateKey(row.key));
        }

        let entry = SheetEntry::new(field, parse_value(field, &row.value)?);
        // range check now rather than when generating
        entry.to_raw()?;
        sheet.entries.push(entry);
    }

    Ok(sheet)
}

fn parse_value(field: Field, value: &str) -> Result<i64, Error> {
    if matches!(field.spec().encoding, Encoding::Flag { .. }) {
        match value {
            "true" => return Ok(1),
            "false" => return Ok(0),
            _ => {}
        }
    }

    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => value.parse::<i64>(),
    };
    parsed.map_err(|e| Error::InvalidValue(format!("{field}: {value:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values() {
        assert_eq!(parse_value(Field::Volume, "-12").unwrap(), -12);
        assert_eq!(parse_value(Field::TotalUptime, "0x10").unwrap(), 16);
        assert_eq!(parse_value(Field::Shuffle, "true").unwrap(), 1);
        assert!(parse_value(Field::Contrast, "true").is_err());
        assert!(parse_value(Field::Contrast, "").is_err());
    }

    #[test]
    fn comments_and_whitespace() {
        let sheet = parse_csv("key,value\n# sound\nvolume, 40\n  bass ,-3\n").unwrap();
        assert_eq!(
            sheet.entries,
            vec![
                SheetEntry::new(Field::Volume, 40),
                SheetEntry::new(Field::Bass, -3)
            ]
        );
    }

    #[test]
    fn duplicate_key() {
        assert!(matches!(
            parse_csv("key,value\nvolume,1\nvolume,2\n"),
            Err(Error::DuplicateKey(key)) if key == "volume"
        ));
    }
}
