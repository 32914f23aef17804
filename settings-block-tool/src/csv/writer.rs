use std::path::Path;

use csv::Writer;

use crate::error::Error;
use crate::SettingsSheet;

/// Serialize a sheet to a CSV file at the given `output_path`, one row per entry in sheet order.
pub(crate) fn write_csv<P: AsRef<Path>>(sheet: &SettingsSheet, output_path: P) -> Result<(), Error> {
    let mut wtr = Writer::from_path(output_path)?;
    write_records(&mut wtr, sheet)
}

/// Serialize a sheet to CSV and return the content as a `String`.
pub(crate) fn write_csv_content(sheet: &SettingsSheet) -> Result<String, Error> {
    let mut wtr = Writer::from_writer(Vec::new());
    write_records(&mut wtr, sheet)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| Error::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::InvalidValue(format!("CSV output is not valid UTF-8: {}", e)))
}

fn write_records<W: std::io::Write>(wtr: &mut Writer<W>, sheet: &SettingsSheet) -> Result<(), Error> {
    wtr.write_record(["key", "value"])?;

    for entry in &sheet.entries {
        let value = entry.value.to_string();
        wtr.write_record([entry.field.name(), value.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
