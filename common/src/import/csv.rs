use ::csv::ReaderBuilder;

use crate::error::{CardError, Result};
use crate::model::ImportPayload;
use crate::photo::jpeg_data_uri;

/// Name, Gender, DateOfBirth, Email, Phone, Address, Photo.
const COLUMNS: usize = 7;

/// Reads the first data row after the header line.
///
/// Quoting is disabled: fields are split on every comma, so values that
/// contain commas shift the columns and the row is rejected.
pub fn parse_csv(content: &str) -> Result<ImportPayload> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(content.as_bytes());

    let record = match reader.records().next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => return Err(CardError::MalformedImport(e.to_string())),
        None => return Err(CardError::MalformedImport("missing data row".into())),
    };

    if record.len() != COLUMNS {
        return Err(CardError::MalformedImport(format!(
            "expected {} columns, found {}",
            COLUMNS,
            record.len()
        )));
    }

    let column = |idx: usize| record.get(idx).map(str::to_string);
    Ok(ImportPayload {
        name: column(0),
        gender: column(1),
        date_of_birth: column(2),
        email: column(3),
        phone: column(4),
        address: column(5),
        photo: record.get(6).map(jpeg_data_uri),
        qr_code_data: None,
    })
}
