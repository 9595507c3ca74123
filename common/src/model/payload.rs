/// Fields extracted from one import (CSV row, XML document, QR text or photo
/// upload).
///
/// A `None` field was not carried by the import and must not touch the form.
/// CSV, XML and QR imports fill all seven contact fields; a photo upload only
/// fills `photo`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportPayload {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Always a data URI, except for QR imports which pass the value through.
    pub photo: Option<String>,
    /// Raw QR text, only set by QR imports.
    pub qr_code_data: Option<String>,
}

impl ImportPayload {
    /// Payload for a freshly encoded photo.
    pub fn photo(data_uri: impl Into<String>) -> Self {
        Self {
            photo: Some(data_uri.into()),
            ..Default::default()
        }
    }
}
