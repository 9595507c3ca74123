//! Record normalizer: turns an import source into an [`ImportPayload`].
//!
//! The source kind is resolved once, at the point where the file or scanned
//! text enters the application, and each kind is handled by its own pure
//! parser. File imports (CSV, XML) are strict: a missing row, column or tag
//! fails the whole import. QR imports are lenient: absent keys default to an
//! empty string, since third-party generators often fill only some of them.

mod csv;
mod qr;
mod xml;

use std::path::Path;

use crate::error::Result;
use crate::model::ImportPayload;

pub use self::csv::parse_csv;
pub use self::qr::parse_qr_json;
pub use self::xml::parse_xml;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Csv,
    Xml,
    QrJson,
}

impl ImportKind {
    /// Resolves an uploaded file to an import kind from its MIME type, falling
    /// back to the file extension. `None` means the file is not importable.
    pub fn from_file(mime: &str, file_name: &str) -> Option<Self> {
        match mime {
            "text/csv" => Some(ImportKind::Csv),
            "text/xml" | "application/xml" => Some(ImportKind::Xml),
            _ => {
                let extension = Path::new(file_name)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.to_ascii_lowercase());
                match extension.as_deref() {
                    Some("csv") => Some(ImportKind::Csv),
                    Some("xml") => Some(ImportKind::Xml),
                    _ => None,
                }
            }
        }
    }
}

/// Raw import text tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    Csv(String),
    Xml(String),
    QrJson(String),
}

impl ImportSource {
    pub fn new(kind: ImportKind, content: String) -> Self {
        match kind {
            ImportKind::Csv => ImportSource::Csv(content),
            ImportKind::Xml => ImportSource::Xml(content),
            ImportKind::QrJson => ImportSource::QrJson(content),
        }
    }

    pub fn kind(&self) -> ImportKind {
        match self {
            ImportSource::Csv(_) => ImportKind::Csv,
            ImportSource::Xml(_) => ImportKind::Xml,
            ImportSource::QrJson(_) => ImportKind::QrJson,
        }
    }
}

pub fn normalize(source: &ImportSource) -> Result<ImportPayload> {
    match source {
        ImportSource::Csv(content) => parse_csv(content),
        ImportSource::Xml(content) => parse_xml(content),
        ImportSource::QrJson(content) => parse_qr_json(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;

    #[test]
    fn kind_from_mime_type() {
        assert_eq!(ImportKind::from_file("text/csv", "x.bin"), Some(ImportKind::Csv));
        assert_eq!(ImportKind::from_file("text/xml", "x.bin"), Some(ImportKind::Xml));
        assert_eq!(
            ImportKind::from_file("application/xml", "cards"),
            Some(ImportKind::Xml)
        );
    }

    #[test]
    fn kind_falls_back_to_extension() {
        assert_eq!(ImportKind::from_file("", "cards.CSV"), Some(ImportKind::Csv));
        assert_eq!(
            ImportKind::from_file("application/vnd.ms-excel", "cards.csv"),
            Some(ImportKind::Csv)
        );
        assert_eq!(ImportKind::from_file("", "cards.xml"), Some(ImportKind::Xml));
        assert_eq!(ImportKind::from_file("application/pdf", "cards.pdf"), None);
        assert_eq!(ImportKind::from_file("", "cards"), None);
    }

    #[test]
    fn normalize_routes_by_kind() {
        let source = ImportSource::new(ImportKind::QrJson, r#"{"Name":"Ana"}"#.into());
        assert_eq!(source.kind(), ImportKind::QrJson);
        let payload = normalize(&source).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ana"));

        let broken = ImportSource::new(ImportKind::Csv, "Name\n".into());
        assert!(matches!(
            normalize(&broken),
            Err(CardError::MalformedImport(_))
        ));
    }
}
