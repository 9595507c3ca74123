//! Export serializer for a single card.
//!
//! Values are written verbatim: no CSV quoting and no XML escaping. A comma or
//! newline in a field corrupts the CSV, and `<` or `&` corrupts the XML. The
//! backend's handling of escaped input is unverified, so the raw layout is
//! kept.

use crate::model::BusinessCard;

const CSV_HEADER: &str = "Name,Gender,DateOfBirth,Email,Phone,Address,Photo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xml,
}

impl ExportFormat {
    /// Parses the value of the format picker. Empty or unknown means no
    /// format was chosen.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "xml" => Some(ExportFormat::Xml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xml => "application/xml",
        }
    }

    /// File name for a single card exported in the browser.
    pub fn file_name(&self) -> String {
        format!("business_cards.{}", self.extension())
    }

    /// File name for the backend's full export.
    pub fn bulk_file_name(&self) -> String {
        format!("BusinessCards.{}", self.extension())
    }
}

/// A generated file ready to be handed to the browser download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime: &'static str,
    pub content: String,
}

pub fn export_card(card: &BusinessCard, format: ExportFormat) -> ExportFile {
    let content = match format {
        ExportFormat::Csv => to_csv(card),
        ExportFormat::Xml => to_xml(card),
    };
    ExportFile {
        file_name: format.file_name(),
        mime: format.mime(),
        content,
    }
}

fn to_csv(card: &BusinessCard) -> String {
    let row = [
        card.name.as_str(),
        card.gender.as_str(),
        card.date_of_birth.as_str(),
        card.email.as_str(),
        card.phone.as_str(),
        card.address.as_str(),
        card.photo_base64.as_str(),
    ]
    .join(",");
    format!("{}\n{}\n", CSV_HEADER, row)
}

fn to_xml(card: &BusinessCard) -> String {
    let fields = [
        ("name", &card.name),
        ("gender", &card.gender),
        ("dateOfBirth", &card.date_of_birth),
        ("email", &card.email),
        ("phone", &card.phone),
        ("address", &card.address),
        ("photo", &card.photo_base64),
    ];

    let mut out = String::from("<businessCards>\n  <card>\n");
    for (tag, value) in fields {
        out.push_str(&format!("    <{tag}>{value}</{tag}>\n"));
    }
    out.push_str("  </card>\n</businessCards>");
    out
}
