//! Route table for the remote business-card API.
//!
//! | Operation  | Method | Path                         |
//! |------------|--------|------------------------------|
//! | List       | GET    | `/BusinessCards`             |
//! | Create     | POST   | `/BusinessCards` (multipart) |
//! | Update     | PUT    | `/BusinessCards/{id}`        |
//! | Delete     | DELETE | `/BusinessCards/{id}`        |
//! | Export XML | GET    | `/BusinessCards/export/xml`  |
//! | Export CSV | GET    | `/BusinessCards/export/csv`  |

use std::fmt;

use crate::export::ExportFormat;

const CARDS_PATH: &str = "BusinessCards";

/// Literal `message` the backend returns when a card was created.
pub const CREATE_SUCCESS_MESSAGE: &str = "Add card Successfully";

/// One remote call, named for diagnostics and error dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
    ExportXml,
    ExportCsv,
}

impl Operation {
    pub fn export(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Csv => Operation::ExportCsv,
            ExportFormat::Xml => Operation::ExportXml,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operation::List => "load the business cards",
            Operation::Create => "send the business card",
            Operation::Update => "update the business card",
            Operation::Delete => "delete the business card",
            Operation::ExportXml => "download the XML file",
            Operation::ExportCsv => "download the CSV file",
        };
        f.write_str(text)
    }
}

/// Builds absolute endpoint URLs from the configured API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoutes {
    base: String,
}

impl ApiRoutes {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn cards(&self) -> String {
        format!("{}/{}", self.base, CARDS_PATH)
    }

    pub fn card(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base, CARDS_PATH, id)
    }

    pub fn export(&self, format: ExportFormat) -> String {
        format!("{}/{}/export/{}", self.base, CARDS_PATH, format.extension())
    }
}
