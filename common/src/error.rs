//! Error taxonomy shared by the import, photo, submission and gateway paths.
//!
//! The `Display` text of each variant is what the UI shows in its dialogs, so
//! keep it readable by end users.

use thiserror::Error;

use crate::api::Operation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// CSV row or XML tag missing, or the document itself is unreadable.
    #[error("Malformed import: {0}")]
    MalformedImport(String),

    /// QR payload is not a JSON object.
    #[error("Error parsing QR code data: {0}")]
    Decode(String),

    #[error("File size exceeds the allowed limit of 1 megabyte.")]
    OversizeFile { size: u64 },

    #[error("Unsupported file format. Must be JPEG or PNG.")]
    UnsupportedType(String),

    /// Any failed call against the remote API.
    #[error("Failed to {operation}. Please try again. ({message})")]
    Transport { operation: Operation, message: String },

    /// The backend answered but not with the expected payload.
    #[error("There was an error in the server response: {0}")]
    UnexpectedResponse(String),

    #[error("A business card is already being sent.")]
    SubmissionInFlight,
}

impl CardError {
    pub fn transport(operation: Operation, message: impl Into<String>) -> Self {
        CardError::Transport {
            operation,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_names_the_operation() {
        let err = CardError::transport(Operation::Delete, "HTTP 500");
        assert_eq!(
            err.to_string(),
            "Failed to delete the business card. Please try again. (HTTP 500)"
        );
    }

    #[test]
    fn photo_errors_use_dialog_wording() {
        assert_eq!(
            CardError::OversizeFile { size: 2_000_000 }.to_string(),
            "File size exceeds the allowed limit of 1 megabyte."
        );
        assert_eq!(
            CardError::UnsupportedType("image/gif".into()).to_string(),
            "Unsupported file format. Must be JPEG or PNG."
        );
    }
}
