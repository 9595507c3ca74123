//! Packaging of the add-card form for `POST /BusinessCards`, and the guard
//! that keeps at most one submission in flight.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{CardError, Result};
use crate::model::FormState;
use crate::photo::strip_data_uri;

/// Multipart part name for the raw import file, attached by the frontend.
pub const IMPORT_FILE_PART: &str = "file";

/// Ordered text parts of the multipart body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub parts: Vec<(&'static str, String)>,
}

impl SubmissionForm {
    /// Builds the text parts from the form. Empty fields are left out; the
    /// photo is sent as raw base64 without its data-URI prefix.
    pub fn from_form(form: &FormState) -> Self {
        let mut parts = Vec::new();
        let mut push = |name: &'static str, value: &str| {
            if !value.is_empty() {
                parts.push((name, value.to_string()));
            }
        };

        push("PhotoBase64", strip_data_uri(&form.photo));
        push("qrCodeData", &form.qr_code_data);
        push("Name", &form.name);
        push("Gender", &form.gender);
        push("DateOfBirth", &form.date_of_birth);
        push("Email", &form.email);
        push("Phone", &form.phone);
        push("Address", &form.address);
        push("method", form.method.as_str());

        Self { parts }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|(part, _)| *part == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Single-in-flight guard for submissions.
///
/// Clones share the same flag. The flag is released when the returned
/// [`SubmissionTicket`] is dropped, whichever way the request ended.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGuard {
    busy: Rc<Cell<bool>>,
}

impl SubmissionGuard {
    pub fn try_begin(&self) -> Result<SubmissionTicket> {
        if self.busy.replace(true) {
            return Err(CardError::SubmissionInFlight);
        }
        Ok(SubmissionTicket {
            busy: Rc::clone(&self.busy),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

#[derive(Debug)]
pub struct SubmissionTicket {
    busy: Rc<Cell<bool>>,
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryMethod;

    #[test]
    fn parts_follow_form_order_and_skip_empty_fields() {
        let form = FormState {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            photo: "data:image/png;base64,QUJD".into(),
            ..Default::default()
        };
        let submission = SubmissionForm::from_form(&form);
        let names: Vec<&str> = submission.parts.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["PhotoBase64", "Name", "Email", "method"]);
        assert_eq!(submission.get("PhotoBase64"), Some("QUJD"));
        assert_eq!(submission.get("method"), Some("manual"));
        assert_eq!(submission.get("qrCodeData"), None);
    }

    #[test]
    fn qr_text_is_sent_when_present() {
        let form = FormState {
            qr_code_data: r#"{"Name":"Ana"}"#.into(),
            method: EntryMethod::Imported,
            ..Default::default()
        };
        let submission = SubmissionForm::from_form(&form);
        assert_eq!(submission.get("qrCodeData"), Some(r#"{"Name":"Ana"}"#));
        assert_eq!(submission.get("method"), Some("imported"));
        assert_eq!(submission.get("PhotoBase64"), None);
    }

    #[test]
    fn guard_allows_one_submission_at_a_time() {
        let guard = SubmissionGuard::default();
        let shared = guard.clone();

        let ticket = guard.try_begin().unwrap();
        assert!(shared.is_busy());
        assert_eq!(
            shared.try_begin().unwrap_err(),
            CardError::SubmissionInFlight
        );

        drop(ticket);
        assert!(!guard.is_busy());
        assert!(shared.try_begin().is_ok());
    }
}
