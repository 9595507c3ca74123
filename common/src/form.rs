//! Form reconciler: merges an [`ImportPayload`] into the live [`FormState`].
//!
//! Only fields present in the payload are written; `method` is never touched.
//! No validation happens here.

use crate::error::Result;
use crate::model::{FormState, ImportPayload};

pub fn reconcile(form: &mut FormState, payload: &ImportPayload) {
    let targets: [(&mut String, &Option<String>); 8] = [
        (&mut form.name, &payload.name),
        (&mut form.gender, &payload.gender),
        (&mut form.date_of_birth, &payload.date_of_birth),
        (&mut form.email, &payload.email),
        (&mut form.phone, &payload.phone),
        (&mut form.address, &payload.address),
        (&mut form.photo, &payload.photo),
        (&mut form.qr_code_data, &payload.qr_code_data),
    ];
    for (slot, value) in targets {
        if let Some(value) = value {
            slot.clone_from(value);
        }
    }
}

/// Applies the outcome of an import. On error the form is left as it was and
/// the error is handed back for reporting.
pub fn apply_import(form: &mut FormState, outcome: Result<ImportPayload>) -> Result<()> {
    let payload = outcome?;
    reconcile(form, &payload);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;
    use crate::import::parse_qr_json;
    use crate::model::EntryMethod;

    fn existing() -> FormState {
        FormState {
            name: "Old".into(),
            phone: "111".into(),
            photo: "data:image/png;base64,AAAA".into(),
            method: EntryMethod::Imported,
            ..Default::default()
        }
    }

    #[test]
    fn only_present_fields_are_written() {
        let mut form = existing();
        reconcile(&mut form, &ImportPayload::photo("data:image/jpeg;base64,QUJD"));
        assert_eq!(form.photo, "data:image/jpeg;base64,QUJD");
        assert_eq!(form.name, "Old");
        assert_eq!(form.phone, "111");
        assert_eq!(form.method, EntryMethod::Imported);
    }

    #[test]
    fn reconcile_is_idempotent() {
        let payload = parse_qr_json(r#"{"Name":"Ana","Phone":"222"}"#).unwrap();
        let mut once = existing();
        reconcile(&mut once, &payload);
        let mut twice = once.clone();
        reconcile(&mut twice, &payload);
        assert_eq!(once, twice);
        assert_eq!(once.name, "Ana");
        assert_eq!(once.photo, "");
    }

    #[test]
    fn failed_import_leaves_form_untouched() {
        let mut form = existing();
        let before = form.clone();
        let err = apply_import(&mut form, parse_qr_json("{not json")).unwrap_err();
        assert!(matches!(err, CardError::Decode(_)));
        assert_eq!(form, before);
    }
}
