use serde_json::{Map, Value};

use crate::error::{CardError, Result};
use crate::model::ImportPayload;

/// Maps a QR JSON object onto the card fields. Absent or null keys become
/// empty strings; the raw text is kept in `qr_code_data`.
pub fn parse_qr_json(content: &str) -> Result<ImportPayload> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| CardError::Decode(e.to_string()))?;
    // Scalars and arrays carry none of the keys; only `null` is unusable.
    let empty = Map::new();
    let object = match &value {
        Value::Object(map) => map,
        Value::Null => return Err(CardError::Decode("QR payload is null".into())),
        _ => &empty,
    };

    Ok(ImportPayload {
        name: Some(field(object, "Name")),
        gender: Some(field(object, "Gender")),
        date_of_birth: Some(field(object, "DateOfBirth")),
        email: Some(field(object, "Email")),
        phone: Some(field(object, "Phone")),
        address: Some(field(object, "Address")),
        photo: Some(field(object, "Photo")),
        qr_code_data: Some(content.to_string()),
    })
}

fn field(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_keys() {
        let content = r#"{"Name":"Ana","Gender":"Female","DateOfBirth":"1990-01-31",
            "Email":"ana@example.com","Phone":790000000,"Address":"Amman","Photo":"data:image/png;base64,QUJD"}"#;
        let payload = parse_qr_json(content).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ana"));
        assert_eq!(payload.phone.as_deref(), Some("790000000"));
        assert_eq!(payload.photo.as_deref(), Some("data:image/png;base64,QUJD"));
        assert_eq!(payload.qr_code_data.as_deref(), Some(content));
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let payload = parse_qr_json(r#"{"Email":"ana@example.com","Name":null}"#).unwrap();
        assert_eq!(payload.email.as_deref(), Some("ana@example.com"));
        assert_eq!(payload.name.as_deref(), Some(""));
        assert_eq!(payload.address.as_deref(), Some(""));
        assert_eq!(payload.photo.as_deref(), Some(""));
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        assert!(matches!(
            parse_qr_json("https://example.com/card/5"),
            Err(CardError::Decode(_))
        ));
    }

    #[test]
    fn null_is_a_decode_error() {
        assert!(matches!(parse_qr_json("null"), Err(CardError::Decode(_))));
    }

    #[test]
    fn non_object_json_yields_empty_fields() {
        for content in ["123", "\"hello\"", "[1,2]", "true"] {
            let payload = parse_qr_json(content).unwrap();
            assert_eq!(payload.name.as_deref(), Some(""));
            assert_eq!(payload.email.as_deref(), Some(""));
            assert_eq!(payload.photo.as_deref(), Some(""));
            assert_eq!(payload.qr_code_data.as_deref(), Some(content));
        }
    }
}
