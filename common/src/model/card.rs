use serde::{Deserialize, Serialize};

use crate::photo::jpeg_data_uri;

/// A business card as stored by the backend.
///
/// The backend assigns `id` on creation; from then on it is the only key used
/// for update and delete. `photo_base64` carries raw base64 without any
/// `data:` prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub gender: String,
    /// ISO-8601, usually with a time part (`1985-10-03T00:00:00`).
    pub date_of_birth: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub photo_base64: String,
}

/// A card decorated for the listing view. Rebuilt from the [`BusinessCard`]
/// every time the list is reloaded or a card is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCard {
    pub card: BusinessCard,
    pub photo_url: String,
    /// `date_of_birth` without its time part.
    pub date: String,
}

impl From<BusinessCard> for DisplayCard {
    fn from(card: BusinessCard) -> Self {
        let photo_url = jpeg_data_uri(&card.photo_base64);
        let date = card
            .date_of_birth
            .split('T')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            card,
            photo_url,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_record() {
        let json = r#"{
            "id": 5,
            "name": "Ana",
            "gender": "Female",
            "dateOfBirth": "1985-10-03T00:00:00",
            "email": "ana@example.com",
            "phone": "0790000000",
            "address": "Amman",
            "photoBase64": "AAAA",
            "createdAt": "ignored"
        }"#;
        let card: BusinessCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, Some(5));
        assert_eq!(card.date_of_birth, "1985-10-03T00:00:00");
        assert_eq!(card.photo_base64, "AAAA");
    }

    #[test]
    fn new_card_serializes_without_id() {
        let card = BusinessCard {
            name: "Ana".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["photoBase64"], "");
    }

    #[test]
    fn display_card_strips_time_and_wraps_photo() {
        let display = DisplayCard::from(BusinessCard {
            id: Some(1),
            date_of_birth: "1990-01-31T00:00:00".into(),
            photo_base64: "QUJD".into(),
            ..Default::default()
        });
        assert_eq!(display.date, "1990-01-31");
        assert_eq!(display.photo_url, "data:image/jpeg;base64,QUJD");
    }

    #[test]
    fn display_card_keeps_plain_dates() {
        let display = DisplayCard::from(BusinessCard {
            date_of_birth: "1990-01-31".into(),
            ..Default::default()
        });
        assert_eq!(display.date, "1990-01-31");
    }
}
