use serde::Deserialize;

use crate::api::CREATE_SUCCESS_MESSAGE;

/// Body returned by `POST /BusinessCards`. Only `message` is inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateCardResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl CreateCardResponse {
    pub fn is_success(&self) -> bool {
        self.message.as_deref() == Some(CREATE_SUCCESS_MESSAGE)
    }
}
