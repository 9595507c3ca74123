pub mod card;
pub mod field;
pub mod form_state;
pub mod payload;
pub mod response;

pub use card::{BusinessCard, DisplayCard};
pub use field::CardField;
pub use form_state::{EntryMethod, FormState};
pub use payload::ImportPayload;
pub use response::CreateCardResponse;
