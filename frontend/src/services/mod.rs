pub mod business_cards;
pub mod download;
pub mod notify;
