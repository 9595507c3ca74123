pub mod add_card;
pub mod card_grid;
pub mod list_cards;
pub mod navbar;
pub mod top_sheet;
