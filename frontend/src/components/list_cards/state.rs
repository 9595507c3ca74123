use std::collections::HashMap;

use common::config::ClientConfig;
use common::export::ExportFormat;
use common::listing::CardListing;
use common::model::BusinessCard;

use crate::services::business_cards::BusinessCardService;

pub struct ListCardsComponent {
    pub listing: CardListing,

    pub show_splash: bool,

    /// Working copy of the card open in the edit dialog.
    pub editing: Option<BusinessCard>,

    /// Export format picked per card id.
    pub export_choice: HashMap<i64, ExportFormat>,

    /// Set once the first load attempt has finished, successful or not.
    pub loaded: bool,

    pub service: BusinessCardService,
}

impl ListCardsComponent {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            listing: CardListing::new(config.items_per_page),
            show_splash: false,
            editing: None,
            export_choice: HashMap::new(),
            loaded: false,
            service: BusinessCardService::new(&config.api_base_url),
        }
    }
}
