//! Search, gender filter and pagination over the loaded cards.
//!
//! Pages are 1-based. Filtering keeps the order the backend returned.

use crate::config::DEFAULT_ITEMS_PER_PAGE;
use crate::model::{BusinessCard, DisplayCard};

#[derive(Debug, Clone)]
pub struct CardListing {
    cards: Vec<DisplayCard>,
    /// Indices into `cards` that pass the current filters.
    filtered: Vec<usize>,
    search_term: String,
    gender_filter: String,
    current_page: usize,
    items_per_page: usize,
}

impl Default for CardListing {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl CardListing {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            cards: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            gender_filter: String::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    /// Replaces the backing list with a fresh load from the backend.
    pub fn load(&mut self, cards: Vec<BusinessCard>) {
        self.cards = cards.into_iter().map(DisplayCard::from).collect();
        self.refilter();
    }

    pub fn cards(&self) -> &[DisplayCard] {
        &self.cards
    }

    pub fn filtered(&self) -> impl Iterator<Item = &DisplayCard> {
        self.filtered.iter().map(|&idx| &self.cards[idx])
    }

    /// Cards matching the current search and gender filter, across all pages.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn gender_filter(&self) -> &str {
        &self.gender_filter
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
        self.refilter();
    }

    /// Empty string disables the gender filter.
    pub fn set_gender_filter(&mut self, gender: impl Into<String>) {
        self.gender_filter = gender.into();
        self.current_page = 1;
        self.refilter();
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.items_per_page)
    }

    /// Returns `false` when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Returns `false` when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Cards on the current page.
    pub fn displayed(&self) -> Vec<&DisplayCard> {
        let start = (self.current_page - 1) * self.items_per_page;
        self.filtered()
            .skip(start)
            .take(self.items_per_page)
            .collect()
    }

    pub fn find(&self, id: i64) -> Option<&DisplayCard> {
        self.cards.iter().find(|c| c.card.id == Some(id))
    }

    /// Replaces the card that has the same identifier. Cards without an
    /// identifier are never matched.
    pub fn apply_update(&mut self, card: BusinessCard) -> bool {
        let Some(id) = card.id else {
            return false;
        };
        match self.cards.iter_mut().find(|c| c.card.id == Some(id)) {
            Some(slot) => {
                *slot = DisplayCard::from(card);
                self.refilter();
                true
            }
            None => false,
        }
    }

    /// Removes exactly the card with `id`, keeping the others in order.
    pub fn apply_delete(&mut self, id: i64) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.card.id != Some(id));
        let removed = self.cards.len() != before;
        if removed {
            self.refilter();
        }
        removed
    }

    fn refilter(&mut self) {
        let term = self.search_term.to_lowercase();
        let gender = self.gender_filter.to_lowercase();
        self.filtered = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.card.name.to_lowercase().contains(&term))
            .filter(|(_, c)| gender.is_empty() || c.card.gender.to_lowercase() == gender)
            .map(|(idx, _)| idx)
            .collect();
        self.current_page = self.current_page.clamp(1, self.total_pages().max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i64, name: &str, gender: &str) -> BusinessCard {
        BusinessCard {
            id: Some(id),
            name: name.into(),
            gender: gender.into(),
            date_of_birth: "1990-01-01T00:00:00".into(),
            ..Default::default()
        }
    }

    fn names(listing: &CardListing) -> Vec<String> {
        listing
            .displayed()
            .iter()
            .map(|c| c.card.name.clone())
            .collect()
    }

    #[test]
    fn empty_listing_has_no_pages() {
        let mut listing = CardListing::default();
        assert_eq!(listing.total_pages(), 0);
        assert_eq!(listing.current_page(), 1);
        assert!(listing.displayed().is_empty());
        assert!(!listing.next_page());
        assert!(!listing.prev_page());
    }

    #[test]
    fn gender_filter_is_case_insensitive() {
        let mut listing = CardListing::default();
        listing.load(vec![
            card(1, "Ana", "Female"),
            card(2, "Omar", "male"),
            card(3, "Lina", "FEMALE"),
        ]);
        listing.set_gender_filter("female");
        assert_eq!(names(&listing), ["Ana", "Lina"]);
        listing.set_gender_filter("");
        assert_eq!(listing.filtered_len(), 3);
    }

    #[test]
    fn filter_change_returns_to_first_page() {
        let mut listing = CardListing::new(1);
        listing.load(vec![card(1, "Ana", "F"), card(2, "Dana", "F"), card(3, "Omar", "M")]);
        assert!(listing.next_page());
        assert_eq!(listing.current_page(), 2);
        listing.set_search_term("a");
        assert_eq!(listing.current_page(), 1);
    }

    #[test]
    fn reload_clamps_page() {
        let mut listing = CardListing::new(2);
        listing.load((1..=6).map(|i| card(i, "x", "F")).collect());
        listing.next_page();
        listing.next_page();
        assert_eq!(listing.current_page(), 3);
        listing.load((1..=3).map(|i| card(i, "x", "F")).collect());
        assert_eq!(listing.current_page(), 2);
    }

    #[test]
    fn update_replaces_by_id_and_redecorates() {
        let mut listing = CardListing::default();
        listing.load(vec![card(1, "Ana", "F"), card(2, "Omar", "M")]);
        let mut edited = card(2, "Omar K", "M");
        edited.date_of_birth = "1980-05-06T00:00:00".into();
        assert!(listing.apply_update(edited));
        let found = listing.find(2).unwrap();
        assert_eq!(found.card.name, "Omar K");
        assert_eq!(found.date, "1980-05-06");
        assert_eq!(listing.cards()[0].card.name, "Ana");

        assert!(!listing.apply_update(card(9, "Ghost", "M")));
        assert!(!listing.apply_update(BusinessCard::default()));
    }

    #[test]
    fn update_can_drop_a_card_out_of_the_filter() {
        let mut listing = CardListing::default();
        listing.load(vec![card(1, "Ana", "F"), card(2, "Dana", "F")]);
        listing.set_search_term("ana");
        assert_eq!(listing.filtered_len(), 2);
        listing.apply_update(card(2, "Mira", "F"));
        assert_eq!(names(&listing), ["Ana"]);
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let mut listing = CardListing::default();
        listing.load(vec![card(1, "Ana", "F")]);
        assert!(!listing.apply_delete(42));
        assert_eq!(listing.cards().len(), 1);
    }
}
