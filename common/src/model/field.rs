use crate::model::{BusinessCard, FormState};

/// A contact field editable through a text input, in the add form or in the
/// edit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Name,
    Gender,
    DateOfBirth,
    Email,
    Phone,
    Address,
}

impl CardField {
    pub const ALL: [CardField; 6] = [
        CardField::Name,
        CardField::Gender,
        CardField::DateOfBirth,
        CardField::Email,
        CardField::Phone,
        CardField::Address,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CardField::Name => "Name",
            CardField::Gender => "Gender",
            CardField::DateOfBirth => "Date of birth",
            CardField::Email => "Email",
            CardField::Phone => "Phone",
            CardField::Address => "Address",
        }
    }

    pub fn form_value<'a>(&self, form: &'a FormState) -> &'a str {
        match self {
            CardField::Name => &form.name,
            CardField::Gender => &form.gender,
            CardField::DateOfBirth => &form.date_of_birth,
            CardField::Email => &form.email,
            CardField::Phone => &form.phone,
            CardField::Address => &form.address,
        }
    }

    pub fn set_in_form(&self, form: &mut FormState, value: String) {
        match self {
            CardField::Name => form.name = value,
            CardField::Gender => form.gender = value,
            CardField::DateOfBirth => form.date_of_birth = value,
            CardField::Email => form.email = value,
            CardField::Phone => form.phone = value,
            CardField::Address => form.address = value,
        }
    }

    pub fn card_value<'a>(&self, card: &'a BusinessCard) -> &'a str {
        match self {
            CardField::Name => &card.name,
            CardField::Gender => &card.gender,
            CardField::DateOfBirth => &card.date_of_birth,
            CardField::Email => &card.email,
            CardField::Phone => &card.phone,
            CardField::Address => &card.address,
        }
    }

    pub fn set_in_card(&self, card: &mut BusinessCard, value: String) {
        match self {
            CardField::Name => card.name = value,
            CardField::Gender => card.gender = value,
            CardField::DateOfBirth => card.date_of_birth = value,
            CardField::Email => card.email = value,
            CardField::Phone => card.phone = value,
            CardField::Address => card.address = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_and_getters_agree() {
        let mut form = FormState::default();
        let mut card = BusinessCard::default();
        for (idx, field) in CardField::ALL.iter().enumerate() {
            let value = format!("value-{}", idx);
            field.set_in_form(&mut form, value.clone());
            field.set_in_card(&mut card, value.clone());
            assert_eq!(field.form_value(&form), value);
            assert_eq!(field.card_value(&card), value);
        }
        assert_eq!(form.email, "value-3");
        assert_eq!(card.address, "value-5");
    }
}
