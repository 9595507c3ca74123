/// How the add-card form is being filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryMethod {
    #[default]
    Manual,
    Imported,
}

impl EntryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMethod::Manual => "manual",
            EntryMethod::Imported => "imported",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "manual" => Some(EntryMethod::Manual),
            "imported" => Some(EntryMethod::Imported),
            _ => None,
        }
    }
}

/// Editable state of the add-card view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Photo as a data URI (`data:image/...;base64,...`) or empty.
    pub photo: String,
    pub qr_code_data: String,
    pub method: EntryMethod,
}

impl FormState {
    /// Back to defaults after a successful submission.
    pub fn reset(&mut self) {
        *self = FormState::default();
    }

    /// Clears every field but keeps the current entry method.
    pub fn clear(&mut self) {
        let method = self.method;
        *self = FormState {
            method,
            ..Default::default()
        };
    }
}
