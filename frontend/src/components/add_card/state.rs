use common::config::ClientConfig;
use common::model::{FormState, ImportPayload};
use common::submit::SubmissionGuard;

use crate::services::business_cards::BusinessCardService;

/// State of the add-card view. Owned by this component instance only.
pub struct AddCardComponent {
    pub form: FormState,

    /// Last successfully parsed file import, shown as a preview.
    pub preview: Option<ImportPayload>,

    /// Raw CSV/XML file, sent along with the submission.
    pub selected_file: Option<web_sys::File>,

    /// Contents of the QR text box.
    pub qr_text: String,

    pub drag_over: bool,

    pub guard: SubmissionGuard,

    pub service: BusinessCardService,
}

impl AddCardComponent {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            form: FormState::default(),
            preview: None,
            selected_file: None,
            qr_text: String::new(),
            drag_over: false,
            guard: SubmissionGuard::default(),
            service: BusinessCardService::new(&config.api_base_url),
        }
    }

    /// Back to an empty form after a successful submission.
    pub fn reset(&mut self) {
        self.form.reset();
        self.preview = None;
        self.selected_file = None;
        self.qr_text.clear();
    }
}
