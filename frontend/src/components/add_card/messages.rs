use common::error::CardError;
use common::import::ImportSource;
use common::model::{CardField, CreateCardResponse, EntryMethod, ImportPayload};

pub enum Msg {
    SetMethod(EntryMethod),
    UpdateField(CardField, String),
    PhotoSelected(web_sys::File),
    ImportFileSelected(web_sys::File),
    ImportFileRead(ImportSource),
    SetDragOver(bool),
    QrTextChanged(String),
    ApplyQrText,
    QrImageSelected(web_sys::File),
    QrScanned(String),
    Apply(ImportPayload),
    Clear,
    Submit,
    SubmitFinished(Result<CreateCardResponse, CardError>),
}
