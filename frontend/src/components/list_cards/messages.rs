use common::error::CardError;
use common::export::ExportFormat;
use common::model::{BusinessCard, CardField};

pub enum Msg {
    Load,
    Loaded(Result<Vec<BusinessCard>, CardError>),
    HideSplash,
    SetSearch(String),
    SetGender(String),
    NextPage,
    PrevPage,
    OpenEdit(i64),
    EditField(CardField, String),
    CloseEdit,
    SubmitEdit,
    EditSaved(Result<BusinessCard, CardError>),
    Delete(i64),
    Deleted(i64, Result<(), CardError>),
    SetExportFormat(i64, String),
    ExportCard(i64),
    DownloadAll(ExportFormat),
    Downloaded(ExportFormat, Result<Vec<u8>, CardError>),
}
