//! Remote gateway for the business-card API.
//!
//! One request per call, no retries and no caching. Any network failure or
//! non-2xx status comes back as [`CardError::Transport`] naming the
//! operation, for the calling view to report.

use gloo_console::log;
use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use common::api::{ApiRoutes, Operation};
use common::error::{CardError, Result};
use common::export::ExportFormat;
use common::model::{BusinessCard, CreateCardResponse};
use common::submit::{SubmissionForm, IMPORT_FILE_PART};

#[derive(Clone, Debug, PartialEq)]
pub struct BusinessCardService {
    routes: ApiRoutes,
}

impl BusinessCardService {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            routes: ApiRoutes::new(api_base_url),
        }
    }

    /// `GET /BusinessCards`
    pub async fn list(&self) -> Result<Vec<BusinessCard>> {
        log!("Fetching business cards from the server");
        let response = Request::get(&self.routes.cards())
            .send()
            .await
            .map_err(transport(Operation::List))?;
        let response = ensure_ok(Operation::List, response)?;
        response
            .json::<Vec<BusinessCard>>()
            .await
            .map_err(transport(Operation::List))
    }

    /// `POST /BusinessCards` as multipart. Succeeds only when the backend
    /// answers with the creation sentinel.
    pub async fn create(
        &self,
        submission: &SubmissionForm,
        import_file: Option<&File>,
    ) -> Result<CreateCardResponse> {
        let body = multipart_body(submission, import_file)?;
        let response = Request::post(&self.routes.cards())
            .body(body)
            .map_err(transport(Operation::Create))?
            .send()
            .await
            .map_err(transport(Operation::Create))?;
        let response = ensure_ok(Operation::Create, response)?;
        let text = response
            .text()
            .await
            .map_err(transport(Operation::Create))?;

        let parsed: CreateCardResponse = serde_json::from_str(&text).unwrap_or_default();
        if parsed.is_success() {
            Ok(parsed)
        } else {
            Err(CardError::UnexpectedResponse(
                parsed.message.unwrap_or(text),
            ))
        }
    }

    /// `PUT /BusinessCards/{id}` with the full record. Falls back to the sent
    /// record when the backend answers without a readable body.
    pub async fn update(&self, card: &BusinessCard) -> Result<BusinessCard> {
        let id = card.id.ok_or_else(|| {
            CardError::transport(Operation::Update, "card has no identifier")
        })?;
        let response = Request::put(&self.routes.card(id))
            .json(card)
            .map_err(transport(Operation::Update))?
            .send()
            .await
            .map_err(transport(Operation::Update))?;
        let response = ensure_ok(Operation::Update, response)?;
        let text = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str::<BusinessCard>(&text)
            .ok()
            .filter(|updated| updated.id == Some(id))
            .unwrap_or_else(|| card.clone()))
    }

    /// `DELETE /BusinessCards/{id}`
    pub async fn delete(&self, id: i64) -> Result<()> {
        let response = Request::delete(&self.routes.card(id))
            .send()
            .await
            .map_err(transport(Operation::Delete))?;
        ensure_ok(Operation::Delete, response)?;
        Ok(())
    }

    /// `GET /BusinessCards/export/{csv|xml}`, returned as raw bytes.
    pub async fn export(&self, format: ExportFormat) -> Result<Vec<u8>> {
        let operation = Operation::export(format);
        let response = Request::get(&self.routes.export(format))
            .send()
            .await
            .map_err(transport(operation))?;
        let response = ensure_ok(operation, response)?;
        response.binary().await.map_err(transport(operation))
    }
}

fn transport<E: std::fmt::Display>(operation: Operation) -> impl Fn(E) -> CardError {
    move |err| CardError::transport(operation, err.to_string())
}

fn ensure_ok(operation: Operation, response: Response) -> Result<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(CardError::transport(
            operation,
            format!("HTTP {} {}", response.status(), response.status_text()),
        ))
    }
}

fn multipart_body(submission: &SubmissionForm, import_file: Option<&File>) -> Result<FormData> {
    let js_err = |err: wasm_bindgen::JsValue| CardError::transport(Operation::Create, format!("{:?}", err));

    let form_data = FormData::new().map_err(js_err)?;
    for (name, value) in &submission.parts {
        form_data.append_with_str(name, value).map_err(js_err)?;
    }
    if let Some(file) = import_file {
        form_data
            .append_with_blob_and_filename(IMPORT_FILE_PART, file, &file.name())
            .map_err(js_err)?;
    }
    Ok(form_data)
}
