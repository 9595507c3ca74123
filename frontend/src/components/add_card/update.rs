//! Update function for the add-card view.
//!
//! File reads, image decoding and the HTTP submission run in `spawn_local`
//! tasks and report back through messages. Nothing guards against two file
//! reads racing; the last one to finish wins.

use gloo_console::{error, log};
use gloo_file::futures::{read_as_bytes, read_as_text};
use gloo_file::File;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::CardError;
use common::form::{apply_import, reconcile};
use common::import::{normalize, parse_qr_json, ImportKind, ImportSource};
use common::model::{EntryMethod, ImportPayload};
use common::photo::{decode_qr_image, encode_photo, validate_photo};
use common::submit::SubmissionForm;

use crate::services::notify::{alert, show_toast};

use super::messages::Msg;
use super::state::AddCardComponent;

pub fn update(component: &mut AddCardComponent, ctx: &Context<AddCardComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetMethod(method) => {
            component.form.method = method;
            true
        }
        Msg::UpdateField(field, value) => {
            field.set_in_form(&mut component.form, value);
            true
        }
        Msg::PhotoSelected(file) => {
            let file = File::from(file);
            let mime = file.raw_mime_type();
            if let Err(err) = validate_photo(file.size(), &mime) {
                error!(err.to_string());
                alert(&err.to_string());
                return false;
            }

            let link = ctx.link().clone();
            spawn_local(async move {
                match read_as_bytes(&file).await {
                    Ok(bytes) => match encode_photo(&mime, &bytes) {
                        Ok(data_uri) => link.send_message(Msg::Apply(ImportPayload::photo(data_uri))),
                        Err(err) => alert(&err.to_string()),
                    },
                    Err(err) => error!(format!("Error reading photo: {}", err)),
                }
            });
            false
        }
        Msg::ImportFileSelected(file) => {
            component.selected_file = Some(file.clone());
            component.form.method = EntryMethod::Imported;

            let file = File::from(file);
            let Some(kind) = ImportKind::from_file(&file.raw_mime_type(), &file.name()) else {
                log!(format!(
                    "Ignoring {} ({}): not a CSV or XML file",
                    file.name(),
                    file.raw_mime_type()
                ));
                return true;
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                match read_as_text(&file).await {
                    Ok(content) => link.send_message(Msg::ImportFileRead(ImportSource::new(kind, content))),
                    Err(err) => error!(format!("Error reading {}: {}", file.name(), err)),
                }
            });
            true
        }
        Msg::ImportFileRead(source) => match normalize(&source) {
            Ok(payload) => {
                log!(format!("Parsed {:?} import", source.kind()));
                reconcile(&mut component.form, &payload);
                component.preview = Some(payload);
                true
            }
            Err(err) => {
                error!(err.to_string());
                show_toast(&err.to_string());
                false
            }
        },
        Msg::SetDragOver(over) => {
            let changed = component.drag_over != over;
            component.drag_over = over;
            changed
        }
        Msg::QrTextChanged(text) => {
            component.qr_text = text;
            false
        }
        Msg::ApplyQrText => {
            let text = component.qr_text.clone();
            apply_qr(component, &text)
        }
        Msg::QrImageSelected(file) => {
            let file = File::from(file);
            let link = ctx.link().clone();
            spawn_local(async move {
                let bytes = match read_as_bytes(&file).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        error!(format!("Error reading QR image: {}", err));
                        return;
                    }
                };
                match decode_qr_image(&bytes) {
                    Ok(Some(text)) => {
                        log!(format!("QR Code scanned from image: {}", text));
                        link.send_message(Msg::QrScanned(text));
                    }
                    Ok(None) => log!("No QR code found in the image."),
                    Err(err) => error!(format!("Could not read QR image: {}", err)),
                }
            });
            false
        }
        Msg::QrScanned(text) => {
            component.qr_text = text.clone();
            apply_qr(component, &text)
        }
        Msg::Apply(payload) => {
            reconcile(&mut component.form, &payload);
            true
        }
        Msg::Clear => {
            component.form.clear();
            component.preview = None;
            component.selected_file = None;
            true
        }
        Msg::Submit => {
            let ticket = match component.guard.try_begin() {
                Ok(ticket) => ticket,
                Err(err) => {
                    show_toast(&err.to_string());
                    return false;
                }
            };

            let submission = SubmissionForm::from_form(&component.form);
            if submission.get("PhotoBase64").is_none() {
                error!("Photo is null or empty");
            }
            let file = component.selected_file.clone();
            let service = component.service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = service.create(&submission, file.as_ref()).await;
                drop(ticket);
                link.send_message(Msg::SubmitFinished(outcome));
            });
            true
        }
        Msg::SubmitFinished(outcome) => {
            match outcome {
                Ok(response) => {
                    log!(format!(
                        "Business card added successfully: {}",
                        response.message.unwrap_or_default()
                    ));
                    alert("Business card sent successfully!");
                    component.reset();
                }
                Err(err @ CardError::UnexpectedResponse(_)) => {
                    error!(format!("Unexpected response: {}", err));
                    alert("There was an error in the server response.");
                }
                Err(err) => {
                    error!(format!("Error adding business card: {}", err));
                    alert("There was an error sending your business card. Please try again.");
                }
            }
            true
        }
    }
}

/// Parses QR text and merges it into the form. Invalid text only logs; the
/// form keeps its previous values.
fn apply_qr(component: &mut AddCardComponent, text: &str) -> bool {
    log!(format!("QR Code scanned: {}", text));
    match apply_import(&mut component.form, parse_qr_json(text)) {
        Ok(()) => true,
        Err(err) => {
            error!(err.to_string());
            false
        }
    }
}
