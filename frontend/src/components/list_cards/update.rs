//! Update function for the listing view.
//!
//! The in-memory list changes only after the backend confirmed an update or
//! a delete; failures leave it as it was and are reported in a dialog.

use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::export::{export_card, ExportFormat};

use crate::services::download::{download_export, save_bytes};
use crate::services::notify::{alert, show_toast};

use super::messages::Msg;
use super::state::ListCardsComponent;

pub fn update(component: &mut ListCardsComponent, ctx: &Context<ListCardsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let service = component.service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(service.list().await));
            });
            false
        }
        Msg::Loaded(result) => {
            component.loaded = true;
            match result {
                Ok(cards) => {
                    log!(format!("Loaded {} business cards", cards.len()));
                    component.listing.load(cards);
                }
                Err(err) => {
                    error!(format!("Error fetching business cards: {}", err));
                    show_toast(&err.to_string());
                }
            }
            true
        }
        Msg::HideSplash => {
            component.show_splash = false;
            true
        }
        Msg::SetSearch(term) => {
            component.listing.set_search_term(term);
            true
        }
        Msg::SetGender(gender) => {
            component.listing.set_gender_filter(gender);
            true
        }
        Msg::NextPage => component.listing.next_page(),
        Msg::PrevPage => component.listing.prev_page(),
        Msg::OpenEdit(id) => {
            component.editing = component.listing.find(id).map(|c| c.card.clone());
            component.editing.is_some()
        }
        Msg::EditField(field, value) => {
            if let Some(card) = component.editing.as_mut() {
                field.set_in_card(card, value);
                true
            } else {
                false
            }
        }
        Msg::CloseEdit => {
            component.editing = None;
            true
        }
        Msg::SubmitEdit => {
            let Some(card) = component.editing.clone() else {
                return false;
            };
            let service = component.service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::EditSaved(service.update(&card).await));
            });
            false
        }
        Msg::EditSaved(result) => {
            match result {
                Ok(card) => {
                    log!(format!("Business card updated successfully: {:?}", card.id));
                    component.listing.apply_update(card);
                    component.editing = None;
                    alert("Business card updated successfully!");
                }
                Err(err) => {
                    error!(format!("Error updating business card: {}", err));
                    alert(&err.to_string());
                }
            }
            true
        }
        Msg::Delete(id) => {
            let service = component.service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Deleted(id, service.delete(id).await));
            });
            false
        }
        Msg::Deleted(id, result) => match result {
            Ok(()) => {
                log!(format!("Business card {} deleted successfully", id));
                component.listing.apply_delete(id);
                component.export_choice.remove(&id);
                alert("Business card deleted successfully!");
                true
            }
            Err(err) => {
                error!(format!("Error deleting business card: {}", err));
                alert(&err.to_string());
                false
            }
        },
        Msg::SetExportFormat(id, value) => {
            match ExportFormat::parse(&value) {
                Some(format) => component.export_choice.insert(id, format),
                None => component.export_choice.remove(&id),
            };
            false
        }
        Msg::ExportCard(id) => {
            let Some(format) = component.export_choice.get(&id).copied() else {
                alert("Please select an export format.");
                return false;
            };
            let Some(display) = component.listing.find(id) else {
                return false;
            };
            let file = export_card(&display.card, format);
            if let Err(err) = download_export(&file) {
                error!(format!("Error downloading {}: {:?}", file.file_name, err));
            }
            false
        }
        Msg::DownloadAll(format) => {
            let service = component.service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Downloaded(format, service.export(format).await));
            });
            false
        }
        Msg::Downloaded(format, result) => {
            match result.map(|bytes| save_bytes(&bytes, format.mime(), &format.bulk_file_name())) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => error!(format!("Error saving {}: {:?}", format.bulk_file_name(), err)),
                Err(err) => {
                    error!(format!("Error downloading {} file: {}", format.extension(), err));
                    alert(&err.to_string());
                }
            }
            false
        }
    }
}
