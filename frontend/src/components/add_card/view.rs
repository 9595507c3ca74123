//! View rendering for the add-card form.

use web_sys::{DragEvent, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::{CardField, EntryMethod, ImportPayload};
use common::photo::ACCEPTED_PHOTO_TYPES;

use super::messages::Msg;
use super::state::AddCardComponent;

pub fn view(component: &AddCardComponent, ctx: &Context<AddCardComponent>) -> Html {
    let link = ctx.link();
    let busy = component.guard.is_busy();

    html! {
        <div class="add-card-root">
            <h1>{ "Add business card" }</h1>
            <form onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Submit })}>
                { build_method_picker(component, link) }
                {
                    if component.form.method == EntryMethod::Imported {
                        build_import_section(component, link)
                    } else {
                        html! {}
                    }
                }
                { build_fields(component, link) }
                { build_photo_field(component, link) }
                <div class="form-actions">
                    <button type="button" class="btn" onclick={link.callback(|_| Msg::Clear)}>
                        { "Clear" }
                    </button>
                    <button type="submit" class="btn primary" disabled={busy}>
                        { if busy { "Sending…" } else { "Submit" } }
                    </button>
                </div>
            </form>
        </div>
    }
}

fn build_method_picker(component: &AddCardComponent, link: &Scope<AddCardComponent>) -> Html {
    let current = component.form.method;
    html! {
        <label class="field">
            <span>{ "Entry method" }</span>
            <select onchange={link.batch_callback(|e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                EntryMethod::parse(&value).map(Msg::SetMethod)
            })}>
                { for [EntryMethod::Manual, EntryMethod::Imported].into_iter().map(|method| html! {
                    <option value={method.as_str()} selected={method == current}>
                        { if method == EntryMethod::Manual { "Manual" } else { "Import (file or QR)" } }
                    </option>
                }) }
            </select>
        </label>
    }
}

fn build_import_section(component: &AddCardComponent, link: &Scope<AddCardComponent>) -> Html {
    let drop_class = classes!("drop-zone", component.drag_over.then_some("drag-over"));
    let file_name = component.selected_file.as_ref().map(|f| f.name());

    html! {
        <fieldset class="import-section">
            <legend>{ "Import" }</legend>
            <div
                class={drop_class}
                ondragover={link.callback(|e: DragEvent| { e.prevent_default(); Msg::SetDragOver(true) })}
                ondragleave={link.callback(|_: DragEvent| Msg::SetDragOver(false))}
                ondrop={link.batch_callback(|e: DragEvent| {
                    e.prevent_default();
                    let file = e.data_transfer()
                        .and_then(|dt| dt.files())
                        .and_then(|files| files.get(0));
                    let mut msgs = vec![Msg::SetDragOver(false)];
                    msgs.extend(file.map(Msg::ImportFileSelected));
                    msgs
                })}
            >
                <p>{ "Drop a CSV or XML file here, or choose one:" }</p>
                <input
                    type="file"
                    accept=".csv,.xml,text/csv,text/xml"
                    onchange={link.batch_callback(|e: Event| {
                        first_file(&e).map(Msg::ImportFileSelected)
                    })}
                />
                if let Some(name) = file_name {
                    <p class="selected-file">{ format!("Selected: {}", name) }</p>
                }
            </div>

            <label class="field">
                <span>{ "QR code text" }</span>
                <textarea
                    rows="3"
                    value={component.qr_text.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::QrTextChanged(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
            </label>
            <button type="button" class="btn" onclick={link.callback(|_| Msg::ApplyQrText)}>
                { "Use QR text" }
            </button>

            <label class="field">
                <span>{ "QR code image" }</span>
                <input
                    type="file"
                    accept="image/*"
                    onchange={link.batch_callback(|e: Event| first_file(&e).map(Msg::QrImageSelected))}
                />
            </label>

            if let Some(preview) = &component.preview {
                { build_preview(preview) }
            }
        </fieldset>
    }
}

fn build_preview(preview: &ImportPayload) -> Html {
    let rows = [
        ("Name", &preview.name),
        ("Gender", &preview.gender),
        ("Date of birth", &preview.date_of_birth),
        ("Email", &preview.email),
        ("Phone", &preview.phone),
        ("Address", &preview.address),
    ];
    html! {
        <div class="import-preview">
            <h3>{ "Preview" }</h3>
            <dl>
                { for rows.iter().map(|(label, value)| html! {
                    <>
                        <dt>{ *label }</dt>
                        <dd>{ value.as_deref().unwrap_or_default().to_string() }</dd>
                    </>
                }) }
            </dl>
            if let Some(photo) = preview.photo.as_ref().filter(|p| !p.is_empty()) {
                <img class="photo-preview" src={photo.clone()} alt="Imported photo" />
            }
        </div>
    }
}

fn build_fields(component: &AddCardComponent, link: &Scope<AddCardComponent>) -> Html {
    html! {
        <div class="fields">
            { for CardField::ALL.into_iter().map(|field| {
                let raw = field.form_value(&component.form);
                let (input_type, value) = match field {
                    CardField::DateOfBirth => ("date", raw.split('T').next().unwrap_or_default()),
                    CardField::Email => ("email", raw),
                    CardField::Phone => ("tel", raw),
                    _ => ("text", raw),
                };
                html! {
                    <label class="field">
                        <span>{ field.label() }</span>
                        <input
                            type={input_type}
                            value={value.to_string()}
                            oninput={link.callback(move |e: InputEvent| {
                                Msg::UpdateField(field, e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                        />
                    </label>
                }
            }) }
        </div>
    }
}

fn build_photo_field(component: &AddCardComponent, link: &Scope<AddCardComponent>) -> Html {
    html! {
        <div class="field photo-field">
            <span>{ "Photo (JPEG or PNG, up to 1 MB)" }</span>
            <input
                type="file"
                accept={ACCEPTED_PHOTO_TYPES.join(",")}
                onchange={link.batch_callback(|e: Event| first_file(&e).map(Msg::PhotoSelected))}
            />
            if !component.form.photo.is_empty() {
                <img class="photo-preview" src={component.form.photo.clone()} alt="Photo" />
            }
        </div>
    }
}

/// First file of a file input, clearing the input so the same file can be
/// picked again.
fn first_file(e: &Event) -> Option<web_sys::File> {
    let input = e.target_unchecked_into::<HtmlInputElement>();
    let file = input.files().and_then(|files| files.get(0));
    input.set_value("");
    file
}
