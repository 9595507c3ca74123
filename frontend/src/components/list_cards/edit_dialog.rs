use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::CardField;

use crate::components::top_sheet::TopSheet;

use super::messages::Msg;
use super::state::ListCardsComponent;

pub fn edit_dialog(component: &ListCardsComponent, link: &Scope<ListCardsComponent>) -> Html {
    let Some(card) = &component.editing else {
        return html! {};
    };

    html! {
        <TopSheet open={true} title={Some("Edit business card".to_string())} on_close={link.callback(|_| Msg::CloseEdit)}>
            <form
                class="edit-form"
                onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::SubmitEdit })}
            >
                { for CardField::ALL.into_iter().map(|field| {
                    let raw = field.card_value(card);
                    let (input_type, value) = match field {
                        CardField::DateOfBirth => ("date", raw.split('T').next().unwrap_or_default()),
                        CardField::Email => ("email", raw),
                        _ => ("text", raw),
                    };
                    html! {
                        <label class="field">
                            <span>{ field.label() }</span>
                            <input
                                type={input_type}
                                value={value.to_string()}
                                oninput={link.callback(move |e: InputEvent| {
                                    Msg::EditField(field, e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </label>
                    }
                }) }
                <div class="form-actions">
                    <button type="button" class="btn" onclick={link.callback(|_| Msg::CloseEdit)}>{ "Cancel" }</button>
                    <button type="submit" class="btn primary">{ "Save" }</button>
                </div>
            </form>
        </TopSheet>
    }
}
