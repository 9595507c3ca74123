//! View rendering for the listing: splash, filters, paginated card grid and
//! export controls.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::export::ExportFormat;
use common::model::DisplayCard;

use crate::components::card_grid::CardGrid;

use super::edit_dialog::edit_dialog;
use super::messages::Msg;
use super::state::ListCardsComponent;

const GENDERS: [(&str, &str); 3] = [("", "All"), ("Male", "Male"), ("Female", "Female")];

pub fn view(component: &ListCardsComponent, ctx: &Context<ListCardsComponent>) -> Html {
    let link = ctx.link();

    if component.show_splash {
        return build_splash();
    }

    html! {
        <div class="list-cards-root">
            { build_toolbar(component, link) }
            { build_cards(component, link) }
            { build_pagination(component, link) }
            { edit_dialog(component, link) }
        </div>
    }
}

fn build_splash() -> Html {
    html! {
        <div class="splash">
            <h1>{ "Business Cards" }</h1>
            <p>{ "Create, import and share business cards." }</p>
        </div>
    }
}

fn build_toolbar(component: &ListCardsComponent, link: &Scope<ListCardsComponent>) -> Html {
    let gender = component.listing.gender_filter().to_string();
    html! {
        <div class="list-toolbar">
            <input
                type="search"
                placeholder="Search by name"
                value={component.listing.search_term().to_string()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <select onchange={link.callback(|e: Event| {
                Msg::SetGender(e.target_unchecked_into::<HtmlSelectElement>().value())
            })}>
                { for GENDERS.iter().map(|(value, label)| html! {
                    <option value={*value} selected={gender.eq_ignore_ascii_case(value)}>{ *label }</option>
                }) }
            </select>
            <span class="result-count">
                { format!("{} of {} cards", component.listing.filtered_len(), component.listing.cards().len()) }
            </span>
            <button class="btn" onclick={link.callback(|_| Msg::DownloadAll(ExportFormat::Xml))}>
                { "Download XML" }
            </button>
            <button class="btn" onclick={link.callback(|_| Msg::DownloadAll(ExportFormat::Csv))}>
                { "Download CSV" }
            </button>
        </div>
    }
}

fn build_cards(component: &ListCardsComponent, link: &Scope<ListCardsComponent>) -> Html {
    if !component.loaded {
        return html! { <p class="empty">{ "Loading business cards…" }</p> };
    }
    let displayed = component.listing.displayed();
    if displayed.is_empty() {
        return html! { <p class="empty">{ "No business cards found." }</p> };
    }

    html! {
        <CardGrid columns={component.listing.items_per_page()}>
            { for displayed.into_iter().map(|card| build_card(component, card, link)) }
        </CardGrid>
    }
}

fn build_card(
    component: &ListCardsComponent,
    display: &DisplayCard,
    link: &Scope<ListCardsComponent>,
) -> Html {
    let card = &display.card;
    let Some(id) = card.id else {
        return html! {};
    };
    let chosen = component
        .export_choice
        .get(&id)
        .map(|f| f.extension())
        .unwrap_or_default();

    html! {
        <div class="business-card" key={id.to_string()}>
            <img class="card-photo" src={display.photo_url.clone()} alt={card.name.clone()} />
            <h3>{ &card.name }</h3>
            <p>{ &card.gender }</p>
            <p>{ &display.date }</p>
            <p>{ &card.email }</p>
            <p>{ &card.phone }</p>
            <p>{ &card.address }</p>
            <div class="card-actions">
                <button class="btn" onclick={link.callback(move |_| Msg::OpenEdit(id))}>{ "Edit" }</button>
                <button class="btn danger" onclick={link.callback(move |_| Msg::Delete(id))}>{ "Delete" }</button>
            </div>
            <div class="card-export">
                <select onchange={link.callback(move |e: Event| {
                    Msg::SetExportFormat(id, e.target_unchecked_into::<HtmlSelectElement>().value())
                })}>
                    <option value="" selected={chosen.is_empty()}>{ "Export as…" }</option>
                    <option value="csv" selected={chosen == "csv"}>{ "CSV" }</option>
                    <option value="xml" selected={chosen == "xml"}>{ "XML" }</option>
                </select>
                <button class="btn" onclick={link.callback(move |_| Msg::ExportCard(id))}>{ "Export" }</button>
            </div>
        </div>
    }
}

fn build_pagination(component: &ListCardsComponent, link: &Scope<ListCardsComponent>) -> Html {
    let listing = &component.listing;
    let total = listing.total_pages();
    if total <= 1 {
        return html! {};
    }
    html! {
        <div class="pagination">
            <button
                class="btn"
                disabled={listing.current_page() <= 1}
                onclick={link.callback(|_| Msg::PrevPage)}
            >
                { "Previous" }
            </button>
            <span>{ format!("Page {} of {}", listing.current_page(), total) }</span>
            <button
                class="btn"
                disabled={listing.current_page() >= total}
                onclick={link.callback(|_| Msg::NextPage)}
            >
                { "Next" }
            </button>
        </div>
    }
}
