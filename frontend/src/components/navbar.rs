use yew::{classes, html, Callback, Component, Context, Html, MouseEvent, Properties};

use crate::app::Page;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

pub struct Navbar;

impl Component for Navbar {
    type Message = ();
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Navbar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = |page: Page, label: &'static str| {
            let on_navigate = props.on_navigate.clone();
            html! {
                <button
                    class={classes!("nav-link", (props.current == page).then_some("active"))}
                    onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(page))}
                >
                    { label }
                </button>
            }
        };

        html! {
            <nav class="navbar">
                <span class="navbar-brand">{ "Business Cards" }</span>
                { link(Page::ListCards, "Cards") }
                { link(Page::AddCard, "Add card") }
            </nav>
        }
    }
}
