//! Application shell: loads the runtime configuration, owns the session
//! state and switches between the listing and the add-card views.

use std::rc::Rc;

use gloo_console::{error, log};
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use common::config::ClientConfig;
use common::session::SplashSession;

use crate::components::add_card::AddCardComponent;
use crate::components::list_cards::ListCardsComponent;
use crate::components::navbar::Navbar;

const CONFIG_PATH: &str = "/app-config.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    ListCards,
    AddCard,
}

pub enum Msg {
    ConfigLoaded(ClientConfig),
    Navigate(Page),
}

pub struct App {
    page: Page,
    config: Option<Rc<ClientConfig>>,
    session: SplashSession,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(load_config().await));
        });

        Self {
            page: Page::ListCards,
            config: None,
            session: SplashSession::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                self.config = Some(Rc::new(config));
                true
            }
            Msg::Navigate(page) => {
                let changed = self.page != page;
                self.page = page;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(config) = &self.config else {
            return html! { <div class="app-loading">{ "Loading…" }</div> };
        };

        html! {
            <div class="app-root">
                <Navbar current={self.page} on_navigate={ctx.link().callback(Msg::Navigate)} />
                <main>
                {
                    match self.page {
                        Page::ListCards => html! {
                            <ListCardsComponent config={config.clone()} session={self.session.clone()} />
                        },
                        Page::AddCard => html! {
                            <AddCardComponent config={config.clone()} />
                        },
                    }
                }
                </main>
            </div>
        }
    }
}

/// Fetches the configuration published by the host. Any failure falls back
/// to the built-in defaults.
async fn load_config() -> ClientConfig {
    let response = match Request::get(CONFIG_PATH).send().await {
        Ok(resp) if resp.ok() => resp,
        Ok(resp) => {
            log!(format!(
                "No runtime configuration (HTTP {}), using defaults",
                resp.status()
            ));
            return ClientConfig::default();
        }
        Err(err) => {
            error!(format!("Error loading runtime configuration: {}", err));
            return ClientConfig::default();
        }
    };

    match response.json::<ClientConfig>().await {
        Ok(config) => config,
        Err(err) => {
            error!(format!("Invalid runtime configuration: {}", err));
            ClientConfig::default()
        }
    }
}
