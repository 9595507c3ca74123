//! Listing view: loads every card, then filters, paginates, edits, deletes
//! and exports them.
//!
//! On the first visit of a session a splash is shown for the configured time.
//! The session flag lives in the injected `SplashSession`, so navigating away
//! and back does not show it again.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

mod edit_dialog;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ListCardsProps;
pub use state::ListCardsComponent;

impl Component for ListCardsComponent {
    type Message = Msg;
    type Properties = ListCardsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut component = ListCardsComponent::new(&props.config);

        if props.session.claim_first_show() {
            component.show_splash = true;
            let link = ctx.link().clone();
            let splash_ms = props.config.splash_ms;
            spawn_local(async move {
                TimeoutFuture::new(splash_ms).await;
                link.send_message(Msg::HideSplash);
            });
        }

        ctx.link().send_message(Msg::Load);
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
