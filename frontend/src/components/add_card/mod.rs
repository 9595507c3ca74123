//! Add-card view: manual entry, CSV/XML import, QR text or image import,
//! photo upload and submission.
//!
//! Every import source goes through the normalizer in `common::import` and
//! is merged into the form by `common::form::reconcile`; submission is kept
//! single-in-flight by a `SubmissionGuard`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AddCardProps;
pub use state::AddCardComponent;

impl Component for AddCardComponent {
    type Message = Msg;
    type Properties = AddCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        AddCardComponent::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
