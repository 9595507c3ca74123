use std::rc::Rc;

use common::config::ClientConfig;
use common::session::SplashSession;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ListCardsProps {
    pub config: Rc<ClientConfig>,
    /// Session-wide splash flag, shared by every listing instance.
    pub session: SplashSession,
}
