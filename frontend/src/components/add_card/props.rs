use std::rc::Rc;

use common::config::ClientConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AddCardProps {
    /// Runtime configuration; only the API base URL is used here.
    pub config: Rc<ClientConfig>,
}
