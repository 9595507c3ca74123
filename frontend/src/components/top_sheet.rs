use uuid::Uuid;
use yew::{classes, html, Callback, Component, Context, Html, MouseEvent, Properties};

/// Modal sheet sliding from the top. Visibility follows the `open` prop;
/// clicking the backdrop asks the parent to close it.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_backdrop = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };
        let on_close_btn = {
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| on_close.emit(()))
        };

        html! {
            <div class="top-sheet-backdrop" onclick={on_backdrop}>
                <div
                    class={classes!("top-sheet", "show")}
                    id={self.id.clone()}
                    role="dialog"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <div class="top-sheet-header">
                        if let Some(title) = &props.title {
                            <h2>{ title }</h2>
                        }
                        <button class="icon-btn" title="Close" onclick={on_close_btn}>{ "✕" }</button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
