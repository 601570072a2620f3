//! Modal sheet sliding in from the top of the viewport.
//!
//! The sheet is only mounted while `open` is set; the parent owns that flag
//! and learns about dismissal (backdrop click, Escape, close button) through
//! `on_close`.

use uuid::Uuid;
use web_sys::HtmlElement;
use yew::prelude::*;

pub struct YwMaterialTopSheet {
    pub id: String,
    node_ref: NodeRef,
    /// Move keyboard focus into the sheet on the next render.
    focus_pending: bool,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    Dismiss,
    Ignore,
}

impl Component for YwMaterialTopSheet {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
            focus_pending: ctx.props().open,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Dismiss => ctx.props().on_close.emit(()),
            Msg::Ignore => {}
        }
        false
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().open && !old_props.open {
            self.focus_pending = true;
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.focus_pending {
            self.focus_pending = false;
            if let Some(sheet) = self.node_ref.cast::<HtmlElement>() {
                sheet.focus().ok();
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let link = ctx.link();
        let title_id = format!("{}-title", self.id);
        html! {
            <div class="top-sheet-backdrop" onclick={link.callback(|_| Msg::Dismiss)}>
                <div
                    class="top-sheet show"
                    id={self.id.clone()}
                    ref={self.node_ref.clone()}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={title_id.clone()}
                    tabindex="-1"
                    onclick={link.callback(|e: MouseEvent| {
                        e.stop_propagation();
                        Msg::Ignore
                    })}
                    onkeydown={link.callback(|e: KeyboardEvent| {
                        if e.key() == "Escape" { Msg::Dismiss } else { Msg::Ignore }
                    })}
                >
                    <header class="top-sheet-header">
                        <h2 id={title_id}>{ props.title.clone() }</h2>
                        <button
                            class="icon-btn"
                            title="Close"
                            onclick={link.callback(|_| Msg::Dismiss)}
                        >
                            <i class="material-icons">{"close"}</i>
                        </button>
                    </header>
                    <div class="top-sheet-body">
                        { props.children.clone() }
                    </div>
                </div>
            </div>
        }
    }
}
