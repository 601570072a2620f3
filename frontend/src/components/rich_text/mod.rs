//! Rich-text editor wrapping the browser's `contenteditable` engine.
//!
//! Exposes a persistent toolbar, a floating menu over non-empty selections
//! and an Editor / Preview switch. Every change is normalized to the
//! supported tag set and handed to the parent through `on_update`; saving is
//! the parent's business.

use yew::prelude::*;

use common::editor::normalize_html;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use messages::Msg;
use props::RichTextProps;
pub use state::RichTextEditor;

impl Component for RichTextEditor {
    type Message = Msg;
    type Properties = RichTextProps;

    fn create(ctx: &Context<Self>) -> Self {
        RichTextEditor::new(&ctx.props().content)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let content = &ctx.props().content;
        if *content != old_props.content && normalize_html(content) != self.last_emitted {
            self.load(content);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            helpers::use_paragraph_separator();
            self.load(&ctx.props().content);
        }
    }
}
