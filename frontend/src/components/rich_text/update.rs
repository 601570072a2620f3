use web_sys::HtmlElement;
use yew::prelude::*;

use common::editor::{normalize_html, TextStats};

use super::helpers::{active_commands, bubble_anchor, exec};
use super::messages::Msg;
use super::state::{EditorTab, RichTextEditor};

pub fn update(editor: &mut RichTextEditor, ctx: &Context<RichTextEditor>, msg: Msg) -> bool {
    match msg {
        Msg::Exec(command) => {
            if ctx.props().read_only {
                return false;
            }
            if let Some(surface) = editor.editor_ref.cast::<HtmlElement>() {
                surface.focus().ok();
            }
            exec(command);
            sync_from_surface(editor, ctx);
            refresh_selection(editor);
            true
        }
        Msg::Input => {
            sync_from_surface(editor, ctx);
            refresh_selection(editor);
            true
        }
        Msg::SelectionChanged => {
            refresh_selection(editor);
            true
        }
        Msg::Blur => editor.bubble.take().is_some(),
        Msg::SetTab(tab) => {
            editor.tab = tab;
            editor.bubble = None;
            true
        }
    }
}

/// Reads the surface back, normalizes it and emits it when it differs from
/// what was last emitted.
fn sync_from_surface(editor: &mut RichTextEditor, ctx: &Context<RichTextEditor>) {
    let Some(surface) = editor.editor_ref.cast::<HtmlElement>() else {
        return;
    };
    let html = normalize_html(&surface.inner_html());
    if html == editor.last_emitted {
        return;
    }
    editor.stats = TextStats::of_html(&html);
    editor.last_emitted = html.clone();
    ctx.props().on_update.emit(html);
}

fn refresh_selection(editor: &mut RichTextEditor) {
    let Some(surface) = editor.editor_ref.cast::<HtmlElement>() else {
        return;
    };
    editor.active = active_commands(&surface);
    editor.bubble = if editor.tab == EditorTab::Editor {
        bubble_anchor(&surface)
    } else {
        None
    };
}
