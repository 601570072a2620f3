//! Bridges to the browser editing engine (`execCommand`, `queryCommandState`,
//! the selection API).

use std::collections::HashSet;

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlElement, Selection};

use common::editor::{EditorCommand, TOOLBAR};

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Runs `command` against the current selection. Returns whether the
/// browser accepted it.
pub fn exec(command: EditorCommand) -> bool {
    let Some(document) = html_document() else {
        return false;
    };
    let result = match command.exec_args() {
        (name, Some(value)) => document.exec_command_with_show_ui_and_value(name, false, value),
        (name, None) => document.exec_command(name),
    };
    result.unwrap_or(false)
}

/// Makes Enter produce `<p>` rather than `<div>`.
pub fn use_paragraph_separator() {
    if let Some(document) = html_document() {
        document
            .exec_command_with_show_ui_and_value("defaultParagraphSeparator", false, "p")
            .ok();
    }
}

/// The document selection, if it sits inside `editor`.
fn selection_within(editor: &HtmlElement) -> Option<Selection> {
    let selection = web_sys::window()?.get_selection().ok()??;
    let anchor = selection.anchor_node()?;
    editor.contains(Some(&anchor)).then_some(selection)
}

/// Toolbar commands that apply to the current selection.
pub fn active_commands(editor: &HtmlElement) -> HashSet<EditorCommand> {
    let mut active = HashSet::new();
    let (Some(document), Some(_)) = (html_document(), selection_within(editor)) else {
        return active;
    };

    let block = document
        .query_command_value("formatBlock")
        .map(|value| value.trim_matches(|c| c == '<' || c == '>').to_lowercase())
        .unwrap_or_default();

    for command in TOOLBAR.iter().flat_map(|group| group.iter().copied()) {
        let on = match (command.state_query(), command.block_tag()) {
            (Some(query), _) => document.query_command_state(query).unwrap_or(false),
            (None, Some(tag)) => block == tag,
            (None, None) => false,
        };
        if on {
            active.insert(command);
        }
    }
    active
}

/// Viewport anchor `(top, center_x)` for the floating menu, present only for
/// a non-empty selection inside `editor`.
pub fn bubble_anchor(editor: &HtmlElement) -> Option<(f64, f64)> {
    let selection = selection_within(editor)?;
    if selection.is_collapsed() || selection.range_count() == 0 {
        return None;
    }
    let rect = selection.get_range_at(0).ok()?.get_bounding_client_rect();
    Some((rect.top(), rect.left() + rect.width() / 2.0))
}
