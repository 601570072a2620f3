//! Runtime state of the rich-text editor.
//!
//! The editable surface itself is not part of the virtual DOM; Yew renders
//! an empty `contenteditable` element and the browser owns its children.
//! `last_emitted` remembers what was last handed to the parent so the same
//! HTML is never emitted twice and echoes of it are not written back.

use std::collections::HashSet;

use uuid::Uuid;
use yew::NodeRef;

use common::editor::{normalize_html, EditorCommand, TextStats};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorTab {
    Editor,
    Preview,
}

pub struct RichTextEditor {
    /// DOM id of the editable surface.
    pub id: String,

    pub editor_ref: NodeRef,

    pub tab: EditorTab,

    /// Commands active at the caret, highlighted in the toolbar.
    pub active: HashSet<EditorCommand>,

    /// Floating menu anchor; `None` hides the menu.
    pub bubble: Option<(f64, f64)>,

    /// Normalized HTML last passed to `on_update` (or loaded from props).
    pub last_emitted: String,

    pub stats: TextStats,
}

impl RichTextEditor {
    pub fn new(content: &str) -> Self {
        let last_emitted = normalize_html(content);
        Self {
            id: format!("rte-{}", Uuid::new_v4()),
            editor_ref: NodeRef::default(),
            tab: EditorTab::Editor,
            active: HashSet::new(),
            bubble: None,
            stats: TextStats::of_html(&last_emitted),
            last_emitted,
        }
    }

    /// Writes `content` into the surface without notifying the parent.
    pub fn load(&mut self, content: &str) {
        if let Some(editor) = self.editor_ref.cast::<web_sys::Element>() {
            editor.set_inner_html(content);
        }
        self.last_emitted = normalize_html(content);
        self.stats = TextStats::of_html(&self.last_emitted);
    }
}
