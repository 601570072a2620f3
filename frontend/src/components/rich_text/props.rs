use yew::prelude::*;

/// Properties for the `RichTextEditor`.
///
/// The parent owns the document. `content` seeds the editable surface and is
/// re-applied only when it changes to something the editor did not emit
/// itself, such as a freshly loaded document.
#[derive(Properties, PartialEq, Clone)]
pub struct RichTextProps {
    /// HTML to show when mounted.
    #[prop_or_default]
    pub content: String,

    /// Called with the normalized HTML after every change.
    pub on_update: Callback<String>,

    #[prop_or_default]
    pub read_only: bool,

    #[prop_or(AttrValue::Static("Start writing…"))]
    pub placeholder: AttrValue,
}
