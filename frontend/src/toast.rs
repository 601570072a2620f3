//! Transient notifications injected at the bottom of the page.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::TOAST_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn background(&self) -> &'static str {
        match self {
            ToastKind::Success => "rgba(27, 94, 32, 0.92)",
            ToastKind::Error => "rgba(183, 28, 28, 0.92)",
            ToastKind::Info => "rgba(0, 0, 0, 0.8)",
        }
    }
}

pub fn success(message: &str) {
    show_toast(message, ToastKind::Success);
}

pub fn error(message: &str) {
    show_toast(message, ToastKind::Error);
}

pub fn info(message: &str) {
    show_toast(message, ToastKind::Info);
}

/// Appends a styled `div` to `<body>` and removes it after `TOAST_MS`.
///
/// The message is set as text content, never as HTML, since it may carry
/// server-provided text.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_attribute("role", "status").ok();
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
