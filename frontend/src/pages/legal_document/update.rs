use gloo_console::{log, warn};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::editor::{DocumentSession, SavePhase};
use common::error::ApiError;

use super::{LegalDocumentPage, Msg};
use crate::api::{self, recovery::recover_in};
use crate::toast;

pub fn update(page: &mut LegalDocumentPage, ctx: &Context<LegalDocumentPage>, msg: Msg) -> bool {
    let kind = ctx.props().kind;

    match msg {
        Msg::Loaded(content) => {
            log!(format!("{} loaded ({} bytes)", kind.slug(), content.len()));
            page.session = DocumentSession::loaded(content.clone());
            page.loaded_content = content;
            page.loading = false;
            set_window_dirty_flag(false);
            true
        }
        Msg::LoadFailed(error) => {
            page.loading = false;
            recover_in(ctx.link(), &error);
            true
        }
        Msg::UserLoaded(user) => {
            page.user = Some(user);
            true
        }
        Msg::UserFailed(error) => {
            if matches!(error, ApiError::Unauthorized) {
                recover_in(ctx.link(), &error);
            } else {
                warn!(format!("current user unavailable: {}", error));
            }
            false
        }
        Msg::Edited(html) => {
            if !page.session.edit(html) {
                return false;
            }
            set_window_dirty_flag(page.session.is_dirty());
            true
        }
        Msg::Save => {
            if !page.can_edit() || page.loading {
                return false;
            }
            let Some(content) = page.session.begin_save() else {
                warn!(format!("{}: save already in progress", kind.slug()));
                return false;
            };
            log!(format!("saving {} ({} bytes)", kind.slug(), content.len()));

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::save_legal_document(kind, content).await {
                    Ok(()) => link.send_message(Msg::Saved),
                    Err(error) => link.send_message(Msg::SaveFailed(error)),
                }
            });
            true
        }
        Msg::Saved => {
            page.session.save_succeeded();
            set_window_dirty_flag(page.session.is_dirty());
            toast::success(&format!("{} saved.", kind.title()));
            true
        }
        Msg::SaveFailed(error) => {
            page.session.save_failed(error.user_message());
            recover_in(ctx.link(), &error);
            true
        }
    }
}

/// Human summary of where the save lifecycle stands.
pub fn phase_label(session: &DocumentSession) -> String {
    match session.phase() {
        SavePhase::Saving => "Saving…".to_string(),
        SavePhase::Failed(message) => format!("Save failed: {}", message),
        _ if session.is_dirty() => "Unsaved changes".to_string(),
        _ => "All changes saved".to_string(),
    }
}

/// Sets the global `app_dirty` flag read by the `beforeunload` handler.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}
