//! Editing page for one legal document.
//!
//! The page owns the document: it loads the persisted HTML, feeds it to the
//! `RichTextEditor`, keeps the editor's output in a `DocumentSession` and
//! posts it only when the user presses Save. While the draft differs from
//! what was last persisted, the window-level `app_dirty` flag is raised so
//! `index.html` can warn before the tab is closed.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::editor::DocumentSession;
use common::error::ApiError;
use common::model::legal_document::LegalDocumentKind;
use common::model::user::{permissions, CurrentUser};

use crate::api::{self, cache::shared_cache};

mod update;
mod view;

#[derive(Properties, PartialEq, Clone)]
pub struct LegalDocumentProps {
    pub kind: LegalDocumentKind,
}

pub enum Msg {
    Loaded(String),
    LoadFailed(ApiError),
    UserLoaded(CurrentUser),
    UserFailed(ApiError),
    Edited(String),
    Save,
    Saved,
    SaveFailed(ApiError),
}

pub struct LegalDocumentPage {
    pub session: DocumentSession,

    /// Persisted HTML handed to the editor. Only replaced by a load, never by
    /// the editor's own output.
    pub loaded_content: String,

    pub loading: bool,

    pub user: Option<CurrentUser>,
}

impl LegalDocumentPage {
    pub fn can_edit(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.can(permissions::MANAGE_LEGAL_DOCUMENTS))
    }
}

impl Component for LegalDocumentPage {
    type Message = Msg;
    type Properties = LegalDocumentProps;

    fn create(ctx: &Context<Self>) -> Self {
        let kind = ctx.props().kind;
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::legal_document(kind).await {
                Ok(document) => link.send_message(Msg::Loaded(document.content)),
                // Nothing published yet: start from an empty document.
                Err(ApiError::NotFound { .. }) => link.send_message(Msg::Loaded(String::new())),
                Err(error) => link.send_message(Msg::LoadFailed(error)),
            }
        });

        let link = ctx.link().clone();
        let cache = shared_cache(ctx.link());
        spawn_local(async move {
            match api::current_user(cache).await {
                Ok(user) => link.send_message(Msg::UserLoaded(user)),
                Err(error) => link.send_message(Msg::UserFailed(error)),
            }
        });

        Self {
            session: DocumentSession::default(),
            loaded_content: String::new(),
            loading: true,
            user: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        update::set_window_dirty_flag(false);
    }
}
