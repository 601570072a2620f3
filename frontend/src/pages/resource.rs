//! Page container for one admin collection.
//!
//! Reads the list through the shared query cache, fetches the current user
//! for permissions and hands records, loading flags and a refetch handle to
//! the grid. Row actions stay hidden until the user is known.

use std::rc::Rc;

use gloo_console::{log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::cache::FetchGeneration;
use common::error::ApiError;
use common::model::list::decode_list;
use common::model::user::CurrentUser;

use crate::api::cache::{shared_cache, Cached};
use crate::api::recovery::recover_in;
use crate::api::resources::GridResource;
use crate::api::{self, client};
use crate::components::data_grid::DataGrid;

pub enum Msg<R> {
    Refetch,
    /// Response of the fetch numbered `generation`, with the raw body for
    /// the cache.
    Loaded {
        generation: u64,
        body: String,
        rows: Vec<R>,
    },
    LoadFailed {
        generation: u64,
        error: ApiError,
    },
    UserLoaded(CurrentUser),
    UserFailed(ApiError),
}

pub struct ResourcePage<R: GridResource> {
    records: Rc<Vec<R>>,
    /// No rows to show yet.
    loading: bool,
    /// Rows on screen, a newer copy is being fetched.
    refreshing: bool,
    /// The last fetch failed and there are no rows to fall back on.
    load_failed: bool,
    user: Option<CurrentUser>,
    fetches: FetchGeneration,
}

impl<R: GridResource> ResourcePage<R> {
    fn fetch(&mut self, ctx: &Context<Self>) {
        let generation = self.fetches.next();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = async {
                let body = client::get_text(R::LIST_PATH).await?;
                let rows = decode_list::<R>(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
                Ok::<_, ApiError>((body, rows))
            }
            .await;

            match result {
                Ok((body, rows)) => link.send_message(Msg::Loaded {
                    generation,
                    body,
                    rows,
                }),
                Err(error) => link.send_message(Msg::LoadFailed { generation, error }),
            }
        });
    }

    fn fetch_user(&self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        let cache = shared_cache(ctx.link());
        spawn_local(async move {
            match api::current_user(cache).await {
                Ok(user) => link.send_message(Msg::UserLoaded(user)),
                Err(error) => link.send_message(Msg::UserFailed(error)),
            }
        });
    }
}

impl<R: GridResource> Component for ResourcePage<R> {
    type Message = Msg<R>;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let cached = shared_cache(ctx.link())
            .map(|cache| cache.lookup(R::LIST_PATH))
            .unwrap_or(Cached::Missing);

        let (body, stale) = match cached {
            Cached::Fresh(body) => (Some(body), false),
            Cached::Stale(body) => (Some(body), true),
            Cached::Missing => (None, true),
        };
        let records = body.and_then(|body| match decode_list::<R>(&body) {
            Ok(rows) => Some(rows),
            Err(e) => {
                warn!(format!("discarding cached {}: {}", R::LIST_PATH, e));
                None
            }
        });

        let mut page = Self {
            loading: records.is_none(),
            refreshing: records.is_some() && stale,
            load_failed: false,
            records: Rc::new(records.unwrap_or_default()),
            user: None,
            fetches: FetchGeneration::default(),
        };
        if page.loading || page.refreshing {
            page.fetch(ctx);
        } else {
            log!(format!("{} served from cache", R::LIST_PATH));
        }
        page.fetch_user(ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Refetch => {
                if let Some(cache) = shared_cache(ctx.link()) {
                    cache.invalidate(R::LIST_PATH);
                }
                self.refreshing = true;
                self.fetch(ctx);
                true
            }
            Msg::Loaded {
                generation,
                body,
                rows,
            } => {
                if !self.fetches.is_current(generation) {
                    log!(format!("{}: dropping superseded response", R::LIST_PATH));
                    return false;
                }
                log!(format!("{}: {} {}", R::LIST_PATH, rows.len(), R::NOUN_PLURAL));
                if let Some(cache) = shared_cache(ctx.link()) {
                    cache.store(R::LIST_PATH, &body);
                }
                self.records = Rc::new(rows);
                self.loading = false;
                self.refreshing = false;
                self.load_failed = false;
                true
            }
            Msg::LoadFailed { generation, error } => {
                if !self.fetches.is_current(generation) {
                    warn!(format!("{}: superseded fetch failed: {}", R::LIST_PATH, error));
                    return false;
                }
                self.loading = false;
                self.refreshing = false;
                self.load_failed = self.records.is_empty();
                recover_in(ctx.link(), &error);
                true
            }
            Msg::UserLoaded(user) => {
                self.user = Some(user);
                true
            }
            Msg::UserFailed(error) => {
                // Without a user the actions stay hidden; only a rejected
                // credential needs handling.
                if matches!(error, ApiError::Unauthorized) {
                    recover_in(ctx.link(), &error);
                } else {
                    warn!(format!("current user unavailable: {}", error));
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let can_manage = self
            .user
            .as_ref()
            .is_some_and(|user| user.can(R::MANAGE_PERMISSION));

        html! {
            <section class="admin-page">
                <h1 class="page-title">{ R::TITLE }</h1>
                <DataGrid<R>
                    records={self.records.clone()}
                    loading={self.loading}
                    refreshing={self.refreshing}
                    load_failed={self.load_failed}
                    on_refetch={ctx.link().callback(|_| Msg::Refetch)}
                    {can_manage}
                />
            </section>
        }
    }
}
