use yew::prelude::*;
use yew_router::prelude::*;

use common::model::legal_document::LegalDocumentKind;

use crate::api::recovery::sign_out_in;
use crate::routes::Route;
use crate::{session, toast};

pub enum Msg {
    LocationChanged,
    SignOut,
}

/// Top navigation. Re-renders on every route change so the session-only
/// links follow sign-in and sign-out.
pub struct NavBar {
    _listener: Option<LocationHandle>,
}

impl Component for NavBar {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let listener = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_| Msg::LocationChanged));
        Self {
            _listener: listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LocationChanged => true,
            Msg::SignOut => {
                sign_out_in(ctx.link());
                toast::info("Signed out.");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !session::is_signed_in() {
            return html! {
                <header class="nav-bar">
                    <span class="nav-brand">{"Admin"}</span>
                </header>
            };
        }

        html! {
            <header class="nav-bar">
                <Link<Route> classes="nav-brand" to={Route::Home}>{"Admin"}</Link<Route>>
                <nav class="nav-links">
                    <Link<Route> to={Route::DemoRequests}>{"Demo requests"}</Link<Route>>
                    <Link<Route> to={Route::Newsletter}>{"Newsletter"}</Link<Route>>
                    <Link<Route> to={Route::legal(LegalDocumentKind::TermsOfService)}>{"Legal documents"}</Link<Route>>
                </nav>
                <button class="btn btn-text" onclick={ctx.link().callback(|_| Msg::SignOut)}>
                    <i class="material-icons">{"logout"}</i>
                    {"Sign out"}
                </button>
            </header>
        }
    }
}
