//! Sign-in by pasting an API bearer token issued by the backend.

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::cache::shared_cache;
use crate::routes::Route;
use crate::{session, toast};

pub enum Msg {
    SetToken(String),
    Submit,
}

pub struct Login {
    token: String,
}

impl Component for Login {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            token: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetToken(token) => {
                self.token = token;
                true
            }
            Msg::Submit => {
                if self.token.trim().is_empty() {
                    toast::error("Paste an access token to continue.");
                    return false;
                }
                if !session::store_token(&self.token) {
                    toast::error("Could not store the token in this browser.");
                    return false;
                }
                // A new credential may see different data.
                if let Some(cache) = shared_cache(ctx.link()) {
                    cache.clear();
                }
                self.token.clear();
                toast::success("Signed in.");
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section class="admin-page login">
                <h1 class="page-title">{"Sign in"}</h1>
                <form
                    class="login-form"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <label for="token">{"Access token"}</label>
                    <input
                        id="token"
                        type="password"
                        autocomplete="off"
                        value={self.token.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetToken(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <button class="btn btn-primary" type="submit">{"Sign in"}</button>
                </form>
            </section>
        }
    }
}
