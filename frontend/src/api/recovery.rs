use gloo_console::warn;
use yew::html::Scope;
use yew::Component;
use yew_router::prelude::{Navigator, RouterScopeExt};

use common::error::{ApiError, Recovery, PERMISSION_DENIED, SESSION_EXPIRED};

use super::cache::{shared_cache, SharedCache};
use crate::routes::Route;
use crate::{session, toast};

/// Applies the failure policy for `error`:
/// 401 signs the user out, 403 sends them home, anything else is a toast.
pub fn recover(error: &ApiError, navigator: Option<&Navigator>, cache: Option<&SharedCache>) {
    follow(error.recovery(), navigator, cache);
}

/// Carries out an already classified `recovery`.
pub fn follow(recovery: Recovery, navigator: Option<&Navigator>, cache: Option<&SharedCache>) {
    match recovery {
        Recovery::SignIn => {
            // Concurrent requests may all come back 401; only the first one
            // still finds a credential to drop.
            let had_session = session::is_signed_in();
            sign_out(navigator, cache);
            if had_session {
                warn!("credential rejected, signed out");
                toast::error(SESSION_EXPIRED);
            }
        }
        Recovery::GoHome => {
            toast::error(PERMISSION_DENIED);
            if let Some(navigator) = navigator {
                navigator.push(&Route::Home);
            }
        }
        Recovery::Notify(message) => toast::error(&message),
    }
}

/// Drops the credential and every cached response, then shows the login view.
pub fn sign_out(navigator: Option<&Navigator>, cache: Option<&SharedCache>) {
    session::clear_token();
    if let Some(cache) = cache {
        cache.clear();
    }
    if let Some(navigator) = navigator {
        navigator.push(&Route::Login);
    }
}

/// `recover` with the navigator and cache taken from a component scope.
pub fn recover_in<C: Component>(scope: &Scope<C>, error: &ApiError) {
    let navigator = scope.navigator();
    let cache = shared_cache(scope);
    recover(error, navigator.as_ref(), cache.as_ref());
}

pub fn follow_in<C: Component>(scope: &Scope<C>, recovery: Recovery) {
    let navigator = scope.navigator();
    let cache = shared_cache(scope);
    follow(recovery, navigator.as_ref(), cache.as_ref());
}

pub fn sign_out_in<C: Component>(scope: &Scope<C>) {
    let navigator = scope.navigator();
    let cache = shared_cache(scope);
    sign_out(navigator.as_ref(), cache.as_ref());
}
