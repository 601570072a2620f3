use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

use crate::api::cache::SharedCache;
use crate::components::nav_bar::NavBar;
use crate::routes::{switch, Route};

/// Root component: owns the query cache for the lifetime of the page.
pub struct App {
    cache: SharedCache,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            cache: SharedCache::default(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <ContextProvider<SharedCache> context={self.cache.clone()}>
                    <NavBar />
                    <main class="admin-main">
                        <Switch<Route> render={switch} />
                    </main>
                </ContextProvider<SharedCache>>
            </BrowserRouter>
        }
    }
}
