use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::Route;

pub struct NotFound;

impl Component for NotFound {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="admin-page not-found">
                <h1 class="page-title">{"Page not found"}</h1>
                <Link<Route> to={Route::Home}>{"Back to the dashboard"}</Link<Route>>
            </section>
        }
    }
}
