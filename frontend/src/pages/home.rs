use yew::prelude::*;
use yew_router::prelude::Link;

use common::model::legal_document::LegalDocumentKind;

use crate::routes::Route;

pub struct Home;

impl Component for Home {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="admin-page home">
                <h1 class="page-title">{"Dashboard"}</h1>
                <div class="home-cards">
                    { card("event", "Demo requests", "Review and schedule demo calls.", Route::DemoRequests) }
                    { card("mail", "Newsletter", "Manage newsletter subscribers.", Route::Newsletter) }
                </div>
                <h2>{"Legal documents"}</h2>
                <div class="home-cards">
                    {
                        for LegalDocumentKind::ALL.iter().map(|kind| {
                            card("gavel", kind.title(), "Edit the published text.", Route::legal(*kind))
                        })
                    }
                </div>
            </section>
        }
    }
}

fn card(icon: &str, title: &str, blurb: &str, to: Route) -> Html {
    html! {
        <Link<Route> classes="home-card" {to}>
            <i class="material-icons">{ icon.to_string() }</i>
            <strong>{ title.to_string() }</strong>
            <span>{ blurb.to_string() }</span>
        </Link<Route>>
    }
}
