use yew::prelude::*;
use yew_router::prelude::*;

use common::model::demo_request::DemoRequest;
use common::model::legal_document::LegalDocumentKind;
use common::model::subscriber::NewsletterSubscriber;

use crate::pages::home::Home;
use crate::pages::legal_document::LegalDocumentPage;
use crate::pages::login::Login;
use crate::pages::not_found::NotFound;
use crate::pages::resource::ResourcePage;
use crate::session;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/admin/newsletter")]
    Newsletter,
    #[at("/admin/demo-requests")]
    DemoRequests,
    #[at("/admin/legal/:doc")]
    LegalDocument { doc: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn legal(kind: LegalDocumentKind) -> Self {
        Route::LegalDocument {
            doc: kind.slug().to_string(),
        }
    }

    fn requires_session(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }
}

pub fn switch(route: Route) -> Html {
    if route.requires_session() && !session::is_signed_in() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Newsletter => html! { <ResourcePage<NewsletterSubscriber> /> },
        Route::DemoRequests => html! { <ResourcePage<DemoRequest> /> },
        Route::LegalDocument { doc } => match doc.parse::<LegalDocumentKind>() {
            // Keyed so switching documents remounts the page with a fresh session.
            Ok(kind) => html! { <LegalDocumentPage key={kind.slug()} {kind} /> },
            Err(_) => html! { <NotFound /> },
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_paths_carry_the_document_slug() {
        let route = Route::legal(LegalDocumentKind::PrivacyPolicy);
        assert_eq!(route.to_path(), "/admin/legal/privacy-policy");
        assert_eq!(Route::recognize("/admin/legal/privacy-policy"), Some(route));
    }

    #[test]
    fn only_login_and_not_found_are_public() {
        assert!(!Route::Login.requires_session());
        assert!(!Route::NotFound.requires_session());
        assert!(Route::Home.requires_session());
        assert!(Route::Newsletter.requires_session());
        assert!(Route::legal(LegalDocumentKind::CookiePolicy).requires_session());
    }
}
