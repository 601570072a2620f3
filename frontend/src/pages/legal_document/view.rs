use yew::prelude::*;
use yew_router::prelude::Link;

use common::editor::SavePhase;
use common::model::legal_document::LegalDocumentKind;

use super::update::phase_label;
use super::{LegalDocumentPage, Msg};
use crate::components::rich_text::RichTextEditor;
use crate::routes::Route;

pub fn view(page: &LegalDocumentPage, ctx: &Context<LegalDocumentPage>) -> Html {
    let link = ctx.link();
    let kind = ctx.props().kind;
    let can_edit = page.can_edit();
    let save_disabled =
        !can_edit || page.loading || page.session.is_saving() || !page.session.is_dirty();
    let save_label = if page.session.is_saving() { "Saving…" } else { "Save" };

    html! {
        <section class="admin-page legal-document">
            <nav class="tab-bar">
                {
                    for LegalDocumentKind::ALL.iter().map(|other| html! {
                        <Link<Route>
                            classes={classes!("tab-btn", (*other == kind).then_some("active"))}
                            to={Route::legal(*other)}
                        >
                            { other.title() }
                        </Link<Route>>
                    })
                }
            </nav>

            <header class="page-header">
                <h1 class="page-title">{ kind.title() }</h1>
                <span class={classes!("save-state", matches!(page.session.phase(), SavePhase::Failed(_)).then_some("error"))}>
                    { phase_label(&page.session) }
                </span>
                {
                    if can_edit {
                        html! {
                            <button
                                class="btn btn-primary"
                                disabled={save_disabled}
                                onclick={link.callback(|_| Msg::Save)}
                            >
                                <i class="material-icons">{"save"}</i>
                                { save_label }
                            </button>
                        }
                    } else {
                        html! { <span class="read-only-note">{"Read only"}</span> }
                    }
                }
            </header>

            {
                if page.loading {
                    html! { <p class="loading">{"Loading document…"}</p> }
                } else {
                    html! {
                        <RichTextEditor
                            content={page.loaded_content.clone()}
                            on_update={link.callback(Msg::Edited)}
                            read_only={!can_edit}
                        />
                    }
                }
            }
        </section>
    }
}
