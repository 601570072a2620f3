use yew::prelude::*;

use common::grid::inflight::RowAction;

use super::helpers::status_badge;
use super::messages::Msg;
use super::state::DataGrid;
use crate::api::resources::GridResource;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

/// Every field of the selected record, from the already loaded list.
pub fn details_dialog<R: GridResource>(grid: &DataGrid<R>, ctx: &Context<DataGrid<R>>) -> Html {
    let record = grid
        .rows
        .details()
        .and_then(|id| grid.find(&ctx.props().records, id));

    let (title, body) = match record {
        Some(record) => (
            record.title(),
            html! {
                <dl class="details-list">
                    <dt>{"Status"}</dt>
                    <dd>{ status_badge(&record.status()) }</dd>
                    {
                        for record.details().into_iter().map(|(label, value)| html! {
                            <>
                                <dt>{ label }</dt>
                                <dd class="details-value">{ value }</dd>
                            </>
                        })
                    }
                </dl>
            },
        ),
        None => (String::new(), html! {}),
    };

    html! {
        <YwMaterialTopSheet
            open={record.is_some()}
            {title}
            on_close={ctx.link().callback(|_| Msg::CloseDetails)}
        >
            { body }
        </YwMaterialTopSheet>
    }
}

/// Confirmation step in front of every delete. Dismissing it sends nothing.
pub fn confirm_delete_dialog<R: GridResource>(grid: &DataGrid<R>, ctx: &Context<DataGrid<R>>) -> Html {
    let link = ctx.link();
    let record = grid
        .rows
        .confirm_delete()
        .and_then(|id| grid.find(&ctx.props().records, id));
    let busy = record.is_some_and(|record| grid.rows.in_flight().is_pending(record.id(), RowAction::Delete));
    let name = record.map(|record| record.title()).unwrap_or_default();

    html! {
        <YwMaterialTopSheet
            open={record.is_some()}
            title={format!("Delete {}?", R::NOUN)}
            on_close={link.callback(|_| Msg::CancelDelete)}
        >
            <p class="confirm-text">
                { format!("{} will be permanently removed. This cannot be undone.", name) }
            </p>
            <div class="dialog-actions">
                <button class="btn" onclick={link.callback(|_| Msg::CancelDelete)}>{"Cancel"}</button>
                <button
                    class="btn btn-danger"
                    disabled={busy}
                    onclick={link.callback(|_| Msg::ConfirmDelete)}
                >
                    {"Delete"}
                </button>
            </div>
        </YwMaterialTopSheet>
    }
}
