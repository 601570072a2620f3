//! Update function for the data grid.
//!
//! Filter and page messages only touch `GridState`. Dialog and row-action
//! messages go through `RowActions::apply`; when it answers with
//! `Effect::Send` the request is spawned here, and the task always reports
//! `Msg::Settled` once the request is over.

use gloo_console::{log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ApiError;
use common::grid::actions::{Effect, RowEvent};
use common::grid::inflight::{ReleaseGuard, RowAction};
use common::model::RecordId;

use crate::api::client::{self, Mutation};
use crate::api::recovery::follow_in;
use crate::api::resources::GridResource;
use crate::toast;

use super::messages::Msg;
use super::state::DataGrid;

pub fn update<R: GridResource>(grid: &mut DataGrid<R>, ctx: &Context<DataGrid<R>>, msg: Msg) -> bool {
    let records = ctx.props().records.clone();
    let records = records.as_slice();
    let can_manage = ctx.props().can_manage;

    match msg {
        Msg::Search(query) => grid.grid.set_search(query),
        Msg::Filter(key, value) => grid.grid.set_filter(key, value),
        Msg::ResetFilters => grid.grid.reset_filters(),
        Msg::GoToPage(page) => {
            let filtered = grid.grid.project(records).filtered;
            grid.grid.go_to_page(page, filtered)
        }
        Msg::ShowDetails(id) => grid.rows.apply(RowEvent::ShowDetails(id), can_manage).should_render(),
        Msg::CloseDetails => grid.rows.apply(RowEvent::CloseDetails, can_manage).should_render(),
        Msg::AskDelete(id) => grid.rows.apply(RowEvent::AskDelete(id), can_manage).should_render(),
        Msg::CancelDelete => grid.rows.apply(RowEvent::CancelDelete, can_manage).should_render(),
        Msg::ConfirmDelete => match grid.rows.apply(RowEvent::ConfirmDelete, can_manage) {
            Effect::Send(id, action) => {
                let success = format!("Deleted {} {}.", R::NOUN, record_title(grid, records, &id));
                let mutation = Ok(R::delete(&id));
                spawn_mutation(ctx, id, action, mutation, success);
                true
            }
            effect => {
                skipped::<R>(&effect, RowAction::Delete, can_manage);
                effect.should_render()
            }
        },
        Msg::ChangeStatus(id, status) => match grid.rows.apply(RowEvent::ChangeStatus(id), can_manage) {
            Effect::Send(id, action) => {
                let title = record_title(grid, records, &id);
                let success = match status.target {
                    Some(_) => format!("Marked {} {} as {}.", R::NOUN, title, status.label.to_lowercase()),
                    None => format!("Updated status of {} {}.", R::NOUN, title),
                };
                let mutation = R::change_status(&id, &status);
                spawn_mutation(ctx, id, action, mutation, success);
                true
            }
            effect => {
                skipped::<R>(&effect, RowAction::Status, can_manage);
                effect.should_render()
            }
        },
        Msg::Settled(id, action) => grid.rows.apply(RowEvent::Settled(id, action), can_manage).should_render(),
        Msg::Succeeded(message) => {
            toast::success(&message);
            if let Effect::Refetch = grid.rows.apply(RowEvent::Succeeded, can_manage) {
                ctx.props().on_refetch.emit(());
            }
            false
        }
        Msg::Failed(error) => {
            if let Effect::Recover(recovery) = grid.rows.apply(RowEvent::Failed(error), can_manage) {
                follow_in(ctx.link(), recovery);
            }
            false
        }
    }
}

/// Sends `mutation` for a row whose flag `RowActions` already claimed.
fn spawn_mutation<R: GridResource>(
    ctx: &Context<DataGrid<R>>,
    id: RecordId,
    action: RowAction,
    mutation: Result<Mutation, ApiError>,
    success: String,
) {
    log!(format!("{:?} on {} {}", action, R::NOUN, id));

    let link = ctx.link().clone();
    spawn_local(async move {
        let _release = {
            let link = link.clone();
            ReleaseGuard::new(move || link.send_message(Msg::Settled(id, action)))
        };

        let outcome = match mutation {
            Ok(mutation) => client::send(mutation).await,
            Err(error) => Err(error),
        };
        match outcome {
            Ok(()) => link.send_message(Msg::Succeeded(success)),
            Err(error) => link.send_message(Msg::Failed(error)),
        }
    });
}

fn skipped<R: GridResource>(effect: &Effect, action: RowAction, can_manage: bool) {
    if can_manage && *effect == Effect::Render {
        warn!(format!("{:?} already pending on this {}, not sent", action, R::NOUN));
    }
}

fn record_title<R: GridResource>(grid: &DataGrid<R>, records: &[R], id: &RecordId) -> String {
    grid.find(records, id)
        .map(|record| record.title())
        .unwrap_or_else(|| id.to_string())
}
