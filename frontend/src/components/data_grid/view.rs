//! View rendering for the data grid: toolbar with search and filters, the
//! table for the current page, pagination and the two dialogs.

use yew::html::Scope;
use yew::prelude::*;

use common::grid::inflight::RowAction;
use common::grid::record::StatusAction;
use common::grid::{count_label, GridPage};

use super::dialogs::{confirm_delete_dialog, details_dialog};
use super::helpers::{filter_control, icon_button, input_value, render_cell, select_value};
use super::messages::Msg;
use super::state::DataGrid;
use crate::api::resources::GridResource;
use crate::components::pagination::Pagination;

pub fn view<R: GridResource>(grid: &DataGrid<R>, ctx: &Context<DataGrid<R>>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let page = grid.grid.project(props.records.as_slice());

    html! {
        <div class="data-grid">
            { build_toolbar(grid, link, &page, props.refreshing) }
            { build_table(grid, ctx, &page) }
            {
                if page.show_pagination {
                    html! {
                        <Pagination
                            page={page.page}
                            total_pages={page.total_pages}
                            window={page.window.clone()}
                            has_prev={page.has_prev}
                            has_next={page.has_next}
                            on_page={link.callback(Msg::GoToPage)}
                        />
                    }
                } else {
                    html! {}
                }
            }
            { details_dialog(grid, ctx) }
            { confirm_delete_dialog(grid, ctx) }
        </div>
    }
}

fn build_toolbar<R: GridResource>(
    grid: &DataGrid<R>,
    link: &Scope<DataGrid<R>>,
    page: &GridPage<'_, R>,
    refreshing: bool,
) -> Html {
    let filters = grid.grid.filters();
    let range = page
        .row_range
        .map(|(first, last)| format!(" · showing {}–{}", first, last))
        .unwrap_or_default();

    html! {
        <div class="grid-toolbar">
            <div class="grid-summary">
                <span class="grid-count">
                    { count_label(page.filtered, page.total, R::NOUN_PLURAL) }
                    { range }
                </span>
                {
                    if refreshing {
                        html! { <span class="grid-refreshing">{"Refreshing…"}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="grid-filters">
                <input
                    type="search"
                    class="search-input"
                    placeholder={R::SEARCH_PLACEHOLDER}
                    value={filters.search().to_string()}
                    oninput={link.callback(|e: InputEvent| Msg::Search(input_value(e)))}
                />
                { for R::FILTERS.iter().map(|field| filter_control(field, filters.get(field.key), link)) }
                <button
                    class="btn btn-text"
                    disabled={filters.is_empty()}
                    onclick={link.callback(|_| Msg::ResetFilters)}
                >
                    {"Reset filters"}
                </button>
            </div>
        </div>
    }
}

fn build_table<R: GridResource>(grid: &DataGrid<R>, ctx: &Context<DataGrid<R>>, page: &GridPage<'_, R>) -> Html {
    let props = ctx.props();
    let span = (R::COLUMNS.len() + 1).to_string();

    let body = match page.empty_message(props.loading, props.load_failed, R::NOUN_PLURAL) {
        Some(message) if props.load_failed && page.total == 0 => html! {
            <tr>
                <td class="grid-empty grid-error" colspan={span}>
                    { message }
                    <button class="btn btn-text" onclick={props.on_refetch.reform(|_| ())}>{"Retry"}</button>
                </td>
            </tr>
        },
        Some(message) => html! { <tr><td class="grid-empty" colspan={span}>{ message }</td></tr> },
        None => html! { <>{ for page.rows.iter().map(|record| build_row(grid, ctx, record)) }</> },
    };

    html! {
        <table class="grid-table">
            <thead>
                <tr>
                    { for R::COLUMNS.iter().map(|column| html! { <th scope="col">{ column.label }</th> }) }
                    <th scope="col" class="grid-actions-col">{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                { body }
            </tbody>
        </table>
    }
}

fn build_row<R: GridResource>(grid: &DataGrid<R>, ctx: &Context<DataGrid<R>>, record: &R) -> Html {
    let link = ctx.link();
    let id = record.id().clone();
    let busy = grid.rows.in_flight().is_row_busy(&id);

    let on_details = {
        let id = id.clone();
        link.callback(move |_| Msg::ShowDetails(id.clone()))
    };

    let manage = if ctx.props().can_manage {
        let on_delete = {
            let id = id.clone();
            link.callback(move |_| Msg::AskDelete(id.clone()))
        };
        html! {
            <>
                { status_control(grid, link, record) }
                { icon_button("delete", "Delete", on_delete, grid.rows.in_flight().is_pending(&id, RowAction::Delete)) }
            </>
        }
    } else {
        html! {}
    };

    html! {
        <tr key={id.as_str().to_string()} class={classes!(busy.then_some("row-busy"))}>
            { for R::COLUMNS.iter().map(|column| html! { <td>{ render_cell(record.cell(column.key)) }</td> }) }
            <td class="grid-actions">
                { icon_button("visibility", "View details", on_details, false) }
                { manage }
            </td>
        </tr>
    }
}

/// One button when the record offers a single transition, a select otherwise.
fn status_control<R: GridResource>(grid: &DataGrid<R>, link: &Scope<DataGrid<R>>, record: &R) -> Html {
    let id = record.id().clone();
    let pending = grid.rows.in_flight().is_pending(&id, RowAction::Status);
    let actions: Vec<StatusAction> = record.status_actions();

    match actions.as_slice() {
        [] => html! {},
        [action] => {
            let action = *action;
            html! {
                <button
                    class="btn btn-small"
                    disabled={pending}
                    onclick={link.callback(move |_| Msg::ChangeStatus(id.clone(), action))}
                >
                    { action.label }
                </button>
            }
        }
        _ => {
            let options = actions.clone();
            // Rebuilt after every settled change so a failed choice can be
            // picked again.
            let key = format!("{}-{}", id, grid.rows.status_revision());
            html! {
                <span class="status-control">
                    <select
                        key={key}
                        class="status-select"
                        disabled={pending}
                        onchange={link.batch_callback(move |e: Event| {
                            select_value(e)
                                .parse::<usize>()
                                .ok()
                                .and_then(|index| options.get(index).copied())
                                .map(|action| Msg::ChangeStatus(id.clone(), action))
                        })}
                    >
                        <option value="" selected=true>{"Set status…"}</option>
                        {
                            for actions.iter().enumerate().map(|(index, action)| html! {
                                <option value={index.to_string()}>{ action.label }</option>
                            })
                        }
                    </select>
                </span>
            }
        }
    }
}
