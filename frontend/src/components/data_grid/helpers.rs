//! Small rendering helpers shared by the grid view and its dialogs.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::grid::filter::FilterValue;
use common::grid::record::{Cell, FilterField, FilterKind, StatusBadge};

use super::messages::Msg;
use super::state::DataGrid;
use crate::api::resources::GridResource;

const FLAG_ON: &str = "on";
const FLAG_OFF: &str = "off";

pub fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>, disabled: bool) -> Html {
    html! {
        <button class="icon-btn" title={label.to_string()} aria-label={label.to_string()} {disabled} onclick={on_click}>
            <i class="material-icons">{ icon_name.to_string() }</i>
        </button>
    }
}

pub fn status_badge(badge: &StatusBadge) -> Html {
    html! {
        <span class={classes!("badge", badge.tone.class())}>{ badge.label.clone() }</span>
    }
}

pub fn render_cell(cell: Cell) -> Html {
    match cell {
        Cell::Text(text) => html! { { text } },
        Cell::Status(badge) => status_badge(&badge),
    }
}

pub fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn select_value(e: Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Input or select for one per-field filter, reflecting its current value.
pub fn filter_control<R: GridResource>(
    field: &FilterField,
    value: Option<&FilterValue>,
    link: &Scope<DataGrid<R>>,
) -> Html {
    let key = field.key;
    let control = match field.kind {
        FilterKind::Text => {
            let current = match value {
                Some(FilterValue::Text(text)) => text.clone(),
                _ => String::new(),
            };
            html! {
                <input
                    type="text"
                    class="filter-input"
                    placeholder={field.label}
                    value={current}
                    oninput={link.callback(move |e: InputEvent| {
                        Msg::Filter(key, Some(FilterValue::Text(input_value(e))))
                    })}
                />
            }
        }
        FilterKind::Choice(options) => {
            let current = match value {
                Some(FilterValue::Text(text)) => text.clone(),
                _ => String::new(),
            };
            html! {
                <select
                    class="filter-select"
                    onchange={link.callback(move |e: Event| {
                        let selected = select_value(e);
                        Msg::Filter(key, (!selected.is_empty()).then(|| FilterValue::Text(selected)))
                    })}
                >
                    <option value="" selected={current.is_empty()}>{ format!("All {}", field.label.to_lowercase()) }</option>
                    {
                        for options.iter().map(|(option, label)| html! {
                            <option value={*option} selected={current == *option}>{ *label }</option>
                        })
                    }
                </select>
            }
        }
        FilterKind::Flag { on, off } => {
            let current = match value {
                Some(FilterValue::Flag(true)) => FLAG_ON,
                Some(FilterValue::Flag(false)) => FLAG_OFF,
                _ => "",
            };
            html! {
                <select
                    class="filter-select"
                    onchange={link.callback(move |e: Event| {
                        let flag = match select_value(e).as_str() {
                            FLAG_ON => Some(FilterValue::Flag(true)),
                            FLAG_OFF => Some(FilterValue::Flag(false)),
                            _ => None,
                        };
                        Msg::Filter(key, flag)
                    })}
                >
                    <option value="" selected={current.is_empty()}>{ format!("All {}", field.label.to_lowercase()) }</option>
                    <option value={FLAG_ON} selected={current == FLAG_ON}>{ on }</option>
                    <option value={FLAG_OFF} selected={current == FLAG_OFF}>{ off }</option>
                </select>
            }
        }
    };

    html! {
        <label class="filter-field">
            <span class="filter-label">{ field.label }</span>
            { control }
        </label>
    }
}
