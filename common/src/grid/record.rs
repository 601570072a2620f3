//! The contract a record type fulfils to be shown in the data grid.
//!
//! A `GridRecord` describes its own columns, filterable fields, search
//! haystack and status actions, so one grid component can render demo
//! requests and newsletter subscribers alike.

use chrono::{DateTime, Utc};

use crate::model::RecordId;

/// Placeholder for missing values in cells and detail rows.
pub const EMPTY_VALUE: &str = "—";

/// A table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

/// How a filterable field is edited and matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Free text, case-insensitive substring match.
    Text,
    /// Fixed `(value, label)` options, matched like `Text` against the value.
    Choice(&'static [(&'static str, &'static str)]),
    /// Boolean field; `on` / `off` are the option labels.
    Flag {
        on: &'static str,
        off: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Positive,
    Warning,
    Negative,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Neutral => "badge-neutral",
            Tone::Info => "badge-info",
            Tone::Positive => "badge-positive",
            Tone::Warning => "badge-warning",
            Tone::Negative => "badge-negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: Tone,
}

impl StatusBadge {
    pub fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

/// Rendered content of one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Status(StatusBadge),
}

/// A status change offered on a row.
///
/// `target == None` flips a boolean flag; `Some(value)` moves the record to
/// that status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAction {
    pub label: &'static str,
    pub target: Option<&'static str>,
}

impl StatusAction {
    pub fn toggle(label: &'static str) -> Self {
        Self { label, target: None }
    }

    pub fn set(label: &'static str, target: &'static str) -> Self {
        Self {
            label,
            target: Some(target),
        }
    }
}

pub trait GridRecord: Clone + PartialEq + 'static {
    /// Singular noun used in messages ("subscriber").
    const NOUN: &'static str;
    const NOUN_PLURAL: &'static str;
    const SEARCH_PLACEHOLDER: &'static str;
    const COLUMNS: &'static [Column];
    const FILTERS: &'static [FilterField];

    fn id(&self) -> &RecordId;

    /// Short human label for dialogs and toasts.
    fn title(&self) -> String;

    /// Fields the global search box matches against.
    fn search_haystack(&self) -> Vec<&str>;

    /// Textual value of a filterable field, `None` when absent.
    fn text_field(&self, key: &str) -> Option<String>;

    /// Boolean value of a `FilterKind::Flag` field.
    fn flag_field(&self, _key: &str) -> Option<bool> {
        None
    }

    fn cell(&self, key: &str) -> Cell;

    fn status(&self) -> StatusBadge;

    fn status_actions(&self) -> Vec<StatusAction>;

    /// Every field, in display order, for the details overlay.
    fn details(&self) -> Vec<(&'static str, String)>;
}

pub fn optional_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => EMPTY_VALUE.to_string(),
    }
}

pub fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| EMPTY_VALUE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn blank_values_render_as_placeholder() {
        assert_eq!(optional_text(None), EMPTY_VALUE);
        assert_eq!(optional_text(Some("   ")), EMPTY_VALUE);
        assert_eq!(optional_text(Some(" Acme ")), "Acme");
    }

    #[test]
    fn timestamps_render_to_the_minute() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 9, 14, 5, 59).unwrap();
        assert_eq!(format_timestamp(Some(ts)), "2025-01-09 14:05");
        assert_eq!(format_timestamp(None), EMPTY_VALUE);
    }
}
