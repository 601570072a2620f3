use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::grid::record::{
    format_timestamp, optional_text, Cell, Column, FilterField, FilterKind, GridRecord,
    StatusAction, StatusBadge, Tone,
};
use crate::model::RecordId;

/// A newsletter subscriber as returned by `GET /admin/newsletter`.
///
/// The only mutation the dashboard performs on a subscriber is flipping
/// `is_active` through `PATCH /admin/newsletter/{id}/toggle-active`, or
/// removing it entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscriber {
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "active")]
    pub is_active: bool,
    /// Where the sign-up came from (landing page, blog footer, ...).
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub subscribed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl NewsletterSubscriber {
    /// Sign-up time, falling back to the record creation time.
    pub fn joined_at(&self) -> Option<DateTime<Utc>> {
        self.subscribed_at.or(self.created_at)
    }
}

const COLUMNS: &[Column] = &[
    Column { key: "email", label: "Email" },
    Column { key: "name", label: "Name" },
    Column { key: "status", label: "Status" },
    Column { key: "source", label: "Source" },
    Column { key: "subscribed", label: "Subscribed" },
];

const FILTERS: &[FilterField] = &[
    FilterField {
        key: "email",
        label: "Email",
        kind: FilterKind::Text,
    },
    FilterField {
        key: "status",
        label: "Status",
        kind: FilterKind::Flag {
            on: "Active",
            off: "Inactive",
        },
    },
];

impl GridRecord for NewsletterSubscriber {
    const NOUN: &'static str = "subscriber";
    const NOUN_PLURAL: &'static str = "subscribers";
    const SEARCH_PLACEHOLDER: &'static str = "Search by email...";
    const COLUMNS: &'static [Column] = COLUMNS;
    const FILTERS: &'static [FilterField] = FILTERS;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> String {
        self.email.clone()
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![self.email.as_str()]
    }

    fn text_field(&self, key: &str) -> Option<String> {
        match key {
            "email" => Some(self.email.clone()),
            "name" => self.name.clone(),
            "source" => self.source.clone(),
            _ => None,
        }
    }

    fn flag_field(&self, key: &str) -> Option<bool> {
        match key {
            "status" => Some(self.is_active),
            _ => None,
        }
    }

    fn cell(&self, key: &str) -> Cell {
        match key {
            "email" => Cell::Text(self.email.clone()),
            "name" => Cell::Text(optional_text(self.name.as_deref())),
            "status" => Cell::Status(self.status()),
            "source" => Cell::Text(optional_text(self.source.as_deref())),
            "subscribed" => Cell::Text(format_timestamp(self.joined_at())),
            _ => Cell::Text(String::new()),
        }
    }

    fn status(&self) -> StatusBadge {
        if self.is_active {
            StatusBadge::new("Active", Tone::Positive)
        } else {
            StatusBadge::new("Inactive", Tone::Neutral)
        }
    }

    fn status_actions(&self) -> Vec<StatusAction> {
        let label = if self.is_active { "Deactivate" } else { "Activate" };
        vec![StatusAction::toggle(label)]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Email", self.email.clone()),
            ("Name", optional_text(self.name.as_deref())),
            ("Status", self.status().label),
            ("Source", optional_text(self.source.as_deref())),
            ("Subscribed", format_timestamp(self.joined_at())),
            ("Last updated", format_timestamp(self.updated_at)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_payload() {
        let json = r#"{
            "id": 7,
            "email": "ana@example.com",
            "isActive": true,
            "source": "blog",
            "subscribedAt": "2025-03-01T10:00:00Z"
        }"#;
        let subscriber: NewsletterSubscriber = serde_json::from_str(json).unwrap();
        assert_eq!(subscriber.id.as_str(), "7");
        assert!(subscriber.is_active);
        assert_eq!(subscriber.name, None);
        assert_eq!(subscriber.source.as_deref(), Some("blog"));
        assert!(subscriber.joined_at().is_some());
    }

    #[test]
    fn accepts_legacy_active_key() {
        let json = r#"{ "id": "x", "email": "a@b.c", "active": false }"#;
        let subscriber: NewsletterSubscriber = serde_json::from_str(json).unwrap();
        assert!(!subscriber.is_active);
        assert_eq!(subscriber.status_actions()[0].label, "Activate");
    }
}
