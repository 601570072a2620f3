use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::grid::record::{
    format_timestamp, optional_text, Cell, Column, FilterField, FilterKind, GridRecord,
    StatusAction, StatusBadge, Tone,
};
use crate::model::RecordId;

/// Lifecycle of a demo-call request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoRequestStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    /// Any value this build does not know about yet.
    #[serde(other)]
    Unknown,
}

impl DemoRequestStatus {
    /// Statuses an admin may move a request to.
    pub const SETTABLE: [DemoRequestStatus; 4] = [
        DemoRequestStatus::Pending,
        DemoRequestStatus::Confirmed,
        DemoRequestStatus::Cancelled,
        DemoRequestStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DemoRequestStatus::Pending => "pending",
            DemoRequestStatus::Confirmed => "confirmed",
            DemoRequestStatus::Cancelled => "cancelled",
            DemoRequestStatus::Completed => "completed",
            DemoRequestStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DemoRequestStatus::Pending => "Pending",
            DemoRequestStatus::Confirmed => "Confirmed",
            DemoRequestStatus::Cancelled => "Cancelled",
            DemoRequestStatus::Completed => "Completed",
            DemoRequestStatus::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::SETTABLE
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
    }

    fn tone(&self) -> Tone {
        match self {
            DemoRequestStatus::Pending => Tone::Warning,
            DemoRequestStatus::Confirmed => Tone::Info,
            DemoRequestStatus::Completed => Tone::Positive,
            DemoRequestStatus::Cancelled => Tone::Negative,
            DemoRequestStatus::Unknown => Tone::Neutral,
        }
    }
}

impl fmt::Display for DemoRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for a demo call, as returned by `GET /admin/demo-requests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoRequest {
    pub id: RecordId,
    #[serde(default, alias = "fullName")]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    /// Self-described role (agent, broker, team lead, ...).
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
    #[serde(default = "default_status")]
    pub status: DemoRequestStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_status() -> DemoRequestStatus {
    DemoRequestStatus::Pending
}

const STATUS_CHOICES: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("confirmed", "Confirmed"),
    ("cancelled", "Cancelled"),
    ("completed", "Completed"),
];

const COLUMNS: &[Column] = &[
    Column { key: "name", label: "Name" },
    Column { key: "email", label: "Email" },
    Column { key: "company", label: "Company" },
    Column { key: "preferred_date", label: "Preferred date" },
    Column { key: "status", label: "Status" },
    Column { key: "created", label: "Requested" },
];

const FILTERS: &[FilterField] = &[
    FilterField {
        key: "name",
        label: "Name",
        kind: FilterKind::Text,
    },
    FilterField {
        key: "email",
        label: "Email",
        kind: FilterKind::Text,
    },
    FilterField {
        key: "company",
        label: "Company",
        kind: FilterKind::Text,
    },
    FilterField {
        key: "status",
        label: "Status",
        kind: FilterKind::Choice(STATUS_CHOICES),
    },
];

impl GridRecord for DemoRequest {
    const NOUN: &'static str = "demo request";
    const NOUN_PLURAL: &'static str = "demo requests";
    const SEARCH_PLACEHOLDER: &'static str = "Search by name or email...";
    const COLUMNS: &'static [Column] = COLUMNS;
    const FILTERS: &'static [FilterField] = FILTERS;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> String {
        if self.name.is_empty() {
            self.email.clone()
        } else {
            format!("{} <{}>", self.name, self.email)
        }
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn text_field(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "company" => self.company.clone(),
            "phone" => self.phone.clone(),
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }

    fn cell(&self, key: &str) -> Cell {
        match key {
            "name" => Cell::Text(optional_text(Some(self.name.as_str()))),
            "email" => Cell::Text(self.email.clone()),
            "company" => Cell::Text(optional_text(self.company.as_deref())),
            "preferred_date" => Cell::Text(optional_text(self.preferred_date.as_deref())),
            "status" => Cell::Status(self.status()),
            "created" => Cell::Text(format_timestamp(self.created_at)),
            _ => Cell::Text(String::new()),
        }
    }

    fn status(&self) -> StatusBadge {
        StatusBadge::new(self.status.label(), self.status.tone())
    }

    fn status_actions(&self) -> Vec<StatusAction> {
        DemoRequestStatus::SETTABLE
            .into_iter()
            .filter(|target| *target != self.status)
            .map(|target| StatusAction::set(target.label(), target.as_str()))
            .collect()
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Name", optional_text(Some(self.name.as_str()))),
            ("Email", self.email.clone()),
            ("Phone", optional_text(self.phone.as_deref())),
            ("Company", optional_text(self.company.as_deref())),
            ("Role", optional_text(self.role.as_deref())),
            ("Preferred date", optional_text(self.preferred_date.as_deref())),
            ("Status", self.status.label().to_string()),
            ("Message", optional_text(self.message.as_deref())),
            ("Requested", format_timestamp(self.created_at)),
            ("Last updated", format_timestamp(self.updated_at)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_does_not_break_decoding() {
        let json = r#"{ "id": 1, "name": "Lee", "email": "lee@x.io", "status": "rescheduled" }"#;
        let request: DemoRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, DemoRequestStatus::Unknown);
        assert_eq!(request.status_actions().len(), 4);
    }

    #[test]
    fn status_actions_skip_current_status() {
        let json = r#"{ "id": 1, "name": "Lee", "email": "lee@x.io", "status": "confirmed" }"#;
        let request: DemoRequest = serde_json::from_str(json).unwrap();
        let targets: Vec<_> = request
            .status_actions()
            .into_iter()
            .filter_map(|action| action.target)
            .collect();
        assert_eq!(targets, vec!["pending", "cancelled", "completed"]);
    }

    #[test]
    fn parses_status_case_insensitively() {
        assert_eq!(
            DemoRequestStatus::parse("Completed"),
            Some(DemoRequestStatus::Completed)
        );
        assert_eq!(DemoRequestStatus::parse("unknown"), None);
    }
}
