use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The legal documents the public site publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegalDocumentKind {
    TermsOfService,
    PrivacyPolicy,
    CookiePolicy,
}

impl LegalDocumentKind {
    pub const ALL: [LegalDocumentKind; 3] = [
        LegalDocumentKind::TermsOfService,
        LegalDocumentKind::PrivacyPolicy,
        LegalDocumentKind::CookiePolicy,
    ];

    /// Path segment used by both the public and the admin endpoints.
    pub fn slug(&self) -> &'static str {
        match self {
            LegalDocumentKind::TermsOfService => "terms-of-service",
            LegalDocumentKind::PrivacyPolicy => "privacy-policy",
            LegalDocumentKind::CookiePolicy => "cookie-policy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LegalDocumentKind::TermsOfService => "Terms of Service",
            LegalDocumentKind::PrivacyPolicy => "Privacy Policy",
            LegalDocumentKind::CookiePolicy => "Cookie Policy",
        }
    }
}

impl fmt::Display for LegalDocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDocument(pub String);

impl fmt::Display for UnknownDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown legal document `{}`", self.0)
    }
}

impl FromStr for LegalDocumentKind {
    type Err = UnknownDocument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LegalDocumentKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| UnknownDocument(s.to_string()))
    }
}

/// Body of `GET /legal-documents/{doc}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocument {
    /// Serialized HTML produced by the editor.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for kind in LegalDocumentKind::ALL {
            assert_eq!(kind.slug().parse::<LegalDocumentKind>(), Ok(kind));
        }
        assert!("imprint".parse::<LegalDocumentKind>().is_err());
    }

    #[test]
    fn missing_content_decodes_as_empty() {
        let doc: LegalDocument = serde_json::from_str(r#"{"title":"Terms"}"#).unwrap();
        assert!(doc.content.is_empty());
        assert_eq!(doc.title.as_deref(), Some("Terms"));
    }
}
