use serde::{Deserialize, Serialize};

use crate::model::RecordId;

/// Permission names granted by the backend in `GET /auth/me`.
pub mod permissions {
    pub const MANAGE_NEWSLETTER: &str = "manage_newsletter";
    pub const MANAGE_DEMO_REQUESTS: &str = "manage_demo_requests";
    pub const MANAGE_LEGAL_DOCUMENTS: &str = "manage_legal_documents";
    /// Grants every permission.
    pub const WILDCARD: &str = "*";
}

const SUPER_ADMIN_ROLE: &str = "super_admin";

/// The signed-in administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl CurrentUser {
    /// Whether the user may perform actions guarded by `permission`.
    pub fn can(&self, permission: &str) -> bool {
        self.role.as_deref() == Some(SUPER_ADMIN_ROLE)
            || self
                .permissions
                .iter()
                .any(|granted| granted == permission || granted == permissions::WILDCARD)
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MeEnvelope {
    Wrapped { user: CurrentUser },
    Bare(CurrentUser),
}

/// Decodes the body of `GET /auth/me`, which may or may not nest the user
/// under a `user` key.
pub fn decode_current_user(body: &str) -> Result<CurrentUser, serde_json::Error> {
    serde_json::from_str::<MeEnvelope>(body).map(|envelope| match envelope {
        MeEnvelope::Wrapped { user } | MeEnvelope::Bare(user) => user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Option<&str>, granted: &[&str]) -> CurrentUser {
        CurrentUser {
            id: RecordId::from("u1"),
            email: "admin@example.com".into(),
            name: None,
            role: role.map(str::to_string),
            permissions: granted.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn explicit_permission_grants_access() {
        let admin = user(Some("admin"), &[permissions::MANAGE_NEWSLETTER]);
        assert!(admin.can(permissions::MANAGE_NEWSLETTER));
        assert!(!admin.can(permissions::MANAGE_DEMO_REQUESTS));
    }

    #[test]
    fn super_admin_and_wildcard_grant_everything() {
        assert!(user(Some("super_admin"), &[]).can(permissions::MANAGE_LEGAL_DOCUMENTS));
        assert!(user(None, &["*"]).can(permissions::MANAGE_DEMO_REQUESTS));
    }

    #[test]
    fn decodes_wrapped_and_bare_bodies() {
        let bare = r#"{"id":1,"email":"a@b.c","permissions":["manage_newsletter"]}"#;
        let wrapped = r#"{"user":{"id":"1","email":"a@b.c","name":"Ana"}}"#;
        assert_eq!(decode_current_user(bare).unwrap().permissions.len(), 1);
        assert_eq!(decode_current_user(wrapped).unwrap().display_name(), "Ana");
    }
}
