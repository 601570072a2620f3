//! REST access: HTTP client, query cache, per-resource endpoints and the
//! shared failure policy.

pub mod cache;
pub mod client;
pub mod recovery;
pub mod resources;

use common::error::ApiError;
use common::model::legal_document::{LegalDocument, LegalDocumentKind};
use common::model::user::{decode_current_user, CurrentUser};
use common::requests::SaveLegalDocumentRequest;

use cache::{Cached, SharedCache};

pub const CURRENT_USER_PATH: &str = "/auth/me";

/// `GET /auth/me`, served from the cache while fresh.
pub async fn current_user(cache: Option<SharedCache>) -> Result<CurrentUser, ApiError> {
    if let Some(Cached::Fresh(body)) = cache.as_ref().map(|c| c.lookup(CURRENT_USER_PATH)) {
        if let Ok(user) = decode_current_user(&body) {
            return Ok(user);
        }
    }

    let body = client::get_text(CURRENT_USER_PATH).await?;
    let user = decode_current_user(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(cache) = cache {
        cache.store(CURRENT_USER_PATH, &body);
    }
    Ok(user)
}

pub async fn legal_document(kind: LegalDocumentKind) -> Result<LegalDocument, ApiError> {
    client::get_json(&format!("/legal-documents/{}", kind.slug())).await
}

pub async fn save_legal_document(kind: LegalDocumentKind, content: String) -> Result<(), ApiError> {
    client::post_json(
        &format!("/admin/legal-documents/{}", kind.slug()),
        &SaveLegalDocumentRequest { content },
    )
    .await
}
