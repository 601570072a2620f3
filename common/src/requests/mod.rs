use serde::Serialize;

use crate::model::demo_request::DemoRequestStatus;

/// Payload for `POST /admin/legal-documents/{doc}`.
#[derive(Serialize)]
pub struct SaveLegalDocumentRequest {
    pub content: String,
}

/// Payload for `PATCH /admin/demo-requests/{id}/status`.
#[derive(Serialize)]
pub struct UpdateDemoRequestStatus {
    pub status: DemoRequestStatus,
}
