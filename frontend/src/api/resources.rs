//! Endpoints behind each record type shown in the data grid.

use serde::de::DeserializeOwned;

use common::error::ApiError;
use common::grid::record::{GridRecord, StatusAction};
use common::model::demo_request::{DemoRequest, DemoRequestStatus};
use common::model::subscriber::NewsletterSubscriber;
use common::model::user::permissions;
use common::model::RecordId;
use common::requests::UpdateDemoRequestStatus;

use super::client::{path_segment, Mutation};

pub trait GridResource: GridRecord + DeserializeOwned {
    /// Page heading.
    const TITLE: &'static str;
    /// List endpoint; also the query-cache key.
    const LIST_PATH: &'static str;
    /// Permission required for delete and status actions.
    const MANAGE_PERMISSION: &'static str;

    fn delete(id: &RecordId) -> Mutation {
        Mutation::delete(format!("{}/{}", Self::LIST_PATH, path_segment(id.as_str())))
    }

    fn change_status(id: &RecordId, action: &StatusAction) -> Result<Mutation, ApiError>;
}

impl GridResource for NewsletterSubscriber {
    const TITLE: &'static str = "Newsletter subscribers";
    const LIST_PATH: &'static str = "/admin/newsletter";
    const MANAGE_PERMISSION: &'static str = permissions::MANAGE_NEWSLETTER;

    fn change_status(id: &RecordId, _action: &StatusAction) -> Result<Mutation, ApiError> {
        Ok(Mutation::patch(format!(
            "{}/{}/toggle-active",
            Self::LIST_PATH,
            path_segment(id.as_str())
        )))
    }
}

impl GridResource for DemoRequest {
    const TITLE: &'static str = "Demo requests";
    const LIST_PATH: &'static str = "/admin/demo-requests";
    const MANAGE_PERMISSION: &'static str = permissions::MANAGE_DEMO_REQUESTS;

    fn change_status(id: &RecordId, action: &StatusAction) -> Result<Mutation, ApiError> {
        let status = action
            .target
            .and_then(DemoRequestStatus::parse)
            .ok_or_else(|| ApiError::Decode(format!("unsupported status action `{}`", action.label)))?;
        Mutation::patch(format!(
            "{}/{}/status",
            Self::LIST_PATH,
            path_segment(id.as_str())
        ))
        .with_json(&UpdateDemoRequestStatus { status })
    }
}
