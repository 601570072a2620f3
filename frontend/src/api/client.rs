//! Thin wrapper over `gloo_net` for the admin REST API.
//!
//! Every request carries the stored bearer credential when there is one.
//! Non-success statuses are turned into `ApiError` using the response body;
//! no call is ever retried.

use gloo_console::{error, log, warn};
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use common::error::ApiError;

use crate::config::api_url;
use crate::session;

/// A state-changing call whose response body is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl Mutation {
    pub fn patch(path: impl Into<String>) -> Self {
        Self {
            method: Method::PATCH,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?);
        Ok(self)
    }
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Raw body of a successful `GET`.
pub async fn get_text(path: &str) -> Result<String, ApiError> {
    log!(format!("GET {}", path));
    let response = authorize(Request::get(&api_url(path))).send().await;
    read_body("GET", path, response).await
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let body = get_text(path).await?;
    serde_json::from_str(&body).map_err(|e| {
        error!(format!("GET {}: undecodable body: {}", path, e));
        ApiError::Decode(e.to_string())
    })
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    log!(format!("POST {}", path));
    let request = authorize(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    read_body("POST", path, request.send().await).await?;
    Ok(())
}

pub async fn send(mutation: Mutation) -> Result<(), ApiError> {
    let method = mutation.method.as_str().to_string();
    log!(format!("{} {}", method, mutation.path));

    let builder = authorize(RequestBuilder::new(&api_url(&mutation.path)).method(mutation.method));
    let response = match &mutation.body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    };
    read_body(&method, &mutation.path, response).await?;
    Ok(())
}

async fn read_body(
    method: &str,
    path: &str,
    response: Result<Response, gloo_net::Error>,
) -> Result<String, ApiError> {
    let response = response.map_err(|e| {
        error!(format!("{} {} failed: {}", method, path, e));
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if response.ok() {
        Ok(body)
    } else {
        let err = ApiError::from_response(status, &body);
        warn!(format!("{} {} -> {}: {}", method, path, status, err));
        Err(err)
    }
}

/// Escapes a record id for use as a path segment.
pub fn path_segment(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}
