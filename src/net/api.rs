//! REST calls against the incident/notice gateway via `gloo-net`.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so callers can log the
//! precise failure mode, but the UI deliberately collapses every
//! variant into a single "operation failed" toast. Nothing here
//! retries or panics.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::Request;

use super::types::{
    Incident, IncidentPatch, IncidentsEnvelope, Notice, NoticeDraft, NoticesEnvelope,
};

/// Base URL of the gateway. Fixed; the dashboard takes no configuration.
pub const API_BASE: &str = "https://police-be.onrender.com/api";

/// Failure modes of a gateway call. All surface to the user as one
/// generic error toast; the distinction exists for console logging.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("gateway returned status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

/// Fetch every incident. The gateway supports no pagination or filters.
pub async fn fetch_incidents() -> Result<Vec<Incident>, ApiError> {
    let resp = Request::get(&format!("{API_BASE}/incidents/"))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_status(&resp)?;
    let envelope: IncidentsEnvelope = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.incidents)
}

/// Partially update an incident's editable fields.
pub async fn update_incident(id: &str, patch: &IncidentPatch) -> Result<(), ApiError> {
    let resp = Request::put(&format!("{API_BASE}/incidents/edit/{id}"))
        .json(patch)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_status(&resp)
}

/// Flag-only update marking an incident resolved.
pub async fn resolve_incident(id: &str) -> Result<(), ApiError> {
    let resp = Request::put(&format!("{API_BASE}/incidents/edit/{id}"))
        .json(&serde_json::json!({ "resolved": true }))
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_status(&resp)
}

/// Fetch every notice.
pub async fn fetch_notices() -> Result<Vec<Notice>, ApiError> {
    let resp = Request::get(&format!("{API_BASE}/notices/"))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_status(&resp)?;
    let envelope: NoticesEnvelope = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.notices)
}

/// Create a notice. The draft is sent as-is, empty fields included.
pub async fn create_notice(draft: &NoticeDraft) -> Result<(), ApiError> {
    let resp = Request::post(&format!("{API_BASE}/notices/create-notice"))
        .json(draft)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_status(&resp)
}

/// Replace a notice's title and description.
pub async fn update_notice(id: &str, draft: &NoticeDraft) -> Result<(), ApiError> {
    let resp = Request::put(&format!("{API_BASE}/notices/edit/{id}"))
        .json(draft)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_status(&resp)
}
