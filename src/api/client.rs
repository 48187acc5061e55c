//! HTTP client for the lead-capture endpoint
//!
//! Submits captured leads as JSON to `POST {base_url}/save-lead` and maps
//! the acknowledgement body to a typed result.

use crate::state::DraftLead;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default lead-capture endpoint; `LEADFORM_API_BASE` at build time overrides it
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Channel tag attached to every lead submitted from this client
pub const LEAD_SOURCE: &str = "website";

const SAVE_LEAD_PATH: &str = "/save-lead";
const FALLBACK_REJECTION: &str = "Failed to save lead";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Submission failure, either on the wire or reported by the server
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Network failure, non-JSON response body, or client construction error
    #[error("lead submission request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered but did not acknowledge the lead
    #[error("lead rejected: {0}")]
    Rejected(String),
}

/// Outbound wire shape for `POST /save-lead`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub source: String,
}

impl LeadPayload {
    /// Build the outbound payload from a Draft Lead snapshot.
    ///
    /// Company and message are folded into a single composite message field;
    /// an empty company is rendered as a literal `-`.
    pub fn from_draft(draft: &DraftLead) -> Self {
        let company = if draft.company.is_empty() {
            "-"
        } else {
            &draft.company
        };
        Self {
            name: draft.full_name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            message: format!("Company: {}\nMessage: {}", company, draft.message),
            source: LEAD_SOURCE.to_string(),
        }
    }
}

/// Acknowledgement body returned by the lead-capture endpoint.
/// Both fields are defaulted so sparse bodies still parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveLeadResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Client for the lead-capture endpoint
#[derive(Clone)]
pub struct LeadClient {
    client: reqwest::Client,
    base_url: String,
}

impl LeadClient {
    /// Create a new client with an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Resolve the base URL: user config, then build-time override, then default
    pub fn resolve_base_url(configured: Option<&str>) -> &str {
        configured
            .or(option_env!("LEADFORM_API_BASE"))
            .unwrap_or(DEFAULT_BASE_URL)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit a lead and await the server acknowledgement.
    ///
    /// Success requires both an HTTP success status and a truthy `ok` flag in
    /// the body. A body that fails to parse as JSON surfaces as a transport
    /// error; callers collapse every variant to one generic user message.
    pub async fn save_lead(&self, payload: &LeadPayload) -> Result<(), SubmitError> {
        let resp = self
            .client
            .post(self.url(SAVE_LEAD_PATH))
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        let body: SaveLeadResponse = resp.json().await?;
        debug!(%status, ok = body.ok, detail = ?body.detail, "save-lead response");

        if !status.is_success() || !body.ok {
            return Err(SubmitError::Rejected(
                body.detail
                    .unwrap_or_else(|| FALLBACK_REJECTION.to_string()),
            ));
        }

        Ok(())
    }
}
