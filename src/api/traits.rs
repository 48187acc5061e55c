//! Trait abstraction for the lead-capture client to enable mocking in tests

use async_trait::async_trait;

use super::client::{LeadClient, LeadPayload, SubmitError};

/// Trait for lead submission, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadApi: Send + Sync {
    /// Submit a lead payload to the remote endpoint
    async fn save_lead(&self, payload: LeadPayload) -> Result<(), SubmitError>;
}

#[async_trait]
impl LeadApi for LeadClient {
    async fn save_lead(&self, payload: LeadPayload) -> Result<(), SubmitError> {
        LeadClient::save_lead(self, &payload).await
    }
}
