//! Lead-capture endpoint client

mod client;
mod traits;

pub use client::{LeadClient, LeadPayload, SaveLeadResponse, SubmitError};
pub use traits::LeadApi;

#[cfg(test)]
pub use traits::MockLeadApi;
