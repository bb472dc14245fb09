//! Request and response payloads for the signer service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request for signing a set of answers
///
/// Missing fields deserialize as empty so that validation reports which one
/// is absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub answers: Option<Vec<String>>,
}

/// Response for a successful sign request
#[derive(Debug, Serialize, Deserialize)]
pub struct SignResponse {
    pub signature: String,
}

/// Request for retrieving previously signed answers
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub signature: String,
}

/// Response for a successful verify request
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub status: String,
    pub answers: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// A persisted session as returned by the store
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub answers: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<StoredSession> for VerifyResponse {
    fn from(session: StoredSession) -> Self {
        Self {
            status: "OK".to_string(),
            answers: session.answers,
            timestamp: session.created_at,
        }
    }
}
