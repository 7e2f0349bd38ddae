//! Wire contracts for the Open WebUI user and usage endpoints.
//!
//! The user-listing endpoint is the list-based variant of the API: the total
//! is the length of the returned `users` array, and the collected user IDs
//! feed the usage query. A server-supplied `total` field, if present, is
//! ignored rather than trusted.

use serde::{Deserialize, Serialize};

/// One entry of the user-listing response. Only the ID is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
}

/// Response body of `GET /api/v1/users/`.
#[derive(Debug, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<User>,
}

impl UserList {
    /// IDs in upstream order, for the usage query body.
    pub fn user_ids(&self) -> Vec<String> {
        self.users.iter().map(|u| u.id.clone()).collect()
    }
}

/// Request body of `GET /api/usage`. `model_ids` stays empty; the query is
/// scoped by user IDs only.
#[derive(Debug, Serialize)]
pub struct UsageQuery {
    pub model_ids: Vec<String>,
    pub user_ids: Vec<String>,
}

impl UsageQuery {
    pub fn for_users(user_ids: Vec<String>) -> Self {
        Self { model_ids: Vec::new(), user_ids }
    }
}

/// Response body of `GET /api/usage`: the IDs of currently active users.
#[derive(Debug, Deserialize)]
pub struct UsageResponse {
    #[serde(default)]
    pub user_ids: Vec<String>,
}

/// The request-scoped pair a scrape publishes. Computed fresh per scrape and
/// discarded after the response is written; nothing relates `logged_in` to
/// `total` (upstream values pass through unmodified).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub logged_in: u64,
    pub total: u64,
}

impl StatsSnapshot {
    pub fn new(users: &UserList, usage: &UsageResponse) -> Self {
        Self {
            logged_in: usage.user_ids.len() as u64,
            total: users.users.len() as u64,
        }
    }
}
