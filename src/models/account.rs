// SPDX-License-Identifier: MIT

//! Account (login identity) model for storage and API.
//!
//! Accounts hold credentials and name fields; fitness data lives on the
//! associated [`Profile`](crate::models::Profile). The password hash is kept
//! out of these structs entirely so it can never leak into a response body.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    /// Login name (unique)
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Condensed account fields embedded in profile responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Payload for creating a bare account (no profile or leaderboard entry).
#[derive(Debug, Deserialize, Validate)]
pub struct NewAccount {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Optional; hashed before storage when present
    #[validate(length(min = 1))]
    pub password: Option<String>,
}

/// Registration payload: creates the account plus its empty profile and
/// zero-valued leaderboard entry in one transaction.
#[derive(Debug, Deserialize, Validate)]
pub struct Registration {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Partial update for an account.
#[derive(Debug, Deserialize, Validate)]
pub struct AccountPatch {
    #[validate(length(min = 1, max = 150))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
