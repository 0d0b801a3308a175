// SPDX-License-Identifier: MIT

//! Fitness profile model for storage and API.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::AccountSummary;

/// Fitness profile, one per account.
///
/// The aggregate counters are plain mutable fields; nothing recomputes them
/// from logged activities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    /// Owning account, embedded for display
    pub account: AccountSummary,
    /// Contact email (unique)
    pub email: String,
    /// Team membership; cleared when the team is deleted
    pub team_id: Option<i64>,
    /// Team name (denormalized for display)
    pub team_name: Option<String>,
    pub bio: String,
    pub profile_picture: String,
    pub total_calories_burned: f64,
    pub total_distance: f64,
    pub total_workouts: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for creating a profile.
#[derive(Debug, Deserialize, Validate)]
pub struct NewProfile {
    pub account_id: i64,
    #[validate(email)]
    pub email: String,
    pub team_id: Option<i64>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_picture: String,
}

/// Partial update for a profile.
#[derive(Debug, Deserialize, Validate)]
pub struct ProfilePatch {
    #[validate(email)]
    pub email: Option<String>,
    pub team_id: Option<i64>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    #[validate(range(min = 0.0))]
    pub total_calories_burned: Option<f64>,
    #[validate(range(min = 0.0))]
    pub total_distance: Option<f64>,
    #[validate(range(min = 0))]
    pub total_workouts: Option<i64>,
}
