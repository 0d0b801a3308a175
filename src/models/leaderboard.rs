// SPDX-License-Identifier: MIT

//! Leaderboard entry model for storage and API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A leaderboard entry, one per account.
///
/// `rank` is advisory display data maintained by manual updates (or an
/// external batch job); it is never derived from `total_points` here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub account_id: i64,
    /// Owner's username (denormalized for display)
    pub username: String,
    pub rank: i64,
    pub total_points: i64,
    pub total_activities: i64,
    /// Team reference; cleared when the team is deleted
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub updated_at: String,
}

/// Payload for creating a leaderboard entry.
#[derive(Debug, Deserialize, Validate)]
pub struct NewLeaderboardEntry {
    pub account_id: i64,
    #[serde(default)]
    pub rank: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub total_points: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub total_activities: i64,
    pub team_id: Option<i64>,
}

/// Partial update for a leaderboard entry.
#[derive(Debug, Deserialize, Validate)]
pub struct LeaderboardPatch {
    pub rank: Option<i64>,
    #[validate(range(min = 0))]
    pub total_points: Option<i64>,
    #[validate(range(min = 0))]
    pub total_activities: Option<i64>,
    pub team_id: Option<i64>,
}
