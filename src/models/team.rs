// SPDX-License-Identifier: MIT

//! Team model for storage and API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A team grouping user profiles and leaderboard entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    /// Team name (unique)
    pub name: String,
    pub description: String,
    /// When the team was created (RFC3339)
    pub created_at: String,
    /// Last modification timestamp (RFC3339)
    pub updated_at: String,
}

/// Payload for creating a team.
#[derive(Debug, Deserialize, Validate)]
pub struct NewTeam {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Partial update for a team. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct TeamPatch {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
}
