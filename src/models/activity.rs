// SPDX-License-Identifier: MIT

//! Logged activity model for storage and API.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Kind of activity being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Running,
    Cycling,
    Swimming,
    Walking,
    Gym,
    Yoga,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Running => "running",
            ActivityType::Cycling => "cycling",
            ActivityType::Swimming => "swimming",
            ActivityType::Walking => "walking",
            ActivityType::Gym => "gym",
            ActivityType::Yoga => "yoga",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "running" => Some(ActivityType::Running),
            "cycling" => Some(ActivityType::Cycling),
            "swimming" => Some(ActivityType::Swimming),
            "walking" => Some(ActivityType::Walking),
            "gym" => Some(ActivityType::Gym),
            "yoga" => Some(ActivityType::Yoga),
            _ => None,
        }
    }
}

impl ToSql for ActivityType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ActivityType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Self::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown activity type: {text}").into()))
    }
}

/// Effort level of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "low" => Some(Intensity::Low),
            "medium" => Some(Intensity::Medium),
            "high" => Some(Intensity::High),
            _ => None,
        }
    }
}

impl ToSql for Intensity {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Intensity {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Self::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown intensity: {text}").into()))
    }
}

/// A logged activity, including the owner's username for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    /// Owning account
    pub account_id: i64,
    /// Owner's username (denormalized for display)
    pub username: String,
    pub activity_type: ActivityType,
    /// Duration in minutes
    pub duration_minutes: i64,
    /// Distance in kilometers
    pub distance_km: f64,
    pub calories: f64,
    pub intensity: Intensity,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for logging an activity.
#[derive(Debug, Deserialize, Validate)]
pub struct NewActivity {
    pub account_id: i64,
    pub activity_type: ActivityType,
    #[validate(range(min = 1))]
    pub duration_minutes: i64,
    #[validate(range(min = 0.0))]
    pub distance_km: f64,
    #[validate(range(min = 0.0))]
    pub calories: f64,
    pub intensity: Intensity,
    #[serde(default)]
    pub notes: String,
}

/// Partial update for an activity.
#[derive(Debug, Deserialize, Validate)]
pub struct ActivityPatch {
    pub activity_type: Option<ActivityType>,
    #[validate(range(min = 1))]
    pub duration_minutes: Option<i64>,
    #[validate(range(min = 0.0))]
    pub distance_km: Option<f64>,
    #[validate(range(min = 0.0))]
    pub calories: Option<f64>,
    pub intensity: Option<Intensity>,
    pub notes: Option<String>,
}
