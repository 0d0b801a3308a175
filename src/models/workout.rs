// SPDX-License-Identifier: MIT

//! Workout plan model for storage and API.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Difficulty level of a workout plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

impl ToSql for Difficulty {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Difficulty {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Self::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown difficulty: {text}").into()))
    }
}

/// A workout plan. Standalone: not tied to any account or team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Duration in minutes
    pub duration_minutes: i64,
    /// Ordered exercise names
    pub exercises: Vec<String>,
    /// Ordered target muscle groups
    pub target_muscle_groups: Vec<String>,
    pub calories_estimate: f64,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for creating a workout plan.
#[derive(Debug, Deserialize, Validate)]
pub struct NewWorkout {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub difficulty: Difficulty,
    #[validate(range(min = 1))]
    pub duration_minutes: i64,
    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default)]
    pub target_muscle_groups: Vec<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub calories_estimate: f64,
}

/// Partial update for a workout plan.
#[derive(Debug, Deserialize, Validate)]
pub struct WorkoutPatch {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    #[validate(range(min = 1))]
    pub duration_minutes: Option<i64>,
    pub exercises: Option<Vec<String>>,
    pub target_muscle_groups: Option<Vec<String>>,
    #[validate(range(min = 0.0))]
    pub calories_estimate: Option<f64>,
}
