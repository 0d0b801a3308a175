// SPDX-License-Identifier: MIT

//! SQLite wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Teams
//! - Accounts (including transactional registration)
//! - Profiles (fitness data, one per account)
//! - Activities
//! - Leaderboard entries
//! - Workout plans
//!
//! Referential rules live in the schema: deleting an account cascades to its
//! profile, activities and leaderboard entry; deleting a team nulls the team
//! reference on dependents without deleting them.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::AppError;
use crate::models::{
    Account, AccountPatch, AccountSummary, Activity, ActivityPatch, ActivityType, Difficulty,
    LeaderboardEntry, LeaderboardPatch, NewAccount, NewActivity, NewLeaderboardEntry, NewProfile,
    NewTeam, NewWorkout, Profile, ProfilePatch, Registration, Team, TeamPatch, Workout,
    WorkoutPatch,
};
use crate::time_utils::now_rfc3339;

/// Page size applied to every list query.
const DEFAULT_PAGE_SIZE: i64 = 100;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS teams (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL,
    first_name TEXT NOT NULL DEFAULT '',
    last_name TEXT NOT NULL DEFAULT '',
    password_hash TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS profiles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    account_id INTEGER NOT NULL UNIQUE
        REFERENCES accounts(id) ON DELETE CASCADE,
    email TEXT NOT NULL UNIQUE,
    team_id INTEGER REFERENCES teams(id) ON DELETE SET NULL,
    bio TEXT NOT NULL DEFAULT '',
    profile_picture TEXT NOT NULL DEFAULT '',
    total_calories_burned REAL NOT NULL DEFAULT 0,
    total_distance REAL NOT NULL DEFAULT 0,
    total_workouts INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS activities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    account_id INTEGER NOT NULL
        REFERENCES accounts(id) ON DELETE CASCADE,
    activity_type TEXT NOT NULL,
    duration_minutes INTEGER NOT NULL,
    distance_km REAL NOT NULL,
    calories REAL NOT NULL,
    intensity TEXT NOT NULL,
    notes TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS leaderboard_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    account_id INTEGER NOT NULL UNIQUE
        REFERENCES accounts(id) ON DELETE CASCADE,
    rank INTEGER NOT NULL DEFAULT 0,
    total_points INTEGER NOT NULL DEFAULT 0,
    total_activities INTEGER NOT NULL DEFAULT 0,
    team_id INTEGER REFERENCES teams(id) ON DELETE SET NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS workouts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    difficulty TEXT NOT NULL,
    duration_minutes INTEGER NOT NULL,
    exercises TEXT NOT NULL DEFAULT '[]',
    target_muscle_groups TEXT NOT NULL DEFAULT '[]',
    calories_estimate REAL NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_profiles_team ON profiles(team_id);
CREATE INDEX IF NOT EXISTS idx_activities_account ON activities(account_id);
CREATE INDEX IF NOT EXISTS idx_activities_type ON activities(activity_type);
CREATE INDEX IF NOT EXISTS idx_leaderboard_team ON leaderboard_entries(team_id);
"#;

/// SQLite database client.
#[derive(Clone)]
pub struct SqliteDb {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDb {
    /// Open (or create) the database file and initialize the schema.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::Database(format!("Failed to create database directory: {e}"))
                })?;
            }
        }
        let conn = Connection::open(path).map_err(db_err)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database (tests, seeding dry runs).
    pub fn open_in_memory() -> Result<Self, AppError> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, AppError> {
        // SQLite does not enforce foreign keys unless asked, and the cascade
        // and nullify rules depend on it.
        conn.pragma_update(None, "foreign_keys", true)
            .map_err(db_err)?;
        conn.execute_batch(SCHEMA).map_err(db_err)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    // ─── Team Operations ─────────────────────────────────────────

    /// Create a team and return the stored record.
    pub fn create_team(&self, new: &NewTeam) -> Result<Team, AppError> {
        let conn = self.conn.lock().unwrap();
        let now = now_rfc3339();
        conn.execute(
            "INSERT INTO teams (name, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)",
            params![new.name, new.description, now],
        )
        .map_err(db_err)?;
        let id = conn.last_insert_rowid();
        require_row(get_team(&conn, id)?)
    }

    pub fn get_team(&self, id: i64) -> Result<Option<Team>, AppError> {
        let conn = self.conn.lock().unwrap();
        get_team(&conn, id)
    }

    pub fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!("{TEAM_SELECT} ORDER BY id ASC LIMIT ?1"))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![DEFAULT_PAGE_SIZE], team_from_row)
            .map_err(db_err)?;
        collect_rows(rows)
    }

    /// Merge the provided fields into a team. Returns `None` if it does not
    /// exist.
    pub fn update_team(&self, id: i64, patch: &TeamPatch) -> Result<Option<Team>, AppError> {
        let conn = self.conn.lock().unwrap();
        let Some(existing) = get_team(&conn, id)? else {
            return Ok(None);
        };
        conn.execute(
            "UPDATE teams SET name = ?1, description = ?2, updated_at = ?3 WHERE id = ?4",
            params![
                patch.name.as_deref().unwrap_or(&existing.name),
                patch.description.as_deref().unwrap_or(&existing.description),
                now_rfc3339(),
                id
            ],
        )
        .map_err(db_err)?;
        get_team(&conn, id)
    }

    /// Delete a team. Dependent profiles and leaderboard entries keep their
    /// rows; their team reference is nulled by the schema.
    pub fn delete_team(&self, id: i64) -> Result<bool, AppError> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn
            .execute("DELETE FROM teams WHERE id = ?1", params![id])
            .map_err(db_err)?;
        Ok(deleted > 0)
    }

    // ─── Account Operations ──────────────────────────────────────

    /// Create a bare account (no profile or leaderboard entry).
    pub fn create_account(
        &self,
        new: &NewAccount,
        password_hash: Option<&str>,
    ) -> Result<Account, AppError> {
        let conn = self.conn.lock().unwrap();
        let now = now_rfc3339();
        conn.execute(
            "INSERT INTO accounts (username, email, first_name, last_name, password_hash,
                                   created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
            params![
                new.username,
                new.email,
                new.first_name,
                new.last_name,
                password_hash.unwrap_or(""),
                now
            ],
        )
        .map_err(db_err)?;
        let id = conn.last_insert_rowid();
        require_row(get_account(&conn, id)?)
    }

    /// Register a new user: account + empty profile + zero-valued leaderboard
    /// entry, in a single transaction. Either all three rows exist afterwards
    /// or none do.
    pub fn register_account(
        &self,
        reg: &Registration,
        password_hash: &str,
    ) -> Result<Account, AppError> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction().map_err(db_err)?;
        let now = now_rfc3339();

        tx.execute(
            "INSERT INTO accounts (username, email, first_name, last_name, password_hash,
                                   created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
            params![
                reg.username,
                reg.email,
                reg.first_name,
                reg.last_name,
                password_hash,
                now
            ],
        )
        .map_err(db_err)?;
        let account_id = tx.last_insert_rowid();

        tx.execute(
            "INSERT INTO profiles (account_id, email, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)",
            params![account_id, reg.email, now],
        )
        .map_err(db_err)?;

        tx.execute(
            "INSERT INTO leaderboard_entries (account_id, updated_at) VALUES (?1, ?2)",
            params![account_id, now],
        )
        .map_err(db_err)?;

        let account = require_row(get_account(&tx, account_id)?)?;
        tx.commit().map_err(db_err)?;
        Ok(account)
    }

    pub fn get_account(&self, id: i64) -> Result<Option<Account>, AppError> {
        let conn = self.conn.lock().unwrap();
        get_account(&conn, id)
    }

    pub fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!("{ACCOUNT_SELECT} ORDER BY id ASC LIMIT ?1"))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![DEFAULT_PAGE_SIZE], account_from_row)
            .map_err(db_err)?;
        collect_rows(rows)
    }

    pub fn update_account(
        &self,
        id: i64,
        patch: &AccountPatch,
    ) -> Result<Option<Account>, AppError> {
        let conn = self.conn.lock().unwrap();
        let Some(existing) = get_account(&conn, id)? else {
            return Ok(None);
        };
        conn.execute(
            "UPDATE accounts SET username = ?1, email = ?2, first_name = ?3, last_name = ?4,
                                 updated_at = ?5
             WHERE id = ?6",
            params![
                patch.username.as_deref().unwrap_or(&existing.username),
                patch.email.as_deref().unwrap_or(&existing.email),
                patch.first_name.as_deref().unwrap_or(&existing.first_name),
                patch.last_name.as_deref().unwrap_or(&existing.last_name),
                now_rfc3339(),
                id
            ],
        )
        .map_err(db_err)?;
        get_account(&conn, id)
    }

    /// Delete an account. The schema cascades to its profile, activities and
    /// leaderboard entry.
    pub fn delete_account(&self, id: i64) -> Result<bool, AppError> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn
            .execute("DELETE FROM accounts WHERE id = ?1", params![id])
            .map_err(db_err)?;
        Ok(deleted > 0)
    }

    // ─── Profile Operations ──────────────────────────────────────

    pub fn create_profile(&self, new: &NewProfile) -> Result<Profile, AppError> {
        let conn = self.conn.lock().unwrap();
        let now = now_rfc3339();
        conn.execute(
            "INSERT INTO profiles (account_id, email, team_id, bio, profile_picture,
                                   created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
            params![
                new.account_id,
                new.email,
                new.team_id,
                new.bio,
                new.profile_picture,
                now
            ],
        )
        .map_err(db_err)?;
        let id = conn.last_insert_rowid();
        require_row(get_profile(&conn, id)?)
    }

    pub fn get_profile(&self, id: i64) -> Result<Option<Profile>, AppError> {
        let conn = self.conn.lock().unwrap();
        get_profile(&conn, id)
    }

    pub fn list_profiles(&self) -> Result<Vec<Profile>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!("{PROFILE_SELECT} ORDER BY p.id ASC LIMIT ?1"))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![DEFAULT_PAGE_SIZE], profile_from_row)
            .map_err(db_err)?;
        collect_rows(rows)
    }

    /// Profiles belonging to a team. Unknown team ids yield an empty list.
    pub fn profiles_by_team(&self, team_id: i64) -> Result<Vec<Profile>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!(
                "{PROFILE_SELECT} WHERE p.team_id = ?1 ORDER BY p.id ASC LIMIT ?2"
            ))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![team_id, DEFAULT_PAGE_SIZE], profile_from_row)
            .map_err(db_err)?;
        collect_rows(rows)
    }

    pub fn update_profile(
        &self,
        id: i64,
        patch: &ProfilePatch,
    ) -> Result<Option<Profile>, AppError> {
        let conn = self.conn.lock().unwrap();
        let Some(existing) = get_profile(&conn, id)? else {
            return Ok(None);
        };
        conn.execute(
            "UPDATE profiles SET email = ?1, team_id = ?2, bio = ?3, profile_picture = ?4,
                                 total_calories_burned = ?5, total_distance = ?6,
                                 total_workouts = ?7, updated_at = ?8
             WHERE id = ?9",
            params![
                patch.email.as_deref().unwrap_or(&existing.email),
                patch.team_id.or(existing.team_id),
                patch.bio.as_deref().unwrap_or(&existing.bio),
                patch
                    .profile_picture
                    .as_deref()
                    .unwrap_or(&existing.profile_picture),
                patch
                    .total_calories_burned
                    .unwrap_or(existing.total_calories_burned),
                patch.total_distance.unwrap_or(existing.total_distance),
                patch.total_workouts.unwrap_or(existing.total_workouts),
                now_rfc3339(),
                id
            ],
        )
        .map_err(db_err)?;
        get_profile(&conn, id)
    }

    pub fn delete_profile(&self, id: i64) -> Result<bool, AppError> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn
            .execute("DELETE FROM profiles WHERE id = ?1", params![id])
            .map_err(db_err)?;
        Ok(deleted > 0)
    }

    // ─── Activity Operations ─────────────────────────────────────

    pub fn create_activity(&self, new: &NewActivity) -> Result<Activity, AppError> {
        let conn = self.conn.lock().unwrap();
        let now = now_rfc3339();
        conn.execute(
            "INSERT INTO activities (account_id, activity_type, duration_minutes, distance_km,
                                     calories, intensity, notes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
            params![
                new.account_id,
                new.activity_type,
                new.duration_minutes,
                new.distance_km,
                new.calories,
                new.intensity,
                new.notes,
                now
            ],
        )
        .map_err(db_err)?;
        let id = conn.last_insert_rowid();
        require_row(get_activity(&conn, id)?)
    }

    pub fn get_activity(&self, id: i64) -> Result<Option<Activity>, AppError> {
        let conn = self.conn.lock().unwrap();
        get_activity(&conn, id)
    }

    /// All activities, most recent first.
    pub fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!("{ACTIVITY_SELECT} {ACTIVITY_ORDER} LIMIT ?1"))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![DEFAULT_PAGE_SIZE], activity_from_row)
            .map_err(db_err)?;
        collect_rows(rows)
    }

    /// Activities for one account, most recent first. Unknown account ids
    /// yield an empty list.
    pub fn activities_by_account(&self, account_id: i64) -> Result<Vec<Activity>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!(
                "{ACTIVITY_SELECT} WHERE act.account_id = ?1 {ACTIVITY_ORDER} LIMIT ?2"
            ))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![account_id, DEFAULT_PAGE_SIZE], activity_from_row)
            .map_err(db_err)?;
        collect_rows(rows)
    }

    /// Activities of one type, most recent first.
    pub fn activities_by_type(&self, activity_type: ActivityType) -> Result<Vec<Activity>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!(
                "{ACTIVITY_SELECT} WHERE act.activity_type = ?1 {ACTIVITY_ORDER} LIMIT ?2"
            ))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![activity_type, DEFAULT_PAGE_SIZE], activity_from_row)
            .map_err(db_err)?;
        collect_rows(rows)
    }

    pub fn update_activity(
        &self,
        id: i64,
        patch: &ActivityPatch,
    ) -> Result<Option<Activity>, AppError> {
        let conn = self.conn.lock().unwrap();
        let Some(existing) = get_activity(&conn, id)? else {
            return Ok(None);
        };
        conn.execute(
            "UPDATE activities SET activity_type = ?1, duration_minutes = ?2, distance_km = ?3,
                                   calories = ?4, intensity = ?5, notes = ?6, updated_at = ?7
             WHERE id = ?8",
            params![
                patch.activity_type.unwrap_or(existing.activity_type),
                patch.duration_minutes.unwrap_or(existing.duration_minutes),
                patch.distance_km.unwrap_or(existing.distance_km),
                patch.calories.unwrap_or(existing.calories),
                patch.intensity.unwrap_or(existing.intensity),
                patch.notes.as_deref().unwrap_or(&existing.notes),
                now_rfc3339(),
                id
            ],
        )
        .map_err(db_err)?;
        get_activity(&conn, id)
    }

    pub fn delete_activity(&self, id: i64) -> Result<bool, AppError> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn
            .execute("DELETE FROM activities WHERE id = ?1", params![id])
            .map_err(db_err)?;
        Ok(deleted > 0)
    }

    // ─── Leaderboard Operations ──────────────────────────────────

    pub fn create_leaderboard_entry(
        &self,
        new: &NewLeaderboardEntry,
    ) -> Result<LeaderboardEntry, AppError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO leaderboard_entries (account_id, rank, total_points, total_activities,
                                              team_id, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                new.account_id,
                new.rank,
                new.total_points,
                new.total_activities,
                new.team_id,
                now_rfc3339()
            ],
        )
        .map_err(db_err)?;
        let id = conn.last_insert_rowid();
        require_row(get_leaderboard_entry(&conn, id)?)
    }

    pub fn get_leaderboard_entry(&self, id: i64) -> Result<Option<LeaderboardEntry>, AppError> {
        let conn = self.conn.lock().unwrap();
        get_leaderboard_entry(&conn, id)
    }

    /// All entries ordered by total points, highest first. Ties are broken by
    /// insertion order (ascending id).
    pub fn list_leaderboard_entries(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!("{ENTRY_SELECT} {ENTRY_ORDER} LIMIT ?1"))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![DEFAULT_PAGE_SIZE], entry_from_row)
            .map_err(db_err)?;
        collect_rows(rows)
    }

    /// One team's entries, same ordering as the global ranking.
    pub fn leaderboard_by_team(&self, team_id: i64) -> Result<Vec<LeaderboardEntry>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!(
                "{ENTRY_SELECT} WHERE l.team_id = ?1 {ENTRY_ORDER} LIMIT ?2"
            ))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![team_id, DEFAULT_PAGE_SIZE], entry_from_row)
            .map_err(db_err)?;
        collect_rows(rows)
    }

    pub fn update_leaderboard_entry(
        &self,
        id: i64,
        patch: &LeaderboardPatch,
    ) -> Result<Option<LeaderboardEntry>, AppError> {
        let conn = self.conn.lock().unwrap();
        let Some(existing) = get_leaderboard_entry(&conn, id)? else {
            return Ok(None);
        };
        conn.execute(
            "UPDATE leaderboard_entries SET rank = ?1, total_points = ?2, total_activities = ?3,
                                            team_id = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                patch.rank.unwrap_or(existing.rank),
                patch.total_points.unwrap_or(existing.total_points),
                patch.total_activities.unwrap_or(existing.total_activities),
                patch.team_id.or(existing.team_id),
                now_rfc3339(),
                id
            ],
        )
        .map_err(db_err)?;
        get_leaderboard_entry(&conn, id)
    }

    pub fn delete_leaderboard_entry(&self, id: i64) -> Result<bool, AppError> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn
            .execute("DELETE FROM leaderboard_entries WHERE id = ?1", params![id])
            .map_err(db_err)?;
        Ok(deleted > 0)
    }

    // ─── Workout Operations ──────────────────────────────────────

    pub fn create_workout(&self, new: &NewWorkout) -> Result<Workout, AppError> {
        let conn = self.conn.lock().unwrap();
        let now = now_rfc3339();
        conn.execute(
            "INSERT INTO workouts (name, description, difficulty, duration_minutes, exercises,
                                   target_muscle_groups, calories_estimate, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
            params![
                new.name,
                new.description,
                new.difficulty,
                new.duration_minutes,
                encode_list(&new.exercises)?,
                encode_list(&new.target_muscle_groups)?,
                new.calories_estimate,
                now
            ],
        )
        .map_err(db_err)?;
        let id = conn.last_insert_rowid();
        require_row(get_workout(&conn, id)?)
    }

    pub fn get_workout(&self, id: i64) -> Result<Option<Workout>, AppError> {
        let conn = self.conn.lock().unwrap();
        get_workout(&conn, id)
    }

    pub fn list_workouts(&self) -> Result<Vec<Workout>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!("{WORKOUT_SELECT} ORDER BY id ASC LIMIT ?1"))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![DEFAULT_PAGE_SIZE], workout_from_row)
            .map_err(db_err)?;
        collect_rows(rows)
    }

    pub fn workouts_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<Workout>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!(
                "{WORKOUT_SELECT} WHERE difficulty = ?1 ORDER BY id ASC LIMIT ?2"
            ))
            .map_err(db_err)?;
        let rows = stmt
            .query_map(params![difficulty, DEFAULT_PAGE_SIZE], workout_from_row)
            .map_err(db_err)?;
        collect_rows(rows)
    }

    pub fn update_workout(
        &self,
        id: i64,
        patch: &WorkoutPatch,
    ) -> Result<Option<Workout>, AppError> {
        let conn = self.conn.lock().unwrap();
        let Some(existing) = get_workout(&conn, id)? else {
            return Ok(None);
        };
        conn.execute(
            "UPDATE workouts SET name = ?1, description = ?2, difficulty = ?3,
                                 duration_minutes = ?4, exercises = ?5,
                                 target_muscle_groups = ?6, calories_estimate = ?7,
                                 updated_at = ?8
             WHERE id = ?9",
            params![
                patch.name.as_deref().unwrap_or(&existing.name),
                patch.description.as_deref().unwrap_or(&existing.description),
                patch.difficulty.unwrap_or(existing.difficulty),
                patch.duration_minutes.unwrap_or(existing.duration_minutes),
                encode_list(patch.exercises.as_ref().unwrap_or(&existing.exercises))?,
                encode_list(
                    patch
                        .target_muscle_groups
                        .as_ref()
                        .unwrap_or(&existing.target_muscle_groups)
                )?,
                patch.calories_estimate.unwrap_or(existing.calories_estimate),
                now_rfc3339(),
                id
            ],
        )
        .map_err(db_err)?;
        get_workout(&conn, id)
    }

    pub fn delete_workout(&self, id: i64) -> Result<bool, AppError> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn
            .execute("DELETE FROM workouts WHERE id = ?1", params![id])
            .map_err(db_err)?;
        Ok(deleted > 0)
    }
}

// ─── Row Mapping ─────────────────────────────────────────────

const TEAM_SELECT: &str = "SELECT id, name, description, created_at, updated_at FROM teams";

const ACCOUNT_SELECT: &str =
    "SELECT id, username, email, first_name, last_name, created_at, updated_at FROM accounts";

const PROFILE_SELECT: &str = "SELECT p.id, p.account_id, a.username, a.email, a.first_name,
            a.last_name, p.email, p.team_id, t.name, p.bio, p.profile_picture,
            p.total_calories_burned, p.total_distance, p.total_workouts,
            p.created_at, p.updated_at
     FROM profiles p
     JOIN accounts a ON a.id = p.account_id
     LEFT JOIN teams t ON t.id = p.team_id";

const ACTIVITY_SELECT: &str = "SELECT act.id, act.account_id, a.username, act.activity_type,
            act.duration_minutes, act.distance_km, act.calories, act.intensity,
            act.notes, act.created_at, act.updated_at
     FROM activities act
     JOIN accounts a ON a.id = act.account_id";

const ACTIVITY_ORDER: &str = "ORDER BY act.created_at DESC, act.id DESC";

const ENTRY_SELECT: &str = "SELECT l.id, l.account_id, a.username, l.rank, l.total_points,
            l.total_activities, l.team_id, t.name, l.updated_at
     FROM leaderboard_entries l
     JOIN accounts a ON a.id = l.account_id
     LEFT JOIN teams t ON t.id = l.team_id";

const ENTRY_ORDER: &str = "ORDER BY l.total_points DESC, l.id ASC";

const WORKOUT_SELECT: &str = "SELECT id, name, description, difficulty, duration_minutes,
            exercises, target_muscle_groups, calories_estimate, created_at, updated_at
     FROM workouts";

fn team_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

fn account_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        first_name: row.get(3)?,
        last_name: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

fn profile_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        account: AccountSummary {
            id: row.get(1)?,
            username: row.get(2)?,
            email: row.get(3)?,
            first_name: row.get(4)?,
            last_name: row.get(5)?,
        },
        email: row.get(6)?,
        team_id: row.get(7)?,
        team_name: row.get(8)?,
        bio: row.get(9)?,
        profile_picture: row.get(10)?,
        total_calories_burned: row.get(11)?,
        total_distance: row.get(12)?,
        total_workouts: row.get(13)?,
        created_at: row.get(14)?,
        updated_at: row.get(15)?,
    })
}

fn activity_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Activity> {
    Ok(Activity {
        id: row.get(0)?,
        account_id: row.get(1)?,
        username: row.get(2)?,
        activity_type: row.get(3)?,
        duration_minutes: row.get(4)?,
        distance_km: row.get(5)?,
        calories: row.get(6)?,
        intensity: row.get(7)?,
        notes: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

fn entry_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<LeaderboardEntry> {
    Ok(LeaderboardEntry {
        id: row.get(0)?,
        account_id: row.get(1)?,
        username: row.get(2)?,
        rank: row.get(3)?,
        total_points: row.get(4)?,
        total_activities: row.get(5)?,
        team_id: row.get(6)?,
        team_name: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

fn workout_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Workout> {
    Ok(Workout {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        difficulty: row.get(3)?,
        duration_minutes: row.get(4)?,
        exercises: decode_list(row, 5)?,
        target_muscle_groups: decode_list(row, 6)?,
        calories_estimate: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

/// Encode an ordered name list as a JSON text column.
fn encode_list(items: &[String]) -> Result<String, AppError> {
    serde_json::to_string(items).map_err(|e| AppError::Database(e.to_string()))
}

fn decode_list(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

// ─── Shared helpers (single-row reads, error mapping) ────────

fn get_team(conn: &Connection, id: i64) -> Result<Option<Team>, AppError> {
    conn.query_row(
        &format!("{TEAM_SELECT} WHERE id = ?1"),
        params![id],
        team_from_row,
    )
    .optional()
    .map_err(db_err)
}

fn get_account(conn: &Connection, id: i64) -> Result<Option<Account>, AppError> {
    conn.query_row(
        &format!("{ACCOUNT_SELECT} WHERE id = ?1"),
        params![id],
        account_from_row,
    )
    .optional()
    .map_err(db_err)
}

fn get_profile(conn: &Connection, id: i64) -> Result<Option<Profile>, AppError> {
    conn.query_row(
        &format!("{PROFILE_SELECT} WHERE p.id = ?1"),
        params![id],
        profile_from_row,
    )
    .optional()
    .map_err(db_err)
}

fn get_activity(conn: &Connection, id: i64) -> Result<Option<Activity>, AppError> {
    conn.query_row(
        &format!("{ACTIVITY_SELECT} WHERE act.id = ?1"),
        params![id],
        activity_from_row,
    )
    .optional()
    .map_err(db_err)
}

fn get_leaderboard_entry(conn: &Connection, id: i64) -> Result<Option<LeaderboardEntry>, AppError> {
    conn.query_row(
        &format!("{ENTRY_SELECT} WHERE l.id = ?1"),
        params![id],
        entry_from_row,
    )
    .optional()
    .map_err(db_err)
}

fn get_workout(conn: &Connection, id: i64) -> Result<Option<Workout>, AppError> {
    conn.query_row(
        &format!("{WORKOUT_SELECT} WHERE id = ?1"),
        params![id],
        workout_from_row,
    )
    .optional()
    .map_err(db_err)
}

/// A row we just inserted must be readable back.
fn require_row<T>(row: Option<T>) -> Result<T, AppError> {
    row.ok_or_else(|| AppError::Database("Inserted row missing on read-back".to_string()))
}

fn collect_rows<T>(
    rows: rusqlite::MappedRows<'_, impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>>,
) -> Result<Vec<T>, AppError> {
    rows.collect::<rusqlite::Result<Vec<T>>>().map_err(db_err)
}

/// Map storage errors into the API error surface. Constraint violations
/// (unique keys, foreign keys) are client errors; everything else is a 500.
fn db_err(err: rusqlite::Error) -> AppError {
    match &err {
        rusqlite::Error::SqliteFailure(code, Some(msg))
            if code.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::BadRequest(format!("Constraint violation: {msg}"))
        }
        _ => AppError::Database(err.to_string()),
    }
}
