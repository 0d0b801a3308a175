// SPDX-License-Identifier: MIT

//! TeamFit-Tracker: team fitness tracking backend
//!
//! This crate provides the REST API for teams, user accounts and profiles,
//! logged activities, leaderboards and workout plans.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::SqliteDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: SqliteDb,
}
