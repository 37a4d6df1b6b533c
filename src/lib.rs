// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise Tracker: a small REST API over Firestore.
//!
//! This crate provides the backend for creating users and appending
//! exercise entries to each user's embedded log.

pub mod config;
pub mod dates;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
