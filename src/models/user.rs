//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User document stored in Firestore.
///
/// The `id` field duplicates the document key so that stored objects are
/// self-describing when returned raw from the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Generated identifier (also used as document ID)
    pub id: String,
    /// Unique username
    pub username: String,
    /// Exercise log, append-only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub log: Vec<Exercise>,
}

/// A single exercise entry embedded in a user's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// What was done
    pub description: String,
    /// Duration in minutes
    pub duration: i64,
    /// Date string, e.g. "Sun Jan 15 2023"
    pub date: String,
}
