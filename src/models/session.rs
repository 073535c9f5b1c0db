//! Session model - one talk or workshop slot on the schedule.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A schedule slot. `speaker` is a free-text reference to a speaker name,
/// not a foreign key; nothing enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    /// Start time, e.g. "10:00 AM".
    pub start: String,
    /// End time, e.g. "10:45 AM".
    pub end: String,
    /// Beginner/Intermediate/Advanced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Session {
    pub const COLLECTION: &'static str = "session";
}
