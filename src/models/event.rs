//! Event model - the single conference record served by `/api/event`.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::default_true;

/// The conference itself. The `event` collection holds at most one logical
/// current record; the first read seeds it with [`Event::seed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Human-readable date, e.g. "2026-03-14".
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default = "default_true")]
    pub registration_open: bool,
}

impl Event {
    pub const COLLECTION: &'static str = "event";

    /// Default record inserted when the collection is empty.
    pub fn seed() -> Self {
        Self {
            id: None,
            title: "Student Community Day 2026".to_string(),
            tagline: Some("Learn, build, and connect.".to_string()),
            description: Some(
                "A full-day community-run conference with talks, hands-on workshops, \
                 and networking for students."
                    .to_string(),
            ),
            date: "2026-03-14".to_string(),
            start_time: Some("09:00 AM".to_string()),
            end_time: Some("05:30 PM".to_string()),
            venue: "City Convention Centre, Pune".to_string(),
            city: Some("Pune".to_string()),
            registration_open: true,
        }
    }
}
