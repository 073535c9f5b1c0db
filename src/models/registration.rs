//! Registration model - one attendee signup, stored as submitted.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::default_true;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// College/University/Organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    /// How the attendee heard about the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral: Option<String>,
    /// Agreed to terms and updates.
    #[serde(default = "default_true")]
    pub consent: bool,
}

impl Registration {
    pub const COLLECTION: &'static str = "registration";
}
