//! Request/response types for the public API.
//!
//! Responses mirror the stored records with the store-assigned `ObjectId`
//! projected to a hex string under `_id`; absent optional fields are omitted
//! from the JSON.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{default_true, Event, Registration, Session, Speaker, Sponsor};

fn hex_id(id: Option<mongodb::bson::oid::ObjectId>) -> String {
    id.map(|oid| oid.to_hex()).unwrap_or_default()
}

// ============================================================================
// Registration DTOs
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: Option<String>,
    pub institute: Option<String>,
    pub year: Option<String>,
    pub interests: Option<Vec<String>>,
    pub referral: Option<String>,
    #[serde(default = "default_true")]
    pub consent: bool,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        Self {
            id: None,
            name: req.name,
            email: req.email,
            phone: req.phone,
            institute: req.institute,
            year: req.year,
            interests: req.interests,
            referral: req.referral,
            consent: req.consent,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub status: String,
    pub id: String,
}

// ============================================================================
// Content Response DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct EventResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub registration_open: bool,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: hex_id(event.id),
            title: event.title,
            tagline: event.tagline,
            description: event.description,
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            venue: event.venue,
            city: event.city,
            registration_open: event.registration_open,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SpeakerResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl From<Speaker> for SpeakerResponse {
    fn from(speaker: Speaker) -> Self {
        Self {
            id: hex_id(speaker.id),
            name: speaker.name,
            title: speaker.title,
            company: speaker.company,
            bio: speaker.bio,
            photo_url: speaker.photo_url,
            tags: speaker.tags,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    pub start: String,
    pub end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: hex_id(session.id),
            title: session.title,
            speaker: session.speaker,
            track: session.track,
            start: session.start,
            end: session.end,
            level: session.level,
            description: session.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SponsorResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub tier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl From<Sponsor> for SponsorResponse {
    fn from(sponsor: Sponsor) -> Self {
        Self {
            id: hex_id(sponsor.id),
            name: sponsor.name,
            tier: sponsor.tier,
            logo_url: sponsor.logo_url,
            website: sponsor.website,
        }
    }
}
