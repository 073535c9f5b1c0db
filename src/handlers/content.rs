use axum::{extract::State, response::IntoResponse, Json};
use metrics::counter;
use serde_json::json;

use crate::dtos::{EventResponse, SessionResponse, SpeakerResponse, SponsorResponse};
use crate::error::AppError;
use crate::models::{Event, Session, Speaker, Sponsor};
use crate::startup::AppState;

/// Landing message, doubles as an uptime probe for the frontend.
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Student Community Day 2026 API running" }))
}

/// Current event record, seeding the documented defaults on first read.
///
/// The check-then-insert is not atomic: two concurrent first reads can each
/// insert a seed record. Harmless for a single-event deployment, so there is
/// no locking around it.
pub async fn get_event(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut events: Vec<Event> = state.db.get_documents(Event::COLLECTION, 1).await?;

    if let Some(event) = events.pop() {
        return Ok(Json(EventResponse::from(event)));
    }

    let seed = Event::seed();
    let id = state.db.create_document(Event::COLLECTION, &seed).await?;
    counter!("event_seeded_total").increment(1);
    tracing::info!(event_id = %id, "Seeded default event record");

    let mut event = seed;
    event.id = Some(id);
    Ok(Json(EventResponse::from(event)))
}

pub async fn get_speakers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let speakers: Vec<Speaker> = state.db.get_documents(Speaker::COLLECTION, None).await?;
    let speakers: Vec<SpeakerResponse> =
        speakers.into_iter().map(SpeakerResponse::from).collect();
    Ok(Json(speakers))
}

pub async fn get_schedule(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sessions: Vec<Session> = state.db.get_documents(Session::COLLECTION, None).await?;
    let sessions: Vec<SessionResponse> =
        sessions.into_iter().map(SessionResponse::from).collect();
    Ok(Json(sessions))
}

pub async fn get_sponsors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sponsors: Vec<Sponsor> = state.db.get_documents(Sponsor::COLLECTION, None).await?;
    let sponsors: Vec<SponsorResponse> =
        sponsors.into_iter().map(SponsorResponse::from).collect();
    Ok(Json(sponsors))
}
