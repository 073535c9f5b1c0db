use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use metrics::counter;
use validator::Validate;

use crate::dtos::{RegisterRequest, RegisterResponse};
use crate::error::AppError;
use crate::models::Registration;
use crate::startup::AppState;

/// Store one attendee registration. No dedup: submitting twice records twice.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let registration = Registration::from(payload);
    let id = state
        .db
        .create_document(Registration::COLLECTION, &registration)
        .await?;

    counter!("registrations_total").increment(1);
    tracing::info!(registration_id = %id, "Attendee registration stored");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            status: "ok".to_string(),
            id: id.to_hex(),
        }),
    ))
}
