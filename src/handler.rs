//! HTTP request handlers for the URL shortener API
//!
//! - `shorten` turns a submitted URL into its short ID
//! - `redirect_url` sends a short ID back to the URL it was made from

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::AppError;
use crate::model::{ShortenRequest, ShortenResponse};
use crate::store::AppState;

/// Creates (or refreshes) the short ID for a URL
///
/// The body is decoded as JSON whatever its `Content-Type`, so clients that
/// post `{"url": ...}` as plain text still work.
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// - **200 OK** - `{"shortURL": "<id>"}`
/// - **400 Bad Request** - Body is not a JSON object with a string `url`;
///   the plain-text body is the decoder's message
pub async fn shorten(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenResponse>, AppError> {
    let payload: ShortenRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::debug!(error = %err, "rejecting shorten request");
        AppError::BadRequest(err.to_string())
    })?;

    let short_url = state.store.put(&payload.url);

    Ok(Json(ShortenResponse { short_url }))
}

/// Redirects a short ID to its original URL
///
/// # Path Parameters
///
/// - `id` - Everything after `/redirect/`, slashes included. Only a bare
///   short ID can ever match a record.
///
/// # Response
///
/// - **302 Found** - `Location` carries the original URL verbatim
/// - **404 Not Found** - `URL not found`
pub async fn redirect_url(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect_to(&state, &id)
}

/// `GET /redirect/` with nothing after the prefix
pub async fn redirect_empty_id(State(state): State<AppState>) -> Result<Response, AppError> {
    redirect_to(&state, "")
}

fn redirect_to(state: &AppState, id: &str) -> Result<Response, AppError> {
    let record = state.store.get(id)?;

    let location = HeaderValue::try_from(record.original_url).map_err(|_| {
        tracing::error!(id = %id, "stored URL cannot be used as a Location header");
        AppError::InvalidRedirectTarget
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
