//! Route definitions for the URL shortener API

use axum::routing::{get, post};
use axum::Router;

use crate::handler::{redirect_empty_id, redirect_url, shorten};
use crate::store::AppState;

/// Creates the application router
///
/// # Route Definitions
///
/// - `POST /shorten` - Creates a short ID for a URL
/// - `GET /redirect/{*id}` - Redirects to the original URL; the ID is the
///   whole remainder of the path
/// - `GET /redirect/` - Empty ID, always `404 URL not found`
///
/// # Example Usage
///
/// ```no_run
/// # use shorturl::store::{AppState, UrlStore};
/// # use shorturl::route::create_app;
/// let app = create_app(AppState::new(UrlStore::new()));
/// // axum::serve(listener, app).await.unwrap();
/// ```
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten))
        .route("/redirect/", get(redirect_empty_id))
        .route("/redirect/{*id}", get(redirect_url))
        .with_state(state)
}
