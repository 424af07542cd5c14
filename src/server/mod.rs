//! HTTP server mode for `tocsearch`.
//!
//! - `GET /` – the search page. Results are rendered only when the
//!   request carries `submit` and a non-empty `q`.
//! - `POST /v1/search` – accepts a JSON `SearchRequest` and returns a
//!   `SearchResult` for the server's dataset.
//! - `GET /v1/health` – simple health check endpoint.
//!
//! Loading and searching are blocking, so both run on the blocking
//! thread pool.

mod page;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::error::Error;
use crate::models::{SearchConfig, SearchRequest, SearchResult};
use crate::search::engine;
use crate::view::{self, Outcome, SearchForm};

/// Settings shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: PathBuf,
    pub title: String,
}

/// Simple health-check response payload.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// JSON error body returned by the API.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Query string of the search page.
#[derive(Debug, Default, Deserialize)]
struct PageParams {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    submit: Option<String>,
}

impl PageParams {
    fn into_form(self) -> SearchForm {
        SearchForm {
            query: self.q,
            submitted: self.submit.is_some(),
        }
    }
}

/// Error type used by HTTP handlers to map internal failures into
/// JSON error responses.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match err {
            Error::Load(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Search(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: view::error_message(&err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Build the Axum router for the search page and API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(search_page))
        .route("/v1/health", get(health))
        .route("/v1/search", post(search))
        .with_state(state)
}

/// Run the HTTP server bound to the provided socket address.
///
/// This is used by the CLI `tocsearch serve` subcommand.
pub async fn run(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, dataset = %state.dataset.display(), "serving search page");
    serve_with_listener(listener, state).await
}

/// Run the HTTP server using an existing `TcpListener`.
///
/// This is primarily used in tests to bind to an ephemeral port.
pub async fn serve_with_listener(listener: TcpListener, state: AppState) -> Result<()> {
    let app = router(state);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Html<String> {
    let form = params.into_form();
    let dataset = state.dataset.clone();
    let evaluated = form.clone();

    let outcome = tokio::task::spawn_blocking(move || view::evaluate(&evaluated, &dataset))
        .await
        .unwrap_or_else(|err| Outcome::SearchFailed(err.to_string()));

    if outcome.is_error() {
        tracing::warn!(outcome = %outcome.to_string().trim_end(), "search page request failed");
    }

    Html(page::render(&state.title, &form, &outcome))
}

async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResult>, ApiError> {
    let config = SearchConfig {
        query: request.query,
        dataset: state.dataset,
    };

    let result = tokio::task::spawn_blocking(move || engine::run_search(&config))
        .await
        .map_err(|err| ApiError::internal(err.to_string()))?;

    match result {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            tracing::warn!(error = %err, "search request failed");
            Err(ApiError::from(err))
        }
    }
}
