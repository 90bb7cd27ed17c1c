use std::{sync::Arc, time::Instant};

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::{error::Error, stt::Transcriber, web::pages, yt::AudioFetcher, VideoAnalyzer};

pub struct AppState<F, T>
where
    F: AudioFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
{
    pub analyzer: Arc<VideoAnalyzer<F, T>>,
    pub start_time: Instant,
}

impl<F, T> Clone for AppState<F, T>
where
    F: AudioFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        AppState {
            analyzer: Arc::clone(&self.analyzer),
            start_time: self.start_time,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub video_url: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

/// Builds the application router. Generic over the collaborators so
/// tests can mount the app over mocks.
pub fn router<F, T>(state: AppState<F, T>) -> Router
where
    F: AudioFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index::<F, T>))
        .route("/analyze", post(analyze::<F, T>))
        .route("/health", get(health::<F, T>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /
async fn index<F, T>(State(_state): State<AppState<F, T>>) -> Html<String>
where
    F: AudioFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
{
    Html(pages::index(None))
}

/// POST /analyze
///
/// An empty URL re-renders the index with a warning before any pipeline
/// stage runs; any stage failure renders the unhandled-failure page.
async fn analyze<F, T>(
    State(state): State<AppState<F, T>>,
    Form(form): Form<AnalyzeForm>,
) -> Response
where
    F: AudioFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
{
    if form.video_url.trim().is_empty() {
        return Html(pages::index(Some(pages::EMPTY_URL_WARNING))).into_response();
    }

    match state.analyzer.analyze(&form.video_url).await {
        Ok(report) => Html(pages::report(&report)).into_response(),
        Err(Error::EmptyVideoUrl) => {
            Html(pages::index(Some(pages::EMPTY_URL_WARNING))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::failure(&e))).into_response()
        }
    }
}

/// GET /health
async fn health<F, T>(State(state): State<AppState<F, T>>) -> Json<HealthResponse>
where
    F: AudioFetcher + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
{
    Json(HealthResponse {
        status: "ok".into(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
