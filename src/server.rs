// http server mode - run medguard as an api

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::core::{Assessment, assess, clean_medicine_text, clean_medicines, split_medications};
use crate::{Error, Gemini};

struct AppState {
    ai: Option<Gemini>,
}

#[derive(Deserialize)]
struct EvaluateRequest {
    #[serde(default)]
    medications: Option<Vec<String>>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default = "default_ai")]
    ai: bool,
}

fn default_ai() -> bool {
    true
}

#[derive(Deserialize)]
struct CleanRequest {
    text: String,
}

#[derive(Serialize)]
struct CleanResponse {
    medications: Vec<String>,
    text: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub struct Server;

impl Server {
    pub async fn run(host: &str, port: u16, ai: Option<Gemini>) -> Result<(), Error> {
        let addr = format!("{host}:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::Server(e.to_string()))?;

        println!("server running at http://{addr}");

        Self::serve(listener, ai).await
    }

    /// Serves on an already bound listener.
    pub async fn serve(listener: tokio::net::TcpListener, ai: Option<Gemini>) -> Result<(), Error> {
        axum::serve(listener, Self::router(ai))
            .await
            .map_err(|e| Error::Server(e.to_string()))
    }

    pub fn router(ai: Option<Gemini>) -> Router {
        let state = Arc::new(AppState { ai });

        Router::new()
            .route("/health", get(health))
            .route("/evaluate", post(evaluate))
            .route("/clean", post(clean))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn evaluate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<Assessment>, (StatusCode, Json<ErrorResponse>)> {
    // an explicit list wins over free text
    let medications = match (req.medications, req.text) {
        (Some(list), _) => list,
        (None, Some(text)) => split_medications(&text),
        (None, None) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "expected `medications` or `text`".to_string(),
                }),
            ));
        }
    };

    let ai = if req.ai { state.ai.as_ref() } else { None };
    Ok(Json(assess(medications, ai).await))
}

async fn clean(Json(req): Json<CleanRequest>) -> Json<CleanResponse> {
    Json(CleanResponse {
        medications: clean_medicines(&req.text),
        text: clean_medicine_text(&req.text),
    })
}
