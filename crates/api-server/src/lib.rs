//! HTTP surface of the ROI service: four projection endpoints plus a
//! health probe, fronted by CORS/trace layers and a thin identity
//! middleware. All return math lives in roi-engine and
//! portfolio-analytics; this crate validates input, resolves rows and
//! shapes JSON.

pub mod identity;
pub mod roi_routes;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use portfolio_analytics::{PortfolioAnalyzer, PropertyComparator};
use property_store::{PropertyDb, PropertyStore};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    pub properties: PropertyStore,
    pub analyzer: PortfolioAnalyzer,
    pub comparator: PropertyComparator,
}

impl AppState {
    pub fn new(db: PropertyDb) -> Self {
        Self {
            properties: PropertyStore::new(db.clone()),
            analyzer: PortfolioAnalyzer::new(db.clone()),
            comparator: PropertyComparator::new(db),
        }
    }
}

/// Uniform success envelope.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0} not found")]
    NotFound(String),

    #[error("missing or invalid identity")]
    Unauthorized,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "success": false,
                    "error": { "message": "validation failed", "fields": fields },
                }),
            ),
            AppError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({
                    "success": false,
                    "error": { "message": format!("{what} not found") },
                }),
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({
                    "success": false,
                    "error": { "message": "authentication required" },
                }),
            ),
            AppError::Internal(err) => {
                // Full chain stays server-side; the client gets a generic body.
                tracing::error!("internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "success": false,
                        "error": { "message": "internal server error" },
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(roi_routes::roi_routes())
        .layer(middleware::from_fn(identity::identity_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:brickfund.db".to_string());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let db = PropertyDb::new(&database_url).await?;
    let state = AppState::new(db);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("ROI service listening on {bind_addr}");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
