//! Axum-based HTTP server for the tariff API and the clock-face page

use crate::clock::Clock;
use crate::config::DisplayConfig;
use crate::tariff::{DaySchedule, PolicyInfo, TariffClassifier, TariffResult};
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod events;
mod page;

pub use events::TARIFF_EVENT;
pub use page::{PageText, render_index};

/// Shared handler state; everything behind it is immutable
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<TariffClassifier>,
    pub clock: Arc<dyn Clock>,
    pub display: Arc<DisplayConfig>,
}

impl AppState {
    pub fn new(
        classifier: TariffClassifier,
        clock: Arc<dyn Clock>,
        display: DisplayConfig,
    ) -> Self {
        Self {
            classifier: Arc::new(classifier),
            clock,
            display: Arc::new(display),
        }
    }

    pub fn tariff_now(&self) -> TariffResult {
        self.classifier.classify(&self.clock.now())
    }

    pub fn day_schedule_now(&self) -> DaySchedule {
        self.classifier.day_schedule(&self.clock.now())
    }
}

/// Build version and active policy
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VersionInfo {
    pub version: &'static str,
    pub policy: PolicyInfo,
}

#[cfg_attr(feature = "openapi", utoipa::path(get, path = "/", responses(
    (status = 200, description = "Clock-face page", content_type = "text/html"),
    (status = 500, description = "Failed to render template")
)))]
async fn index(State(state): State<AppState>) -> Response {
    match render_index(&state.display) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            crate::logging::get_logger("web").error(&format!("Index render failed: {e}"));
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render template").into_response()
        }
    }
}

#[cfg_attr(feature = "openapi", utoipa::path(get, path = "/api/health", responses(
    (status = 200, description = "Service is healthy")
)))]
async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

#[cfg_attr(feature = "openapi", utoipa::path(get, path = "/api/version", responses(
    (status = 200, description = "Build version and tariff policy", body = VersionInfo)
)))]
async fn version(State(state): State<AppState>) -> Json<VersionInfo> {
    Json(VersionInfo {
        version: crate::APP_VERSION,
        policy: state.classifier.policy().info(),
    })
}

#[cfg_attr(feature = "openapi", utoipa::path(get, path = "/api/tariff", responses(
    (status = 200, description = "Current zone and time left in its block", body = TariffResult),
    (status = 500, description = "Failed to encode JSON")
)))]
async fn tariff(State(state): State<AppState>) -> Response {
    json_response(&state.tariff_now())
}

#[cfg_attr(feature = "openapi", utoipa::path(get, path = "/api/schedule", responses(
    (status = 200, description = "Today's hourly zones and the current tariff", body = DaySchedule),
    (status = 500, description = "Failed to encode JSON")
)))]
async fn schedule(State(state): State<AppState>) -> Response {
    json_response(&state.day_schedule_now())
}

fn json_response<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => (
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            body,
        )
            .into_response(),
        Err(e) => {
            crate::logging::get_logger("web").error(&format!("JSON encoding failed: {e}"));
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode JSON").into_response()
        }
    }
}

#[cfg(feature = "openapi")]
#[derive(utoipa::OpenApi)]
#[openapi(
    paths(index, health, version, tariff, schedule, events::events),
    components(schemas(TariffResult, DaySchedule, PolicyInfo, VersionInfo)),
    tags((name = "tariff-zones", description = "Tariff zone API"))
)]
pub struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/version", get(version))
        .route("/api/tariff", get(tariff))
        .route("/api/schedule", get(schedule))
        .route("/api/events", get(events::events));

    #[cfg(feature = "openapi")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()),
        )
    };

    let router = router
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    #[cfg(feature = "compression")]
    let router = router.layer(tower_http::compression::CompressionLayer::new());

    router
}

pub async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let logger = crate::logging::get_logger_with_context(
        crate::logging::LogContext::new("web").with_policy(state.classifier.policy().id()),
    );
    let router = build_router(state);

    logger.info(&format!(
        "Starting web server; requested host={host}, port={port}"
    ));

    let listener = match host.parse::<IpAddr>() {
        Ok(ip) => tokio::net::TcpListener::bind(SocketAddr::new(ip, port)).await?,
        // hostnames such as "localhost" go through the resolver
        Err(_) => tokio::net::TcpListener::bind((host, port)).await?,
    };
    let local_addr = listener.local_addr()?;
    logger.info(&format!(
        "Web server listening at http://{local_addr} (page /, API /api)"
    ));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    logger.info("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
