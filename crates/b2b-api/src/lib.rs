pub mod docs;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod helpers;
pub mod router;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
use std::{env, time::Duration};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use b2b_master::PartnersSource;
use b2b_metrics::MetricsRegistry;
use b2b_types::LogoCatalog;
use pragma_common::services::{Service, ServiceRunner};

use docs::ApiDoc;
use router::api_router;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct AppState {
    pub partners: Arc<dyn PartnersSource>,
    pub catalog: Arc<LogoCatalog>,
    pub metrics: Arc<MetricsRegistry>,
}

pub struct ApiService {
    state: AppState,
    host: String,
    port: u16,
}

impl ApiService {
    pub fn new(state: AppState, host: &str, port: u16) -> Self {
        Self {
            state,
            host: host.to_owned(),
            port,
        }
    }
}

/// Restricts CORS to the comma separated `origins` when any of them is a
/// valid header value, otherwise allows any origin.
fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if allowed.is_empty() {
        tracing::info!("No CORS origins configured, allowing any origin");
        return CorsLayer::permissive();
    }

    tracing::info!(origins = allowed.len(), "Restricting CORS origins");
    CorsLayer::new()
        .allow_headers(AllowHeaders::mirror_request())
        .allow_methods(AllowMethods::list([Method::GET, Method::OPTIONS]))
        .allow_origin(AllowOrigin::list(allowed))
}

fn request_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

#[async_trait::async_trait]
impl Service for ApiService {
    async fn start<'a>(&mut self, mut runner: ServiceRunner<'a>) -> anyhow::Result<()> {
        ApiDoc::generate_openapi_json("./".into())?;

        let address = format!("{}:{}", self.host, self.port);
        let state = self.state.clone();

        runner.spawn_loop(move |ctx| async move {
            let socket_addr: SocketAddr = address.parse()?;
            let listener = TcpListener::bind(socket_addr).await?;

            let timeout = request_timeout(env::var("REQUEST_TIMEOUT_SECS").ok().as_deref());
            let cors = cors_layer(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref());

            #[allow(clippy::default_constructed_unit_structs)]
            let app = api_router::<ApiDoc>(state.clone())
                .with_state(state)
                .layer(OtelAxumLayer::default())
                .layer(OtelInResponseLayer::default())
                .layer(TimeoutLayer::new(timeout))
                .layer(cors);

            tracing::info!(%socket_addr, timeout_secs = timeout.as_secs(), "Partner API listening");

            let token = ctx.token.clone();
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(async move { token.cancelled().await })
            .await
            .context("Partner API server stopped")
        });

        Ok(())
    }
}
