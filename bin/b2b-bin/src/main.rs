mod cli;

use std::{path::Path, sync::Arc, time::Duration};

use crate::cli::B2bCli;
use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use pragma_common::{
    services::{Service, ServiceGroup},
    telemetry::init_telemetry,
};

use b2b_api::{ApiService, AppState};
use b2b_master::YDaemonClient;
use b2b_metrics::MetricsRegistry;
use b2b_types::LogoCatalog;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let B2bCli {
        otel_collector_endpoint,
        api_port,
        ydaemon_base_url,
        logo_catalog,
        partners_cache_ttl_secs,
        upstream_timeout_secs,
    } = B2bCli::parse();

    let app_name = "b2b_partners_api";
    if let Err(e) = init_telemetry(app_name, otel_collector_endpoint) {
        panic!("Could not init telemetry: {e}");
    }

    let catalog = load_logo_catalog(logo_catalog.as_deref())?;
    if catalog.is_empty() {
        tracing::warn!("Logo catalog has no partner entries, every partner uses the default logo");
    } else {
        tracing::info!(partners = catalog.len(), "Logo catalog loaded");
    }

    let client = YDaemonClient::new(
        &ydaemon_base_url,
        Duration::from_secs(partners_cache_ttl_secs),
        Duration::from_secs(upstream_timeout_secs),
    )
    .with_context(|| format!("Invalid yDaemon base URL: {ydaemon_base_url}"))?;
    tracing::info!(endpoint = %client.endpoint(), "Partner data source configured");

    let app_state = AppState {
        partners: Arc::new(client),
        catalog: Arc::new(catalog),
        metrics: MetricsRegistry::new(),
    };

    let api_service = ApiService::new(app_state, "0.0.0.0", api_port);

    ServiceGroup::default()
        .with(api_service)
        .start_and_drive_to_end()
        .await?;

    Ok(())
}

fn load_logo_catalog(path: Option<&Path>) -> Result<LogoCatalog> {
    let Some(path) = path else {
        return Ok(LogoCatalog::default());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read logo catalog {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid logo catalog {}", path.display()))
}
