#![allow(clippy::needless_for_each)]

use anyhow::Result;
use serde_json::to_string_pretty;
use std::path::PathBuf;
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa::openapi::{ServerBuilder, ServerVariableBuilder};

use crate::dto::{
    MetricsDisplayDto, MetricsDto, MetricsScopeDto, PartnerDashboard, PartnerItem,
    PartnerListResponse, PartnerVaultItem, ResponseStatus,
};
use crate::handlers::partners::{get, list, metrics};

pub struct ServerAddon;

impl Modify for ServerAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let version_variable = ServerVariableBuilder::new()
            .default_value("v1")
            .enum_values(Some(vec!["v1"]))
            .build();
        openapi.servers = Some(vec![
            ServerBuilder::new()
                .url("https://partners-api.yearn.fi/{version}")
                .parameter("version", version_variable)
                .build(),
        ]);
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&ServerAddon),
    paths(list::list_partners, get::get_partner, metrics::get_partner_metrics),
    components(schemas(
        PartnerItem,
        PartnerListResponse,
        PartnerVaultItem,
        PartnerDashboard,
        MetricsDto,
        MetricsScopeDto,
        MetricsDisplayDto,
        ResponseStatus,
        b2b_types::Asset,
    )),
    tags(
        (name = "b2b_bin", description = "Yearn partner dashboard api"),
        (name = "Partners", description = "Partner samples, dashboards and vault metrics")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn generate_openapi_json(output_path: PathBuf) -> Result<()> {
        let openapi = Self::openapi();
        let json = to_string_pretty(&openapi)?;

        let file_path = output_path.join("openapi.json");

        tracing::info!("Saving OpenAPI specs to {}...", file_path.display());

        std::fs::write(&file_path, json)?;
        tracing::info!("OpenAPI specs saved!");
        Ok(())
    }
}
