use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

use b2b_kpi::{MetricsScope, vaults_for_partner};
use b2b_metrics::SummaryScope;

use crate::{
    AppState,
    dto::{ApiResponse, MetricsDto, MetricsQuery},
    errors::ApiError,
    helpers::{fetch_partners, normalize_short_name},
};

#[utoipa::path(
    get,
    path = "/partners/{short_name}/metrics",
    tag = "Partners",
    params(
        ("short_name" = String, Path, description = "Partner short name (case insensitive)"),
        ("vault_id" = Option<String>, Query, description = "Only summarize this vault")
    ),
    responses(
        (status = 200, description = "TVL, fees, APY and risk score for a vault or the whole partner", body = MetricsDto),
        (status = 400, description = "Empty vault id"),
        (status = 404, description = "Partner or vault not found"),
        (status = 503, description = "Partner data unavailable"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_partner_metrics(
    State(state): State<AppState>,
    Path(short_name): Path<String>,
    Query(query): Query<MetricsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let short_name = normalize_short_name(&short_name);
    let vault_id = query.vault_id.as_deref().map(str::trim);
    if vault_id.is_some_and(str::is_empty) {
        return Err(ApiError::BadRequest("vault_id must not be empty".to_string()));
    }

    let snapshot = fetch_partners(&state).await?;
    let vaults = vaults_for_partner(&snapshot.partners, &short_name);
    if vaults.is_empty() {
        return Err(ApiError::NotFound(format!("Partner {short_name} not found")));
    }

    let scope = MetricsScope::new(&vaults, vault_id)?;
    let summary_scope = match scope {
        MetricsScope::Selected(_) => SummaryScope::Vault,
        MetricsScope::Aggregate(_) => SummaryScope::Aggregate,
    };
    state.metrics.partners.record_summary(&short_name, summary_scope);

    let metrics = MetricsDto::try_from(scope.summarize()?)?;

    Ok(Json(ApiResponse::ok(metrics)))
}
