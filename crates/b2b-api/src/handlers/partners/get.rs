use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use b2b_kpi::{MetricsScope, deduplicate_partners, vaults_for_partner};
use b2b_metrics::SummaryScope;

use crate::{
    AppState,
    dto::{ApiResponse, MetricsDto, PartnerDashboard, PartnerItem, PartnerVaultItem},
    errors::ApiError,
    helpers::{fetch_partners, normalize_short_name},
};

#[utoipa::path(
    get,
    path = "/partners/{short_name}",
    tag = "Partners",
    params(
        ("short_name" = String, Path, description = "Partner short name (case insensitive)")
    ),
    responses(
        (status = 200, description = "Partner dashboard with its vaults and aggregate metrics", body = PartnerDashboard),
        (status = 404, description = "Partner not found"),
        (status = 503, description = "Partner data unavailable"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_partner(
    State(state): State<AppState>,
    Path(short_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let short_name = normalize_short_name(&short_name);
    let snapshot = fetch_partners(&state).await?;

    let record = deduplicate_partners(&snapshot.partners, &state.catalog)
        .remove(&short_name)
        .ok_or_else(|| ApiError::NotFound(format!("Partner {short_name} not found")))?;

    let vaults = vaults_for_partner(&snapshot.partners, &short_name);
    let metrics = MetricsScope::new(&vaults, None)?.summarize()?;
    state
        .metrics
        .partners
        .record_summary(&short_name, SummaryScope::Aggregate);

    let dashboard = PartnerDashboard {
        partner: PartnerItem::from(record),
        last_updated: snapshot.fetched_at.to_rfc3339(),
        metrics: MetricsDto::try_from(metrics)?,
        vaults: vaults.into_iter().map(PartnerVaultItem::from).collect(),
    };

    Ok(Json(ApiResponse::ok(dashboard)))
}
