use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use rand::{SeedableRng, rngs::StdRng};

use b2b_kpi::aggregate_partners;

use crate::{
    AppState,
    dto::{ApiResponse, PartnerItem, PartnerListResponse, PartnersQuery},
    errors::ApiError,
    helpers::fetch_partners,
};

#[utoipa::path(
    get,
    path = "/partners",
    tag = "Partners",
    params(
        ("seed" = Option<u64>, Query, description = "Seed for a reproducible sample")
    ),
    responses(
        (status = 200, description = "Random sample of at most 9 partners", body = PartnerListResponse),
        (status = 503, description = "Partner data unavailable"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_partners(
    State(state): State<AppState>,
    Query(query): Query<PartnersQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = fetch_partners(&state).await?;

    let mut rng = query
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let items: Vec<PartnerItem> = aggregate_partners(&snapshot.partners, &state.catalog, &mut rng)
        .into_iter()
        .map(PartnerItem::from)
        .collect();

    state.metrics.partners.record_sample_served(items.len());

    Ok(Json(ApiResponse::ok(PartnerListResponse { items })))
}
