use serde::Deserialize;
use utoipa::ToSchema;

/// Query parameters for the partner sample endpoint
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PartnersQuery {
    /// Fixes the shuffle so the same seed always yields the same sample
    pub seed: Option<u64>,
}

/// Query parameters for the partner metrics endpoint
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MetricsQuery {
    /// Summarize this vault only instead of every vault of the partner
    pub vault_id: Option<String>,
}
