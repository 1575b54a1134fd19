use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use b2b_kpi::{KpiError, MetricsDisplay, MetricsSource, MetricsView};

/// Summary figures for a partner, either for one vault or across all of them.
/// `apy` and `risk_score` are only set for a single vault.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MetricsDto {
    pub scope: MetricsScopeDto,
    pub vault_count: usize,
    pub tvl: String,
    pub fees_earned: String,
    pub apy: Option<f64>,
    pub risk_score: Option<f64>,
    pub display: MetricsDisplayDto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MetricsScopeDto {
    Vault,
    Aggregate,
}

/// Values formatted for the dashboard, e.g. `$ 1,234.56`, `5.00%` or `-`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MetricsDisplayDto {
    pub tvl: String,
    pub fees_earned: String,
    pub apy: String,
    pub risk_score: String,
}

impl From<MetricsDisplay> for MetricsDisplayDto {
    fn from(display: MetricsDisplay) -> Self {
        Self {
            tvl: display.tvl,
            fees_earned: display.fees_earned,
            apy: display.apy,
            risk_score: display.risk_score,
        }
    }
}

impl TryFrom<MetricsView> for MetricsDto {
    type Error = KpiError;

    fn try_from(view: MetricsView) -> Result<Self, Self::Error> {
        let display = view.display()?.into();
        let (scope, vault_count) = match view.source {
            MetricsSource::Vault => (MetricsScopeDto::Vault, 1),
            MetricsSource::Aggregate { vault_count } => (MetricsScopeDto::Aggregate, vault_count),
        };

        Ok(Self {
            scope,
            vault_count,
            tvl: view.tvl.to_string(),
            fees_earned: view.fees_earned.to_string(),
            apy: view.apy,
            risk_score: view.risk_score,
            display,
        })
    }
}
