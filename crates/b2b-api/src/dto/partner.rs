use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use b2b_types::{Asset, PartnerRecord, PartnerVault, VaultId};

use crate::dto::MetricsDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartnerItem {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub logo: Asset,
    pub dashboard_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartnerListResponse {
    pub items: Vec<PartnerItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartnerVaultItem {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub tvl: String, // Decimal as string for precision
    pub total_payout: String,
    pub balance: String,
    pub apy: f64,
    pub risk_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartnerDashboard {
    pub partner: PartnerItem,
    pub last_updated: String, // RFC3339 timestamp
    pub vaults: Vec<PartnerVaultItem>,
    pub metrics: MetricsDto,
}

impl From<PartnerRecord> for PartnerItem {
    fn from(record: PartnerRecord) -> Self {
        Self {
            dashboard_path: format!("/dashboard/{}", record.short_name),
            name: record.name,
            short_name: record.short_name,
            description: record.description,
            logo: record.logo,
        }
    }
}

impl From<(VaultId, PartnerVault)> for PartnerVaultItem {
    fn from((id, vault): (VaultId, PartnerVault)) -> Self {
        Self {
            id,
            name: vault.name,
            full_name: vault.full_name,
            description: vault.description,
            tvl: vault.tvl.to_string(),
            total_payout: vault.total_payout.to_string(),
            balance: vault.balance.to_string(),
            apy: vault.apy,
            risk_score: vault.risk_score,
        }
    }
}
