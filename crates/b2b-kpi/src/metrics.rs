use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use b2b_types::{PartnerVault, PartnersByNetwork, VaultId};

use crate::error::KpiError;
use crate::format::{format_amount, format_float, format_percent};

/// What a summary is computed over: one selected vault, or every vault.
#[derive(Debug, Clone)]
pub enum MetricsScope<'a> {
    Selected(&'a PartnerVault),
    Aggregate(Vec<&'a PartnerVault>),
}

impl<'a> MetricsScope<'a> {
    /// Select `vault_id` from `vaults`, or aggregate them all when no vault
    /// is requested.
    pub fn new(
        vaults: &'a BTreeMap<VaultId, PartnerVault>,
        vault_id: Option<&str>,
    ) -> Result<Self, KpiError> {
        match vault_id {
            Some(id) => vaults
                .get(id)
                .map(Self::Selected)
                .ok_or_else(|| KpiError::UnknownVault(id.to_string())),
            None => Ok(Self::Aggregate(vaults.values().collect())),
        }
    }

    pub fn summarize(&self) -> Result<MetricsView, KpiError> {
        let view = match self {
            Self::Selected(vault) => MetricsView {
                source: MetricsSource::Vault,
                tvl: vault.tvl,
                fees_earned: vault.total_payout,
                apy: Some(vault.apy),
                risk_score: Some(vault.risk_score),
            },
            // APY and risk are not averaged: an unweighted mean across vaults
            // would be meaningless.
            Self::Aggregate(vaults) => MetricsView {
                source: MetricsSource::Aggregate {
                    vault_count: vaults.len(),
                },
                tvl: checked_total(vaults.iter().map(|vault| vault.tvl), "TVL")?,
                fees_earned: checked_total(
                    vaults.iter().map(|vault| vault.total_payout),
                    "total payout",
                )?,
                apy: None,
                risk_score: None,
            },
        };
        Ok(view)
    }
}

fn checked_total(
    values: impl IntoIterator<Item = Decimal>,
    field: &str,
) -> Result<Decimal, KpiError> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .ok_or_else(|| KpiError::InvalidData(format!("Sum of vault {field} overflows")))
}

/// Summarize `selected` when given, otherwise the whole `vaults` collection.
pub fn summarize(
    vaults: &BTreeMap<VaultId, PartnerVault>,
    selected: Option<&PartnerVault>,
) -> Result<MetricsView, KpiError> {
    let scope = match selected {
        Some(vault) => MetricsScope::Selected(vault),
        None => MetricsScope::Aggregate(vaults.values().collect()),
    };
    scope.summarize()
}

/// Every vault run by the partner `short_name`, keyed by vault id.
///
/// Follows `PartnersByNetwork` traversal order, so when two networks report
/// the same vault id the later network wins.
pub fn vaults_for_partner(
    partners: &PartnersByNetwork,
    short_name: &str,
) -> BTreeMap<VaultId, PartnerVault> {
    partners
        .vaults()
        .filter(|(_, _, vault)| vault.short_name() == short_name)
        .map(|(_, vault_id, vault)| (vault_id.clone(), vault.clone()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MetricsSource {
    Vault,
    Aggregate { vault_count: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsView {
    pub source: MetricsSource,
    pub tvl: Decimal,
    pub fees_earned: Decimal,
    pub apy: Option<f64>,
    pub risk_score: Option<f64>,
}

/// Display strings for a [`MetricsView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsDisplay {
    pub tvl: String,
    pub fees_earned: String,
    pub apy: String,
    pub risk_score: String,
}

const PLACEHOLDER: &str = "-";

impl MetricsView {
    pub fn display(&self) -> Result<MetricsDisplay, KpiError> {
        let fees_min_decimals = match self.source {
            MetricsSource::Vault => 0,
            MetricsSource::Aggregate { .. } => 2,
        };

        Ok(MetricsDisplay {
            tvl: format!("$ {}", format_amount(self.tvl, 2, 2)?),
            fees_earned: format!("$ {}", format_amount(self.fees_earned, fees_min_decimals, 2)?),
            apy: self
                .apy
                .map(|apy| format_percent(apy, 2, 2))
                .transpose()?
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            risk_score: self
                .risk_score
                .map(|risk| format_float(risk, 0, 2))
                .transpose()?
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        })
    }
}
