use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

pub type NetworkId = String;
pub type VaultId = String;

/// A single partner vault as reported by yDaemon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerVault {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub tvl: Decimal,
    #[serde(rename = "totalPayout")]
    pub total_payout: Decimal,
    pub apy: f64,
    #[serde(rename = "riskScore")]
    pub risk_score: f64,
    pub balance: Decimal,
}

impl PartnerVault {
    /// Key under which vaults of the same partner are collapsed.
    pub fn short_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Partner vaults keyed by network id, then by vault address.
///
/// Both levels are ordered maps, so iteration is ascending network id then
/// ascending vault id. A `null` payload or a `null` network deserializes as
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PartnersByNetwork(BTreeMap<NetworkId, BTreeMap<VaultId, PartnerVault>>);

impl PartnersByNetwork {
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(
        &mut self,
        network: impl Into<NetworkId>,
        vault_id: impl Into<VaultId>,
        vault: PartnerVault,
    ) -> Option<PartnerVault> {
        self.0
            .entry(network.into())
            .or_default()
            .insert(vault_id.into(), vault)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }

    /// Number of vaults across every network.
    pub fn vault_count(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    /// Every vault, flattened in traversal order.
    pub fn vaults(&self) -> impl Iterator<Item = (&NetworkId, &VaultId, &PartnerVault)> {
        self.0.iter().flat_map(|(network, vaults)| {
            vaults
                .iter()
                .map(move |(vault_id, vault)| (network, vault_id, vault))
        })
    }
}

impl<'de> Deserialize<'de> for PartnersByNetwork {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        type Nullable = Option<BTreeMap<NetworkId, Option<BTreeMap<VaultId, PartnerVault>>>>;

        let raw = Nullable::deserialize(deserializer)?;
        Ok(Self(
            raw.unwrap_or_default()
                .into_iter()
                .map(|(network, vaults)| (network, vaults.unwrap_or_default()))
                .collect(),
        ))
    }
}
