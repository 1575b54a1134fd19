use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A presentation asset, e.g. a partner logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Asset {
    pub name: String,
    pub uri: String,
}

impl Asset {
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
        }
    }
}

/// One display record per partner, whatever the number of vaults it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PartnerRecord {
    /// Display name, taken from the vault's `full_name`.
    pub name: String,
    /// Lowercased vault `name`, unique within a collection.
    pub short_name: String,
    pub description: String,
    pub logo: Asset,
}
