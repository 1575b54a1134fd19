use std::collections::HashMap;

use serde::Deserialize;

use crate::partner::Asset;

const DEFAULT_LOGO_NAME: &str = "yearn";
const DEFAULT_LOGO_URI: &str = "/logos/yearn.svg";

/// Static mapping from partner short name to its logo.
///
/// Built once at startup and only read afterwards. Keys are stored
/// lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "CatalogFile")]
pub struct LogoCatalog {
    default: Asset,
    partners: HashMap<String, Asset>,
}

/// On-disk layout of a catalog file.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default = "default_asset")]
    default: Asset,
    #[serde(default)]
    partners: HashMap<String, Asset>,
}

impl From<CatalogFile> for LogoCatalog {
    fn from(file: CatalogFile) -> Self {
        Self::new(file.default, file.partners)
    }
}

fn default_asset() -> Asset {
    Asset::new(DEFAULT_LOGO_NAME, DEFAULT_LOGO_URI)
}

impl LogoCatalog {
    pub fn new(default: Asset, partners: HashMap<String, Asset>) -> Self {
        Self {
            default,
            partners: partners
                .into_iter()
                .map(|(short_name, asset)| (short_name.to_lowercase(), asset))
                .collect(),
        }
    }

    #[must_use]
    pub fn with_partner(mut self, short_name: &str, asset: Asset) -> Self {
        self.partners.insert(short_name.to_lowercase(), asset);
        self
    }

    pub const fn default_asset(&self) -> &Asset {
        &self.default
    }

    pub fn get(&self, short_name: &str) -> Option<&Asset> {
        self.partners.get(short_name)
    }

    /// Logo for `short_name`, or the default asset when the partner is unknown.
    pub fn resolve(&self, short_name: &str) -> &Asset {
        self.get(short_name).unwrap_or(&self.default)
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

impl Default for LogoCatalog {
    fn default() -> Self {
        Self::new(default_asset(), HashMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_falls_back_to_default() {
        let catalog =
            LogoCatalog::default().with_partner("Alpha", Asset::new("alpha", "/logos/alpha.svg"));

        assert_eq!(catalog.resolve("alpha").uri, "/logos/alpha.svg");
        assert_eq!(catalog.resolve("unknown"), catalog.default_asset());
        assert_eq!(catalog.default_asset().uri, DEFAULT_LOGO_URI);
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog: LogoCatalog = serde_json::from_str(
            r#"{"partners": {"Beta": {"name": "beta", "uri": "/logos/beta.png"}}}"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resolve("beta").name, "beta");
        assert_eq!(catalog.default_asset().name, DEFAULT_LOGO_NAME);
    }
}
