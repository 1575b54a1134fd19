pub mod catalog;
pub mod partner;
pub mod vault;

pub use catalog::LogoCatalog;
pub use partner::{Asset, PartnerRecord};
pub use vault::{NetworkId, PartnerVault, PartnersByNetwork, VaultId};
