use crate::{dto::PartnersSnapshot, error::MasterApiError};

/// Anything able to produce the partner vaults, grouped by network.
#[async_trait::async_trait]
pub trait PartnersSource: Send + Sync {
    async fn get_partners(&self) -> Result<PartnersSnapshot, MasterApiError>;
}
