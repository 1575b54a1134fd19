use std::sync::Arc;

use chrono::{DateTime, Utc};

use b2b_types::PartnersByNetwork;

/// Partner vaults as of one upstream fetch.
#[derive(Debug, Clone)]
pub struct PartnersSnapshot {
    pub partners: Arc<PartnersByNetwork>,
    pub fetched_at: DateTime<Utc>,
}

impl PartnersSnapshot {
    pub fn new(partners: PartnersByNetwork) -> Self {
        Self {
            partners: Arc::new(partners),
            fetched_at: Utc::now(),
        }
    }
}
