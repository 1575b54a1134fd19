use b2b_master::PartnersSnapshot;
use b2b_metrics::FetchOutcome;

use crate::{AppState, errors::ApiError};

/// Load the current partner vaults, recording the outcome.
pub async fn fetch_partners(state: &AppState) -> Result<PartnersSnapshot, ApiError> {
    match state.partners.get_partners().await {
        Ok(snapshot) => {
            state.metrics.partners.record_fetch(FetchOutcome::Success);
            Ok(snapshot)
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to load partner vaults");
            state.metrics.partners.record_fetch(FetchOutcome::Failure);
            Err(err.into())
        }
    }
}

/// Partner short names are lowercase; accept any casing in paths.
pub fn normalize_short_name(short_name: &str) -> String {
    short_name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_short_name() {
        assert_eq!(normalize_short_name("Alpha"), "alpha");
        assert_eq!(normalize_short_name(" BETA "), "beta");
        assert_eq!(normalize_short_name("gamma"), "gamma");
    }
}
