pub mod get;
pub mod list;
pub mod metrics;

pub use get::get_partner;
pub use list::list_partners;
pub use metrics::get_partner_metrics;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::to_bytes,
        extract::{Path, Query, State},
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    use rust_decimal::Decimal;
    use serde_json::Value;

    use b2b_master::{MasterApiError, PartnersSnapshot, PartnersSource};
    use b2b_metrics::MetricsRegistry;
    use b2b_types::{Asset, LogoCatalog, PartnerVault, PartnersByNetwork};

    use super::*;
    use crate::{
        AppState,
        dto::{MetricsQuery, PartnersQuery},
    };

    struct StubSource(Option<PartnersByNetwork>);

    #[async_trait::async_trait]
    impl PartnersSource for StubSource {
        async fn get_partners(&self) -> Result<PartnersSnapshot, MasterApiError> {
            self.0
                .clone()
                .map(PartnersSnapshot::new)
                .ok_or_else(|| {
                    let malformed = serde_json::from_str::<PartnersByNetwork>(r#"{"1": {"0xA": {}}}"#);
                    MasterApiError::JsonError(malformed.unwrap_err())
                })
        }
    }

    fn vault(name: &str, full_name: &str, tvl: i64, payout: i64, apy: f64) -> PartnerVault {
        PartnerVault {
            name: name.to_string(),
            full_name: full_name.to_string(),
            description: format!("{full_name} description"),
            tvl: Decimal::from(tvl),
            total_payout: Decimal::from(payout),
            apy,
            risk_score: 1.0,
            balance: Decimal::ONE,
        }
    }

    fn state(partners: Option<PartnersByNetwork>) -> State<AppState> {
        State(AppState {
            partners: Arc::new(StubSource(partners)),
            catalog: Arc::new(
                LogoCatalog::default().with_partner("alpha", Asset::new("alpha", "/logos/alpha.svg")),
            ),
            metrics: MetricsRegistry::new(),
        })
    }

    fn sample_partners() -> PartnersByNetwork {
        let mut partners = PartnersByNetwork::new();
        partners.insert("1", "0xA", vault("Alpha", "Alpha Vault", 100, 10, 5.0));
        partners.insert("10", "0xB", vault("alpha", "Alpha Vault v2", 200, 20, 6.0));
        for i in 0..12 {
            let name = format!("Partner{i}");
            partners.insert("1", format!("0x{i:02}"), vault(&name, &name, 1, 1, 1.0));
        }
        partners
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_partners_returns_bounded_sample() {
        let response = list_partners(state(Some(sample_partners())), Query(PartnersQuery::default()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 9);
        for item in items {
            let short_name = item["short_name"].as_str().unwrap();
            assert_eq!(item["dashboard_path"], format!("/dashboard/{short_name}"));
        }
    }

    #[tokio::test]
    async fn test_list_partners_is_reproducible_with_seed() {
        let query = || Query(PartnersQuery { seed: Some(99) });
        let first = body_json(
            list_partners(state(Some(sample_partners())), query())
                .await
                .into_response(),
        )
        .await;
        let second = body_json(
            list_partners(state(Some(sample_partners())), query())
                .await
                .into_response(),
        )
        .await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_list_partners_empty_upstream() {
        let response = list_partners(
            state(Some(PartnersByNetwork::default())),
            Query(PartnersQuery::default()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["items"], Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_malformed_upstream_is_service_unavailable() {
        let response = list_partners(state(None), Query(PartnersQuery::default()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_get_partner_dashboard() {
        let response = get_partner(state(Some(sample_partners())), Path("ALPHA".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let data = &body["data"];
        assert_eq!(data["partner"]["name"], "Alpha Vault v2");
        assert_eq!(data["partner"]["logo"]["uri"], "/logos/alpha.svg");
        assert_eq!(data["vaults"].as_array().unwrap().len(), 2);
        assert_eq!(data["metrics"]["scope"], "aggregate");
        assert_eq!(data["metrics"]["tvl"], "300");
        assert_eq!(data["metrics"]["fees_earned"], "30");
        assert_eq!(data["metrics"]["apy"], Value::Null);
        assert_eq!(data["metrics"]["display"]["tvl"], "$ 300.00");
        assert_eq!(data["metrics"]["display"]["apy"], "-");
        assert!(data["last_updated"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_get_unknown_partner_is_not_found() {
        let response = get_partner(state(Some(sample_partners())), Path("gamma".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_partner_metrics_for_selected_vault() {
        let response = get_partner_metrics(
            state(Some(sample_partners())),
            Path("alpha".to_string()),
            Query(MetricsQuery {
                vault_id: Some("0xB".to_string()),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let data = &body["data"];
        assert_eq!(data["scope"], "vault");
        assert_eq!(data["vault_count"], 1);
        assert_eq!(data["tvl"], "200");
        assert_eq!(data["apy"], 6.0);
        assert_eq!(data["display"]["fees_earned"], "$ 20");
        assert_eq!(data["display"]["apy"], "6.00%");
    }

    #[tokio::test]
    async fn test_partner_metrics_unknown_vault() {
        let response = get_partner_metrics(
            state(Some(sample_partners())),
            Path("alpha".to_string()),
            Query(MetricsQuery {
                vault_id: Some("0xZ".to_string()),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_partner_metrics_rejects_empty_vault_id() {
        let response = get_partner_metrics(
            state(Some(sample_partners())),
            Path("alpha".to_string()),
            Query(MetricsQuery {
                vault_id: Some("  ".to_string()),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
