use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;
use url::Url;

use b2b_types::PartnersByNetwork;

use crate::{dto::PartnersSnapshot, error::MasterApiError, traits::PartnersSource};

const PARTNERS_PATH: &str = "partners/all";

pub struct YDaemonClient {
    http_client: Client,
    endpoint: Url,
    cache: Cache<String, PartnersSnapshot>,
}

impl YDaemonClient {
    pub fn new(
        base_url: &str,
        cache_ttl: Duration,
        timeout: Duration,
    ) -> Result<Self, MasterApiError> {
        let endpoint = partners_endpoint(base_url)?;
        let http_client = http_client(timeout)?;

        Ok(Self {
            http_client,
            endpoint,
            cache: Cache::builder().time_to_live(cache_ttl).build(),
        })
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch_partners(&self) -> Result<PartnersByNetwork, MasterApiError> {
        let response = self
            .http_client
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        // Any malformed vault rejects the whole payload.
        let partners = serde_json::from_str::<PartnersByNetwork>(&body)?;
        Ok(partners)
    }
}

#[async_trait::async_trait]
impl PartnersSource for YDaemonClient {
    async fn get_partners(&self) -> Result<PartnersSnapshot, MasterApiError> {
        // Concurrent misses share a single upstream fetch.
        let snapshot = self
            .cache
            .try_get_with(self.endpoint.to_string(), async {
                let partners = self.fetch_partners().await.inspect_err(|e| {
                    tracing::warn!(endpoint = %self.endpoint, error = %e, "Failed to fetch partner vaults");
                })?;

                tracing::info!(
                    endpoint = %self.endpoint,
                    vaults = partners.vault_count(),
                    "Fetched partner vaults"
                );
                Ok::<_, MasterApiError>(PartnersSnapshot::new(partners))
            })
            .await?;

        Ok(snapshot)
    }
}

fn partners_endpoint(base_url: &str) -> Result<Url, MasterApiError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(PARTNERS_PATH)?)
}

fn http_client(timeout: Duration) -> Result<Client, MasterApiError> {
    Client::builder().timeout(timeout).build().map_err(|e| {
        tracing::error!("Failed to build HTTP client: {}", e);
        MasterApiError::InternalServerError
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use axum::{Router, http::StatusCode, routing::get};

    use super::*;

    #[test]
    fn test_partners_endpoint() {
        assert_eq!(
            partners_endpoint("https://ydaemon.yearn.fi").unwrap().as_str(),
            "https://ydaemon.yearn.fi/partners/all"
        );
        assert_eq!(
            partners_endpoint("https://api.example.com/ydaemon/").unwrap().as_str(),
            "https://api.example.com/ydaemon/partners/all"
        );
        assert_eq!(
            partners_endpoint("https://api.example.com/ydaemon").unwrap().as_str(),
            "https://api.example.com/ydaemon/partners/all"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            YDaemonClient::new("not a url", Duration::from_secs(30), Duration::from_secs(2)),
            Err(MasterApiError::UrlError(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_an_error() {
        // Port 9 (discard) is not expected to serve HTTP.
        let client = YDaemonClient::new(
            "http://127.0.0.1:9",
            Duration::from_secs(30),
            Duration::from_millis(500),
        )
        .unwrap();

        let err = client.get_partners().await.unwrap_err();
        assert!(matches!(err.root(), MasterApiError::HttpError(_)));
    }

    const PAYLOAD: &str = r#"{
        "1": {
            "0xA": {
                "name": "Alpha",
                "full_name": "Alpha Vault",
                "description": "",
                "tvl": 100,
                "totalPayout": 10,
                "apy": 5.0,
                "riskScore": 1.0,
                "balance": 1
            }
        }
    }"#;

    /// Serves `/{failing,ok,malformed}/partners/all` on an ephemeral port and
    /// returns its base URL with the hit counter of the `ok` route.
    async fn spawn_upstream() -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let ok_hits = hits.clone();

        let app = Router::new()
            .route(
                "/failing/partners/all",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route(
                "/ok/partners/all",
                get(move || {
                    let hits = ok_hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        PAYLOAD
                    }
                }),
            )
            .route(
                "/malformed/partners/all",
                get(|| async { r#"{"1": {"0xA": {"name": "Alpha"}}}"# }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        (format!("http://{address}"), hits)
    }

    fn client(base_url: &str) -> YDaemonClient {
        YDaemonClient::new(base_url, Duration::from_secs(60), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_upstream_status_cache_and_payload() {
        let (base_url, hits) = spawn_upstream().await;

        let err = client(&format!("{base_url}/failing"))
            .get_partners()
            .await
            .unwrap_err();
        assert!(matches!(err.root(), MasterApiError::HttpError(_)));

        let ok = client(&format!("{base_url}/ok"));
        let first = ok.get_partners().await.unwrap();
        let second = ok.get_partners().await.unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(first.fetched_at, second.fetched_at);
        assert_eq!(second.partners.vault_count(), 1);

        let err = client(&format!("{base_url}/malformed"))
            .get_partners()
            .await
            .unwrap_err();
        assert!(matches!(err.root(), MasterApiError::JsonError(_)));
    }
}
