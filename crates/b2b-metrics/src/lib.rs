use std::sync::Arc;

use opentelemetry::{KeyValue, global, metrics::Counter};

#[derive(Debug)]
pub struct MetricsRegistry {
    pub partners: Arc<PartnerMetrics>,
}

impl MetricsRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            partners: PartnerMetrics::new(),
        })
    }
}

#[derive(Debug)]
pub struct PartnerMetrics {
    fetches: Counter<u64>,
    samples_served: Counter<u64>,
    summaries: Counter<u64>,
}

impl PartnerMetrics {
    fn new() -> Arc<Self> {
        let meter = global::meter("b2b-api");
        let fetches = meter
            .u64_counter("partner_fetches_total")
            .with_description("Number of partner data reads, by outcome")
            .with_unit("count")
            .init();

        let samples_served = meter
            .u64_counter("partner_samples_served_total")
            .with_description("Number of partner display samples returned")
            .with_unit("count")
            .init();

        let summaries = meter
            .u64_counter("metrics_summaries_total")
            .with_description("Number of vault metric summaries computed, by scope")
            .with_unit("count")
            .init();

        Arc::new(Self {
            fetches,
            samples_served,
            summaries,
        })
    }

    pub fn record_fetch(&self, outcome: FetchOutcome) {
        self.fetches
            .add(1, &[KeyValue::new("outcome", outcome.as_str())]);
    }

    pub fn record_sample_served(&self, partner_count: usize) {
        self.samples_served.add(
            1,
            &[KeyValue::new("partner_count", partner_count.to_string())],
        );
    }

    pub fn record_summary(&self, partner: &str, scope: SummaryScope) {
        self.summaries.add(
            1,
            &[
                KeyValue::new("partner", partner.to_string()),
                KeyValue::new("scope", scope.as_str()),
            ],
        );
    }
}

#[derive(Clone, Copy, Debug)]
pub enum FetchOutcome {
    Success,
    Failure,
}

impl FetchOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum SummaryScope {
    Vault,
    Aggregate,
}

impl SummaryScope {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vault => "vault",
            Self::Aggregate => "aggregate",
        }
    }
}
