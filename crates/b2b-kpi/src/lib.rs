pub mod error;
pub mod format;
pub mod metrics;
pub mod partners;

pub use error::KpiError;
pub use format::{format_amount, format_float, format_percent};
pub use metrics::{
    MetricsDisplay, MetricsScope, MetricsSource, MetricsView, summarize, vaults_for_partner,
};
pub use partners::{
    DISPLAY_SAMPLE_SIZE, aggregate_partners, deduplicate_partners, sample_partners, shuffle,
};
