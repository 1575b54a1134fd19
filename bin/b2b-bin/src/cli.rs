use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct B2bCli {
    /// OTEL collector endpoint
    #[arg(long, env = "OTEL_COLLECTOR_ENDPOINT")]
    pub otel_collector_endpoint: Option<String>,

    /// API port
    #[arg(long, env = "API_PORT", default_value = "8080")]
    pub api_port: u16,

    /// Base URL of the yDaemon instance serving `/partners/all`
    #[arg(long, env = "YDAEMON_BASE_URL", default_value = "https://ydaemon.yearn.fi")]
    pub ydaemon_base_url: String,

    /// JSON file mapping partner short names to logos
    #[arg(long, env = "LOGO_CATALOG_PATH")]
    pub logo_catalog: Option<PathBuf>,

    /// How long a partners payload is reused before refetching
    #[arg(long, env = "PARTNERS_CACHE_TTL_SECS", default_value = "30")]
    pub partners_cache_ttl_secs: u64,

    /// Timeout for requests to yDaemon
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value = "10")]
    pub upstream_timeout_secs: u64,
}
