//! GitHub Profile Dashboard Service
//!
//! Serves themeable SVG profile dashboards over HTTP.

use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use gitpulse::fetch::{ProfileService, SampleSource};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);

    // Live collaborators implement `fetch::DataSource`; the binary ships
    // with the deterministic sample source.
    let service = Arc::new(ProfileService::new(SampleSource::new()));

    let runtime = Runtime::new()?;
    gitpulse::server::serve(service, port, runtime.handle().clone())
}
