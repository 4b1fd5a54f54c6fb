//! Upstream data-source boundary.
//!
//! The three collaborators (profile, contribution calendar, coding judge)
//! are invoked through one object-safe trait so the service layer and the
//! tests can swap implementations freely. Every call resolves to a tagged
//! `Result` rather than signaling failure through panics, which lets the
//! composer make presence/absence decisions without nested error handling.

pub mod sample;
mod service;

pub use sample::SampleSource;
pub use service::{DashboardData, ProfileService};

use futures::future::BoxFuture;
use thiserror::Error;

use crate::analysis::ContributionFeed;
use crate::types::{CodingStats, UserProfile};

/// Why an upstream fetch produced no data.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("upstream request timed out")]
    Timeout,
    #[error("user not found")]
    NotFound,
    #[error("rate limit exceeded")]
    RateLimited,
    #[error("upstream error: {0}")]
    Upstream(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// A provider of the three upstream records. Implementations perform the
/// actual network I/O (or synthesize data); they do not cache and they do
/// not normalize activity into streak metrics.
pub trait DataSource: Send + Sync {
    /// Fetch the mandatory profile record.
    fn fetch_profile<'a>(&'a self, username: &'a str) -> BoxFuture<'a, FetchResult<UserProfile>>;

    /// Fetch the raw contribution calendar plus aggregate counters.
    fn fetch_contributions<'a>(
        &'a self,
        username: &'a str,
    ) -> BoxFuture<'a, FetchResult<ContributionFeed>>;

    /// Fetch coding-judge statistics for an explicitly configured handle.
    fn fetch_coding_stats<'a>(
        &'a self,
        username: &'a str,
    ) -> BoxFuture<'a, FetchResult<CodingStats>>;
}
