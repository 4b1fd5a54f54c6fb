//! Fetch orchestration: cache-first resource loading with bounded timeouts
//! and the degradation policy for optional sources.

use std::time::Duration;

use futures::future::BoxFuture;
use tracing::warn;

use super::{DataSource, FetchError, FetchResult};
use crate::analysis;
use crate::cache::ResourceCache;
use crate::types::{CodingStats, ContributionSummary, UserProfile};

/// Timeout applied to each upstream fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// One cache slot. Resource-type prefixes on the keys keep the variants
/// from colliding; a prefix mismatch reads as a miss and is overwritten.
#[derive(Clone)]
enum CachedResource {
    Profile(UserProfile),
    Contributions(ContributionSummary),
    Coding(CodingStats),
}

/// Everything the composer needs for one dashboard.
#[derive(Clone, Debug)]
pub struct DashboardData {
    pub profile: UserProfile,
    /// `None` when the activity fetch failed; the affected sections render
    /// placeholders.
    pub contributions: Option<ContributionSummary>,
    /// `None` when disabled or failed.
    pub coding: Option<CodingStats>,
    /// The third-card switch, evaluated once per request from the
    /// configuration — not from fetch success.
    pub coding_enabled: bool,
}

/// Loads and caches the three upstream resources for a request.
///
/// The profile fetch is fatal on failure; the contribution and coding
/// fetches degrade to absent data. Only successful results are ever
/// written to the cache. A read-miss racing a concurrent request for the
/// same subject may fetch twice; the second write wins and both requests
/// render correct data.
pub struct ProfileService<S> {
    source: S,
    cache: ResourceCache<CachedResource>,
    fetch_timeout: Duration,
}

impl<S: DataSource> ProfileService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: ResourceCache::new(),
            fetch_timeout: FETCH_TIMEOUT,
        }
    }

    /// Override the per-fetch timeout (tests).
    pub fn with_timeout(source: S, fetch_timeout: Duration) -> Self {
        Self {
            source,
            cache: ResourceCache::new(),
            fetch_timeout,
        }
    }

    /// Load everything one dashboard needs. The two optional fetches are
    /// independent network calls and run concurrently.
    pub async fn load_dashboard(
        &self,
        username: &str,
        coding_handle: Option<&str>,
    ) -> FetchResult<DashboardData> {
        let profile = self.profile(username).await?;

        let (contributions, coding) =
            tokio::join!(self.contributions(username), self.coding(coding_handle));

        Ok(DashboardData {
            profile,
            contributions,
            coding,
            coding_enabled: coding_handle.is_some(),
        })
    }

    async fn profile(&self, username: &str) -> FetchResult<UserProfile> {
        if let Some(CachedResource::Profile(profile)) = self.cache.get(username) {
            return Ok(profile);
        }

        let profile = self.bounded(self.source.fetch_profile(username)).await?;
        self.cache
            .set(username, CachedResource::Profile(profile.clone()));
        Ok(profile)
    }

    async fn contributions(&self, username: &str) -> Option<ContributionSummary> {
        let key = format!("contributions:{username}");
        if let Some(CachedResource::Contributions(summary)) = self.cache.get(&key) {
            return Some(summary);
        }

        match self.bounded(self.source.fetch_contributions(username)).await {
            Ok(feed) => {
                let summary = analysis::summarize(feed);
                self.cache
                    .set(key, CachedResource::Contributions(summary.clone()));
                Some(summary)
            }
            Err(error) => {
                warn!(%username, %error, "contribution fetch failed, degrading to placeholders");
                None
            }
        }
    }

    async fn coding(&self, handle: Option<&str>) -> Option<CodingStats> {
        let handle = handle?;
        let key = format!("leetcode:{handle}");
        if let Some(CachedResource::Coding(stats)) = self.cache.get(&key) {
            return Some(stats);
        }

        match self.bounded(self.source.fetch_coding_stats(handle)).await {
            Ok(stats) => {
                self.cache.set(key, CachedResource::Coding(stats.clone()));
                Some(stats)
            }
            Err(error) => {
                warn!(%handle, %error, "coding stats fetch failed, degrading to placeholders");
                None
            }
        }
    }

    async fn bounded<T>(&self, fut: BoxFuture<'_, FetchResult<T>>) -> FetchResult<T> {
        match tokio::time::timeout(self.fetch_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout),
        }
    }
}
