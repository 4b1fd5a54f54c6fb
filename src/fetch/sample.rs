//! Deterministic sample data source.
//!
//! Backs the demo binary and the integration tests with a realistic-looking
//! activity pattern: weekday-weighted values around a slowly drifting base,
//! anchored to a fixed date under test so generated calendars are stable.

use chrono::{Days, NaiveDate, Utc};
use futures::future::BoxFuture;
use futures::FutureExt;

use super::{DataSource, FetchResult};
use crate::analysis::ContributionFeed;
use crate::types::{ActivityDay, CodingStats, UserProfile};

/// Days of generated calendar history (16 weeks).
const HISTORY_DAYS: u64 = 112;

/// Weekday activity weights, Monday-indexed: quiet weekends, a midweek peak.
const WEEK_PATTERN: [f64; 7] = [0.3, 0.7, 1.0, 1.2, 1.0, 0.5, 0.2];

/// Fixed drift table standing in for randomness so output is reproducible.
const DRIFT: [f64; 11] = [-3.0, 2.0, 4.0, -1.0, 0.0, 3.0, -2.0, 1.0, -3.0, 2.0, 0.0];

pub struct SampleSource {
    today: NaiveDate,
}

impl SampleSource {
    /// Anchor the generated calendar to the current date.
    pub fn new() -> Self {
        Self {
            today: Utc::now().date_naive(),
        }
    }

    /// Anchor the generated calendar to a fixed date (tests).
    pub fn anchored(today: NaiveDate) -> Self {
        Self { today }
    }

    fn activity_days(&self) -> Vec<ActivityDay> {
        let mut days = Vec::with_capacity(HISTORY_DAYS as usize);
        let mut base: f64 = 8.0;

        for i in 0..HISTORY_DAYS {
            let weekday = (i % 7) as usize;
            let drift = DRIFT[(i % DRIFT.len() as u64) as usize];
            let trend = (i as f64 / 5.0).sin() * 3.0;

            base = (base + drift * 0.3).clamp(1.0, 20.0);
            let value = (base * WEEK_PATTERN[weekday] + trend).floor().max(0.0) as u64;

            let offset = HISTORY_DAYS - 1 - i;
            let date = self
                .today
                .checked_sub_days(Days::new(offset))
                .unwrap_or(self.today);
            days.push(ActivityDay { date, count: value });
        }

        days
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for SampleSource {
    fn fetch_profile<'a>(&'a self, username: &'a str) -> BoxFuture<'a, FetchResult<UserProfile>> {
        async move {
            let mut name: Vec<char> = username.chars().collect();
            if let Some(first) = name.first_mut() {
                *first = first.to_ascii_uppercase();
            }

            let languages = [
                ("Rust", 12usize),
                ("TypeScript", 9),
                ("Go", 7),
                ("Python", 5),
                ("Shell", 3),
                ("Lua", 2),
            ]
            .iter()
            .flat_map(|(lang, repos)| std::iter::repeat(lang.to_string()).take(*repos))
            .collect::<Vec<_>>();

            Ok(UserProfile {
                username: username.to_string(),
                name: name.into_iter().collect(),
                avatar_data_uri: None,
                bio: "Building delightful developer tools".to_string(),
                public_repos: 45,
                followers: 230,
                total_stars: 1480,
                languages,
            })
        }
        .boxed()
    }

    fn fetch_contributions<'a>(
        &'a self,
        _username: &'a str,
    ) -> BoxFuture<'a, FetchResult<ContributionFeed>> {
        async move {
            let days = self.activity_days();
            let total: u64 = days.iter().map(|d| d.count).sum();

            Ok(ContributionFeed {
                total_contributions: total,
                total_commits: total * 7 / 10,
                total_prs: total / 12,
                total_issues: total / 20,
                prs_merged: total / 15,
                issues_closed: total / 25,
                days,
            })
        }
        .boxed()
    }

    fn fetch_coding_stats<'a>(
        &'a self,
        _username: &'a str,
    ) -> BoxFuture<'a, FetchResult<CodingStats>> {
        async move {
            Ok(CodingStats {
                total_solved: 127,
                easy_solved: 64,
                medium_solved: 48,
                hard_solved: 15,
                acceptance_rate: 61.4,
                ranking: 48_230,
            })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> SampleSource {
        SampleSource::anchored("2024-06-01".parse().unwrap())
    }

    #[tokio::test]
    async fn generated_calendar_is_stable_and_sorted() {
        let first = anchor().fetch_contributions("octocat").await.unwrap();
        let second = anchor().fetch_contributions("octocat").await.unwrap();
        assert_eq!(first.days, second.days);
        assert_eq!(first.days.len(), 112);

        let mut sorted = first.days.clone();
        sorted.sort_by_key(|d| d.date);
        assert_eq!(first.days, sorted);
        assert_eq!(first.days.last().unwrap().date.to_string(), "2024-06-01");
    }

    #[tokio::test]
    async fn profile_reflects_the_requested_username() {
        let profile = anchor().fetch_profile("octocat").await.unwrap();
        assert_eq!(profile.username, "octocat");
        assert_eq!(profile.name, "Octocat");
        assert_eq!(profile.languages.len(), 38);
    }
}
