//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing normalized upstream records, derived contribution metrics,
//! and the transient card/chart specifications consumed by the renderer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single day of contribution activity.
///
/// Produced by flattening the upstream weekly calendar into a chronologically
/// ascending sequence, unique per date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDay {
    /// Calendar date at day granularity
    pub date: NaiveDate,
    /// Number of contributions recorded on that date
    pub count: u64,
}

/// Derived, immutable snapshot of a user's contribution history.
///
/// Computed once per fetch by the activity normalizer, cached, and discarded
/// when the cache entry expires. See [`crate::analysis`] for the derivation
/// rules.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContributionSummary {
    /// Total contributions over the observed window
    pub total_contributions: u64,
    /// Consecutive active days counted back from the most recent day,
    /// with a one-day grace period for an empty current day
    pub current_streak: u64,
    /// Longest run of consecutive active days in the whole sequence
    pub longest_streak: u64,
    /// Number of days with at least one contribution
    pub total_contribution_days: u64,
    /// Commit contributions counted upstream
    pub total_commits: u64,
    /// Pull request contributions counted upstream
    pub total_prs: u64,
    /// Issue contributions counted upstream
    pub total_issues: u64,
    /// Pull requests merged
    pub prs_merged: u64,
    /// Issues closed
    pub issues_closed: u64,
    /// The full ordered day sequence, sorted ascending by date
    pub days: Vec<ActivityDay>,
}

/// Normalized GitHub profile record returned by the profile collaborator.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Login name the dashboard was requested for
    pub username: String,
    /// Display name, falling back to the login upstream
    pub name: String,
    /// Avatar image pre-encoded as a data URI for safe inline embedding,
    /// when the upstream fetch produced one
    pub avatar_data_uri: Option<String>,
    /// Profile bio, empty when unset
    pub bio: String,
    /// Public repository count
    pub public_repos: u64,
    /// Follower count
    pub followers: u64,
    /// Stars aggregated across all public repositories
    pub total_stars: u64,
    /// Primary language tag of each repository that has one; repeats are
    /// meaningful (one entry per repository)
    pub languages: Vec<String>,
}

/// Normalized coding-judge record returned by the optional collaborator.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CodingStats {
    /// Total problems solved
    pub total_solved: u64,
    /// Problems solved at easy difficulty
    pub easy_solved: u64,
    /// Problems solved at medium difficulty
    pub medium_solved: u64,
    /// Problems solved at hard difficulty
    pub hard_solved: u64,
    /// Acceptance rate in percent
    pub acceptance_rate: f64,
    /// Global ranking position
    pub ranking: u64,
}

/// One entry inside a stat card.
///
/// A tagged variant rather than an implicit shape check, so renderers handle
/// every case exhaustively.
#[derive(Clone, Debug)]
pub enum StatEntry {
    /// A plain label/value pair with optional icon and progress bar
    Scalar {
        label: String,
        value: String,
        icon: Option<&'static str>,
        /// Progress in percent, rendered as a thin bar under the value
        progress: Option<f64>,
    },
    /// A three-way difficulty breakdown rendered as fixed-color rows
    Breakdown {
        label: String,
        easy: String,
        medium: String,
        hard: String,
    },
}

/// Position, size, title and contents of one stat card. Built per request,
/// not retained.
#[derive(Clone, Debug)]
pub struct CardSpec {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub entries: Vec<StatEntry>,
}

/// One labeled value of a donut chart series.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: f64,
}

/// Header alignment mode. Unrecognized query values fall back to `Start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    /// Parse a query-string value, defaulting to `Start` for anything
    /// unrecognized.
    pub fn parse(value: &str) -> Self {
        match value {
            "center" => Alignment::Center,
            "end" => Alignment::End,
            _ => Alignment::Start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_parse_falls_back_to_start() {
        assert_eq!(Alignment::parse("center"), Alignment::Center);
        assert_eq!(Alignment::parse("end"), Alignment::End);
        assert_eq!(Alignment::parse("start"), Alignment::Start);
        assert_eq!(Alignment::parse("diagonal"), Alignment::Start);
        assert_eq!(Alignment::parse(""), Alignment::Start);
    }
}
