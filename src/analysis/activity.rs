//! Contribution activity normalization.
//!
//! Turns the raw daily-activity feed delivered by the calendar collaborator
//! into streak and day-count metrics. All derivations are pure functions of
//! the sorted day sequence.

use crate::types::{ActivityDay, ContributionSummary};

/// Raw activity feed as delivered by the upstream calendar: aggregate
/// counters plus per-day records in no guaranteed order, possibly with
/// duplicate dates across source pages.
#[derive(Clone, Debug, Default)]
pub struct ContributionFeed {
    pub total_contributions: u64,
    pub total_commits: u64,
    pub total_prs: u64,
    pub total_issues: u64,
    pub prs_merged: u64,
    pub issues_closed: u64,
    pub days: Vec<ActivityDay>,
}

/// Normalize a feed into an immutable [`ContributionSummary`] snapshot.
pub fn summarize(feed: ContributionFeed) -> ContributionSummary {
    let days = normalize_days(feed.days);

    ContributionSummary {
        total_contributions: feed.total_contributions,
        current_streak: current_streak(&days),
        longest_streak: longest_streak(&days),
        total_contribution_days: total_contribution_days(&days),
        total_commits: feed.total_commits,
        total_prs: feed.total_prs,
        total_issues: feed.total_issues,
        prs_merged: feed.prs_merged,
        issues_closed: feed.issues_closed,
        days,
    }
}

/// Sort day records ascending by date and collapse duplicate dates.
///
/// Duplicates are last-seen-wins: later source pages carry fresher counts
/// for a date than earlier ones, and the stable sort preserves arrival
/// order within equal dates.
pub fn normalize_days(mut days: Vec<ActivityDay>) -> Vec<ActivityDay> {
    days.sort_by_key(|d| d.date);

    let mut normalized: Vec<ActivityDay> = Vec::with_capacity(days.len());
    for day in days {
        match normalized.last_mut() {
            Some(prev) if prev.date == day.date => *prev = day,
            _ => normalized.push(day),
        }
    }
    normalized
}

/// Consecutive active days counted backward from the most recent day.
///
/// Grace-day policy: an empty most-recent day does not break the streak by
/// itself — counting starts from the day before it instead. If that day is
/// also empty the streak is 0. Counting stops at the first empty day while
/// walking backward.
pub fn current_streak(days: &[ActivityDay]) -> u64 {
    let Some((last, rest)) = days.split_last() else {
        return 0;
    };

    // An active final day counts itself; an empty one defers to the day
    // before it (the grace day).
    let window = if last.count > 0 { days } else { rest };

    window.iter().rev().take_while(|d| d.count > 0).count() as u64
}

/// Length of the longest run of consecutive active days, by sequence
/// position.
pub fn longest_streak(days: &[ActivityDay]) -> u64 {
    let mut longest = 0u64;
    let mut run = 0u64;

    for day in days {
        if day.count > 0 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    longest
}

/// Number of days with at least one contribution.
pub fn total_contribution_days(days: &[ActivityDay]) -> u64 {
    days.iter().filter(|d| d.count > 0).count() as u64
}
