//! Card composition.
//!
//! Builds the three fixed rows of the dashboard — stat cards, chart plus
//! donut, trophy strip — from whatever data the fetch layer produced, and
//! hands the ordered fragments to the document assembler. Unknown values
//! render as a dash so "no data" never masquerades as zero.

use std::collections::HashMap;

use crate::fetch::DashboardData;
use crate::render::card::{render_background, render_card_with_stats, render_header, HeaderSpec};
use crate::render::chart::{render_contribution_chart, render_donut_chart};
use crate::render::document::assemble;
use crate::render::icons;
use crate::render::layout::{card_width, card_x, CANVAS_WIDTH, CARD_GAP, PADDING};
use crate::render::trophy::render_trophy_row;
use crate::theme::Theme;
use crate::types::{Alignment, CardSpec, DonutSlice, StatEntry};
use crate::utils::format_number;

const HEADER_BASELINE: f64 = 48.0;
const ROW1_Y: f64 = 80.0;
const STAT_CARD_HEIGHT: f64 = 140.0;
const ROW2_HEIGHT: f64 = 200.0;
const TROPHY_ROW_HEIGHT: f64 = 136.0;

/// Days of activity shown in the contribution chart.
const CHART_WINDOW: usize = 30;

/// Language slices shown in the donut; matches the chart palette size.
const MAX_LANGUAGES: usize = 6;

/// Render one complete dashboard document. The theme and alignment travel
/// as plain arguments; nothing about the current request is stored in
/// shared state.
pub fn render_dashboard(data: &DashboardData, theme: &Theme, alignment: Alignment) -> String {
    let row2_y = ROW1_Y + STAT_CARD_HEIGHT + CARD_GAP;
    let trophy_y = row2_y + ROW2_HEIGHT + CARD_GAP;
    let height = trophy_y + TROPHY_ROW_HEIGHT + PADDING;

    let mut fragments = Vec::new();

    fragments.push(render_background(CANVAS_WIDTH, height, theme));

    let subtitle = (!data.profile.bio.is_empty()).then_some(data.profile.bio.as_str());
    fragments.push(render_header(
        &HeaderSpec {
            y: HEADER_BASELINE,
            width: CANVAS_WIDTH,
            title: &format!("{}'s Dashboard", data.profile.name),
            subtitle,
            avatar_data_uri: data.profile.avatar_data_uri.as_deref(),
            alignment,
        },
        theme,
    ));

    for card in top_row_cards(data) {
        fragments.push(render_card_with_stats(&card, theme));
    }

    // Row 2: contribution chart on the left, language donut on the right,
    // the chart taking the extra half gap.
    let chart_width = card_width(2) + CARD_GAP / 2.0;
    let donut_width = card_width(2) - CARD_GAP / 2.0;
    let activity = chart_series(data);
    fragments.push(render_contribution_chart(
        PADDING,
        row2_y,
        chart_width,
        ROW2_HEIGHT,
        "Contribution Activity",
        &activity,
        theme,
    ));
    fragments.push(render_donut_chart(
        PADDING + chart_width + CARD_GAP,
        row2_y,
        donut_width,
        ROW2_HEIGHT,
        "Top Languages",
        &language_slices(&data.profile.languages),
        "repos",
        theme,
    ));

    fragments.push(render_trophy_row(
        PADDING,
        trophy_y,
        CANVAS_WIDTH - PADDING * 2.0,
        TROPHY_ROW_HEIGHT,
        &data.profile,
        data.contributions.as_ref(),
        theme,
    ));

    assemble(fragments, CANVAS_WIDTH, height, theme)
}

/// The three top-row cards. The third slot is decided by the coding-judge
/// switch alone, so a failed coding fetch still shows the coding card with
/// placeholders instead of silently swapping variants.
fn top_row_cards(data: &DashboardData) -> Vec<CardSpec> {
    let width = card_width(3);
    let card = |index: usize, title: &str, entries: Vec<StatEntry>| CardSpec {
        x: card_x(index, width),
        y: ROW1_Y,
        width,
        height: STAT_CARD_HEIGHT,
        title: title.to_string(),
        entries,
    };

    let profile = &data.profile;
    let contributions = data.contributions.as_ref();

    let github_card = card(
        0,
        "GitHub Stats",
        vec![
            scalar("Followers", Some(profile.followers), Some(icons::FOLLOWERS)),
            scalar("Repositories", Some(profile.public_repos), Some(icons::REPOS)),
            scalar("Stars", Some(profile.total_stars), Some(icons::STARS)),
        ],
    );

    let streak_card = card(
        1,
        "Streak Stats",
        vec![
            scalar(
                "Current",
                contributions.map(|c| c.current_streak),
                Some(icons::STREAK),
            ),
            scalar(
                "Longest",
                contributions.map(|c| c.longest_streak),
                Some(icons::TROPHY),
            ),
            scalar(
                "Total Days",
                contributions.map(|c| c.total_contribution_days),
                None,
            ),
        ],
    );

    let third_card = if data.coding_enabled {
        let coding = data.coding.as_ref();
        card(
            2,
            "Competitive Coding",
            vec![
                StatEntry::Scalar {
                    label: "Solved".to_string(),
                    value: placeholder(coding.map(|c| c.total_solved)),
                    icon: Some(icons::CODE),
                    progress: coding.map(|c| c.acceptance_rate),
                },
                StatEntry::Breakdown {
                    label: "By Difficulty".to_string(),
                    easy: placeholder(coding.map(|c| c.easy_solved)),
                    medium: placeholder(coding.map(|c| c.medium_solved)),
                    hard: placeholder(coding.map(|c| c.hard_solved)),
                },
                scalar("Ranking", coding.map(|c| c.ranking), None),
            ],
        )
    } else {
        card(
            2,
            "Community Stats",
            vec![
                scalar(
                    "PRs Merged",
                    contributions.map(|c| c.prs_merged),
                    Some(icons::CODE),
                ),
                scalar(
                    "Issues Closed",
                    contributions.map(|c| c.issues_closed),
                    None,
                ),
                scalar(
                    "Contributions",
                    contributions.map(|c| c.total_contributions),
                    None,
                ),
            ],
        )
    };

    vec![github_card, streak_card, third_card]
}

/// Counts for the chart window, oldest first. An absent summary yields an
/// empty series and the chart renders its frame and grid only.
fn chart_series(data: &DashboardData) -> Vec<f64> {
    data.contributions
        .as_ref()
        .map(|summary| {
            let days = &summary.days;
            let start = days.len().saturating_sub(CHART_WINDOW);
            days[start..].iter().map(|d| d.count as f64).collect()
        })
        .unwrap_or_default()
}

/// Aggregate per-repo language tags into the donut series: occurrences
/// counted, ordered by count descending (label ascending on ties), capped
/// at the palette size.
fn language_slices(languages: &[String]) -> Vec<DonutSlice> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for language in languages {
        *counts.entry(language.as_str()).or_insert(0) += 1;
    }

    let mut slices: Vec<(&str, u64)> = counts.into_iter().collect();
    slices.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    slices.truncate(MAX_LANGUAGES);

    slices
        .into_iter()
        .map(|(label, count)| DonutSlice {
            label: label.to_string(),
            value: count as f64,
        })
        .collect()
}

fn placeholder(value: Option<u64>) -> String {
    value.map(format_number).unwrap_or_else(|| "-".to_string())
}

fn scalar(label: &str, value: Option<u64>, icon: Option<&'static str>) -> StatEntry {
    StatEntry::Scalar {
        label: label.to_string(),
        value: placeholder(value),
        icon,
        progress: None,
    }
}
