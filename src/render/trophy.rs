//! Trophy badge strip.
//!
//! Six fixed metrics are classified into tiers against per-metric ascending
//! threshold tables and rendered as hexagonal badges. A metric whose value
//! is unknown renders a dash at the base tier instead of claiming zero.

use crate::render::card::{render_card_frame, FONT_DISPLAY, FONT_TEXT};
use crate::render::geometry::{classify, hexagon_points};
use crate::render::node::{Fragment, Node};
use crate::theme::Theme;
use crate::types::{ContributionSummary, UserProfile};
use crate::utils::{fmt_num, format_number};

/// Discrete classification bucket, ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    D,
    C,
    B,
    A,
    S,
}

impl Tier {
    pub fn letter(self) -> &'static str {
        match self {
            Tier::D => "D",
            Tier::C => "C",
            Tier::B => "B",
            Tier::A => "A",
            Tier::S => "S",
        }
    }

    /// Badge border and letter color for this tier.
    pub fn color(self, theme: &Theme) -> &'static str {
        match self {
            Tier::S => theme.accent,
            Tier::A => theme.accent_secondary,
            Tier::B => theme.accent_tertiary,
            Tier::C => theme.warning,
            Tier::D => theme.muted_text,
        }
    }
}

pub const COMMIT_TIERS: [(u64, Tier); 4] =
    [(10, Tier::C), (100, Tier::B), (500, Tier::A), (1000, Tier::S)];
pub const PR_TIERS: [(u64, Tier); 4] =
    [(5, Tier::C), (25, Tier::B), (100, Tier::A), (250, Tier::S)];
pub const ISSUE_TIERS: [(u64, Tier); 4] =
    [(5, Tier::C), (25, Tier::B), (75, Tier::A), (200, Tier::S)];
pub const REPO_TIERS: [(u64, Tier); 4] =
    [(5, Tier::C), (15, Tier::B), (40, Tier::A), (80, Tier::S)];
pub const STAR_TIERS: [(u64, Tier); 4] =
    [(10, Tier::C), (50, Tier::B), (200, Tier::A), (500, Tier::S)];
pub const FOLLOWER_TIERS: [(u64, Tier); 4] =
    [(10, Tier::C), (50, Tier::B), (200, Tier::A), (500, Tier::S)];

struct TrophyMetric {
    label: &'static str,
    value: Option<u64>,
    thresholds: &'static [(u64, Tier)],
}

impl TrophyMetric {
    fn tier(&self) -> Tier {
        match self.value {
            Some(value) => classify(value, self.thresholds, Tier::D),
            None => Tier::D,
        }
    }

    fn display(&self) -> String {
        match self.value {
            Some(value) => format_number(value),
            None => "-".to_string(),
        }
    }
}

/// One hexagonal badge: tier-colored outline, the metric value in the
/// center, the tier letter in a corner chip, the metric label below.
fn render_badge(cx: f64, cy: f64, metric: &TrophyMetric, theme: &Theme) -> Fragment {
    let tier = metric.tier();
    let color = tier.color(theme);
    let radius = 22.0;

    let outline = hexagon_points(cx, cy, radius)
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ");

    let mut fragment = Fragment::new();
    fragment.push(
        Node::elem("polygon")
            .attr("points", outline.clone())
            .attr("fill", theme.card_background)
            .attr("stroke", color)
            .attr("stroke-width", "2"),
    );
    fragment.push(
        Node::elem("polygon")
            .attr("points", outline)
            .attr("fill", color)
            .attr("opacity", "0.08"),
    );
    fragment.push(
        Node::elem("text")
            .attr_num("x", cx)
            .attr_num("y", cy + 5.0)
            .attr("font-family", FONT_DISPLAY)
            .attr("font-size", "13")
            .attr("font-weight", "700")
            .attr("fill", theme.primary_text)
            .attr("text-anchor", "middle")
            .text(metric.display()),
    );

    // Corner chip with the tier letter.
    let chip_x = cx + radius * 0.8;
    let chip_y = cy - radius * 0.8;
    fragment.push(
        Node::elem("circle")
            .attr_num("cx", chip_x)
            .attr_num("cy", chip_y)
            .attr_num("r", 9.0)
            .attr("fill", theme.card_background)
            .attr("stroke", color)
            .attr("stroke-width", "1.5"),
    );
    fragment.push(
        Node::elem("text")
            .attr_num("x", chip_x)
            .attr_num("y", chip_y + 3.5)
            .attr("font-family", FONT_DISPLAY)
            .attr("font-size", "10")
            .attr("font-weight", "700")
            .attr("fill", color)
            .attr("text-anchor", "middle")
            .text(tier.letter()),
    );

    fragment.push(
        Node::elem("text")
            .attr_num("x", cx)
            .attr_num("y", cy + radius + 18.0)
            .attr("font-family", FONT_TEXT)
            .attr("font-size", "9")
            .attr("fill", theme.muted_text)
            .attr("letter-spacing", "0.5")
            .attr("text-anchor", "middle")
            .text(metric.label.to_uppercase()),
    );

    fragment
}

/// The full trophy strip: a framed card holding six evenly spaced badges.
/// Contribution-derived metrics degrade to unknown when the activity fetch
/// failed; profile-derived ones always have values.
pub fn render_trophy_row(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    profile: &UserProfile,
    contributions: Option<&ContributionSummary>,
    theme: &Theme,
) -> Fragment {
    let metrics = [
        TrophyMetric {
            label: "Commits",
            value: contributions.map(|c| c.total_commits),
            thresholds: &COMMIT_TIERS,
        },
        TrophyMetric {
            label: "PRs",
            value: contributions.map(|c| c.total_prs),
            thresholds: &PR_TIERS,
        },
        TrophyMetric {
            label: "Issues",
            value: contributions.map(|c| c.total_issues),
            thresholds: &ISSUE_TIERS,
        },
        TrophyMetric {
            label: "Repos",
            value: Some(profile.public_repos),
            thresholds: &REPO_TIERS,
        },
        TrophyMetric {
            label: "Stars",
            value: Some(profile.total_stars),
            thresholds: &STAR_TIERS,
        },
        TrophyMetric {
            label: "Followers",
            value: Some(profile.followers),
            thresholds: &FOLLOWER_TIERS,
        },
    ];

    let mut fragment = render_card_frame(x, y, width, height, "Trophies", theme);

    let cell_width = (width - 40.0) / metrics.len() as f64;
    let badge_cy = y + 70.0;

    for (i, metric) in metrics.iter().enumerate() {
        let cx = x + 20.0 + cell_width * (i as f64 + 0.5);
        fragment.merge(render_badge(cx, badge_cy, metric, theme));
    }

    fragment
}
