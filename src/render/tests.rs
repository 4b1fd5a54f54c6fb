use pretty_assertions::assert_eq;

use super::card::{
    centered_block_start, render_card_with_stats, render_header, value_font_size, HeaderSpec,
};
use super::chart::{render_donut_chart, render_line_chart, LineChartSpec};
use super::document::assemble;
use super::geometry::{classify, donut_arc, hexagon_points, scale_series, smooth_path, Point};
use super::layout::{card_width, card_x, CANVAS_WIDTH, PADDING};
use super::node::{xml_escape, Fragment, Node};
use super::trophy::{render_trophy_row, Tier, COMMIT_TIERS};
use crate::theme;
use crate::types::{Alignment, CardSpec, DonutSlice, StatEntry, UserProfile};

fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point { x, y }).collect()
}

#[test]
fn smooth_path_needs_at_least_two_points() {
    assert_eq!(smooth_path(&[]), "");
    assert_eq!(smooth_path(&points(&[(10.0, 10.0)])), "");
}

#[test]
fn smooth_path_emits_one_curve_per_segment() {
    let path = smooth_path(&points(&[(0.0, 0.0), (10.0, 5.0), (20.0, 2.0), (30.0, 8.0)]));
    assert!(path.starts_with("M 0 0"));
    assert_eq!(path.matches(" C ").count(), 3);
}

#[test]
fn smooth_path_clamps_endpoint_neighbors() {
    // With two points both phantom neighbors collapse onto the real
    // endpoints, so the control points stay on the segment's line.
    let path = smooth_path(&points(&[(0.0, 0.0), (10.0, 0.0)]));
    assert_eq!(path, "M 0 0 C 3 0, 7 0, 10 0");
}

#[test]
fn scale_series_handles_constant_values_without_dividing_by_zero() {
    let scaled = scale_series(&[5.0, 5.0, 5.0, 5.0], 200.0, 100.0, 12.0);
    assert_eq!(scaled.len(), 4);
    let first_y = scaled[0].y;
    for point in &scaled {
        assert_eq!(point.y, first_y);
        assert!(point.y >= 12.0 && point.y <= 88.0);
    }
}

#[test]
fn scale_series_spaces_points_evenly_inside_the_padding_band() {
    let scaled = scale_series(&[1.0, 2.0, 3.0], 100.0, 60.0, 10.0);
    assert_eq!(scaled[0].x, 10.0);
    assert_eq!(scaled[1].x, 50.0);
    assert_eq!(scaled[2].x, 90.0);
    // Max maps to the top of the band, min to the bottom.
    assert_eq!(scaled[2].y, 10.0);
    assert_eq!(scaled[0].y, 50.0);
}

#[test]
fn scale_series_centers_a_single_sample() {
    let scaled = scale_series(&[7.0], 100.0, 60.0, 10.0);
    assert_eq!(scaled.len(), 1);
    assert_eq!(scaled[0].x, 50.0);
}

#[test]
fn donut_arc_skips_degenerate_slices() {
    // A slice narrower than twice the gap would invert; no path is emitted.
    assert_eq!(donut_arc(0.0, 0.0, 50.0, 30.0, 0.0, 0.05), None);
    assert!(donut_arc(0.0, 0.0, 50.0, 30.0, 0.0, 1.0).is_some());
}

#[test]
fn donut_arc_closes_the_slice() {
    let path = donut_arc(100.0, 100.0, 50.0, 30.0, 0.0, 1.5).unwrap();
    assert!(path.starts_with("M "));
    assert!(path.ends_with("Z"));
    assert_eq!(path.matches(" A ").count(), 2);
}

#[test]
fn hexagon_starts_at_twelve_oclock() {
    let hex = hexagon_points(100.0, 100.0, 20.0);
    assert_eq!(hex.len(), 6);
    assert!((hex[0].x - 100.0).abs() < 1e-9);
    assert!((hex[0].y - 80.0).abs() < 1e-9);
}

#[test]
fn classify_matches_the_documented_tier_table() {
    let table = [(1u64, "c"), (10, "b"), (50, "a"), (100, "s")];
    assert_eq!(classify(0, &table, "lowest"), "lowest");
    assert_eq!(classify(1, &table, "lowest"), "c");
    assert_eq!(classify(9, &table, "lowest"), "c");
    assert_eq!(classify(99, &table, "lowest"), "a");
    assert_eq!(classify(100, &table, "lowest"), "s");
    assert_eq!(classify(5000, &table, "lowest"), "s");
}

#[test]
fn classify_is_monotonic_over_commit_tiers() {
    let mut previous = Tier::D;
    for value in 0..=1200 {
        let tier = classify(value, &COMMIT_TIERS, Tier::D);
        assert!(tier >= previous, "tier decreased at value {value}");
        previous = tier;
    }
}

#[test]
fn last_card_right_edge_meets_the_padding_boundary() {
    for count in 1..=4 {
        let width = card_width(count);
        let right_edge = card_x(count - 1, width) + width;
        assert!(
            (right_edge - (CANVAS_WIDTH - PADDING)).abs() < 1e-6,
            "drift for {count} cards: {right_edge}"
        );
    }
}

#[test]
fn value_font_size_steps_down_across_the_four_tiers() {
    assert_eq!(value_font_size(4), 22.0);
    assert_eq!(value_font_size(6), 18.0);
    assert_eq!(value_font_size(8), 15.0);
    assert_eq!(value_font_size(11), 12.0);

    let mut previous = f64::INFINITY;
    for len in 1..=20 {
        let size = value_font_size(len);
        assert!(size <= previous);
        previous = size;
    }
}

#[test]
fn xml_escape_covers_all_five_entities() {
    assert_eq!(
        xml_escape(r#"<a & "b" 'c'>"#),
        "&lt;a &amp; &quot;b&quot; &apos;c&apos;&gt;"
    );
}

#[test]
fn node_serialization_escapes_text_and_attributes() {
    let svg = Node::elem("text")
        .attr("data-note", "a<b")
        .text("Q&A")
        .render();
    assert_eq!(svg, r#"<text data-note="a&lt;b">Q&amp;A</text>"#);
}

#[test]
fn card_title_is_upper_cased() {
    let spec = CardSpec {
        x: 24.0,
        y: 80.0,
        width: 290.0,
        height: 140.0,
        title: "Streak Stats".to_string(),
        entries: vec![],
    };
    let rendered = render_card_with_stats(&spec, theme::named("dark"))
        .nodes
        .iter()
        .map(|n| n.render())
        .collect::<String>();
    assert!(rendered.contains("STREAK STATS"));
    assert!(!rendered.contains("Streak Stats"));
}

#[test]
fn breakdown_entry_renders_three_difficulty_rows() {
    let spec = CardSpec {
        x: 24.0,
        y: 80.0,
        width: 290.0,
        height: 140.0,
        title: "Coding".to_string(),
        entries: vec![StatEntry::Breakdown {
            label: "Solved".to_string(),
            easy: "80".to_string(),
            medium: "45".to_string(),
            hard: "12".to_string(),
        }],
    };
    let rendered = render_card_with_stats(&spec, theme::named("dark"))
        .nodes
        .iter()
        .map(|n| n.render())
        .collect::<String>();
    for needle in ["Easy", "Medium", "Hard", "80", "45", "12"] {
        assert!(rendered.contains(needle), "missing {needle}");
    }
}

#[test]
fn centered_header_includes_avatar_footprint() {
    let with_avatar = centered_block_start(960.0, "Sam's Dashboard", true);
    let without_avatar = centered_block_start(960.0, "Sam's Dashboard", false);
    // The avatar plus its gap is 48px wide; the centered block shifts left
    // by half of that when the avatar participates.
    assert!((without_avatar - with_avatar - 24.0).abs() < 1e-9);
}

#[test]
fn header_alignment_modes_swap_title_and_branding_ends() {
    let dark = theme::named("dark");
    for alignment in [Alignment::Start, Alignment::Center, Alignment::End] {
        let fragment = render_header(
            &HeaderSpec {
                y: 48.0,
                width: 960.0,
                title: "Sam's Dashboard",
                subtitle: Some("Building things"),
                avatar_data_uri: Some("data:image/png;base64,AAAA"),
                alignment,
            },
            dark,
        );
        let rendered = fragment.nodes.iter().map(|n| n.render()).collect::<String>();
        assert!(rendered.contains("GITPULSE"));
        assert!(rendered.contains("Sam&apos;s Dashboard"));
        assert!(rendered.contains("image"));
    }

    let start = render_header(
        &HeaderSpec {
            y: 48.0,
            width: 960.0,
            title: "T",
            subtitle: None,
            avatar_data_uri: None,
            alignment: Alignment::Start,
        },
        dark,
    );
    let start_svg = start.nodes.iter().map(|n| n.render()).collect::<String>();
    // Start mode pins the branding to the right edge with end anchoring.
    assert!(start_svg.contains(r#"text-anchor="end""#));

    let end = render_header(
        &HeaderSpec {
            y: 48.0,
            width: 960.0,
            title: "T",
            subtitle: None,
            avatar_data_uri: None,
            alignment: Alignment::End,
        },
        dark,
    );
    let end_svg = end.nodes.iter().map(|n| n.render()).collect::<String>();
    assert!(end_svg.contains(r#"text-anchor="start""#));
}

#[test]
fn donut_legend_percentages_round_independently() {
    let dark = theme::named("dark");
    let slices = vec![
        DonutSlice {
            label: "Go".to_string(),
            value: 3.0,
        },
        DonutSlice {
            label: "Rust".to_string(),
            value: 1.0,
        },
    ];
    let rendered = render_donut_chart(0.0, 0.0, 460.0, 200.0, "Languages", &slices, "repos", dark)
        .nodes
        .iter()
        .map(|n| n.render())
        .collect::<String>();
    assert!(rendered.contains("75%"));
    assert!(rendered.contains("25%"));

    let thirds = vec![
        DonutSlice {
            label: "Go".to_string(),
            value: 1.0,
        },
        DonutSlice {
            label: "Rust".to_string(),
            value: 1.0,
        },
        DonutSlice {
            label: "C".to_string(),
            value: 1.0,
        },
    ];
    let rendered = render_donut_chart(0.0, 0.0, 460.0, 200.0, "Languages", &thirds, "repos", dark)
        .nodes
        .iter()
        .map(|n| n.render())
        .collect::<String>();
    // Three slices at a third each display 33% apiece; the sum is 99 and
    // that is the accepted behavior.
    assert_eq!(rendered.matches("33%").count(), 3);
}

#[test]
fn line_chart_suppresses_dots_above_the_density_limit() {
    let dark = theme::named("dark");
    let few: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let many: Vec<f64> = (0..40).map(|i| i as f64).collect();

    let sparse_spec = LineChartSpec {
        x: 0.0,
        y: 0.0,
        width: 400.0,
        height: 150.0,
        data: &few,
        show_area: true,
        show_line: true,
        show_dots: true,
        unique_id: "t",
    };
    let dense_spec = LineChartSpec {
        data: &many,
        ..sparse_spec
    };

    let sparse = render_line_chart(&sparse_spec, dark)
        .nodes
        .iter()
        .map(|n| n.render())
        .collect::<String>();
    let dense = render_line_chart(&dense_spec, dark)
        .nodes
        .iter()
        .map(|n| n.render())
        .collect::<String>();

    // 10 samples: 3 circles per dot plus the 3-circle end highlight.
    assert_eq!(sparse.matches("<circle").count(), 10 * 3 + 3);
    // Dense series keeps only the end highlight.
    assert_eq!(dense.matches("<circle").count(), 3);
}

#[test]
fn empty_series_renders_grid_without_line_or_area() {
    let dark = theme::named("dark");
    let rendered = render_line_chart(
        &LineChartSpec {
            x: 0.0,
            y: 0.0,
            width: 400.0,
            height: 150.0,
            data: &[],
            show_area: true,
            show_line: true,
            show_dots: true,
            unique_id: "t",
        },
        dark,
    )
    .nodes
    .iter()
    .map(|n| n.render())
    .collect::<String>();
    assert!(rendered.contains("<line"));
    assert!(!rendered.contains("<path"));
}

#[test]
fn trophy_row_marks_unknown_metrics_with_a_dash_at_base_tier() {
    let dark = theme::named("dark");
    let profile = UserProfile {
        public_repos: 45,
        total_stars: 600,
        followers: 3,
        ..UserProfile::default()
    };
    let rendered = render_trophy_row(24.0, 452.0, 912.0, 136.0, &profile, None, dark)
        .nodes
        .iter()
        .map(|n| n.render())
        .collect::<String>();
    // Commits, PRs and issues are unknown without contribution data.
    assert_eq!(rendered.matches(">-<").count(), 3);
    // 45 repos is an A, 600 stars an S, 3 followers a D.
    assert!(rendered.contains(">A<"));
    assert!(rendered.contains(">S<"));
    assert!(rendered.contains(">600<"));
}

#[test]
fn assemble_collects_instance_defs_into_the_shared_block() {
    let dark = theme::named("dark");
    let mut fragment = Fragment::new();
    fragment.push_def(Node::elem("linearGradient").attr("id", "custom-def"));
    fragment.push(Node::elem("rect").attr("fill", "url(#custom-def)"));

    let svg = assemble(vec![fragment], 960.0, 600.0, dark);
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<defs>").count(), 1);
    let defs_block = &svg[svg.find("<defs>").unwrap()..svg.find("</defs>").unwrap()];
    for id in ["mainGradient", "accentGradient", "cardGlow", "softGlow", "custom-def"] {
        assert!(defs_block.contains(id), "missing def {id}");
    }
}
