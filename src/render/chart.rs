// Chart primitives: the smoothed line/area chart and the donut chart with
// its legend. Geometry comes from `render::geometry`; both charts are pure
// functions of their spec and the theme.

use crate::render::card::{render_card_frame, FONT_DISPLAY, FONT_TEXT};
use crate::render::geometry::{donut_arc, scale_series, smooth_path};
use crate::render::node::{Fragment, Node};
use crate::theme::Theme;
use crate::types::DonutSlice;
use crate::utils::fmt_num;

/// Inner padding of the chart plot area.
const CHART_PADDING: f64 = 12.0;

/// Per-point markers are suppressed above this sample count to avoid
/// visual clutter.
const DOT_DENSITY_LIMIT: usize = 15;

/// Line/area chart parameters. `unique_id` scopes the gradient and filter
/// ids so several charts can share one document.
pub struct LineChartSpec<'a> {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub data: &'a [f64],
    pub show_area: bool,
    pub show_line: bool,
    pub show_dots: bool,
    pub unique_id: &'a str,
}

/// Smoothed line chart with optional area fill, markers and an end-point
/// highlight.
pub fn render_line_chart(spec: &LineChartSpec<'_>, theme: &Theme) -> Fragment {
    let id = spec.unique_id;
    let mut fragment = Fragment::new();

    fragment.push_def(
        Node::elem("linearGradient")
            .attr("id", format!("lineGradient-{id}"))
            .attr("x1", "0%")
            .attr("y1", "0%")
            .attr("x2", "100%")
            .attr("y2", "0%")
            .child(stop("0%", theme.gradient_start, None))
            .child(stop("50%", theme.gradient_mid, None))
            .child(stop("100%", theme.gradient_end, None)),
    );
    fragment.push_def(
        Node::elem("linearGradient")
            .attr("id", format!("areaGradient-{id}"))
            .attr("x1", "0%")
            .attr("y1", "0%")
            .attr("x2", "0%")
            .attr("y2", "100%")
            .child(stop("0%", theme.accent, Some("0.4")))
            .child(stop("50%", theme.accent_secondary, Some("0.2")))
            .child(stop("100%", theme.accent, Some("0"))),
    );
    fragment.push_def(
        Node::elem("filter")
            .attr("id", format!("lineGlow-{id}"))
            .attr("x", "-50%")
            .attr("y", "-50%")
            .attr("width", "200%")
            .attr("height", "200%")
            .child(
                Node::elem("feGaussianBlur")
                    .attr("stdDeviation", "3")
                    .attr("result", "blur"),
            )
            .child(
                Node::elem("feMerge")
                    .child(Node::elem("feMergeNode").attr("in", "blur"))
                    .child(Node::elem("feMergeNode").attr("in", "SourceGraphic")),
            ),
    );

    let mut group = Node::group(spec.x, spec.y);

    // Subtle dashed grid behind everything else.
    for i in 0..=4 {
        let line_y = CHART_PADDING + (i as f64 / 4.0) * (spec.height - CHART_PADDING * 2.0);
        group = group.child(
            Node::elem("line")
                .attr_num("x1", CHART_PADDING)
                .attr_num("y1", line_y)
                .attr_num("x2", spec.width - CHART_PADDING)
                .attr_num("y2", line_y)
                .attr("stroke", theme.border)
                .attr("stroke-width", "1")
                .attr("opacity", "0.3")
                .attr("stroke-dasharray", "4 4"),
        );
    }

    let points = scale_series(spec.data, spec.width, spec.height, CHART_PADDING);
    let path_d = smooth_path(&points);

    if spec.show_area && points.len() > 1 {
        let bottom = spec.height - CHART_PADDING;
        let first = points[0];
        let last = points[points.len() - 1];
        let area_d = format!(
            "{path_d} L {} {} L {} {} Z",
            fmt_num(last.x),
            fmt_num(bottom),
            fmt_num(first.x),
            fmt_num(bottom)
        );
        group = group.child(
            Node::elem("path")
                .attr("d", area_d)
                .attr("fill", format!("url(#areaGradient-{id})")),
        );
    }

    if spec.show_line && !path_d.is_empty() {
        group = group.child(
            Node::elem("path")
                .attr("d", path_d.clone())
                .attr("fill", "none")
                .attr("stroke", format!("url(#lineGradient-{id})"))
                .attr("stroke-width", "4")
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("opacity", "0.4")
                .attr("filter", format!("url(#lineGlow-{id})")),
        );
        group = group.child(
            Node::elem("path")
                .attr("d", path_d)
                .attr("fill", "none")
                .attr("stroke", format!("url(#lineGradient-{id})"))
                .attr("stroke-width", "2.5")
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round"),
        );
    }

    if spec.show_dots && points.len() <= DOT_DENSITY_LIMIT {
        for (i, point) in points.iter().enumerate() {
            let color = if i == points.len() - 1 {
                theme.gradient_end
            } else {
                theme.gradient_start
            };
            group = group
                .child(
                    Node::elem("circle")
                        .attr_num("cx", point.x)
                        .attr_num("cy", point.y)
                        .attr_num("r", 5.0)
                        .attr("fill", color)
                        .attr("opacity", "0.3")
                        .attr("filter", format!("url(#lineGlow-{id})")),
                )
                .child(
                    Node::elem("circle")
                        .attr_num("cx", point.x)
                        .attr_num("cy", point.y)
                        .attr_num("r", 3.0)
                        .attr("fill", color),
                )
                .child(
                    Node::elem("circle")
                        .attr_num("cx", point.x)
                        .attr_num("cy", point.y)
                        .attr_num("r", 1.5)
                        .attr("fill", "#fff")
                        .attr("opacity", "0.8"),
                );
        }
    }

    // Most recent sample gets a standing highlight.
    if let Some(last) = points.last() {
        group = group
            .child(
                Node::elem("circle")
                    .attr_num("cx", last.x)
                    .attr_num("cy", last.y)
                    .attr_num("r", 6.0)
                    .attr("fill", theme.gradient_end)
                    .attr("opacity", "0.3"),
            )
            .child(
                Node::elem("circle")
                    .attr_num("cx", last.x)
                    .attr_num("cy", last.y)
                    .attr_num("r", 4.0)
                    .attr("fill", theme.gradient_end),
            )
            .child(
                Node::elem("circle")
                    .attr_num("cx", last.x)
                    .attr_num("cy", last.y)
                    .attr_num("r", 2.0)
                    .attr("fill", "#fff")
                    .attr("opacity", "0.9"),
            );
    }

    fragment.push(group);
    fragment
}

/// Contribution chart card: frame plus the line chart inset below the
/// title. An empty series renders the frame and grid only.
pub fn render_contribution_chart(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    title: &str,
    data: &[f64],
    theme: &Theme,
) -> Fragment {
    let mut fragment = render_card_frame(x, y, width, height, title, theme);

    let chart = render_line_chart(
        &LineChartSpec {
            x: 0.0,
            y: 44.0,
            width: width - 40.0,
            height: height - 64.0,
            data,
            show_area: true,
            show_line: true,
            show_dots: false,
            unique_id: "contrib",
        },
        theme,
    );

    let mut inset = Node::group(x + 20.0, y);
    inset = inset.children(chart.nodes);
    fragment.defs.extend(chart.defs);
    fragment.push(inset);

    fragment
}

/// Donut chart card with legend. Slices are proportioned by each entry's
/// share of the summed values and drawn clockwise from 12 o'clock; legend
/// percentages round independently and need not sum to exactly 100.
pub fn render_donut_chart(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    title: &str,
    slices: &[DonutSlice],
    center_label: &str,
    theme: &Theme,
) -> Fragment {
    let mut fragment = render_card_frame(x, y, width, height, title, theme);

    let chart_area_width = width * 0.42;
    let center_x = x + chart_area_width / 2.0 + 20.0;
    let center_y = y + height / 2.0 + 12.0;
    let outer_radius = chart_area_width.min(height - 70.0) / 2.0 - 4.0;
    let inner_radius = outer_radius * 0.62;

    let total: f64 = slices.iter().map(|s| s.value).sum();

    if total > 0.0 {
        let mut current_angle = -std::f64::consts::FRAC_PI_2;
        for (i, slice) in slices.iter().enumerate() {
            let sweep = (slice.value / total) * std::f64::consts::TAU;
            let color = theme.chart_colors[i % theme.chart_colors.len()];

            if let Some(path) = donut_arc(
                center_x,
                center_y,
                outer_radius,
                inner_radius,
                current_angle,
                current_angle + sweep,
            ) {
                fragment.push(
                    Node::elem("path")
                        .attr("d", path.clone())
                        .attr("fill", color)
                        .attr("opacity", "0.2")
                        .attr("filter", "url(#softGlow)"),
                );
                fragment.push(Node::elem("path").attr("d", path).attr("fill", color));
            }

            current_angle += sweep;
        }
    }

    // Center decoration and total.
    fragment.push(
        Node::elem("circle")
            .attr_num("cx", center_x)
            .attr_num("cy", center_y)
            .attr_num("r", (inner_radius - 4.0).max(0.0))
            .attr("fill", theme.card_background)
            .attr("opacity", "0.9"),
    );
    fragment.push(
        Node::elem("circle")
            .attr_num("cx", center_x)
            .attr_num("cy", center_y)
            .attr_num("r", (inner_radius - 8.0).max(0.0))
            .attr("fill", "url(#mainGradient)")
            .attr("opacity", "0.5"),
    );
    fragment.push(
        Node::elem("text")
            .attr_num("x", center_x)
            .attr_num("y", center_y + 4.0)
            .attr("font-family", FONT_DISPLAY)
            .attr("font-size", "16")
            .attr("font-weight", "700")
            .attr("fill", theme.primary_text)
            .attr("text-anchor", "middle")
            .text(format!("{}", total as u64)),
    );
    fragment.push(
        Node::elem("text")
            .attr_num("x", center_x)
            .attr_num("y", center_y + 18.0)
            .attr("font-family", FONT_TEXT)
            .attr("font-size", "9")
            .attr("fill", theme.muted_text)
            .attr("text-anchor", "middle")
            .text(center_label.to_uppercase()),
    );

    // Legend with per-entry percentage of total.
    let legend_x = x + chart_area_width + 32.0;
    let legend_start_y = y + 56.0;
    let legend_item_height = 28.0;

    for (i, slice) in slices.iter().enumerate() {
        let item_y = legend_start_y + i as f64 * legend_item_height;
        let color = theme.chart_colors[i % theme.chart_colors.len()];
        let percentage = if total > 0.0 {
            (slice.value / total) * 100.0
        } else {
            0.0
        };

        fragment.push(
            Node::elem("rect")
                .attr_num("x", legend_x - 2.0)
                .attr_num("y", item_y - 8.0)
                .attr_num("width", width - chart_area_width - 50.0)
                .attr_num("height", 24.0)
                .attr_num("rx", 6.0)
                .attr("fill", color)
                .attr("opacity", "0.08"),
        );
        fragment.push(
            Node::elem("circle")
                .attr_num("cx", legend_x + 6.0)
                .attr_num("cy", item_y + 4.0)
                .attr_num("r", 4.0)
                .attr("fill", color),
        );
        fragment.push(
            Node::elem("text")
                .attr_num("x", legend_x + 18.0)
                .attr_num("y", item_y + 8.0)
                .attr("font-family", FONT_TEXT)
                .attr("font-size", "12")
                .attr("font-weight", "500")
                .attr("fill", theme.primary_text)
                .text(slice.label.clone()),
        );
        fragment.push(
            Node::elem("text")
                .attr_num("x", x + width - 24.0)
                .attr_num("y", item_y + 8.0)
                .attr("font-family", FONT_DISPLAY)
                .attr("font-size", "11")
                .attr("font-weight", "600")
                .attr("fill", color)
                .attr("text-anchor", "end")
                .text(format!("{:.0}%", percentage)),
        );
    }

    fragment
}

fn stop(offset: &'static str, color: &str, opacity: Option<&'static str>) -> Node {
    let node = Node::elem("stop")
        .attr("offset", offset)
        .attr("stop-color", color.to_string());
    match opacity {
        Some(value) => node.attr("stop-opacity", value),
        None => node,
    }
}
