//! Pure numeric helpers behind the chart and badge renderers: spline
//! smoothing, data-to-pixel scaling, donut arc paths, hexagon vertices and
//! threshold classification. Nothing here touches a theme or produces a
//! complete element; callers wrap the results into nodes.

use std::fmt::Write;

use crate::utils::fmt_num;

/// A 2-D point in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Cardinal spline tension shared by every smoothed path.
const TENSION: f64 = 0.3;

/// Angular gap subtracted from both ends of a donut slice, in radians.
const SLICE_GAP: f64 = 0.03;

/// Build a smooth path through the points using Catmull-Rom-style cardinal
/// interpolation. Endpoints substitute the missing neighbor by clamping to
/// the nearest real point. Fewer than two points yield an empty path; a
/// one-point chart is rendered line-less by its caller.
pub fn smooth_path(points: &[Point]) -> String {
    if points.len() < 2 {
        return String::new();
    }

    let mut path = format!("M {} {}", fmt_num(points[0].x), fmt_num(points[0].y));

    for i in 0..points.len() - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(points.len() - 1)];

        let cp1x = p1.x + (p2.x - p0.x) * TENSION;
        let cp1y = p1.y + (p2.y - p0.y) * TENSION;
        let cp2x = p2.x - (p3.x - p1.x) * TENSION;
        let cp2y = p2.y - (p3.y - p1.y) * TENSION;

        let _ = write!(
            path,
            " C {} {}, {} {}, {} {}",
            fmt_num(cp1x),
            fmt_num(cp1y),
            fmt_num(cp2x),
            fmt_num(cp2y),
            fmt_num(p2.x),
            fmt_num(p2.y)
        );
    }

    path
}

/// Map raw samples into pixel coordinates within a `[padding, dim-padding]`
/// band. Horizontal positions are evenly spaced by index; vertical positions
/// are inverted linear interpolation between the series min and max. A
/// constant series substitutes a range of 1 instead of dividing by zero, and
/// a single sample is centered horizontally.
pub fn scale_series(values: &[f64], width: f64, height: f64, padding: f64) -> Vec<Point> {
    if values.is_empty() {
        return Vec::new();
    }

    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    let chart_width = width - padding * 2.0;
    let chart_height = height - padding * 2.0;
    let last_index = values.len() - 1;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if last_index == 0 {
                padding + chart_width / 2.0
            } else {
                padding + (i as f64 / last_index as f64) * chart_width
            };
            let y = padding + chart_height - ((value - min) / range) * chart_height;
            Point { x, y }
        })
        .collect()
}

/// Closed path for one donut slice between `start_angle` and `end_angle`
/// (radians), with the fixed gap subtracted symmetrically from both ends
/// for visual separation. Returns `None` when the gap consumes the slice.
pub fn donut_arc(
    cx: f64,
    cy: f64,
    outer_r: f64,
    inner_r: f64,
    start_angle: f64,
    end_angle: f64,
) -> Option<String> {
    let start = start_angle + SLICE_GAP;
    let end = end_angle - SLICE_GAP;

    if end <= start {
        return None;
    }

    let point_at = |r: f64, angle: f64| (cx + r * angle.cos(), cy + r * angle.sin());

    let (sx, sy) = point_at(outer_r, start);
    let (ex, ey) = point_at(outer_r, end);
    let (isx, isy) = point_at(inner_r, end);
    let (iex, iey) = point_at(inner_r, start);

    let large_arc = if end - start > std::f64::consts::PI { 1 } else { 0 };

    Some(format!(
        "M {} {} A {} {} 0 {} 1 {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
        fmt_num(sx),
        fmt_num(sy),
        fmt_num(outer_r),
        fmt_num(outer_r),
        large_arc,
        fmt_num(ex),
        fmt_num(ey),
        fmt_num(isx),
        fmt_num(isy),
        fmt_num(inner_r),
        fmt_num(inner_r),
        large_arc,
        fmt_num(iex),
        fmt_num(iey)
    ))
}

/// Vertices of a pointy-top regular hexagon, starting at 12 o'clock and
/// proceeding clockwise.
pub fn hexagon_points(cx: f64, cy: f64, radius: f64) -> [Point; 6] {
    std::array::from_fn(|i| {
        let angle = (-90.0 + 60.0 * i as f64).to_radians();
        Point {
            x: cx + radius * angle.cos(),
            y: cy + radius * angle.sin(),
        }
    })
}

/// Return the label of the highest threshold the value meets or exceeds.
///
/// `thresholds` must be ordered ascending; `base` is the label below the
/// lowest threshold. Monotonic: a larger value never yields a lower tier.
pub fn classify<T: Copy>(value: u64, thresholds: &[(u64, T)], base: T) -> T {
    let mut tier = base;
    for &(threshold, label) in thresholds {
        if value >= threshold {
            tier = label;
        } else {
            break;
        }
    }
    tier
}
