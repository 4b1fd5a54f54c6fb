//! Card and text primitives: canvas background, card frames, stat items
//! and the dashboard header. Every function is pure in its parameters and
//! the theme reference it receives.

use crate::render::layout::{BORDER_RADIUS, CARD_RADIUS, PADDING};
use crate::render::node::{Fragment, Node};
use crate::theme::Theme;
use crate::types::{Alignment, CardSpec, StatEntry};
use crate::utils::fmt_num;

pub const FONT_DISPLAY: &str =
    "'SF Pro Display', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif";
pub const FONT_TEXT: &str =
    "'SF Pro Text', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif";

/// Avatar diameter in the header.
const AVATAR_SIZE: f64 = 40.0;
/// Gap between the avatar and the title.
const AVATAR_GAP: f64 = 8.0;
/// Approximate advance width of one title character at the header font
/// size, used to position blocks around text the renderer cannot measure.
const TITLE_CHAR_WIDTH: f64 = 13.4;

/// Step function mapping a rendered value's character length to a font
/// size, so long values do not overflow their card column. Four tiers:
/// up to 4 chars at 22px, up to 6 at 18px, up to 8 at 15px, longer at 12px.
pub fn value_font_size(len: usize) -> f64 {
    match len {
        0..=4 => 22.0,
        5..=6 => 18.0,
        7..=8 => 15.0,
        _ => 12.0,
    }
}

/// Full-canvas rounded background with decorative overlay layers. Purely
/// decorative, no conditional logic.
pub fn render_background(width: f64, height: f64, theme: &Theme) -> Fragment {
    let mut fragment = Fragment::new();

    fragment.push(
        Node::elem("rect")
            .attr_num("x", 0.0)
            .attr_num("y", 0.0)
            .attr_num("width", width)
            .attr_num("height", height)
            .attr_num("rx", BORDER_RADIUS)
            .attr_num("ry", BORDER_RADIUS)
            .attr("fill", theme.background)
            .attr("stroke", theme.border)
            .attr("stroke-width", "2"),
    );
    fragment.push(
        Node::elem("rect")
            .attr_num("x", 1.0)
            .attr_num("y", 1.0)
            .attr_num("width", width - 2.0)
            .attr_num("height", height - 2.0)
            .attr_num("rx", BORDER_RADIUS)
            .attr_num("ry", BORDER_RADIUS)
            .attr("fill", "url(#mainGradient)")
            .attr("opacity", "0.5"),
    );
    fragment.push(
        Node::elem("circle")
            .attr_num("cx", width * 0.82)
            .attr_num("cy", 0.0)
            .attr_num("r", 180.0)
            .attr("fill", theme.glow)
            .attr("opacity", "0.04")
            .attr("filter", "url(#cardGlow)"),
    );
    fragment.push(
        Node::elem("circle")
            .attr_num("cx", width * 0.12)
            .attr_num("cy", height)
            .attr_num("r", 160.0)
            .attr("fill", theme.glow_secondary)
            .attr("opacity", "0.04")
            .attr("filter", "url(#cardGlow)"),
    );

    fragment
}

/// Card chrome: glow, background, inner gradient wash, hairline border,
/// upper-cased title and its accent underline.
pub fn render_card_frame(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    title: &str,
    theme: &Theme,
) -> Fragment {
    let rounded = |node: Node| {
        node.attr_num("x", x)
            .attr_num("y", y)
            .attr_num("width", width)
            .attr_num("height", height)
            .attr_num("rx", CARD_RADIUS)
            .attr_num("ry", CARD_RADIUS)
    };

    let mut fragment = Fragment::new();
    fragment.push(
        rounded(Node::elem("rect"))
            .attr("fill", theme.glow)
            .attr("opacity", "0.03")
            .attr("filter", "url(#cardGlow)"),
    );
    fragment.push(rounded(Node::elem("rect")).attr("fill", theme.card_background));
    fragment.push(
        rounded(Node::elem("rect"))
            .attr("fill", "url(#mainGradient)")
            .attr("opacity", "0.3"),
    );
    fragment.push(
        Node::elem("rect")
            .attr_num("x", x + 0.5)
            .attr_num("y", y + 0.5)
            .attr_num("width", width - 1.0)
            .attr_num("height", height - 1.0)
            .attr_num("rx", CARD_RADIUS)
            .attr_num("ry", CARD_RADIUS)
            .attr("fill", "none")
            .attr("stroke", theme.border_light)
            .attr("stroke-width", "1")
            .attr("opacity", "0.4"),
    );
    fragment.push(
        Node::elem("text")
            .attr_num("x", x + 20.0)
            .attr_num("y", y + 28.0)
            .attr("font-family", FONT_DISPLAY)
            .attr("font-size", "13")
            .attr("font-weight", "600")
            .attr("fill", theme.secondary_text)
            .attr("letter-spacing", "0.5")
            .text(title.to_uppercase()),
    );
    fragment.push(
        Node::elem("rect")
            .attr_num("x", x + 20.0)
            .attr_num("y", y + 36.0)
            .attr_num("width", 28.0)
            .attr_num("height", 2.0)
            .attr_num("rx", 1.0)
            .attr("fill", "url(#accentGradient)")
            .attr("opacity", "0.7"),
    );

    fragment
}

/// One stat entry rendered at the top-left of its column.
fn render_stat_entry(x: f64, y: f64, width: f64, entry: &StatEntry, theme: &Theme) -> Fragment {
    let mut fragment = Fragment::new();

    match entry {
        StatEntry::Scalar {
            label,
            value,
            icon,
            progress,
        } => {
            if let Some(path) = icon {
                fragment.push(
                    Node::elem("path")
                        .attr("d", *path)
                        .attr("fill", theme.accent)
                        .attr("opacity", "0.9")
                        .attr(
                            "transform",
                            format!("translate({}, {}) scale(0.55)", fmt_num(x), fmt_num(y)),
                        ),
                );
            }
            fragment.push(
                Node::elem("text")
                    .attr_num("x", x)
                    .attr_num("y", y + 34.0)
                    .attr("font-family", FONT_DISPLAY)
                    .attr("font-size", format!("{}", value_font_size(value.len())))
                    .attr("font-weight", "700")
                    .attr("fill", theme.primary_text)
                    .text(value.clone()),
            );
            fragment.push(
                Node::elem("text")
                    .attr_num("x", x)
                    .attr_num("y", y + 52.0)
                    .attr("font-family", FONT_TEXT)
                    .attr("font-size", "10")
                    .attr("fill", theme.muted_text)
                    .attr("letter-spacing", "0.5")
                    .text(label.to_uppercase()),
            );
            if let Some(percent) = progress {
                let bar_width = width - 24.0;
                let filled = (bar_width * (percent / 100.0)).clamp(0.0, bar_width);
                fragment.push(
                    Node::elem("rect")
                        .attr_num("x", x)
                        .attr_num("y", y + 58.0)
                        .attr_num("width", bar_width)
                        .attr_num("height", 4.0)
                        .attr_num("rx", 2.0)
                        .attr("fill", theme.border)
                        .attr("opacity", "0.6"),
                );
                fragment.push(
                    Node::elem("rect")
                        .attr_num("x", x)
                        .attr_num("y", y + 58.0)
                        .attr_num("width", filled)
                        .attr_num("height", 4.0)
                        .attr_num("rx", 2.0)
                        .attr("fill", "url(#accentGradient)"),
                );
            }
        }
        StatEntry::Breakdown {
            label,
            easy,
            medium,
            hard,
        } => {
            fragment.push(
                Node::elem("text")
                    .attr_num("x", x)
                    .attr_num("y", y)
                    .attr("font-family", FONT_TEXT)
                    .attr("font-size", "10")
                    .attr("fill", theme.muted_text)
                    .attr("letter-spacing", "0.5")
                    .text(label.to_uppercase()),
            );

            let rows = [
                ("Easy", easy, theme.success),
                ("Medium", medium, theme.warning),
                ("Hard", hard, theme.error),
            ];
            for (i, (name, value, color)) in rows.iter().enumerate() {
                let row_y = y + 16.0 + i as f64 * 17.0;
                fragment.push(
                    Node::elem("circle")
                        .attr_num("cx", x + 4.0)
                        .attr_num("cy", row_y - 3.0)
                        .attr_num("r", 3.0)
                        .attr("fill", *color),
                );
                fragment.push(
                    Node::elem("text")
                        .attr_num("x", x + 12.0)
                        .attr_num("y", row_y)
                        .attr("font-family", FONT_TEXT)
                        .attr("font-size", "11")
                        .attr("fill", theme.secondary_text)
                        .text(*name),
                );
                fragment.push(
                    Node::elem("text")
                        .attr_num("x", x + width - 28.0)
                        .attr_num("y", row_y)
                        .attr("font-family", FONT_DISPLAY)
                        .attr("font-size", "11")
                        .attr("font-weight", "600")
                        .attr("fill", theme.primary_text)
                        .attr("text-anchor", "end")
                        .text((*value).clone()),
                );
            }
        }
    }

    fragment
}

/// A complete stat card: frame plus entries packed into equal columns.
pub fn render_card_with_stats(spec: &CardSpec, theme: &Theme) -> Fragment {
    let mut fragment = render_card_frame(
        spec.x,
        spec.y,
        spec.width,
        spec.height,
        &spec.title,
        theme,
    );

    if spec.entries.is_empty() {
        return fragment;
    }

    let inner_x = spec.x + 20.0;
    let inner_y = spec.y + 60.0;
    let column_width = (spec.width - 40.0) / spec.entries.len() as f64;

    for (i, entry) in spec.entries.iter().enumerate() {
        fragment.merge(render_stat_entry(
            inner_x + i as f64 * column_width,
            inner_y,
            column_width,
            entry,
            theme,
        ));
    }

    fragment
}

/// Header parameters. `y` is the title baseline.
pub struct HeaderSpec<'a> {
    pub y: f64,
    pub width: f64,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub avatar_data_uri: Option<&'a str>,
    pub alignment: Alignment,
}

/// Horizontal footprint the avatar adds in front of the title.
fn avatar_footprint(present: bool) -> f64 {
    if present {
        AVATAR_SIZE + AVATAR_GAP
    } else {
        0.0
    }
}

/// Left edge of the centered title block. The centered width includes the
/// avatar footprint whenever an avatar is present.
pub(crate) fn centered_block_start(width: f64, title: &str, has_avatar: bool) -> f64 {
    let title_width = title.chars().count() as f64 * TITLE_CHAR_WIDTH;
    (width - title_width - avatar_footprint(has_avatar)) / 2.0
}

/// Dashboard header: title (optionally with subtitle and circular avatar)
/// and the branding label, positioned by the alignment mode. Start and end
/// modes pin the title block to one padding edge and the branding label to
/// the opposite one; center mode centers the title block and keeps the
/// branding at the right edge.
pub fn render_header(spec: &HeaderSpec<'_>, theme: &Theme) -> Fragment {
    let mut fragment = Fragment::new();
    let has_avatar = spec.avatar_data_uri.is_some();
    let title_width = spec.title.chars().count() as f64 * TITLE_CHAR_WIDTH;

    // Resolve the title block's left edge and the branding label's corner.
    let (block_start, branding_x, branding_anchor) = match spec.alignment {
        Alignment::Start => (PADDING, spec.width - PADDING, "end"),
        Alignment::End => (
            spec.width - PADDING - title_width - avatar_footprint(has_avatar),
            PADDING,
            "start",
        ),
        Alignment::Center => (
            centered_block_start(spec.width, spec.title, has_avatar),
            spec.width - PADDING,
            "end",
        ),
    };

    if let Some(data_uri) = spec.avatar_data_uri {
        let cx = block_start + AVATAR_SIZE / 2.0;
        let cy = spec.y - 8.0;
        fragment.push_def(
            Node::elem("clipPath").attr("id", "avatarClip").child(
                Node::elem("circle")
                    .attr_num("cx", cx)
                    .attr_num("cy", cy)
                    .attr_num("r", AVATAR_SIZE / 2.0),
            ),
        );
        fragment.push(
            Node::elem("image")
                .attr_num("x", block_start)
                .attr_num("y", cy - AVATAR_SIZE / 2.0)
                .attr_num("width", AVATAR_SIZE)
                .attr_num("height", AVATAR_SIZE)
                .attr("href", data_uri)
                .attr("clip-path", "url(#avatarClip)"),
        );
        fragment.push(
            Node::elem("circle")
                .attr_num("cx", cx)
                .attr_num("cy", cy)
                .attr_num("r", AVATAR_SIZE / 2.0)
                .attr("fill", "none")
                .attr("stroke", theme.accent)
                .attr("stroke-width", "1.5")
                .attr("opacity", "0.7"),
        );
    }

    let title_x = block_start + avatar_footprint(has_avatar);
    fragment.push(
        Node::elem("text")
            .attr_num("x", title_x)
            .attr_num("y", spec.y)
            .attr("font-family", FONT_DISPLAY)
            .attr("font-size", "24")
            .attr("font-weight", "700")
            .attr("fill", theme.primary_text)
            .text(spec.title),
    );

    if let Some(subtitle) = spec.subtitle {
        fragment.push(
            Node::elem("text")
                .attr_num("x", title_x)
                .attr_num("y", spec.y + 18.0)
                .attr("font-family", FONT_TEXT)
                .attr("font-size", "12")
                .attr("fill", theme.secondary_text)
                .text(subtitle),
        );
    }

    fragment.push(
        Node::elem("text")
            .attr_num("x", branding_x)
            .attr_num("y", spec.y)
            .attr("font-family", FONT_DISPLAY)
            .attr("font-size", "12")
            .attr("font-weight", "600")
            .attr("fill", theme.muted_text)
            .attr("letter-spacing", "1")
            .attr("text-anchor", branding_anchor)
            .text("GITPULSE"),
    );

    fragment
}
