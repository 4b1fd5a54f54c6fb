//! Document assembly: one shared `<defs>` block plus every fragment's own
//! definitions, wrapped in the root `<svg>` element. Serialization happens
//! exactly once, here.

use crate::render::node::{Fragment, Node};
use crate::theme::Theme;
use crate::utils::fmt_num;

/// Definitions referenced by id from multiple fragments: the background
/// gradient wash, the accent gradient and the two glow filters.
fn shared_defs(theme: &Theme) -> Vec<Node> {
    let stop = |offset: &'static str, color: &'static str, opacity: Option<&'static str>| {
        let node = Node::elem("stop")
            .attr("offset", offset)
            .attr("stop-color", color);
        match opacity {
            Some(value) => node.attr("stop-opacity", value),
            None => node,
        }
    };

    vec![
        Node::elem("linearGradient")
            .attr("id", "mainGradient")
            .attr("x1", "0%")
            .attr("y1", "0%")
            .attr("x2", "100%")
            .attr("y2", "100%")
            .child(stop("0%", theme.gradient_start, Some("0.10")))
            .child(stop("50%", theme.gradient_mid, Some("0.04")))
            .child(stop("100%", theme.gradient_end, Some("0.10"))),
        Node::elem("linearGradient")
            .attr("id", "accentGradient")
            .attr("x1", "0%")
            .attr("y1", "0%")
            .attr("x2", "100%")
            .attr("y2", "0%")
            .child(stop("0%", theme.gradient_start, None))
            .child(stop("50%", theme.gradient_mid, None))
            .child(stop("100%", theme.gradient_end, None)),
        Node::elem("filter")
            .attr("id", "cardGlow")
            .attr("x", "-50%")
            .attr("y", "-50%")
            .attr("width", "200%")
            .attr("height", "200%")
            .child(Node::elem("feGaussianBlur").attr("stdDeviation", "8")),
        Node::elem("filter")
            .attr("id", "softGlow")
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
    ]
}

/// Wrap ordered fragments into the final document. Height is computed by
/// the composer from the last row's bottom edge plus padding.
pub fn assemble(fragments: Vec<Fragment>, width: f64, height: f64, theme: &Theme) -> String {
    let mut defs = shared_defs(theme);
    let mut nodes: Vec<Node> = Vec::new();

    for fragment in fragments {
        defs.extend(fragment.defs);
        nodes.extend(fragment.nodes);
    }

    let root = Node::elem("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", fmt_num(width))
        .attr("height", fmt_num(height))
        .attr(
            "viewBox",
            format!("0 0 {} {}", fmt_num(width), fmt_num(height)),
        )
        .attr("role", "img")
        .child(Node::elem("defs").children(defs))
        .children(nodes);

    root.render()
}
