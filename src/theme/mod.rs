//! Theme palettes.
//!
//! A theme is a static mapping of semantic color roles to values, selected
//! by name at request time and shared read-only across requests. The active
//! theme is always passed explicitly down the rendering call chain; nothing
//! here is mutable after load.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Semantic color roles used by the renderers, plus a fixed-size ordered
/// palette for multi-series charts.
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub card_background: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub primary_text: &'static str,
    pub secondary_text: &'static str,
    pub muted_text: &'static str,
    pub accent: &'static str,
    pub accent_secondary: &'static str,
    pub accent_tertiary: &'static str,
    pub gradient_start: &'static str,
    pub gradient_mid: &'static str,
    pub gradient_end: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub glow: &'static str,
    pub glow_secondary: &'static str,
    pub chart_colors: [&'static str; 6],
}

/// GitHub-dark palette, the default.
pub const DARK: Theme = Theme {
    name: "dark",
    background: "#0d1117",
    card_background: "#161b22",
    border: "#30363d",
    border_light: "#484f58",
    primary_text: "#e6edf3",
    secondary_text: "#8b949e",
    muted_text: "#6e7681",
    accent: "#58a6ff",
    accent_secondary: "#bc8cff",
    accent_tertiary: "#3fb950",
    gradient_start: "#58a6ff",
    gradient_mid: "#bc8cff",
    gradient_end: "#3fb950",
    success: "#3fb950",
    warning: "#d29922",
    error: "#f85149",
    glow: "#58a6ff",
    glow_secondary: "#bc8cff",
    chart_colors: [
        "#58a6ff", "#bc8cff", "#3fb950", "#d29922", "#f85149", "#39c5cf",
    ],
};

/// Catppuccin Mocha.
pub const CATPPUCCIN: Theme = Theme {
    name: "catppuccin",
    background: "#1e1e2e",
    card_background: "#11111b",
    border: "#313244",
    border_light: "#45475a",
    primary_text: "#cdd6f4",
    secondary_text: "#bac2de",
    muted_text: "#a6adc8",
    accent: "#f38ba8",
    accent_secondary: "#89b4fa",
    accent_tertiary: "#a6e3a1",
    gradient_start: "#f38ba8",
    gradient_mid: "#89b4fa",
    gradient_end: "#a6e3a1",
    success: "#a6e3a1",
    warning: "#f9e2af",
    error: "#eba0ac",
    glow: "#f38ba8",
    glow_secondary: "#89b4fa",
    chart_colors: [
        "#f38ba8", "#89b4fa", "#a6e3a1", "#f9e2af", "#eba0ac", "#94e2d5",
    ],
};

/// Nord — arctic, north-bluish palette.
pub const NORD: Theme = Theme {
    name: "nord",
    background: "#2e3440",
    card_background: "#3b4252",
    border: "#4c566a",
    border_light: "#d8dee9",
    primary_text: "#eceff4",
    secondary_text: "#d8dee9",
    muted_text: "#4c566a",
    accent: "#88c0d0",
    accent_secondary: "#81a1c1",
    accent_tertiary: "#a3be8c",
    gradient_start: "#5e81ac",
    gradient_mid: "#81a1c1",
    gradient_end: "#88c0d0",
    success: "#a3be8c",
    warning: "#ebcb8b",
    error: "#bf616a",
    glow: "#88c0d0",
    glow_secondary: "#5e81ac",
    chart_colors: [
        "#88c0d0", "#81a1c1", "#a3be8c", "#ebcb8b", "#bf616a", "#b48ead",
    ],
};

/// Solarized dark.
pub const SOLARIZED: Theme = Theme {
    name: "solarized",
    background: "#002b36",
    card_background: "#073642",
    border: "#586e75",
    border_light: "#657b83",
    primary_text: "#fdf6e3",
    secondary_text: "#93a1a1",
    muted_text: "#839496",
    accent: "#2aa198",
    accent_secondary: "#268bd2",
    accent_tertiary: "#859900",
    gradient_start: "#2aa198",
    gradient_mid: "#268bd2",
    gradient_end: "#859900",
    success: "#859900",
    warning: "#b58900",
    error: "#dc322f",
    glow: "#2aa198",
    glow_secondary: "#268bd2",
    chart_colors: [
        "#2aa198", "#268bd2", "#859900", "#b58900", "#dc322f", "#d33682",
    ],
};

/// Rosé Pine.
pub const ROSE_PINE: Theme = Theme {
    name: "rose-pine",
    background: "#191724",
    card_background: "#1f1d2e",
    border: "#6e6a86",
    border_light: "#908caa",
    primary_text: "#e0def4",
    secondary_text: "#908caa",
    muted_text: "#6e6a86",
    accent: "#eb6f92",
    accent_secondary: "#9ccfd8",
    accent_tertiary: "#31748f",
    gradient_start: "#eb6f92",
    gradient_mid: "#9ccfd8",
    gradient_end: "#31748f",
    success: "#31748f",
    warning: "#f6c177",
    error: "#ebbcba",
    glow: "#eb6f92",
    glow_secondary: "#9ccfd8",
    chart_colors: [
        "#eb6f92", "#9ccfd8", "#31748f", "#f6c177", "#ebbcba", "#c4a7e7",
    ],
};

static REGISTRY: Lazy<HashMap<&'static str, &'static Theme>> = Lazy::new(|| {
    let mut themes: HashMap<&'static str, &'static Theme> = HashMap::new();
    for theme in [&DARK, &CATPPUCCIN, &NORD, &SOLARIZED, &ROSE_PINE] {
        themes.insert(theme.name, theme);
    }
    themes
});

/// Look up a theme by name, falling back to the default for unrecognized
/// names.
pub fn named(name: &str) -> &'static Theme {
    REGISTRY.get(name).copied().unwrap_or(&DARK)
}

/// Names of all registered themes.
pub fn available() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.keys().copied().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(named("nord").name, "nord");
        assert_eq!(named("rose-pine").name, "rose-pine");
    }

    #[test]
    fn unknown_name_falls_back_to_dark() {
        assert_eq!(named("solarized-light").name, "dark");
        assert_eq!(named("").name, "dark");
    }

    #[test]
    fn all_palettes_registered() {
        assert_eq!(
            available(),
            vec!["catppuccin", "dark", "nord", "rose-pine", "solarized"]
        );
    }
}
