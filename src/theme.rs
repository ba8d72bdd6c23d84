//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    /// Lowercase name used when persisting the preference.
    pub fn storage_name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
///
/// Each field corresponds to a specific visual element in the TUI.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Hero (featured story) --
    pub hero_title: Style,
    pub hero_tag: Style,
    pub hero_meta: Style,

    // -- Feed cards --
    pub card_title: Style,
    pub card_category: Style,
    pub card_excerpt: Style,
    pub card_meta: Style,
    pub card_selected: Style,

    // -- Category filter bar --
    pub filter_active: Style,
    pub filter_normal: Style,

    // -- Trending panel --
    pub trending_rank: Style,
    pub trending_title: Style,
    pub trending_views: Style,
    pub trending_updating: Style,

    // -- Article view --
    pub article_heading: Style,
    pub article_body: Style,
    pub article_meta: Style,
    pub not_found: Style,

    // -- Comments --
    pub comment_author: Style,
    pub comment_timestamp: Style,
    pub comment_text: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    /// Dark palette — the default.
    fn dark() -> Self {
        Self {
            // Hero
            hero_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            hero_tag: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            hero_meta: Style::default().fg(Color::DarkGray),

            // Feed cards
            card_title: Style::default().add_modifier(Modifier::BOLD),
            card_category: Style::default().fg(Color::Cyan),
            card_excerpt: Style::default().fg(Color::Gray),
            card_meta: Style::default().fg(Color::DarkGray),
            card_selected: Style::default().bg(Color::DarkGray).fg(Color::White),

            // Filter bar
            filter_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            filter_normal: Style::default().fg(Color::Gray),

            // Trending
            trending_rank: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            trending_title: Style::default(),
            trending_views: Style::default().fg(Color::DarkGray),
            trending_updating: Style::default().add_modifier(Modifier::DIM),

            // Article view
            article_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            article_body: Style::default(),
            article_meta: Style::default().fg(Color::DarkGray),
            not_found: Style::default().fg(Color::Red),

            // Comments
            comment_author: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            comment_timestamp: Style::default().fg(Color::DarkGray),
            comment_text: Style::default(),

            // Chrome
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            // Hero
            hero_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            hero_tag: Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            hero_meta: Style::default().fg(Color::DarkGray),

            // Feed cards
            card_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_category: Style::default().fg(Color::Blue),
            card_excerpt: Style::default().fg(Color::DarkGray),
            card_meta: Style::default().fg(Color::DarkGray),
            card_selected: Style::default().bg(Color::Blue).fg(Color::White),

            // Filter bar
            filter_active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            filter_normal: Style::default().fg(Color::DarkGray),

            // Trending
            trending_rank: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            trending_title: Style::default().fg(Color::Black),
            trending_views: Style::default().fg(Color::DarkGray),
            trending_updating: Style::default().add_modifier(Modifier::DIM),

            // Article view
            article_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            article_body: Style::default().fg(Color::Black),
            article_meta: Style::default().fg(Color::DarkGray),
            not_found: Style::default().fg(Color::Red),

            // Comments
            comment_author: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            comment_timestamp: Style::default().fg(Color::DarkGray),
            comment_text: Style::default().fg(Color::Black),

            // Chrome
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup for config-driven overrides
// ============================================================================

/// String-keyed style lookup for dynamic/config-driven overrides.
///
/// Built from a `ColorPalette`, this allows resolving role names (e.g.
/// `"card_title"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 24] = [
    "hero_title",
    "hero_tag",
    "hero_meta",
    "card_title",
    "card_category",
    "card_excerpt",
    "card_meta",
    "card_selected",
    "filter_active",
    "filter_normal",
    "trending_rank",
    "trending_title",
    "trending_views",
    "trending_updating",
    "article_heading",
    "article_body",
    "article_meta",
    "not_found",
    "comment_author",
    "comment_timestamp",
    "comment_text",
    "status_bar",
    "panel_border",
    "panel_border_focused",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 24] = [
            p.hero_title,
            p.hero_tag,
            p.hero_meta,
            p.card_title,
            p.card_category,
            p.card_excerpt,
            p.card_meta,
            p.card_selected,
            p.filter_active,
            p.filter_normal,
            p.trending_rank,
            p.trending_title,
            p.trending_views,
            p.trending_updating,
            p.article_heading,
            p.article_body,
            p.article_meta,
            p.not_found,
            p.comment_author,
            p.comment_timestamp,
            p.comment_text,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_card_selected_inverts() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.card_selected,
            Style::default().bg(Color::DarkGray).fg(Color::White)
        );
    }

    #[test]
    fn dark_palette_focus_border_is_cyan() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.panel_border_focused,
            Style::default().fg(Color::Cyan)
        );
    }

    #[test]
    fn dark_palette_status_bar() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.status_bar,
            Style::default().bg(Color::DarkGray).fg(Color::White)
        );
    }

    #[test]
    fn trending_updating_style_dims() {
        for variant in [ThemeVariant::Dark, ThemeVariant::Light] {
            let palette = variant.palette();
            assert!(palette
                .trending_updating
                .add_modifier
                .contains(Modifier::DIM));
        }
    }

    #[test]
    fn light_palette_differs_from_dark() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        assert_ne!(dark.card_selected, light.card_selected);
        assert_ne!(dark.filter_active, light.filter_active);
    }

    #[test]
    fn variant_from_str_name() {
        assert_eq!(
            ThemeVariant::from_str_name("dark"),
            Some(ThemeVariant::Dark)
        );
        assert_eq!(
            ThemeVariant::from_str_name("Light"),
            Some(ThemeVariant::Light)
        );
        assert_eq!(
            ThemeVariant::from_str_name("DARK"),
            Some(ThemeVariant::Dark)
        );
        assert_eq!(ThemeVariant::from_str_name("neon"), None);
    }

    #[test]
    fn variant_cycle_alternates() {
        assert_eq!(ThemeVariant::Dark.next(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.next(), ThemeVariant::Dark);
    }

    #[test]
    fn storage_name_roundtrips() {
        for variant in [ThemeVariant::Dark, ThemeVariant::Light] {
            assert_eq!(
                ThemeVariant::from_str_name(variant.storage_name()),
                Some(variant)
            );
        }
    }

    #[test]
    fn style_map_resolves_known_roles() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);

        assert_eq!(sm.resolve("card_selected"), palette.card_selected);
        assert_eq!(sm.resolve("article_heading"), palette.article_heading);
        assert_eq!(sm.resolve("status_bar"), palette.status_bar);
    }

    #[test]
    fn style_map_returns_default_for_unknown() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);
        assert_eq!(sm.resolve("nonexistent_role"), Style::default());
    }

    #[test]
    fn style_map_has_all_roles() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);
        for name in ROLE_NAMES {
            assert_ne!(
                sm.map.get(name),
                None,
                "Role '{}' missing from StyleMap",
                name
            );
        }
    }

    #[test]
    fn role_names_count_matches_palette_fields() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);
        assert_eq!(sm.map.len(), ROLE_NAMES.len());
    }
}
