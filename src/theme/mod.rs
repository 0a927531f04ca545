//! Theme support for confdiff.

use ratatui::style::Color;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// A complete theme definition.
///
/// All fields are public for direct access. Field names are self-documenting
/// (e.g., `bg_dark` = dark background, `text_muted` = muted text color).
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Theme {
    /// Name the theme was loaded under.
    pub name: String,

    // Base colors
    pub bg_dark: Color,
    pub bg_elevated: Color,
    pub bg_selected: Color,

    // Borders
    pub border_dim: Color,
    pub border_active: Color,

    // Text
    pub text_muted: Color,
    pub text_dim: Color,
    pub text_normal: Color,
    pub text_bright: Color,

    // Accent (current change outline)
    pub accent: Color,

    // Diff
    pub diff_delete_fg: Color,
    pub diff_delete_bg: Color,
    pub diff_insert_fg: Color,
    pub diff_insert_bg: Color,

    // Status
    pub success: Color,
    pub error: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin_default()
    }
}

/// JSON theme file format.
#[derive(Debug, Deserialize)]
#[allow(missing_docs)]
pub struct ThemeJson {
    #[serde(default)]
    pub defs: HashMap<String, String>,
    pub theme: HashMap<String, String>,
}

impl Theme {
    /// Load a theme by name. Checks user themes first, then builtin.
    pub fn load(name: &str) -> Self {
        if let Some(theme) = load_user_theme(name) {
            return theme;
        }

        match name {
            "everforest" => Self::everforest(),
            _ => Self::builtin_default(),
        }
    }

    /// List available theme names.
    pub fn list() -> Vec<String> {
        let mut themes = vec!["default".to_string(), "everforest".to_string()];

        if let Ok(entries) = std::fs::read_dir(user_themes_dir()) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|e| e == "json") {
                    if let Some(name) = path.file_stem() {
                        let name = name.to_string_lossy().to_string();
                        if !themes.contains(&name) {
                            themes.push(name);
                        }
                    }
                }
            }
        }

        themes.sort();
        themes
    }

    /// Default dark theme.
    pub fn builtin_default() -> Self {
        Self {
            name: "default".to_string(),

            bg_dark: Color::Rgb(18, 18, 22),
            bg_elevated: Color::Rgb(36, 36, 44),
            bg_selected: Color::Rgb(45, 45, 55),

            border_dim: Color::Rgb(50, 50, 60),
            border_active: Color::Rgb(80, 200, 200),

            text_muted: Color::Rgb(80, 80, 92),
            text_dim: Color::Rgb(110, 110, 125),
            text_normal: Color::Rgb(175, 175, 185),
            text_bright: Color::Rgb(230, 230, 235),

            accent: Color::Rgb(80, 200, 200),

            diff_delete_fg: Color::Rgb(230, 120, 120),
            diff_delete_bg: Color::Rgb(45, 25, 30),
            diff_insert_fg: Color::Rgb(120, 210, 140),
            diff_insert_bg: Color::Rgb(25, 45, 32),

            success: Color::Rgb(85, 185, 105),
            error: Color::Rgb(215, 85, 85),
            warning: Color::Rgb(215, 175, 80),
        }
    }

    /// Everforest light, the palette of the config console's publish dialog.
    pub fn everforest() -> Self {
        Self {
            name: "everforest".to_string(),

            bg_dark: Color::Rgb(253, 246, 227),
            bg_elevated: Color::Rgb(244, 240, 217),
            bg_selected: Color::Rgb(247, 243, 232),

            border_dim: Color::Rgb(230, 220, 198),
            border_active: Color::Rgb(141, 161, 1),

            text_muted: Color::Rgb(112, 128, 137),
            text_dim: Color::Rgb(147, 159, 145),
            text_normal: Color::Rgb(92, 106, 114),
            text_bright: Color::Rgb(52, 62, 68),

            accent: Color::Rgb(141, 161, 1),

            diff_delete_fg: Color::Rgb(248, 85, 82),
            diff_delete_bg: Color::Rgb(247, 232, 232),
            diff_insert_fg: Color::Rgb(53, 167, 124),
            diff_insert_bg: Color::Rgb(232, 242, 232),

            success: Color::Rgb(53, 167, 124),
            error: Color::Rgb(248, 85, 82),
            warning: Color::Rgb(223, 160, 0),
        }
    }
}

fn user_themes_dir() -> PathBuf {
    crate::core::config_dir().join("themes")
}

/// Load a theme from user themes directory.
fn load_user_theme(name: &str) -> Option<Theme> {
    let path = user_themes_dir().join(format!("{}.json", name));
    if !path.exists() {
        return None;
    }

    let content = std::fs::read_to_string(&path).ok()?;
    let json: ThemeJson = serde_json::from_str(&content).ok()?;
    let mut theme = resolve_theme(&json);
    theme.name = name.to_string();
    Some(theme)
}

/// Parse a hex color string to Color.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.trim_start_matches('#');
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

/// Resolve a color value (hex or reference).
fn resolve_color(value: &str, defs: &HashMap<String, String>, fallback: Color) -> Color {
    if value.starts_with('#') {
        parse_hex(value).unwrap_or(fallback)
    } else if let Some(def) = defs.get(value) {
        parse_hex(def).unwrap_or(fallback)
    } else {
        fallback
    }
}

/// Resolve a theme JSON to a Theme struct. Missing keys keep the default.
fn resolve_theme(json: &ThemeJson) -> Theme {
    let mut theme = Theme::builtin_default();
    let defs = &json.defs;

    for (key, value) in &json.theme {
        let slot = match key.as_str() {
            "bgDark" => &mut theme.bg_dark,
            "bgElevated" => &mut theme.bg_elevated,
            "bgSelected" => &mut theme.bg_selected,
            "borderDim" => &mut theme.border_dim,
            "borderActive" => &mut theme.border_active,
            "textMuted" => &mut theme.text_muted,
            "textDim" => &mut theme.text_dim,
            "textNormal" => &mut theme.text_normal,
            "textBright" => &mut theme.text_bright,
            "accent" => &mut theme.accent,
            "diffDeleteFg" => &mut theme.diff_delete_fg,
            "diffDeleteBg" => &mut theme.diff_delete_bg,
            "diffInsertFg" => &mut theme.diff_insert_fg,
            "diffInsertBg" => &mut theme.diff_insert_bg,
            "success" => &mut theme.success,
            "error" => &mut theme.error,
            "warning" => &mut theme.warning,
            _ => continue,
        };
        *slot = resolve_color(value, defs, *slot);
    }

    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_colors() {
        assert_eq!(parse_hex("#35a77c"), Some(Color::Rgb(53, 167, 124)));
        assert_eq!(parse_hex("fdf6e3"), Some(Color::Rgb(253, 246, 227)));
        assert_eq!(parse_hex("#fff"), None);
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(Theme::load("no-such-theme-xyz"), Theme::builtin_default());
        assert_eq!(Theme::load("everforest").name, "everforest");
    }

    #[test]
    fn only_default_and_everforest_are_builtin() {
        assert_eq!(
            Theme::load("dracula").name == "dracula",
            user_themes_dir().join("dracula.json").exists()
        );
    }

    #[test]
    fn json_overrides_and_references() {
        let json: ThemeJson = serde_json::from_str(
            r##"{
                "defs": { "green": "#35a77c" },
                "theme": { "diffInsertFg": "green", "accent": "#8da101", "unknownKey": "#000000" }
            }"##,
        )
        .unwrap();
        let theme = resolve_theme(&json);
        assert_eq!(theme.diff_insert_fg, Color::Rgb(53, 167, 124));
        assert_eq!(theme.accent, Color::Rgb(141, 161, 1));
        assert_eq!(theme.bg_dark, Theme::builtin_default().bg_dark);
    }

    #[test]
    fn builtin_list_is_sorted() {
        let list = Theme::list();
        assert!(list.contains(&"default".to_string()));
        assert!(list.contains(&"everforest".to_string()));
        let mut sorted = list.clone();
        sorted.sort();
        assert_eq!(list, sorted);
    }
}
