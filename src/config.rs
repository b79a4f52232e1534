use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use ratatui::style::Color;

use crate::formatting::BoxChars;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub use_unicode: bool,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color_optional")]
    pub unfocused_selection_fg: Option<Color>,
    #[serde(deserialize_with = "deserialize_color")]
    pub disabled_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            use_unicode: true,
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            unfocused_selection_fg: None,
            disabled_fg: Color::DarkGray,
        }
    }
}

impl ThemeConfig {
    /// Get the unfocused selection color, calculating 50% darker if not explicitly set
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg.unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }
}

/// Resolved rendering settings handed to the view
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub selection_fg: Color,
    pub unfocused_selection_fg: Color,
    pub disabled_fg: Color,
    pub box_chars: BoxChars,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Config::default().display()
    }
}

impl Config {
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            selection_fg: self.theme.selection_fg,
            unfocused_selection_fg: self.theme.unfocused_selection_fg(),
            disabled_fg: self.theme.disabled_fg,
            box_chars: BoxChars::from_use_unicode(self.use_unicode),
        }
    }
}

/// Darken a color by a given factor (0.0 = black, 1.0 = original)
fn darken_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let r = (r as f32 * factor) as u8;
            let g = (g as f32 * factor) as u8;
            let b = (b as f32 * factor) as u8;
            Color::Rgb(r, g, b)
        }
        // Named colors have no fixed RGB value
        other => other,
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    s.map(|color_str| {
        parse_color(&color_str)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))
    })
    .transpose()
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "darkgray", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    if let Some(named) = named_color(&s) {
        return Some(named);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let parts: Vec<&str> = s.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        return Some(Color::Rgb(
            r.trim().parse().ok()?,
            g.trim().parse().ok()?,
            b.trim().parse().ok()?,
        ));
    }

    None
}

fn named_color(s: &str) -> Option<Color> {
    let color = match s {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "orange" => Color::Rgb(255, 165, 0),
        _ => return None,
    };
    Some(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => Some(Color::Rgb(
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        _ => None,
    }
}

fn channel(digits: &str) -> Option<u8> {
    u8::from_str_radix(digits, 16).ok()
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Read the config file, falling back to defaults when missing or invalid
pub fn read() -> Config {
    let Some(config_path) = get_config_path() else {
        return Config::default();
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            return Config::default();
        }
    };

    parse(&content)
}

fn parse(content: &str) -> Config {
    toml::from_str(content).unwrap_or_else(|e| {
        tracing::warn!("Invalid config, using defaults: {}", e);
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("darkgray"), Some(Color::DarkGray));
        assert_eq!(parse_color("grey"), Some(Color::Gray));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
    }

    #[test]
    fn test_parse_color_case_insensitive() {
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color(" Cyan "), Some(Color::Cyan));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#12345"), None);
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255,165,0"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("1,2"), None);
    }

    #[test]
    fn test_unfocused_selection_defaults_to_darker() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.unfocused_selection_fg(), Color::Rgb(127, 82, 0));
    }

    #[test]
    fn test_config_from_toml() {
        let config = parse(
            r##"
log_level = "debug"
use_unicode = false

[theme]
selection_fg = "#00FFFF"
disabled_fg = "128,128,128"
        "##,
        );
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, "/dev/null");
        assert!(!config.use_unicode);
        assert_eq!(config.theme.selection_fg, Color::Rgb(0, 255, 255));
        assert_eq!(config.theme.disabled_fg, Color::Rgb(128, 128, 128));
        assert_eq!(config.theme.unfocused_selection_fg, None);
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let config = parse("[theme]\nselection_fg = \"not-a-color\"\n");
        assert_eq!(config.theme.selection_fg, Color::Rgb(255, 165, 0));
        assert!(config.use_unicode);
    }

    #[test]
    fn test_display_config_follows_unicode_flag() {
        let config = Config {
            use_unicode: false,
            ..Default::default()
        };
        assert_eq!(config.display().box_chars, BoxChars::ascii());
        assert_eq!(Config::default().display().box_chars, BoxChars::unicode());
    }
}
