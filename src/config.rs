use crate::formatting::BoxChars;
use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Seconds between automatic background refreshes.
    pub refresh_interval: u32,
    /// Base URL of the listing backend.
    pub api_base_url: String,
    /// Websocket URL of the live-update feed.
    pub feed_url: String,
    /// Verified email of the current user, used to mark joined matches.
    /// Empty means "not logged in": nothing is marked joined.
    pub player_email: String,
    pub time_format: String,
    pub use_unicode: bool,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub upcoming_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub live_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub passed_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            refresh_interval: 60,
            api_base_url: "http://localhost:5000".to_string(),
            feed_url: "ws://localhost:5000".to_string(),
            player_email: String::new(),
            time_format: "%H:%M:%S".to_string(),
            use_unicode: true,
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: Color::Cyan,
            upcoming_fg: Color::Cyan,
            live_fg: Color::Red,
            passed_fg: Color::DarkGray,
        }
    }
}

impl Config {
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            use_unicode: self.use_unicode,
            box_chars: BoxChars::from_use_unicode(self.use_unicode),
        }
    }

    /// The configured user email, trimmed; `None` when not set.
    pub fn user_email(&self) -> Option<&str> {
        let trimmed = self.player_email.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// Resolved display settings shared by CLI output and fixtures.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    pub box_chars: BoxChars,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            box_chars: BoxChars::unicode(),
        }
    }
}

/// Deserialize a color from a string (named color, hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "cyan", "darkgray", ...
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("DarkGray"), Some(Color::DarkGray));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
    }

    #[test]
    fn parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#GGGGGG"), None);
    }

    #[test]
    fn parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("256,0,0"), None);
    }

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.refresh_interval, 60);
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.user_email(), None);
        assert_eq!(config.theme.live_fg, Color::Red);
    }

    #[test]
    fn config_from_toml() {
        let toml_str = r##"
refresh_interval = 30
api_base_url = "https://backend.example.com"
player_email = "  me@example.com "

[theme]
live_fg = "#00FF00"
        "##;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.refresh_interval, 30);
        assert_eq!(config.api_base_url, "https://backend.example.com");
        assert_eq!(config.user_email(), Some("me@example.com"));
        assert_eq!(config.theme.live_fg, Color::Rgb(0, 255, 0));
        // Unset fields keep their defaults.
        assert_eq!(config.theme.passed_fg, Color::DarkGray);
        assert_eq!(config.log_level, "info");
    }
}
