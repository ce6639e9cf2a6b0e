use serde::{Deserialize, Serialize};

/// Terminal theme the pickers are drawn with
///
/// Chip colors come from the static color tables in `palette`; the theme only
/// covers the chrome around them (borders, titles, status bar).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub title: Color,
    pub subtitle: Color,
    pub selected_bg: Color,
    pub muted: Color,
    pub accent: Color,
}

/// RGB color representation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Build from 0.0..=1.0 channel values, which is how most of the
    /// category palette was authored
    pub fn unit(r: f32, g: f32, b: f32) -> Self {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::new(channel(r), channel(g), channel(b))
    }
}

impl Theme {
    pub fn default_dark() -> Self {
        Self {
            name: "Default Dark".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x1e1e2e),
                foreground: Color::rgb(0xcdd6f4),
                border: Color::rgb(0x45475a),
                border_focused: Color::rgb(0x89b4fa),
                success: Color::rgb(0x01991d),
                warning: Color::rgb(0xf9e2af),
                error: Color::rgb(0xd10000),
                title: Color::rgb(0xcba6f7),
                subtitle: Color::rgb(0xa6adc8),
                selected_bg: Color::rgb(0x313244),
                muted: Color::rgb(0x6c7086),
                accent: Color::rgb(0xf9e2af),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0xffffff),
                foreground: Color::rgb(0x000000),
                border: Color::rgb(0xbcc0cc),
                border_focused: Color::rgb(0x1e66f5),
                success: Color::rgb(0x01991d),
                warning: Color::rgb(0xdf8e1d),
                error: Color::rgb(0xd10000),
                title: Color::rgb(0x000000),
                subtitle: Color::rgb(0x6c6f85),
                selected_bg: Color::rgb(0xdce0e8),
                muted: Color::rgb(0x9ca0b0),
                accent: Color::rgb(0xdf8e1d),
            },
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "Nord".to_string(),
            colors: ThemeColors {
                background: Color::rgb(0x2e3440),
                foreground: Color::rgb(0xeceff4),
                border: Color::rgb(0x4c566a),
                border_focused: Color::rgb(0x88c0d0),
                success: Color::rgb(0xa3be8c),
                warning: Color::rgb(0xebcb8b),
                error: Color::rgb(0xbf616a),
                title: Color::rgb(0xb48ead),
                subtitle: Color::rgb(0xd8dee9),
                selected_bg: Color::rgb(0x3b4252),
                muted: Color::rgb(0x4c566a),
                accent: Color::rgb(0xebcb8b),
            },
        }
    }

    pub fn all_themes() -> Vec<Theme> {
        vec![Self::default_dark(), Self::light(), Self::nord()]
    }

    /// Get theme by name (case-insensitive)
    pub fn by_name(name: &str) -> Option<Theme> {
        Self::all_themes()
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Same as `by_name`, but a typo in the config file shouldn't stop the
    /// picker from starting
    pub fn by_name_or_default(name: &str) -> Theme {
        Self::by_name(name).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using the default", name);
            Self::default()
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_color_conversion() {
        assert_eq!(Color::unit(1.0, 0.0, 0.0), Color::new(255, 0, 0));
        assert_eq!(Color::unit(0.0, 0.62, 0.95), Color::new(0, 158, 242));
        assert_eq!(Color::unit(2.0, -1.0, 0.5), Color::new(255, 0, 128));
    }

    #[test]
    fn test_theme_lookup() {
        assert_eq!(Theme::by_name("nord").unwrap().name, "Nord");
        assert!(Theme::by_name("solarized").is_none());
        assert_eq!(Theme::by_name_or_default("solarized").name, "Default Dark");
    }
}
