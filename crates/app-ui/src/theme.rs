//! Design system and theme provider for Profile Card
//!
//! Two fixed themes are supported:
//! - Light: deep purple primary on a white background
//! - Dark: lavender primary on a near-black background
//!
//! A theme is a pure function of the dark-theme flag, see [`derive_palette`].
//! [`ThemeProvider`] watches the flag and re-derives only when it changes.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{derive_palette, ThemeName};
//!
//! let theme = derive_palette(true);
//! assert_eq!(theme.name, ThemeName::Dark);
//! let background = &theme.colors.background;
//! ```

use crate::navigation::Route;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Apply an alpha in `[0, 1]` to a hex color, producing `#RRGGBBAA`
///
/// Returns the input unchanged if it is not a valid hex color.
pub fn with_alpha(hex: &str, alpha: f32) -> Color {
    match parse_hex_color(hex) {
        Some((r, g, b)) => {
            let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("{}{:02X}", rgb_to_hex(r, g, b), a)
        }
        None => hex.to_string(),
    }
}

// =============================================================================
// Color Scheme
// =============================================================================

/// Semantic color roles shared by every screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Main accent color
    pub primary: Color,
    /// Content drawn on top of `primary`
    pub on_primary: Color,
    /// Tinted container for primary content
    pub primary_container: Color,
    /// Content drawn on top of `primary_container`
    pub on_primary_container: Color,
    /// Secondary accent color
    pub secondary: Color,
    /// Content drawn on top of `secondary`
    pub on_secondary: Color,
    /// Tinted container for secondary content
    pub secondary_container: Color,
    /// Content drawn on top of `secondary_container`
    pub on_secondary_container: Color,
    /// Tertiary accent color
    pub tertiary: Color,
    /// Content drawn on top of `tertiary`
    pub on_tertiary: Color,
    /// Tinted container for tertiary content
    pub tertiary_container: Color,
    /// Content drawn on top of `tertiary_container`
    pub on_tertiary_container: Color,
    /// Window background
    pub background: Color,
    /// Content drawn on the background
    pub on_background: Color,
    /// Card and bar surfaces
    pub surface: Color,
    /// Content drawn on surfaces
    pub on_surface: Color,
    /// Alternate surface for low-emphasis areas
    pub surface_variant: Color,
    /// Low-emphasis content on surfaces
    pub on_surface_variant: Color,
}

// =============================================================================
// Gradients
// =============================================================================

/// A gradient stop with position and color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position from 0.0 to 1.0
    pub position: f32,
    /// Color at this position
    pub color: Color,
}

/// A top-to-bottom gradient definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Gradient stops
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Evenly spaced translucent stops, one per color, at alphas 0.3, 0.5, 0.7
    pub fn translucent(colors: [&str; 3]) -> Self {
        let alphas = [0.3, 0.5, 0.7];
        let positions = [0.0, 0.5, 1.0];
        Self {
            stops: colors
                .iter()
                .zip(alphas)
                .zip(positions)
                .map(|((color, alpha), position)| GradientStop {
                    position,
                    color: with_alpha(color, alpha),
                })
                .collect(),
        }
    }
}

/// Decorative background per screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenBackgrounds {
    /// Profile screen background
    pub profile: Gradient,
    /// Gallery screen background
    pub gallery: Gradient,
    /// Settings screen background
    pub settings: Gradient,
}

impl ScreenBackgrounds {
    /// Build the backgrounds from the container colors of a scheme
    pub fn from_scheme(colors: &ColorScheme) -> Self {
        let primary = colors.primary_container.as_str();
        let secondary = colors.secondary_container.as_str();
        let tertiary = colors.tertiary_container.as_str();
        Self {
            profile: Gradient::translucent([primary, secondary, tertiary]),
            gallery: Gradient::translucent([secondary, tertiary, primary]),
            settings: Gradient::translucent([tertiary, primary, secondary]),
        }
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Map the dark-theme flag to a theme name
    pub fn from_dark(dark_theme: bool) -> Self {
        if dark_theme {
            ThemeName::Dark
        } else {
            ThemeName::Light
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Semantic theme colors
    pub colors: ColorScheme,
    /// Screen background gradients
    pub backgrounds: ScreenBackgrounds,
}

impl Theme {
    fn from_scheme(name: ThemeName, colors: ColorScheme) -> Self {
        let backgrounds = ScreenBackgrounds::from_scheme(&colors);
        Self {
            name,
            colors,
            backgrounds,
        }
    }

    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }

    /// Background gradient for a screen
    pub fn screen_background(&self, route: Route) -> &Gradient {
        match route {
            Route::Profile => &self.backgrounds.profile,
            Route::Gallery => &self.backgrounds.gallery,
            Route::Settings => &self.backgrounds.settings,
        }
    }
}

// =============================================================================
// Light Theme
// =============================================================================

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme::from_scheme(
        ThemeName::Light,
        ColorScheme {
            primary: "#673AB7".to_string(),
            on_primary: "#FFFFFF".to_string(),
            primary_container: "#D1C4E9".to_string(),
            on_primary_container: "#311B92".to_string(),
            secondary: "#00BCD4".to_string(),
            on_secondary: "#FFFFFF".to_string(),
            secondary_container: "#B2EBF2".to_string(),
            on_secondary_container: "#006064".to_string(),
            tertiary: "#FF5722".to_string(),
            on_tertiary: "#FFFFFF".to_string(),
            tertiary_container: "#FFCCBC".to_string(),
            on_tertiary_container: "#BF360C".to_string(),
            background: "#FFFFFF".to_string(),
            on_background: "#000000".to_string(),
            surface: "#FFFFFF".to_string(),
            on_surface: "#000000".to_string(),
            surface_variant: "#F5F5F5".to_string(),
            on_surface_variant: "#444444".to_string(),
        },
    )
}

// =============================================================================
// Dark Theme
// =============================================================================

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme::from_scheme(
        ThemeName::Dark,
        ColorScheme {
            primary: "#9575CD".to_string(),
            on_primary: "#FFFFFF".to_string(),
            primary_container: "#4527A0".to_string(),
            on_primary_container: "#FFFFFF".to_string(),
            secondary: "#80DEEA".to_string(),
            on_secondary: "#000000".to_string(),
            secondary_container: "#0097A7".to_string(),
            on_secondary_container: "#FFFFFF".to_string(),
            tertiary: "#FFAB91".to_string(),
            on_tertiary: "#000000".to_string(),
            tertiary_container: "#E64A19".to_string(),
            on_tertiary_container: "#FFFFFF".to_string(),
            background: "#121212".to_string(),
            on_background: "#FFFFFF".to_string(),
            surface: "#1E1E1E".to_string(),
            on_surface: "#FFFFFF".to_string(),
            surface_variant: "#2D2D2D".to_string(),
            on_surface_variant: "#CCCCCC".to_string(),
        },
    )
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// Derive the theme for the dark-theme flag
pub fn derive_palette(dark_theme: bool) -> Theme {
    get_theme(ThemeName::from_dark(dark_theme))
}

/// Keeps the current theme in sync with a watched dark-theme flag
///
/// The cached theme is rebuilt lazily, on the first read after the flag
/// changes. If the flag's owner is gone the last theme stays in effect.
#[derive(Debug)]
pub struct ThemeProvider {
    flag: watch::Receiver<bool>,
    theme: Theme,
    derivations: u64,
}

impl ThemeProvider {
    /// Subscribe to a dark-theme flag
    pub fn new(mut flag: watch::Receiver<bool>) -> Self {
        let dark = *flag.borrow_and_update();
        Self {
            flag,
            theme: derive_palette(dark),
            derivations: 1,
        }
    }

    /// Current theme, re-derived if the flag changed since the last call
    pub fn theme(&mut self) -> &Theme {
        if matches!(self.flag.has_changed(), Ok(true)) {
            let dark = *self.flag.borrow_and_update();
            if self.theme.is_dark() != dark {
                tracing::debug!(theme = %ThemeName::from_dark(dark), "re-deriving theme");
                self.theme = derive_palette(dark);
                self.derivations += 1;
            }
        }
        &self.theme
    }

    /// Number of times a theme has been derived, including the initial one
    pub fn derivations(&self) -> u64 {
        self.derivations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Color Utility Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#673AB7"), Some((103, 58, 183)));
        assert_eq!(parse_hex_color("121212"), Some((18, 18, 18)));
        assert_eq!(parse_hex_color("#FF"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#D1C4E9", 0.3), "#D1C4E94D");
        assert_eq!(with_alpha("#B2EBF2", 0.5), "#B2EBF280");
        assert_eq!(with_alpha("#FFCCBC", 0.7), "#FFCCBCB3");
        assert_eq!(with_alpha("#000000", 1.5), "#000000FF");
        assert_eq!(with_alpha("nope", 0.5), "nope");
    }

    // ==========================================================================
    // Theme Name Tests
    // ==========================================================================

    #[test]
    fn test_theme_name_from_dark() {
        assert_eq!(ThemeName::from_dark(true), ThemeName::Dark);
        assert_eq!(ThemeName::from_dark(false), ThemeName::Light);
    }

    #[test]
    fn test_theme_name_display() {
        assert_eq!(ThemeName::Light.to_string(), "Light");
        assert_eq!(ThemeName::Dark.to_string(), "Dark");
    }

    // ==========================================================================
    // Palette Tests
    // ==========================================================================

    #[test]
    fn test_light_palette() {
        let theme = light_theme();
        assert!(!theme.is_dark());
        assert_eq!(theme.colors.primary, "#673AB7");
        assert_eq!(theme.colors.background, "#FFFFFF");
        assert_eq!(theme.colors.on_surface_variant, "#444444");
    }

    #[test]
    fn test_dark_palette() {
        let theme = dark_theme();
        assert!(theme.is_dark());
        assert_eq!(theme.colors.primary, "#9575CD");
        assert_eq!(theme.colors.background, "#121212");
        assert_eq!(theme.colors.surface, "#1E1E1E");
    }

    #[test]
    fn test_derive_palette_is_pure() {
        assert_eq!(derive_palette(false), derive_palette(false));
        assert_eq!(derive_palette(true), dark_theme());
        assert_ne!(derive_palette(true), derive_palette(false));
    }

    #[test]
    fn test_screen_backgrounds() {
        let theme = light_theme();
        let profile = theme.screen_background(Route::Profile);
        let colors: Vec<&str> = profile.stops.iter().map(|s| s.color.as_str()).collect();
        assert_eq!(colors, vec!["#D1C4E94D", "#B2EBF280", "#FFCCBCB3"]);

        let gallery = theme.screen_background(Route::Gallery);
        assert_eq!(gallery.stops[0].color, "#B2EBF24D");
        let settings = theme.screen_background(Route::Settings);
        assert_eq!(settings.stops[0].color, "#FFCCBC4D");
        assert_eq!(settings.stops[2].position, 1.0);
    }

    // ==========================================================================
    // Theme Provider Tests
    // ==========================================================================

    #[test]
    fn test_provider_tracks_flag() {
        let (tx, rx) = watch::channel(false);
        let mut provider = ThemeProvider::new(rx);
        assert_eq!(provider.theme().name, ThemeName::Light);

        tx.send_replace(true);
        assert_eq!(provider.theme().name, ThemeName::Dark);
        assert_eq!(provider.derivations(), 2);
    }

    #[test]
    fn test_provider_skips_unchanged_flag() {
        let (tx, rx) = watch::channel(true);
        let mut provider = ThemeProvider::new(rx);
        provider.theme();
        provider.theme();
        tx.send_replace(true);
        provider.theme();
        assert_eq!(provider.derivations(), 1);
    }

    #[test]
    fn test_provider_survives_closed_sender() {
        let (tx, rx) = watch::channel(true);
        let mut provider = ThemeProvider::new(rx);
        drop(tx);
        assert!(provider.theme().is_dark());
    }
}
