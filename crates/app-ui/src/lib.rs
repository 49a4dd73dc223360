//! User interface for Profile Card
//!
//! This crate provides the UI layer: the theme provider, design tokens,
//! spring animation, the layout-tree component library, navigation, the
//! three screens, and the application shell that ties them together.
//!
//! # Design System
//!
//! Two themes are supported, picked by a single dark-theme flag:
//! - [`theme::ThemeName::Light`] - Deep purple primary on white
//! - [`theme::ThemeName::Dark`] - Lavender primary on near-black
//!
//! # Modules
//!
//! - [`theme`] - Theme provider, color schemes, and screen gradients
//! - [`tokens`] - Design tokens (spacing, sizing, elevation, springs)
//! - [`typography`] - Text styles
//! - [`icons`] - Icon catalog
//! - [`animation`] - Spring animation
//! - [`components`] - Layout-tree components
//! - [`navigation`] - Routes and the tab navigation state machine
//! - [`screens`] - Application screens
//! - [`shell`] - Application root
//!
//! # Example
//!
//! ```rust
//! use app_ui::theme::derive_palette;
//! use app_ui::tokens::spacing;
//! use app_ui::typography::TypographyVariant;
//!
//! let theme = derive_palette(false);
//! assert!(!theme.is_dark());
//!
//! let padding = spacing::SPACE_LG;
//! let title_style = TypographyVariant::Title.style();
//! assert!(title_style.font_size > padding);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod components;
pub mod icons;
pub mod navigation;
pub mod screens;
pub mod shell;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use theme::{
    dark_theme, derive_palette, get_theme, light_theme, Color, ColorScheme, Gradient, Theme,
    ThemeName, ThemeProvider,
};

pub use tokens::{elevation, radius, sizing, spacing, spring};

pub use typography::{font_size, TextStyle, TypographyVariant};

pub use animation::{SpringAnimation, SpringSpec};

pub use components::{Node, UiAction};

pub use icons::IconName;

pub use navigation::{NavigationState, Route, StackEntry};

pub use screens::{GalleryScreen, ProfileScreen, ProfileState, ScreenState, SettingsScreen};

pub use shell::AppShell;
