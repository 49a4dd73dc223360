//! Gallery screen
//!
//! A static placeholder. It reads nothing but the theme.

use crate::components::{Alignment, Container, Icon, JustifyContent, Node, Spacing, Text, TextAlign};
use crate::icons::IconName;
use crate::navigation::Route;
use crate::theme::{with_alpha, Theme};
use crate::tokens::{sizing, spacing};
use crate::typography::TypographyVariant;

/// Screen title
pub const TITLE: &str = "Photo Gallery";
/// Caption under the title
pub const CAPTION: &str = "Coming Soon!";

/// Gallery screen props
#[derive(Debug, Clone, Copy)]
pub struct GalleryScreen<'a> {
    theme: &'a Theme,
}

impl<'a> GalleryScreen<'a> {
    /// Create the screen
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Render the layout tree
    pub fn render(&self) -> Node {
        let colors = &self.theme.colors;
        Container::column()
            .with_gradient(self.theme.screen_background(Route::Gallery).clone())
            .with_justify(JustifyContent::Center)
            .with_align(Alignment::Center)
            .with_padding(Spacing::uniform(spacing::SPACE_LG))
            .with_gap(spacing::SPACE_LG)
            .child(
                Text::new(TITLE)
                    .with_variant(TypographyVariant::Title)
                    .with_color(colors.on_background.as_str())
                    .with_align(TextAlign::Center),
            )
            .child(
                Text::new(CAPTION)
                    .with_variant(TypographyVariant::Subtitle)
                    .with_color(with_alpha(&colors.on_background, 0.7))
                    .with_align(TextAlign::Center),
            )
            .child(
                Icon::new(IconName::Gallery)
                    .with_size(sizing::icon::HERO)
                    .with_color(colors.primary.as_str()),
            )
            .into()
    }
}
