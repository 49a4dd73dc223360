//! Settings screen
//!
//! The only interactive row is the theme switch. Flipping it dispatches
//! [`UiAction::SetDarkTheme`] with the new value; the informational rows
//! below it do nothing.

use crate::components::{
    Alignment, Card, Container, Icon, JustifyContent, Node, Spacing, Switch, Text, UiAction,
};
use crate::icons::IconName;
use crate::navigation::Route;
use crate::theme::Theme;
use crate::tokens::spacing;
use crate::typography::TypographyVariant;

/// Screen title
pub const TITLE: &str = "Settings";
/// Label of the theme switch row
pub const THEME_LABEL: &str = "Dark Theme";

/// A static settings row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsItem {
    /// Leading icon
    pub icon: IconName,
    /// Row title
    pub title: &'static str,
    /// Secondary line
    pub subtitle: &'static str,
}

/// Informational rows shown under the theme switch
pub const SETTINGS_ITEMS: [SettingsItem; 4] = [
    SettingsItem {
        icon: IconName::Notifications,
        title: "Notifications",
        subtitle: "Manage notification preferences",
    },
    SettingsItem {
        icon: IconName::Lock,
        title: "Privacy",
        subtitle: "Control your privacy settings",
    },
    SettingsItem {
        icon: IconName::Help,
        title: "Help & Support",
        subtitle: "Get assistance and answers",
    },
    SettingsItem {
        icon: IconName::Info,
        title: "About",
        subtitle: "App version 1.0.0",
    },
];

/// Settings screen props
#[derive(Debug, Clone, Copy)]
pub struct SettingsScreen<'a> {
    theme: &'a Theme,
    dark_theme: bool,
}

impl<'a> SettingsScreen<'a> {
    /// Create the screen for the current theme flag
    pub fn new(theme: &'a Theme, dark_theme: bool) -> Self {
        Self { theme, dark_theme }
    }

    /// Icon of the theme row
    pub fn theme_icon(&self) -> IconName {
        if self.dark_theme {
            IconName::Moon
        } else {
            IconName::Sun
        }
    }

    /// Render the layout tree
    pub fn render(&self) -> Node {
        let colors = &self.theme.colors;
        let mut root = Container::column()
            .with_gradient(self.theme.screen_background(Route::Settings).clone())
            .with_padding(Spacing::uniform(spacing::SPACE_LG))
            .with_gap(spacing::SPACE_LG)
            .child(
                Text::new(TITLE)
                    .with_variant(TypographyVariant::Title)
                    .with_color(colors.on_background.as_str()),
            )
            .child(self.theme_row());

        for item in &SETTINGS_ITEMS {
            root = root.child(self.item_row(item));
        }
        root.into()
    }

    fn theme_row(&self) -> Card {
        let colors = &self.theme.colors;
        let label = Container::row()
            .with_align(Alignment::Center)
            .with_gap(spacing::SPACE_LG)
            .child(Icon::new(self.theme_icon()).with_color(colors.primary.as_str()))
            .child(Text::new(THEME_LABEL).with_color(colors.on_surface.as_str()));

        Card::new(self.theme).with_padding(Spacing::uniform(spacing::SPACE_LG)).child(
            Container::row()
                .with_justify(JustifyContent::SpaceBetween)
                .with_align(Alignment::Center)
                .child(label)
                .child(Switch::new(
                    self.dark_theme,
                    UiAction::SetDarkTheme(!self.dark_theme),
                    self.theme,
                )),
        )
    }

    fn item_row(&self, item: &SettingsItem) -> Card {
        let colors = &self.theme.colors;
        Card::new(self.theme).with_padding(Spacing::uniform(spacing::SPACE_LG)).child(
            Container::row()
                .with_align(Alignment::Center)
                .with_gap(spacing::SPACE_LG)
                .child(Icon::new(item.icon).with_color(colors.primary.as_str()))
                .child(
                    Container::column()
                        .child(Text::new(item.title).with_color(colors.on_surface.as_str()))
                        .child(
                            Text::new(item.subtitle)
                                .with_variant(TypographyVariant::Label)
                                .with_color(colors.on_surface_variant.as_str()),
                        ),
                )
                .child(Icon::new(IconName::Chevron).with_color(colors.on_surface_variant.as_str())),
        )
    }
}
