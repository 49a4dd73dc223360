//! Icon catalog
//!
//! Icons are opaque names; the front end maps them to glyphs.

use serde::{Deserialize, Serialize};

/// Every glyph the app draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    /// Profile tab
    Person,
    /// Gallery tab and placeholder
    Gallery,
    /// Settings tab
    Settings,
    /// Email contact field
    Email,
    /// Phone contact field and call button
    Phone,
    /// Location contact field
    Location,
    /// Share button
    Share,
    /// Send button
    Send,
    /// Favorite button
    Favorite,
    /// Call button
    Call,
    /// Notifications settings row
    Notifications,
    /// Privacy settings row
    Lock,
    /// Help settings row
    Help,
    /// About settings row
    Info,
    /// Trailing arrow on settings rows
    Chevron,
    /// Light theme
    Sun,
    /// Dark theme
    Moon,
}

impl IconName {
    /// Identifier as it appears in rendered output
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Person => "person",
            IconName::Gallery => "gallery",
            IconName::Settings => "settings",
            IconName::Email => "email",
            IconName::Phone => "phone",
            IconName::Location => "location",
            IconName::Share => "share",
            IconName::Send => "send",
            IconName::Favorite => "favorite",
            IconName::Call => "call",
            IconName::Notifications => "notifications",
            IconName::Lock => "lock",
            IconName::Help => "help",
            IconName::Info => "info",
            IconName::Chevron => "chevron",
            IconName::Sun => "sun",
            IconName::Moon => "moon",
        }
    }
}

impl std::fmt::Display for IconName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
