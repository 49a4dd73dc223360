//! Typography for Profile Card
//!
//! A small set of text roles, each mapped to a fixed size and weight.

use crate::tokens::{font_weight, line_height};
use serde::{Deserialize, Serialize};

/// Font size scale in pixels
pub mod font_size {
    /// Caption (12px)
    pub const CAPTION: f32 = 12.0;
    /// Label (14px)
    pub const LABEL: f32 = 14.0;
    /// Body (16px)
    pub const BODY: f32 = 16.0;
    /// Subtitle (18px)
    pub const SUBTITLE: f32 = 18.0;
    /// Title (24px)
    pub const TITLE: f32 = 24.0;
    /// Headline (28px)
    pub const HEADLINE: f32 = 28.0;
}

/// A typography style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400, 500, 700)
    pub font_weight: u16,
    /// Line height multiplier
    pub line_height: f32,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            line_height: line_height::NORMAL,
        }
    }

    /// Set line height
    pub fn with_line_height(mut self, lh: f32) -> Self {
        self.line_height = lh;
        self
    }
}

/// Typography variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyVariant {
    /// Hints under the card
    Caption,
    /// Field labels and subtitles
    Label,
    /// Regular text
    #[default]
    Body,
    /// Secondary headings
    Subtitle,
    /// Emphasised numbers in the stats row
    Stat,
    /// Screen titles
    Title,
    /// The profile name
    Headline,
}

impl TypographyVariant {
    /// Get the text style for this variant
    pub fn style(&self) -> TextStyle {
        match self {
            Self::Caption => TextStyle::new(font_size::CAPTION, font_weight::NORMAL),
            Self::Label => TextStyle::new(font_size::LABEL, font_weight::NORMAL),
            Self::Body => TextStyle::new(font_size::BODY, font_weight::NORMAL),
            Self::Subtitle => TextStyle::new(font_size::SUBTITLE, font_weight::NORMAL),
            Self::Stat => TextStyle::new(font_size::SUBTITLE, font_weight::BOLD),
            Self::Title => TextStyle::new(font_size::TITLE, font_weight::BOLD)
                .with_line_height(line_height::TIGHT),
            Self::Headline => TextStyle::new(font_size::HEADLINE, font_weight::BOLD)
                .with_line_height(line_height::TIGHT),
        }
    }
}
