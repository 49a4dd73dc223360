//! Design tokens for Profile Card
//!
//! This module provides design tokens for spacing, sizing, elevation,
//! typography weights, and the spring presets used by animations.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on a 4px base unit with t-shirt sizes
pub mod spacing {
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 16px - Large
    pub const SPACE_LG: f32 = 16.0;
    /// 24px - 2x large
    pub const SPACE_2XL: f32 = 24.0;
    /// 32px - 3x large
    pub const SPACE_3XL: f32 = 32.0;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Medium (24px)
        pub const MD: f32 = 24.0;
        /// Decorative hero icon (64px)
        pub const HERO: f32 = 64.0;
    }

    /// Avatar sizes
    pub mod avatar {
        /// Profile card picture (140px)
        pub const PROFILE: f32 = 140.0;
    }

    /// Round social button diameter (48px)
    pub const SOCIAL_BUTTON: f32 = 48.0;

    /// Bottom inset added to the profile card while expanded (48px)
    pub const EXPANDED_CARD_INSET: f32 = 48.0;
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius values
pub mod radius {
    /// Large (16px)
    pub const LG: f32 = 16.0;
}

// =============================================================================
// Elevation Tokens
// =============================================================================

/// Shadow elevation in pixels
pub mod elevation {
    /// No shadow
    pub const NONE: f32 = 0.0;
    /// Social buttons
    pub const LOW: f32 = 4.0;
    /// Cards
    pub const MEDIUM: f32 = 8.0;
    /// Profile picture
    pub const HIGH: f32 = 12.0;
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font weight values
pub mod font_weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

/// Line height multipliers
pub mod line_height {
    /// Tight (1.25)
    pub const TIGHT: f32 = 1.25;
    /// Normal (1.5)
    pub const NORMAL: f32 = 1.5;
}

// =============================================================================
// Spring Presets
// =============================================================================

/// Damping ratio and stiffness presets for spring animations
///
/// Stiffness is expressed for a unit mass, so the natural frequency is
/// `sqrt(stiffness)` radians per second.
pub mod spring {
    /// Noticeable overshoot (0.5)
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
    /// Critically damped, no overshoot (1.0)
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

    /// Stiff (1500)
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    /// Moderately soft (400)
    pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;
    /// Soft (200)
    pub const STIFFNESS_LOW: f32 = 200.0;

    /// Settle threshold for values measured in pixels
    pub const VISIBILITY_THRESHOLD_PX: f32 = 0.1;
    /// Settle threshold for unit-interval values such as opacity
    pub const VISIBILITY_THRESHOLD_UNIT: f32 = 0.01;
}
