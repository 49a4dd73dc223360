//! Profile screen
//!
//! Shows the profile picture, the name, and a card that expands on tap to
//! reveal contact details. The card's bottom inset follows a bouncy spring
//! and the details fade in and out; both retarget whenever the expanded flag
//! changes, including in the middle of a previous transition.

use crate::animation::{SpringAnimation, SpringSpec};
use crate::components::{
    Alignment, Card, Container, Icon, IconButton, Image, JustifyContent, Node, Spacing, Text,
    TextAlign, UiAction,
};
use crate::icons::IconName;
use crate::navigation::Route;
use crate::theme::Theme;
use crate::tokens::{elevation, sizing, spacing, spring};
use crate::typography::TypographyVariant;
use app_core::media::ImageLoadState;
use app_core::profile::{ContactField, ContactKind, Profile, SocialKind};
use app_core::ImageRequest;
use app_state::{Setter, StateHandle};
use std::time::Duration;

/// Hint shown while collapsed
pub const EXPAND_HINT: &str = "Tap to expand";
/// Hint shown while expanded
pub const COLLAPSE_HINT: &str = "Tap to collapse";

/// Spring driving the card's bottom inset
pub fn inset_spring() -> SpringSpec {
    SpringSpec::new(spring::DAMPING_RATIO_MEDIUM_BOUNCY, spring::STIFFNESS_LOW)
        .with_visibility_threshold(spring::VISIBILITY_THRESHOLD_PX)
}

/// Spring driving the contact details' opacity
pub fn fade_spring() -> SpringSpec {
    SpringSpec::new(spring::DAMPING_RATIO_NO_BOUNCY, spring::STIFFNESS_MEDIUM_LOW)
        .with_visibility_threshold(spring::VISIBILITY_THRESHOLD_UNIT)
}

fn inset_target(expanded: bool) -> f32 {
    if expanded {
        sizing::EXPANDED_CARD_INSET
    } else {
        0.0
    }
}

fn fade_target(expanded: bool) -> f32 {
    if expanded {
        1.0
    } else {
        0.0
    }
}

fn contact_icon(kind: ContactKind) -> IconName {
    match kind {
        ContactKind::Email => IconName::Email,
        ContactKind::Phone => IconName::Phone,
        ContactKind::Location => IconName::Location,
    }
}

fn social_icon(kind: SocialKind) -> IconName {
    match kind {
        SocialKind::Share => IconName::Share,
        SocialKind::Send => IconName::Send,
        SocialKind::Favorite => IconName::Favorite,
        SocialKind::Call => IconName::Call,
    }
}

// =============================================================================
// Profile State
// =============================================================================

/// Local state of a mounted profile screen
///
/// Lives as long as the screen is mounted, including while another tab is
/// showing. Dropping it cancels the picture download if still running.
#[derive(Debug)]
pub struct ProfileState {
    expanded: StateHandle<bool>,
    inset: SpringAnimation,
    fade: SpringAnimation,
    image: Option<ImageRequest>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileState {
    /// Collapsed card with no picture request
    pub fn new() -> Self {
        Self {
            expanded: StateHandle::new(false),
            inset: SpringAnimation::new(inset_spring(), inset_target(false)),
            fade: SpringAnimation::new(fade_spring(), fade_target(false)),
            image: None,
        }
    }

    /// Attach the picture request
    pub fn with_image(mut self, request: ImageRequest) -> Self {
        self.image = Some(request);
        self
    }

    /// Whether the card is expanded
    pub fn expanded(&self) -> bool {
        self.expanded.get()
    }

    /// Write-only handle to the expanded flag
    pub fn expanded_setter(&self) -> Setter<bool> {
        self.expanded.setter()
    }

    /// Flip the expanded flag and retarget the animations; returns the new
    /// value
    pub fn toggle(&mut self) -> bool {
        self.expanded.update(|expanded| !expanded);
        self.sync();
        let expanded = self.expanded();
        tracing::debug!(expanded, "profile card toggled");
        expanded
    }

    /// Point the springs at the targets for the current flag
    fn sync(&mut self) {
        let expanded = self.expanded();
        self.inset.retarget(inset_target(expanded));
        self.fade.retarget(fade_target(expanded));
    }

    /// Advance animations; returns `true` while any are running
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.sync();
        let inset_moving = self.inset.advance(dt);
        let fade_moving = self.fade.advance(dt);
        inset_moving || fade_moving
    }

    /// Rendered bottom inset, never negative
    pub fn inset(&self) -> f32 {
        self.inset.value().max(0.0)
    }

    /// Value the inset is heading for
    pub fn inset_target(&self) -> f32 {
        self.inset.target()
    }

    /// Opacity of the contact details, in `[0, 1]`
    pub fn details_opacity(&self) -> f32 {
        self.fade.value().clamp(0.0, 1.0)
    }

    /// Whether the contact details are on screen, including while fading out
    pub fn details_visible(&self) -> bool {
        self.expanded() || !self.fade.is_settled()
    }

    /// Current picture load state
    pub fn image_state(&self) -> ImageLoadState {
        self.image
            .as_ref()
            .map(ImageRequest::state)
            .unwrap_or_default()
    }

    /// The picture request, if one was started
    pub fn image_request(&self) -> Option<&ImageRequest> {
        self.image.as_ref()
    }
}

// =============================================================================
// Profile Screen
// =============================================================================

/// Profile screen props
#[derive(Debug, Clone, Copy)]
pub struct ProfileScreen<'a> {
    theme: &'a Theme,
    profile: &'a Profile,
    state: &'a ProfileState,
}

impl<'a> ProfileScreen<'a> {
    /// Create the screen
    pub fn new(theme: &'a Theme, profile: &'a Profile, state: &'a ProfileState) -> Self {
        Self {
            theme,
            profile,
            state,
        }
    }

    /// Render the layout tree
    pub fn render(&self) -> Node {
        Container::column()
            .with_gradient(self.theme.screen_background(Route::Profile).clone())
            .with_align(Alignment::Center)
            .with_padding(Spacing::individual(
                spacing::SPACE_3XL + spacing::SPACE_LG,
                spacing::SPACE_LG,
                spacing::SPACE_LG,
                spacing::SPACE_LG,
            ))
            .with_gap(spacing::SPACE_2XL)
            .child(self.profile_card())
            .child(self.social_row())
            .child(self.stats_card())
            .into()
    }

    fn profile_card(&self) -> Card {
        let colors = &self.theme.colors;
        let expanded = self.state.expanded();

        let mut card = Card::new(self.theme)
            .on_press(UiAction::ToggleProfileCard)
            .with_padding(Spacing::individual(
                spacing::SPACE_LG,
                spacing::SPACE_LG,
                spacing::SPACE_LG + self.state.inset(),
                spacing::SPACE_LG,
            ))
            .child(
                Image::new(self.profile.avatar_url.as_str(), &self.state.image_state())
                    .with_size(sizing::avatar::PROFILE)
                    .with_elevation(elevation::HIGH)
                    .with_alt("Profile Image"),
            )
            .child(
                Text::new(self.profile.display_name.as_str())
                    .with_variant(TypographyVariant::Headline)
                    .with_color(colors.on_surface.as_str())
                    .with_align(TextAlign::Center),
            );

        if self.state.details_visible() {
            card = card.child(self.details());
        }
        if !expanded {
            card = card.child(self.hint(EXPAND_HINT));
        }
        card
    }

    fn details(&self) -> Container {
        Container::column()
            .with_align(Alignment::Center)
            .with_opacity(self.state.details_opacity())
            .with_children(self.profile.contacts.iter().map(|c| self.contact_row(c)))
            .child(self.hint(COLLAPSE_HINT))
    }

    fn contact_row(&self, field: &ContactField) -> Node {
        let colors = &self.theme.colors;
        Container::row()
            .with_align(Alignment::Center)
            .with_gap(spacing::SPACE_LG)
            .with_padding(Spacing::symmetric(spacing::SPACE_SM, 0.0))
            .child(Icon::new(contact_icon(field.kind)).with_color(colors.primary.as_str()))
            .child(
                Container::column()
                    .child(
                        Text::new(field.kind.label())
                            .with_variant(TypographyVariant::Label)
                            .with_color(colors.on_surface_variant.as_str()),
                    )
                    .child(Text::new(field.value.as_str()).with_color(colors.on_surface.as_str())),
            )
            .into()
    }

    fn hint(&self, content: &str) -> Text {
        Text::new(content)
            .with_variant(TypographyVariant::Caption)
            .with_color(self.theme.colors.primary.as_str())
    }

    fn social_row(&self) -> Container {
        Container::row()
            .with_justify(JustifyContent::SpaceEvenly)
            .with_children(SocialKind::all().into_iter().map(|kind| -> Node {
                IconButton::new(
                    social_icon(kind),
                    kind.brand_color(),
                    UiAction::SocialButton(kind),
                )
                .into()
            }))
    }

    fn stats_card(&self) -> Card {
        let colors = &self.theme.colors;
        let stats = self.profile.stats.entries().into_iter().map(|(label, value)| -> Node {
            Container::column()
                .with_align(Alignment::Center)
                .child(
                    Text::new(value)
                        .with_variant(TypographyVariant::Stat)
                        .with_color(colors.primary.as_str()),
                )
                .child(
                    Text::new(label)
                        .with_variant(TypographyVariant::Label)
                        .with_color(colors.on_surface_variant.as_str()),
                )
                .into()
        });

        Card::new(self.theme)
            .with_background(colors.surface_variant.as_str())
            .with_padding(Spacing::uniform(spacing::SPACE_LG))
            .child(
                Container::row()
                    .with_justify(JustifyContent::SpaceEvenly)
                    .with_children(stats),
            )
    }
}
