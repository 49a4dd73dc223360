//! Application screens
//!
//! Each screen is a pure function of its props: the current theme plus
//! whatever state it reads. Rendering allocates a fresh [`Node`] tree every
//! time; nothing in the tree outlives the call.
//!
//! - [`profile`] - profile card with expandable contact details
//! - [`gallery`] - static placeholder
//! - [`settings`] - theme switch and informational rows
//!
//! [`Node`]: crate::components::Node

pub mod gallery;
pub mod profile;
pub mod settings;

pub use gallery::GalleryScreen;
pub use profile::{ProfileScreen, ProfileState};
pub use settings::SettingsScreen;

use std::time::Duration;

/// Local state of one mounted screen
///
/// Only the profile screen has state of its own; the other variants mark
/// that the screen has been mounted.
#[derive(Debug)]
pub enum ScreenState {
    /// Profile card state
    Profile(ProfileState),
    /// Gallery has no local state
    Gallery,
    /// Settings reads the global theme flag only
    Settings,
}

impl ScreenState {
    /// Profile state, if this is the profile screen
    pub fn as_profile(&self) -> Option<&ProfileState> {
        match self {
            ScreenState::Profile(state) => Some(state),
            _ => None,
        }
    }

    /// Mutable profile state, if this is the profile screen
    pub fn as_profile_mut(&mut self) -> Option<&mut ProfileState> {
        match self {
            ScreenState::Profile(state) => Some(state),
            _ => None,
        }
    }

    /// Advance animations; returns `true` while any are running
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self {
            ScreenState::Profile(state) => state.tick(dt),
            _ => false,
        }
    }
}
