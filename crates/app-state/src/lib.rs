//! View-state primitives for Profile Card
//!
//! This crate provides the small set of state building blocks the UI layer
//! composes: observable value/setter pairs that are handed down the component
//! tree explicitly, and a saved-state registry that keeps per-destination
//! state alive across navigation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod handle;
pub mod restoration;

pub use handle::{Setter, StateHandle};
pub use restoration::SavedStateRegistry;
