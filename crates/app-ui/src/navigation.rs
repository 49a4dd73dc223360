//! Navigation system for Profile Card
//!
//! Three top-level destinations reached from a bottom tab bar. Tab switches
//! follow a pop-up-to-start policy: the back stack is always the start
//! destination, optionally with one other destination on top. Destinations
//! popped off the stack are saved with their key and restored on return, so
//! their screen state survives the round trip.

use crate::icons::IconName;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Route Definitions
// =============================================================================

/// All navigable screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Profile card (start destination)
    #[default]
    Profile,
    /// Photo gallery placeholder
    Gallery,
    /// Settings with the theme toggle
    Settings,
}

impl Route {
    /// The start destination
    pub const START: Route = Route::Profile;

    /// Path segment for this route
    pub fn path(&self) -> &'static str {
        match self {
            Route::Profile => "profile",
            Route::Gallery => "gallery",
            Route::Settings => "settings",
        }
    }

    /// Tab label
    pub fn title(&self) -> &'static str {
        match self {
            Route::Profile => "Profile",
            Route::Gallery => "Gallery",
            Route::Settings => "Settings",
        }
    }

    /// Tab icon
    pub fn icon(&self) -> IconName {
        match self {
            Route::Profile => IconName::Person,
            Route::Gallery => IconName::Gallery,
            Route::Settings => IconName::Settings,
        }
    }

    /// All routes in tab bar order
    pub fn all() -> [Route; 3] {
        [Route::Profile, Route::Gallery, Route::Settings]
    }

    /// Match a path such as `/gallery` or `settings`
    pub fn from_path(path: &str) -> Option<Route> {
        let segment = path.trim().trim_matches('/');
        Route::all()
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(segment))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| format!("Unknown route: {}", s))
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry; unchanged while its state is preserved
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
///
/// The start entry is permanent; at most one other entry sits above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Start destination entry
    start: StackEntry,
    /// Destination on top of the start entry, if any
    top: Option<StackEntry>,
    /// Entries popped with their state saved
    saved: HashMap<Route, StackEntry>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            start: StackEntry::new(Route::START),
            top: None,
            saved: HashMap::new(),
        }
    }
}

impl NavigationState {
    /// Create a new navigation state at the start destination
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current route
    pub fn current(&self) -> Route {
        self.current_entry().route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.top.as_ref().unwrap_or(&self.start)
    }

    /// Check whether `route` is the current route
    pub fn is_selected(&self, route: Route) -> bool {
        self.current() == route
    }

    /// Stack entries, bottom to top
    pub fn history(&self) -> Vec<&StackEntry> {
        std::iter::once(&self.start).chain(self.top.as_ref()).collect()
    }

    /// Routes on the stack, bottom to top
    pub fn history_routes(&self) -> Vec<Route> {
        self.history().into_iter().map(|e| e.route).collect()
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        1 + usize::from(self.top.is_some())
    }

    /// Saved entry for a route that is not on the stack
    pub fn saved_entry(&self, route: Route) -> Option<&StackEntry> {
        self.saved.get(&route)
    }

    /// Select a tab
    ///
    /// Pops back to the start destination saving the popped entry, then
    /// pushes `route` single-top, restoring its saved entry if there is one.
    /// Returns `false` if `route` was already current.
    pub fn select(&mut self, route: Route) -> bool {
        if self.is_selected(route) {
            tracing::debug!(%route, "tab already selected");
            return false;
        }

        self.pop_saving();

        if route != self.start.route {
            let entry = match self.saved.remove(&route) {
                Some(entry) => {
                    tracing::debug!(%route, key = %entry.key, "restoring saved destination");
                    entry
                }
                None => StackEntry::new(route),
            };
            self.top = Some(entry);
        }

        tracing::debug!(%route, depth = self.depth(), "navigated");
        true
    }

    /// Go back
    ///
    /// From a non-start destination this pops to the start, saving the
    /// popped entry. Returns `false` at the start destination.
    pub fn go_back(&mut self) -> bool {
        if self.pop_saving() {
            tracing::debug!(route = %self.current(), "navigated back");
            true
        } else {
            false
        }
    }

    fn pop_saving(&mut self) -> bool {
        match self.top.take() {
            Some(entry) => {
                self.saved.insert(entry.route, entry);
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
