//! Application shell
//!
//! [`AppShell`] is the root of the view tree. It owns the three pieces of
//! view state (current route, per-screen state, dark-theme flag), maps the
//! current route to exactly one visible screen, and routes [`UiAction`]s from
//! the front end to the single writer of each piece of state.
//!
//! # Example
//!
//! ```rust
//! use app_ui::components::UiAction;
//! use app_ui::navigation::Route;
//! use app_ui::shell::AppShell;
//!
//! let mut shell = AppShell::new();
//! shell.dispatch(UiAction::ToggleProfileCard);
//! shell.dispatch(UiAction::SelectTab(Route::Settings));
//! shell.dispatch(UiAction::SetDarkTheme(true));
//! shell.dispatch(UiAction::SelectTab(Route::Profile));
//!
//! assert!(shell.is_profile_expanded());
//! assert!(shell.dark_theme());
//! ```

use crate::components::{Node, Scaffold, TabBar, UiAction};
use crate::navigation::{NavigationState, Route};
use crate::screens::{GalleryScreen, ProfileScreen, ProfileState, ScreenState, SettingsScreen};
use crate::theme::{Theme, ThemeProvider};
use app_core::{AppConfig, ImageLoader, Profile};
use app_state::{SavedStateRegistry, Setter, StateHandle};
use std::time::Duration;
use tokio::sync::watch;

/// Root of the application
#[derive(Debug)]
pub struct AppShell {
    profile: Profile,
    dark_theme: StateHandle<bool>,
    set_dark_theme: Setter<bool>,
    theme: ThemeProvider,
    route: StateHandle<Route>,
    navigation: NavigationState,
    screens: SavedStateRegistry<Route, ScreenState>,
    images: Option<ImageLoader>,
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new()
    }
}

impl AppShell {
    /// Create a shell at the start destination in the light theme
    ///
    /// Screens mount lazily on first use, so builder calls made right after
    /// construction apply to the first mount.
    pub fn new() -> Self {
        let dark_theme = StateHandle::new(false);
        let set_dark_theme = dark_theme.setter();
        let theme = ThemeProvider::new(dark_theme.subscribe());
        let navigation = NavigationState::new();
        Self {
            profile: Profile::sample(),
            dark_theme,
            set_dark_theme,
            theme,
            route: StateHandle::new(navigation.current()),
            navigation,
            screens: SavedStateRegistry::new(),
            images: None,
        }
    }

    /// Create a shell from startup configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .with_profile(Profile::sample().with_avatar_url(config.profile_image_url.as_str()))
            .with_dark_theme(config.dark_theme)
    }

    /// Set the profile shown on the card
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the initial theme flag
    pub fn with_dark_theme(self, dark: bool) -> Self {
        self.set_dark_theme.set(dark);
        self
    }

    /// Load the profile picture through `loader`
    pub fn with_image_loader(mut self, loader: ImageLoader) -> Self {
        self.images = Some(loader);
        self
    }

    // =========================================================================
    // State Accessors
    // =========================================================================

    /// Current route
    pub fn current_route(&self) -> Route {
        self.navigation.current()
    }

    /// Navigation state
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Subscribe to route changes
    pub fn subscribe_route(&self) -> watch::Receiver<Route> {
        self.route.subscribe()
    }

    /// Current theme flag
    pub fn dark_theme(&self) -> bool {
        self.dark_theme.get()
    }

    /// Subscribe to theme flag changes
    pub fn subscribe_dark_theme(&self) -> watch::Receiver<bool> {
        self.dark_theme.subscribe()
    }

    /// Theme for the current flag
    pub fn theme(&mut self) -> &Theme {
        self.theme.theme()
    }

    /// Profile screen state, if the profile screen has been mounted
    pub fn profile_state(&self) -> Option<&ProfileState> {
        self.screens
            .get(&Route::Profile)
            .and_then(ScreenState::as_profile)
    }

    /// Whether the profile card is expanded
    pub fn is_profile_expanded(&self) -> bool {
        self.profile_state().is_some_and(ProfileState::expanded)
    }

    /// Check whether `route` has mounted state
    pub fn is_mounted(&self, route: Route) -> bool {
        self.screens.contains(&route)
    }

    /// Number of screen mounts since start
    pub fn mount_count(&self) -> u64 {
        self.screens.mount_count()
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Handle an input event; returns `true` if any state changed
    pub fn dispatch(&mut self, action: UiAction) -> bool {
        tracing::debug!(?action, "dispatch");
        match action {
            UiAction::SelectTab(route) => self.select_tab(route),
            UiAction::ToggleProfileCard => self.toggle_profile_card(),
            UiAction::SetDarkTheme(dark) => self.set_dark_theme(dark),
            UiAction::SocialButton(kind) => {
                tracing::debug!(?kind, "social button has no action");
                false
            }
            UiAction::Back => self.go_back(),
        }
    }

    /// Select a tab
    pub fn select_tab(&mut self, route: Route) -> bool {
        if !self.navigation.select(route) {
            return false;
        }
        self.route.set(route);
        self.mount(route);
        true
    }

    /// Navigate back; returns `false` at the start destination
    pub fn go_back(&mut self) -> bool {
        if !self.navigation.go_back() {
            return false;
        }
        let route = self.navigation.current();
        self.route.set(route);
        self.mount(route);
        true
    }

    /// Toggle the profile card; ignored unless the profile screen is showing
    pub fn toggle_profile_card(&mut self) -> bool {
        if self.navigation.current() != Route::Profile {
            tracing::debug!("profile card is not visible");
            return false;
        }
        match self.mount(Route::Profile).as_profile_mut() {
            Some(state) => {
                state.toggle();
                true
            }
            None => false,
        }
    }

    /// Write the theme flag; ignored unless the settings screen is showing
    pub fn set_dark_theme(&mut self, dark: bool) -> bool {
        if self.navigation.current() != Route::Settings {
            tracing::debug!("theme switch is not visible");
            return false;
        }
        let changed = self.set_dark_theme.set(dark);
        if changed {
            tracing::debug!(dark, "theme flag changed");
        }
        changed
    }

    /// Advance every mounted screen's animations by `dt`
    ///
    /// Returns `true` while any animation is still running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut moving = false;
        for screen in self.screens.values_mut() {
            moving |= screen.tick(dt);
        }
        moving
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the current screen above the tab bar
    pub fn render(&mut self) -> Node {
        let route = self.navigation.current();
        let content = self.render_route(route);
        let theme = self.theme.theme();
        let bar = TabBar::for_navigation(&self.navigation, theme);
        Scaffold::new(content, bar, theme).into()
    }

    /// Render any screen, mounting it if needed
    pub fn render_route(&mut self, route: Route) -> Node {
        let dark = self.dark_theme.get();
        let theme = self.theme.theme();
        let screen = Self::mount_in(&mut self.screens, self.images.as_ref(), &self.profile, route);
        match screen {
            ScreenState::Profile(state) => ProfileScreen::new(theme, &self.profile, state).render(),
            ScreenState::Gallery => GalleryScreen::new(theme).render(),
            ScreenState::Settings => SettingsScreen::new(theme, dark).render(),
        }
    }

    fn mount(&mut self, route: Route) -> &mut ScreenState {
        Self::mount_in(&mut self.screens, self.images.as_ref(), &self.profile, route)
    }

    fn mount_in<'a>(
        screens: &'a mut SavedStateRegistry<Route, ScreenState>,
        images: Option<&ImageLoader>,
        profile: &Profile,
        route: Route,
    ) -> &'a mut ScreenState {
        let avatar_url = profile.avatar_url.as_str();
        screens.get_or_mount(&route, || match route {
            Route::Profile => {
                let state = ProfileState::new();
                ScreenState::Profile(match images {
                    Some(loader) => state.with_image(loader.load(avatar_url)),
                    None => state,
                })
            }
            Route::Gallery => ScreenState::Gallery,
            Route::Settings => ScreenState::Settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconName;
    use crate::theme::{dark_theme, light_theme};
    use app_core::profile::SocialKind;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(shell: &mut AppShell) {
        for _ in 0..1000 {
            if !shell.tick(FRAME) {
                return;
            }
        }
        panic!("animations did not settle");
    }

    // ==========================================================================
    // Navigation Tests
    // ==========================================================================

    #[test]
    fn test_starts_on_profile() {
        let mut shell = AppShell::new();
        assert_eq!(shell.current_route(), Route::Profile);
        let tree = shell.render();
        assert_eq!(tree.find_tab_bar().and_then(TabBar::selected), Some(Route::Profile));
        assert!(tree.contains_text("John Smith"));
    }

    #[test]
    fn test_tab_selection_shows_one_screen() {
        let mut shell = AppShell::new();
        assert!(shell.dispatch(UiAction::SelectTab(Route::Gallery)));
        let tree = shell.render();
        assert!(tree.contains_text("Photo Gallery"));
        assert!(!tree.contains_text("John Smith"));
        assert_eq!(tree.find_tab_bar().and_then(TabBar::selected), Some(Route::Gallery));
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut shell = AppShell::new();
        shell.dispatch(UiAction::SelectTab(Route::Settings));
        let history = shell.navigation().history_routes();
        let mounts = shell.mount_count();

        assert!(!shell.dispatch(UiAction::SelectTab(Route::Settings)));
        assert_eq!(shell.navigation().history_routes(), history);
        assert_eq!(shell.mount_count(), mounts);
    }

    #[test]
    fn test_reselect_on_fresh_shell_mounts_nothing() {
        let mut shell = AppShell::new();
        assert!(!shell.dispatch(UiAction::SelectTab(Route::Profile)));
        assert_eq!(shell.mount_count(), 0);
        assert!(!shell.is_mounted(Route::Profile));
    }

    #[test]
    fn test_render_route_uses_mounted_state() {
        let mut shell = AppShell::new();
        shell.dispatch(UiAction::ToggleProfileCard);
        shell.dispatch(UiAction::SelectTab(Route::Gallery));

        let tree = shell.render_route(Route::Profile);
        assert!(tree.contains_text("kenny@example.com"));
        assert!(!shell.is_mounted(Route::Settings));
        shell.render_route(Route::Settings);
        assert_eq!(shell.mount_count(), 3);
        shell.render_route(Route::Settings);
        assert_eq!(shell.mount_count(), 3);
    }

    #[test]
    fn test_route_subscription() {
        let mut shell = AppShell::new();
        let mut rx = shell.subscribe_route();
        shell.dispatch(UiAction::SelectTab(Route::Gallery));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Route::Gallery);

        shell.dispatch(UiAction::SelectTab(Route::Gallery));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_back() {
        let mut shell = AppShell::new();
        shell.dispatch(UiAction::SelectTab(Route::Settings));
        assert!(shell.dispatch(UiAction::Back));
        assert_eq!(shell.current_route(), Route::Profile);
        assert!(!shell.dispatch(UiAction::Back));
    }

    // ==========================================================================
    // State Restoration Tests
    // ==========================================================================

    #[test]
    fn test_expanded_survives_tab_round_trip() {
        let mut shell = AppShell::new();
        shell.dispatch(UiAction::ToggleProfileCard);
        settle(&mut shell);

        shell.dispatch(UiAction::SelectTab(Route::Settings));
        shell.dispatch(UiAction::SelectTab(Route::Profile));

        assert!(shell.is_profile_expanded());
        assert_eq!(shell.profile_state().map(ProfileState::inset), Some(48.0));
        assert_eq!(shell.mount_count(), 2);
    }

    #[test]
    fn test_toggle_ignored_off_screen() {
        let mut shell = AppShell::new();
        shell.dispatch(UiAction::SelectTab(Route::Gallery));
        assert!(!shell.dispatch(UiAction::ToggleProfileCard));
        assert!(!shell.is_profile_expanded());
    }

    #[test]
    fn test_hidden_animation_keeps_running() {
        let mut shell = AppShell::new();
        shell.dispatch(UiAction::ToggleProfileCard);
        shell.dispatch(UiAction::SelectTab(Route::Gallery));
        settle(&mut shell);
        assert_eq!(shell.profile_state().map(ProfileState::inset), Some(48.0));
    }

    // ==========================================================================
    // Theme Tests
    // ==========================================================================

    #[test]
    fn test_theme_applies_to_every_screen() {
        let mut shell = AppShell::new();
        shell.dispatch(UiAction::SelectTab(Route::Settings));
        assert!(shell.dispatch(UiAction::SetDarkTheme(true)));

        let dark = dark_theme();
        assert_eq!(shell.theme(), &dark);
        for route in Route::all() {
            let Node::Container(root) = shell.render_route(route) else {
                panic!("screen root should be a container");
            };
            assert_eq!(root.gradient.as_ref(), Some(dark.screen_background(route)));
        }
    }

    #[test]
    fn test_theme_round_trip() {
        let mut shell = AppShell::new();
        shell.dispatch(UiAction::SelectTab(Route::Settings));
        let before = shell.render();
        shell.dispatch(UiAction::SetDarkTheme(true));
        assert_ne!(shell.render(), before);
        shell.dispatch(UiAction::SetDarkTheme(false));
        assert_eq!(shell.render(), before);
        assert_eq!(shell.theme(), &light_theme());
    }

    #[test]
    fn test_settings_switch_icon() {
        let mut shell = AppShell::new().with_dark_theme(true);
        shell.dispatch(UiAction::SelectTab(Route::Settings));
        let tree = shell.render();
        assert!(tree.icons().contains(&IconName::Moon));
        assert!(!shell.dispatch(UiAction::SetDarkTheme(true)));
    }

    #[test]
    fn test_theme_switch_ignored_off_settings() {
        let mut shell = AppShell::new();
        assert!(!shell.dispatch(UiAction::SetDarkTheme(true)));
        assert!(!shell.dark_theme());

        shell.dispatch(UiAction::SelectTab(Route::Gallery));
        assert!(!shell.dispatch(UiAction::SetDarkTheme(true)));
        assert!(!shell.dark_theme());

        shell.dispatch(UiAction::SelectTab(Route::Settings));
        assert!(shell.dispatch(UiAction::SetDarkTheme(true)));
        assert!(shell.dark_theme());
    }

    #[test]
    fn test_social_buttons_do_nothing() {
        let mut shell = AppShell::new();
        let before = shell.render();
        for kind in SocialKind::all() {
            assert!(!shell.dispatch(UiAction::SocialButton(kind)));
        }
        assert_eq!(shell.render(), before);
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig::default()
            .with_dark_theme(true)
            .with_profile_image_url("https://example.com/me.png");
        let mut shell = AppShell::from_config(&config);
        assert!(shell.dark_theme());
        let tree = shell.render();
        let image = tree.find_image().unwrap();
        assert_eq!(image.url, "https://example.com/me.png");
    }
}
