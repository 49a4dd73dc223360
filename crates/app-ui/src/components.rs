//! UI component library for Profile Card
//!
//! Components are plain serializable structs. A screen renders into a tree of
//! [`Node`]s that any front end can draw; interactive nodes carry the
//! [`UiAction`] to dispatch back to the shell when pressed.
//!
//! # Available Components
//!
//! - [`Scaffold`] - Screen content above a bottom tab bar
//! - [`Container`] - Layout container with flex properties
//! - [`Text`] - Typography component with semantic variants
//! - [`Icon`] - Named glyph from the icon catalog
//! - [`Image`] - Remote image with loading and error placeholders
//! - [`Card`] - Elevated, optionally tappable surface
//! - [`IconButton`] - Round button holding a single icon
//! - [`Switch`] - Boolean toggle
//! - [`TabBar`] - Bottom navigation bar

use crate::icons::IconName;
use crate::navigation::{NavigationState, Route};
use crate::theme::{with_alpha, Color, Gradient, Theme};
use crate::tokens::{elevation, radius, sizing};
use crate::typography::TypographyVariant;
use app_core::media::ImageLoadState;
use app_core::profile::SocialKind;
use serde::{Deserialize, Serialize};

// =============================================================================
// Actions
// =============================================================================

/// Input events a front end routes back to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum UiAction {
    /// A bottom tab was tapped
    SelectTab(Route),
    /// The profile card was tapped
    ToggleProfileCard,
    /// The theme switch was flipped
    SetDarkTheme(bool),
    /// A decorative social button was tapped
    SocialButton(SocialKind),
    /// System back
    Back,
}

// =============================================================================
// Common Types
// =============================================================================

/// Style properties that can be applied to any component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleProps {
    /// Padding inside the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

fn is_default_style(style: &StyleProps) -> bool {
    style == &StyleProps::default()
}

/// Spacing values (margin, padding)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Uniform spacing on all sides
    Uniform(f32),
    /// Vertical and horizontal spacing
    Symmetric {
        /// Vertical spacing
        vertical: f32,
        /// Horizontal spacing
        horizontal: f32,
    },
    /// Individual spacing per side
    Individual {
        /// Top spacing
        top: f32,
        /// Right spacing
        right: f32,
        /// Bottom spacing
        bottom: f32,
        /// Left spacing
        left: f32,
    },
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(0.0)
    }
}

impl Spacing {
    /// Create uniform spacing
    pub fn uniform(value: f32) -> Self {
        Spacing::Uniform(value)
    }

    /// Create symmetric spacing
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Spacing::Symmetric {
            vertical,
            horizontal,
        }
    }

    /// Create individual spacing
    pub fn individual(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Spacing::Individual {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Bottom edge value
    pub fn bottom(&self) -> f32 {
        match self {
            Spacing::Uniform(v) => *v,
            Spacing::Symmetric { vertical, .. } => *vertical,
            Spacing::Individual { bottom, .. } => *bottom,
        }
    }
}

/// Alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

/// Justify content options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    Start,
    /// Center
    Center,
    /// Space between
    SpaceBetween,
    /// Space evenly
    SpaceEvenly,
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Row (horizontal)
    Row,
    /// Column (vertical)
    #[default]
    Column,
}

// =============================================================================
// Layout Tree
// =============================================================================

/// One node of a rendered layout tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    /// Screen content above a bottom bar
    Scaffold(Scaffold),
    /// Layout container
    Container(Container),
    /// Text run
    Text(Text),
    /// Glyph
    Icon(Icon),
    /// Remote image
    Image(Image),
    /// Elevated surface
    Card(Card),
    /// Round icon button
    IconButton(IconButton),
    /// Boolean toggle
    Switch(Switch),
    /// Bottom navigation bar
    TabBar(TabBar),
}

impl Node {
    /// Direct children of this node
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Scaffold(s) => vec![s.content.as_ref()],
            Node::Container(c) => c.children.iter().collect(),
            Node::Card(c) => c.children.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// This node and all of its descendants, depth first
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            let children = node.children();
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// All text content in document order
    pub fn texts(&self) -> Vec<&str> {
        self.descendants()
            .into_iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Check whether any text node reads exactly `content`
    pub fn contains_text(&self, content: &str) -> bool {
        self.texts().iter().any(|t| *t == content)
    }

    /// All icons in document order, including button and tab icons
    pub fn icons(&self) -> Vec<IconName> {
        let mut icons = Vec::new();
        for node in self.descendants() {
            match node {
                Node::Icon(i) => icons.push(i.name),
                Node::IconButton(b) => icons.push(b.icon),
                Node::Scaffold(s) => icons.extend(s.bottom_bar.icons()),
                Node::TabBar(bar) => icons.extend(bar.icons()),
                _ => {}
            }
        }
        icons
    }

    /// First card in the tree
    pub fn find_card(&self) -> Option<&Card> {
        self.descendants().into_iter().find_map(|n| match n {
            Node::Card(c) => Some(c),
            _ => None,
        })
    }

    /// First image in the tree
    pub fn find_image(&self) -> Option<&Image> {
        self.descendants().into_iter().find_map(|n| match n {
            Node::Image(i) => Some(i),
            _ => None,
        })
    }

    /// First switch in the tree
    pub fn find_switch(&self) -> Option<&Switch> {
        self.descendants().into_iter().find_map(|n| match n {
            Node::Switch(s) => Some(s),
            _ => None,
        })
    }

    /// The tab bar, if this tree has one
    pub fn find_tab_bar(&self) -> Option<&TabBar> {
        self.descendants().into_iter().find_map(|n| match n {
            Node::Scaffold(s) => Some(&s.bottom_bar),
            Node::TabBar(t) => Some(t),
            _ => None,
        })
    }

    /// Every action a front end could dispatch from this tree
    pub fn actions(&self) -> Vec<UiAction> {
        let mut actions = Vec::new();
        for node in self.descendants() {
            match node {
                Node::Card(c) => actions.extend(c.on_press),
                Node::IconButton(b) => actions.push(b.on_press),
                Node::Switch(s) => actions.push(s.on_toggle),
                Node::Scaffold(s) => actions.extend(s.bottom_bar.actions()),
                Node::TabBar(bar) => actions.extend(bar.actions()),
                _ => {}
            }
        }
        actions
    }
}

impl From<Scaffold> for Node {
    fn from(value: Scaffold) -> Self {
        Node::Scaffold(value)
    }
}

impl From<Container> for Node {
    fn from(value: Container) -> Self {
        Node::Container(value)
    }
}

impl From<Text> for Node {
    fn from(value: Text) -> Self {
        Node::Text(value)
    }
}

impl From<Icon> for Node {
    fn from(value: Icon) -> Self {
        Node::Icon(value)
    }
}

impl From<Image> for Node {
    fn from(value: Image) -> Self {
        Node::Image(value)
    }
}

impl From<Card> for Node {
    fn from(value: Card) -> Self {
        Node::Card(value)
    }
}

impl From<IconButton> for Node {
    fn from(value: IconButton) -> Self {
        Node::IconButton(value)
    }
}

impl From<Switch> for Node {
    fn from(value: Switch) -> Self {
        Node::Switch(value)
    }
}

impl From<TabBar> for Node {
    fn from(value: TabBar) -> Self {
        Node::TabBar(value)
    }
}

// =============================================================================
// Text Component
// =============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left aligned (default)
    #[default]
    Left,
    /// Center aligned
    Center,
}

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Typography variant to use
    #[serde(default)]
    pub variant: TypographyVariant,
    /// Text color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Text alignment
    #[serde(default)]
    pub align: TextAlign,
}

impl Text {
    /// Create new text component
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TypographyVariant::Body,
            color: None,
            align: TextAlign::Left,
        }
    }

    /// Set typography variant
    pub fn with_variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set text color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set text alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

// =============================================================================
// Container Component
// =============================================================================

/// Container/View component for layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Flex direction
    #[serde(default)]
    pub direction: FlexDirection,
    /// Justify content (main axis alignment)
    #[serde(default)]
    pub justify: JustifyContent,
    /// Align items (cross axis alignment)
    #[serde(default)]
    pub align: Alignment,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Background gradient, painted under `style.background_color`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    /// Style props
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
    /// Child nodes
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Container {
    /// Create a row container
    pub fn row() -> Self {
        Self {
            direction: FlexDirection::Row,
            ..Default::default()
        }
    }

    /// Create a column container
    pub fn column() -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Default::default()
        }
    }

    /// Set justify content
    pub fn with_justify(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    /// Set align items
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set gap
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set padding
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.style.padding = Some(padding);
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.style.background_color = Some(color.into());
        self
    }

    /// Set background gradient
    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = Some(gradient);
        self
    }

    /// Set opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.style.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Append a child
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several children
    pub fn with_children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }
}

// =============================================================================
// Icon Component
// =============================================================================

/// Icon component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon name (from icon set)
    pub name: IconName,
    /// Size in pixels
    pub size: f32,
    /// Icon color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Icon {
    /// Create a new icon
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: sizing::icon::MD,
            color: None,
        }
    }

    /// Set icon size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set icon color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

// =============================================================================
// Image Component
// =============================================================================

/// What an image node currently shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum ImageContent {
    /// Reserved region while the image loads
    Placeholder,
    /// Decoded bitmap
    Bitmap {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },
    /// Fallback shown when loading failed
    Error {
        /// Failure reason
        message: String,
    },
}

impl From<&ImageLoadState> for ImageContent {
    fn from(state: &ImageLoadState) -> Self {
        match state {
            ImageLoadState::Loading => ImageContent::Placeholder,
            ImageLoadState::Loaded(bitmap) => ImageContent::Bitmap {
                width: bitmap.width,
                height: bitmap.height,
            },
            ImageLoadState::Failed(message) => ImageContent::Error {
                message: message.clone(),
            },
        }
    }
}

/// Circular remote image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Source URL
    pub url: String,
    /// Diameter in pixels
    pub size: f32,
    /// Loaded content or placeholder
    pub content: ImageContent,
    /// Shadow elevation
    pub elevation: f32,
    /// Accessible description
    pub alt: String,
}

impl Image {
    /// Create an image node for the given load state
    pub fn new(url: impl Into<String>, state: &ImageLoadState) -> Self {
        Self {
            url: url.into(),
            size: sizing::avatar::PROFILE,
            content: ImageContent::from(state),
            elevation: elevation::NONE,
            alt: String::new(),
        }
    }

    /// Set diameter
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set elevation
    pub fn with_elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    /// Set accessible description
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }
}

// =============================================================================
// Card Component
// =============================================================================

/// Elevated rounded surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Shadow elevation
    pub elevation: f32,
    /// Style props; padding carries the animated bottom inset
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
    /// Action dispatched on tap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<UiAction>,
    /// Card content
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Card {
    /// Create a card on the theme's surface color
    pub fn new(theme: &Theme) -> Self {
        Self {
            elevation: elevation::MEDIUM,
            style: StyleProps {
                background_color: Some(theme.colors.surface.clone()),
                border_radius: Some(radius::LG),
                ..Default::default()
            },
            on_press: None,
            children: Vec::new(),
        }
    }

    /// Set padding
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.style.padding = Some(padding);
        self
    }

    /// Set the surface color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.style.background_color = Some(color.into());
        self
    }

    /// Set the tap action
    pub fn on_press(mut self, action: UiAction) -> Self {
        self.on_press = Some(action);
        self
    }

    /// Append a child
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Bottom padding, zero when unset
    pub fn bottom_inset(&self) -> f32 {
        self.style.padding.as_ref().map(Spacing::bottom).unwrap_or(0.0)
    }
}

// =============================================================================
// Icon Button Component
// =============================================================================

/// Round button holding a single icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconButton {
    /// Icon name
    pub icon: IconName,
    /// Diameter in pixels
    pub size: f32,
    /// Fill color
    pub background: Color,
    /// Icon color
    pub icon_color: Color,
    /// Shadow elevation
    pub elevation: f32,
    /// Action dispatched on tap
    pub on_press: UiAction,
}

impl IconButton {
    /// Create a round button
    pub fn new(icon: IconName, background: impl Into<String>, on_press: UiAction) -> Self {
        Self {
            icon,
            size: sizing::SOCIAL_BUTTON,
            background: background.into(),
            icon_color: "#FFFFFF".to_string(),
            elevation: elevation::LOW,
            on_press,
        }
    }
}

// =============================================================================
// Switch Component
// =============================================================================

/// Boolean toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    /// Current value
    pub checked: bool,
    /// Action dispatched on toggle
    pub on_toggle: UiAction,
    /// Thumb color
    pub thumb_color: Color,
    /// Track color
    pub track_color: Color,
}

impl Switch {
    /// Create a switch colored from the theme
    pub fn new(checked: bool, on_toggle: UiAction, theme: &Theme) -> Self {
        let (thumb_color, track_color) = if checked {
            (
                theme.colors.primary.clone(),
                theme.colors.primary_container.clone(),
            )
        } else {
            (
                with_alpha(&theme.colors.on_surface, 0.5),
                theme.colors.surface_variant.clone(),
            )
        };
        Self {
            checked,
            on_toggle,
            thumb_color,
            track_color,
        }
    }
}

// =============================================================================
// Tab Bar Component
// =============================================================================

/// Tab bar item representing a navigation tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarItem {
    /// Destination of this tab
    pub route: Route,
    /// Icon name
    pub icon: IconName,
    /// Label text
    pub label: String,
    /// Whether this tab is currently selected
    pub is_selected: bool,
    /// Icon and label color
    pub color: Color,
    /// Action dispatched on tap
    pub on_press: UiAction,
}

impl TabBarItem {
    /// Create an item for `route`
    pub fn new(route: Route, is_selected: bool, theme: &Theme) -> Self {
        let color = if is_selected {
            theme.colors.primary.clone()
        } else {
            theme.colors.on_surface_variant.clone()
        };
        Self {
            route,
            icon: route.icon(),
            label: route.title().to_string(),
            is_selected,
            color,
            on_press: UiAction::SelectTab(route),
        }
    }
}

/// Complete tab bar component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBar {
    /// Tab items
    pub items: Vec<TabBarItem>,
    /// Bar background
    pub background: Color,
    /// Shadow elevation
    pub elevation: f32,
}

impl TabBar {
    /// Build the tab bar for the current navigation state
    ///
    /// Selection is derived per item from route equality with the current
    /// route, so exactly one item is selected.
    pub fn for_navigation(nav: &NavigationState, theme: &Theme) -> Self {
        Self {
            items: Route::all()
                .into_iter()
                .map(|route| TabBarItem::new(route, nav.is_selected(route), theme))
                .collect(),
            background: theme.colors.surface.clone(),
            elevation: elevation::MEDIUM,
        }
    }

    /// Get the selected route
    pub fn selected(&self) -> Option<Route> {
        self.items.iter().find(|i| i.is_selected).map(|i| i.route)
    }

    /// Item icons in bar order
    pub fn icons(&self) -> Vec<IconName> {
        self.items.iter().map(|i| i.icon).collect()
    }

    /// Item actions in bar order
    pub fn actions(&self) -> Vec<UiAction> {
        self.items.iter().map(|i| i.on_press).collect()
    }
}

// =============================================================================
// Scaffold Component
// =============================================================================

/// Screen content above a bottom tab bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaffold {
    /// Window background
    pub background: Color,
    /// Current screen
    pub content: Box<Node>,
    /// Bottom navigation
    pub bottom_bar: TabBar,
}

impl Scaffold {
    /// Wrap a screen with the bottom bar
    pub fn new(content: impl Into<Node>, bottom_bar: TabBar, theme: &Theme) -> Self {
        Self {
            background: theme.colors.background.clone(),
            content: Box::new(content.into()),
            bottom_bar,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{dark_theme, light_theme};
    use app_core::media::{ImageBitmap, SupportedFormat};
    use std::sync::Arc;

    // ==========================================================================
    // Action Tests
    // ==========================================================================

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_value(UiAction::SelectTab(Route::Gallery)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "select-tab", "value": "gallery"}));

        let json = serde_json::to_value(UiAction::ToggleProfileCard).unwrap();
        assert_eq!(json, serde_json::json!({"type": "toggle-profile-card"}));

        let back: UiAction =
            serde_json::from_value(serde_json::json!({"type": "set-dark-theme", "value": true}))
                .unwrap();
        assert_eq!(back, UiAction::SetDarkTheme(true));
    }

    // ==========================================================================
    // Container / Tree Tests
    // ==========================================================================

    #[test]
    fn test_descendants_document_order() {
        let tree: Node = Container::column()
            .child(Text::new("a"))
            .child(Container::row().child(Text::new("b")).child(Text::new("c")))
            .child(Text::new("d"))
            .into();
        assert_eq!(tree.texts(), vec!["a", "b", "c", "d"]);
        assert!(tree.contains_text("c"));
        assert!(!tree.contains_text("e"));
    }

    #[test]
    fn test_opacity_is_clamped() {
        let c = Container::column().with_opacity(1.4);
        assert_eq!(c.style.opacity, Some(1.0));
        let c = Container::column().with_opacity(-0.2);
        assert_eq!(c.style.opacity, Some(0.0));
    }

    #[test]
    fn test_node_serialization_tag() {
        let node: Node = Text::new("Hello").into();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["content"], "Hello");
    }

    // ==========================================================================
    // Image Tests
    // ==========================================================================

    #[test]
    fn test_image_content_from_state() {
        assert_eq!(
            ImageContent::from(&ImageLoadState::Loading),
            ImageContent::Placeholder
        );

        let bitmap = ImageBitmap {
            width: 2,
            height: 3,
            format: SupportedFormat::Png,
            pixels: vec![0; 24],
        };
        assert_eq!(
            ImageContent::from(&ImageLoadState::Loaded(Arc::new(bitmap))),
            ImageContent::Bitmap { width: 2, height: 3 }
        );

        let image = Image::new("u", &ImageLoadState::Failed("HTTP 404".into()));
        assert!(matches!(image.content, ImageContent::Error { .. }));
    }

    // ==========================================================================
    // Card Tests
    // ==========================================================================

    #[test]
    fn test_card_bottom_inset() {
        let theme = light_theme();
        let card = Card::new(&theme);
        assert_eq!(card.bottom_inset(), 0.0);

        let card = card.with_padding(Spacing::individual(16.0, 16.0, 40.0, 16.0));
        assert_eq!(card.bottom_inset(), 40.0);
        assert_eq!(card.style.background_color.as_deref(), Some("#FFFFFF"));
    }

    // ==========================================================================
    // Switch Tests
    // ==========================================================================

    #[test]
    fn test_switch_colors_follow_state() {
        let theme = dark_theme();
        let on = Switch::new(true, UiAction::SetDarkTheme(false), &theme);
        assert_eq!(on.thumb_color, theme.colors.primary);
        let off = Switch::new(false, UiAction::SetDarkTheme(true), &theme);
        assert_eq!(off.track_color, theme.colors.surface_variant);
        assert_eq!(off.thumb_color, "#FFFFFF80");
    }

    // ==========================================================================
    // Tab Bar Tests
    // ==========================================================================

    #[test]
    fn test_tab_bar_selection_from_route() {
        let theme = light_theme();
        let mut nav = NavigationState::new();
        nav.select(Route::Settings);

        let bar = TabBar::for_navigation(&nav, &theme);
        assert_eq!(bar.items.len(), 3);
        assert_eq!(bar.selected(), Some(Route::Settings));
        assert_eq!(bar.items.iter().filter(|i| i.is_selected).count(), 1);

        let settings = &bar.items[2];
        assert_eq!(settings.color, theme.colors.primary);
        assert_eq!(settings.on_press, UiAction::SelectTab(Route::Settings));
        assert_eq!(bar.items[0].color, theme.colors.on_surface_variant);
    }

    #[test]
    fn test_actions_collected() {
        let theme = light_theme();
        let nav = NavigationState::new();
        let tree: Node = Scaffold::new(
            Card::new(&theme).on_press(UiAction::ToggleProfileCard),
            TabBar::for_navigation(&nav, &theme),
            &theme,
        )
        .into();

        let actions = tree.actions();
        assert!(actions.contains(&UiAction::ToggleProfileCard));
        assert!(actions.contains(&UiAction::SelectTab(Route::Gallery)));
        assert_eq!(tree.find_tab_bar().and_then(TabBar::selected), Some(Route::Profile));
        assert_eq!(tree.icons(), vec![IconName::Person, IconName::Gallery, IconName::Settings]);
    }
}
