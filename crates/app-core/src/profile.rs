//! Profile card content
//!
//! The profile shown on the card is static example data. It lives here, apart
//! from the screens that render it, so the UI layer only decides layout.

use serde::{Deserialize, Serialize};

/// Default profile picture location
pub const DEFAULT_PROFILE_IMAGE_URL: &str =
    "https://i.pinimg.com/originals/03/86/c4/0386c49bdd4bc5e2e59a77f0ae86b8bb.jpg";

/// Kind of contact detail shown in the expanded card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Physical location
    Location,
}

impl ContactKind {
    /// Label shown above the value
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::Location => "Location",
        }
    }
}

/// A single contact detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactField {
    /// What the value is
    pub kind: ContactKind,
    /// Display value
    pub value: String,
}

impl ContactField {
    /// Create a contact field
    pub fn new(kind: ContactKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Decorative social buttons under the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    /// Share
    Share,
    /// Direct message
    Send,
    /// Favorite
    Favorite,
    /// Call
    Call,
}

impl SocialKind {
    /// Brand color of the button background
    pub fn brand_color(&self) -> &'static str {
        match self {
            SocialKind::Share => "#1877F2",
            SocialKind::Send => "#1DA1F2",
            SocialKind::Favorite => "#E4405F",
            SocialKind::Call => "#0E76A8",
        }
    }

    /// All buttons in display order
    pub fn all() -> [SocialKind; 4] {
        [
            SocialKind::Share,
            SocialKind::Send,
            SocialKind::Favorite,
            SocialKind::Call,
        ]
    }
}

/// Profile activity counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    /// Number of posts
    pub posts_count: u64,
    /// Number of followers
    pub followers_count: u64,
    /// Number of accounts followed
    pub follows_count: u64,
}

impl ProfileStats {
    /// (label, formatted value) pairs in display order
    pub fn entries(&self) -> [(&'static str, String); 3] {
        [
            ("Posts", format_count(self.posts_count)),
            ("Followers", format_count(self.followers_count)),
            ("Following", format_count(self.follows_count)),
        ]
    }
}

/// Everything the profile card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name
    pub display_name: String,
    /// Profile picture URL
    pub avatar_url: String,
    /// Contact details, in display order
    pub contacts: Vec<ContactField>,
    /// Activity counters
    pub stats: ProfileStats,
}

impl Default for Profile {
    fn default() -> Self {
        Self::sample()
    }
}

impl Profile {
    /// The example profile shown by the app
    pub fn sample() -> Self {
        Self {
            display_name: "John Smith".to_string(),
            avatar_url: DEFAULT_PROFILE_IMAGE_URL.to_string(),
            contacts: vec![
                ContactField::new(ContactKind::Email, "kenny@example.com"),
                ContactField::new(ContactKind::Phone, "+84 123 456 789"),
                ContactField::new(ContactKind::Location, "Ho Chi Minh City, Vietnam"),
            ],
            stats: ProfileStats {
                posts_count: 128,
                followers_count: 8_542,
                follows_count: 753,
            },
        }
    }

    /// Replace the avatar URL
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = url.into();
        self
    }
}

/// Format a counter with thousands separators (8542 -> "8,542")
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(128), "128");
        assert_eq!(format_count(8542), "8,542");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(100_000), "100,000");
    }

    #[test]
    fn test_sample_profile() {
        let profile = Profile::sample();
        assert_eq!(profile.display_name, "John Smith");
        assert_eq!(profile.avatar_url, DEFAULT_PROFILE_IMAGE_URL);

        let kinds: Vec<_> = profile.contacts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Email, ContactKind::Phone, ContactKind::Location]
        );
    }

    #[test]
    fn test_stats_entries() {
        let entries = Profile::sample().stats.entries();
        assert_eq!(entries[0], ("Posts", "128".to_string()));
        assert_eq!(entries[1], ("Followers", "8,542".to_string()));
        assert_eq!(entries[2], ("Following", "753".to_string()));
    }

    #[test]
    fn test_social_brand_colors() {
        let colors: Vec<_> = SocialKind::all().iter().map(|k| k.brand_color()).collect();
        assert_eq!(colors, vec!["#1877F2", "#1DA1F2", "#E4405F", "#0E76A8"]);
    }

    #[test]
    fn test_profile_serialization() {
        let profile = Profile::sample().with_avatar_url("https://example.com/a.png");
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"avatarUrl\":\"https://example.com/a.png\""));
        assert!(json.contains("\"followersCount\":8542"));

        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
