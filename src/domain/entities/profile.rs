//! Profile header and social platform entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Header shown at the top of the bio page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
    pub bio: String,
    /// Opaque reference to an uploaded image, resolved by the render layer.
    pub profile_image: Option<String>,
}

/// Platforms a social link can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Twitter,
    Facebook,
    Youtube,
    Linkedin,
    Github,
    Tiktok,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 7] = [
        Self::Instagram,
        Self::Twitter,
        Self::Facebook,
        Self::Youtube,
        Self::Linkedin,
        Self::Github,
        Self::Tiktok,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Youtube => "youtube",
            Self::Linkedin => "linkedin",
            Self::Github => "github",
            Self::Tiktok => "tiktok",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        // "x" is accepted as an alias for twitter.
        if needle == "x" {
            return Ok(Self::Twitter);
        }
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == needle)
            .ok_or_else(|| format!("Unknown social platform: {s}"))
    }
}
