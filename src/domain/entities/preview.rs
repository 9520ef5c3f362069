//! Derived preview data handed to the render layer. Never persisted.

use super::theme::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Icon shown next to a link, classified from its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Instagram,
    Twitter,
    Facebook,
    Youtube,
    Linkedin,
    Github,
    Tiktok,
    Link,
}

impl IconKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Youtube => "youtube",
            Self::Linkedin => "linkedin",
            Self::Github => "github",
            Self::Tiktok => "tiktok",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation metadata for a single link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkPreview {
    pub title: String,
    pub url: String,
    pub display_url: String,
    pub icon: IconKind,
}

/// Viewport the preview is laid out for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    #[default]
    Desktop,
    Mobile,
}

impl PreviewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Desktop => Self::Mobile,
            Self::Mobile => Self::Desktop,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for PreviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(format!("Unknown preview mode: {other}")),
        }
    }
}

/// Composed preview of a builder session at a given revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewPayload {
    pub revision: u64,
    pub mode: PreviewMode,
    pub theme: ThemeConfig,
    pub links: Vec<LinkPreview>,
}
