//! Theme configuration and the built-in theme set.

use serde::Serialize;

/// Id of the theme used when no valid selection exists.
pub const DEFAULT_THEME_ID: &str = "default";

/// Color palette of a theme, as CSS color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorSet {
    pub primary: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeFonts {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeSpacing {
    pub link_gap: &'static str,
    pub padding: &'static str,
    pub border_radius: &'static str,
}

/// A named, immutable bundle of visual settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: ColorSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<ThemeFonts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<ThemeSpacing>,
}

/// Built-in themes in presentation order. The first entry is the default.
pub static BUILTIN_THEMES: [ThemeConfig; 6] = [
    ThemeConfig {
        id: DEFAULT_THEME_ID,
        name: "Default",
        colors: ColorSet {
            primary: "#3b82f6",
            background: "#ffffff",
            text: "#1f2937",
            accent: Some("#60a5fa"),
        },
        fonts: Some(ThemeFonts {
            heading: "Inter",
            body: "Inter",
        }),
        spacing: Some(ThemeSpacing {
            link_gap: "12px",
            padding: "24px",
            border_radius: "8px",
        }),
    },
    ThemeConfig {
        id: "dark",
        name: "Dark",
        colors: ColorSet {
            primary: "#8b5cf6",
            background: "#111827",
            text: "#f9fafb",
            accent: Some("#a78bfa"),
        },
        fonts: Some(ThemeFonts {
            heading: "Inter",
            body: "Inter",
        }),
        spacing: None,
    },
    ThemeConfig {
        id: "ocean",
        name: "Ocean",
        colors: ColorSet {
            primary: "#0891b2",
            background: "#ecfeff",
            text: "#164e63",
            accent: Some("#22d3ee"),
        },
        fonts: None,
        spacing: None,
    },
    ThemeConfig {
        id: "sunset",
        name: "Sunset",
        colors: ColorSet {
            primary: "#f97316",
            background: "#fff7ed",
            text: "#7c2d12",
            accent: Some("#fb7185"),
        },
        fonts: Some(ThemeFonts {
            heading: "Poppins",
            body: "Inter",
        }),
        spacing: None,
    },
    ThemeConfig {
        id: "forest",
        name: "Forest",
        colors: ColorSet {
            primary: "#16a34a",
            background: "#f0fdf4",
            text: "#14532d",
            accent: None,
        },
        fonts: None,
        spacing: Some(ThemeSpacing {
            link_gap: "16px",
            padding: "32px",
            border_radius: "16px",
        }),
    },
    ThemeConfig {
        id: "minimal",
        name: "Minimal",
        colors: ColorSet {
            primary: "#000000",
            background: "#ffffff",
            text: "#000000",
            accent: None,
        },
        fonts: Some(ThemeFonts {
            heading: "Helvetica",
            body: "Helvetica",
        }),
        spacing: Some(ThemeSpacing {
            link_gap: "8px",
            padding: "16px",
            border_radius: "0",
        }),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_theme_ids_are_unique() {
        let ids: HashSet<_> = BUILTIN_THEMES.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), BUILTIN_THEMES.len());
    }

    #[test]
    fn test_default_theme_is_first() {
        assert_eq!(BUILTIN_THEMES[0].id, DEFAULT_THEME_ID);
    }

    #[test]
    fn test_theme_serialization_skips_missing_sections() {
        let forest = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == "forest")
            .unwrap();
        let value = serde_json::to_value(forest).unwrap();

        assert_eq!(value["name"], "Forest");
        assert!(value.get("fonts").is_none());
        assert!(value["colors"].get("accent").is_none());
        assert_eq!(value["spacing"]["border_radius"], "16px");
    }
}
