//! Static navigation configuration.
//!
//! Labels are stored as plain `fn` pointers so each lookup goes through the
//! active Fluent bundle at render time while the tables stay `'static`.

use crate::core::icons::IconId;
use crate::t;

pub const BRAND_NAME: &str = "Loguardian";

/// Background of the bar.
pub const ACCENT_COLOR: &str = "#3a86ff";

/// Shown on the version badge (prefixed with `v`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A primary navigation entry: a label and the icon drawn next to it.
#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    /// Stable identifier, used as render key and CSS hook.
    pub id: &'static str,
    pub label: fn() -> String,
    pub icon: IconId,
}

impl NavEntry {
    pub fn label(&self) -> String {
        (self.label)()
    }
}

impl PartialEq for NavEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.icon == other.icon
    }
}

/// An entry of the desktop "More" dropdown.
#[derive(Debug, Clone, Copy)]
pub struct MoreEntry {
    pub title: fn() -> String,
    /// Destination handed to the host page as a plain `href`.
    pub href: &'static str,
    pub description: fn() -> String,
}

impl MoreEntry {
    pub fn title(&self) -> String {
        (self.title)()
    }

    pub fn description(&self) -> String {
        (self.description)()
    }
}

pub static NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        id: "features",
        label: || t!("nav-features"),
        icon: IconId::Layers,
    },
    NavEntry {
        id: "showcase",
        label: || t!("nav-showcase"),
        icon: IconId::Sparkles,
    },
    NavEntry {
        id: "status",
        label: || t!("nav-status"),
        icon: IconId::Activity,
    },
];

pub static MORE_ENTRIES: &[MoreEntry] = &[
    MoreEntry {
        title: || t!("more-docs-title"),
        href: "/docs",
        description: || t!("more-docs-description"),
    },
    MoreEntry {
        title: || t!("more-api-title"),
        href: "/api",
        description: || t!("more-api-description"),
    },
    MoreEntry {
        title: || t!("more-support-title"),
        href: "/support",
        description: || t!("more-support-description"),
    },
    MoreEntry {
        title: || t!("more-blog-title"),
        href: "/blog",
        description: || t!("more-blog-description"),
    },
];
