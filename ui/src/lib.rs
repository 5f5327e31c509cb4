//! Shared UI crate for Loguardian: the responsive navigation bar, the page
//! shell that mounts it, and localization. Platform crates only launch it.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Inline SVG glyphs (components/icon.rs)
    pub mod icon;
    pub use icon::NavIcon;

    // Responsive navigation bar (components/navbar.rs)
    pub mod navbar;
    pub use navbar::NavBar;
}
