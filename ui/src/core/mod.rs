//! Platform-agnostic pieces of the navigation bar: the menu state machine,
//! the static entry tables and icon identifiers.

pub mod entries;
pub mod icons;
pub mod menu;
