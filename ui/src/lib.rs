//! Shared UI crate for the Swami Ji site. Views, sections and the hero
//! carousel live here; platform crates only supply the router and window.

use dioxus::prelude::*;

pub mod carousel;
pub mod context;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

pub mod components {
    mod navigation;
    pub use navigation::Navigation;
}

/// Shared site theme. Desktop release builds inline the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
