//! Platform-agnostic plumbing shared by the site's sections.

pub mod format;
pub mod platform;
pub mod store;
pub mod timing;
