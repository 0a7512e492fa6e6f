//! Internationalization (i18n) support for `swamiji-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/swamiji-ui.ftl   (fallback/reference)
//!   hi-IN/swamiji-ui.ftl   (Hindi)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let about = t!("nav-about");
//! ```
//!
//! Keys that are only known at runtime (the hero slide table) go through
//! [`lookup`], which reports missing messages instead of echoing the key.
//!
//! Public API surface:
//! - `init()` – load localization bundles (safe to call multiple times).
//! - `set_language(lang)` – switch the site language at runtime.
//! - `current_language()` – language the loader currently resolves to.
//! - `available_languages()` – embedded language tags.
//! - `lookup(key)` – dynamic lookup returning `None` for unknown keys.
//! - `fl` macro re-export and the `t!` shorthand.
//! - `LOADER` – global `FluentLanguageLoader` consumed by helpers & `fl!` macro.
use std::sync::Once;

use api::Language;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("footer-copyright", year = 2025)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "swamiji-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = Language::En
        .tag()
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("[i18n] failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch the site language at runtime.
pub fn set_language(lang: Language) -> Result<(), i18n_embed::I18nEmbedError> {
    init();
    let id: LanguageIdentifier = match lang.tag().parse() {
        Ok(id) => id,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[id])?;
    tracing::debug!(tag = lang.tag(), "site language switched");
    Ok(())
}

/// Language the loader currently resolves messages in. Requested OS/browser
/// locales other than English and Hindi fall back to English.
pub fn current_language() -> Language {
    init();
    Language::from_tag(&LOADER.current_language().to_string()).unwrap_or_default()
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Look up a message whose key is only known at runtime.
pub fn lookup(key: &str) -> Option<String> {
    init();
    LOADER.has(key).then(|| LOADER.get(key))
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
