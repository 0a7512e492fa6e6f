//! Page-wide reactive context shared by the platform shells and the sections.
//!
//! The platform `App` calls [`use_site_context`] once; everything below it
//! reads the language and UI flags through the helpers here.

use api::Language;
use dioxus::prelude::*;

use crate::core::store::UiState;
use crate::i18n;

/// Provide the language and UI-state signals for the whole page. The site
/// opens in English regardless of the requested locale.
///
/// Returns the language signal so the caller can key its routed subtree on it.
pub fn use_site_context() -> Signal<Language> {
    let language = use_context_provider(|| {
        let initial = Language::default();
        if let Err(err) = i18n::set_language(initial) {
            tracing::warn!(tag = initial.tag(), "initial language selection failed: {err}");
        }
        Signal::new(initial)
    });
    use_context_provider(|| Signal::new(UiState::default()));
    language
}

/// Current site language. Subscribes the caller when a provider exists.
pub fn use_language() -> Language {
    try_use_context::<Signal<Language>>()
        .map(|language| language())
        .unwrap_or_else(i18n::current_language)
}

pub fn use_ui_state() -> Option<Signal<UiState>> {
    try_use_context::<Signal<UiState>>()
}

/// Switch the loader and, when provided, the reactive language signal.
/// Call from event handlers, not during render.
pub fn switch_language(target: Language) {
    if let Err(err) = i18n::set_language(target) {
        tracing::warn!(tag = target.tag(), "language switch failed: {err}");
        return;
    }
    if let Some(mut language) = try_consume_context::<Signal<Language>>() {
        language.set(target);
    }
}
