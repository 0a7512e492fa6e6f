#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The desktop shell inlines `ui/assets/theme/main.css`. Markup in the shared
`ui` crate relies on the classes below; a rename in one place without the
other only shows up as unstyled pages, so the presence check runs as a test.

When a selector is intentionally renamed, update the component markup and
`REQUIRED_SELECTORS` together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors the shared sections render.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons & cards
    ".button {",
    ".button--primary",
    ".button--outline",
    ".card {",
    // Sections
    ".section__inner",
    ".section__title",
    ".achievements",
    ".teaching-card",
    ".teaching-card__image",
    ".quote__controls",
    ".quote__share",
    ".quote__dot--active",
    ".event-card__date",
    ".footer__newsletter",
    // Teaching modal and its close animation
    ".modal {",
    ".modal--closing",
    ".modal__panel",
    ".modal__image",
    // Loading and error states
    ".spinner__ring",
    ".banner--error",
    ".page-not-found",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or the path change?"
    );
}

#[test]
fn modal_close_animation_matches_close_delay() {
    // The teaching modal is removed 200 ms after close starts.
    let closing = THEME_CSS
        .split(".modal--closing")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .unwrap_or_default();
    assert!(closing.contains("0.2s"), "modal close animation drifted: {closing}");
}
