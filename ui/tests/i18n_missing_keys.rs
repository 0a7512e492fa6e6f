use std::collections::{BTreeSet, HashSet};

/// Every site language must define at least the en-US messages, and no
/// bundle may define a message twice.
///
/// Adding a language:
/// 1. Create `ui/i18n/<locale>/swamiji-ui.ftl` with every en-US key.
/// 2. Register it in `LOCALES` below.
const EN_US: &str = include_str!("../i18n/en-US/swamiji-ui.ftl");
const HI_IN: &str = include_str!("../i18n/hi-IN/swamiji-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("hi-IN", HI_IN)];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = message_ids(EN_US, "en-US");
    assert!(!fallback.is_empty(), "en-US defines no messages");

    let failures: Vec<String> = LOCALES
        .iter()
        .filter_map(|(locale, src)| {
            let keys = message_ids(src, locale);
            let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
            (!missing.is_empty()).then(|| {
                format!(
                    "{locale} is missing {} key(s):\n  {}",
                    missing.len(),
                    missing.join("\n  ")
                )
            })
        })
        .collect();

    assert!(
        failures.is_empty(),
        "translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n\n")
    );
}

#[test]
fn placeholders_match_fallback() {
    let fallback = placeholders(EN_US);
    for (locale, src) in LOCALES {
        for (key, vars) in placeholders(src) {
            if let Some((_, expected)) = fallback.iter().find(|(k, _)| *k == key) {
                assert_eq!(&vars, expected, "{locale}: `{key}` uses different variables");
            }
        }
    }
}

#[test]
fn hero_images_are_shared_across_locales() {
    let image_lines = |src: &'static str| -> BTreeSet<&'static str> {
        src.lines()
            .filter(|line| line.starts_with("hero-slide-") && line.contains("-image"))
            .map(str::trim)
            .collect()
    };
    let fallback = image_lines(EN_US);
    assert_eq!(fallback.len(), 6);
    for (locale, src) in LOCALES {
        assert_eq!(image_lines(src), fallback, "{locale} points at different slide images");
    }
}

/// Top-level message ids; panics on duplicates.
fn message_ids(src: &str, locale: &str) -> BTreeSet<String> {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for (id, _) in definitions(src) {
        if !seen.insert(id) {
            dups.insert(id);
        }
    }

    assert!(
        dups.is_empty(),
        "duplicate key definitions in {locale}: {}",
        dups.into_iter().collect::<Vec<_>>().join(", ")
    );
    seen.into_iter().map(str::to_string).collect()
}

fn definitions(src: &str) -> impl Iterator<Item = (&str, &str)> {
    src.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter(|line| !line.starts_with('#') && !line.starts_with('-') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value))
        .filter(|(key, _)| !key.is_empty() && !key.contains(char::is_whitespace))
}

/// `$variables` referenced by each single-line message.
fn placeholders(src: &str) -> Vec<(&str, BTreeSet<&str>)> {
    definitions(src)
        .map(|(key, value)| {
            let vars = value
                .split('$')
                .skip(1)
                .filter_map(|rest| {
                    rest.split(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
                        .next()
                })
                .filter(|name| !name.is_empty())
                .collect();
            (key, vars)
        })
        .collect()
}
