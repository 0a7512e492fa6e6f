//! Cross-checks the Rust sources against the embedded Fluent bundles.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::carousel::deck::HERO_SLIDE_KEYS;

/// Bundle file name inside each locale folder.
const FTL_FILENAME: &str = "swamiji-ui.ftl";

const I18N_DIR: &str = "i18n";

/// Message ids defined in a Fluent file. Terms, comments, attributes and
/// continuation lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter(|line| !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of every `t!("…")` call under `src_root`.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (_, rest) in content.match_indices("t!(\"").map(|(pos, m)| content.split_at(pos + m.len())) {
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

fn bundle_keys(i18n_root: &Path, locale: &str) -> BTreeSet<String> {
    let path = i18n_root.join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
    parse_ftl_keys(&content)
}

#[test]
fn parser_skips_comments_terms_and_continuations() {
    let keys = parse_ftl_keys(
        "# comment\n-brand = Om\nnav-home = Home\n    continued = not a key\nhero-show-slide = Show { $number }\n",
    );
    assert_eq!(
        keys.into_iter().collect::<Vec<_>>(),
        vec!["hero-show-slide".to_string(), "nav-home".to_string()]
    );
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback = bundle_keys(&i18n_root, "en-US");
    assert!(!fallback.is_empty(), "fallback bundle defines no messages");

    // Literal lookups plus the runtime-resolved hero table.
    let mut referenced = referenced_keys(&crate_root.join("src"));
    for slide in HERO_SLIDE_KEYS.iter() {
        referenced.extend(
            [slide.title, slide.subtitle, slide.image, slide.description].map(str::to_string),
        );
    }

    let missing_in_fallback: Vec<_> = referenced.difference(&fallback).cloned().collect();
    assert!(
        missing_in_fallback.is_empty(),
        "referenced keys missing in en-US:\n  {}",
        missing_in_fallback.join("\n  ")
    );

    let mut gaps: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for locale in locale_dirs(&i18n_root) {
        let keys = bundle_keys(&i18n_root, &locale);
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            gaps.insert(locale, missing);
        }
    }
    if !gaps.is_empty() {
        let report = gaps
            .iter()
            .map(|(locale, keys)| format!("  {locale} ({} missing)\n    {}", keys.len(), keys.join("\n    ")))
            .collect::<Vec<_>>()
            .join("\n");
        panic!("locales missing translations relative to en-US:\n{report}");
    }

    let unused: Vec<_> = fallback.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} en-US keys are not referenced through t!: {}",
            unused.len(),
            unused.join(", ")
        );
    }
}
