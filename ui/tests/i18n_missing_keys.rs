use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Translation completeness checks.
///
/// - every `t!("...")` key used under `src/` exists in the fallback (en-US)
/// - every other locale provides at least the fallback keys
/// - no locale defines a key twice
///
/// The FTL parsing is a line heuristic: comments, blank lines and attribute
/// lines are skipped and `key = ...` counts as a definition.
const EN_US: &str = include_str!("../i18n/en-US/loguardian-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/loguardian-ui.ftl");
const FR_FR: &str = include_str!("../i18n/fr-FR/loguardian-ui.ftl");

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[
        ("es-ES", ES_ES),
        ("fr-FR", FR_FR),
        // Add new locales here.
    ];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<_> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = extract_translation_keys_from_source(&src_root);
    assert!(
        referenced.contains("nav-toggle-menu"),
        "source scan found no navbar keys; did the t! macro call sites move?"
    );

    let fallback_keys = extract_keys(EN_US);
    let mut missing: Vec<_> = referenced.difference(&fallback_keys).cloned().collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );

    let mut unused: Vec<_> = fallback_keys.difference(&referenced).cloned().collect();
    unused.sort();
    assert!(
        unused.is_empty(),
        "Fallback keys never referenced from src/ ({}):\n{}",
        unused.len(),
        unused.join("\n")
    );
}

fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();
    for line in src.lines() {
        if let Some(key) = definition_key(line) {
            keys.insert(key.to_string());
        }
    }
    keys
}

fn definition_key(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let (left, _) = line.split_at(line.find('=')?);
    let key = left.trim();
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'));
    valid.then_some(key)
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();
    for raw in src.lines() {
        if let Some(key) = definition_key(raw) {
            if !seen.insert(key.to_string()) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

/// Collect the literal first argument of every `t!("...")` under `src_root`.
/// Dynamically built ids and direct `fl!` calls are not seen.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];
    let needle = "t!(\"";

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if key
                    .chars()
                    .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
                {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }

    found
}
