use ferry_locale::{DEFAULT_LOCALE, Locales, english, negotiate, subcodes};

fn table_entries(prefix: &str) -> Vec<(String, String)> {
    let english = english();
    vec![
        ("role_description", format!("{prefix} {}", english.role_description)),
        ("empty_note", format!("{prefix} {}", english.empty_note)),
        ("selection_note", format!("{prefix} {}", english.selection_note)),
        ("drop_note", format!("{prefix} {}", english.drop_note)),
        ("sort_number", format!("{prefix} {}", english.sort_number)),
        ("selected_count", format!("{prefix} {}", english.selected_count)),
        ("dropped_count", format!("{prefix} {}", english.dropped_count)),
        ("item_singular", format!("{prefix} {}", english.item_singular)),
        ("item_plural", format!("{prefix} {}", english.item_plural)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

// ============================================================================
// Subcode chains
// ============================================================================

#[test]
fn test_subcodes_most_specific_first() {
    assert_eq!(subcodes("en-gb-cockney"), vec!["en-gb-cockney", "en-gb", "en"]);
}

#[test]
fn test_subcodes_single_segment() {
    assert_eq!(subcodes("fr"), vec!["fr"]);
    assert!(subcodes("").is_empty());
}

// ============================================================================
// Negotiation
// ============================================================================

#[test]
fn test_negotiate_prefers_longest_shared_subcode() {
    let available = ["en-us-fake-cockney", "en"];
    assert_eq!(negotiate(&["en-gb-cockney"], &available, "en"), "en-us-fake-cockney");
}

#[test]
fn test_negotiate_prefers_base_over_sibling_region() {
    assert_eq!(negotiate(&["fr-ca"], &["fr-be", "fr"], "en"), "fr");
    // Order of the available set does not matter
    assert_eq!(negotiate(&["fr-ca"], &["fr", "fr-be"], "en"), "fr");
}

#[test]
fn test_negotiate_falls_back_to_default() {
    assert_eq!(negotiate(&["xx"], &["en"], "fallback"), "fallback");
    assert_eq!(negotiate::<&str>(&[], &["en"], "fallback"), "fallback");
}

#[test]
fn test_negotiate_is_case_insensitive() {
    assert_eq!(negotiate(&["en-US"], &["en"], "fallback"), "en");
}

#[test]
fn test_negotiate_exact_match_wins() {
    assert_eq!(negotiate(&["fr-be"], &["fr", "fr-be"], "en"), "fr-be");
}

#[test]
fn test_negotiate_respects_wanted_precedence() {
    // The first wanted tag with any match decides, even if a later one
    // would match more specifically.
    let available = ["de", "fr-ca"];
    assert_eq!(negotiate(&["de-at", "fr-ca"], &available, "en"), "de");
}

#[test]
fn test_negotiate_skips_unmatched_wanted_tags() {
    assert_eq!(negotiate(&["xx", "  ", "de-ch"], &["de"], "en"), "de");
}

#[test]
fn test_negotiate_ignores_region_of_other_language() {
    assert_eq!(negotiate(&["de-ch"], &["fr-ch", "en"], "en"), "en");
    assert_eq!(negotiate(&["es-us"], &["en-us", "xx"], "xx"), "xx");
}

#[test]
fn test_negotiate_requires_segment_boundaries() {
    assert_eq!(negotiate(&["eng"], &["en"], "fallback"), "fallback");
}

// ============================================================================
// Caller precedence
// ============================================================================

#[test]
fn test_resolve_prefers_element_then_document_then_platform() {
    let mut locales = Locales::new();
    locales.register("fr", table_entries("fr")).unwrap();
    locales.register("de", table_entries("de")).unwrap();

    assert_eq!(locales.resolve(Some("fr-FR"), Some("de"), Some("en")), "fr");
    assert_eq!(locales.resolve(None, Some("de"), Some("fr")), "de");
    assert_eq!(locales.resolve(Some("  "), None, Some("FR")), "fr");
}

#[test]
fn test_resolve_without_hints_uses_default() {
    let locales = Locales::new();
    assert_eq!(locales.resolve(None, None, None), DEFAULT_LOCALE);
    assert_eq!(locales.table(locales.resolve(None, None, None)), &english());
}
