//! Property checks for canonicalization and path rewriting.

use proptest::prelude::*;
use sitelang_core::{
    LocaleRouter, LocaleSource, Placement, build_target_url, canonicalize, detect_locale_from_path,
    strip_locale_from_path,
};
use sitelang_test_support::fixtures::{STANDARD_DEFAULT, standard_config};

const TARGETS: &[&str] = &["zh-hant", "en", "ja", "ko", "fr", "de", "ar"];

fn router() -> LocaleRouter {
    LocaleRouter::new(standard_config()).expect("valid config")
}

const ORIGINS: &[&str] = &["", "https://example.com", "//cdn.example.com"];
const QUERY_PAIR: &str = "k[a-z]{0,4}(=([a-z]|%20|%2F){0,4})?";

fn plain_segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{5,9}", 0..5)
}

/// Paths with a single leading slash, optional locale, and some doubled separators.
fn messy_path() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["", "en/", "fr//", "zh_Hant/"]),
        prop::collection::vec(("[a-z]{5,9}", any::<bool>()), 0..5),
    )
        .prop_map(|(locale, parts)| {
            let rest: String = parts
                .iter()
                .map(|(segment, doubled)| format!("{segment}{}", if *doubled { "//" } else { "/" }))
                .collect();
            format!("/{locale}{rest}")
        })
}

fn query() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(QUERY_PAIR, 0..4)
}

proptest! {
    /// Canonicalizing twice changes nothing.
    #[test]
    fn canonicalize_is_idempotent(code in "[ A-Za-z_-]{0,16}") {
        let once = canonicalize(&code);
        prop_assert_eq!(canonicalize(&once), once.clone());
        prop_assert!(!once.contains('_'));
    }

    /// Removing the only locale segment leaves nothing to detect.
    #[test]
    fn strip_then_detect_finds_nothing(
        segments in plain_segments(),
        position in 0usize..5,
        locale in prop::sample::select(TARGETS),
    ) {
        let router = router();
        let mut parts = segments.clone();
        let at = position.min(parts.len());
        parts.insert(at, locale.to_string());
        let path = format!("/{}", parts.join("/"));

        let stripped = strip_locale_from_path(&path, router.supported());
        prop_assert_eq!(detect_locale_from_path(&stripped, router.supported()), None);
        prop_assert_eq!(stripped, format!("/{}", segments.join("/")));
    }

    /// Switching to a non-default locale puts it where detection finds it.
    #[test]
    fn switch_then_detect_round_trips(
        segments in plain_segments(),
        locale in prop::sample::select(TARGETS),
    ) {
        let router = router();
        let path = format!("/{}", segments.join("/"));
        let switched = router.switch_href(&path, locale);

        let detected = detect_locale_from_path(&switched, router.supported());
        prop_assert_eq!(
            detected.as_deref(),
            Some(locale)
        );
        prop_assert_eq!(strip_locale_from_path(&switched, router.supported()), path.clone());

        let back = router.switch_href(&switched, STANDARD_DEFAULT);
        prop_assert_eq!(back, path);
    }

    /// Built targets never contain doubled slashes.
    #[test]
    fn built_targets_have_no_double_slashes(
        base in "[a-z/]{0,16}",
        remaining in "[a-z/]{0,16}",
        locale in prop::sample::select(TARGETS),
        root in any::<bool>(),
    ) {
        let url = build_target_url(&base, &remaining, locale, STANDARD_DEFAULT, root);
        prop_assert!(url.starts_with('/'));
        prop_assert!(!url.contains("//"), "{url}");
    }

    /// Switched hrefs keep origin, query, and fragment and never double a slash.
    #[test]
    fn switched_hrefs_are_normalized(
        origin in prop::sample::select(ORIGINS),
        path in messy_path(),
        pairs in prop::collection::vec(QUERY_PAIR, 1..4),
        fragment in "[a-z]{0,6}",
        declared in prop::sample::select(vec![
            None,
            Some("/pages/app/"),
            Some("https://example.com//pages//app"),
        ]),
        site_root in any::<bool>(),
        locale in prop::sample::select(TARGETS),
    ) {
        let mut config = standard_config();
        config.base_path = declared.map(str::to_string);
        config.placement = if site_root { Placement::SiteRoot } else { Placement::AfterBase };
        let router = LocaleRouter::new(config).expect("valid config");

        let mut suffix = format!("?{}", pairs.join("&"));
        if !fragment.is_empty() {
            suffix.push('#');
            suffix.push_str(&fragment);
        }
        let href = format!("{origin}{path}{suffix}");
        let switched = router.switch_href(&href, locale);

        prop_assert!(switched.starts_with(origin), "{switched}");
        let rest = &switched[origin.len()..];
        prop_assert!(rest.starts_with('/'), "{switched}");
        prop_assert!(!rest.contains("//"), "{switched}");
        prop_assert!(rest.ends_with(&suffix), "{switched}");
    }

    /// Query routing rewrites only its own parameter.
    #[test]
    fn query_switch_keeps_other_pairs(
        origin in prop::sample::select(ORIGINS),
        path in "(/[a-z]{1,6}){0,3}",
        pairs in query(),
        existing in prop::option::of(prop::sample::select(TARGETS)),
        target in prop::sample::select(vec![STANDARD_DEFAULT, "en", "fr", "ar"]),
    ) {
        let mut config = standard_config();
        config.locale_source = LocaleSource::Query;
        let router = LocaleRouter::new(config).expect("valid config");

        let mut incoming = pairs.clone();
        if let Some(existing) = existing {
            incoming.insert(0, format!("lang={existing}"));
        }
        let href = format!("{origin}{path}?{}#top", incoming.join("&"));

        let mut expected_pairs = pairs.clone();
        if target != STANDARD_DEFAULT {
            expected_pairs.push(format!("lang={target}"));
        }
        let expected_path = if path.is_empty() { "/" } else { path.as_str() };
        let expected_query = if expected_pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", expected_pairs.join("&"))
        };

        prop_assert_eq!(
            router.switch_href(&href, target),
            format!("{origin}{expected_path}{expected_query}#top")
        );
    }
}
