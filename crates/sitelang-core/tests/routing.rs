//! End-to-end routing scenarios over the standard locale set.

use sitelang_core::{
    LocaleOrigin, LocaleRouter, LocaleSource, Placement, RouterConfig, TextDirection,
    detect_locale_from_path, strip_locale_from_path,
};
use sitelang_test_support::fixtures::standard_config;

fn router_with(configure: impl FnOnce(&mut RouterConfig)) -> LocaleRouter {
    let mut config = standard_config();
    configure(&mut config);
    LocaleRouter::new(config).expect("valid config")
}

#[test]
fn site_root_deployment_switches_between_locales() {
    let router = router_with(|_| {});
    let supported = router.supported();

    assert_eq!(
        detect_locale_from_path("/en/docs/guide", supported).as_deref(),
        Some("en")
    );
    assert_eq!(strip_locale_from_path("/en/docs/guide", supported), "/docs/guide");
    assert_eq!(router.switch_href("/en/docs/guide", "zh-hans"), "/docs/guide");
    assert_eq!(router.switch_href("/en/docs/guide", "fr"), "/fr/docs/guide");
}

#[test]
fn locale_directories_above_declared_base() {
    let router = router_with(|config| {
        config.base_path = Some("/pages/app/".to_string());
        config.placement = Placement::SiteRoot;
    });
    let href = "/zh-hant/pages/app/feedback";

    assert_eq!(router.inspect(href, None).remaining_path, "/feedback");
    assert_eq!(router.switch_href(href, "en"), "/en/pages/app/feedback");
    assert_eq!(router.switch_href(href, "zh-hans"), "/pages/app/feedback");
}

#[test]
fn bare_root_resolves_default_and_switches_with_trailing_slash() {
    let router = router_with(|_| {});
    let resolved = router.current_locale("/", None);
    assert_eq!(resolved.code, "zh-hans");
    assert_eq!(resolved.origin, LocaleOrigin::Default);
    assert_eq!(router.switch_href("/", "de"), "/de/");
}

#[test]
fn absolute_hrefs_keep_origin_query_and_fragment() {
    let router = router_with(|_| {});
    assert_eq!(
        router.switch_href("https://example.com/ja/blog/post?page=2#comments", "ko"),
        "https://example.com/ko/blog/post?page=2#comments"
    );
    assert_eq!(
        router.switch_href("https://example.com", "fr"),
        "https://example.com/fr/"
    );
}

#[test]
fn project_pages_base_is_inferred_from_locale_position() {
    let router = router_with(|_| {});
    let resolution = router.inspect("/my-repo/en/docs/", None);
    assert_eq!(resolution.base_path, "/my-repo/");
    assert_eq!(resolution.remaining_path, "/docs/");
    assert_eq!(router.switch_href("/my-repo/en/docs/", "ja"), "/my-repo/ja/docs/");
    assert_eq!(router.switch_href("/my-repo/en/docs/", "zh-hans"), "/my-repo/docs/");
}

#[test]
fn query_routing_variant() {
    let router = router_with(|config| {
        config.locale_source = LocaleSource::Query;
        config.query_param = "hl".to_string();
    });
    assert_eq!(router.current_locale("/docs?hl=EN", None).code, "en");
    assert_eq!(router.switch_href("/docs?hl=en&x=1", "de"), "/docs?x=1&hl=de");
    assert_eq!(router.switch_href("/docs?hl=en", "zh-hans"), "/docs");
}

#[test]
fn query_routing_keeps_other_parameters_verbatim() {
    let router = router_with(|config| config.locale_source = LocaleSource::Query);
    let href = "/search?q=a%20b&flag&x=%2F#top";

    let switched = router.switch_href(href, "fr");
    assert_eq!(switched, "/search?q=a%20b&flag&x=%2F&lang=fr#top");
    assert_eq!(router.switch_href(&switched, "zh-hans"), href);
}

#[test]
fn protocol_relative_hrefs_keep_their_host() {
    let router = router_with(|_| {});
    assert_eq!(
        router.switch_href("//cdn.example.com/en/x", "fr"),
        "//cdn.example.com/fr/x"
    );
    assert_eq!(router.inspect("//cdn.example.com/en/x", None).remaining_path, "/x");
}

#[test]
fn stored_first_precedence_overrides_url() {
    let router = router_with(|config| {
        config.persist_preference = true;
        config.precedence = sitelang_core::Precedence::StoredFirst;
    });
    let resolved = router.current_locale("/en/docs", Some("fr"));
    assert_eq!(resolved.code, "fr");
    assert_eq!(resolved.origin, LocaleOrigin::StoredPreference);

    let ignored = router.current_locale("/en/docs", Some("tlh"));
    assert_eq!(ignored.code, "en");
    assert_eq!(ignored.origin, LocaleOrigin::Url);
}

#[test]
fn rtl_locale_reports_direction() {
    let router = router_with(|_| {});
    let resolution = router.inspect("/ar/", None);
    assert_eq!(resolution.document_language.tag, "ar");
    assert_eq!(resolution.document_language.direction, TextDirection::Rtl);
    assert_eq!(router.document_language("zh-hans").tag, "zh-CN");
}
