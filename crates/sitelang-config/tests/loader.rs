//! Loading router configuration from files on disk.

use std::collections::HashMap;

use sitelang_config::{ConfigError, load_languages, load_router, load_router_config};
use sitelang_core::{LocaleSource, Placement};
use sitelang_test_support::fixtures::{SiteFixture, standard_languages_json};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn standard_languages_file_builds_router() {
    let site = SiteFixture::new().expect("fixture");
    let path = site
        .write_languages(&standard_languages_json())
        .expect("languages file");

    let router = load_router(&path, no_env).expect("router");
    assert_eq!(router.default_locale(), "zh-hans");
    assert_eq!(router.supported().len(), 8);
    assert_eq!(router.document_language("zh-hans").tag, "zh-CN");
    assert_eq!(router.switch_href("/en/docs/guide", "fr"), "/fr/docs/guide");
}

#[test]
fn environment_overrides_routing_flags() {
    let site = SiteFixture::new().expect("fixture");
    let path = site
        .write_languages(&standard_languages_json())
        .expect("languages file");
    let env: HashMap<&str, &str> = HashMap::from([
        ("SITELANG_DEFAULT_LOCALE", "en"),
        ("SITELANG_LOCALE_SOURCE", "query"),
        ("SITELANG_PLACEMENT", "site-root"),
        ("SITELANG_BASE_PATH", "/pages/app/"),
        ("SITELANG_PERSIST_PREFERENCE", "yes"),
    ]);

    let config = load_router_config(&path, |key| env.get(key).map(|value| (*value).to_string()))
        .expect("config");
    assert_eq!(config.default_locale, "en");
    assert_eq!(config.locale_source, LocaleSource::Query);
    assert_eq!(config.placement, Placement::SiteRoot);
    assert_eq!(config.base_path.as_deref(), Some("/pages/app/"));
    assert!(config.persist_preference);
}

#[test]
fn missing_file_reports_io_error() {
    let site = SiteFixture::new().expect("fixture");
    let missing = site.root().join("absent.json");
    match load_languages(&missing) {
        Err(ConfigError::Io { operation, path, .. }) => {
            assert_eq!(operation, "read_languages");
            assert_eq!(path, missing);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn malformed_file_reports_parse_error() {
    let site = SiteFixture::new().expect("fixture");
    let path = site.write_languages_raw("[{\"code\": ").expect("raw file");
    assert!(matches!(
        load_languages(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn empty_language_list_is_rejected() {
    let site = SiteFixture::new().expect("fixture");
    let path = site.write_languages_raw("[]").expect("raw file");
    assert!(matches!(
        load_router_config(&path, no_env),
        Err(ConfigError::Router { .. })
    ));
}
