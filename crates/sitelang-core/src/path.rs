//! Path-segment locale detection, stripping, and target URL construction.
//!
//! # Design
//! - A locale occupies exactly one path segment; at most one is removed per strip.
//! - Only the first [`MAX_SCANNED_SEGMENTS`] segments are inspected, for detection and stripping alike.
//! - Every produced path starts with `/` and never contains `//`.

use crate::locale::{SupportedLocales, canonicalize};

/// Number of leading path segments inspected for a locale.
pub const MAX_SCANNED_SEGMENTS: usize = 10;

/// Collapse runs of `/` into a single `/`.
#[must_use]
pub fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_was_slash = false;
    for ch in path.chars() {
        let is_slash = ch == '/';
        if !(is_slash && previous_was_slash) {
            out.push(ch);
        }
        previous_was_slash = is_slash;
    }
    out
}

/// Normalize a URL path: leading `/`, collapsed slashes, `/` when empty.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    collapse_slashes(&format!("/{}", path.trim()))
}

/// Normalize a base-path declaration to `/segment/.../`.
///
/// Absolute URLs (`https://host/app/`) and protocol-relative ones are reduced to
/// their path; query and fragment are dropped. Blank input yields `/`.
#[must_use]
pub fn normalize_base(raw: &str) -> String {
    let (_, without_origin) = split_origin(raw.trim());
    let path = without_origin
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    collapse_slashes(&format!("/{path}/"))
}

/// Split `scheme://authority` or a protocol-relative `//authority` off `href`.
///
/// A scheme only counts when no `/` precedes its `://`. The remainder is empty
/// when the href names a bare origin.
pub(crate) fn split_origin(href: &str) -> (Option<&str>, &str) {
    let authority_start = match href.find("://") {
        Some(index) if !href[..index].contains('/') => index + 3,
        _ if href.starts_with("//") => 2,
        _ => return (None, href),
    };
    match href[authority_start..].find('/') {
        Some(offset) => {
            let (origin, rest) = href.split_at(authority_start + offset);
            (Some(origin), rest)
        }
        None => (Some(href), ""),
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn join_base(parts: &[&str]) -> String {
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", parts.join("/"))
    }
}

/// Work out the application base path.
///
/// An explicit declaration wins. Otherwise, when the path carries a supported
/// locale segment, the base is every segment before it. Otherwise `/`.
#[must_use]
pub fn infer_base_path(declared: Option<&str>, path: &str, supported: &SupportedLocales) -> String {
    if let Some(declared) = declared.map(str::trim).filter(|value| !value.is_empty()) {
        return normalize_base(declared);
    }

    let scanned: Vec<&str> = segments(path).take(MAX_SCANNED_SEGMENTS).collect();
    scanned
        .iter()
        .position(|segment| supported.contains(segment))
        .map_or_else(|| "/".to_string(), |index| join_base(&scanned[..index]))
}

/// First supported locale among the leading path segments, canonicalized.
#[must_use]
pub fn detect_locale_from_path(path: &str, supported: &SupportedLocales) -> Option<String> {
    segments(path)
        .take(MAX_SCANNED_SEGMENTS)
        .find_map(|segment| supported.match_code(segment))
}

/// Remove the first supported locale segment from `path`.
///
/// The trailing slash survives when the original had one, an emptied path
/// collapses to `/`, and repeated slashes are collapsed.
#[must_use]
pub fn strip_locale_from_path(path: &str, supported: &SupportedLocales) -> String {
    let normalized = normalize_path(path);
    let trailing_slash = normalized.len() > 1 && normalized.ends_with('/');

    let mut removed = false;
    let mut kept = Vec::new();
    for (index, segment) in segments(&normalized).enumerate() {
        if !removed && index < MAX_SCANNED_SEGMENTS && supported.contains(segment) {
            removed = true;
            continue;
        }
        kept.push(segment);
    }

    if kept.is_empty() {
        return "/".to_string();
    }
    let mut out = format!("/{}", kept.join("/"));
    if trailing_slash {
        out.push('/');
    }
    out
}

/// Remainder of `path` below `base`, or `None` when `path` lies outside it.
#[must_use]
pub fn relative_to_base(path: &str, base: &str) -> Option<String> {
    let path = normalize_path(path);
    let base = normalize_base(base);
    if base == "/" {
        return Some(path);
    }
    if let Some(rest) = path.strip_prefix(&base) {
        return Some(format!("/{rest}"));
    }
    (path == base.trim_end_matches('/')).then(|| "/".to_string())
}

/// Build the path for `target_locale`.
///
/// With `use_root_for_default` and a target equal to the default, the result
/// is `base + remaining`; otherwise `base + target + "/" + remaining`. An empty
/// target is treated as the default. Repeated slashes are collapsed.
#[must_use]
pub fn build_target_url(
    base_path: &str,
    remaining_path: &str,
    target_locale: &str,
    default_locale: &str,
    use_root_for_default: bool,
) -> String {
    let base = normalize_base(base_path);
    let remaining = remaining_path.trim().trim_start_matches('/');
    let default = canonicalize(default_locale);
    let mut target = canonicalize(target_locale);
    if target.is_empty() {
        target = default.clone();
    }

    let joined = if use_root_for_default && target == default {
        format!("{base}{remaining}")
    } else {
        format!("{base}{target}/{remaining}")
    };
    collapse_slashes(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported() -> SupportedLocales {
        SupportedLocales::from_codes(["en", "zh-hans", "zh-hant", "ja", "fr", "de"])
    }

    #[test]
    fn collapse_and_normalize_remove_doubled_slashes() {
        assert_eq!(collapse_slashes("//a///b/"), "/a/b/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("docs//guide"), "/docs/guide");
    }

    #[test]
    fn normalize_base_handles_declarations() {
        assert_eq!(normalize_base("/pages/app"), "/pages/app/");
        assert_eq!(normalize_base("pages//app/"), "/pages/app/");
        assert_eq!(normalize_base("https://example.com/site/"), "/site/");
        assert_eq!(normalize_base("https://example.com"), "/");
        assert_eq!(normalize_base("//cdn.example.com/app?v=1"), "/app/");
        assert_eq!(normalize_base("   "), "/");
    }

    #[test]
    fn base_path_prefers_declaration_then_locale_position() {
        let set = supported();
        assert_eq!(
            infer_base_path(Some("/pages/app"), "/en/pages/app/x", &set),
            "/pages/app/"
        );
        assert_eq!(infer_base_path(Some("  "), "/site/en/docs", &set), "/site/");
        assert_eq!(infer_base_path(None, "/en/docs", &set), "/");
        assert_eq!(infer_base_path(None, "/docs/guide", &set), "/");
    }

    #[test]
    fn detect_returns_first_canonical_match() {
        let set = supported();
        assert_eq!(
            detect_locale_from_path("/site/ZH_Hant/docs/en", &set).as_deref(),
            Some("zh-hant")
        );
        assert_eq!(detect_locale_from_path("/", &set), None);
    }

    #[test]
    fn detect_is_bounded_to_leading_segments() {
        let set = supported();
        let deep = "/1/2/3/4/5/6/7/8/9/10/en";
        assert_eq!(detect_locale_from_path(deep, &set), None);
        assert_eq!(strip_locale_from_path(deep, &set), deep);
    }

    #[test]
    fn strip_removes_one_segment_and_keeps_trailing_slash() {
        let set = supported();
        assert_eq!(strip_locale_from_path("/en/docs/guide", &set), "/docs/guide");
        assert_eq!(strip_locale_from_path("/en/docs/", &set), "/docs/");
        assert_eq!(strip_locale_from_path("/en/", &set), "/");
        assert_eq!(strip_locale_from_path("/en", &set), "/");
        assert_eq!(strip_locale_from_path("//en//fr/x", &set), "/fr/x");
    }

    #[test]
    fn relative_to_base_strips_prefix() {
        assert_eq!(
            relative_to_base("/pages/app/feedback", "/pages/app/").as_deref(),
            Some("/feedback")
        );
        assert_eq!(
            relative_to_base("/pages/app", "/pages/app/").as_deref(),
            Some("/")
        );
        assert_eq!(relative_to_base("/docs", "/").as_deref(), Some("/docs"));
        assert_eq!(relative_to_base("/other/page", "/pages/app/"), None);
    }

    #[test]
    fn build_target_url_places_or_omits_segment() {
        assert_eq!(
            build_target_url("/", "/docs/guide", "fr", "zh-hans", true),
            "/fr/docs/guide"
        );
        assert_eq!(
            build_target_url("/", "/docs/guide", "ZH_Hans", "zh-hans", true),
            "/docs/guide"
        );
        assert_eq!(
            build_target_url("/", "/docs/guide", "zh-hans", "zh-hans", false),
            "/zh-hans/docs/guide"
        );
        assert_eq!(build_target_url("/", "/", "de", "zh-hans", true), "/de/");
        assert_eq!(build_target_url("/site", "", "", "en", true), "/site/");
    }
}
