//! Query-parameter routing: the locale travels as `?lang=<code>` instead of a path segment.

use url::form_urlencoded;

use crate::locale::SupportedLocales;

/// Default query parameter carrying the locale.
pub const DEFAULT_QUERY_PARAM: &str = "lang";

/// Supported locale named by `param` in `query`, canonicalized.
///
/// Only the first occurrence of the parameter is considered.
#[must_use]
pub fn detect_locale_from_query(
    query: &str,
    param: &str,
    supported: &SupportedLocales,
) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key.as_ref() == param)
        .and_then(|(_, value)| supported.match_code(&value))
}

/// Rewrite `query` so `param` carries `locale`, or drop it when `locale` is `None`.
///
/// Other pairs are kept byte-for-byte in their original order; only the locale
/// pair is encoded and appended last.
#[must_use]
pub fn set_locale_in_query(query: &str, param: &str, locale: Option<&str>) -> String {
    let mut pairs: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty() && !names_param(pair, param))
        .map(str::to_string)
        .collect();
    if let Some(locale) = locale {
        pairs.push(
            form_urlencoded::Serializer::new(String::new())
                .append_pair(param, locale)
                .finish(),
        );
    }
    pairs.join("&")
}

fn names_param(pair: &str, param: &str) -> bool {
    let raw_key = pair.split_once('=').map_or(pair, |(key, _)| key);
    form_urlencoded::parse(raw_key.as_bytes())
        .next()
        .is_some_and(|(key, _)| key.as_ref() == param)
}
