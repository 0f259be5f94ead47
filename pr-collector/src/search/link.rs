//! `Link` response header parsing.
//!
//! GitHub paginates search results with a header such as
//! `<https://api.github.com/search/issues?page=2>; rel="next", <...>; rel="last"`.

use http::header::LINK;
use http::HeaderMap;

/// Returns the target of the `rel="next"` link, if the response has one.
#[must_use]
pub fn extract_next_url(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(LINK)?.to_str().ok()?;
    find_relation(value, "next").map(str::to_string)
}

/// Finds the target URL of the link tagged with `relation`.
fn find_relation<'a>(value: &'a str, relation: &str) -> Option<&'a str> {
    let mut rest = value;

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let end = after.find('>')?;
        let target = &after[..end];

        let tail = &after[end + 1..];
        let params_end = tail.find('<').unwrap_or(tail.len());
        let params = tail[..params_end].trim_end().trim_end_matches(',');

        if params.split(';').any(|param| is_relation(param, relation)) {
            return Some(target);
        }

        rest = &tail[params_end..];
    }

    None
}

/// Checks whether a single link parameter is `rel="<relation>"`.
///
/// `rel` may list several space-separated relation types.
fn is_relation(param: &str, relation: &str) -> bool {
    let Some((key, value)) = param.split_once('=') else {
        return false;
    };

    key.trim().eq_ignore_ascii_case("rel")
        && value
            .trim()
            .trim_matches('"')
            .split_whitespace()
            .any(|rel| rel.eq_ignore_ascii_case(relation))
}
