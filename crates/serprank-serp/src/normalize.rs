//! Canonicalization of user-entered sites and SERP links.
//!
//! Everything here is infallible: malformed input degrades to a best-effort
//! string rather than an error, so a single odd link never aborts a lookup.

use url::Url;

use crate::types::{RawOrganicResult, SearchResultEntry};

/// Results shown per Google page, used for [`page_number`].
const RESULTS_PER_PAGE: u32 = 10;

/// Extracts a plain domain such as `"example.com"` from a URL.
///
/// The host is lowercased, internationalized names are kept in their
/// Unicode spelling, and a leading `www.` is removed. Input that does not
/// parse as an absolute URL falls back to a string split.
#[must_use]
pub fn extract_domain(url: &str) -> String {
    let host = Url::parse(url.trim())
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .unwrap_or_else(|| fallback_host(url));
    strip_www(&unicode_host(&host)).to_string()
}

/// Normalizes what a user typed as "their site" into a domain.
///
/// `example.com`, `www.example.com`, `https://www.example.com/path`,
/// `example.com:8080` and `example.com/page` all become `"example.com"`.
/// Input without a scheme goes through the same authority split as
/// [`extract_domain`], so both spellings of a site agree.
#[must_use]
pub fn normalize_domain(input: &str) -> String {
    let text = input.trim().to_lowercase();

    if text.starts_with("http://") || text.starts_with("https://") {
        return extract_domain(&text);
    }

    strip_www(&unicode_host(&fallback_host(&text))).to_string()
}

/// Builds the URL used for the exact-URL lookup from the site input.
///
/// Full URLs are used as typed; a bare domain becomes `https://<domain>`.
#[must_use]
pub fn url_candidate(site_input: &str) -> String {
    let raw = site_input.trim();
    let lower = raw.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw.trim_end_matches('/'))
    }
}

/// Returns `true` when `domain` is `site` itself or one of its subdomains.
///
/// Both arguments must already be normalized.
#[must_use]
pub fn is_part_of_site(domain: &str, site: &str) -> bool {
    domain
        .strip_suffix(site)
        .is_some_and(|rest| rest.is_empty() || rest.ends_with('.'))
}

/// Google results page a position lands on: `ceil(position / 10)`.
#[must_use]
pub fn page_number(position: u32) -> u32 {
    position.div_ceil(RESULTS_PER_PAGE)
}

/// Cleans raw provider results into [`SearchResultEntry`] values.
///
/// Entries without a non-empty `link` or a positive `position` are dropped.
/// Missing titles and snippets become empty strings. The output is sorted by
/// position; ties keep their provider order.
#[must_use]
pub fn normalize_serp_results(raw: Vec<RawOrganicResult>) -> Vec<SearchResultEntry> {
    let total = raw.len();
    let mut cleaned: Vec<SearchResultEntry> = raw
        .into_iter()
        .filter_map(|r| {
            let link = r.link.filter(|l| !l.is_empty())?;
            let position = r.position.and_then(|p| u32::try_from(p).ok()).filter(|p| *p > 0)?;
            let domain = extract_domain(&link);
            Some(SearchResultEntry {
                position,
                link,
                title: r.title.unwrap_or_default(),
                snippet: r.snippet.unwrap_or_default(),
                domain,
            })
        })
        .collect();

    if cleaned.len() < total {
        tracing::debug!(
            dropped = total - cleaned.len(),
            kept = cleaned.len(),
            "dropped SERP entries without link or position"
        );
    }

    cleaned.sort_by_key(|entry| entry.position);
    cleaned
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Host guess for strings `Url` rejects: drop any scheme and userinfo, then
/// cut at the first path, query, fragment or port delimiter.
fn fallback_host(input: &str) -> String {
    let text = input.trim().to_lowercase();
    let rest = text.split_once("://").map_or(text.as_str(), |(_, rest)| rest);
    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    if host.starts_with('[') {
        // IPv6 literal: keep the brackets, drop the port.
        return host
            .find(']')
            .map_or(host, |end| &host[..=end])
            .to_string();
    }
    host.split(':').next().unwrap_or_default().to_string()
}

/// `Url` stores internationalized hosts as punycode while a typed site keeps
/// its Unicode spelling; map both to Unicode so they compare equal. Hosts
/// that are not domain names (IP literals, garbage) are returned unchanged.
fn unicode_host(host: &str) -> String {
    if host.is_ascii() && !host.contains("xn--") {
        return host.to_string();
    }
    let unicode = url::quirks::domain_to_unicode(host);
    if unicode.is_empty() {
        host.to_string()
    } else {
        unicode
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
