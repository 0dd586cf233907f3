//! Position lookups over a cleaned, position-ordered result list.
//!
//! All lookups are ordered linear scans: when several entries match, the
//! earliest one in result order is reported, which is the lowest position.

use serde::Serialize;

use crate::normalize::{is_part_of_site, normalize_domain};
use crate::types::SearchResultEntry;

/// Outcome of a first-match lookup. Both fields are `None` when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankMatch {
    pub rank: Option<u32>,
    pub url: Option<String>,
}

impl RankMatch {
    fn found(entry: &SearchResultEntry) -> Self {
        Self {
            rank: Some(entry.position),
            url: Some(entry.link.clone()),
        }
    }
}

/// One result belonging to the target domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainHit {
    pub position: u32,
    pub url: String,
}

/// Finds where a domain first appears in the results.
///
/// The target is normalized with [`normalize_domain`]; a result matches when
/// its domain equals the target or is a subdomain of it.
#[must_use]
pub fn find_domain_rank(results: &[SearchResultEntry], target_domain: &str) -> RankMatch {
    let target = normalize_domain(target_domain);

    results
        .iter()
        .filter(|entry| !entry.link.is_empty())
        .find(|entry| is_part_of_site(&entry.domain, &target))
        .map(RankMatch::found)
        .unwrap_or_default()
}

/// Returns every position where the domain appears, ascending.
#[must_use]
pub fn find_all_domain_positions(
    results: &[SearchResultEntry],
    target_domain: &str,
) -> Vec<DomainHit> {
    let target = normalize_domain(target_domain);

    let mut hits: Vec<DomainHit> = results
        .iter()
        .filter(|entry| !entry.link.is_empty())
        .filter(|entry| is_part_of_site(&entry.domain, &target))
        .map(|entry| DomainHit {
            position: entry.position,
            url: entry.link.clone(),
        })
        .collect();

    hits.sort_by_key(|hit| hit.position);
    hits
}

/// Finds the position of one specific URL.
///
/// A `www.`-prefixed target gains an `https://` scheme. Both sides are then
/// compared without trailing slashes and without a `www.` host prefix. A
/// result also matches when it is the target followed by a query string
/// (`?` or `/?`), which tolerates appended tracking parameters.
#[must_use]
pub fn find_url_rank(results: &[SearchResultEntry], target_url: &str) -> RankMatch {
    let target_url = target_url.trim();
    if target_url.is_empty() {
        return RankMatch::default();
    }

    let target = if target_url.starts_with("www.") {
        comparable_url(&format!("https://{target_url}"))
    } else {
        comparable_url(target_url)
    };
    let with_query = format!("{target}?");
    let with_slash_query = format!("{target}/?");

    results
        .iter()
        .filter(|entry| !entry.link.is_empty())
        .find(|entry| {
            let link = comparable_url(&entry.link);
            link == target || link.starts_with(&with_query) || link.starts_with(&with_slash_query)
        })
        .map(RankMatch::found)
        .unwrap_or_default()
}

/// Strips trailing slashes and a `www.` host prefix.
fn comparable_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    match trimmed.split_once("://") {
        Some((scheme, rest)) => {
            let rest = rest.strip_prefix("www.").unwrap_or(rest);
            format!("{scheme}://{rest}")
        }
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
#[path = "rank_test.rs"]
mod tests;
