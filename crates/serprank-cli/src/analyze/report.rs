//! Plain data rendered by the `analyze` command.

use serde::Serialize;
use serprank_analyzer::AnalysisResult;
use serprank_serp::{is_part_of_site, page_number, DomainHit, RankMatch, SearchResultEntry};

/// Effective ranks at or above this position skip the explanation step.
pub const TOP_RANK_CUTOFF: u32 = 3;

/// A ranked URL with its Google results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedUrl {
    pub position: u32,
    pub page: u32,
    pub url: String,
}

impl RankedUrl {
    #[must_use]
    pub fn new(position: u32, url: &str) -> Self {
        Self {
            position,
            page: page_number(position),
            url: url.to_string(),
        }
    }

    /// `None` unless the lookup found both a position and a URL.
    #[must_use]
    pub fn from_match(found: &RankMatch) -> Option<Self> {
        match (found.rank, found.url.as_deref()) {
            (Some(position), Some(url)) => Some(Self::new(position, url)),
            _ => None,
        }
    }
}

impl From<&DomainHit> for RankedUrl {
    fn from(hit: &DomainHit) -> Self {
        Self::new(hit.position, &hit.url)
    }
}

/// One SERP row as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerpRow {
    pub position: u32,
    pub page: u32,
    pub title: String,
    pub domain: String,
    pub link: String,
    pub is_your_site: bool,
}

impl SerpRow {
    #[must_use]
    pub fn from_entry(entry: &SearchResultEntry, site_domain: &str) -> Self {
        Self {
            position: entry.position,
            page: page_number(entry.position),
            title: entry.title.clone(),
            domain: entry.domain.clone(),
            link: entry.link.clone(),
            is_your_site: is_part_of_site(&entry.domain, site_domain),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Explanation {
    /// The site already ranks within the top [`TOP_RANK_CUTOFF`].
    AlreadyTop { rank: u32 },
    /// Model-written (or fallback) advice.
    Summary { text: String },
}

/// Everything one `analyze` run found.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub keyword: String,
    pub site_input: String,
    pub country: String,
    pub language: String,
    /// Number of results requested from the provider.
    pub depth: u32,
    /// The URL looked up for the URL-level rank.
    pub url_candidate: String,
    /// Normalized domain used for the domain-level rank.
    pub domain: String,
    pub url_rank: Option<RankedUrl>,
    /// First appearance of the domain.
    pub domain_rank: Option<RankedUrl>,
    /// Every further appearance of the domain, ascending.
    pub other_domain_hits: Vec<RankedUrl>,
    pub serp_rows: Vec<SerpRow>,
    pub analysis: AnalysisResult,
    /// Domain rank if found, else URL rank.
    pub effective_rank: Option<u32>,
    pub explanation: Explanation,
}
