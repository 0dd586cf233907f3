//! Search-results retrieval and rank resolution.
//!
//! [`SerpApiClient`] fetches Google organic results through `SerpApi`;
//! [`normalize`] turns raw results and user-entered sites into comparable
//! strings; [`rank`] locates a target domain or URL within the results.

pub mod client;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod rank;
pub mod types;

pub use client::SerpApiClient;
pub use error::SerpError;
pub use normalize::{
    extract_domain, is_part_of_site, normalize_domain, normalize_serp_results, page_number,
    url_candidate,
};
pub use provider::SerpProvider;
pub use rank::{find_all_domain_positions, find_domain_rank, find_url_rank, DomainHit, RankMatch};
pub use types::{RawOrganicResult, SearchResultEntry, SerpQuery};
