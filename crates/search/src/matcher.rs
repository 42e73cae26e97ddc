//! Hotel filtering by free-text query.

use crate::fuzzy::min_token_distance;
use wanderstay_core::models::Hotel;

/// Default edit-distance tolerance for address tokens.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Candidate lists at least this long are matched in parallel.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 256;

/// Something with a display name and a free-text address.
pub trait Searchable {
    fn name(&self) -> &str;
    fn address(&self) -> &str;
}

impl Searchable for Hotel {
    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self) -> &str {
        &self.address
    }
}

/// Why a candidate was kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The query occurs in the name or address
    Substring,
    /// An address token is within the edit-distance tolerance
    Fuzzy { distance: usize },
}

/// Binary include/exclude filter: substring match on name or address, falling
/// back to edit distance against address tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatcher {
    max_edit_distance: usize,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EDIT_DISTANCE)
    }
}

impl FuzzyMatcher {
    pub fn new(max_edit_distance: usize) -> Self {
        Self { max_edit_distance }
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    /// Match one item against an already normalized (trimmed, lowercased)
    /// query.
    pub fn match_item<T: Searchable + ?Sized>(&self, item: &T, query: &str) -> Option<MatchKind> {
        let address = item.address().to_lowercase();
        if address.contains(query) || item.name().to_lowercase().contains(query) {
            return Some(MatchKind::Substring);
        }

        min_token_distance(&address, query)
            .filter(|&distance| distance <= self.max_edit_distance)
            .map(|distance| MatchKind::Fuzzy { distance })
    }

    /// Keep the candidates matching `query`, in their original order.
    ///
    /// A query that is empty after trimming keeps every candidate.
    pub fn filter<T>(&self, candidates: &[T], query: &str) -> Vec<T>
    where
        T: Searchable + Clone + Send + Sync,
    {
        let Some(query) = normalize_query(query) else {
            return candidates.to_vec();
        };

        let matched = self.collect_matches(candidates, &query);
        tracing::debug!(
            query = %query,
            candidates = candidates.len(),
            matched = matched.len(),
            max_edit_distance = self.max_edit_distance,
            "Filtered candidates"
        );
        matched
    }

    #[cfg(feature = "parallel")]
    fn collect_matches<T>(&self, candidates: &[T], query: &str) -> Vec<T>
    where
        T: Searchable + Clone + Send + Sync,
    {
        use rayon::prelude::*;

        if candidates.len() >= PARALLEL_THRESHOLD {
            candidates
                .par_iter()
                .filter(|item| self.match_item(*item, query).is_some())
                .cloned()
                .collect()
        } else {
            self.collect_sequential(candidates, query)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn collect_matches<T>(&self, candidates: &[T], query: &str) -> Vec<T>
    where
        T: Searchable + Clone + Send + Sync,
    {
        self.collect_sequential(candidates, query)
    }

    fn collect_sequential<T>(&self, candidates: &[T], query: &str) -> Vec<T>
    where
        T: Searchable + Clone,
    {
        candidates
            .iter()
            .filter(|item| {
                let kind = self.match_item(*item, query);
                if let Some(MatchKind::Fuzzy { distance }) = kind {
                    tracing::trace!(name = item.name(), distance, "Fuzzy address match");
                }
                kind.is_some()
            })
            .cloned()
            .collect()
    }
}

/// Trim and lowercase a query; `None` if nothing is left.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Filter hotels with the default tolerance.
pub fn filter_hotels(hotels: &[Hotel], query: &str) -> Vec<Hotel> {
    FuzzyMatcher::default().filter(hotels, query)
}
