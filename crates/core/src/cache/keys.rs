//! Deterministic cache key derivation.
//!
//! Every key is namespaced under [`KEY_PREFIX`] and colon-joined. The layout is
//! `movieapi:movies:<category>:<params...>`, which external cache-flush tooling
//! relies on, so the prefix and field order must stay stable.

use std::fmt::Display;

use crate::storage::SearchCriteria;

/// Stable namespace prefix for every movie-catalog cache key.
pub const KEY_PREFIX: &str = "movieapi:movies";

/// Returns the cache key for the whole-collection listing.
pub fn all_movies_key() -> String {
    format!("{KEY_PREFIX}:all")
}

/// Returns the cache key for a single movie by ID.
pub fn movie_id_key(id: &str) -> String {
    format!("{KEY_PREFIX}:id:{id}")
}

/// Returns the cache key for a search result.
///
/// Fields are encoded in a fixed order (query, genre, yearFrom, yearTo,
/// popularity, rating, orderBy, orderDirection, limit), with absent fields as
/// empty segments. Criteria are normalized at construction (terms trimmed,
/// empty terms cleared, non-positive limits defaulted), so field-wise equal
/// criteria always produce the same key.
pub fn search_key(criteria: &SearchCriteria) -> String {
    format!(
        "{KEY_PREFIX}:search:{}:{}:{}:{}:{}:{}:{}:{}:{}",
        opt(&criteria.query),
        opt(&criteria.genre),
        opt(&criteria.year_from),
        opt(&criteria.year_to),
        opt(&criteria.popularity),
        opt(&criteria.rating),
        criteria.order_by.map(|f| f.as_str()).unwrap_or_default(),
        criteria.order_direction.as_str(),
        criteria.limit,
    )
}

/// Returns the pattern matching every search-result cache key.
pub fn search_pattern() -> String {
    format!("{KEY_PREFIX}:search:*")
}

/// Returns the cache key for a popular-movies listing.
///
/// The limit must already be normalized so that a non-positive request and the
/// default share one entry.
pub fn popular_key(limit: i64) -> String {
    format!("{KEY_PREFIX}:popular:{limit}")
}

/// Returns the cache key for a recommendations listing.
pub fn recommendations_key(limit: i64) -> String {
    format!("{KEY_PREFIX}:reco:{limit}")
}

fn opt<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}
