//! Glob-style pattern matching for cache keys.
//!
//! `*` matches any sequence of characters, including the empty one. Used by
//! cache backends that cannot delegate pattern deletion to the cache engine.

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use movievault_core::cache::pattern_matches;
///
/// assert!(pattern_matches("movieapi:movies:all", "movieapi:movies:all"));
/// assert!(pattern_matches(
///     "movieapi:movies:search:*",
///     "movieapi:movies:search:nova:::::::desc:50"
/// ));
/// assert!(!pattern_matches("movieapi:movies:search:*", "movieapi:movies:all"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let segments: Vec<&str> = pattern.split('*').collect();

    // No wildcard: exact match only.
    if segments.len() == 1 {
        return pattern == key;
    }

    let mut rest = key;
    let last = segments.len() - 1;

    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }

        if i == 0 {
            // Leading literal must anchor at the start of the key.
            match rest.strip_prefix(segment) {
                Some(remaining) => rest = remaining,
                None => return false,
            }
        } else if i == last {
            // Trailing literal must anchor at the end of what is left.
            return rest.ends_with(segment);
        } else {
            match rest.find(segment) {
                Some(pos) => rest = &rest[pos + segment.len()..],
                None => return false,
            }
        }
    }

    true
}
