/// Default number of results for `search` when the requested limit is not positive.
pub const DEFAULT_SEARCH_LIMIT: i64 = 50;

/// Default number of results for popular/recommendation listings.
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// Number of top-popularity records skipped by the recommendation heuristic.
pub const RECOMMENDATION_SKIP: usize = 5;

/// Normalizes a caller-supplied limit, substituting `default` for non-positive
/// values.
///
/// Shared by store implementations and cache key derivation so that a
/// non-positive limit and the default limit map to one cache entry and one
/// behavior.
pub fn normalize_limit(limit: i64, default: i64) -> i64 {
    if limit <= 0 {
        default
    } else {
        limit
    }
}

/// Fields a search result can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Year,
    Popularity,
    Rating,
}

impl SortField {
    /// Parses a sort field name, case-insensitively.
    ///
    /// Unrecognized values yield `None`, which leaves results unsorted.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" => Some(Self::Title),
            "year" => Some(Self::Year),
            "popularity" => Some(Self::Popularity),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Year => "year",
            Self::Popularity => "popularity",
            Self::Rating => "rating",
        }
    }
}

/// Direction of a sorted search result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Parses a direction token. Anything other than `asc` yields descending.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    /// Returns the canonical lowercase token for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// An immutable description of a search request.
///
/// Every filter field is optional; only the predicates present participate in
/// the query conjunction. The same value drives both query construction and
/// cache key derivation, so the builder normalizes its inputs up front: textual
/// terms are trimmed with empty strings becoming `None`, and a non-positive
/// limit becomes [`DEFAULT_SEARCH_LIMIT`]. Two field-wise equal criteria always
/// derive the same cache key, regardless of builder call order.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    /// Case-insensitive substring match against title or description.
    pub query: Option<String>,
    /// Case-insensitive substring match against any genre element.
    pub genre: Option<String>,
    /// Inclusive lower bound on release year.
    pub year_from: Option<i32>,
    /// Inclusive upper bound on release year.
    pub year_to: Option<i32>,
    /// Inclusive lower bound on popularity.
    pub popularity: Option<i32>,
    /// Inclusive lower bound on rating.
    pub rating: Option<f64>,
    pub order_by: Option<SortField>,
    pub order_direction: SortDirection,
    pub limit: i64,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            query: None,
            genre: None,
            year_from: None,
            year_to: None,
            popularity: None,
            rating: None,
            order_by: None,
            order_direction: SortDirection::Desc,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchCriteria {
    /// Creates criteria that match everything, with the default limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text term. Trimmed; empty strings clear the field.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = normalize_term(query.into());
        self
    }

    /// Sets the genre term. Trimmed; empty strings clear the field.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = normalize_term(genre.into());
        self
    }

    pub fn with_year_from(mut self, year: i32) -> Self {
        self.year_from = Some(year);
        self
    }

    pub fn with_year_to(mut self, year: i32) -> Self {
        self.year_to = Some(year);
        self
    }

    pub fn with_popularity(mut self, min: i32) -> Self {
        self.popularity = Some(min);
        self
    }

    pub fn with_rating(mut self, min: f64) -> Self {
        self.rating = Some(min);
        self
    }

    pub fn with_order_by(mut self, field: SortField) -> Self {
        self.order_by = Some(field);
        self
    }

    pub fn with_order_direction(mut self, direction: SortDirection) -> Self {
        self.order_direction = direction;
        self
    }

    /// Sets the result limit. Non-positive values become the default.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = normalize_limit(limit, DEFAULT_SEARCH_LIMIT);
        self
    }
}

fn normalize_term(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
