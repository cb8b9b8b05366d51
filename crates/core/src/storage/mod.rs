mod error;
mod http_mapping;
mod query;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use query::{matches_criteria, sort_movies};
pub use traits::MovieRepository;
pub use types::{
    normalize_limit, SearchCriteria, SortDirection, SortField, DEFAULT_LIST_LIMIT,
    DEFAULT_SEARCH_LIMIT, RECOMMENDATION_SKIP,
};
