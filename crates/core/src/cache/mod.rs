mod error;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{
    all_movies_key, movie_id_key, popular_key, recommendations_key, search_key, search_pattern,
    KEY_PREFIX,
};
pub use patterns::pattern_matches;
pub use serialization::{
    deserialize_movie, deserialize_movies, serialize_movie, serialize_movies, SerializationError,
};
pub use traits::Cache;
