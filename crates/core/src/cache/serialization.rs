//! Pure functions for serializing domain types to/from cache bytes.
//!
//! JSON keeps cached values human-readable and inspectable. These functions
//! are the single serialization authority shared by the caching layer and
//! storage mapping code, in place of any process-global serializer state.

use thiserror::Error;

use crate::movie::Movie;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a movie to JSON bytes.
pub fn serialize_movie(movie: &Movie) -> Result<Vec<u8>> {
    serde_json::to_vec(movie).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a movie.
pub fn deserialize_movie(bytes: &[u8]) -> Result<Movie> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a slice of movies to JSON bytes.
pub fn serialize_movies(movies: &[Movie]) -> Result<Vec<u8>> {
    serde_json::to_vec(movies).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a vector of movies.
pub fn deserialize_movies(bytes: &[u8]) -> Result<Vec<Movie>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie(title: &str) -> Movie {
        Movie::new(
            title,
            vec!["Sci-Fi".to_string()],
            2021,
            7.2,
            40,
            Some("A star goes nova".to_string()),
        )
        .unwrap()
        .with_id("abc-123")
    }

    #[test]
    fn test_roundtrip_movie() {
        let movie = sample_movie("Nova");

        let bytes = serialize_movie(&movie).expect("serialize should succeed");
        let deserialized = deserialize_movie(&bytes).expect("deserialize should succeed");

        assert_eq!(movie, deserialized);
    }

    #[test]
    fn test_roundtrip_movies_vec() {
        let movies = vec![sample_movie("Nova"), sample_movie("Solaris")];

        let bytes = serialize_movies(&movies).expect("serialize should succeed");
        let deserialized = deserialize_movies(&bytes).expect("deserialize should succeed");

        assert_eq!(movies, deserialized);
    }

    #[test]
    fn test_serialize_empty_movies_vec() {
        let movies: Vec<Movie> = vec![];

        let bytes = serialize_movies(&movies).expect("serialize should succeed");
        assert_eq!(bytes, b"[]");
        assert!(deserialize_movies(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_movie_malformed_bytes() {
        let result = deserialize_movie(b"not valid json");

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_deserialize_movies_malformed_bytes() {
        let result = deserialize_movies(b"{\"invalid\": true}");

        assert!(matches!(
            result,
            Err(SerializationError::DeserializeFailed(_))
        ));
    }

    #[test]
    fn test_movie_without_optional_fields() {
        let movie = Movie::new("Nova", vec!["Sci-Fi".to_string()], 2021, 7.2, 40, None).unwrap();

        let bytes = serialize_movie(&movie).expect("serialize should succeed");
        let deserialized = deserialize_movie(&bytes).expect("deserialize should succeed");

        assert!(deserialized.id.is_none());
        assert!(deserialized.description.is_none());
        assert_eq!(deserialized.title, "Nova");
    }
}
