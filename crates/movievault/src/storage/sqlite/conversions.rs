//! Row and column conversions for the SQLite backend.

use movievault_core::movie::Movie;
use movievault_core::storage::RepositoryError;

/// Serializes a genre list to its JSON column representation.
pub fn genre_to_json(genre: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(genre).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Maps a result row to a movie.
///
/// Column order must match `schema::SELECT_MOVIES_BASE`:
/// id, title, genre, year, rating, popularity, description.
pub fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<Movie> {
    let genre_json: String = row.get(2)?;
    let genre: Vec<String> = serde_json::from_str(&genre_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Movie {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        genre,
        year: row.get(3)?,
        rating: row.get(4)?,
        popularity: row.get(5)?,
        description: row.get(6)?,
    })
}
