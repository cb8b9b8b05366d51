use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// The earliest release year accepted for a movie record.
pub const MIN_YEAR: i32 = 1900;

/// A movie record in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Opaque identifier assigned by the store on creation.
    pub id: Option<String>,
    pub title: String,
    /// Ordered list of genres; at least one non-empty entry.
    pub genre: Vec<String>,
    pub year: i32,
    /// Expected 0-10, not enforced at entity level.
    pub rating: f64,
    pub popularity: i32,
    pub description: Option<String>,
}

impl Movie {
    /// Creates a new movie, validating its construction invariants.
    ///
    /// The title is stored trimmed. Construction fails atomically with a
    /// [`ValidationError`] when the title is blank, the genre list has no
    /// non-empty entry, or the year falls outside `[1900, current year + 1]`.
    pub fn new(
        title: impl Into<String>,
        genre: Vec<String>,
        year: i32,
        rating: f64,
        popularity: i32,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        if !genre.iter().any(|g| !g.trim().is_empty()) {
            return Err(ValidationError::EmptyGenre);
        }

        let max = Utc::now().year() + 1;
        if year < MIN_YEAR || year > max {
            return Err(ValidationError::YearOutOfRange { year, max });
        }

        Ok(Self {
            id: None,
            title,
            genre,
            year,
            rating,
            popularity,
            description,
        })
    }

    /// Sets a specific ID for this movie (assigned by the store, or for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns a copy of this movie with the patch's fields applied.
    ///
    /// Only explicitly supplied fields are overwritten; the result is
    /// re-validated, so a patch can never produce an invalid record. The id is
    /// carried over unchanged.
    pub fn patched(&self, patch: &MoviePatch) -> Result<Movie, ValidationError> {
        let mut movie = Movie::new(
            patch.title.clone().unwrap_or_else(|| self.title.clone()),
            patch.genre.clone().unwrap_or_else(|| self.genre.clone()),
            patch.year.unwrap_or(self.year),
            patch.rating.unwrap_or(self.rating),
            patch.popularity.unwrap_or(self.popularity),
            patch
                .description
                .clone()
                .or_else(|| self.description.clone()),
        )?;
        movie.id = self.id.clone();
        Ok(movie)
    }
}

/// A partial update for a movie record.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub genre: Option<Vec<String>>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub popularity: Option<i32>,
    pub description: Option<String>,
}
