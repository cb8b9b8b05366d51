//! SQLite schema definitions and SQL query constants.
//!
//! All static SQL used by the SQLite repository lives here; the criteria
//! search statement is the one query assembled dynamically (see
//! `repository::build_search_query`).

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Movies table; genre is a JSON array of genre names
CREATE TABLE IF NOT EXISTS movies (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    genre TEXT NOT NULL,
    year INTEGER NOT NULL,
    rating REAL NOT NULL,
    popularity INTEGER NOT NULL,
    description TEXT
);

-- Indexes for popularity listings and year-range searches
CREATE INDEX IF NOT EXISTS idx_movies_popularity ON movies(popularity);
CREATE INDEX IF NOT EXISTS idx_movies_year ON movies(year);
"#;

/// Shared column list, kept in sync with `conversions::row_to_movie`.
pub const SELECT_MOVIES_BASE: &str =
    "SELECT id, title, genre, year, rating, popularity, description FROM movies";

pub const SELECT_MOVIE_BY_ID: &str = r#"
SELECT id, title, genre, year, rating, popularity, description
FROM movies
WHERE id = ?1
"#;

pub const SELECT_POPULAR: &str = r#"
SELECT id, title, genre, year, rating, popularity, description
FROM movies
ORDER BY popularity DESC
LIMIT ?1
"#;

pub const SELECT_RECOMMENDATIONS: &str = r#"
SELECT id, title, genre, year, rating, popularity, description
FROM movies
ORDER BY popularity DESC
LIMIT ?1 OFFSET ?2
"#;

pub const INSERT_MOVIE: &str = r#"
INSERT INTO movies (id, title, genre, year, rating, popularity, description)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const UPDATE_MOVIE: &str = r#"
UPDATE movies
SET title = ?2, genre = ?3, year = ?4, rating = ?5, popularity = ?6, description = ?7
WHERE id = ?1
"#;

pub const DELETE_MOVIE: &str = r#"
DELETE FROM movies
WHERE id = ?1
"#;
