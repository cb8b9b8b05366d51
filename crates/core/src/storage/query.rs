//! Pure predicate and sort functions for criteria-based queries.
//!
//! These are the reference semantics for `search`: backends that can push
//! filtering into the storage engine must match what these functions compute.

use crate::movie::Movie;

use super::{SearchCriteria, SortDirection, SortField};

/// Returns true if the movie satisfies every predicate present in the criteria.
///
/// Criteria with no predicates match everything.
pub fn matches_criteria(movie: &Movie, criteria: &SearchCriteria) -> bool {
    if let Some(query) = &criteria.query {
        let q = query.to_lowercase();
        let in_title = movie.title.to_lowercase().contains(&q);
        let in_description = movie
            .description
            .as_ref()
            .is_some_and(|d| d.to_lowercase().contains(&q));
        if !in_title && !in_description {
            return false;
        }
    }

    if let Some(genre) = &criteria.genre {
        let g = genre.to_lowercase();
        if !movie.genre.iter().any(|e| e.to_lowercase().contains(&g)) {
            return false;
        }
    }

    if let Some(from) = criteria.year_from {
        if movie.year < from {
            return false;
        }
    }

    if let Some(to) = criteria.year_to {
        if movie.year > to {
            return false;
        }
    }

    if let Some(popularity) = criteria.popularity {
        if movie.popularity < popularity {
            return false;
        }
    }

    if let Some(rating) = criteria.rating {
        if movie.rating < rating {
            return false;
        }
    }

    true
}

/// Sorts movies by the given field and direction. The sort is stable.
pub fn sort_movies(movies: &mut [Movie], field: SortField, direction: SortDirection) {
    movies.sort_by(|a, b| {
        let ordering = match field {
            SortField::Title => a.title.cmp(&b.title),
            SortField::Year => a.year.cmp(&b.year),
            SortField::Popularity => a.popularity.cmp(&b.popularity),
            SortField::Rating => a.rating.total_cmp(&b.rating),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, genre: &[&str], year: i32, rating: f64, popularity: i32) -> Movie {
        Movie::new(
            title,
            genre.iter().map(|g| g.to_string()).collect(),
            year,
            rating,
            popularity,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let m = movie("Alien", &["Horror"], 1979, 8.5, 70);
        assert!(matches_criteria(&m, &SearchCriteria::new()));
    }

    #[test]
    fn test_query_matches_title_case_insensitive() {
        let m = movie("The Matrix", &["Sci-Fi"], 1999, 8.7, 88);
        let criteria = SearchCriteria::new().with_query("matrix");
        assert!(matches_criteria(&m, &criteria));

        let criteria = SearchCriteria::new().with_query("MATRIX");
        assert!(matches_criteria(&m, &criteria));

        let criteria = SearchCriteria::new().with_query("matriz");
        assert!(!matches_criteria(&m, &criteria));
    }

    #[test]
    fn test_query_matches_description() {
        let mut m = movie("Arrival", &["Sci-Fi"], 2016, 7.9, 65);
        m.description = Some("A linguist deciphers an alien language".to_string());

        let criteria = SearchCriteria::new().with_query("LINGUIST");
        assert!(matches_criteria(&m, &criteria));
    }

    #[test]
    fn test_query_without_description_does_not_match() {
        let m = movie("Arrival", &["Sci-Fi"], 2016, 7.9, 65);
        let criteria = SearchCriteria::new().with_query("linguist");
        assert!(!matches_criteria(&m, &criteria));
    }

    #[test]
    fn test_genre_substring_match_on_any_element() {
        let m = movie("Heat", &["Crime", "Drama"], 1995, 8.3, 60);

        assert!(matches_criteria(&m, &SearchCriteria::new().with_genre("dra")));
        assert!(matches_criteria(&m, &SearchCriteria::new().with_genre("CRIME")));
        assert!(!matches_criteria(&m, &SearchCriteria::new().with_genre("comedy")));
    }

    #[test]
    fn test_year_bounds_are_inclusive_and_independent() {
        let m = movie("Heat", &["Crime"], 1995, 8.3, 60);

        assert!(matches_criteria(&m, &SearchCriteria::new().with_year_from(1995)));
        assert!(matches_criteria(&m, &SearchCriteria::new().with_year_to(1995)));
        assert!(!matches_criteria(&m, &SearchCriteria::new().with_year_from(1996)));
        assert!(!matches_criteria(&m, &SearchCriteria::new().with_year_to(1994)));
        assert!(matches_criteria(
            &m,
            &SearchCriteria::new().with_year_from(1990).with_year_to(1999)
        ));
    }

    #[test]
    fn test_popularity_and_rating_lower_bounds() {
        let m = movie("Heat", &["Crime"], 1995, 8.3, 60);

        assert!(matches_criteria(&m, &SearchCriteria::new().with_popularity(60)));
        assert!(!matches_criteria(&m, &SearchCriteria::new().with_popularity(61)));
        assert!(matches_criteria(&m, &SearchCriteria::new().with_rating(8.3)));
        assert!(!matches_criteria(&m, &SearchCriteria::new().with_rating(8.4)));
    }

    #[test]
    fn test_conjunction_of_predicates() {
        let m = movie("Heat", &["Crime", "Drama"], 1995, 8.3, 60);

        let criteria = SearchCriteria::new()
            .with_genre("crime")
            .with_year_from(1990)
            .with_rating(8.0);
        assert!(matches_criteria(&m, &criteria));

        let criteria = criteria.with_popularity(90);
        assert!(!matches_criteria(&m, &criteria));
    }

    #[test]
    fn test_sort_by_popularity_desc() {
        let mut movies = vec![
            movie("A", &["x"], 2000, 5.0, 10),
            movie("B", &["x"], 2001, 6.0, 30),
            movie("C", &["x"], 2002, 7.0, 20),
        ];
        sort_movies(&mut movies, SortField::Popularity, SortDirection::Desc);
        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_by_title_asc() {
        let mut movies = vec![
            movie("Casablanca", &["x"], 1942, 8.5, 40),
            movie("Alien", &["x"], 1979, 8.5, 70),
            movie("Blade Runner", &["x"], 1982, 8.1, 55),
        ];
        sort_movies(&mut movies, SortField::Title, SortDirection::Asc);
        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Alien", "Blade Runner", "Casablanca"]);
    }

    #[test]
    fn test_sort_by_rating_desc() {
        let mut movies = vec![
            movie("A", &["x"], 2000, 6.4, 10),
            movie("B", &["x"], 2001, 9.1, 30),
            movie("C", &["x"], 2002, 7.7, 20),
        ];
        sort_movies(&mut movies, SortField::Rating, SortDirection::Desc);
        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_by_year_asc() {
        let mut movies = vec![
            movie("A", &["x"], 2010, 6.4, 10),
            movie("B", &["x"], 1990, 9.1, 30),
            movie("C", &["x"], 2000, 7.7, 20),
        ];
        sort_movies(&mut movies, SortField::Year, SortDirection::Asc);
        let years: Vec<_> = movies.iter().map(|m| m.year).collect();
        assert_eq!(years, vec![1990, 2000, 2010]);
    }
}
