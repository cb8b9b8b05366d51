//! Sample catalog data for local development.

use movievault_core::movie::Movie;

fn movie(
    title: &str,
    genre: &[&str],
    year: i32,
    rating: f64,
    popularity: i32,
    description: Option<&str>,
) -> Movie {
    Movie::new(
        title,
        genre.iter().map(|g| g.to_string()).collect(),
        year,
        rating,
        popularity,
        description.map(|d| d.to_string()),
    )
    .expect("sample movie data is valid")
}

/// Returns the demo catalog used to seed an empty store at startup.
///
/// Large enough that the popularity and recommendation listings (which skip
/// the top entries) both return something.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        movie(
            "The Dark Knight",
            &["Action", "Crime"],
            2008,
            9.0,
            98,
            Some("Batman faces the Joker in Gotham City"),
        ),
        movie(
            "Inception",
            &["Sci-Fi", "Action"],
            2010,
            8.8,
            95,
            Some("A thief steals corporate secrets through dream-sharing"),
        ),
        movie(
            "Interstellar",
            &["Sci-Fi", "Drama"],
            2014,
            8.6,
            92,
            Some("Explorers travel through a wormhole in search of a new home"),
        ),
        movie(
            "Parasite",
            &["Thriller", "Drama"],
            2019,
            8.5,
            88,
            Some("A poor family schemes its way into a wealthy household"),
        ),
        movie("The Matrix", &["Sci-Fi", "Action"], 1999, 8.7, 85, None),
        movie(
            "Spirited Away",
            &["Animation", "Fantasy"],
            2001,
            8.6,
            80,
            Some("A girl wanders into a world of spirits"),
        ),
        movie("Heat", &["Crime", "Drama"], 1995, 8.3, 74, None),
        movie(
            "Arrival",
            &["Sci-Fi", "Drama"],
            2016,
            7.9,
            70,
            Some("A linguist deciphers an alien language"),
        ),
        movie("Casablanca", &["Romance", "Drama"], 1942, 8.5, 62, None),
        movie(
            "Alien",
            &["Horror", "Sci-Fi"],
            1979,
            8.5,
            58,
            Some("The crew of the Nostromo answers a distress call"),
        ),
        movie("Whiplash", &["Drama", "Music"], 2014, 8.5, 54, None),
        movie(
            "Blade Runner",
            &["Sci-Fi", "Thriller"],
            1982,
            8.1,
            47,
            Some("A blade runner hunts replicants in Los Angeles"),
        ),
    ]
}
