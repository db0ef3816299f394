use rayon::prelude::*;

use crate::models::Movie;

/// How many suggestions the header dropdown shows.
pub const SUGGESTION_LIMIT: usize = 6;

fn matches(movie: &Movie, needle: &str) -> bool {
    movie.title.to_lowercase().contains(needle)
        || movie.description.to_lowercase().contains(needle)
        || movie.genre.iter().any(|g| g.to_lowercase().contains(needle))
}

/// Case-insensitive substring search over title, description and genre
/// tags. A blank query means "search inactive" and yields an empty list;
/// callers that need to tell that apart from zero hits must look at the
/// raw query string, not the result.
pub fn search_movies(movies: &[Movie], query: &str) -> Vec<Movie> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    // par_iter + collect keeps catalog order
    movies
        .par_iter()
        .filter(|m| matches(m, &needle))
        .cloned()
        .collect()
}

/// Header autocomplete: the first few search hits.
pub fn search_suggestions(movies: &[Movie], query: &str) -> Vec<Movie> {
    let mut out = search_movies(movies, query);
    out.truncate(SUGGESTION_LIMIT);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str, description: &str, genre: &[&str]) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            genre: genre.iter().map(|g| g.to_string()).collect(),
            ..Movie::default()
        }
    }

    fn fixture() -> Vec<Movie> {
        vec![
            movie("a", "Neon Horizon", "a courier in a flooded city", &["Sci-Fi", "Thriller"]),
            movie("b", "Paper Planets", "origami worlds", &["Animation", "Family"]),
            movie("c", "Zero Day Protocol", "an air-gapped vault", &["Thriller"]),
        ]
    }

    #[test]
    fn blank_and_whitespace_queries_yield_empty() {
        let movies = fixture();
        assert!(search_movies(&movies, "").is_empty());
        assert!(search_movies(&movies, "   ").is_empty());
    }

    #[test]
    fn zero_hits_is_also_empty_but_query_distinguishes() {
        let movies = fixture();
        let inactive = search_movies(&movies, "");
        let no_hits = search_movies(&movies, "zzzzzz");
        assert_eq!(inactive, no_hits);
        // the caller's discriminator is the raw query, not the results
        assert!("".trim().is_empty());
        assert!(!"zzzzzz".trim().is_empty());
    }

    #[test]
    fn matches_title_description_and_genre() {
        let movies = fixture();
        assert_eq!(search_movies(&movies, "neon")[0].id, "a");
        assert_eq!(search_movies(&movies, "ORIGAMI")[0].id, "b");
        let by_genre = search_movies(&movies, "thriller");
        let ids: Vec<&str> = by_genre.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn results_keep_catalog_order() {
        let movies = fixture();
        let hits = search_movies(&movies, "a"); // matches all three
        let ids: Vec<&str> = hits.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn suggestions_are_capped() {
        let movies: Vec<Movie> = (0..10)
            .map(|i| movie(&format!("m{}", i), &format!("Common Title {}", i), "", &[]))
            .collect();
        let s = search_suggestions(&movies, "common");
        assert_eq!(s.len(), SUGGESTION_LIMIT);
    }
}
