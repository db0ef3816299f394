use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::likes::{LikeCounts, contains, effective_likes};
use crate::models::{ContentRow, Movie};

pub const MOST_LIKED_ROW_ID: &str = "most-liked";
pub const MY_LIST_ROW_ID: &str = "mylist";
pub const MOST_LIKED_LIMIT: usize = 12;

fn with_live_likes(movie: &Movie, counts: &LikeCounts) -> Movie {
    let mut m = movie.clone();
    m.likes = Some(effective_likes(&m.id, movie.likes, counts));
    m
}

/// Fresh copy of `movies` with each `likes` field replaced by the
/// effective count. The input is shared, read-only data and stays
/// untouched.
pub fn overlay_likes(movies: &[Movie], counts: &LikeCounts) -> Vec<Movie> {
    movies.iter().map(|m| with_live_likes(m, counts)).collect()
}

/// Synthesize the Most Liked row: the overlaid catalog plus every
/// row-only movie (deduplicated by id), sorted descending by effective
/// count. Ties keep accumulation order; the result is capped at
/// `MOST_LIKED_LIMIT`.
pub fn build_most_liked(
    overlaid_catalog: &[Movie],
    rows: &[ContentRow],
    counts: &LikeCounts,
) -> Vec<Movie> {
    let mut pool: Vec<Movie> = overlaid_catalog.to_vec();
    let mut seen: HashSet<String> = pool.iter().map(|m| m.id.clone()).collect();
    for row in rows.iter().filter(|r| r.id != MOST_LIKED_ROW_ID) {
        for movie in &row.movies {
            if seen.insert(movie.id.clone()) {
                pool.push(with_live_likes(movie, counts));
            }
        }
    }
    // Vec::sort_by is stable, so equal counts keep their accumulation order.
    pool.sort_by(|a, b| b.likes.unwrap_or(0).cmp(&a.likes.unwrap_or(0)));
    pool.truncate(MOST_LIKED_LIMIT);
    pool
}

/// Synthesize the My List row: catalog members first (catalog order, as
/// stored), then row-only members (row-then-item order, overlaid), with
/// no duplicate ids.
pub fn build_my_list(
    catalog_movies: &[Movie],
    rows: &[ContentRow],
    my_list: &[String],
    counts: &LikeCounts,
) -> Vec<Movie> {
    let mut out: Vec<Movie> = catalog_movies
        .iter()
        .filter(|m| contains(my_list, &m.id))
        .cloned()
        .collect();
    let mut seen: HashSet<String> = out.iter().map(|m| m.id.clone()).collect();
    for row in rows {
        for movie in &row.movies {
            if contains(my_list, &movie.id) && seen.insert(movie.id.clone()) {
                out.push(with_live_likes(movie, counts));
            }
        }
    }
    out
}

/// Assemble the rows a render pass actually shows: static rows with their
/// movies swapped for the overlaid catalog record where the id exists
/// there, the Most Liked row's movies replaced wholesale, and a leading
/// My List row injected only when it has members.
pub fn compose_rows(catalog: &Catalog, my_list: &[String], counts: &LikeCounts) -> Vec<ContentRow> {
    let overlaid = overlay_likes(&catalog.movies, counts);

    let mut out: Vec<ContentRow> = catalog
        .rows
        .iter()
        .map(|row| {
            let movies = if row.id == MOST_LIKED_ROW_ID {
                build_most_liked(&overlaid, &catalog.rows, counts)
            } else {
                row.movies
                    .iter()
                    .map(|m| {
                        overlaid
                            .iter()
                            .find(|o| o.id == m.id)
                            .cloned()
                            .unwrap_or_else(|| m.clone())
                    })
                    .collect()
            };
            ContentRow {
                id: row.id.clone(),
                title: row.title.clone(),
                movies,
            }
        })
        .collect();

    let my_list_movies = build_my_list(&catalog.movies, &catalog.rows, my_list, counts);
    if !my_list_movies.is_empty() {
        out.insert(
            0,
            ContentRow {
                id: MY_LIST_ROW_ID.to_string(),
                title: "My List".to_string(),
                movies: my_list_movies,
            },
        );
    }
    out
}
