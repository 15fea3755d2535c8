//! Derived fields attached after a fetch.

use reelgate_core::{Genre, MovieSummary, UNKNOWN_DIRECTOR};

use crate::provider::Credits;

/// Names of the genres in `table` whose id appears in `genre_ids`, joined
/// with ", ". Order follows `table`, not `genre_ids`.
pub fn genre_names(genre_ids: &[i64], table: &[Genre]) -> String {
    table
        .iter()
        .filter(|g| genre_ids.contains(&g.id))
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn attach_genre_names(movies: &mut [MovieSummary], table: &[Genre]) {
    for movie in movies {
        movie.genre_names = genre_names(&movie.genre_ids, table);
    }
}

/// Name of the first crew member credited as "Director".
///
/// Co-directors after the first are ignored. Returns [`UNKNOWN_DIRECTOR`]
/// when there is no director or the first one has no name.
pub fn director_of(credits: &Credits) -> String {
    credits
        .crew
        .iter()
        .find(|m| m.job.as_deref() == Some("Director"))
        .and_then(|m| m.name.clone())
        .unwrap_or_else(|| UNKNOWN_DIRECTOR.to_string())
}
