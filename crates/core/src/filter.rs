//! Post-search narrowing by release year, genre and rating.

use crate::MovieSummary;

/// Optional constraints applied to search results. All set fields must match.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchFilter {
    pub year: Option<i32>,
    pub genre_id: Option<i64>,
    pub min_rating: Option<f64>,
}

impl SearchFilter {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.genre_id.is_none() && self.min_rating.is_none()
    }

    pub fn matches(&self, movie: &MovieSummary) -> bool {
        // Movies without a parseable release date never match a year filter.
        if let Some(year) = self.year
            && movie.release_year() != Some(year)
        {
            return false;
        }
        if let Some(genre_id) = self.genre_id
            && !movie.genre_ids.contains(&genre_id)
        {
            return false;
        }
        if let Some(min) = self.min_rating
            && movie.vote_average < min
        {
            return false;
        }
        true
    }

    pub fn apply(&self, movies: Vec<MovieSummary>) -> Vec<MovieSummary> {
        if self.is_empty() {
            return movies;
        }
        movies.into_iter().filter(|m| self.matches(m)).collect()
    }
}
