//! Catalog gateway: provider calls plus failure policy and enrichment.
//!
//! Failure policy differs by operation:
//! - search, category lists and genres swallow errors and return empty lists;
//! - details propagates errors to the caller;
//! - director lookup swallows errors and returns "Unknown".
//!
//! Callers may branch on an empty list, so list failures stay silent.

use std::sync::Arc;

use reelgate_core::{Genre, HomePage, MovieCategory, MovieSummary, SearchFilter, UNKNOWN_DIRECTOR};
use tracing::{debug, warn};

use crate::enrich::{attach_genre_names, director_of};
use crate::genre_cache::GenreCache;
use crate::provider::MovieProvider;
use crate::MetadataError;

#[derive(Clone)]
pub struct CatalogGateway {
    provider: Arc<dyn MovieProvider>,
    genres: Arc<GenreCache>,
}

impl CatalogGateway {
    pub fn new(provider: Arc<dyn MovieProvider>, genres: Arc<GenreCache>) -> Self {
        Self { provider, genres }
    }

    pub fn genre_cache(&self) -> &Arc<GenreCache> {
        &self.genres
    }

    /// Title search with genre names attached. Empty on any failure.
    pub async fn search(&self, query: &str) -> Vec<MovieSummary> {
        let mut movies = match self.provider.search_movies(query).await {
            Ok(movies) => movies,
            Err(e) => {
                warn!(provider = self.provider.name(), query, error = %e, "search failed");
                return Vec::new();
            }
        };

        let genres = self.get_genres().await;
        attach_genre_names(&mut movies, &genres);
        movies
    }

    /// Search narrowed by `filter`. A blank query returns nothing without a
    /// provider call.
    pub async fn search_filtered(&self, query: &str, filter: &SearchFilter) -> Vec<MovieSummary> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        filter.apply(self.search(query).await)
    }

    /// First page of a category list. Empty on any failure.
    pub async fn list_by_category(&self, category: MovieCategory) -> Vec<MovieSummary> {
        match self.provider.list_movies(category).await {
            Ok(movies) => movies,
            Err(e) => {
                warn!(provider = self.provider.name(), %category, error = %e, "category list failed");
                Vec::new()
            }
        }
    }

    /// All three category rows, fetched concurrently. Each row fails on its own.
    pub async fn home_page(&self) -> HomePage {
        let (popular, now_playing, top_rated) = tokio::join!(
            self.list_by_category(MovieCategory::Popular),
            self.list_by_category(MovieCategory::NowPlaying),
            self.list_by_category(MovieCategory::TopRated),
        );
        HomePage {
            popular,
            now_playing,
            top_rated,
        }
    }

    /// Genre table, fetched once and then served from the cache.
    pub async fn get_genres(&self) -> Vec<Genre> {
        let provider = &self.provider;
        match self.genres.get_or_fetch(|| provider.movie_genres()).await {
            Ok(genres) => genres,
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "genre list failed");
                Vec::new()
            }
        }
    }

    /// Director from the title's credits, or "Unknown".
    pub async fn get_director(&self, id: i64) -> String {
        match self.provider.movie_credits(id).await {
            Ok(credits) => director_of(&credits),
            Err(e) => {
                warn!(provider = self.provider.name(), id, error = %e, "credits lookup failed");
                UNKNOWN_DIRECTOR.to_string()
            }
        }
    }

    /// Full record for one title with the director attached.
    ///
    /// Unlike the list operations, a provider failure here is returned as an
    /// error.
    pub async fn get_details(&self, id: i64) -> Result<MovieSummary, MetadataError> {
        let mut movie = self.provider.movie_details(id).await?;
        movie.director = Some(self.get_director(id).await);
        debug!(id, director = ?movie.director, "details resolved");
        Ok(movie)
    }
}
