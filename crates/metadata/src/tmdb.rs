//! TMDB (The Movie Database) provider client.
//!
//! Uses TMDB API v3: https://developer.themoviedb.org/docs
//!
//! Search, category lists and the genre table authenticate with the v3
//! `api_key` query parameter. Details and credits authenticate with the v4
//! read access token as a bearer header. Both must be configured.

use std::time::Duration;

use reelgate_core::{Genre, MovieCategory, MovieSummary};
use tracing::debug;

use crate::decode::from_value_ignore_case;
use crate::provider::{Credits, GenreEnvelope, MovieProvider, SearchEnvelope};
use crate::MetadataError;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// TMDB client configuration.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// v3 API key, sent as `api_key`.
    pub api_key: String,
    /// v4 read access token, sent as `Authorization: Bearer`.
    pub read_access_token: String,
    pub base_url: String,
    pub image_base_url: String,
    /// Request timeout. `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            read_access_token: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE.to_string(),
            timeout_secs: None,
        }
    }
}

pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self, MetadataError> {
        if config.api_key.is_empty() {
            return Err(MetadataError::NotConfigured("TMDB API key is required".into()));
        }
        if config.read_access_token.is_empty() {
            return Err(MetadataError::NotConfigured(
                "TMDB read access token is required".into(),
            ));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn image_base_url(&self) -> &str {
        &self.config.image_base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// GET with the v3 key in the query string.
    async fn get_with_key(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, MetadataError> {
        let mut all_params = vec![("api_key", self.config.api_key.as_str())];
        all_params.extend_from_slice(params);

        let url = self.url(path);
        debug!(url = %url, "TMDB request");

        let req = self.client.get(&url).query(&all_params);
        self.send(req).await
    }

    /// GET with the v4 token as a bearer header.
    async fn get_with_bearer(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, MetadataError> {
        let url = self.url(path);
        debug!(url = %url, "TMDB request (bearer)");

        let req = self
            .client
            .get(&url)
            .query(params)
            .header(reqwest::header::ACCEPT, "application/json")
            .bearer_auth(&self.config.read_access_token);
        self.send(req).await
    }

    async fn send(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<serde_json::Value, MetadataError> {
        let resp = req
            .send()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MetadataError::NotFound);
        }

        if !resp.status().is_success() {
            return Err(MetadataError::Provider(format!(
                "TMDB returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| MetadataError::Decode(format!("parse JSON: {e}")))
    }
}

#[async_trait::async_trait]
impl MovieProvider for TmdbClient {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, MetadataError> {
        let data = self.get_with_key("/search/movie", &[("query", query)]).await?;
        let env: SearchEnvelope = from_value_ignore_case(data)?;
        Ok(env.into_movies())
    }

    async fn list_movies(
        &self,
        category: MovieCategory,
    ) -> Result<Vec<MovieSummary>, MetadataError> {
        let data = self
            .get_with_key(
                &format!("/movie/{}", category.as_str()),
                &[("language", "en-US"), ("page", "1")],
            )
            .await?;
        let env: SearchEnvelope = from_value_ignore_case(data)?;
        Ok(env.into_movies())
    }

    async fn movie_details(&self, id: i64) -> Result<MovieSummary, MetadataError> {
        let data = self
            .get_with_bearer(&format!("/movie/{id}"), &[("language", "en-US")])
            .await?;

        // Case-sensitive; absent fields come back as defaults, not errors.
        Ok(serde_json::from_value(data)?)
    }

    async fn movie_credits(&self, id: i64) -> Result<Credits, MetadataError> {
        let data = self
            .get_with_bearer(&format!("/movie/{id}/credits"), &[])
            .await?;
        Ok(serde_json::from_value(data)?)
    }

    async fn movie_genres(&self) -> Result<Vec<Genre>, MetadataError> {
        let data = self
            .get_with_key("/genre/movie/list", &[("language", "en")])
            .await?;
        let env: GenreEnvelope = from_value_ignore_case(data)?;
        Ok(env.into_genres())
    }
}
