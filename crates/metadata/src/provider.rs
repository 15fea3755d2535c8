use reelgate_core::{Genre, MovieCategory, MovieSummary};
use serde::{Deserialize, Deserializer};

use crate::MetadataError;

/// Raw access to a movie-metadata provider.
///
/// Implementations report every failure as an error; the failure policy
/// (empty lists, "Unknown" director) is applied by [`crate::CatalogGateway`].
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Free-text title search.
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, MetadataError>;

    /// First page of a fixed category list.
    async fn list_movies(
        &self,
        category: MovieCategory,
    ) -> Result<Vec<MovieSummary>, MetadataError>;

    /// Full record for one title.
    async fn movie_details(&self, id: i64) -> Result<MovieSummary, MetadataError>;

    async fn movie_credits(&self, id: i64) -> Result<Credits, MetadataError>;

    /// The provider's movie genre table, in provider order.
    async fn movie_genres(&self) -> Result<Vec<Genre>, MetadataError>;
}

/// `{ "results": [...] }` wrapper used by search and category lists.
#[derive(Debug, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    results: Option<Vec<MovieSummary>>,
}

impl SearchEnvelope {
    pub fn into_movies(self) -> Vec<MovieSummary> {
        self.results.unwrap_or_default()
    }
}

/// `{ "genres": [...] }` wrapper from the genre list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct GenreEnvelope {
    #[serde(default)]
    genres: Option<Vec<Genre>>,
}

impl GenreEnvelope {
    pub fn into_genres(self) -> Vec<Genre> {
        self.genres.unwrap_or_default()
    }
}

/// Credits payload. Only the crew is read; `crew` must be present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    pub crew: Vec<CrewMember>,
}

/// One crew entry. Non-string `job` or `name` values read as absent, so a
/// malformed entry never hides a director listed before it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrewMember {
    #[serde(default, deserialize_with = "string_or_none")]
    pub job: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crew_tolerates_badly_typed_fields() {
        let json = serde_json::json!({
            "crew": [
                { "job": "Director", "name": "B" },
                { "job": "Writer", "name": 42 },
                { "job": null, "department": "Sound" }
            ]
        });

        let credits: Credits = serde_json::from_value(json).unwrap();
        assert_eq!(credits.crew.len(), 3);
        assert_eq!(credits.crew[0].name.as_deref(), Some("B"));
        assert_eq!(credits.crew[1].job.as_deref(), Some("Writer"));
        assert_eq!(credits.crew[1].name, None);
        assert_eq!(credits.crew[2].job, None);
    }

    #[test]
    fn credits_without_crew_fail_to_decode() {
        let json = serde_json::json!({ "id": 2, "cast": [] });
        assert!(serde_json::from_value::<Credits>(json).is_err());
    }
}
