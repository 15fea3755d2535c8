use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Director value used when credits are unavailable or list no director.
pub const UNKNOWN_DIRECTOR: &str = "Unknown";

/// Provider list endpoint under `/movie/{category}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieCategory {
    Popular,
    NowPlaying,
    TopRated,
}

impl MovieCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::NowPlaying => "now_playing",
            Self::TopRated => "top_rated",
        }
    }
}

impl std::fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A movie as returned by the provider's list, search and detail endpoints.
///
/// Field names match the provider's JSON. `genre_names` and `director` are
/// never sent by the provider; they are filled in after the fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieSummary {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub overview: String,
    /// Raw provider date, usually `YYYY-MM-DD`, sometimes empty.
    #[serde(deserialize_with = "null_as_default")]
    pub release_date: String,
    pub poster_path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub genre_ids: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub genre_names: String,
    pub director: Option<String>,
}

impl MovieSummary {
    /// Year of `release_date`, if it is a well-formed date.
    pub fn release_year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(self.release_date.trim(), "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }

    /// Full poster URL for the given image base and size (e.g. `w500`).
    pub fn poster_url(&self, image_base: &str, size: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}/{size}{p}", image_base.trim_end_matches('/')))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// The three category rows shown on the landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomePage {
    pub popular: Vec<MovieSummary>,
    pub now_playing: Vec<MovieSummary>,
    pub top_rated: Vec<MovieSummary>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
