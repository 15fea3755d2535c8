use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use reelgate_core::{MovieCategory, MovieSummary, SearchFilter};
use reelgate_metadata::{CatalogGateway, GenreCache, TmdbClient, TmdbConfig};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reelgate", version, about = "Browse TMDB movie metadata")]
struct Cli {
    /// TMDB v3 API key (search, lists, genres)
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    api_key: String,

    /// TMDB v4 read access token (details, credits)
    #[arg(long, env = "TMDB_READ_ACCESS_TOKEN", hide_env_values = true)]
    read_access_token: String,

    #[arg(long, env = "TMDB_BASE_URL", default_value = reelgate_metadata::tmdb::DEFAULT_BASE_URL)]
    base_url: String,

    /// Base for poster image URLs in `details` output
    #[arg(long, env = "TMDB_IMAGE_BASE_URL", default_value = reelgate_metadata::tmdb::DEFAULT_IMAGE_BASE)]
    image_base_url: String,

    /// Request timeout in seconds; transport default when unset
    #[arg(long, env = "TMDB_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Popular, now playing and top rated rows
    Home,
    /// Search titles, optionally narrowed by year, genre id and rating
    Search {
        query: String,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        genre: Option<i64>,
        #[arg(long)]
        min_rating: Option<f64>,
    },
    /// One category list
    Category { category: CategoryArg },
    /// Full record for a title, with director
    Details { id: i64 },
    /// Director of a title
    Director { id: i64 },
    /// Genre table
    Genres,
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Popular,
    NowPlaying,
    TopRated,
}

impl From<CategoryArg> for MovieCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Popular => Self::Popular,
            CategoryArg::NowPlaying => Self::NowPlaying,
            CategoryArg::TopRated => Self::TopRated,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = TmdbConfig {
        api_key: cli.api_key,
        read_access_token: cli.read_access_token,
        base_url: cli.base_url,
        image_base_url: cli.image_base_url,
        timeout_secs: cli.timeout_secs,
    };
    info!(base_url = %config.base_url, "using TMDB provider");

    let client = TmdbClient::new(config).context("failed to build TMDB client")?;
    let image_base = client.image_base_url().to_string();
    let gateway = CatalogGateway::new(Arc::new(client), Arc::new(GenreCache::new()));

    match cli.command {
        Command::Home => print_json(&gateway.home_page().await),
        Command::Search {
            query,
            year,
            genre,
            min_rating,
        } => {
            let filter = SearchFilter {
                year,
                genre_id: genre,
                min_rating,
            };
            print_json(&gateway.search_filtered(&query, &filter).await)
        }
        Command::Category { category } => {
            print_json(&gateway.list_by_category(category.into()).await)
        }
        Command::Details { id } => {
            let movie = gateway
                .get_details(id)
                .await
                .with_context(|| format!("failed to fetch details for movie {id}"))?;
            print_json(&DetailsView::new(movie, &image_base))
        }
        Command::Director { id } => print_json(&gateway.get_director(id).await),
        Command::Genres => print_json(&gateway.get_genres().await),
    }
}

const POSTER_SIZE: &str = "w500";

/// Title details plus the full poster URL.
#[derive(Serialize)]
struct DetailsView {
    #[serde(flatten)]
    movie: MovieSummary,
    poster_url: Option<String>,
}

impl DetailsView {
    fn new(movie: MovieSummary, image_base: &str) -> Self {
        let poster_url = movie.poster_url(image_base, POSTER_SIZE);
        Self { movie, poster_url }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to encode output")?;
    println!("{out}");
    Ok(())
}
