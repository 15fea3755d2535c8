pub mod filter;
pub mod types;

pub use filter::SearchFilter;
pub use types::{Genre, HomePage, MovieCategory, MovieSummary, UNKNOWN_DIRECTOR};
