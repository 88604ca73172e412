pub mod client;
pub mod scrape;
pub mod source;
pub mod types;

pub use scrape::{parse_results_table, WebResults, TOP_N};
pub use source::{FixedResults, ResultsSource};
pub use types::{RaceKey, DEFAULT_BASE_URL};
