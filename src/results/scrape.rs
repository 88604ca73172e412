use anyhow::{Context, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use super::client::create_client;
use super::source::ResultsSource;
use super::types::{RaceKey, DEFAULT_BASE_URL};

/// Most finishers a fetch reports.
pub const TOP_N: usize = 10;

static TABLE_OPEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<table[^>]*class="[^"]*\bresults\b[^"]*"[^>]*>"#)
        .expect("valid results-table regex")
});
static ROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").expect("valid row regex"));
static RIDER_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a[^>]+href="[^"]*rider/[^"]*"[^>]*>(.*?)</a>"#)
        .expect("valid rider-link regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag regex"));

/// Live results scraped from the public results site.
pub struct WebResults {
    client: reqwest::Client,
    base_url: String,
}

impl WebResults {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point at a different host. Tests aim this at a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: create_client()?,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl ResultsSource for WebResults {
    /// One GET per call, no retries; network failures are the caller's to
    /// handle. A missing page or missing results table is "no data yet",
    /// reported as an empty list.
    async fn top_finishers(&self, race: &RaceKey) -> Result<Vec<String>> {
        let url = race.result_url(&self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch results page {url}"))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let body = response
            .error_for_status()
            .with_context(|| format!("Results page {url} returned an error"))?
            .text()
            .await
            .with_context(|| format!("Failed to read results page {url}"))?;

        Ok(parse_results_table(&body))
    }
}

/// Pull finisher surnames, in finish order, out of a results page.
///
/// Scans rows locally within the first table whose class mentions
/// `results`, and reads each row's rider link. Rows without a rider link
/// (headers, separators) are skipped. No table means no posted result:
/// an empty list, never an error.
pub fn parse_results_table(html: &str) -> Vec<String> {
    let Some(table) = results_table_block(html) else {
        return Vec::new();
    };

    let mut finishers = Vec::new();
    for row in ROW_RE.captures_iter(table) {
        if finishers.len() == TOP_N {
            break;
        }
        let Some(link) = RIDER_LINK_RE.captures(&row[1]) else {
            continue;
        };
        if let Some(surname) = surname_of(&link[1]) {
            finishers.push(surname);
        }
    }
    finishers
}

/// The inside of the results table, or None when the page doesn't have one.
fn results_table_block(html: &str) -> Option<&str> {
    let open = TABLE_OPEN_RE.find(html)?;
    let rest = &html[open.end()..];
    let close = rest.to_ascii_lowercase().find("</table>")?;
    Some(&rest[..close])
}

/// Surname from a rider cell: first whitespace-delimited token of the link
/// text, capitalized. Results pages print "SURNAME Firstname".
fn surname_of(cell: &str) -> Option<String> {
    let text = normalize(cell);
    let first = text.split_whitespace().next()?;
    let mut chars = first.chars();
    let initial = chars.next()?;
    Some(
        initial
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    )
}

/// Strip markup and the handful of entities the site actually emits.
fn normalize(fragment: &str) -> String {
    TAG_RE
        .replace_all(fragment, " ")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#39;", "'")
        .trim()
        .to_string()
}
