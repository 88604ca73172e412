/// Default host for race results pages.
pub const DEFAULT_BASE_URL: &str = "https://www.procyclingstats.com";

/// Identifies one edition of a race on the results site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceKey {
    pub name: String,
    pub year: String,
}

impl RaceKey {
    pub fn new(name: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            year: year.into(),
        }
    }

    /// URL slug for the race name: lowercased ASCII, runs of anything else
    /// collapsed to single dashes.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        let mut pending_dash = false;
        for c in self.name.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                slug.push(c.to_ascii_lowercase());
                pending_dash = false;
            } else {
                pending_dash = true;
            }
        }
        slug
    }

    /// Full results-page URL under the given host.
    pub fn result_url(&self, base_url: &str) -> String {
        format!(
            "{}/race/{}/{}/result",
            base_url.trim_end_matches('/'),
            self.slug(),
            self.year
        )
    }
}
