use semver::Version;

use crate::error::{Result, TagListError};

/// Raw command-line values before validation.
///
/// Collected straight from the flag parser; nothing here is checked yet.
/// Call [`RawSettings::resolve`] exactly once at startup to obtain the
/// validated, immutable [`Settings`] the rest of the program runs on.
#[derive(Debug, Clone, Default)]
pub struct RawSettings {
    pub url: Option<String>,
    pub token: Option<String>,
    pub org: Option<String>,
    pub repo: Option<String>,
    pub name_prefix: String,
    pub insecure: bool,
    pub sort_semver: bool,
    pub since: String,
}

/// Validated runtime configuration.
///
/// Immutable once constructed; passed explicitly to the fetch and ranking
/// code rather than living in globals.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base GitLab URL, normalized to end with a trailing slash.
    pub base_url: String,
    /// Personal access token; empty for unauthenticated access.
    pub token: String,
    pub org: String,
    pub repo: String,
    /// Text printed before each tag name (e.g. "#" for markdown headers).
    pub name_prefix: String,
    /// Skip TLS certificate verification.
    pub insecure: bool,
    /// Parse names as semver, sort descending by name, filter by `since`.
    pub sort_semver: bool,
    /// Minimum version (inclusive) a tag must meet to be printed.
    pub since: Version,
}

impl RawSettings {
    /// Validates the raw values and builds the runtime [`Settings`].
    ///
    /// Checks performed:
    /// - `url`, `org`, and `repo` must be present and non-empty
    /// - `since` must parse as a semantic version
    /// - `url` gains a trailing `/` if missing
    ///
    /// # Returns
    /// * `Ok(Settings)` - Validated configuration
    /// * `Err` - Configuration error describing the first problem found
    pub fn resolve(self) -> Result<Settings> {
        let url = non_empty(self.url);
        let org = non_empty(self.org);
        let repo = non_empty(self.repo);

        let (Some(mut base_url), Some(org), Some(repo)) = (url, org, repo) else {
            return Err(TagListError::config(
                "please define the url, org, and repo",
            ));
        };

        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let since = Version::parse(&self.since).map_err(|e| {
            TagListError::config(format!(
                "unable to parse since version {}: {}",
                self.since, e
            ))
        })?;

        Ok(Settings {
            base_url,
            token: self.token.unwrap_or_default(),
            org,
            repo,
            name_prefix: self.name_prefix,
            insecure: self.insecure,
            sort_semver: self.sort_semver,
            since,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
