use serde::Deserialize;

use crate::config::Settings;
use crate::error::Result;
use crate::error::TagListError;
use crate::ranking::RawTag;

/// One tag record as the GitLab API serializes it.
///
/// Lightweight tags carry no annotation; the API sends `"message": null`
/// for those, which maps to an empty message here.
#[derive(Debug, Deserialize)]
struct TagRecord {
    name: String,
    #[serde(default)]
    message: Option<String>,
}

/// Builds the tag-listing endpoint for a project.
///
/// GitLab addresses projects as `namespace%2Fname` (the slash between the
/// two stays URL-encoded), so the org and repo are joined with a literal
/// `%2F`.
pub fn tags_url(settings: &Settings) -> String {
    format!(
        "{}api/v4/projects/{}%2F{}/repository/tags",
        settings.base_url, settings.org, settings.repo
    )
}

/// Fetches every tag of the configured repository in one GET request.
///
/// Sends the personal access token as the `PRIVATE-TOKEN` header when one
/// is configured. The body must be a JSON array; anything else (commonly a
/// JSON error object for a private repo queried without a token) is a
/// fatal error carrying the body for diagnosis.
///
/// # Returns
/// * `Ok(Vec<RawTag>)` - Decoded tags, in API order
/// * `Err` - Transport failure, non-array body, or JSON decode failure
pub fn fetch_tags(settings: &Settings) -> Result<Vec<RawTag>> {
    let url = tags_url(settings);

    let client = reqwest::blocking::Client::builder()
        .danger_accept_invalid_certs(settings.insecure)
        .build()?;

    let mut request = client.get(&url);
    if !settings.token.is_empty() {
        request = request.header("PRIVATE-TOKEN", &settings.token);
    }

    let body = request.send()?.text()?;

    validate_array_body(&body)?;

    let records: Vec<TagRecord> = serde_json::from_str(&body)?;
    Ok(records
        .into_iter()
        .map(|record| RawTag {
            name: record.name,
            message: record.message.unwrap_or_default(),
        })
        .collect())
}

/// Checks that the response body is a JSON array before decoding.
fn validate_array_body(body: &str) -> Result<()> {
    let trimmed = body.trim();
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        return Ok(());
    }
    Err(TagListError::response(format!(
        "response was not valid; if this is a private repo, did you specify a token?\nResponse: {}",
        body
    )))
}
