use semver::Version;
use serde::Deserialize;

/// A tag exactly as received from the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTag {
    pub name: String,
    #[serde(default)]
    pub message: String,
}

/// A tag after the optional semver parse.
///
/// `version` is present only when the name, with its first `v` removed,
/// parsed as a semantic version. The tag itself is always kept, so the
/// parsed list is the same length as the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag {
    pub name: String,
    pub message: String,
    pub version: Option<Version>,
}

/// One record per tag whose name failed to parse as a semantic version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub name: String,
    pub error: String,
}

/// Result of ranking: the ordered, filtered tags to display and the
/// parse failures accumulated along the way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ranking {
    pub tags: Vec<ParsedTag>,
    pub failures: Vec<ParseFailure>,
}

/// Parses each raw tag, producing one [`ParsedTag`] per input.
///
/// When `sort_semver` is false this is a plain carry-over: no parsing is
/// attempted and no failures are recorded. When true, the first literal
/// `v` in the name is removed (only the first occurrence) and the rest is
/// parsed per the semver grammar; a failure leaves the tag versionless and
/// appends one entry to the failure list.
///
/// # Example
/// ```ignore
/// let (parsed, failures) = parse_tags(&tags, true);
/// assert_eq!(parsed.len(), tags.len()); // holds regardless of failures
/// ```
pub fn parse_tags(raw_tags: &[RawTag], sort_semver: bool) -> (Vec<ParsedTag>, Vec<ParseFailure>) {
    let mut parsed = Vec::with_capacity(raw_tags.len());
    let mut failures = Vec::new();

    for tag in raw_tags {
        let version = if sort_semver {
            match Version::parse(&tag.name.replacen('v', "", 1)) {
                Ok(version) => Some(version),
                Err(e) => {
                    failures.push(ParseFailure {
                        name: tag.name.clone(),
                        error: e.to_string(),
                    });
                    None
                }
            }
        } else {
            None
        };

        parsed.push(ParsedTag {
            name: tag.name.clone(),
            message: tag.message.clone(),
            version,
        });
    }

    (parsed, failures)
}

/// Orders and filters the tag list for display.
///
/// With `sort_semver` off, the input order is preserved and every tag is
/// emitted. With it on, tags are sorted descending by the raw name string
/// and only tags whose parsed version is `>= since` survive; unparsable
/// tags are dropped from display but reported in the failure list.
///
/// The sort compares name strings, not parsed versions, so names that are
/// not zero-padded consistently order lexicographically ("9.0.0" before
/// "10.0.0"). Deliberate; the tests pin this ordering down.
pub fn rank_tags(raw_tags: &[RawTag], sort_semver: bool, since: &Version) -> Ranking {
    let (mut tags, failures) = parse_tags(raw_tags, sort_semver);

    if sort_semver {
        // Reverse sort - most recent first.
        tags.sort_by(|a, b| b.name.cmp(&a.name));
        tags.retain(|tag| tag.version.as_ref().is_some_and(|v| v >= since));
    }

    Ranking { tags, failures }
}
