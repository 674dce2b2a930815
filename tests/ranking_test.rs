// tests/ranking_test.rs
//
// End-to-end coverage of the tag ranking behavior through the library
// surface, using decoded tag lists as the GitLab API would produce them.

use semver::Version;

use gitlab_tags::ranking::{parse_tags, rank_tags, RawTag};
use gitlab_tags::ui::{format_parse_failures, format_tag};

fn tag(name: &str, message: &str) -> RawTag {
    RawTag {
        name: name.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn test_parsed_list_length_equals_input_length() {
    let inputs: Vec<Vec<RawTag>> = vec![
        vec![],
        vec![tag("v1.0.0", "ok")],
        vec![tag("garbage", ""), tag("v2.0.0", "ok"), tag("1.2", "bad")],
    ];

    for raw in inputs {
        let (parsed, _) = parse_tags(&raw, true);
        assert_eq!(parsed.len(), raw.len());
    }
}

#[test]
fn test_name_sort_beats_semver_sort() {
    // The ordering comparator is the raw name string, descending. With
    // unpadded names that disagrees with semver precedence: "v9.0.0"
    // outranks "v10.0.0" because '9' > '1'.
    let raw = vec![
        tag("v1.0.0", "one"),
        tag("v9.0.0", "nine"),
        tag("v10.0.0", "ten"),
    ];
    let ranking = rank_tags(&raw, true, &Version::new(0, 0, 0));
    let names: Vec<&str> = ranking.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["v9.0.0", "v1.0.0", "v10.0.0"]);
}

#[test]
fn test_mixed_list_filters_and_reports() {
    let raw = vec![
        tag("v2.1.0", "current"),
        tag("not-a-version", "oops"),
        tag("v0.9.0", "ancient"),
        tag("v1.0.0", "boundary"),
    ];
    let ranking = rank_tags(&raw, true, &Version::new(1, 0, 0));

    let names: Vec<&str> = ranking.tags.iter().map(|t| t.name.as_str()).collect();
    // v0.9.0 filtered out, not-a-version unparsable, rest sorted by name desc
    assert_eq!(names, vec!["v2.1.0", "v1.0.0"]);

    assert_eq!(ranking.failures.len(), 1);
    assert_eq!(ranking.failures[0].name, "not-a-version");
}

#[test]
fn test_sort_disabled_passes_everything_through() {
    let raw = vec![
        tag("release-candidate", "rc"),
        tag("v0.0.1", "first"),
        tag("nightly", "n"),
    ];
    let ranking = rank_tags(&raw, false, &Version::new(5, 0, 0));

    let names: Vec<&str> = ranking.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["release-candidate", "v0.0.1", "nightly"]);
    assert!(ranking.failures.is_empty());
}

#[test]
fn test_display_pipeline_shapes_output() {
    let raw = vec![tag("v1.1.0", "Fixes"), tag("broken", "")];
    let ranking = rank_tags(&raw, true, &Version::new(0, 0, 0));

    let mut stdout = String::new();
    for t in &ranking.tags {
        stdout.push_str(&format_tag("#", t));
    }
    assert_eq!(stdout, "# v1.1.0\nFixes\n\n");

    let stderr = format_parse_failures(&ranking.failures);
    assert!(stderr.contains("Errors parsing semver tags:"));
    assert!(stderr.contains("error parsing tag broken:"));
}

#[test]
fn test_rerun_produces_identical_results() {
    let raw = vec![
        tag("v3.2.1", "a"),
        tag("junk", "b"),
        tag("v3.10.0", "c"),
        tag("v3.9.0", "d"),
    ];
    let since = Version::new(3, 0, 0);

    let first = rank_tags(&raw, true, &since);
    let second = rank_tags(&raw, true, &since);
    assert_eq!(first, second);
}
