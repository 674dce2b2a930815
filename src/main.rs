use anyhow::Result;
use clap::Parser;

use gitlab_tags::config::RawSettings;
use gitlab_tags::{gitlab, ranking, ui};

#[derive(clap::Parser)]
#[command(
    name = "gitlab-tags",
    about = "List GitLab repository tags with their annotation messages"
)]
struct Args {
    #[arg(long, help = "Base GitLab URL formatted as https://gitlab.example.com/")]
    url: Option<String>,

    #[arg(
        long,
        help = "Personal access token (create one in your GitLab instance at '/profile/personal_access_tokens'; be sure to check 'Api: Access your API')"
    )]
    token: Option<String>,

    #[arg(long, help = "Organization name")]
    org: Option<String>,

    #[arg(long, help = "Repository name")]
    repo: Option<String>,

    #[arg(
        long,
        default_value = "",
        help = "Text to put before the version name (e.g. '#' for markdown header)"
    )]
    version_prefix: String,

    #[arg(long, help = "Do not check the server's certificate")]
    insecure: bool,

    #[arg(
        long,
        default_value_t = true,
        action = clap::ArgAction::Set,
        help = "Sort by tag name according to semantic versioning from most recent to oldest"
    )]
    sort_semver: bool,

    #[arg(
        long,
        default_value = "0.0.0",
        help = "Print tags that are greater than or equal to the specified semantic version (e.g. 1.0.0 will show all tags/messages since 1.0.0)"
    )]
    since_tag: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Resolve configuration once; any problem here is fatal
    let raw_settings = RawSettings {
        url: args.url,
        token: args.token,
        org: args.org,
        repo: args.repo,
        name_prefix: args.version_prefix,
        insecure: args.insecure,
        sort_semver: args.sort_semver,
        since: args.since_tag,
    };
    let settings = match raw_settings.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // One request, one decode; transport and shape errors are fatal
    let raw_tags = match gitlab::fetch_tags(&settings) {
        Ok(tags) => tags,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let ranking = ranking::rank_tags(&raw_tags, settings.sort_semver, &settings.since);

    for tag in &ranking.tags {
        ui::display_tag(&settings.name_prefix, tag);
    }

    // Per-tag parse failures are reported after all normal output
    ui::display_parse_failures(&ranking.failures);

    Ok(())
}
