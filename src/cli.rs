use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_OWNER, DEFAULT_README, DEFAULT_REPO};

#[derive(Parser, Debug)]
#[command(name = "contributors-sync")]
#[command(version, about = "Generate contributors table for README.md")]
#[command(long_about = "contributors-sync fetches the contributor list of a GitHub repository \
and writes it as a table between the <!-- CONTRIBUTORS_START --> and \
<!-- CONTRIBUTORS_END --> markers of README.md. The file is only rewritten when \
the table actually changed.")]
#[command(styles = get_styles())]
#[command(after_help = "Environment:
  GITHUB_TOKEN      Optional token for authenticated requests (higher rate limits)
  GITHUB_API_URL    API base URL (default: https://api.github.com)

Examples:
  contributors-sync
  contributors-sync timlinux nixmywindows
  contributors-sync --dry-run
  GITHUB_TOKEN=ghp_xxx contributors-sync")]
pub struct Cli {
    /// Repository owner
    #[arg(value_name = "OWNER", default_value = DEFAULT_OWNER)]
    pub owner: String,

    /// Repository name
    #[arg(value_name = "REPO", default_value = DEFAULT_REPO)]
    pub repo: String,

    /// Print generated table without modifying README.md
    #[arg(long)]
    pub dry_run: bool,

    /// Document containing the contributors markers
    #[arg(long, value_name = "PATH", default_value = DEFAULT_README)]
    pub readme: PathBuf,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress output (quiet mode)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

fn get_styles() -> clap::builder::Styles {
    use clap::builder::styling::AnsiColor;

    clap::builder::Styles::styled()
        .usage(AnsiColor::Cyan.on_default().bold())
        .header(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Green.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}
