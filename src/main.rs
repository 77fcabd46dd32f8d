mod cli;
mod commands;
mod config;
mod error;
mod github;
mod output;
mod readme;
mod table;

use clap::Parser;
use cli::Cli;
use config::Settings;
use error::Result;
use github::GitHubClient;
use output::{Reporter, Verbosity};

fn main() {
    let cli = Cli::parse();
    let reporter = Reporter::new(Verbosity::from_flags(cli.verbose, cli.quiet));

    if let Err(e) = run(&cli, &reporter) {
        reporter.error(&e);
        for hint in e.hints() {
            reporter.error(hint);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli, reporter: &Reporter) -> Result<()> {
    let settings = Settings::from_cli(cli)?;

    reporter.info(format!("Generating contributors for {}", settings.slug()));
    reporter.debug(format!("API base URL: {}", settings.api_url));

    let client = GitHubClient::new(&settings, *reporter)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = commands::sync_contributors(&settings, &client, reporter, &mut out)?;
    if outcome == commands::SyncOutcome::Updated {
        reporter.info("Contributors table updated successfully!");
    }

    Ok(())
}
