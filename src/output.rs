use colored::Colorize;
use std::fmt::Display;

/// How chatty the reporter is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Levelled log lines on stderr; stdout is reserved for the dry-run table
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    pub fn debug(&self, message: impl Display) {
        if self.is_verbose() {
            eprintln!("{} {}", "[DEBUG]".dimmed(), message.to_string().dimmed());
        }
    }

    pub fn info(&self, message: impl Display) {
        if self.verbosity != Verbosity::Quiet {
            eprintln!("{} {}", "[INFO]".cyan(), message);
        }
    }

    pub fn warn(&self, message: impl Display) {
        if self.verbosity != Verbosity::Quiet {
            eprintln!("{} {}", "[WARN]".yellow(), message);
        }
    }

    /// Errors are printed regardless of verbosity
    pub fn error(&self, message: impl Display) {
        eprintln!("{} {}", "[ERROR]".red().bold(), message);
    }

    /// Print unified diff between the current and regenerated document
    pub fn diff(&self, label: &str, existing: &str, new: &str) {
        use similar::{ChangeTag, TextDiff};

        if !self.is_verbose() {
            return;
        }

        eprintln!();
        eprintln!("  {} {}", "--- (current)".red(), label.dimmed());
        eprintln!("  {} {}", "+++ (generated)".green(), label.dimmed());

        let diff = TextDiff::from_lines(existing, new);

        for hunk in diff.unified_diff().context_radius(3).iter_hunks() {
            eprintln!("  {}", format!("{}", hunk.header()).cyan());
            for change in hunk.iter_changes() {
                let line = change.to_string_lossy();
                let line_trimmed = line.trim_end_matches('\n');
                match change.tag() {
                    ChangeTag::Delete => eprintln!("  {}", format!("-{}", line_trimmed).red()),
                    ChangeTag::Insert => eprintln!("  {}", format!("+{}", line_trimmed).green()),
                    ChangeTag::Equal => eprintln!("  {}", format!(" {}", line_trimmed).dimmed()),
                }
            }
        }
        eprintln!();
    }
}
