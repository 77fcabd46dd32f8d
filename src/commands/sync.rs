use crate::config::{Settings, PER_PAGE};
use crate::error::{Result, SyncError};
use crate::github::{fetch_all_contributors, ContributorPages};
use crate::output::Reporter;
use crate::readme::{read_document, splice, write_atomically};
use crate::table::render_table;
use std::io::Write;

const BANNER_WIDTH: usize = 60;

/// What a run ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Table printed, nothing touched on disk
    DryRun,
    /// Document already contains this exact table
    Unchanged,
    /// Document rewritten
    Updated,
}

/// Fetch, render and splice the contributors table into the target document.
///
/// The dry-run table goes to `out`; log lines go through `reporter`.
pub fn sync_contributors(
    settings: &Settings,
    source: &dyn ContributorPages,
    reporter: &Reporter,
    out: &mut dyn Write,
) -> Result<SyncOutcome> {
    let contributors = fetch_all_contributors(source, PER_PAGE, reporter)?;

    if contributors.is_empty() {
        return Err(SyncError::NoContributors);
    }

    let table = render_table(&contributors);

    if settings.dry_run {
        print_dry_run(out, &table)?;
        reporter.info("Dry run complete - no files were modified");
        return Ok(SyncOutcome::DryRun);
    }

    let path = settings.readme.as_path();
    let current = read_document(path)?;
    let updated = splice(&current, &table)?;

    if updated == current {
        reporter.info(format!(
            "No changes needed - {} is already up to date",
            path.display()
        ));
        return Ok(SyncOutcome::Unchanged);
    }

    reporter.diff(&path.display().to_string(), &current, &updated);
    write_atomically(path, &updated)?;
    reporter.info(format!("Successfully updated {}", path.display()));

    Ok(SyncOutcome::Updated)
}

fn print_dry_run(out: &mut dyn Write, table: &str) -> Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "DRY RUN - Generated contributors table:")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", table)?;
    writeln!(out, "{}", rule)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::testing::{numbered, StaticPages};
    use crate::github::Contributor;
    use crate::readme::{END_MARKER, START_MARKER};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn settings(readme: &Path, dry_run: bool) -> Settings {
        Settings {
            owner: "octocat".to_string(),
            repo: "hello".to_string(),
            token: None,
            api_url: "http://localhost".to_string(),
            readme: readme.to_path_buf(),
            dry_run,
        }
    }

    fn readme_with_markers(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("README.md");
        fs::write(
            &path,
            format!("# Project\n\n{}\nold table\n{}\n\nFooter\n", START_MARKER, END_MARKER),
        )
        .unwrap();
        path
    }

    fn run(settings: &Settings, source: &StaticPages) -> (Result<SyncOutcome>, String) {
        let mut out = Vec::new();
        let result = sync_contributors(settings, source, &Reporter::default(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_updates_then_reports_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = readme_with_markers(temp_dir.path());
        let settings = settings(&path, false);
        let source = StaticPages::new(vec![vec![
            Contributor::new("bob", 5),
            Contributor::new("Alice", 5),
        ]]);

        let (first, _) = run(&settings, &source);
        assert_eq!(first.unwrap(), SyncOutcome::Updated);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Project\n\n"));
        assert!(content.ends_with("\n\nFooter\n"));
        assert!(!content.contains("old table"));
        assert!(content.find("Alice").unwrap() < content.find("bob").unwrap());

        let modified = fs::metadata(&path).unwrap().modified().unwrap();
        let (second, _) = run(&settings, &source);
        assert_eq!(second.unwrap(), SyncOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
    }

    #[test]
    fn test_dry_run_prints_table_and_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        // No README at all: dry run must not read it
        let path = temp_dir.path().join("README.md");
        let source = StaticPages::new(vec![numbered("user", 2)]);

        let (result, out) = run(&settings(&path, true), &source);

        assert_eq!(result.unwrap(), SyncOutcome::DryRun);
        assert!(out.contains("DRY RUN - Generated contributors table:"));
        assert!(out.contains("| Avatar | GitHub | Contributions |"));
        assert!(out.contains(&"=".repeat(60)));
        assert!(!path.exists());
    }

    #[test]
    fn test_no_contributors_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = readme_with_markers(temp_dir.path());
        let before = fs::read_to_string(&path).unwrap();

        let (result, _) = run(&settings(&path, false), &StaticPages::new(vec![]));

        assert!(matches!(result, Err(SyncError::NoContributors)));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_missing_document_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");
        let source = StaticPages::new(vec![numbered("user", 1)]);

        let (result, _) = run(&settings(&path, false), &source);

        assert!(matches!(result, Err(SyncError::DocumentNotFound(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_markers_leave_document_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");
        fs::write(&path, "# No markers here\n").unwrap();
        let source = StaticPages::new(vec![numbered("user", 1)]);

        let (result, _) = run(&settings(&path, false), &source);

        assert!(matches!(result, Err(SyncError::MarkersNotFound { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# No markers here\n");
    }

    #[test]
    fn test_fetch_error_propagates() {
        let temp_dir = TempDir::new().unwrap();
        let path = readme_with_markers(temp_dir.path());
        let mut source = StaticPages::new(vec![numbered("user", 1)]);
        source.fail_on = Some(1);

        let (result, _) = run(&settings(&path, false), &source);

        assert!(matches!(result, Err(SyncError::Api { status: 500, .. })));
    }
}
