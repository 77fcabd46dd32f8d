pub mod client;
pub mod model;

pub use client::GitHubClient;
pub use model::Contributor;

use crate::error::Result;
use crate::output::Reporter;

/// A source of contributor pages, numbered from 1
pub trait ContributorPages {
    /// Fetch a single page of at most `per_page` contributors
    fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Contributor>>;
}

/// Fetch every contributor, page by page, in API order.
///
/// Stops at the first empty page or the first page shorter than `per_page`.
/// Any error aborts the whole fetch; nothing is retried.
pub fn fetch_all_contributors<S>(
    source: &S,
    per_page: u32,
    reporter: &Reporter,
) -> Result<Vec<Contributor>>
where
    S: ContributorPages + ?Sized,
{
    let mut contributors = Vec::new();
    let mut page = 1;

    loop {
        let batch = source.fetch_page(page, per_page)?;

        if batch.is_empty() {
            reporter.info(format!("No more contributors (empty page {})", page));
            break;
        }

        let count = batch.len();
        contributors.extend(batch);
        reporter.info(format!("Fetched {} contributors from page {}", count, page));

        if count < per_page as usize {
            reporter.info(format!("Last page reached (got {} < {})", count, per_page));
            break;
        }

        page += 1;
    }

    reporter.info(format!("Total contributors fetched: {}", contributors.len()));
    Ok(contributors)
}
