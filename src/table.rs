use crate::github::Contributor;
use html_escape::encode_quoted_attribute;
use std::cmp::Ordering;

const HEADER: &str = "| Avatar | GitHub | Contributions |";
const SEPARATOR: &str = "|--------|--------|---------------|";
const AVATAR_SIZE: u32 = 50;

/// Most contributions first, then login ignoring case
pub fn compare_contributors(a: &Contributor, b: &Contributor) -> Ordering {
    b.contributions
        .cmp(&a.contributions)
        .then_with(|| a.login.to_lowercase().cmp(&b.login.to_lowercase()))
}

/// Render the Markdown table, one row per contributor.
///
/// Callers must reject an empty list before rendering. Every interpolated
/// value is HTML-escaped. No trailing newline.
pub fn render_table(contributors: &[Contributor]) -> String {
    let mut sorted: Vec<&Contributor> = contributors.iter().collect();
    sorted.sort_by(|a, b| compare_contributors(a, b));

    let mut lines = Vec::with_capacity(sorted.len() + 2);
    lines.push(HEADER.to_string());
    lines.push(SEPARATOR.to_string());
    lines.extend(sorted.into_iter().map(render_row));

    lines.join("\n")
}

fn render_row(contributor: &Contributor) -> String {
    let login = encode_quoted_attribute(&contributor.login);
    let avatar_url = encode_quoted_attribute(&contributor.avatar_url);
    let profile_url = contributor.profile_url();
    let profile_url = encode_quoted_attribute(&profile_url);

    let avatar_cell = format!(
        r#"<a href="{profile}"><img src="{avatar}" width="{size}" height="{size}" alt="{login}"/></a>"#,
        profile = profile_url,
        avatar = avatar_url,
        size = AVATAR_SIZE,
        login = login,
    );
    let github_cell = format!(
        r#"<a href="{}"><strong>{}</strong></a>"#,
        profile_url, login
    );

    format!(
        "| {} | {} | {} |",
        avatar_cell, github_cell, contributor.contributions
    )
}
