//! Wiki domain: rendered wiki pages.

#[cfg(feature = "http")]
pub mod client;

/// Path of the rendered index page for `repo_id`.
///
/// `repo_id` is inserted verbatim: no percent-encoding and no filtering of
/// `/` or `..`, so it can address resources outside `/wikis/{id}/`.
pub fn index_path(repo_id: &str) -> String {
    format!("/wikis/{}/index.html", repo_id)
}
