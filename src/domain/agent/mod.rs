//! Agent domain: documentation generation requests.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

/// Endpoint that starts wiki generation for a repository.
pub const GENERATE_PATH: &str = "/agents/generate";

/// Endpoint listing generated documents.
pub const LIST_PATH: &str = "/agents/list";

/// Parameters for generating a wiki for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub owner: String,
    pub repo: String,
    pub wiki_path: String,
    pub wiki_url: String,
    /// Files to include, in order. Omitted from the body when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
}

impl GenerateRequest {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        wiki_path: impl Into<String>,
        wiki_url: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            wiki_path: wiki_path.into(),
            wiki_url: wiki_url.into(),
            files: None,
        }
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }
}
