use thiserror::Error;

/// Failure modes of a single album resolution.
///
/// The first four abort the resolution as soon as they occur; no further
/// search variants are tried. `NoGenres` means every variant was tried and
/// none of the pages carried a genre listing, which callers may treat as
/// an empty result rather than a failure.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("search request failed: {0}")]
    Search(String),

    #[error("malformed search response: {0}")]
    Decode(String),

    #[error("failed to open page: {0}")]
    Fetch(String),

    #[error("failed to parse page: {0}")]
    Parse(String),

    #[error("couldn't find any genres")]
    NoGenres,
}

/// A resolution failure tagged with the query it belongs to.
#[derive(Debug)]
pub struct Failure {
    pub label: String,
    pub error: LookupError,
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error finding genres for {}: {}", self.label, self.error)
    }
}
