use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Network Error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP Error: {url} returned {status}")]
    Http {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Parse Error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Pattern Error: invalid {field} pattern {pattern:?}: {source}")]
    Pattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl SearchError {
    /// True for the errors raised while getting the feed, as opposed to bad
    /// user input.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            SearchError::Network(_) | SearchError::Http { .. } | SearchError::Parse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
