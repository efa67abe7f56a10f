//! Error types shared by the feed pipeline.

use thiserror::Error;

/// Errors that can occur while building a calendar feed.
#[derive(Debug, Error)]
pub enum Error {
    /// A required request parameter is absent or blank.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// Address resolution returned no match.
    #[error("no address found for the given post code and house number")]
    AddressNotFound,

    /// Address resolution matched more than one address.
    #[error("expected exactly one address but got {0}")]
    AmbiguousAddress(usize),

    /// The network call to the waste API failed.
    #[error("waste API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The waste API response envelope did not have the expected shape.
    #[error("waste API returned a malformed response envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    /// An envelope entry did not match the expected payload shape.
    #[error("waste API returned a malformed {kind}: {source}")]
    InvalidPayload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A pickup record carried a category code missing from the label table.
    #[error("unknown waste category code: {0}")]
    UnknownCategory(String),
}
