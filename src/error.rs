use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the fetch/flatten pipeline.
///
/// None of these are retried or converted to defaults internally; every
/// failure propagates to the caller as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure (DNS, connect, timeout) before an HTTP status
    /// was obtained.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("request failed with HTTP {status}")]
    Http { status: StatusCode },

    /// The API answered 200 but the body carries an error payload
    /// (`[{"message": ...}]`), e.g. for an unknown indicator code.
    #[error("world bank api error: {0}")]
    Api(String),

    /// The response body is not valid JSON, or a section of it does not
    /// deserialize into the documented record layout.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The body parsed as JSON but is not the expected two-element
    /// `[meta, [entries...]]` array.
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),

    /// An observation's `value` field is present but cannot be read as a
    /// number.
    #[error("non-numeric observation value: {raw}")]
    Coercion { raw: String },
}

pub type Result<T> = std::result::Result<T, Error>;
