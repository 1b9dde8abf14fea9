use std::fmt;

/// Transport-layer failures of the metadata scrape. Kept distinct from "the page
/// had no usable tags", which is not an error (see `metadata::extract`), even
/// though the generate command maps every variant to the same fallback poster.
#[derive(Debug)]
pub enum Error {
    /// The proxy itself answered with a non-2xx status.
    Status(u16, String),
    /// The proxy answered, but reported that fetching the target failed.
    TargetStatus(u16),
    /// The proxy envelope was not valid JSON.
    Json(serde_json::Error),
    /// The proxy envelope had no usable `contents` field.
    EmptyContents,
    Other(Box<dyn std::error::Error>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Status(code, message) => write!(f, "Proxy: {code} {message}"),
            Error::TargetStatus(code) => write!(f, "Proxy reported target failure: {code}"),
            Error::Json(error) => write!(f, "JSON: {error}"),
            Error::EmptyContents => write!(f, "Proxy response carried no page contents"),
            Error::Other(error) => write!(f, "Other: {error}"),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(value: ureq::Error) -> Self {
        match value {
            ureq::Error::Status(status, response) => {
                Error::Status(status, response.into_string().unwrap_or_default())
            }
            _ => Error::Other(value.into()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Json(value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Other(value.into())
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
