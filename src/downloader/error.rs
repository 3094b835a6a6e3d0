extern crate reqwest;
extern crate serde_json;

use reqwest::StatusCode;
use std::{
    error::Error as StdError, fmt, io, path::PathBuf, result::Result as StdResult,
};

#[derive(Debug)]
pub enum Kind {
    InvalidArgument,
    Network(reqwest::Error),
    Status(StatusCode),
    Api,
    Decode(serde_json::Error),
    Io(PathBuf, io::Error),
    Tool,
}
#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

#[derive(Debug)]
pub struct Error(Box<Inner>);
pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::InvalidArgument => write!(f, "Invalid argument")?,
            Kind::Network(err) => write!(f, "Error sending request: {}", err)?,
            Kind::Status(status) => write!(f, "Remote responded {}", status)?,
            Kind::Api => write!(f, "API request failed")?,
            Kind::Decode(err) => write!(f, "Error decoding response: {}", err)?,
            Kind::Io(path, err) => write!(f, "{}: {}", path.display(), err)?,
            Kind::Tool => write!(f, "External tool failed")?,
        }
        self.write_description(f)
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Network(x) => Some(x),
            Kind::Decode(x) => Some(x),
            Kind::Io(_, x) => Some(x),
            Kind::InvalidArgument | Kind::Status(_) | Kind::Api | Kind::Tool => None,
        }
    }
}
impl Error {
    pub(crate) fn with_kind(kind: Kind) -> Self {
        Self(Box::new(Inner {
            kind,
            description: None,
        }))
    }
    pub(crate) fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self(Box::new(Inner {
            kind,
            description: Some(description.into()),
        }))
    }
    pub fn kind(&self) -> &Kind {
        &self.0.kind
    }
    /// All attempts of a request were used up without a successful response.
    pub fn is_remote_unavailable(&self) -> bool {
        matches!(self.0.kind, Kind::Network(_) | Kind::Status(_))
    }
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.0.kind, Kind::InvalidArgument)
    }
    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)
        } else {
            Ok(())
        }
    }
}

pub(crate) fn invalid_argument<T: Into<String>>(description: T) -> Error {
    Error::with_description(Kind::InvalidArgument, description)
}
pub(crate) fn network_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Network(err))
}
pub(crate) fn io_error<P: Into<PathBuf>>(path: P) -> impl FnOnce(io::Error) -> Error {
    move |err| Error::with_kind(Kind::Io(path.into(), err))
}
pub(crate) fn tool_error<T: Into<String>>(description: T) -> Error {
    Error::with_description(Kind::Tool, description)
}
