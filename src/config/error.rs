use std::path::PathBuf;
use std::{error, fmt, io};

/// An error while loading or saving a [`NetworkConfig`][super::NetworkConfig].
#[derive(Debug)]
pub enum Error {
    /// The JSON is malformed or does not describe a config, e.g. because of an unknown
    /// `error_type`. Contains the file it was read from, if any.
    Parse {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    /// The config could not be encoded as JSON.
    Encode(serde_json::Error),
    /// A config file or its parent directory could not be read or written.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parse {
                path: Some(path),
                source,
            } => write!(f, "invalid network config in {}: {}", path.display(), source),
            Self::Parse { path: None, source } => write!(f, "invalid network config: {}", source),
            Self::Encode(e) => write!(f, "failed to encode network config: {}", e),
            Self::Io { path, source } => {
                write!(f, "cannot access config file {}: {}", path.display(), source)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Encode(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}
