//! Load errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Where a model description came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    File(PathBuf),
    Inline,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::File(path) => write!(f, "{}", path.display()),
            Origin::Inline => f.write_str("<inline>"),
        }
    }
}

/// Failure to read or interpret a model description.
///
/// A file that fails validation contributes nothing to the model.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{origin}: invalid model description: {source}")]
    Json {
        origin: Origin,
        #[source]
        source: serde_json::Error,
    },

    #[error("{origin}: {what} `{name}` has an empty identifier")]
    EmptyIdentifier {
        origin: Origin,
        what: &'static str,
        name: String,
    },

    #[error("{origin}: assembly name must not be empty")]
    UnnamedAssembly { origin: Origin },
}
