use std::path::PathBuf;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the application
#[derive(Debug)]
pub enum Error {
    /// The routes root is missing or is not a directory.
    RoutesRootNotFound { path: PathBuf },
    SerializationError(String),
}

impl Error {
    /// Returns true for errors caused by how the tool was invoked rather than by the filesystem.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::RoutesRootNotFound { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::RoutesRootNotFound { path } => {
                writeln!(
                    f,
                    "`{}` does not exist or is not a directory.",
                    path.display()
                )?;
                write!(f, "This tool must be started from the project root.")
            }
            Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(format!("JSON: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::SerializationError(format!("YAML: {}", err))
    }
}
