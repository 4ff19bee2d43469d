use std::fmt::{self, Display};

/// Errors produced while decoding or validating a dataset.
#[derive(Debug)]
pub enum ModelError {
    Io(std::io::Error),
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
    InvalidDataset(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Io(err) => write!(f, "io error: {err}"),
            #[cfg(feature = "serde")]
            ModelError::Json(err) => write!(f, "malformed dataset json: {err}"),
            ModelError::InvalidDataset(msg) => {
                write!(f, "invalid dataset: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Io(err) => Some(err),
            #[cfg(feature = "serde")]
            ModelError::Json(err) => Some(err),
            ModelError::InvalidDataset(_) => None,
        }
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        ModelError::Io(err)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
