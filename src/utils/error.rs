use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the engine and its collaborators.
///
/// A call that fails leaves the engine exactly as it was.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Checks that `density` is a probability.
pub(crate) fn is_probability(density: f64) -> bool {
    (0.0..=1.0).contains(&density)
}
