use thiserror::Error;

/// Errors raised while reading the profile file.
#[derive(Debug, Error)]
pub(crate) enum ProfileError {
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),
}
