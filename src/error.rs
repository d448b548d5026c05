//! Library error types.
//!
//! Rendering and layout are infallible by construction; the only fallible
//! surfaces are color literals and config file handling.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    /// A color literal that is not of the form `#rrggbb`.
    #[error("invalid color literal {0:?} (expected \"#rrggbb\")")]
    InvalidColor(String),

    #[error("config file I/O: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("config serialization: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
