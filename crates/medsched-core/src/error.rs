//! Infrastructure errors
//!
//! Field validation failures are not errors: they are data, reported
//! through [`crate::ValidationErrors`]. This enum only covers what
//! surrounds the form: files, the terminal, configuration and delivery.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // --- Wrapped library errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Terminal could not be set up or drawn to
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // --- Startup inputs ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Invalid doctor roster: {message}")]
    InvalidRoster { message: String },

    /// The appointment to edit could not be read
    #[error("Invalid initial values in {}: {message}", path.display())]
    InvalidInitialValues { path: PathBuf, message: String },

    // --- After submit ---
    #[error("Failed to deliver appointment: {message}")]
    Delivery { message: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Self::MissingFile { path: path.into() }
    }

    pub fn invalid_roster(message: impl Into<String>) -> Self {
        Self::InvalidRoster {
            message: message.into(),
        }
    }

    pub fn invalid_initial_values(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidInitialValues {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
        }
    }

    /// The user can retry or keep going with defaults
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Delivery { .. } | Error::Config { .. })
    }

    /// The form cannot be shown at all
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Terminal { .. }
                | Error::MissingFile { .. }
                | Error::InvalidRoster { .. }
                | Error::InvalidInitialValues { .. }
        )
    }
}

/// Log what was being attempted when an error surfaces, then propagate it
/// unchanged.
pub trait ResultExt<T> {
    fn context(self, what: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`], building the description only on error
    fn with_context<F>(self, what: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, what: impl Into<String>) -> Result<T> {
        let what = what.into();
        self.with_context(|| what)
    }

    fn with_context<F>(self, what: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let error: Error = e.into();
            tracing::error!("{} failed: {}", what(), error);
            error
        })
    }
}
