// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum TloccError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<TloccError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, TloccError>;

impl TloccError {
    /// Strips any number of [`TloccError::Context`] layers.
    pub fn root(&self) -> &TloccError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True for failures that only affect a single file or directory and
    /// must not stop a run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.root(),
            Self::Infrastructure(
                InfrastructureError::FileReadFailed { .. }
                    | InfrastructureError::DirectoryListFailed { .. }
            )
        )
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Unknown encoding label '{label}'")]
    UnknownEncoding { label: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{role} directory \"{path}\" is not valid")]
    DirectoryMissing { role: String, path: PathBuf },
}

/// Why a single source file could not be counted.
#[derive(Debug, Error)]
pub enum ReadFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("content is not valid {encoding}")]
    Decode { encoding: String },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileReadFailed {
        path: PathBuf,
        #[source]
        source: ReadFailure,
    },

    #[error("Failed to list directory '{path}': {reason}")]
    DirectoryListFailed { path: PathBuf, reason: String },

    #[error("Could not create target directory '{path}': {source}")]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report '{path}': {reason}")]
    ReportWriteFailed {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to load config file '{path}': {reason}")]
    ConfigLoadFailed { path: PathBuf, reason: String },
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<TloccError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| TloccError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TloccError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
