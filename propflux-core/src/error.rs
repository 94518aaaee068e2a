// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for props streams.
//!
//! Errors travel in-band as [`StreamItem::Error`](crate::StreamItem::Error) and
//! terminate the stream that carries them. There are two sources:
//!
//! - the upstream props stream, whose errors are forwarded verbatim
//! - a user supplied projector, whose failure surfaces where the handler was invoked
//!
//! # Examples
//!
//! ```
//! use propflux_core::{PropsError, Result};
//!
//! fn project() -> Result<()> {
//!     Err(PropsError::projection_error("click", "payload is not an object"))
//! }
//!
//! assert!(project().is_err());
//! ```

/// Root error type for all propflux operations.
#[derive(Debug, thiserror::Error)]
pub enum PropsError {
    /// The upstream stream or an operator failed.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// A projector could not turn a handler invocation into a record.
    #[error("Projection error for `{id}`: {context}")]
    ProjectionError {
        /// Identifier of the handler that was invoked
        id: String,
        /// Description of the failure
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided callbacks so they can be
    /// propagated through a props stream.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PropsError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a projection error for the handler `id`
    pub fn projection_error(id: impl Into<String>, context: impl Into<String>) -> Self {
        Self::ProjectionError {
            id: id.into(),
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` if the error was raised by a projector.
    #[must_use]
    pub const fn is_projection_error(&self) -> bool {
        matches!(self, Self::ProjectionError { .. })
    }
}

/// Specialized Result type for propflux operations
pub type Result<T> = std::result::Result<T, PropsError>;

/// Extension trait for converting errors into `PropsError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoPropsError {
    /// Convert this error into a `PropsError` with additional context
    fn into_props_error(self, context: &str) -> PropsError;

    /// Convert this error into a `PropsError` without additional context
    fn into_props(self) -> PropsError
    where
        Self: Sized,
    {
        self.into_props_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoPropsError for E {
    fn into_props_error(self, context: &str) -> PropsError {
        if context.is_empty() {
            PropsError::user_error(self)
        } else {
            PropsError::stream_error(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(PropsError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(PropsError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<PropsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            PropsError::UserError(inner) => PropsError::StreamProcessingError {
                context: format!("{}: {inner}", f()),
            },
            other => other,
        })
    }
}

impl Clone for PropsError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            Self::ProjectionError { id, context } => Self::ProjectionError {
                id: id.clone(),
                context: context.clone(),
            },
            // Boxed errors cannot be cloned, keep the message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
        }
    }
}
