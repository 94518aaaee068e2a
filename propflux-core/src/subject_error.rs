// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::PropsError;

/// Errors specific to subject operations (lifecycle and broadcasting).
///
/// Distinct from stream errors: a closed subject is a lifecycle fact, not a
/// failure of the data flowing through it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The subject has been closed and cannot accept new items.
    #[error("Subject is closed")]
    Closed,
}

impl From<SubjectError> for PropsError {
    fn from(err: SubjectError) -> Self {
        PropsError::stream_error(err.to_string())
    }
}
