// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Projectors for observing and breaking handler invocations.

use parking_lot::Mutex;
use propflux_core::{PropsError, Result};
use propflux_stream::{Projector, Props};
use serde_json::Value;
use std::sync::Arc;

/// Arguments of one projector call.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub payload: Value,
    pub event: Option<Value>,
    pub id: String,
}

/// Projector returning a fixed record and recording every call.
///
/// Clones share the recorded calls, so a test can keep one clone and hand
/// the other to a factory.
///
/// ```rust
/// use propflux_test_utils::{Invocation, RecordingProjector};
/// use propflux_stream::{Projector, Props};
/// use serde_json::json;
///
/// let projector = RecordingProjector::returning(Props::new().with("baz", "BAR"));
/// let record = projector.project(json!("bar"), "baz").unwrap();
///
/// assert_eq!(record.data("baz"), Some(&json!("BAR")));
/// assert_eq!(projector.invocations()[0].payload, json!("bar"));
/// ```
#[derive(Debug, Clone)]
pub struct RecordingProjector {
    record: Props,
    calls: Arc<Mutex<Vec<Invocation>>>,
}

impl RecordingProjector {
    pub fn returning(record: Props) -> Self {
        Self {
            record,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Calls served so far, oldest first.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, payload: Value, event: Option<Value>, id: &str) -> Props {
        self.calls.lock().push(Invocation {
            payload,
            event,
            id: id.to_string(),
        });
        self.record.clone()
    }
}

impl Projector for RecordingProjector {
    fn project(&self, payload: Value, id: &str) -> Result<Props> {
        Ok(self.record(payload, None, id))
    }

    fn project_with_event(&self, payload: Value, event: Value, id: &str) -> Result<Props> {
        Ok(self.record(payload, Some(event), id))
    }
}

/// Projector that fails every call with a projection error.
#[derive(Debug, Clone)]
pub struct FailingProjector {
    context: String,
}

impl FailingProjector {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl Projector for FailingProjector {
    fn project(&self, _payload: Value, id: &str) -> Result<Props> {
        Err(PropsError::projection_error(id, self.context.clone()))
    }
}
