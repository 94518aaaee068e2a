// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Projection of handler invocations into props records.
//!
//! A [`Projector`] turns the arguments of one handler invocation into the
//! record that is merged with the latest props. It has one method per
//! invocation shape, mirroring [`EventHandler::invoke`](crate::EventHandler::invoke)
//! and [`EventHandler::invoke_with_event`](crate::EventHandler::invoke_with_event).
//!
//! The [`DefaultProjector`] produces an `event` field:
//!
//! ```
//! use propflux_stream::{DefaultProjector, Projector};
//! use serde_json::json;
//!
//! let record = DefaultProjector.project(json!("bar"), "baz").unwrap();
//! assert_eq!(record.to_json(), json!({ "event": { "id": "baz", "payload": "bar" } }));
//!
//! let record = DefaultProjector
//!     .project_with_event(json!("foo"), json!("bar"), "baz")
//!     .unwrap();
//! assert_eq!(
//!     record.to_json(),
//!     json!({ "event": { "id": "baz", "payload": "foo", "event": "bar" } })
//! );
//! ```

use crate::props::Props;
use propflux_core::Result;
use serde_json::{json, Value};

/// Field under which [`DefaultProjector`] stores the event record.
pub const EVENT_FIELD: &str = "event";

/// Maps a handler invocation to a props record.
///
/// Projectors run synchronously inside the handler call. A returned error is
/// delivered on the output stream and terminates it.
pub trait Projector: Send + Sync {
    /// Projects an invocation that carried only a payload.
    ///
    /// # Errors
    /// Returns an error if the payload cannot be projected.
    fn project(&self, payload: Value, id: &str) -> Result<Props>;

    /// Projects an invocation that carried a payload and a secondary event.
    ///
    /// Defaults to [`project`](Self::project), ignoring `event`.
    ///
    /// # Errors
    /// Returns an error if the payload cannot be projected.
    fn project_with_event(&self, payload: Value, event: Value, id: &str) -> Result<Props> {
        let _ = event;
        self.project(payload, id)
    }
}

/// Stateless default projection: `{ event: { id, payload[, event] } }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProjector;

impl Projector for DefaultProjector {
    fn project(&self, payload: Value, id: &str) -> Result<Props> {
        Ok(Props::new().with(EVENT_FIELD, json!({ "id": id, "payload": payload })))
    }

    fn project_with_event(&self, payload: Value, event: Value, id: &str) -> Result<Props> {
        Ok(Props::new().with(
            EVENT_FIELD,
            json!({ "id": id, "payload": payload, "event": event }),
        ))
    }
}

type EventFn = Box<dyn Fn(Value, Value, &str) -> Result<Props> + Send + Sync>;

/// Adapts closures into a [`Projector`].
///
/// Without [`with_event`](Self::with_event), invocations that carry a
/// secondary event are projected by the payload closure alone.
///
/// ```
/// use propflux_stream::{FnProjector, Projector, Props};
/// use serde_json::json;
///
/// let projector = FnProjector::new(|payload, _id: &str| Ok(Props::new().with("value", payload)))
///     .with_event(|payload, event, _id: &str| {
///         Ok(Props::new().with("value", payload).with("source", event))
///     });
///
/// let record = projector.project_with_event(json!(1), json!("input"), "change").unwrap();
/// assert_eq!(record.to_json(), json!({ "value": 1, "source": "input" }));
/// ```
pub struct FnProjector<F> {
    on_payload: F,
    on_event: Option<EventFn>,
}

impl<F> FnProjector<F>
where
    F: Fn(Value, &str) -> Result<Props> + Send + Sync,
{
    pub fn new(on_payload: F) -> Self {
        Self {
            on_payload,
            on_event: None,
        }
    }

    /// Sets the closure used for invocations that carry a secondary event.
    #[must_use]
    pub fn with_event<G>(mut self, on_event: G) -> Self
    where
        G: Fn(Value, Value, &str) -> Result<Props> + Send + Sync + 'static,
    {
        self.on_event = Some(Box::new(on_event));
        self
    }
}

impl<F> Projector for FnProjector<F>
where
    F: Fn(Value, &str) -> Result<Props> + Send + Sync,
{
    fn project(&self, payload: Value, id: &str) -> Result<Props> {
        (self.on_payload)(payload, id)
    }

    fn project_with_event(&self, payload: Value, event: Value, id: &str) -> Result<Props> {
        match &self.on_event {
            Some(on_event) => on_event(payload, event, id),
            None => (self.on_payload)(payload, id),
        }
    }
}
