// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::projector::Projector;
use crate::props::Props;
use propflux_core::{PropsError, StreamItem, Subject};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

struct HandlerInner {
    source_id: String,
    project: Arc<dyn Projector>,
    events: Subject<Props>,
}

/// Event handler injected into props by
/// [`WithEventHandlers`](crate::WithEventHandlers).
///
/// Invoking it projects its arguments into a record and pushes that record
/// into the side-channel of the stream that created it. Nothing is returned;
/// the effect shows up as a new item on that stream.
///
/// Clones share identity: every item emitted by one stream carries the same
/// handler, and [`same_as`](Self::same_as) / `==` compare that identity.
#[derive(Clone)]
pub struct EventHandler {
    inner: Arc<HandlerInner>,
}

impl EventHandler {
    pub(crate) fn new(
        source_id: impl Into<String>,
        project: Arc<dyn Projector>,
        events: Subject<Props>,
    ) -> Self {
        Self {
            inner: Arc::new(HandlerInner {
                source_id: source_id.into(),
                project,
                events,
            }),
        }
    }

    /// Identifier this handler was built for.
    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.inner.source_id
    }

    /// Invokes the handler with a payload.
    pub fn invoke(&self, payload: impl Into<Value>) {
        let record = self.inner.project.project(payload.into(), self.source_id());
        self.dispatch(record);
    }

    /// Invokes the handler with a payload and the underlying platform event.
    pub fn invoke_with_event(&self, payload: impl Into<Value>, event: impl Into<Value>) {
        let record =
            self.inner
                .project
                .project_with_event(payload.into(), event.into(), self.source_id());
        self.dispatch(record);
    }

    /// Returns `true` if both handlers come from the same stream.
    #[must_use]
    pub fn same_as(&self, other: &EventHandler) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns `true` once the owning stream has ended or been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.events.is_closed()
    }

    fn dispatch(&self, record: Result<Props, PropsError>) {
        let item = match record {
            Ok(record) => StreamItem::Value(record),
            Err(err) => {
                warn!("projector for `{}` failed: {}", self.source_id(), err);
                StreamItem::Error(err)
            }
        };

        if self.inner.events.send(item).is_err() {
            debug!(
                "handler `{}` invoked after its stream ended; ignoring",
                self.source_id()
            );
        }
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandler")
            .field("source_id", &self.inner.source_id)
            .finish_non_exhaustive()
    }
}
