// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Event-handler injection for props streams.
//!
//! Applying an [`EventHandlerProps`] transformer to a props stream yields a
//! [`WithEventHandlers`] stream: every item gets an [`EventHandler`] under
//! `on` + capitalized id, and every invocation of that handler is fed back as
//! a new item carrying the projected event merged with the latest props.
//!
//! # Entry points
//!
//! | Call | Projector |
//! |------|-----------|
//! | [`with_event_handler_props(id)`](with_event_handler_props) | [`DefaultProjector`] |
//! | [`event_handler_props()`](event_handler_props)`.for_id(id)` | [`DefaultProjector`] |
//! | [`event_handler_props_with(p)`](event_handler_props_with)`.for_id(id)` | `p` |
//! | [`event_handler_props_fn(f)`](event_handler_props_fn)`.for_id(id)` | closure `f` |
//! | `stream.`[`with_event_handlers(id)`](WithEventHandlersExt::with_event_handlers) | [`DefaultProjector`] |
//!
//! # Example
//!
//! ```
//! use propflux_stream::{has_event, Props, WithEventHandlersExt};
//! use propflux_core::StreamItem;
//! use futures::StreamExt;
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, rx) = futures::channel::mpsc::unbounded::<StreamItem<Props>>();
//! let mut props = rx.with_event_handlers("click");
//!
//! tx.unbounded_send(StreamItem::Value(Props::new().with("label", "OK"))).unwrap();
//!
//! let first = props.next().await.unwrap().unwrap();
//! assert!(!has_event("click")(&first));
//!
//! first.handler("onClick").unwrap().invoke(json!({ "x": 3 }));
//!
//! let clicked = props.next().await.unwrap().unwrap();
//! assert!(has_event("click")(&clicked));
//! assert_eq!(clicked.data("label"), Some(&json!("OK")));
//! # }
//! ```

mod implementation;

pub use implementation::WithEventHandlers;

use crate::key::derive_key;
use crate::projector::{DefaultProjector, FnProjector, Projector};
use crate::props::Props;
use futures::Stream;
use propflux_core::{Result, StreamItem};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Transformer that turns a props stream into a [`WithEventHandlers`] stream.
///
/// Cheap to clone. Each [`apply`](Self::apply) creates an independent
/// side-channel and handler; nothing is shared between applications.
#[derive(Clone)]
pub struct EventHandlerProps {
    id: String,
    key: String,
    project: Arc<dyn Projector>,
}

impl EventHandlerProps {
    /// Transformer for `id` using the [`DefaultProjector`].
    pub fn new(id: impl Into<String>) -> Self {
        HandlerPropsFactory::default().for_id(id)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Props field the handler is attached under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Enriches `props` with the event handler.
    pub fn apply<S>(&self, props: S) -> WithEventHandlers<S>
    where
        S: Stream<Item = StreamItem<Props>>,
    {
        WithEventHandlers::new(props, &self.id, self.key.clone(), Arc::clone(&self.project))
    }
}

impl fmt::Debug for EventHandlerProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlerProps")
            .field("id", &self.id)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Factory of [`EventHandlerProps`] sharing one projector.
#[derive(Clone)]
pub struct HandlerPropsFactory {
    project: Arc<dyn Projector>,
}

impl HandlerPropsFactory {
    /// Factory whose transformers use `project`.
    pub fn with_projector<P>(project: P) -> Self
    where
        P: Projector + 'static,
    {
        Self {
            project: Arc::new(project),
        }
    }

    /// Factory whose transformers use the closure `project`.
    pub fn from_fn<F>(project: F) -> Self
    where
        F: Fn(Value, &str) -> Result<Props> + Send + Sync + 'static,
    {
        Self::with_projector(FnProjector::new(project))
    }

    /// Transformer for `id`.
    pub fn for_id(&self, id: impl Into<String>) -> EventHandlerProps {
        let id = id.into();
        EventHandlerProps {
            key: derive_key(&id),
            id,
            project: Arc::clone(&self.project),
        }
    }
}

impl Default for HandlerPropsFactory {
    fn default() -> Self {
        Self::with_projector(DefaultProjector)
    }
}

impl fmt::Debug for HandlerPropsFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerPropsFactory").finish_non_exhaustive()
    }
}

/// Transformer for `id` with the [`DefaultProjector`].
pub fn with_event_handler_props(id: impl Into<String>) -> EventHandlerProps {
    event_handler_props().for_id(id)
}

/// Factory with the [`DefaultProjector`].
#[must_use]
pub fn event_handler_props() -> HandlerPropsFactory {
    HandlerPropsFactory::default()
}

/// Factory whose default projector is `project`.
pub fn event_handler_props_with<P>(project: P) -> HandlerPropsFactory
where
    P: Projector + 'static,
{
    HandlerPropsFactory::with_projector(project)
}

/// Factory whose default projector is the closure `project`.
pub fn event_handler_props_fn<F>(project: F) -> HandlerPropsFactory
where
    F: Fn(Value, &str) -> Result<Props> + Send + Sync + 'static,
{
    HandlerPropsFactory::from_fn(project)
}

/// Extension trait providing event-handler injection on props streams.
pub trait WithEventHandlersExt: Stream<Item = StreamItem<Props>> + Sized {
    /// Shorthand for `with_event_handler_props(id).apply(self)`.
    fn with_event_handlers(self, id: impl Into<String>) -> WithEventHandlers<Self> {
        with_event_handler_props(id).apply(self)
    }

    /// Applies an existing transformer.
    fn with_event_handler_props(self, transformer: &EventHandlerProps) -> WithEventHandlers<Self> {
        transformer.apply(self)
    }
}

impl<S> WithEventHandlersExt for S where S: Stream<Item = StreamItem<Props>> + Sized {}
