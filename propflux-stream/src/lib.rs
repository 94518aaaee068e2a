// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Event-handler injection for props streams.
//!
//! The crate provides one operator, [`WithEventHandlers`], and the pieces it
//! is built from:
//!
//! - **[`Props`]**: an ordered field map whose values are JSON data or [`EventHandler`]s
//! - **[`EventHandler`]**: the callable injected into every item; invoking it feeds the stream
//! - **[`Projector`]**: maps the arguments of one invocation to a props record
//! - **[`has_event_handler`] / [`has_event`]**: predicates for downstream filtering
//!
//! # Semantics
//!
//! For an identifier `id` the operator:
//!
//! 1. re-emits every input item with the handler attached under `derive_key(id)`
//!    (`"on"` + capitalized `id`);
//! 2. emits, for every handler invocation, the projected record merged with the
//!    latest input item, input fields winning on collision;
//! 3. drops invocations that happen before the input emitted anything;
//! 4. completes with the input and forwards the first error, after which the
//!    handler becomes a no-op.
//!
//! # Example
//!
//! ```
//! use propflux_stream::prelude::*;
//! use futures::{stream, StreamExt};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let input = stream::iter(vec![StreamItem::Value(Props::new().with("foo", "bar"))])
//!     .chain(stream::pending());
//! let mut props = with_event_handler_props("baz").apply(input);
//!
//! let first = props.next().await.unwrap().unwrap();
//! assert!(has_event_handler("baz")(&first));
//!
//! first.handler("onBaz").unwrap().invoke("bar");
//!
//! let second = props.next().await.unwrap().unwrap();
//! assert_eq!(second.data("event"), Some(&json!({ "id": "baz", "payload": "bar" })));
//! assert_eq!(second.data("foo"), Some(&json!("bar")));
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;

pub mod handler;
pub mod key;
pub mod predicates;
pub mod prelude;
pub mod projector;
pub mod props;
pub mod with_event_handlers;

pub use self::handler::EventHandler;
pub use self::key::derive_key;
pub use self::predicates::{event_id, has_event, has_event_handler};
pub use self::projector::{DefaultProjector, FnProjector, Projector, EVENT_FIELD};
pub use self::props::{PropValue, Props};
pub use self::with_event_handlers::{
    event_handler_props, event_handler_props_fn, event_handler_props_with,
    with_event_handler_props, EventHandlerProps, HandlerPropsFactory, WithEventHandlers,
    WithEventHandlersExt,
};
