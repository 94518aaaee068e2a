// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Propflux
//!
//! Props streams whose items carry an event handler that feeds back into the
//! stream.
//!
//! ## Overview
//!
//! A props stream is a `Stream<Item = StreamItem<Props>>` whose items are
//! records destined for a rendering layer. Applying
//! [`with_event_handler_props`] to it yields a stream whose items additionally
//! carry an [`EventHandler`] under `on` + capitalized id. Invoking the handler
//! emits one more item: the projected event merged with the latest props.
//!
//! ## Design Philosophy
//!
//! - **Props stay data**: handlers live next to the data in [`Props`] but are
//!   skipped when props are serialized for rendering.
//! - **One handler per application**: every item of one enriched stream
//!   carries the same handler, so a rendering layer can diff by identity.
//! - **Errors end the stream**: upstream and projector errors are forwarded
//!   once, after which the handler is a no-op.
//!
//! ## Quick Start
//!
//! ```rust
//! use propflux::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let input = stream::iter(vec![StreamItem::Value(Props::new().with("label", "OK"))])
//!     .chain(stream::pending());
//! let mut props = input.with_event_handlers("click");
//!
//! let first = props.next().await.unwrap().unwrap();
//! first.handler("onClick").unwrap().invoke("left");
//!
//! let clicked = props.next().await.unwrap().unwrap();
//! assert!(has_event("click")(&clicked));
//! # }
//! ```

// Re-export core types
pub use propflux_core::{PropsError, Result, StreamItem, Subject, SubjectError};

// Re-export the operator and its building blocks
pub use propflux_stream::{
    derive_key, event_handler_props, event_handler_props_fn, event_handler_props_with, event_id,
    has_event, has_event_handler, with_event_handler_props, DefaultProjector, EventHandler,
    EventHandlerProps, FnProjector, HandlerPropsFactory, Projector, PropValue, Props,
    WithEventHandlers, WithEventHandlersExt, EVENT_FIELD,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use propflux_stream::prelude::*;
}
