// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the commonly used traits and types.
//!
//! ```
//! use propflux_stream::prelude::*;
//!
//! let transformer = with_event_handler_props("click");
//! assert_eq!(transformer.key(), "onClick");
//! ```
//!
//! # Contents
//!
//! - [`WithEventHandlersExt`] - Operator entry point on props streams
//! - [`Projector`] - Invocation-to-record projection
//! - [`Props`], [`PropValue`], [`EventHandler`] - Item types
//! - [`has_event_handler`], [`has_event`] - Predicates

pub use crate::with_event_handlers::{
    event_handler_props, event_handler_props_fn, event_handler_props_with,
    with_event_handler_props, EventHandlerProps, WithEventHandlersExt,
};

pub use crate::handler::EventHandler;
pub use crate::predicates::{has_event, has_event_handler};
pub use crate::projector::{DefaultProjector, FnProjector, Projector};
pub use crate::props::{PropValue, Props};
pub use propflux_core::StreamItem;
