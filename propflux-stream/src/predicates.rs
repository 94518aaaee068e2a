// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Predicates over props emitted by [`WithEventHandlers`](crate::WithEventHandlers).
//!
//! Both predicates are total: they return `false` on anything unexpected and
//! never panic.

use crate::key::derive_key;
use crate::projector::EVENT_FIELD;
use crate::props::Props;

/// Returns a predicate telling whether props carry the handler for `id`.
///
/// True iff the field `on` + capitalized `id` holds an [`EventHandler`](crate::EventHandler)
/// created for `id`.
///
/// ```
/// use propflux_stream::{has_event_handler, Props};
///
/// assert!(!has_event_handler("click")(&Props::new().with("onClick", "not a handler")));
/// ```
pub fn has_event_handler(id: impl Into<String>) -> impl Fn(&Props) -> bool + Clone + Send + Sync {
    let id = id.into();
    let key = derive_key(&id);
    move |props: &Props| {
        props
            .handler(&key)
            .is_some_and(|handler| handler.source_id() == id)
    }
}

/// Returns a predicate telling whether props were produced by a handler
/// invocation for `id` under the default projection.
///
/// True iff `props.event.id == id`.
///
/// ```
/// use propflux_stream::{has_event, Props};
/// use serde_json::json;
///
/// let props = Props::new().with("event", json!({ "id": "click", "payload": 1 }));
/// assert!(has_event("click")(&props));
/// assert!(!has_event("drag")(&props));
/// ```
pub fn has_event(id: impl Into<String>) -> impl Fn(&Props) -> bool + Clone + Send + Sync {
    let id = id.into();
    move |props: &Props| event_id(props) == Some(id.as_str())
}

/// The `event.id` of props produced by the default projection, if any.
#[must_use]
pub fn event_id(props: &Props) -> Option<&str> {
    props.data(EVENT_FIELD)?.get("id")?.as_str()
}
