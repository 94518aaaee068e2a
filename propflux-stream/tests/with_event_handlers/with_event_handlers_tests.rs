// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use propflux_stream::{
    event_handler_props, event_handler_props_fn, event_handler_props_with,
    with_event_handler_props, Props, WithEventHandlersExt,
};
use propflux_test_utils::fixtures::{props_bar, props_foo};
use propflux_test_utils::{
    assert_no_element_emitted, test_channel, unwrap_stream, unwrap_value, RecordingProjector,
};
use serde_json::{json, Value};

#[tokio::test]
async fn test_items_pass_through_with_the_same_handler() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = with_event_handler_props("baz").apply(stream);

    // Act
    tx.send(props_foo())?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    tx.send(props_bar())?;
    let second = unwrap_value(Some(unwrap_stream(&mut result, 500).await));

    // Assert
    let handler = result.handler().clone();
    assert_eq!(first, props_foo().with("onBaz", handler.clone()));
    assert_eq!(second, props_bar().with("onBaz", handler));

    let first_handler = first.handler("onBaz").unwrap();
    let second_handler = second.handler("onBaz").unwrap();
    assert!(first_handler.same_as(second_handler));
    assert_eq!(first_handler.source_id(), "baz");
    Ok(())
}

#[tokio::test]
async fn test_invocation_emits_event_merged_with_latest() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = with_event_handler_props("baz").apply(stream);

    tx.send(props_foo())?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));

    // Act
    first.handler("onBaz").unwrap().invoke("bar");

    // Assert
    let event = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert_eq!(
        event.to_json(),
        json!({ "foo": "foo", "event": { "id": "baz", "payload": "bar" } })
    );
    assert!(event.handler("onBaz").unwrap().same_as(result.handler()));
    Ok(())
}

#[tokio::test]
async fn test_invocation_with_secondary_event() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = with_event_handler_props("baz").apply(stream);

    tx.send(props_foo())?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));

    // Act
    first
        .handler("onBaz")
        .unwrap()
        .invoke_with_event("foo", "bar");

    // Assert
    let event = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert_eq!(
        event.data("event"),
        Some(&json!({ "id": "baz", "payload": "foo", "event": "bar" }))
    );
    assert_eq!(event.data("foo"), Some(&json!("foo")));
    Ok(())
}

#[tokio::test]
async fn test_custom_projector_receives_invocation_arguments() -> anyhow::Result<()> {
    // Arrange
    let projector = RecordingProjector::returning(Props::new().with("baz", "BAR"));
    let recorded = projector.clone();
    let (tx, stream) = test_channel::<Props>();
    let mut result = event_handler_props_with(projector)
        .for_id("baz")
        .apply(stream);

    tx.send(props_foo())?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));

    // Act
    first.handler("onBaz").unwrap().invoke("bar");

    // Assert
    let event = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert_eq!(event.to_json(), json!({ "foo": "foo", "baz": "BAR" }));
    assert!(event.handler("onBaz").is_some());

    let calls = recorded.invocations();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].payload, json!("bar"));
    assert_eq!(calls[0].event, None);
    assert_eq!(calls[0].id, "baz");
    Ok(())
}

#[tokio::test]
async fn test_closure_projector() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let factory = event_handler_props_fn(|payload: Value, id: &str| {
        Ok(Props::new().with("clicked", payload).with("by", id))
    });
    let mut result = factory.for_id("submit").apply(stream);

    tx.send(props_foo())?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));

    // Act
    first.handler("onSubmit").unwrap().invoke(json!({ "x": 1 }));

    // Assert
    let event = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert_eq!(
        event.to_json(),
        json!({ "foo": "foo", "clicked": { "x": 1 }, "by": "submit" })
    );
    Ok(())
}

#[tokio::test]
async fn test_default_factory_matches_shorthand() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let transformer = event_handler_props().for_id("baz");
    let mut result = stream.with_event_handler_props(&transformer);

    tx.send(props_foo())?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));

    // Act
    first.handler("onBaz").unwrap().invoke("bar");

    // Assert
    let event = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert_eq!(
        event.data("event"),
        Some(&json!({ "id": "baz", "payload": "bar" }))
    );
    assert_eq!(transformer.key(), "onBaz");
    assert_eq!(transformer.id(), "baz");
    Ok(())
}

#[tokio::test]
async fn test_invocation_uses_latest_props() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = stream.with_event_handlers("baz");

    tx.send(props_foo())?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    tx.send(props_bar())?;
    unwrap_value(Some(unwrap_stream(&mut result, 500).await));

    // Act
    first.handler("onBaz").unwrap().invoke(json!(1));

    // Assert
    let event = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert_eq!(event.data("foo"), Some(&json!("bar")));
    Ok(())
}

#[tokio::test]
async fn test_invocations_are_emitted_in_call_order() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = stream.with_event_handlers("baz");

    tx.send(props_foo())?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    let handler = first.handler("onBaz").unwrap();

    // Act
    handler.invoke("a");
    handler.invoke("b");
    handler.invoke("c");

    // Assert
    for expected in ["a", "b", "c"] {
        let event = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
        assert_eq!(event.data("event").unwrap()["payload"], json!(expected));
    }
    assert_no_element_emitted(&mut result, 100).await;
    Ok(())
}

#[tokio::test]
async fn test_invocation_precedes_pending_input() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = stream.with_event_handlers("baz");

    tx.send(props_foo())?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));

    // Act
    tx.send(props_bar())?;
    first.handler("onBaz").unwrap().invoke("click");

    // Assert
    let event = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert_eq!(event.data("foo"), Some(&json!("foo")));
    assert!(event.contains_key("event"));

    let next = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert_eq!(next, props_bar().with("onBaz", result.handler().clone()));
    Ok(())
}

#[tokio::test]
async fn test_props_win_over_projected_record() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = stream.with_event_handlers("baz");

    tx.send(Props::new().with("event", "from props"))?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));

    // Act
    first.handler("onBaz").unwrap().invoke("bar");

    // Assert
    let event = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert_eq!(event.data("event"), Some(&json!("from props")));
    Ok(())
}

#[tokio::test]
async fn test_existing_field_under_handler_key_is_replaced() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = stream.with_event_handlers("baz");

    // Act
    tx.send(Props::new().with("onBaz", "not a handler"))?;

    // Assert
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert!(first.handler("onBaz").unwrap().same_as(result.handler()));
    assert_eq!(first.data("onBaz"), None);
    Ok(())
}

#[tokio::test]
async fn test_invocation_before_first_props_is_dropped() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = stream.with_event_handlers("baz");

    // Act
    result.handler().invoke("too early");
    assert_no_element_emitted(&mut result, 100).await;
    tx.send(props_foo())?;

    // Assert
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert!(!first.contains_key("event"));
    assert_no_element_emitted(&mut result, 100).await;
    Ok(())
}

#[tokio::test]
async fn test_empty_id_uses_bare_prefix() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = stream.with_event_handlers("");

    // Act
    tx.send(props_foo())?;

    // Assert
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert!(first.handler("on").is_some());
    assert_eq!(result.key(), "on");
    Ok(())
}
