// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{future, StreamExt};
use propflux_core::StreamItem;
use propflux_stream::{has_event, has_event_handler, Props, WithEventHandlersExt};
use propflux_test_utils::fixtures::props_button;
use propflux_test_utils::{test_channel, unwrap_stream, unwrap_value};
use serde_json::json;

#[tokio::test]
async fn test_chained_operators_attach_both_handlers() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = stream
        .with_event_handlers("click")
        .with_event_handlers("hover");

    // Act
    tx.send(props_button())?;

    // Assert
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert!(has_event_handler("click")(&first));
    assert!(has_event_handler("hover")(&first));
    assert_eq!(first.data("label"), Some(&json!("OK")));
    Ok(())
}

#[tokio::test]
async fn test_inner_event_flows_through_outer_operator() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = stream
        .with_event_handlers("click")
        .with_event_handlers("hover");

    tx.send(props_button())?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));

    // Act
    first.handler("onClick").unwrap().invoke("left");

    // Assert
    let clicked = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert!(has_event("click")(&clicked));
    assert!(has_event_handler("hover")(&clicked));
    assert!(has_event_handler("click")(&clicked));
    Ok(())
}

#[tokio::test]
async fn test_outer_event_keeps_inner_handler() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut result = stream
        .with_event_handlers("click")
        .with_event_handlers("hover");

    tx.send(props_button())?;
    let first = unwrap_value(Some(unwrap_stream(&mut result, 500).await));

    // Act
    first.handler("onHover").unwrap().invoke(json!({ "x": 10, "y": 4 }));

    // Assert
    let hovered = unwrap_value(Some(unwrap_stream(&mut result, 500).await));
    assert!(has_event("hover")(&hovered));
    assert!(!has_event("click")(&hovered));
    assert!(hovered
        .handler("onClick")
        .unwrap()
        .same_as(first.handler("onClick").unwrap()));
    Ok(())
}

#[tokio::test]
async fn test_predicates_as_downstream_flags() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let with_handler = has_event_handler("submit");
    let with_event = has_event("submit");
    let mut flags = stream
        .with_event_handlers("submit")
        .map(move |item| item.map(|props| (with_handler(&props), with_event(&props))));

    // Act
    tx.send(props_button())?;
    let plain = unwrap_value(Some(unwrap_stream(&mut flags, 500).await));

    // Assert
    assert_eq!(plain, (true, false));
    Ok(())
}

#[tokio::test]
async fn test_filter_on_events_only() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<Props>();
    let mut output = stream.with_event_handlers("submit");

    tx.send(props_button())?;
    let first = unwrap_value(Some(unwrap_stream(&mut output, 500).await));
    let handler = first.handler("onSubmit").unwrap().clone();

    let is_submit = has_event("submit");
    let mut submissions = output.filter(move |item| {
        future::ready(matches!(item, StreamItem::Value(props) if is_submit(props)))
    });

    // Act
    handler.invoke("form");

    // Assert
    let submitted = unwrap_value(Some(unwrap_stream(&mut submissions, 500).await));
    assert_eq!(submitted.data("event").unwrap()["payload"], "form");
    assert_eq!(submitted.data("label"), Some(&json!("OK")));
    Ok(())
}
