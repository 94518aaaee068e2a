// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the propflux workspace.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Architecture
//!
//! Production code consumes streams; tests need to push into them. The
//! channels here keep both ends apart: tests hold the sender, the operator
//! under test owns the receiving stream.
//!
//! # Key Types
//!
//! - [`test_channel`] / [`test_channel_with_errors`]: push-driven props sources
//! - [`RecordingProjector`]: a projector that remembers every call it served
//! - [`FailingProjector`]: a projector that always fails
//! - [`ErrorInjectingStream`]: wraps a stream and injects an error at a position
//! - [`fixtures`]: canned props records
//!
//! # Examples
//!
//! ```rust
//! use propflux_test_utils::{assert_no_element_emitted, test_channel};
//! use propflux_stream::Props;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (_tx, mut stream) = test_channel::<Props>();
//! assert_no_element_emitted(&mut stream, 10).await;
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod fixtures;
pub mod helpers;
pub mod projectors;

use futures::{Stream, StreamExt};
use propflux_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream, unwrap_value};
pub use projectors::{FailingProjector, Invocation, RecordingProjector};

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// # Example
///
/// ```rust
/// use propflux_test_utils::{fixtures::props_foo, test_channel};
/// use futures::StreamExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (tx, mut stream) = test_channel();
///
/// tx.send(props_foo()).unwrap();
///
/// let item = stream.next().await.unwrap().unwrap(); // Option -> StreamItem -> Value
/// assert_eq!(item, props_foo());
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
///
/// # Example
///
/// ```rust
/// use propflux_test_utils::test_channel_with_errors;
/// use propflux_core::{PropsError, StreamItem};
/// use futures::StreamExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (tx, mut stream) = test_channel_with_errors::<i32>();
///
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(PropsError::stream_error("test error"))).unwrap();
///
/// assert!(stream.next().await.unwrap().is_value());
/// assert!(stream.next().await.unwrap().is_error());
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
