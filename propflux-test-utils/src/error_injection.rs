// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error injection for props sources.

use futures::Stream;
use propflux_core::{PropsError, StreamItem};
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream wrapper that injects an error at a given position.
///
/// Items of the inner stream are wrapped in `StreamItem::Value`; position
/// `inject_error_at` (0-indexed) is taken by a
/// [`PropsError::StreamProcessingError`] instead.
///
/// ```rust
/// use propflux_test_utils::{fixtures::props_foo, ErrorInjectingStream};
/// use futures::{stream, StreamExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut source = ErrorInjectingStream::new(stream::iter(vec![props_foo()]), 1);
///
/// assert!(source.next().await.unwrap().is_value());
/// assert!(source.next().await.unwrap().is_error());
/// # }
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = StreamItem<S::Item>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.inject_error_at == Some(self.count) {
            self.inject_error_at = None;
            self.count += 1;
            return Poll::Ready(Some(StreamItem::Error(PropsError::stream_error(
                "Injected test error",
            ))));
        }

        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => {
                self.count += 1;
                Poll::Ready(Some(StreamItem::Value(item)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
