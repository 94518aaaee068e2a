// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::handler::EventHandler;
use crate::projector::Projector;
use crate::props::Props;
use futures::stream::{FusedStream, Stream};
use futures::task::{Context, Poll};
use pin_project::{pin_project, pinned_drop};
use propflux_core::{StreamItem, Subject, SubjectBoxStream};
use std::pin::Pin;
use std::sync::Arc;

/// Props stream enriched with an event handler.
///
/// Created by [`EventHandlerProps::apply`](super::EventHandlerProps::apply) or
/// [`WithEventHandlersExt`](super::WithEventHandlersExt). Every value carries
/// the handler under the derived key; each handler invocation produces one more
/// value made of the projected record merged with the latest input props.
///
/// Ordering: invocations recorded before a poll are emitted before the input
/// is pulled again. An invocation observed while no input has been emitted yet
/// is dropped.
///
/// Termination: the stream ends when the input ends or after forwarding the
/// first error, whether it came from the input or from a projector. Pending
/// invocations are discarded. Dropping the stream closes the side-channel, so
/// later invocations are ignored.
#[pin_project(PinnedDrop)]
pub struct WithEventHandlers<S> {
    #[pin]
    source: S,
    events: SubjectBoxStream<Props>,
    subject: Subject<Props>,
    handler: EventHandler,
    key: String,
    latest: Option<Props>,
    terminated: bool,
}

impl<S> WithEventHandlers<S>
where
    S: Stream<Item = StreamItem<Props>>,
{
    pub(crate) fn new(source: S, id: &str, key: String, project: Arc<dyn Projector>) -> Self {
        let (subject, events) = Subject::with_subscriber();
        let handler = EventHandler::new(id, project, subject.clone());

        Self {
            source,
            events,
            subject,
            handler,
            key,
            latest: None,
            terminated: false,
        }
    }
}

impl<S> WithEventHandlers<S> {
    /// The handler attached to every emitted item.
    ///
    /// Available before the first emission; invocations made before the input
    /// has emitted anything are dropped.
    #[must_use]
    pub fn handler(&self) -> &EventHandler {
        &self.handler
    }

    /// Props field under which the handler is attached.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

fn attach(props: Props, key: &str, handler: &EventHandler) -> Props {
    props.with(key, handler.clone())
}

impl<S> Stream for WithEventHandlers<S>
where
    S: Stream<Item = StreamItem<Props>>,
{
    type Item = StreamItem<Props>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.terminated {
            return Poll::Ready(None);
        }

        // Side-channel first: invocations happened before the next input item is pulled.
        while let Poll::Ready(Some(item)) = this.events.as_mut().poll_next(cx) {
            match item {
                StreamItem::Value(record) => match this.latest.as_ref() {
                    Some(latest) => {
                        let merged = record.merge(latest.clone());
                        return Poll::Ready(Some(StreamItem::Value(attach(
                            merged,
                            this.key,
                            this.handler,
                        ))));
                    }
                    None => {
                        debug!(
                            "no props emitted yet for `{}`; dropping invocation",
                            this.handler.source_id()
                        );
                    }
                },
                StreamItem::Error(err) => {
                    debug!("`{}` terminated by projector error", this.handler.source_id());
                    *this.terminated = true;
                    this.subject.close();
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
            }
        }

        match this.source.as_mut().poll_next(cx) {
            Poll::Ready(Some(StreamItem::Value(props))) => {
                *this.latest = Some(props.clone());
                Poll::Ready(Some(StreamItem::Value(attach(
                    props,
                    this.key,
                    this.handler,
                ))))
            }
            Poll::Ready(Some(StreamItem::Error(err))) => {
                debug!("`{}` terminated by upstream error", this.handler.source_id());
                *this.terminated = true;
                this.subject.close();
                Poll::Ready(Some(StreamItem::Error(err)))
            }
            Poll::Ready(None) => {
                debug!("`{}` completed with its input", this.handler.source_id());
                *this.terminated = true;
                this.subject.close();
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<S> FusedStream for WithEventHandlers<S>
where
    S: Stream<Item = StreamItem<Props>>,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

#[pinned_drop]
impl<S> PinnedDrop for WithEventHandlers<S> {
    fn drop(self: Pin<&mut Self>) {
        self.subject.close();
    }
}
