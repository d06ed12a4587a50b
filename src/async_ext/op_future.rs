//! Future wrapper that turns an `Err` output into a chain node.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::borrow::Cow;

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::{BoxError, Chain, ChainBuilder, FrameSnapshot};

#[derive(Debug)]
pub(crate) struct Pending<F> {
    op: Cow<'static, str>,
    frames: FrameSnapshot,
    decorate: F,
}

pin_project! {
    /// Wraps a `Future<Output = Result<T, E>>` so that an error comes out as a [`Chain`].
    ///
    /// The frame snapshot is taken when the wrapper is created, so the stack
    /// trace points at the code that set up the future, not at the executor that
    /// polls it. `decorate` only runs on the error path.
    ///
    /// # Cancel Safety
    ///
    /// `OpFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct OpFuture<Fut, F> {
        #[pin]
        future: Fut,
        pending: Option<Pending<F>>,
    }
}

impl<Fut, F> OpFuture<Fut, F> {
    /// Creates the wrapper from an already-taken snapshot.
    #[inline]
    pub fn new(future: Fut, op: Cow<'static, str>, frames: FrameSnapshot, decorate: F) -> Self {
        Self { future, pending: Some(Pending { op, frames, decorate }) }
    }
}

impl<Fut, F, T, E> Future for OpFuture<Fut, F>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
    F: FnOnce(ChainBuilder) -> ChainBuilder,
{
    type Output = Result<T, Chain>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|res| {
            let pending = this.pending.take();
            res.map_err(|err| {
                let pending = pending.expect("OpFuture polled after completion; this is a bug");
                let node = Chain::wrap(pending.op).cause(err).frames(pending.frames);
                (pending.decorate)(node).build()
            })
        })
    }
}

impl<Fut, F, T, E> FusedFuture for OpFuture<Fut, F>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: Into<BoxError>,
    F: FnOnce(ChainBuilder) -> ChainBuilder,
{
    fn is_terminated(&self) -> bool {
        self.pending.is_none() || self.future.is_terminated()
    }
}
