//! Extension trait for `Future<Output = Result<T, E>>`, mirroring the sync
//! [`ResultExt`](crate::traits::ResultExt).

use core::future::Future;
use core::panic::Location;
use std::borrow::Cow;

use crate::types::{BoxError, ChainBuilder, FrameSnapshot};

use super::op_future::OpFuture;

/// Identity decoration used by [`FutureResultExt::op`].
pub type Undecorated = fn(ChainBuilder) -> ChainBuilder;

/// Wraps the error of an async `Result` in a new chain node.
///
/// # Examples
///
/// ```rust
/// use error_trail::prelude_async::*;
///
/// async fn fetch_row(_id: u64) -> Result<String, std::io::Error> {
///     Err(std::io::Error::other("connection reset"))
/// }
///
/// async fn fetch_user(id: u64) -> ChainResult<String> {
///     fetch_row(id)
///         .op_with("users.Fetch", |node| node.message("could not load user"))
///         .await
/// }
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized
where
    E: Into<BoxError>,
{
    /// Wraps the error under operation `op`.
    ///
    /// The frame snapshot is taken here, at the call site.
    #[track_caller]
    fn op<O>(self, op: O) -> OpFuture<Self, Undecorated>
    where
        O: Into<Cow<'static, str>>,
    {
        let decorate: Undecorated = core::convert::identity;
        OpFuture::new(self, op.into(), FrameSnapshot::capture(Location::caller()), decorate)
    }

    /// Wraps the error under operation `op`, letting `f` set message, kind or level.
    #[track_caller]
    fn op_with<O, F>(self, op: O, f: F) -> OpFuture<Self, F>
    where
        O: Into<Cow<'static, str>>,
        F: FnOnce(ChainBuilder) -> ChainBuilder,
    {
        OpFuture::new(self, op.into(), FrameSnapshot::capture(Location::caller()), f)
    }
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
}
