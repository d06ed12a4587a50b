//! Extension trait for wrapping the error side of a `Result` in a chain node.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//! use error_trail::{ChainResult, Kind};
//!
//! fn load_config() -> ChainResult<String> {
//!     std::fs::read_to_string("/definitely/not/here.toml")
//!         .op_with("config.Load", |node| node.message("loading configuration").kind(Kind::NOT_FOUND))
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.kind(), Kind::NOT_FOUND);
//! assert_eq!(err.operations().as_slice(), ["config.Load"]);
//! ```

use std::borrow::Cow;

use crate::types::{BoxError, Chain, ChainBuilder, ChainResult};

/// Wraps `Err` values in a new [`Chain`] node at the call site.
///
/// The node's frame snapshot points at the line that called the adapter. An
/// error that already is a [`Chain`] becomes the inner node, so adapters can be
/// stacked layer by layer.
pub trait ResultExt<T> {
    /// Wraps the error under operation `op` with no further metadata.
    fn op<O>(self, op: O) -> ChainResult<T>
    where
        O: Into<Cow<'static, str>>;

    /// Wraps the error under operation `op`, letting `f` set message, kind or level.
    ///
    /// `f` only runs on the error path.
    fn op_with<O, F>(self, op: O, f: F) -> ChainResult<T>
    where
        O: Into<Cow<'static, str>>,
        F: FnOnce(ChainBuilder) -> ChainBuilder;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    #[inline]
    fn op<O>(self, op: O) -> ChainResult<T>
    where
        O: Into<Cow<'static, str>>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(Chain::wrap(op).cause(error).build()),
        }
    }

    #[track_caller]
    #[inline]
    fn op_with<O, F>(self, op: O, f: F) -> ChainResult<T>
    where
        O: Into<Cow<'static, str>>,
        F: FnOnce(ChainBuilder) -> ChainBuilder,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(f(Chain::wrap(op).cause(error)).build()),
        }
    }
}
