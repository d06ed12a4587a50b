use core::panic::Location;
use std::borrow::Cow;

use super::{Cause, Chain};
use crate::types::frame::FrameSnapshot;
use crate::types::{BoxError, Kind, Level};

/// Collects the fields of a new [`Chain`] node.
///
/// Each setter overwrites whatever was set before for the same field, so the
/// last call wins. Nothing accumulates inside a single node; accumulation only
/// happens across nodes when the chain is read back.
///
/// # Examples
///
/// ```
/// use error_trail::{Chain, Kind, Level};
///
/// let err = Chain::wrap("billing.Charge")
///     .message("card declined")
///     .kind(Kind::BAD_REQUEST)
///     .kind(Kind::FORBIDDEN)
///     .level(Level::Warning)
///     .build();
///
/// assert_eq!(err.kind(), Kind::FORBIDDEN);
/// assert_eq!(err.level(), Level::Warning);
/// ```
#[must_use = "call `build` to produce the chain node"]
#[derive(Debug)]
pub struct ChainBuilder {
    op: Cow<'static, str>,
    cause: Option<Cause>,
    message: String,
    kind: Kind,
    level: Level,
    frames: Option<FrameSnapshot>,
}

impl ChainBuilder {
    #[inline]
    pub fn new<O>(op: O) -> Self
    where
        O: Into<Cow<'static, str>>,
    {
        Self {
            op: op.into(),
            cause: None,
            message: String::new(),
            kind: Kind::UNSET,
            level: Level::Unset,
            frames: None,
        }
    }

    /// Sets the wrapped error. Passing another [`Chain`] extends that chain.
    #[inline]
    pub fn cause<E>(mut self, error: E) -> Self
    where
        E: Into<BoxError>,
    {
        self.cause = Some(Cause::from_boxed(error.into()));
        self
    }

    /// Sets the message for this layer.
    #[inline]
    pub fn message<M>(mut self, message: M) -> Self
    where
        M: Into<String>,
    {
        self.message = message.into();
        self
    }

    /// Sets the kind for this layer. [`Kind::UNSET`] clears it again.
    #[inline]
    pub fn kind<K>(mut self, kind: K) -> Self
    where
        K: Into<Kind>,
    {
        self.kind = kind.into();
        self
    }

    /// Sets the level for this layer. [`Level::Unset`] clears it again.
    #[inline]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Uses a snapshot taken elsewhere instead of capturing one in [`build`](Self::build).
    #[inline]
    pub fn frames(mut self, frames: FrameSnapshot) -> Self {
        self.frames = Some(frames);
        self
    }

    /// Finishes the node, capturing the call stack unless a snapshot was supplied.
    #[track_caller]
    pub fn build(self) -> Chain {
        let caller = Location::caller();
        let frames = match self.frames {
            Some(frames) => frames,
            None => FrameSnapshot::capture(caller),
        };

        let chain = Chain {
            cause: self.cause,
            op: self.op,
            message: self.message,
            kind: self.kind,
            level: self.level,
            frames,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "error_trail",
            op = %chain.op,
            kind = chain.kind().code(),
            depth = chain.depth(),
            "wrapped error"
        );

        chain
    }
}
