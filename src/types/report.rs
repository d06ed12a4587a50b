//! Owned snapshot of everything a chain resolves to.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::inspect::{self, AsDynError};
use crate::types::frame::{BacktraceResolver, Frame, FrameResolver};
use crate::types::{Chain, Kind, Level};

/// Resolved facets of an error, detached from the error itself.
///
/// Useful when the error has to be handed to something that only deals in
/// plain data, such as a serializer.
///
/// # Examples
///
/// ```
/// use error_trail::{Chain, Kind, Report};
///
/// let err = Chain::wrap("orders.Cancel")
///     .cause("order already shipped")
///     .message("cannot cancel order")
///     .kind(Kind::BAD_REQUEST)
///     .build();
///
/// let report = Report::from_error(&err);
/// assert_eq!(report.kind, Kind::BAD_REQUEST);
/// assert_eq!(report.kind_text, "Bad Request");
/// assert_eq!(report.error, "order already shipped");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub operations: Vec<String>,
    pub kind: Kind,
    pub kind_text: String,
    pub level: Level,
    pub message: String,
    pub error: String,
    pub stacktrace: Vec<Frame>,
}

impl Report {
    /// Resolves `error`, symbolizing frames with [`BacktraceResolver`].
    pub fn from_error<E>(error: &E) -> Self
    where
        E: AsDynError + ?Sized,
    {
        Self::with_resolver(error, &BacktraceResolver)
    }

    /// Resolves `error`, symbolizing frames with `resolver`.
    pub fn with_resolver<E, R>(error: &E, resolver: &R) -> Self
    where
        E: AsDynError + ?Sized,
        R: FrameResolver + ?Sized,
    {
        Self {
            operations: inspect::operations(error).into_iter().map(str::to_owned).collect(),
            kind: inspect::kind(error),
            kind_text: inspect::kind_text(error).to_owned(),
            level: inspect::level(error),
            message: inspect::message(error),
            error: error.as_dyn_error().to_string(),
            stacktrace: inspect::as_chain(error)
                .map(|chain| chain.stacktrace_with(resolver))
                .unwrap_or_default(),
        }
    }
}

impl From<&Chain> for Report {
    fn from(chain: &Chain) -> Self {
        Self::from_error(chain)
    }
}
