//! Error chain types.
//!
//! # Examples
//!
//! ```
//! use error_trail::{Chain, Kind, Level};
//!
//! let store = Chain::wrap("store.Load").cause("connection reset").build();
//! let err = Chain::wrap("handler.Get")
//!     .cause(store)
//!     .message("could not load profile")
//!     .level(Level::Warning)
//!     .build();
//!
//! assert_eq!(err.operations().as_slice(), ["handler.Get", "store.Load"]);
//! assert_eq!(err.kind(), Kind::UNEXPECTED);
//! println!("{:#}", err);
//! ```
use smallvec::SmallVec;

pub mod chain;
pub mod error_formatter;
pub mod frame;
pub mod kind;
pub mod level;
pub mod report;

pub use chain::*;
pub use error_formatter::ErrorFormatBuilder;
pub use frame::{BacktraceResolver, Frame, FrameResolver, FrameSnapshot, FRAME_DEPTH, MAX_ADDRESSES};
pub use kind::Kind;
pub use level::Level;
pub use report::Report;

/// Owned, thread-safe error trait object; the form leaf causes are stored in.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// SmallVec-backed list of operation labels borrowed from a chain.
///
/// Chains are rarely more than a few layers deep, so up to 4 labels stay inline.
pub type OpVec<'a> = SmallVec<[&'a str; 4]>;

/// Result alias whose error is a [`Chain`].
pub type ChainResult<T> = Result<T, Chain>;
