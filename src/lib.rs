//! Operation-tagged error chains.
//!
//! Each layer of a program that lets an error pass through can wrap it in a
//! [`Chain`] node carrying the name of the operation, a message for end users,
//! a classification [`Kind`], a severity [`Level`], and the call site it was
//! wrapped at. Reading the chain back walks from the outermost node inward:
//! operations and messages accumulate, kinds and levels resolve to the first one
//! that was set.
//!
//! # Examples
//!
//! ## Wrapping and reading back
//!
//! ```
//! use error_trail::{Chain, Kind, Level};
//! use std::io;
//!
//! let store = Chain::wrap("store.Load")
//!     .cause(io::Error::new(io::ErrorKind::NotFound, "no row for id 7"))
//!     .kind(Kind::NOT_FOUND)
//!     .build();
//!
//! let err = Chain::wrap("handler.Get")
//!     .cause(store)
//!     .message("user lookup failed")
//!     .level(Level::Info)
//!     .build();
//!
//! assert_eq!(err.operations().as_slice(), ["handler.Get", "store.Load"]);
//! assert_eq!(err.kind(), Kind::NOT_FOUND);
//! assert_eq!(err.level(), Level::Info);
//! assert_eq!(err.message(), "user lookup failed");
//! // Plain display is the leaf error's own text.
//! assert_eq!(err.to_string(), "no row for id 7");
//! ```
//!
//! ## Wrapping `Result`s
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn parse(raw: &str) -> ChainResult<u32> {
//!     raw.parse::<u32>()
//!         .op_with("config.Parse", |node| node.message("invalid number").kind(Kind::BAD_REQUEST))
//! }
//!
//! let err = parse("seven").unwrap_err();
//! assert!(err.is(Kind::BAD_REQUEST));
//! assert_eq!(err.message(), "invalid number");
//! ```
//!
//! ## Inspecting a type-erased error
//!
//! ```
//! use error_trail::{inspect, Chain, Kind};
//! use std::error::Error;
//!
//! let boxed: Box<dyn Error + Send + Sync> = Chain::wrap("auth.Check").kind(Kind::FORBIDDEN).build().into();
//! assert_eq!(inspect::kind(&*boxed), Kind::FORBIDDEN);
//! assert_eq!(inspect::message(&*boxed), "Forbidden");
//! ```

/// Free functions reading chain facets off any error
pub mod inspect;
/// Shorthand macros for building chain nodes
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for wrapping `Result`s
pub mod traits;
/// Chain node, kinds, levels, frames and formatting
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use inspect::AsDynError;
pub use traits::ResultExt;
pub use types::{
    BacktraceResolver, BoxError, Cause, Chain, ChainBuilder, ChainResult, ErrorFormatBuilder,
    Frame, FrameResolver, FrameSnapshot, Kind, Level, Links, OpVec, Report,
};
