//! Async extensions for error-trail.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["async"] }
//! ```

mod future_ext;
mod op_future;

pub use future_ext::{FutureResultExt, Undecorated};
pub use op_future::OpFuture;
