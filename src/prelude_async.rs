//! Async prelude: everything from the sync [`prelude`](crate::prelude) plus the
//! future adapters.
//!
//! # What's Included
//!
//! - Everything in [`prelude`](crate::prelude)
//! - **Traits**: [`FutureResultExt`](crate::async_ext::FutureResultExt) - `.op()` and `.op_with()` for futures
//! - **Types**: [`OpFuture`](crate::async_ext::OpFuture)

pub use crate::prelude::*;

pub use crate::async_ext::{FutureResultExt, OpFuture};
