//! Extension traits for building chains from ordinary `Result`s.
//!
//! - [`ResultExt`]: `.op()` / `.op_with()` on any `Result` whose error converts
//!   into a boxed error.
//!
//! The async counterpart lives in [`async_ext`](crate::async_ext) behind the
//! `async` feature.

pub mod result_ext;

pub use result_ext::ResultExt;
