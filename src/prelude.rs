//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`wrap!`], [`bail!`]
//! - **Types**: [`Chain`], [`Kind`], [`Level`], [`ChainResult`]
//! - **Traits**: [`ResultExt`]
//! - **Module**: [`inspect`] for reading facets off any `&dyn Error`
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn read_settings(path: &str) -> ChainResult<String> {
//!     std::fs::read_to_string(path).op_with("settings.Read", |node| {
//!         node.message(format!("cannot read {path}")).level(Level::Warning)
//!     })
//! }
//!
//! let err = read_settings("/no/such/settings.toml").unwrap_err();
//! assert_eq!(inspect::level(&err), Level::Warning);
//! ```

// Macros
pub use crate::{bail, wrap};

// Core types
pub use crate::types::{Chain, ChainResult, Kind, Level};

// Traits
pub use crate::traits::ResultExt;

pub use crate::inspect;
