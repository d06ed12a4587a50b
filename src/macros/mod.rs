//! Shorthand for building chain nodes.
//!
//! - [`macro@crate::wrap`] builds a [`Chain`](crate::types::Chain) from an operation
//!   label and a list of function-call style fields.
//! - [`macro@crate::bail`] does the same and returns it as an `Err` from the
//!   enclosing function.
//!
//! Both expand at the call site, so the captured frame points at the line
//! that used the macro.
//!
//! # Examples
//!
//! ```
//! use error_trail::{wrap, Kind, Level};
//!
//! let user_id = 7;
//! let err = wrap!(
//!     "handler.Get",
//!     cause(std::io::Error::other("no rows")),
//!     message("user {} not found", user_id),
//!     kind(Kind::NOT_FOUND),
//!     level(Level::Info),
//! );
//!
//! assert_eq!(err.message(), "user 7 not found");
//! assert_eq!(err.kind(), Kind::NOT_FOUND);
//! ```

/// Builds a [`Chain`](crate::types::Chain) node.
///
/// # Arguments
///
/// The first argument is the operation label. The rest are optional, in any
/// order; a repeated field overwrites the earlier one:
/// * `cause(error)` - The wrapped error
/// * `message("format string", args...)` - Formatted message for this layer;
///   a single non-literal expression (a `String`, `&str`) is used as is
/// * `kind(kind)` - A [`Kind`](crate::types::Kind) or raw `u16`
/// * `level(level)` - A [`Level`](crate::types::Level)
/// * `frames(snapshot)` - A pre-captured [`FrameSnapshot`](crate::types::FrameSnapshot)
///
/// # Examples
///
/// ```
/// use error_trail::{wrap, Kind};
///
/// let inner = wrap!("store.Load", cause("timeout"));
/// let outer = wrap!("service.Load", cause(inner), kind(Kind::new(503)));
///
/// assert_eq!(outer.kind(), Kind::new(503));
/// assert_eq!(outer.depth(), 2);
/// ```
#[macro_export]
macro_rules! wrap {
    ($op:expr $(, $field:ident($($arg:tt)*))* $(,)?) => {{
        let builder = $crate::types::Chain::wrap($op);
        $(
            let builder = $crate::__wrap_field!(builder, $field, $($arg)*);
        )*
        builder.build()
    }};
}

/// Returns early with `Err(wrap!(...))`.
///
/// # Examples
///
/// ```
/// use error_trail::{bail, ChainResult, Kind};
///
/// fn parse_port(raw: &str) -> ChainResult<u16> {
///     match raw.parse() {
///         Ok(port) => Ok(port),
///         Err(err) => bail!("config.ParsePort", cause(err), kind(Kind::BAD_REQUEST)),
///     }
/// }
///
/// assert!(parse_port("http").unwrap_err().is(Kind::BAD_REQUEST));
/// ```
#[macro_export]
macro_rules! bail {
    ($($tt:tt)*) => {
        return ::core::result::Result::Err($crate::wrap!($($tt)*).into())
    };
}

/// Internal macro for processing individual wrap fields
#[macro_export]
#[doc(hidden)]
macro_rules! __wrap_field {
    ($builder:expr, cause, $cause:expr) => {
        $builder.cause($cause)
    };

    ($builder:expr, message, $fmt:literal $(, $($rest:tt)*)?) => {
        $builder.message(format!($fmt $(, $($rest)*)?))
    };

    ($builder:expr, message, $message:expr) => {
        $builder.message($message)
    };

    ($builder:expr, kind, $kind:expr) => {
        $builder.kind($kind)
    };

    ($builder:expr, level, $level:expr) => {
        $builder.level($level)
    };

    ($builder:expr, frames, $frames:expr) => {
        $builder.frames($frames)
    };
}
