//! Free functions that read chain facets off any error.
//!
//! These accept a plain `&dyn Error`, so callers that only hold a trait object
//! (a boxed error returned through several layers, the `source()` of something
//! else) can still ask for the kind, level, message and so on. When the error
//! is not a [`Chain`] each function falls back to a fixed default instead of
//! failing:
//!
//! | function | default for a non-chain error |
//! |---|---|
//! | [`operations`] | empty |
//! | [`kind`] | [`Kind::UNEXPECTED`] |
//! | [`level`] | [`Level::Error`] |
//! | [`message`] | the error's own `Display` text |
//! | [`stacktrace`] | empty |
//!
//! # Examples
//!
//! ```
//! use error_trail::{inspect, Chain, Kind};
//! use std::error::Error;
//!
//! fn find_user(id: u64) -> Result<(), Box<dyn Error + Send + Sync>> {
//!     Err(Chain::wrap("users.Find")
//!         .message(format!("user {id} does not exist"))
//!         .kind(Kind::NOT_FOUND)
//!         .build()
//!         .into())
//! }
//!
//! let err = find_user(7).unwrap_err();
//! assert_eq!(inspect::kind(&*err), Kind::NOT_FOUND);
//! assert_eq!(inspect::message(&*err), "user 7 does not exist");
//! ```

use core::error::Error;

use crate::types::{Chain, Frame, Kind, Level, OpVec};

/// Views a value as a `'static` error trait object.
///
/// Implemented for every concrete error type and for the common `dyn Error`
/// flavours, so the functions below accept `&io::Error`, `&Chain` and
/// `&*boxed_error` alike.
pub trait AsDynError {
    fn as_dyn_error(&self) -> &(dyn Error + 'static);
}

impl<E: Error + 'static> AsDynError for E {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + Send + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl AsDynError for dyn Error + Send + Sync + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

/// Returns the error as a chain node, if it is one.
#[inline]
pub fn as_chain<E>(err: &E) -> Option<&Chain>
where
    E: AsDynError + ?Sized,
{
    err.as_dyn_error().downcast_ref::<Chain>()
}

/// Operation labels of every node, outermost first.
pub fn operations<E>(err: &E) -> OpVec<'_>
where
    E: AsDynError + ?Sized,
{
    as_chain(err).map(Chain::operations).unwrap_or_default()
}

/// Resolved kind; [`Kind::UNEXPECTED`] for anything that is not a chain.
pub fn kind<E>(err: &E) -> Kind
where
    E: AsDynError + ?Sized,
{
    as_chain(err).map_or(Kind::UNEXPECTED, Chain::kind)
}

/// Human-readable text for [`kind`].
#[inline]
pub fn kind_text<E>(err: &E) -> &'static str
where
    E: AsDynError + ?Sized,
{
    kind(err).text()
}

/// Whether `err` is present and resolves to exactly `candidate`.
///
/// Takes the shape `Error::source` returns, so a cause can be checked in place.
///
/// ```
/// use error_trail::{inspect, Chain, Kind};
/// use std::error::Error;
///
/// let inner = Chain::wrap("store.Get").kind(Kind::NOT_FOUND).build();
/// let outer = Chain::wrap("handler.Get").cause(inner).build();
///
/// assert!(inspect::is(outer.source(), Kind::NOT_FOUND));
/// assert!(!inspect::is(None, Kind::NOT_FOUND));
/// ```
pub fn is(err: Option<&(dyn Error + 'static)>, candidate: Kind) -> bool {
    err.is_some_and(|err| kind(err) == candidate)
}

/// Resolved level; [`Level::Error`] for anything that is not a chain.
pub fn level<E>(err: &E) -> Level
where
    E: AsDynError + ?Sized,
{
    as_chain(err).map_or(Level::Error, Chain::level)
}

/// Aggregated message for end users, or the error's own text for non-chains.
pub fn message<E>(err: &E) -> String
where
    E: AsDynError + ?Sized,
{
    match as_chain(err) {
        Some(chain) => chain.message(),
        None => err.as_dyn_error().to_string(),
    }
}

/// Resolved wrap sites, outermost first; empty for non-chains.
pub fn stacktrace<E>(err: &E) -> Vec<Frame>
where
    E: AsDynError + ?Sized,
{
    as_chain(err).map(Chain::stacktrace).unwrap_or_default()
}
