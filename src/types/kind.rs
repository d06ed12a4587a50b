//! Integer classification codes attached to chain nodes.
//!
//! A [`Kind`] is a small integer. The predefined kinds reuse HTTP status codes,
//! so [`Kind::text`] can render them with the canonical reason phrase, but any
//! non-zero value is a valid user-defined kind. Zero is reserved for
//! [`Kind::UNSET`], which tells resolution to keep looking further down the chain.

use core::fmt;

use http::StatusCode;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification code for an error chain.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Kind(u16);

impl Kind {
    /// Not set on this node; inherit from the cause.
    pub const UNSET: Kind = Kind(0);
    /// The request was malformed.
    pub const BAD_REQUEST: Kind = Kind(400);
    /// The caller is not authenticated.
    pub const UNAUTHORIZED: Kind = Kind(401);
    /// The caller is authenticated but not allowed.
    pub const FORBIDDEN: Kind = Kind(403);
    /// The requested entity does not exist.
    pub const NOT_FOUND: Kind = Kind(404);
    /// Anything nobody classified. Default for chains without a kind.
    pub const UNEXPECTED: Kind = Kind(500);

    /// Creates a kind from a raw code.
    #[inline]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the raw code.
    #[inline]
    pub const fn code(self) -> u16 {
        self.0
    }

    /// Returns `true` for [`Kind::UNSET`].
    #[inline]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Human-readable text for this kind.
    ///
    /// Codes that map to an HTTP status use its canonical reason phrase; every
    /// other code (including `UNSET`) yields an empty string.
    ///
    /// ```
    /// use error_trail::Kind;
    ///
    /// assert_eq!(Kind::NOT_FOUND.text(), "Not Found");
    /// assert_eq!(Kind::new(7).text(), "");
    /// ```
    pub fn text(self) -> &'static str {
        StatusCode::from_u16(self.0)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("")
    }
}

impl From<u16> for Kind {
    #[inline]
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl From<Kind> for u16 {
    #[inline]
    fn from(kind: Kind) -> Self {
        kind.0
    }
}

impl From<StatusCode> for Kind {
    #[inline]
    fn from(status: StatusCode) -> Self {
        Self(status.as_u16())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            "" => write!(f, "{}", self.0),
            text => write!(f, "{} {}", self.0, text),
        }
    }
}
