//! Severity levels attached to chain nodes.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered severity of an error.
///
/// [`Level::Unset`] is the zero value and means "inherit from the cause".
/// Chains where no node sets a level resolve to [`Level::Error`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "UPPERCASE"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    #[default]
    Unset = 0,
    Debug = 1,
    Info = 2,
    Notice = 3,
    Warning = 4,
    Error = 5,
    Critical = 6,
    Alert = 7,
    Emergency = 8,
}

impl Level {
    /// Returns `true` for [`Level::Unset`].
    #[inline]
    pub const fn is_unset(self) -> bool {
        matches!(self, Level::Unset)
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Unset => "UNSET",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Alert => "ALERT",
            Level::Emergency => "EMERGENCY",
        }
    }

    /// Maps the level onto the closest `tracing` level.
    ///
    /// Everything at or above [`Level::Error`] collapses to `ERROR`; `Unset`
    /// maps to `ERROR` as well, matching the resolution default.
    #[cfg(feature = "tracing")]
    pub const fn to_tracing(self) -> tracing::Level {
        match self {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info | Level::Notice => tracing::Level::INFO,
            Level::Warning => tracing::Level::WARN,
            Level::Unset | Level::Error | Level::Critical | Level::Alert | Level::Emergency => {
                tracing::Level::ERROR
            },
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "tracing")]
impl From<Level> for tracing::Level {
    #[inline]
    fn from(level: Level) -> Self {
        level.to_tracing()
    }
}
