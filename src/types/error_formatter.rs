//! Detailed rendering of a chain: every layer's message, optionally with the
//! resolved wrap site beneath it, followed by the leaf error.

use core::fmt::{self, Display};
use std::borrow::Cow;

use crate::types::frame::{BacktraceResolver, FrameResolver};
use crate::types::Chain;

const NO_MESSAGE: &str = "(no message)";

/// Builder for the detailed rendering of a [`Chain`].
///
/// Non-verbose output puts every entry on one line:
///
/// ```text
/// user lookup failed: (no message): no row for id 7
/// ```
///
/// Verbose output puts each layer on its own line with its resolved frame:
///
/// ```text
/// user lookup failed
///     app::handler::get
///         src/handler.rs:42
/// (no message)
///     app::store::load
///         src/store.rs:17
/// no row for id 7
/// ```
pub struct ErrorFormatBuilder<'a> {
    pub(crate) chain: &'a Chain,
    pub(crate) verbose: bool,
    pub(crate) separator: Cow<'a, str>,
    pub(crate) resolver: &'a dyn FrameResolver,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(chain: &'a Chain) -> Self {
        Self { chain, verbose: false, separator: Cow::Borrowed(": "), resolver: &BacktraceResolver }
    }

    /// Emits each layer's resolved frame beneath its message.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Separator for the single-line form. Ignored when verbose.
    pub fn with_separator(mut self, separator: impl Into<Cow<'a, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Symbolizes frames through `resolver` instead of the `backtrace` crate.
    pub fn with_resolver(mut self, resolver: &'a dyn FrameResolver) -> Self {
        self.resolver = resolver;
        self
    }

    fn fmt_verbose(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.chain.links().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(message_or_placeholder(node))?;
            if let Some(frame) = node.frames().resolve_with(self.resolver) {
                write!(f, "\n    {}\n        {}:{}", frame.function, frame.file, frame.line)?;
            }
        }
        if let Some(leaf) = self.chain.leaf() {
            write!(f, "\n{}", leaf)?;
        }
        Ok(())
    }

    fn fmt_compact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.chain.links().enumerate() {
            if i > 0 {
                f.write_str(&self.separator)?;
            }
            f.write_str(message_or_placeholder(node))?;
        }
        if let Some(leaf) = self.chain.leaf() {
            write!(f, "{}{}", self.separator, leaf)?;
        }
        Ok(())
    }
}

fn message_or_placeholder(node: &Chain) -> &str {
    match node.own_message() {
        "" => NO_MESSAGE,
        message => message,
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.verbose {
            self.fmt_verbose(f)
        } else {
            self.fmt_compact(f)
        }
    }
}

impl Chain {
    /// Returns a builder for the detailed rendering of this chain.
    #[must_use]
    #[inline]
    pub fn detailed(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self)
    }
}
