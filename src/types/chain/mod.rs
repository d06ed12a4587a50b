//! The chain node: one wrapped-error layer with operation, message, kind, level
//! and call-site metadata.
//!
//! Nodes link through their [`Cause`] into a singly-owned list that ends in a
//! leaf error (or nowhere, for a node built without a cause). Every accessor on
//! [`Chain`] walks that list from the outermost node inward:
//!
//! - [`Chain::operations`] collects every operation label.
//! - [`Chain::kind`] and [`Chain::level`] return the first value that is set.
//! - [`Chain::message`] joins every non-empty message with `": "`.
//! - [`Chain::stacktrace`] resolves each node's captured frame.

use core::error::Error;
use core::iter::FusedIterator;
use std::borrow::Cow;

use crate::types::frame::{BacktraceResolver, Frame, FrameResolver, FrameSnapshot};
use crate::types::{BoxError, Kind, Level, OpVec};

mod builder;
mod traits;

pub use builder::ChainBuilder;

/// What a [`Chain`] wraps: another node, or the leaf error that ends the chain.
#[derive(Debug)]
pub enum Cause {
    Node(Box<Chain>),
    Leaf(BoxError),
}

impl Cause {
    /// Sorts a boxed error into a node or a leaf.
    ///
    /// A boxed [`Chain`] (or a boxed `Box<Chain>`) keeps being walked as part of
    /// the chain; anything else terminates it.
    pub fn from_boxed(error: BoxError) -> Self {
        match error.downcast::<Chain>() {
            Ok(node) => Cause::Node(node),
            Err(error) => match error.downcast::<Box<Chain>>() {
                Ok(node) => Cause::Node(*node),
                Err(leaf) => Cause::Leaf(leaf),
            },
        }
    }

    /// Views the cause as a plain error trait object.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Cause::Node(node) => &**node,
            Cause::Leaf(leaf) => &**leaf,
        }
    }

    /// Returns the node if this cause continues the chain.
    #[inline]
    pub fn as_node(&self) -> Option<&Chain> {
        match self {
            Cause::Node(node) => Some(&**node),
            Cause::Leaf(_) => None,
        }
    }

    /// Converts back into a boxed error, releasing ownership of the rest of the chain.
    pub fn into_boxed(self) -> BoxError {
        match self {
            Cause::Node(node) => node,
            Cause::Leaf(leaf) => leaf,
        }
    }
}

/// An error wrapped with the operation that failed and what it means.
///
/// Built once through [`Chain::wrap`] and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use error_trail::{Chain, Kind};
/// use std::io;
///
/// let store = io::Error::new(io::ErrorKind::NotFound, "no row for id 7");
/// let err = Chain::wrap("handler.Get")
///     .cause(store)
///     .message("user lookup failed")
///     .kind(Kind::NOT_FOUND)
///     .build();
///
/// assert_eq!(err.kind(), Kind::NOT_FOUND);
/// assert_eq!(err.message(), "user lookup failed");
/// assert_eq!(err.operations().as_slice(), ["handler.Get"]);
/// assert_eq!(err.to_string(), "no row for id 7");
/// ```
#[derive(Debug)]
pub struct Chain {
    pub(crate) cause: Option<Cause>,
    pub(crate) op: Cow<'static, str>,
    pub(crate) message: String,
    pub(crate) kind: Kind,
    pub(crate) level: Level,
    pub(crate) frames: FrameSnapshot,
}

impl Chain {
    /// Starts a new node for the given operation label.
    #[inline]
    pub fn wrap<O>(op: O) -> ChainBuilder
    where
        O: Into<Cow<'static, str>>,
    {
        ChainBuilder::new(op)
    }

    /// The operation label of this node only.
    #[inline]
    pub fn op(&self) -> &str {
        &self.op
    }

    /// The message set on this node only; empty when none was given.
    #[inline]
    pub fn own_message(&self) -> &str {
        &self.message
    }

    /// The kind set on this node only; [`Kind::UNSET`] when none was given.
    #[inline]
    pub fn own_kind(&self) -> Kind {
        self.kind
    }

    /// The level set on this node only; [`Level::Unset`] when none was given.
    #[inline]
    pub fn own_level(&self) -> Level {
        self.level
    }

    /// The raw frame snapshot taken when this node was built.
    #[inline]
    pub fn frames(&self) -> &FrameSnapshot {
        &self.frames
    }

    /// The immediate cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Gives up this node and returns what it wrapped.
    #[inline]
    pub fn into_cause(self) -> Option<Cause> {
        self.cause
    }

    /// Iterates over this node and every node beneath it, outermost first.
    #[inline]
    pub fn links(&self) -> Links<'_> {
        Links { next: Some(self) }
    }

    /// Number of nodes in the chain, this one included.
    pub fn depth(&self) -> usize {
        self.links().count()
    }

    /// The innermost non-chain error, if the chain ends in one.
    pub fn leaf(&self) -> Option<&(dyn Error + 'static)> {
        match self.innermost().cause.as_ref()? {
            Cause::Leaf(leaf) => Some(leaf.as_ref() as &(dyn Error + 'static)),
            Cause::Node(_) => None,
        }
    }

    pub(crate) fn innermost(&self) -> &Chain {
        let mut node = self;
        while let Some(Cause::Node(next)) = node.cause.as_ref() {
            node = &**next;
        }
        node
    }

    /// Every operation label in the chain, outermost first, empty labels included.
    pub fn operations(&self) -> OpVec<'_> {
        self.links().map(Chain::op).collect()
    }

    /// The first kind set while walking inward, or [`Kind::UNEXPECTED`].
    pub fn kind(&self) -> Kind {
        self.links()
            .map(Chain::own_kind)
            .find(|kind| !kind.is_unset())
            .unwrap_or(Kind::UNEXPECTED)
    }

    /// Human-readable text for [`Chain::kind`].
    #[inline]
    pub fn kind_text(&self) -> &'static str {
        self.kind().text()
    }

    /// Whether the resolved kind is exactly `kind`.
    #[inline]
    pub fn is(&self, kind: Kind) -> bool {
        self.kind() == kind
    }

    /// The first level set while walking inward, or [`Level::Error`].
    pub fn level(&self) -> Level {
        self.links()
            .map(Chain::own_level)
            .find(|level| !level.is_unset())
            .unwrap_or(Level::Error)
    }

    /// Message meant for end users.
    ///
    /// Joins every non-empty node message with `": "`, outermost first. The leaf
    /// error's own text is never part of it. Falls back to [`Chain::kind_text`]
    /// when no node carries a message.
    pub fn message(&self) -> String {
        let mut joined = String::new();
        for message in self.links().map(Chain::own_message).filter(|m| !m.is_empty()) {
            if !joined.is_empty() {
                joined.push_str(": ");
            }
            joined.push_str(message);
        }

        if joined.is_empty() {
            joined.push_str(self.kind_text());
        }
        joined
    }

    /// Resolves this node's own wrap site.
    #[inline]
    pub fn location(&self) -> Option<Frame> {
        self.frames.resolve()
    }

    /// Resolved wrap sites for every node, outermost first.
    ///
    /// Nodes whose snapshot does not resolve to both a function and a file are
    /// left out rather than reported as blank rows.
    pub fn stacktrace(&self) -> Vec<Frame> {
        self.stacktrace_with(&BacktraceResolver)
    }

    /// Like [`Chain::stacktrace`], symbolizing through `resolver`.
    pub fn stacktrace_with<R>(&self, resolver: &R) -> Vec<Frame>
    where
        R: FrameResolver + ?Sized,
    {
        self.links().filter_map(|node| node.frames.resolve_with(resolver)).collect()
    }
}

/// Iterator over the nodes of a chain. Created by [`Chain::links`].
#[derive(Debug, Clone)]
pub struct Links<'a> {
    next: Option<&'a Chain>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a Chain;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.cause.as_ref().and_then(Cause::as_node);
        Some(node)
    }
}

impl FusedIterator for Links<'_> {}
