use super::{Cause, Chain};
use core::fmt::Display;

/// `{}` prints the leaf error's text, not the aggregated [`Chain::message`].
/// `{:#}` prints the verbose detailed rendering.
impl Display for Chain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if f.alternate() {
            return Display::fmt(&self.detailed().verbose(true), f);
        }
        match self.leaf() {
            Some(leaf) => Display::fmt(leaf, f),
            None => f.write_str(&self.message()),
        }
    }
}

impl core::error::Error for Chain {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause.as_ref().map(Cause::as_error)
    }
}

impl From<Cause> for Chain {
    /// Wraps an existing cause in an anonymous node.
    #[track_caller]
    fn from(cause: Cause) -> Self {
        match cause {
            Cause::Node(node) => *node,
            Cause::Leaf(leaf) => Chain::wrap("").cause(leaf).build(),
        }
    }
}
