//! Call-site capture for chain nodes.
//!
//! Constructing a [`Chain`](crate::Chain) records a [`FrameSnapshot`]: a few raw
//! instruction pointers plus the `#[track_caller]` location of the wrap site.
//! Nothing is symbolized at that point. Resolution to a human-readable [`Frame`]
//! happens only when a stack trace or a detailed rendering asks for it, through
//! a [`FrameResolver`]. [`BacktraceResolver`] is the real one; tests can plug in
//! their own.

use core::ffi::c_void;
use core::fmt;
use core::panic::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of raw addresses kept above the capture point.
pub const FRAME_DEPTH: usize = 3;

/// Frames the capture machinery itself may occupy (unwinder, `backtrace`, this crate).
const CAPTURE_OVERHEAD: usize = 6;

/// Upper bound on the addresses a snapshot holds.
pub const MAX_ADDRESSES: usize = FRAME_DEPTH + CAPTURE_OVERHEAD;

/// Walk length after which an unmatched marker is given up on.
const MARKER_SEARCH: usize = 32;

const OWN_PATH: &str = concat!(env!("CARGO_CRATE_NAME"), "::");
const OWN_TRAIT: &str = concat!(" as ", env!("CARGO_CRATE_NAME"), "::");

/// A resolved call-site: function, file and line.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    pub function: String,
    pub file: String,
    pub line: u32,
}

impl Frame {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self { function: function.into(), file: file.into(), line }
    }

    /// A frame is reportable only when both names are known.
    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.function.is_empty() && !self.file.is_empty()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.function, self.file, self.line)
    }
}

/// Turns a raw instruction pointer into symbols.
///
/// A single address can map to several symbols when functions were inlined;
/// implementations return them innermost first.
pub trait FrameResolver {
    fn symbolize(&self, ip: usize) -> Vec<Frame>;
}

/// Resolver backed by the `backtrace` crate's symbolication.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceResolver;

impl FrameResolver for BacktraceResolver {
    fn symbolize(&self, ip: usize) -> Vec<Frame> {
        let mut frames = Vec::new();
        backtrace::resolve(ip as *mut c_void, |symbol| {
            let function = symbol.name().map(|name| format!("{:#}", name)).unwrap_or_default();
            let file = symbol
                .filename()
                .map(|path| path.display().to_string())
                .unwrap_or_default();
            frames.push(Frame { function, file, line: symbol.lineno().unwrap_or(0) });
        });
        frames
    }
}

/// Raw, unresolved capture of where a chain node was built.
///
/// Unused address slots are zero and are skipped during resolution.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameSnapshot {
    ips: [usize; MAX_ADDRESSES],
    caller: Option<&'static Location<'static>>,
}

impl FrameSnapshot {
    /// A snapshot that resolves to nothing.
    #[inline]
    pub const fn empty() -> Self {
        Self { ips: [0; MAX_ADDRESSES], caller: None }
    }

    /// Builds a snapshot from known addresses, mainly for custom resolvers.
    #[inline]
    pub const fn from_addresses(
        ips: [usize; FRAME_DEPTH],
        caller: Option<&'static Location<'static>>,
    ) -> Self {
        let mut padded = [0; MAX_ADDRESSES];
        let mut i = 0;
        while i < FRAME_DEPTH {
            padded[i] = ips[i];
            i += 1;
        }
        Self { ips: padded, caller }
    }

    /// Captures the current stack, starting at the frame that called this function.
    ///
    /// `caller` is normally `Location::caller()` taken inside a `#[track_caller]`
    /// constructor; it supplies the file and line of the wrap site exactly.
    #[inline(never)]
    pub fn capture(caller: &'static Location<'static>) -> Self {
        let mut walk = Walk::new(Self::capture as *const () as usize);
        backtrace::trace(|frame| walk.push(frame.ip() as usize, frame.symbol_address() as usize));
        Self { ips: walk.ips, caller: Some(caller) }
    }

    /// Raw addresses that were actually captured.
    pub fn addresses(&self) -> impl Iterator<Item = usize> + '_ {
        self.ips.iter().copied().filter(|ip| *ip != 0)
    }

    /// The `#[track_caller]` location recorded at capture time.
    #[inline]
    pub fn caller(&self) -> Option<&'static Location<'static>> {
        self.caller
    }

    /// Resolves with [`BacktraceResolver`].
    pub fn resolve(&self) -> Option<Frame> {
        self.resolve_with(&BacktraceResolver)
    }

    /// Resolves the snapshot to the wrap site.
    ///
    /// Symbols belonging to this crate (the constructor and its adapters), to
    /// the capture machinery and to the standard library's closure shims
    /// (`Option::map`, `FnOnce::call_once`) are skipped; the first remaining symbol names the
    /// function. The recorded caller location, when present, replaces the
    /// symbol's file and line. Returns `None` when no complete frame is found.
    pub fn resolve_with<R>(&self, resolver: &R) -> Option<Frame>
    where
        R: FrameResolver + ?Sized,
    {
        let symbol = self
            .addresses()
            .flat_map(|ip| resolver.symbolize(ip))
            .find(|frame| !frame.function.is_empty() && !is_internal(&frame.function))?;

        let frame = match self.caller {
            Some(location) => Frame {
                function: symbol.function,
                file: location.file().to_owned(),
                line: location.line(),
            },
            None => symbol,
        };

        frame.is_complete().then_some(frame)
    }
}

impl fmt::Debug for FrameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for ip in self.addresses() {
            list.entry(&format_args!("{:#x}", ip));
        }
        list.finish()?;
        if let Some(location) = self.caller {
            write!(f, " @ {}", location)?;
        }
        Ok(())
    }
}

/// Return addresses collected during one stack walk.
///
/// Once the frame whose symbol starts at `marker` (the capture routine) is
/// seen, the window restarts and keeps the next [`FRAME_DEPTH`] addresses.
/// Some unwinders report every symbol address as the frame's own ip, so the
/// marker never matches; the first [`MAX_ADDRESSES`] addresses are kept then,
/// and resolution skips the capture machinery among them.
struct Walk {
    marker: usize,
    ips: [usize; MAX_ADDRESSES],
    len: usize,
    seen: usize,
    matched: bool,
}

impl Walk {
    fn new(marker: usize) -> Self {
        Self { marker, ips: [0; MAX_ADDRESSES], len: 0, seen: 0, matched: false }
    }

    /// Records one frame; returns whether the walk should go on.
    fn push(&mut self, ip: usize, symbol: usize) -> bool {
        self.seen += 1;
        if !self.matched && symbol == self.marker {
            self.matched = true;
            self.ips = [0; MAX_ADDRESSES];
            self.len = 0;
            return true;
        }

        let limit = if self.matched { FRAME_DEPTH } else { MAX_ADDRESSES };
        if self.len < limit {
            self.ips[self.len] = ip;
            self.len += 1;
        }

        if self.matched {
            self.len < FRAME_DEPTH
        } else {
            self.seen < MARKER_SEARCH
        }
    }
}

const SKIPPED_PREFIXES: &[&str] = &[OWN_PATH, "backtrace::", "core::", "std::", "alloc::", "_Unwind_", "__unw_", "unw_"];

fn is_internal(function: &str) -> bool {
    let path = function.trim_start_matches('<');
    SKIPPED_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) || function.contains(OWN_TRAIT)
}
