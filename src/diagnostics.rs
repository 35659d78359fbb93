//! Fatal-abort and verbosity hooks used by the graph core.
//!
//! The graph never reports invariant violations as recoverable errors. Code
//! that detects one calls [`abort`] (through the crate-internal `fatal!` macro),
//! which records the violation through `tracing` and then panics.
//!
//! All events are emitted under the [`LOG_TARGET`] target so that subscribers
//! can filter graph diagnostics independently, e.g. with
//! `RUST_LOG=gengraph=trace`.

use tracing::Level;

use crate::Error;

/// The `tracing` target under which every graph event is emitted.
pub const LOG_TARGET: &str = "gengraph";

/// Reports a broken graph invariant and never returns.
///
/// The violation is logged at `error` level together with the source location
/// that detected it, then the current thread panics with the error message.
///
/// # Arguments
///
/// * `error` - The violated invariant
/// * `file` - Source file that detected the violation
/// * `line` - Source line that detected the violation
///
/// # Panics
///
/// Always.
#[cold]
pub fn abort(error: Error, file: &'static str, line: u32) -> ! {
    tracing::error!(target: LOG_TARGET, %error, file, line, "graph invariant violated");
    panic!("{error} ({file}:{line})");
}

/// Returns `true` if verbose (trace level) graph logging is enabled.
///
/// Use this to skip building expensive diagnostic output, such as full node
/// dumps, that would otherwise be discarded.
#[must_use]
pub fn verbose_enabled() -> bool {
    tracing::enabled!(target: LOG_TARGET, Level::TRACE)
}
