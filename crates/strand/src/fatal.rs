//! Process-terminating diagnostics for contract violations.
//!
//! An out-of-range indexed read is a programming error, not a runtime
//! condition the caller can meaningfully handle: continuing would mean
//! reading data the container never vouched for. The policy is crash over
//! corruption — report once on stderr, then abort. Allocation failure
//! takes the same exit through Rust's global alloc-error handler.

use std::fmt;
use std::process;

/// Write `args` to stderr and abort the process. Never unwinds.
#[cold]
pub(crate) fn fatal(args: fmt::Arguments<'_>) -> ! {
    eprintln!("strand: fatal: {args}");
    process::abort();
}
