//! Growable contiguous sequence container with forward and reverse cursors.
//!
//! [`Sequence`] owns a single contiguous buffer with an explicit split
//! between *length* (live elements) and *capacity* (allocated slots).
//! Slots past the live range hold default placeholders, so the backing
//! storage is always fully initialized and the whole crate is safe code.
//!
//! # Architecture
//!
//! ```text
//! Sequence<T> (owns the buffer)
//! ├── slots: Vec<T>            fully initialized out to capacity
//! ├── len: usize               live range is [0, len)
//! ├── Cursor<'_, T>            shared borrow, forward or reverse walk
//! └── CursorMut<'_, T>         exclusive borrow, adds write-form deref
//! ```
//!
//! # Failure policy
//!
//! Two failure channels, deliberately distinct:
//!
//! - Positional *writes* (`insert`, `remove`, `set`, `swap`) return
//!   `Result<(), SequenceError>` and leave the sequence untouched on error.
//! - Indexed *reads* (`get`, `get_mut`, `Index`, cursor dereference) treat
//!   an out-of-range position as a contract violation: a diagnostic is
//!   written to stderr and the process aborts. There is no unwinding on
//!   any failure path.
//!
//! # Threading
//!
//! A sequence has exactly one owner and no internal synchronisation.
//! Cursors borrow the sequence, so the compiler rejects structural
//! mutation while a walk is in progress.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod digest;
pub mod error;
mod fatal;
pub mod sequence;

// Public re-exports for the primary API surface.
pub use cursor::{Cursor, CursorMut, Direction};
pub use error::SequenceError;
pub use sequence::{Sequence, DEFAULT_CAPACITY, GROWTH_FACTOR};
