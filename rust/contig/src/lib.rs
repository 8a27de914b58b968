//! # Contig: contiguous growable-array containers
//!
//! Contig provides a minimal dynamic-array container — a growable,
//! randomly-indexable sequence backed by a single contiguous heap
//! allocation — together with the low-level owning-buffer abstraction it is
//! built on.
//!
//! ## Architecture
//!
//! The library is split into small, layered crates; this main crate serves
//! as a convenient entry point that re-exports all of them:
//!
//! * [`buffer`] - `SlotBuf`, the exclusively-owned fixed-size slot buffer
//! * [`array`] - `Array`, the growable array, and the `Reserve` hint
//! * [`common`] - error and result types shared across the crates
//!
//! ## Example
//!
//! ```
//! use contig::Array;
//!
//! let mut arr = Array::new();
//! arr.push(1u32);
//! arr.push(2);
//! arr.insert(1, 10);
//! assert_eq!(arr.as_slice(), &[1, 10, 2]);
//! assert_eq!(arr.pop(), Some(2));
//! ```

pub use contig_array as array;
pub use contig_buffer as buffer;
pub use contig_common as common;

pub use contig_array::{Array, Reserve};
pub use contig_buffer::SlotBuf;
pub use contig_common::Result;
