//! A contiguous growable array built on the `contig-buffer` owning-buffer layer.
//!
//! # Core Concepts
//!
//! ## Two layers
//!
//! [`contig_buffer::SlotBuf`] owns a fixed run of initialized element slots
//! and nothing else; [`Array`] layers a logical length and a growth-on-demand
//! policy on top of it. The array never touches raw memory directly — all
//! allocation, indexing and release goes through the buffer.
//!
//! ## Visible region
//!
//! An `Array` with length `len` and capacity `cap` exposes the slots
//! `[0, len)` as its contents. Slots in `[len, cap)` are allocated and
//! initialized but not user-visible; logical truncation only lowers `len`.
//!
//! ## Growth
//!
//! Every operation that may need more room (push, insert, resize, reserve)
//! applies the single policy in [`grow::next_capacity`], which amortizes
//! reallocation cost to O(1) per append.
//!
//! # Access surfaces
//!
//! Three distinct element-access paths are provided and deliberately not
//! merged:
//!
//! - `array[index]` (via `Deref` to `[T]`) — bounds-checked, panics;
//! - [`Array::at`] / [`Array::at_mut`] — bounds-checked, returns a
//!   recoverable [`contig_common::error::Error`];
//! - `unsafe` `get_unchecked` (via `Deref` to `[T]`) — no check, undefined
//!   behavior on misuse.

pub mod array;
pub mod grow;
pub mod reserve;

pub use array::Array;
pub use reserve::Reserve;
