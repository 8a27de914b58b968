//! Owning element buffers for use by the contig containers: a fixed-size,
//! exclusively-owned run of initialized slots, with explicit ownership transfer.

pub mod slot_buf;

pub use slot_buf::SlotBuf;
