//! Storage of scored receipts.
//!
//! Every accepted receipt is stored once, together with the points it
//! earned, under a freshly generated [`ReceiptId`](receipt_types::ReceiptId).
//!
//! # Storage Backends
//!
//! All backends implement the [`ReceiptStore`] trait:
//!
//! - [`InMemoryReceiptStore`] -- `HashMap`-based store behind a single lock
//!
//! # Design Rules
//!
//! 1. The store never scores or validates; callers hand it finished results.
//! 2. `save` is an unconditional upsert.
//! 3. Every operation completes under the lock, so a read issued after a
//!    `save` returns always observes it.
//! 4. Nothing is ever evicted. Data lives until the store is dropped.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryReceiptStore;
pub use traits::ReceiptStore;
