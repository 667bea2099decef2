//! Foundation types for the receipt processor.
//!
//! Every other crate in the workspace depends on `receipt-types`.
//!
//! # Key Types
//!
//! - [`Receipt`] -- a submitted purchase record, as decoded from the wire
//! - [`Item`] -- a single line entry on a receipt
//! - [`ReceiptId`] -- opaque identifier issued when a receipt is accepted
//! - [`ScoredReceipt`] -- a receipt paired with its computed points

pub mod error;
pub mod id;
pub mod receipt;

pub use error::TypeError;
pub use id::ReceiptId;
pub use receipt::{Item, Points, Receipt, ScoredReceipt};
