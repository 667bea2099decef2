//! Wire protocol for the receipt processor.
//!
//! Defines the HTTP endpoint paths, the JSON request and response bodies, and
//! the decoder used for submitted receipts.

pub mod codec;
pub mod endpoint;
pub mod error;
pub mod message;

pub use codec::decode_receipt;
pub use endpoint::{endpoints, HealthResponse};
pub use error::{ProtocolError, ProtocolResult};
pub use message::{
    messages, PointsResponse, ProcessResponse, ValidationResponse, MAX_BODY_BYTES,
};
