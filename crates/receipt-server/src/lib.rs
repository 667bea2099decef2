//! HTTP server for the receipt processor.
//!
//! Accepts receipts over `POST /receipts/process`, scores them, keeps them in
//! an injected [`ReceiptStore`](receipt_store::ReceiptStore), and answers
//! `GET /receipts/{id}/points` lookups.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::ReceiptServer;
pub use state::AppState;
