use serde::{Deserialize, Serialize};

use receipt_types::{Points, ReceiptId};

/// Default request body limit for submitted receipts.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Fixed user-facing messages.
pub mod messages {
    pub const INVALID_RECEIPT: &str = "Invalid receipt format. Please verify input.";
    pub const VALIDATION_FAILED: &str = "Validation Failed";
    pub const RECEIPT_NOT_FOUND: &str = "Receipt not found.";
    pub const INVALID_URL: &str = "Invalid URL format. Use /receipts/{id}/points.";
    pub const INTERNAL_ERROR: &str = "internal error";
}

/// Body returned when a receipt is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Body returned by a points lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// Body returned when a receipt fails validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub message: String,
    pub errors: Vec<String>,
}

impl ValidationResponse {
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            message: messages::VALIDATION_FAILED.into(),
            errors,
        }
    }
}
