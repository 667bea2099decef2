use receipt_types::Receipt;

use crate::error::{ProtocolError, ProtocolResult};

/// Decode a submitted receipt from a request body.
///
/// Only the first JSON value in the body is read; anything after it is
/// ignored. Unknown fields are ignored, and missing or `null` fields decode as
/// empty. A bare `null` body decodes as an empty receipt.
pub fn decode_receipt(body: &[u8]) -> ProtocolResult<Receipt> {
    let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<Option<Receipt>>();
    match stream.next() {
        Some(receipt) => Ok(receipt?.unwrap_or_default()),
        None => Err(ProtocolError::EmptyPayload),
    }
}
