use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::Json;
use tracing::{debug, info, warn};

use receipt_protocol::{decode_receipt, HealthResponse, PointsResponse, ProcessResponse};
use receipt_rules::{calculate_points, validate_receipt};
use receipt_types::ReceiptId;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// `POST /receipts/process`: validate, score and store a receipt.
///
/// Nothing is stored unless the payload decodes and passes validation.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> ServerResult<Json<ProcessResponse>> {
    let receipt = decode_receipt(&body).inspect_err(|e| {
        warn!(error = %e, "rejected undecodable receipt payload");
    })?;

    let report = validate_receipt(&receipt);
    if !report.is_valid() {
        let errors = report.messages();
        warn!(?errors, "receipt validation failed");
        return Err(ServerError::Validation(errors));
    }

    let id = ReceiptId::new();
    let points = calculate_points(&receipt);
    state.store.save(id, receipt, points)?;
    info!(%id, points, "receipt processed");

    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points`: look up the points stored for a receipt.
pub async fn get_points(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<PointsResponse>> {
    debug!(id = %raw_id, "points lookup");
    // An id that does not parse was never issued, so it cannot be stored.
    let Ok(id) = raw_id.parse::<ReceiptId>() else {
        return Err(ServerError::ReceiptNotFound(raw_id));
    };

    match state.store.get_points(&id)? {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => {
            debug!(%id, "receipt not found");
            Err(ServerError::ReceiptNotFound(raw_id))
        }
    }
}

/// Fallback for every path that is not a known endpoint.
pub async fn invalid_path(uri: Uri) -> ServerError {
    debug!(path = %uri.path(), "rejected malformed path");
    ServerError::InvalidPath(uri.path().to_string())
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
