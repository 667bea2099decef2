use receipt_types::{Points, Receipt, ReceiptId, ScoredReceipt};

use crate::error::StoreResult;

/// Keyed storage of scored receipts.
///
/// All implementations must satisfy these invariants:
/// - `save` followed by `get_points` on the same id returns the saved points.
/// - Operations are linearizable: each one observes every `save` that
///   returned before it started.
/// - Stored points are never recomputed or mutated by the store.
pub trait ReceiptStore: Send + Sync {
    /// Store a receipt and its points under `id`, replacing any previous
    /// entry.
    fn save(&self, id: ReceiptId, receipt: Receipt, points: Points) -> StoreResult<()>;

    /// Look up the points stored for `id`.
    ///
    /// Returns `Ok(None)` if nothing was saved under `id`.
    fn get_points(&self, id: &ReceiptId) -> StoreResult<Option<Points>>;

    /// Look up the full scored receipt stored for `id`.
    ///
    /// Introspection only: the HTTP surface exposes points alone, so this is
    /// exercised by tests and embedders inspecting what was stored.
    fn get(&self, id: &ReceiptId) -> StoreResult<Option<ScoredReceipt>>;

    /// Number of receipts currently stored.
    fn len(&self) -> StoreResult<usize>;

    /// Returns `true` if nothing has been stored.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
