use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use receipt_types::{Points, Receipt, ReceiptId, ScoredReceipt};

use crate::error::{StoreError, StoreResult};
use crate::traits::ReceiptStore;

/// In-memory, HashMap-based receipt store.
///
/// A single `Mutex` guards the whole map, so saves and lookups are fully
/// serialized. Receipts are moved in on save and cloned out on read.
pub struct InMemoryReceiptStore {
    receipts: Mutex<HashMap<ReceiptId, ScoredReceipt>>,
}

impl InMemoryReceiptStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            receipts: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, HashMap<ReceiptId, ScoredReceipt>>> {
        self.receipts.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn save(&self, id: ReceiptId, receipt: Receipt, points: Points) -> StoreResult<()> {
        let mut map = self.lock()?;
        map.insert(id, ScoredReceipt::new(receipt, points));
        tracing::debug!(%id, points, "receipt stored");
        Ok(())
    }

    fn get_points(&self, id: &ReceiptId) -> StoreResult<Option<Points>> {
        let map = self.lock()?;
        Ok(map.get(id).map(|scored| scored.points))
    }

    fn get(&self, id: &ReceiptId) -> StoreResult<Option<ScoredReceipt>> {
        let map = self.lock()?;
        Ok(map.get(id).cloned())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }
}

impl std::fmt::Debug for InMemoryReceiptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len().unwrap_or_default();
        f.debug_struct("InMemoryReceiptStore")
            .field("receipt_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use receipt_types::Item;

    use super::*;

    fn make_receipt(retailer: &str) -> Receipt {
        Receipt {
            retailer: retailer.into(),
            purchase_date: "2022-01-01".into(),
            purchase_time: "13:01".into(),
            total: "6.49".into(),
            items: vec![Item::new("Mountain Dew 12PK", "6.49")],
        }
    }

    // -----------------------------------------------------------------------
    // Save / lookup
    // -----------------------------------------------------------------------

    #[test]
    fn save_then_get_points() {
        let store = InMemoryReceiptStore::new();
        let id = ReceiptId::new();
        store.save(id, make_receipt("Target"), 12).unwrap();
        assert_eq!(store.get_points(&id).unwrap(), Some(12));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = InMemoryReceiptStore::new();
        assert_eq!(store.get_points(&ReceiptId::new()).unwrap(), None);
        assert!(store.get(&ReceiptId::new()).unwrap().is_none());
    }

    #[test]
    fn get_returns_full_record() {
        let store = InMemoryReceiptStore::new();
        let id = ReceiptId::new();
        store.save(id, make_receipt("Walgreens"), 15).unwrap();

        let scored = store.get(&id).unwrap().expect("should exist");
        assert_eq!(scored.receipt.retailer, "Walgreens");
        assert_eq!(scored.points, 15);
    }

    #[test]
    fn save_is_an_upsert() {
        let store = InMemoryReceiptStore::new();
        let id = ReceiptId::new();
        store.save(id, make_receipt("Target"), 12).unwrap();
        store.save(id, make_receipt("Target"), 40).unwrap();
        assert_eq!(store.get_points(&id).unwrap(), Some(40));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn entries_are_independent() {
        let store = InMemoryReceiptStore::new();
        let a = ReceiptId::new();
        let b = ReceiptId::new();
        store.save(a, make_receipt("A"), 1).unwrap();
        store.save(b, make_receipt("B"), 2).unwrap();
        assert_eq!(store.get_points(&a).unwrap(), Some(1));
        assert_eq!(store.get_points(&b).unwrap(), Some(2));
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_and_is_empty() {
        let store = InMemoryReceiptStore::new();
        assert!(store.is_empty().unwrap());
        store.save(ReceiptId::new(), make_receipt("Target"), 0).unwrap();
        assert!(!store.is_empty().unwrap());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn default_creates_empty_store() {
        let store = InMemoryReceiptStore::default();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryReceiptStore::new();
        store.save(ReceiptId::new(), make_receipt("Target"), 0).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryReceiptStore"));
        assert!(debug.contains("receipt_count: 1"));
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_saves_are_all_visible() {
        let store = Arc::new(InMemoryReceiptStore::new());

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let id = ReceiptId::new();
                    store.save(id, make_receipt("Target"), n).unwrap();
                    // Read-your-writes: the save has returned, so it is visible.
                    assert_eq!(store.get_points(&id).unwrap(), Some(n));
                    id
                })
            })
            .collect();

        let ids: Vec<ReceiptId> = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .collect();
        assert_eq!(store.len().unwrap(), 8);
        for (n, id) in ids.iter().enumerate() {
            assert_eq!(store.get_points(id).unwrap(), Some(n as Points));
        }
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let store = Arc::new(InMemoryReceiptStore::new());
        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = poisoner.receipts.lock().unwrap();
            panic!("poison the store lock");
        })
        .join();

        let err = store.get_points(&ReceiptId::new()).unwrap_err();
        assert!(matches!(err, StoreError::LockPoisoned));
    }
}
