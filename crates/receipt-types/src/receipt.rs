use serde::{Deserialize, Deserializer, Serialize};

/// Integer loyalty score computed for a receipt.
pub type Points = i64;

/// A submitted purchase record.
///
/// Every field defaults to empty when absent from the payload or `null`, so a
/// missing field surfaces as a validation error rather than a decode error.
/// A `null` entry in `items` decodes as an empty item. Field
/// contents are kept exactly as submitted; format checks happen in
/// `receipt-rules`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,
    /// Purchase time, `HH:MM` on a 24-hour clock.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,
    /// Total amount paid, as a decimal string with two places.
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,
    /// Line items, in submission order.
    #[serde(deserialize_with = "null_items_as_default")]
    pub items: Vec<Item>,
}

impl Receipt {
    /// Number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// A single line entry on a receipt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    /// Short product description.
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    /// Unit price, as a decimal string with two places.
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A receipt paired with the points it earned when it was accepted.
///
/// Points are computed once at save time and never recomputed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredReceipt {
    pub receipt: Receipt,
    pub points: Points,
}

impl ScoredReceipt {
    pub fn new(receipt: Receipt, points: Points) -> Self {
        Self { receipt, points }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_items_as_default<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Option<Item>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
