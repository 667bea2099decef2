use receipt_types::Receipt;

use crate::pattern;

/// A single defect found in a submitted receipt.
///
/// The `Display` form is the user-facing message returned to clients. Item
/// positions are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Retailer is required.")]
    MissingRetailer,

    #[error("Retailer contains invalid characters.")]
    InvalidRetailer,

    #[error("PurchaseDate is required.")]
    MissingPurchaseDate,

    #[error("PurchaseDate must be in YYYY-MM-DD format.")]
    InvalidPurchaseDate,

    #[error("PurchaseTime is required.")]
    MissingPurchaseTime,

    #[error("PurchaseTime must be in HH:MM format.")]
    InvalidPurchaseTime,

    #[error("Total is required.")]
    MissingTotal,

    #[error("Total must be a decimal value with two decimal places.")]
    InvalidTotal,

    #[error("At least one item is required.")]
    NoItems,

    #[error("Item {position} is missing a ShortDescription.")]
    MissingItemDescription { position: usize },

    #[error("Item {position} is missing a Price.")]
    MissingItemPrice { position: usize },

    #[error("Item {position} Price must be a decimal value with two decimal places.")]
    InvalidItemPrice { position: usize },
}

/// Outcome of validating one receipt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Every defect found, in field declaration order, then item order.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Returns `true` if no defects were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The user-facing messages, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Check a receipt's structure and field formats.
///
/// Checks never short-circuit: a receipt with several defects reports all of
/// them. Format checks only run on non-empty fields, so an empty field yields
/// exactly one "required" error.
pub fn validate_receipt(receipt: &Receipt) -> ValidationReport {
    let mut errors = Vec::new();

    check_field(
        &receipt.retailer,
        pattern::is_retailer_name,
        ValidationError::MissingRetailer,
        ValidationError::InvalidRetailer,
        &mut errors,
    );
    check_field(
        &receipt.purchase_date,
        pattern::is_date,
        ValidationError::MissingPurchaseDate,
        ValidationError::InvalidPurchaseDate,
        &mut errors,
    );
    check_field(
        &receipt.purchase_time,
        pattern::is_time,
        ValidationError::MissingPurchaseTime,
        ValidationError::InvalidPurchaseTime,
        &mut errors,
    );
    check_field(
        &receipt.total,
        pattern::is_amount,
        ValidationError::MissingTotal,
        ValidationError::InvalidTotal,
        &mut errors,
    );

    if receipt.items.is_empty() {
        errors.push(ValidationError::NoItems);
    }
    for (index, item) in receipt.items.iter().enumerate() {
        let position = index + 1;
        if item.short_description.is_empty() {
            errors.push(ValidationError::MissingItemDescription { position });
        }
        check_field(
            &item.price,
            pattern::is_amount,
            ValidationError::MissingItemPrice { position },
            ValidationError::InvalidItemPrice { position },
            &mut errors,
        );
    }

    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "receipt failed validation");
    }
    ValidationReport { errors }
}

fn check_field(
    value: &str,
    matches: fn(&str) -> bool,
    missing: ValidationError,
    malformed: ValidationError,
    errors: &mut Vec<ValidationError>,
) {
    if value.is_empty() {
        errors.push(missing);
    } else if !matches(value) {
        errors.push(malformed);
    }
}
