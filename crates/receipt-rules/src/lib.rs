//! Receipt validation and points scoring.
//!
//! Two pure, synchronous components sit here:
//!
//! - [`validate_receipt`] checks a decoded [`Receipt`](receipt_types::Receipt)
//!   field by field and collects every defect into a [`ValidationReport`].
//! - [`calculate_points`] maps a receipt to its integer point total. The
//!   per-rule contributions are available through [`score_breakdown`].
//!
//! Neither component performs I/O or holds state, so both are safe to call
//! from any request task without coordination.

pub mod pattern;
pub mod points;
pub mod validation;

pub use points::{calculate_points, score_breakdown, PointsBreakdown};
pub use validation::{validate_receipt, ValidationError, ValidationReport};
