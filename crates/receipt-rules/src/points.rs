//! The points rule engine.
//!
//! Rules are independent and additive:
//!
//! 1. One point per ASCII alphanumeric character in the retailer name.
//! 2. 50 points if the total is a round dollar amount.
//! 3. 25 points if the total is a multiple of `0.25`.
//! 4. 5 points for every two items.
//! 5. For each item whose trimmed description length is a multiple of 3,
//!    `ceil(price * 0.2)` points.
//! 6. Retired. Contributes nothing.
//! 7. 6 points if the purchase day is odd.
//! 8. 10 points if the purchase hour is 14.
//!
//! Numeric fields are parsed leniently: an unparsable amount counts as `0.0`,
//! an unparsable date as day 1 and an unparsable time as hour 0. Scoring never
//! fails, and point arithmetic saturates instead of overflowing on huge
//! amounts.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use receipt_types::{Item, Points, Receipt};

const ROUND_DOLLAR_BONUS: Points = 50;
const QUARTER_MULTIPLE_BONUS: Points = 25;
const ITEM_PAIR_BONUS: Points = 5;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_BONUS: Points = 6;
const AFTERNOON_BONUS: Points = 10;
const AFTERNOON_HOUR: u32 = 14;

/// Points earned by each rule for one receipt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer_name: Points,
    pub round_dollar: Points,
    pub quarter_multiple: Points,
    pub item_pairs: Points,
    pub item_descriptions: Points,
    pub odd_day: Points,
    pub afternoon_hour: Points,
}

impl PointsBreakdown {
    /// Sum of every rule's contribution, saturating at `Points::MAX`.
    pub fn total(&self) -> Points {
        self.entries()
            .iter()
            .fold(0, |sum, &(_, points)| sum.saturating_add(points))
    }

    /// `(rule name, points)` pairs in rule order, for display.
    pub fn entries(&self) -> [(&'static str, Points); 7] {
        [
            ("retailer name", self.retailer_name),
            ("round dollar total", self.round_dollar),
            ("total multiple of 0.25", self.quarter_multiple),
            ("item pairs", self.item_pairs),
            ("item descriptions", self.item_descriptions),
            ("odd purchase day", self.odd_day),
            ("2 PM purchase hour", self.afternoon_hour),
        ]
    }
}

/// Compute the point total for a receipt.
pub fn calculate_points(receipt: &Receipt) -> Points {
    score_breakdown(receipt).total()
}

/// Compute each rule's contribution for a receipt.
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = parse_amount(&receipt.total);

    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar: round_dollar_points(total),
        quarter_multiple: quarter_multiple_points(total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, Points::saturating_add),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon_hour: afternoon_points(&receipt.purchase_time),
    }
}

fn retailer_name_points(retailer: &str) -> Points {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as Points
}

fn round_dollar_points(total: f64) -> Points {
    if total == total.floor() {
        ROUND_DOLLAR_BONUS
    } else {
        0
    }
}

fn quarter_multiple_points(total: f64) -> Points {
    // Truncates after the float multiply, so 0.29 * 100.0 = 28.999... -> 28.
    let cents = (total * 100.0) as i64;
    if cents % 25 == 0 {
        QUARTER_MULTIPLE_BONUS
    } else {
        0
    }
}

fn item_pair_points(item_count: usize) -> Points {
    Points::try_from(item_count / 2)
        .unwrap_or(Points::MAX)
        .saturating_mul(ITEM_PAIR_BONUS)
}

fn item_description_points(item: &Item) -> Points {
    let len = item.short_description.trim().len();
    if len > 0 && len % 3 == 0 {
        (parse_amount(&item.price) * DESCRIPTION_PRICE_MULTIPLIER).ceil() as Points
    } else {
        0
    }
}

fn odd_day_points(purchase_date: &str) -> Points {
    let day = NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d")
        .map(|date| date.day())
        .unwrap_or(1);
    if day % 2 == 1 {
        ODD_DAY_BONUS
    } else {
        0
    }
}

fn afternoon_points(purchase_time: &str) -> Points {
    let hour = NaiveTime::parse_from_str(purchase_time, "%H:%M")
        .map(|time| time.hour())
        .unwrap_or(0);
    if hour == AFTERNOON_HOUR {
        AFTERNOON_BONUS
    } else {
        0
    }
}

fn parse_amount(amount: &str) -> f64 {
    amount.parse().unwrap_or(0.0)
}
