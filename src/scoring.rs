// 🏆 Scoring Engine - seven independent point rules
// Pure functions: same receipt in, same points out
//
// Each rule is defensive: a field it cannot interpret contributes 0 instead of
// failing the whole computation. Validation normally keeps such input out.

use crate::receipt::{Item, Receipt};
use crate::validation::{is_valid_amount, DATE_FORMAT, TIME_FORMAT};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const POINTS_PER_ITEM_PAIR: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

/// Bonus window in minutes after midnight, both ends excluded (14:00, 16:00)
const AFTERNOON_START: u32 = 14 * 60;
const AFTERNOON_END: u32 = 16 * 60;

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// Points contributed by each rule for one receipt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// +1 per letter or digit in the retailer name
    pub retailer: u64,

    /// +50 when the total has no cents
    pub round_dollar: u64,

    /// +25 when the cents are a multiple of 25
    pub quarter_multiple: u64,

    /// +5 per two items
    pub item_pairs: u64,

    /// ceil(price * 0.2) per item whose space-trimmed description length is a multiple of 3
    pub descriptions: u64,

    /// +6 when the day of the month is odd
    pub odd_day: u64,

    /// +10 when bought strictly between 14:00 and 16:00
    pub afternoon: u64,
}

impl ScoreBreakdown {
    /// Sum of all rules, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Apply every rule and keep the individual contributions
pub fn breakdown(receipt: &Receipt) -> ScoreBreakdown {
    ScoreBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: round_dollar_points(&receipt.total),
        quarter_multiple: quarter_multiple_points(&receipt.total),
        item_pairs: item_pair_points(&receipt.items),
        descriptions: description_points(&receipt.items),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    }
}

/// Total points for a receipt
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

// ============================================================================
// RULES
// ============================================================================

pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64
}

pub fn round_dollar_points(total: &str) -> u64 {
    // Decided on the text so totals too long for a Decimal still qualify
    let round = total.split_once('.').is_some_and(|(dollars, cents)| {
        !dollars.is_empty()
            && dollars.bytes().all(|b| b.is_ascii_digit())
            && !cents.is_empty()
            && cents.bytes().all(|b| b == b'0')
    });

    if round {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

pub fn quarter_multiple_points(total: &str) -> u64 {
    let cents = total
        .split_once('.')
        .and_then(|(_, cents)| cents.parse::<u32>().ok());

    match cents {
        Some(cents) if cents % 25 == 0 => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    }
}

pub fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * POINTS_PER_ITEM_PAIR
}

pub fn description_points(items: &[Item]) -> u64 {
    items
        .iter()
        .map(item_description_points)
        .fold(0, u64::saturating_add)
}

fn item_description_points(item: &Item) -> u64 {
    // Only spaces are trimmed; tabs and newlines count toward the length
    if item.short_description.trim_matches(' ').chars().count() % 3 != 0 {
        return 0;
    }

    // 0.2 as an exact decimal
    let rate = Decimal::new(2, 1);

    match parse_amount(&item.price) {
        Some(price) => {
            let points = (price * rate).ceil();
            if points.is_sign_negative() {
                0
            } else {
                points.to_u64().unwrap_or(u64::MAX)
            }
        }
        // Well-formed but beyond Decimal range
        None if is_valid_amount(&item.price) => u64::MAX,
        None => 0,
    }
}

pub fn odd_day_points(purchase_date: &str) -> u64 {
    match NaiveDate::parse_from_str(purchase_date, DATE_FORMAT) {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

pub fn afternoon_points(purchase_time: &str) -> u64 {
    let Ok(time) = NaiveTime::parse_from_str(purchase_time, TIME_FORMAT) else {
        return 0;
    };

    let minutes = time.hour() * 60 + time.minute();
    if minutes > AFTERNOON_START && minutes < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}

/// Parse a currency string into an exact decimal
pub fn parse_amount(value: &str) -> Option<Decimal> {
    Decimal::from_str(value.trim()).ok()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;
    use rust_decimal_macros::dec;

    fn receipt(
        retailer: &str,
        date: &str,
        time: &str,
        items: Vec<Item>,
        total: &str,
    ) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items,
            total: total.to_string(),
        }
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let r = receipt(
            "Target",
            "2022-01-01",
            "13:01",
            vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        );

        let points = breakdown(&r);
        assert_eq!(points.retailer, 6);
        assert_eq!(points.round_dollar, 0);
        assert_eq!(points.quarter_multiple, 0);
        assert_eq!(points.item_pairs, 10);
        assert_eq!(points.descriptions, 6);
        assert_eq!(points.odd_day, 6);
        assert_eq!(points.afternoon, 0);
        assert_eq!(score(&r), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let r = receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            vec![
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
            ],
            "9.00",
        );

        let points = breakdown(&r);
        assert_eq!(points.retailer, 14);
        assert_eq!(points.round_dollar, 50);
        assert_eq!(points.quarter_multiple, 25);
        assert_eq!(points.item_pairs, 10);
        assert_eq!(points.descriptions, 0);
        assert_eq!(points.odd_day, 0);
        assert_eq!(points.afternoon, 10);
        assert_eq!(score(&r), 109);
    }

    #[test]
    fn test_two_item_target_receipt() {
        // Neither description length is a multiple of 3
        let r = receipt(
            "Target",
            "2022-01-01",
            "13:01",
            vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Knorr Creamy Chicken", "1.26"),
            ],
            "35.35",
        );
        assert_eq!(breakdown(&r).descriptions, 0);
        assert_eq!(score(&r), 17);
    }

    #[test]
    fn test_round_total_earns_both_total_bonuses() {
        assert_eq!(round_dollar_points("9.00"), 50);
        assert_eq!(quarter_multiple_points("9.00"), 25);
        assert_eq!(afternoon_points("15:00"), 10);
    }

    #[test]
    fn test_quarter_multiples() {
        assert_eq!(quarter_multiple_points("1.25"), 25);
        assert_eq!(quarter_multiple_points("1.50"), 25);
        assert_eq!(quarter_multiple_points("1.75"), 25);
        assert_eq!(quarter_multiple_points("35.35"), 0);
        assert_eq!(round_dollar_points("1.25"), 0);
    }

    #[test]
    fn test_afternoon_window_is_exclusive() {
        assert_eq!(afternoon_points("14:00"), 0);
        assert_eq!(afternoon_points("14:01"), 10);
        assert_eq!(afternoon_points("15:59"), 10);
        assert_eq!(afternoon_points("16:00"), 0);
        assert_eq!(afternoon_points("02:30"), 0);
    }

    #[test]
    fn test_odd_day() {
        assert_eq!(odd_day_points("2022-01-01"), 6);
        assert_eq!(odd_day_points("2022-01-31"), 6);
        assert_eq!(odd_day_points("2022-03-20"), 0);
    }

    #[test]
    fn test_item_pairs_round_down() {
        let items = |n: usize| vec![Item::new("Gum", "1.00"); n];
        assert_eq!(item_pair_points(&items(1)), 0);
        assert_eq!(item_pair_points(&items(2)), 5);
        assert_eq!(item_pair_points(&items(3)), 5);
        assert_eq!(item_pair_points(&items(8)), 20);
    }

    #[test]
    fn test_description_points_round_up() {
        // 12.25 * 0.2 = 2.45 -> 3
        assert_eq!(description_points(&[Item::new("Emils Cheese Pizza", "12.25")]), 3);
        // 5.00 * 0.2 = 1.00 exactly -> 1, no float drift
        assert_eq!(description_points(&[Item::new("Tea", "5.00")]), 1);
        // 15.00 * 0.2 = 3.00 exactly -> 3
        assert_eq!(description_points(&[Item::new("Tea", "15.00")]), 3);
        // Trimmed length 6
        assert_eq!(description_points(&[Item::new("  Dasani  ", "1.40")]), 1);
        // Length 7 is not a multiple of 3
        assert_eq!(description_points(&[Item::new("Walmart", "100.00")]), 0);
        // Tabs are not trimmed, so "Tea\t" has length 4
        assert_eq!(description_points(&[Item::new("Tea\t", "5.00")]), 0);
        // Trailing space trimmed, tabs kept: "Tea\t\t\t" has length 6
        assert_eq!(description_points(&[Item::new("Tea\t\t\t ", "5.00")]), 1);
    }

    #[test]
    fn test_huge_prices_saturate() {
        let items = vec![
            Item::new("Tea", "90000000000000000000.00"),
            Item::new("Tea", "90000000000000000000.00"),
        ];
        let r = receipt("Target", "2022-01-01", "13:01", items, "180000000000000000000.00");

        assert!(validate(&r).is_ok());
        assert_eq!(description_points(&r.items), u64::MAX);
        assert_eq!(score(&r), u64::MAX);
    }

    #[test]
    fn test_price_beyond_decimal_range_saturates() {
        let price = "1000000000000000000000000000000000.00";
        assert!(parse_amount(price).is_none());
        assert_eq!(description_points(&[Item::new("Tea", price)]), u64::MAX);
        assert_eq!(description_points(&[Item::new("Tea", "1e40")]), 0);
    }

    #[test]
    fn test_huge_totals_keep_total_rules_consistent() {
        let round = "100000000000000000000000000000.00";
        assert_eq!(round_dollar_points(round), 50);
        assert_eq!(quarter_multiple_points(round), 25);

        let quarter = "100000000000000000000000000000.75";
        assert_eq!(round_dollar_points(quarter), 0);
        assert_eq!(quarter_multiple_points(quarter), 25);

        let neither = "100000000000000000000000000000.10";
        assert_eq!(round_dollar_points(neither), 0);
        assert_eq!(quarter_multiple_points(neither), 0);
    }

    #[test]
    fn test_total_saturates() {
        let points = ScoreBreakdown {
            retailer: 6,
            descriptions: u64::MAX,
            afternoon: 10,
            ..ScoreBreakdown::default()
        };
        assert_eq!(points.total(), u64::MAX);
    }

    #[test]
    fn test_malformed_fields_contribute_zero() {
        let r = receipt(
            "Target",
            "not-a-date",
            "late",
            vec![Item::new("Tea", "free")],
            "lots",
        );

        let points = breakdown(&r);
        assert_eq!(points.round_dollar, 0);
        assert_eq!(points.quarter_multiple, 0);
        assert_eq!(points.descriptions, 0);
        assert_eq!(points.odd_day, 0);
        assert_eq!(points.afternoon, 0);
        assert_eq!(points.total(), 6);
    }

    #[test]
    fn test_negative_price_contributes_zero() {
        assert_eq!(description_points(&[Item::new("Tea", "-10.00")]), 0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.25"), Some(dec!(12.25)));
        assert_eq!(parse_amount("0.00"), Some(dec!(0)));
        assert_eq!(parse_amount("twelve"), None);
    }
}
