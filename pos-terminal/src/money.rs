//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` at the display/serialization boundary.

use crate::cart::CartLine;
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::SaleSettings;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Derived cart totals
///
/// Recomputed on demand; two calls without an intervening cart edit return
/// identical values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    /// Change due against the tendered amount, never negative
    pub change: f64,
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for display, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Calculate a cart line total (price * quantity)
pub fn line_total(line: &CartLine) -> Decimal {
    (to_decimal(line.price) * Decimal::from(line.quantity))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculate totals for a set of cart lines
///
/// Tax and total are rounded as they are derived so the displayed figures
/// stay self-consistent (subtotal + tax == total). With `auto_round` the
/// total is rounded to the nearest whole unit before change is computed.
pub fn calculate_totals(lines: &[CartLine], settings: &SaleSettings, tendered: f64) -> Totals {
    let subtotal: Decimal = lines.iter().map(line_total).sum();
    let tax = (subtotal * to_decimal(settings.tax_rate) / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let mut total = subtotal + tax;
    if settings.auto_round {
        total = total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    }
    let change = (to_decimal(tendered) - total).max(Decimal::ZERO);

    Totals {
        subtotal: to_f64(subtotal),
        tax: to_f64(tax),
        total: to_f64(total),
        change: to_f64(change),
    }
}

/// Check if payment is sufficient (with small tolerance for edge cases)
///
/// Returns true if paid >= required - 0.01
pub fn is_payment_sufficient(paid: f64, required: f64) -> bool {
    let paid_dec = to_decimal(paid);
    let required_dec = to_decimal(required);
    paid_dec >= required_dec - MONEY_TOLERANCE
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Format an amount with the configured currency symbol
pub fn format_currency(amount: f64, settings: &SaleSettings) -> String {
    format!("{}{:.2}", settings.currency, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: f64, quantity: i32) -> CartLine {
        CartLine {
            product_id: 1,
            name: "Item".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let a = 0.1_f64;
        let b = 0.2_f64;
        let sum_f64 = a + b;

        // f64 fails
        assert_ne!(sum_f64, 0.3);

        // Decimal succeeds
        let sum_dec = to_decimal(a) + to_decimal(b);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 0.01 one thousand times
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(to_f64(line_total(&line(10.99, 3))), 32.97);
        assert_eq!(to_f64(line_total(&line(0.01, 100))), 1.0);
    }

    #[test]
    fn test_totals_ten_percent_tax() {
        let lines = vec![line(10.0, 2)];
        let totals = calculate_totals(&lines, &SaleSettings::default(), 25.0);

        assert_eq!(totals.subtotal, 20.0);
        assert_eq!(totals.tax, 2.0);
        assert_eq!(totals.total, 22.0);
        assert_eq!(totals.change, 3.0);
    }

    #[test]
    fn test_totals_are_idempotent() {
        let lines = vec![line(3.33, 3), line(0.99, 7)];
        let settings = SaleSettings::default();

        let first = calculate_totals(&lines, &settings, 20.0);
        let second = calculate_totals(&lines, &settings, 20.0);

        assert_eq!(first, second);
    }

    #[test]
    fn test_totals_empty_cart() {
        let totals = calculate_totals(&[], &SaleSettings::default(), 0.0);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.total, 0.0);
        assert_eq!(totals.change, 0.0);
    }

    #[test]
    fn test_change_never_negative() {
        let lines = vec![line(10.0, 1)];
        let totals = calculate_totals(&lines, &SaleSettings::default(), 5.0);
        assert_eq!(totals.change, 0.0);
    }

    #[test]
    fn test_auto_round_rounds_total_to_whole_units() {
        let settings = SaleSettings {
            auto_round: true,
            ..SaleSettings::default()
        };
        let lines = vec![line(9.99, 1)];
        let totals = calculate_totals(&lines, &settings, 15.0);

        // 9.99 + 1.00 tax = 10.99, rounded to 11
        assert_eq!(totals.total, 11.0);
        assert_eq!(totals.change, 4.0);
    }

    #[test]
    fn test_zero_tax_rate() {
        let settings = SaleSettings {
            tax_rate: 0.0,
            ..SaleSettings::default()
        };
        let totals = calculate_totals(&[line(7.5, 2)], &settings, 15.0);

        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.total, 15.0);
        assert_eq!(totals.change, 0.0);
    }

    #[test]
    fn test_is_payment_sufficient() {
        assert!(is_payment_sufficient(100.0, 100.0));
        assert!(is_payment_sufficient(100.01, 100.0));
        assert!(is_payment_sufficient(99.995, 100.0)); // Within tolerance
        assert!(!is_payment_sufficient(99.98, 100.0)); // Outside tolerance
    }

    #[test]
    fn test_money_eq() {
        assert!(money_eq(100.0, 100.0));
        assert!(money_eq(100.004, 100.006));
        assert!(!money_eq(100.0, 100.02));
    }

    #[test]
    fn test_rounding_half_up() {
        // 0.005 should round up to 0.01
        let value = Decimal::new(5, 3);
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(rounded.to_f64().unwrap(), 0.01);

        // 0.004 should round down to 0.00
        let value2 = Decimal::new(4, 3);
        let rounded2 = value2.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(rounded2.to_f64().unwrap(), 0.0);
    }

    #[test]
    fn test_to_decimal_nan_becomes_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
        assert_eq!(to_decimal(f64::NEG_INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_format_currency() {
        let settings = SaleSettings::default();
        assert_eq!(format_currency(12.3, &settings), "$12.30");
        assert_eq!(format_currency(0.0, &settings), "$0.00");

        let euro = SaleSettings {
            currency: "€".to_string(),
            ..SaleSettings::default()
        };
        assert_eq!(format_currency(5.0, &euro), "€5.00");
    }
}
