//! Money calculation utilities using rust_decimal for precision
//!
//! Entities store monetary values and quantities as `f64`. Every calculation
//! converts to `Decimal`, computes, and converts back rounded to 2 decimal
//! places (half-up at the cent boundary).

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
///
/// NaN becomes zero. Values beyond the Decimal range (infinities included)
/// saturate to `Decimal::MAX` / `Decimal::MIN`; values too small to
/// represent become zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    if value.is_nan() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(if value.abs() < 1.0 {
        Decimal::ZERO
    } else if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Round a Decimal to 2 decimal places (half-up)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Convert a Decimal quantity (stock, recipe amounts) back to f64
///
/// Quantities are not rounded to cents: 0.125 kg stays 0.125 kg.
#[inline]
pub fn to_quantity(value: Decimal) -> f64 {
    value.normalize().to_f64().unwrap_or_default()
}

/// Whether two monetary amounts are equal within one cent
pub fn money_eq(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() < MONEY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let a = 0.1_f64;
        let b = 0.2_f64;
        assert_ne!(a + b, 0.3);

        let sum_dec = to_decimal(a) + to_decimal(b);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_half_up_rounding() {
        assert_eq!(to_f64(Decimal::new(10005, 3)), 10.01);
        assert_eq!(to_f64(Decimal::new(10004, 3)), 10.0);
        assert_eq!(to_f64(Decimal::new(-10005, 3)), -10.01);
    }

    #[test]
    fn test_nan_becomes_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(to_decimal(1e29), Decimal::MAX);
        assert_eq!(to_decimal(-1e30), Decimal::MIN);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::MAX);
        assert_eq!(to_decimal(f64::NEG_INFINITY), Decimal::MIN);
        // a huge price must never read as free
        assert!(to_f64(to_decimal(1e29)) > 7.9e28);
    }

    #[test]
    fn test_money_eq() {
        assert!(money_eq(12.35, 12.354));
        assert!(!money_eq(12.35, 12.36));
    }
}
