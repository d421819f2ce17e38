use anchor_lang::prelude::*;
use crate::constants::{BPS_DENOMINATOR, SECONDS_PER_YEAR};
use crate::math::fixed_point::{mul_div, to_u64};

/// Simple interest on `outstanding` over `elapsed` seconds at an annual
/// rate in basis points:
/// outstanding * rate_bps * elapsed / (10_000 * SECONDS_PER_YEAR)
///
/// Computed with a u128 intermediate and truncated toward zero.
pub fn simple_interest(outstanding: u64, rate_bps: u64, elapsed: u64) -> Result<u64> {
    if outstanding == 0 || rate_bps == 0 || elapsed == 0 {
        return Ok(0);
    }
    let numerator = (outstanding as u128)
        .checked_mul(rate_bps as u128)
        .ok_or(crate::error::ErrorCode::MathOverflow)?;
    let denominator = (BPS_DENOMINATOR as u128) * (SECONDS_PER_YEAR as u128);
    to_u64(mul_div(numerator, elapsed as u128, denominator)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_year_at_five_percent() {
        let interest = simple_interest(1_000_000_000, 500, SECONDS_PER_YEAR).unwrap();
        assert_eq!(interest, 50_000_000);
    }

    #[test]
    fn test_zero_inputs_accrue_nothing() {
        assert_eq!(simple_interest(0, 500, 1_000).unwrap(), 0);
        assert_eq!(simple_interest(1_000, 0, 1_000).unwrap(), 0);
        assert_eq!(simple_interest(1_000, 500, 0).unwrap(), 0);
    }

    #[test]
    fn test_large_balances_do_not_overflow() {
        let ten_years = SECONDS_PER_YEAR * 10;
        let interest = simple_interest(u64::MAX / 20, 1_000, ten_years).unwrap();
        assert_eq!(interest, u64::MAX / 20);
    }
}
