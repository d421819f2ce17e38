use anchor_lang::prelude::*;
use crate::constants::REWARD_PRECISION;
use crate::error::ErrorCode;
use crate::math::fixed_point::{mul_div, to_u64};

/// Index growth for a yield deposit: amount * REWARD_PRECISION / total_shares.
/// Returns 0 when no shares exist; the deposit then stays in the pool balance
/// without moving the index.
pub fn index_increment(amount: u64, total_shares: u128) -> Result<u128> {
    if total_shares == 0 {
        return Ok(0);
    }
    mul_div(amount as u128, REWARD_PRECISION, total_shares)
}

/// Claimable yield for `shares` whose cursor sits at `cursor`:
/// shares * (global_index - cursor) / REWARD_PRECISION
///
/// Truncates toward zero, so rounding dust always stays with the pool.
pub fn claimable(shares: u128, global_index: u128, cursor: u128) -> Result<u64> {
    let delta = global_index
        .checked_sub(cursor)
        .ok_or(ErrorCode::MathUnderflow)?;
    if delta == 0 || shares == 0 {
        return Ok(0);
    }
    to_u64(mul_div(shares, delta, REWARD_PRECISION)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_without_shares_is_zero() {
        assert_eq!(index_increment(1_000, 0).unwrap(), 0);
    }

    #[test]
    fn test_claims_never_exceed_deposit() {
        // Three equal holders splitting 100 base units
        let total_shares = 3u128;
        let index = index_increment(100, total_shares).unwrap();
        let each = claimable(1, index, 0).unwrap();
        assert_eq!(each, 33);
        assert!(each * 3 <= 100);
    }

    #[test]
    fn test_cursor_ahead_of_index_is_rejected() {
        assert!(claimable(10, 5, 6).is_err());
    }

    #[test]
    fn test_proportional_split() {
        let index = index_increment(1_000_000, 4_000).unwrap();
        assert_eq!(claimable(1_000, index, 0).unwrap(), 250_000);
        assert_eq!(claimable(3_000, index, 0).unwrap(), 750_000);
        assert_eq!(claimable(3_000, index, index).unwrap(), 0);
    }
}
