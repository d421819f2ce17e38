use anchor_lang::prelude::*;
use crate::constants::BPS_DENOMINATOR;
use crate::error::ErrorCode;

/// (a * b) / c in u128, truncating toward zero.
pub fn mul_div(a: u128, b: u128, c: u128) -> Result<u128> {
    if c == 0 {
        return Err(ErrorCode::DivisionByZero.into());
    }
    a.checked_mul(b)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(c)
        .ok_or(ErrorCode::DivisionByZero.into())
}

/// floor(a * b / c) for a u64 `a` and u128 `b`, exact even when `a * b`
/// exceeds u128. Shift-and-add over the bits of `a`, keeping `rem < c`.
pub fn mul_div_wide(a: u64, b: u128, c: u128) -> Result<u128> {
    if c == 0 {
        return Err(ErrorCode::DivisionByZero.into());
    }
    let whole = (a as u128)
        .checked_mul(b / c)
        .ok_or(ErrorCode::MathOverflow)?;
    let r = b % c;

    // q * c + rem == (bits of `a` seen so far) * r
    let mut q: u128 = 0;
    let mut rem: u128 = 0;
    for bit in (0..64).rev() {
        q <<= 1;
        if rem >= c - rem {
            rem -= c - rem;
            q += 1;
        } else {
            rem += rem;
        }
        if (a >> bit) & 1 == 1 {
            if rem >= c - r {
                rem -= c - r;
                q += 1;
            } else {
                rem += r;
            }
        }
    }

    whole.checked_add(q).ok_or(ErrorCode::MathOverflow.into())
}

/// Multiply a value by basis points: (value * bps) / 10_000
pub fn bps_mul(value: u64, bps: u64) -> Result<u64> {
    let product = mul_div(value as u128, bps as u128, BPS_DENOMINATOR as u128)?;
    to_u64(product)
}

/// Narrow a u128 intermediate back to a token amount
pub fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| ErrorCode::MathOverflow.into())
}

pub fn checked_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(ErrorCode::MathOverflow.into())
}

pub fn checked_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(ErrorCode::MathUnderflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bps_mul_truncates() {
        assert_eq!(bps_mul(10_000, 100).unwrap(), 100);
        assert_eq!(bps_mul(199, 50).unwrap(), 0); // 0.995 rounds down
        assert_eq!(bps_mul(u64::MAX, 10_000).unwrap(), u64::MAX);
    }

    #[test]
    fn test_mul_div_uses_wide_intermediate() {
        let big = u64::MAX as u128;
        assert_eq!(mul_div(big, big, big).unwrap(), big);
        assert!(mul_div(u128::MAX, 2, 1).is_err());
        assert!(mul_div(1, 1, 0).is_err());
    }

    #[test]
    fn test_mul_div_wide_past_u128_product() {
        assert_eq!(mul_div_wide(3, 10, 4).unwrap(), 7);
        assert_eq!(mul_div_wide(u64::MAX, u128::MAX, u128::MAX).unwrap(), u64::MAX as u128);
        // 1e19 * 1e21 overflows u128
        let shares = 1_000_000_000_000_000_000_000u128;
        assert_eq!(
            mul_div_wide(10_000_000_000_000_000_000, shares, 4 * shares).unwrap(),
            2_500_000_000_000_000_000
        );
        assert_eq!(mul_div_wide(7, 1, 3).unwrap(), 2);
        assert!(mul_div_wide(1, 1, 0).is_err());
        assert!(mul_div_wide(2, u128::MAX, 1).is_err());
    }

    #[test]
    fn test_to_u64_rejects_wide_values() {
        assert!(to_u64(u64::MAX as u128 + 1).is_err());
        assert_eq!(to_u64(42).unwrap(), 42);
    }
}
