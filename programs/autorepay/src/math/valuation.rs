use anchor_lang::prelude::*;
use crate::constants::BPS_DENOMINATOR;
use crate::math::fixed_point::{bps_mul, mul_div, mul_div_wide, to_u64};

/// Conservative collateral value of a position: its pro-rata slice of the
/// scope's principal. Unclaimed yield and any market premium are ignored.
/// collateral_value = total_principal * shares / total_shares
pub fn collateral_value(total_principal: u64, shares: u128, total_shares: u128) -> Result<u64> {
    if total_shares == 0 || shares == 0 {
        return Ok(0);
    }
    to_u64(mul_div_wide(total_principal, shares, total_shares)?)
}

/// Largest loan the collateral supports at `max_ltv_bps`.
pub fn max_borrowable(collateral_value: u64, max_ltv_bps: u64) -> Result<u64> {
    bps_mul(collateral_value, max_ltv_bps)
}

/// Health factor as a numerator/denominator pair so no division happens:
/// (collateral_value * liquidation_threshold_bps / 10_000) / outstanding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthFactor {
    pub numerator: u64,
    pub denominator: u64,
}

impl HealthFactor {
    /// Below 1.0: the threshold-weighted collateral no longer covers the debt.
    pub fn is_liquidatable(&self) -> bool {
        self.numerator < self.denominator
    }

    /// Health in basis points (10_000 = 1.0). Saturates for debt-free loans.
    pub fn to_bps(&self) -> Result<u64> {
        if self.denominator == 0 {
            return Ok(u64::MAX);
        }
        let bps = mul_div(
            self.numerator as u128,
            BPS_DENOMINATOR as u128,
            self.denominator as u128,
        )?;
        Ok(u64::try_from(bps).unwrap_or(u64::MAX))
    }
}

pub fn compute_health_factor(
    collateral_value: u64,
    liquidation_threshold_bps: u64,
    outstanding: u64,
) -> Result<HealthFactor> {
    Ok(HealthFactor {
        numerator: bps_mul(collateral_value, liquidation_threshold_bps)?,
        denominator: outstanding,
    })
}
