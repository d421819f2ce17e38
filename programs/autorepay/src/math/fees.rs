use anchor_lang::prelude::*;
use crate::math::fixed_point::{bps_mul, checked_sub};

/// A charge carved out of `amount`, with the insurance fund's cut of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee: u64,
    pub insurance_share: u64,
}

impl FeeSplit {
    /// Portion of the fee that stays with the vault as earned revenue.
    pub fn retained(&self) -> u64 {
        self.fee - self.insurance_share
    }
}

pub fn split_fee(amount: u64, fee_bps: u64, insurance_fund_bps: u64) -> Result<FeeSplit> {
    let fee = bps_mul(amount, fee_bps)?;
    let insurance_share = bps_mul(fee, insurance_fund_bps)?;
    Ok(FeeSplit { fee, insurance_share })
}

/// Harvest waterfall over a pulled reward:
/// keeper tip first, then the loan balance, then the borrower.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HarvestWaterfall {
    pub keeper_tip: u64,
    pub applied: u64,
    pub excess: u64,
    pub insurance_share: u64,
    pub to_liquidity: u64,
}

impl HarvestWaterfall {
    pub fn clears_loan(&self, outstanding: u64) -> bool {
        self.applied == outstanding
    }
}

pub fn harvest_waterfall(
    reward: u64,
    outstanding: u64,
    keeper_tip_bps: u64,
    insurance_fund_bps: u64,
) -> Result<HarvestWaterfall> {
    let keeper_tip = bps_mul(reward, keeper_tip_bps)?;
    let net_rewards = checked_sub(reward, keeper_tip)?;

    let (applied, excess) = if net_rewards >= outstanding {
        (outstanding, net_rewards - outstanding)
    } else {
        (net_rewards, 0)
    };

    let insurance_share = bps_mul(applied, insurance_fund_bps)?;
    let to_liquidity = checked_sub(applied, insurance_share)?;

    Ok(HarvestWaterfall {
        keeper_tip,
        applied,
        excess,
        insurance_share,
        to_liquidity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origination_split() {
        let split = split_fee(40_000, 100, 1_000).unwrap();
        assert_eq!(split.fee, 400);
        assert_eq!(split.insurance_share, 40);
        assert_eq!(split.retained(), 360);
    }

    #[test]
    fn test_waterfall_partial_repayment() {
        let w = harvest_waterfall(1_000, 5_000, 50, 1_000).unwrap();
        assert_eq!(w.keeper_tip, 5);
        assert_eq!(w.applied, 995);
        assert_eq!(w.excess, 0);
        assert_eq!(w.insurance_share, 99);
        assert_eq!(w.to_liquidity, 896);
        assert!(!w.clears_loan(5_000));
    }

    #[test]
    fn test_waterfall_full_repayment_returns_excess() {
        let w = harvest_waterfall(10_000, 4_000, 50, 0).unwrap();
        assert_eq!(w.keeper_tip, 50);
        assert_eq!(w.applied, 4_000);
        assert_eq!(w.excess, 5_950);
        assert_eq!(w.to_liquidity, 4_000);
        assert!(w.clears_loan(4_000));
        assert_eq!(w.keeper_tip + w.applied + w.excess, 10_000);
    }
}
