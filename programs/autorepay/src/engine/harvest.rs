use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::fees::harvest_waterfall;
use crate::math::fixed_point::{checked_add, checked_sub};
use crate::state::{LoanRecord, LoanVault, ReservePool, SupporterPosition};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HarvestOutcome {
    pub interest_accrued: u64,
    pub reward: u64,
    pub keeper_tip: u64,
    pub applied: u64,
    pub excess: u64,
    pub insurance_share: u64,
    pub outstanding_after: u64,
    pub fully_repaid: bool,
}

impl HarvestOutcome {
    pub fn is_noop(&self) -> bool {
        self.reward == 0
    }
}

impl LoanVault {
    /// Pull the custodied position's yield out of its reserve pool and run it
    /// through the waterfall: keeper tip, then the loan balance (less the
    /// insurance share), then any excess back to the borrower.
    ///
    /// Permissionless and allowed while paused. With nothing claimable only
    /// interest accrual is recorded and a zero outcome is returned.
    pub fn harvest_loan(
        &mut self,
        loan: &mut LoanRecord,
        position: &mut SupporterPosition,
        reserve: &mut ReservePool,
        now: i64,
    ) -> Result<HarvestOutcome> {
        require!(loan.is_active(), ErrorCode::LoanNotActive);
        require_keys_eq!(position.scope, reserve.scope, ErrorCode::ScopeMismatch);

        let config = self.config;
        let mut next = loan.clone();
        let interest_accrued = next.accrue(config.interest_rate_bps, now)?;
        let outstanding = next.outstanding()?;

        let reward = reserve.claimable(position.shares, position.claim_cursor)?;
        if reward == 0 {
            *loan = next;
            return Ok(HarvestOutcome {
                interest_accrued,
                outstanding_after: outstanding,
                ..HarvestOutcome::default()
            });
        }

        let waterfall = harvest_waterfall(
            reward,
            outstanding,
            config.keeper_tip_bps,
            config.insurance_fund_bps,
        )?;
        next.apply_payment(waterfall.applied)?;
        let fully_repaid = !next.is_active();

        let liquidity = checked_add(self.liquidity, waterfall.to_liquidity)?;
        let insurance_reserve = checked_add(self.insurance_reserve, waterfall.insurance_share)?;
        let total_repaid = checked_add(self.total_repaid, waterfall.applied)?;
        let active_loan_count = if fully_repaid {
            checked_sub(self.active_loan_count, 1)?
        } else {
            self.active_loan_count
        };
        let outstanding_after = next.outstanding()?;

        // Commit: the pull and the cursor advance happen together, first.
        reserve.claim(position)?;

        *loan = next;
        self.liquidity = liquidity;
        self.insurance_reserve = insurance_reserve;
        self.total_repaid = total_repaid;
        self.active_loan_count = active_loan_count;

        Ok(HarvestOutcome {
            interest_accrued,
            reward,
            keeper_tip: waterfall.keeper_tip,
            applied: waterfall.applied,
            excess: waterfall.excess,
            insurance_share: waterfall.insurance_share,
            outstanding_after,
            fully_repaid,
        })
    }
}
