use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::fees::split_fee;
use crate::math::fixed_point::{checked_add, checked_sub};
use crate::math::valuation::{compute_health_factor, HealthFactor};
use crate::state::{LoanRecord, LoanStatus, LoanVault, SupporterPosition, SupporterScope};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiquidationOutcome {
    pub interest_accrued: u64,
    pub collateral_value: u64,
    pub health: HealthFactor,
    pub outstanding: u64,
    pub liquidation_fee: u64,
    pub insurance_share: u64,
    pub refund: u64,
}

impl LoanVault {
    /// Health of `loan` at `now` against live scope totals, interest included.
    pub fn loan_health(
        &self,
        loan: &LoanRecord,
        scope: &SupporterScope,
        position: &SupporterPosition,
        now: i64,
    ) -> Result<HealthFactor> {
        let pending = loan.pending_interest(self.config.interest_rate_bps, now)?;
        let outstanding = checked_add(loan.outstanding()?, pending)?;
        let collateral_value = scope.value_of(position.shares)?;
        compute_health_factor(
            collateral_value,
            self.config.liquidation_threshold_bps,
            outstanding,
        )
    }

    /// Settle an unhealthy loan in full. The liquidator pays exactly the
    /// outstanding balance and receives the custodied position; the
    /// liquidation fee is carved out of that payment.
    pub fn liquidate_loan(
        &mut self,
        loan: &mut LoanRecord,
        position: &mut SupporterPosition,
        scope: &SupporterScope,
        liquidator: Pubkey,
        payment: u64,
        now: i64,
    ) -> Result<LiquidationOutcome> {
        require!(loan.is_active(), ErrorCode::LoanNotActive);
        require_keys_eq!(position.scope, loan.scope, ErrorCode::ScopeMismatch);

        let config = self.config;
        let mut next = loan.clone();
        let interest_accrued = next.accrue(config.interest_rate_bps, now)?;
        let outstanding = next.outstanding()?;

        let collateral_value = scope.value_of(position.shares)?;
        let health = compute_health_factor(
            collateral_value,
            config.liquidation_threshold_bps,
            outstanding,
        )?;
        require!(health.is_liquidatable(), ErrorCode::LoanStillHealthy);
        require!(payment >= outstanding, ErrorCode::InsufficientPayment);

        let fee = split_fee(outstanding, config.liquidation_fee_bps, config.insurance_fund_bps)?;
        let liquidity = checked_add(
            self.liquidity,
            checked_sub(outstanding, fee.insurance_share)?,
        )?;
        let insurance_reserve = checked_add(self.insurance_reserve, fee.insurance_share)?;
        let total_fees_earned = checked_add(self.total_fees_earned, fee.fee)?;
        let total_repaid = checked_add(self.total_repaid, outstanding)?;
        let active_loan_count = checked_sub(self.active_loan_count, 1)?;

        next.amount_repaid = next.total_due()?;
        next.status = LoanStatus::Liquidated;

        // Commit
        *loan = next;
        position.holder = liquidator;
        self.liquidity = liquidity;
        self.insurance_reserve = insurance_reserve;
        self.total_fees_earned = total_fees_earned;
        self.total_repaid = total_repaid;
        self.active_loan_count = active_loan_count;

        Ok(LiquidationOutcome {
            interest_accrued,
            collateral_value,
            health,
            outstanding,
            liquidation_fee: fee.fee,
            insurance_share: fee.insurance_share,
            refund: payment - outstanding,
        })
    }
}
