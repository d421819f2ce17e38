use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::fixed_point::{checked_add, checked_sub};
use crate::math::interest::simple_interest;

/// One-way lifecycle: Active -> Repaid | Active -> Liquidated.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LoanStatus {
    #[default]
    Active,
    Repaid,
    Liquidated,
}

#[account]
#[derive(Default, Debug, PartialEq)]
pub struct LoanRecord {
    pub loan_id: u64,
    pub bump: u8,

    pub borrower: Pubkey,
    pub collateral: Pubkey, // custodied SupporterPosition
    pub scope: Pubkey,

    // Balances
    pub principal: u64,
    pub interest_accrued: u64,
    pub amount_repaid: u64,
    pub collateral_value_at_origination: u64,

    // Timestamps
    pub created_at: i64,
    pub last_accrual_time: i64,

    pub status: LoanStatus,

    // Reserved
    pub _reserved: [u8; 32],
}

impl LoanRecord {
    pub const LEN: usize = 8  // discriminator
        + 8   // loan_id
        + 1   // bump
        + 32  // borrower
        + 32  // collateral
        + 32  // scope
        + 8   // principal
        + 8   // interest_accrued
        + 8   // amount_repaid
        + 8   // collateral_value_at_origination
        + 8   // created_at
        + 8   // last_accrual_time
        + 1   // status (enum)
        + 32; // reserved

    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }

    /// Total owed over the life of the loan.
    pub fn total_due(&self) -> Result<u64> {
        checked_add(self.principal, self.interest_accrued)
    }

    /// principal + interest_accrued - amount_repaid
    pub fn outstanding(&self) -> Result<u64> {
        checked_sub(self.total_due()?, self.amount_repaid)
    }

    /// Interest that `accrue` would add at `now`, without touching state.
    pub fn pending_interest(&self, rate_bps: u64, now: i64) -> Result<u64> {
        if now <= self.last_accrual_time {
            return Ok(0);
        }
        let elapsed = (now - self.last_accrual_time) as u64;
        simple_interest(self.outstanding()?, rate_bps, elapsed)
    }

    /// Bring interest current. A no-op when no time has passed; a settled
    /// balance only moves the accrual clock forward.
    pub fn accrue(&mut self, rate_bps: u64, now: i64) -> Result<u64> {
        if now <= self.last_accrual_time {
            return Ok(0);
        }
        let interest = self.pending_interest(rate_bps, now)?;
        self.interest_accrued = checked_add(self.interest_accrued, interest)?;
        self.last_accrual_time = now;
        Ok(interest)
    }

    /// Apply up to `payment` against the balance. Returns the amount applied;
    /// the loan moves to Repaid when the balance reaches zero.
    pub fn apply_payment(&mut self, payment: u64) -> Result<u64> {
        require!(self.is_active(), ErrorCode::LoanNotActive);
        let outstanding = self.outstanding()?;
        let applied = payment.min(outstanding);
        self.amount_repaid = checked_add(self.amount_repaid, applied)?;
        if applied == outstanding {
            self.status = LoanStatus::Repaid;
        }
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_YEAR;

    fn active_loan(principal: u64) -> LoanRecord {
        LoanRecord {
            principal,
            created_at: 1_000,
            last_accrual_time: 1_000,
            ..LoanRecord::default()
        }
    }

    #[test]
    fn test_accrue_is_noop_without_elapsed_time() {
        let mut loan = active_loan(1_000_000);
        assert_eq!(loan.accrue(500, 1_000).unwrap(), 0);
        assert_eq!(loan.accrue(500, 900).unwrap(), 0);
        assert_eq!(loan.last_accrual_time, 1_000);
    }

    #[test]
    fn test_accrue_compounds_on_outstanding() {
        let mut loan = active_loan(1_000_000_000);
        let now = 1_000 + SECONDS_PER_YEAR as i64;
        assert_eq!(loan.accrue(1_000, now).unwrap(), 100_000_000);
        assert_eq!(loan.outstanding().unwrap(), 1_100_000_000);
        assert_eq!(loan.last_accrual_time, now);
    }

    #[test]
    fn test_settled_balance_only_advances_clock() {
        let mut loan = active_loan(500);
        loan.amount_repaid = 500;
        assert_eq!(loan.accrue(1_000, 5_000).unwrap(), 0);
        assert_eq!(loan.interest_accrued, 0);
        assert_eq!(loan.last_accrual_time, 5_000);
    }

    #[test]
    fn test_apply_payment_caps_at_outstanding() {
        let mut loan = active_loan(1_000);
        assert_eq!(loan.apply_payment(400).unwrap(), 400);
        assert!(loan.is_active());
        assert_eq!(loan.apply_payment(900).unwrap(), 600);
        assert_eq!(loan.status, LoanStatus::Repaid);
        assert_eq!(loan.amount_repaid, loan.total_due().unwrap());
        assert!(loan.apply_payment(1).is_err());
    }
}
