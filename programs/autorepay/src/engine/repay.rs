use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::fixed_point::{checked_add, checked_sub};
use crate::state::{LoanRecord, LoanVault};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepayOutcome {
    pub interest_accrued: u64,
    pub applied: u64,
    pub refund: u64,
    pub outstanding_after: u64,
    pub fully_repaid: bool,
}

impl LoanVault {
    /// Manual repayment. Anyone may pay down any active loan; only
    /// `min(payment, outstanding)` is taken and the rest is refunded.
    pub fn repay_loan(
        &mut self,
        loan: &mut LoanRecord,
        payment: u64,
        now: i64,
    ) -> Result<RepayOutcome> {
        require!(payment > 0, ErrorCode::ZeroAmount);
        require!(loan.is_active(), ErrorCode::LoanNotActive);

        let mut next = loan.clone();
        let interest_accrued = next.accrue(self.config.interest_rate_bps, now)?;
        let applied = next.apply_payment(payment)?;
        let fully_repaid = !next.is_active();

        let liquidity = checked_add(self.liquidity, applied)?;
        let total_repaid = checked_add(self.total_repaid, applied)?;
        let active_loan_count = if fully_repaid {
            checked_sub(self.active_loan_count, 1)?
        } else {
            self.active_loan_count
        };
        let outstanding_after = next.outstanding()?;

        // Commit
        *loan = next;
        self.liquidity = liquidity;
        self.total_repaid = total_repaid;
        self.active_loan_count = active_loan_count;

        Ok(RepayOutcome {
            interest_accrued,
            applied,
            refund: payment - applied,
            outstanding_after,
            fully_repaid,
        })
    }
}
