use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::fees::split_fee;
use crate::math::fixed_point::{checked_add, checked_sub};
use crate::math::valuation::max_borrowable;
use crate::state::{LoanReceipt, LoanRecord, LoanStatus, LoanVault, SupporterPosition, SupporterScope};

pub struct BorrowArgs {
    pub borrower: Pubkey,
    pub position_key: Pubkey,
    /// LoanVault PDA; becomes the position holder while the loan is open
    pub custodian: Pubkey,
    pub amount: u64,
    pub now: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BorrowOutcome {
    pub loan_id: u64,
    pub collateral_value: u64,
    pub origination_fee: u64,
    pub insurance_share: u64,
    pub disbursed: u64,
}

impl LoanVault {
    /// Open a loan against `position`, taking it into custody.
    ///
    /// The origination fee is never disbursed: it stays in `liquidity` as
    /// earned revenue except for its insurance share, which moves to
    /// `insurance_reserve` immediately.
    pub fn open_loan(
        &mut self,
        args: BorrowArgs,
        scope: &SupporterScope,
        position: &mut SupporterPosition,
        loan: &mut LoanRecord,
        receipt: &mut LoanReceipt,
    ) -> Result<BorrowOutcome> {
        let config = self.config;
        require!(!self.paused, ErrorCode::VaultPaused);
        self.assert_recognized_scope(scope)?;
        require!(
            args.amount >= config.min_loan_amount,
            ErrorCode::BelowMinimumLoan
        );
        require!(self.liquidity >= args.amount, ErrorCode::InsufficientLiquidity);
        position.assert_holder(&args.borrower)?;

        let collateral_value = scope.value_of(position.shares)?;
        require!(collateral_value > 0, ErrorCode::ZeroCollateralValue);
        require!(
            args.amount <= max_borrowable(collateral_value, config.max_ltv_bps)?,
            ErrorCode::ExceedsMaxLtv
        );

        let fee = split_fee(args.amount, config.origination_fee_bps, config.insurance_fund_bps)?;
        let disbursed = checked_sub(args.amount, fee.fee)?;

        let liquidity = checked_sub(
            checked_sub(self.liquidity, disbursed)?,
            fee.insurance_share,
        )?;
        let insurance_reserve = checked_add(self.insurance_reserve, fee.insurance_share)?;
        let total_borrowed = checked_add(self.total_borrowed, args.amount)?;
        let total_fees_earned = checked_add(self.total_fees_earned, fee.fee)?;
        let active_loan_count = checked_add(self.active_loan_count, 1)?;
        let loan_id = self.total_loans_created;
        let total_loans_created = checked_add(loan_id, 1)?;

        // Commit
        position.holder = args.custodian;

        loan.loan_id = loan_id;
        loan.borrower = args.borrower;
        loan.collateral = args.position_key;
        loan.scope = position.scope;
        loan.principal = args.amount;
        loan.interest_accrued = 0;
        loan.amount_repaid = 0;
        loan.collateral_value_at_origination = collateral_value;
        loan.created_at = args.now;
        loan.last_accrual_time = args.now;
        loan.status = LoanStatus::Active;

        receipt.loan_id = loan_id;
        receipt.holder = args.borrower;
        receipt.borrower = args.borrower;
        receipt.collateral = args.position_key;
        receipt.principal = args.amount;

        self.liquidity = liquidity;
        self.insurance_reserve = insurance_reserve;
        self.total_borrowed = total_borrowed;
        self.total_fees_earned = total_fees_earned;
        self.active_loan_count = active_loan_count;
        self.total_loans_created = total_loans_created;

        Ok(BorrowOutcome {
            loan_id,
            collateral_value,
            origination_fee: fee.fee,
            insurance_share: fee.insurance_share,
            disbursed,
        })
    }
}
