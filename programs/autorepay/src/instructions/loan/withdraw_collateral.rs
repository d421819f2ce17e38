use anchor_lang::prelude::*;
use crate::constants::*;
use crate::engine::release_collateral;
use crate::error::ErrorCode;
use crate::events::CollateralWithdrawn;
use crate::state::{LoanReceipt, LoanRecord, SupporterPosition};

#[derive(Accounts)]
pub struct WithdrawCollateral<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(
        mut,
        close = holder,
        seeds = [LOAN_RECORD_SEED, &loan_record.loan_id.to_le_bytes()],
        bump = loan_record.bump,
    )]
    pub loan_record: Box<Account<'info, LoanRecord>>,

    #[account(
        mut,
        close = holder,
        seeds = [LOAN_RECEIPT_SEED, &loan_record.loan_id.to_le_bytes()],
        bump = loan_receipt.bump,
    )]
    pub loan_receipt: Box<Account<'info, LoanReceipt>>,

    #[account(
        mut,
        constraint = position.key() == loan_record.collateral @ ErrorCode::InvalidParameter,
    )]
    pub position: Box<Account<'info, SupporterPosition>>,
}

/// Redeem the receipt of a repaid loan. The record and receipt are closed to
/// the redeemer, so each receipt redeems at most once: a second attempt
/// fails while loading `loan_record` with `AccountNotInitialized`, not with
/// `LoanNotRepaid`. Receipts of liquidated loans fail with `LoanNotRepaid`.
pub fn handler(mut ctx: Context<WithdrawCollateral>) -> Result<()> {
    let holder = ctx.accounts.holder.key();

    let accounts = &mut ctx.accounts;
    release_collateral(
        &accounts.loan_record,
        &accounts.loan_receipt,
        &mut accounts.position,
        holder,
    )?;

    emit!(CollateralWithdrawn {
        loan_id: accounts.loan_record.loan_id,
        holder,
        collateral: accounts.position.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
