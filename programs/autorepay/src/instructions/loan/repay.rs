use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::{LoanFullyRepaid, LoanRepayment, RepaymentSource};
use crate::state::{LoanRecord, LoanVault};

#[derive(Accounts)]
pub struct Repay<'info> {
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LOAN_VAULT_SEED],
        bump = loan_vault.bump,
    )]
    pub loan_vault: Box<Account<'info, LoanVault>>,

    #[account(
        mut,
        seeds = [LOAN_RECORD_SEED, &loan_record.loan_id.to_le_bytes()],
        bump = loan_record.bump,
    )]
    pub loan_record: Box<Account<'info, LoanRecord>>,

    #[account(
        mut,
        seeds = [VAULT_TOKEN_SEED],
        bump = loan_vault.token_account_bump,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = payer_token_account.owner == payer.key() @ ErrorCode::Unauthorized,
        constraint = payer_token_account.mint == loan_vault.settlement_mint @ ErrorCode::InvalidParameter,
    )]
    pub payer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Pay down any active loan. Only the applied amount is pulled from the
/// payer; the remainder of `max_payment` never leaves their account.
pub fn handler(mut ctx: Context<Repay>, max_payment: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let accounts = &mut ctx.accounts;
    let outcome = accounts
        .loan_vault
        .repay_loan(&mut accounts.loan_record, max_payment, now)?;

    anchor_spl::token::transfer(
        CpiContext::new(
            accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: accounts.payer_token_account.to_account_info(),
                to: accounts.vault_token_account.to_account_info(),
                authority: accounts.payer.to_account_info(),
            },
        ),
        outcome.applied,
    )?;

    let loan = &accounts.loan_record;
    emit!(LoanRepayment {
        loan_id: loan.loan_id,
        payer: accounts.payer.key(),
        source: RepaymentSource::Manual,
        amount: outcome.applied,
        refund: outcome.refund,
        interest_accrued: outcome.interest_accrued,
        outstanding: outcome.outstanding_after,
        timestamp: now,
    });

    if outcome.fully_repaid {
        emit!(LoanFullyRepaid {
            loan_id: loan.loan_id,
            borrower: loan.borrower,
            total_repaid: loan.amount_repaid,
            timestamp: now,
        });
    }

    Ok(())
}
