use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::LoanLiquidated;
use crate::state::{LoanRecord, LoanVault, SupporterPosition, SupporterScope};

#[derive(Accounts)]
pub struct Liquidate<'info> {
    pub liquidator: Signer<'info>,

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
        constraint = scope.key() == loan_record.scope @ ErrorCode::ScopeMismatch,
    )]
    pub scope: Box<Account<'info, SupporterScope>>,

    #[account(
        mut,
        constraint = position.key() == loan_record.collateral @ ErrorCode::InvalidParameter,
    )]
    pub position: Box<Account<'info, SupporterPosition>>,

    #[account(
        mut,
        seeds = [VAULT_TOKEN_SEED],
        bump = loan_vault.token_account_bump,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = liquidator_token_account.owner == liquidator.key() @ ErrorCode::Unauthorized,
        constraint = liquidator_token_account.mint == loan_vault.settlement_mint @ ErrorCode::InvalidParameter,
    )]
    pub liquidator_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Settle an unhealthy loan. The liquidator pays the full outstanding
/// balance and takes the position.
pub fn handler(mut ctx: Context<Liquidate>, max_payment: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let liquidator = ctx.accounts.liquidator.key();

    let accounts = &mut ctx.accounts;
    let outcome = accounts.loan_vault.liquidate_loan(
        &mut accounts.loan_record,
        &mut accounts.position,
        &accounts.scope,
        liquidator,
        max_payment,
        now,
    )?;

    anchor_spl::token::transfer(
        CpiContext::new(
            accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: accounts.liquidator_token_account.to_account_info(),
                to: accounts.vault_token_account.to_account_info(),
                authority: accounts.liquidator.to_account_info(),
            },
        ),
        outcome.outstanding,
    )?;

    emit!(LoanLiquidated {
        loan_id: accounts.loan_record.loan_id,
        liquidator,
        borrower: accounts.loan_record.borrower,
        outstanding: outcome.outstanding,
        collateral_value: outcome.collateral_value,
        liquidation_fee: outcome.liquidation_fee,
        refund: outcome.refund,
        timestamp: now,
    });

    Ok(())
}
