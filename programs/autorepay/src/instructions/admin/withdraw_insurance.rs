use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::InsuranceWithdrawn;
use crate::state::LoanVault;

#[derive(Accounts)]
pub struct WithdrawInsurance<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [LOAN_VAULT_SEED],
        bump = loan_vault.bump,
        constraint = loan_vault.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub loan_vault: Box<Account<'info, LoanVault>>,

    #[account(
        mut,
        seeds = [VAULT_TOKEN_SEED],
        bump = loan_vault.token_account_bump,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = recipient_token_account.mint == loan_vault.settlement_mint @ ErrorCode::InvalidParameter,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<WithdrawInsurance>, amount: u64) -> Result<()> {
    ctx.accounts.loan_vault.withdraw_insurance(amount)?;

    let seeds = &[LOAN_VAULT_SEED, &[ctx.accounts.loan_vault.bump]];
    let signer_seeds = &[&seeds[..]];

    anchor_spl::token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.vault_token_account.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: ctx.accounts.loan_vault.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(InsuranceWithdrawn {
        loan_vault: ctx.accounts.loan_vault.key(),
        recipient: ctx.accounts.recipient_token_account.key(),
        amount,
        insurance_reserve: ctx.accounts.loan_vault.insurance_reserve,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
