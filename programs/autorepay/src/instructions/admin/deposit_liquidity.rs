use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::LiquidityDeposited;
use crate::state::LoanVault;

#[derive(Accounts)]
pub struct DepositLiquidity<'info> {
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
        constraint = admin_token_account.owner == admin.key() @ ErrorCode::Unauthorized,
        constraint = admin_token_account.mint == loan_vault.settlement_mint @ ErrorCode::InvalidParameter,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<DepositLiquidity>, amount: u64) -> Result<()> {
    ctx.accounts.loan_vault.deposit_liquidity(amount)?;

    anchor_spl::token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault_token_account.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(LiquidityDeposited {
        loan_vault: ctx.accounts.loan_vault.key(),
        depositor: ctx.accounts.admin.key(),
        amount,
        liquidity: ctx.accounts.loan_vault.liquidity,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
