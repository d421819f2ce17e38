use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::events::LoanVaultInitialized;
use crate::state::{LoanConfig, LoanVault};

#[derive(Accounts)]
pub struct InitializeLoanVault<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = LoanVault::LEN,
        seeds = [LOAN_VAULT_SEED],
        bump,
    )]
    pub loan_vault: Box<Account<'info, LoanVault>>,

    pub settlement_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = admin,
        seeds = [VAULT_TOKEN_SEED],
        bump,
        token::mint = settlement_mint,
        token::authority = loan_vault,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<InitializeLoanVault>, config: LoanConfig) -> Result<()> {
    config.validate()?;

    let loan_vault_key = ctx.accounts.loan_vault.key();
    let admin_key = ctx.accounts.admin.key();
    let mint_key = ctx.accounts.settlement_mint.key();
    let now = Clock::get()?.unix_timestamp;

    let vault = &mut ctx.accounts.loan_vault;
    vault.admin = admin_key;
    vault.bump = ctx.bumps.loan_vault;
    vault.settlement_mint = mint_key;
    vault.token_account = ctx.accounts.vault_token_account.key();
    vault.token_account_bump = ctx.bumps.vault_token_account;
    vault.liquidity = 0;
    vault.insurance_reserve = 0;
    vault.total_borrowed = 0;
    vault.total_repaid = 0;
    vault.total_fees_earned = 0;
    vault.active_loan_count = 0;
    vault.total_loans_created = 0;
    vault.config = config;
    vault.paused = false;
    vault._reserved = [0u8; 32];

    emit!(LoanVaultInitialized {
        loan_vault: loan_vault_key,
        admin: admin_key,
        settlement_mint: mint_key,
        config,
        timestamp: now,
    });

    Ok(())
}
