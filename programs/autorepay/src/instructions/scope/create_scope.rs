use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::ScopeCreated;
use crate::state::{LoanVault, ReservePool, SupporterScope};

#[derive(Accounts)]
#[instruction(scope_id: u64)]
pub struct CreateScope<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [LOAN_VAULT_SEED],
        bump = loan_vault.bump,
        constraint = loan_vault.admin == authority.key() @ ErrorCode::Unauthorized,
    )]
    pub loan_vault: Box<Account<'info, LoanVault>>,

    #[account(
        init,
        payer = authority,
        space = SupporterScope::LEN,
        seeds = [SCOPE_SEED, &scope_id.to_le_bytes()],
        bump,
    )]
    pub scope: Box<Account<'info, SupporterScope>>,

    #[account(
        init,
        payer = authority,
        space = ReservePool::LEN,
        seeds = [RESERVE_POOL_SEED, scope.key().as_ref()],
        bump,
    )]
    pub reserve_pool: Box<Account<'info, ReservePool>>,

    #[account(
        constraint = settlement_mint.key() == loan_vault.settlement_mint @ ErrorCode::InvalidParameter,
    )]
    pub settlement_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = authority,
        seeds = [RESERVE_TOKEN_SEED, scope.key().as_ref()],
        bump,
        token::mint = settlement_mint,
        token::authority = reserve_pool,
    )]
    pub reserve_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

/// Scopes are the vault's valuation source, so only the vault admin may
/// open one.
pub fn handler(ctx: Context<CreateScope>, scope_id: u64, yield_authority: Pubkey) -> Result<()> {
    require_keys_neq!(yield_authority, Pubkey::default(), ErrorCode::InvalidParameter);

    let scope_key = ctx.accounts.scope.key();
    let reserve_key = ctx.accounts.reserve_pool.key();
    let authority_key = ctx.accounts.authority.key();
    let now = Clock::get()?.unix_timestamp;

    let scope = &mut ctx.accounts.scope;
    scope.authority = authority_key;
    scope.scope_id = scope_id;
    scope.bump = ctx.bumps.scope;
    scope.total_principal = 0;
    scope.total_shares = 0;
    scope.positions_issued = 0;
    scope.created_at = now;
    scope._reserved = [0u8; 32];

    let reserve = &mut ctx.accounts.reserve_pool;
    reserve.scope = scope_key;
    reserve.bump = ctx.bumps.reserve_pool;
    reserve.yield_authority = yield_authority;
    reserve.token_account = ctx.accounts.reserve_token_account.key();
    reserve.token_account_bump = ctx.bumps.reserve_token_account;
    reserve.balance = 0;
    reserve.global_index = 0;
    reserve.total_shares = 0;
    reserve.total_distributed = 0;
    reserve._reserved = [0u8; 32];

    emit!(ScopeCreated {
        scope: scope_key,
        scope_id,
        authority: authority_key,
        reserve_pool: reserve_key,
        yield_authority,
        timestamp: now,
    });

    Ok(())
}
