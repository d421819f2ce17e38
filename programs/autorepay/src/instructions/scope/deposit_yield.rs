use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::YieldDeposited;
use crate::state::ReservePool;

#[derive(Accounts)]
pub struct DepositYield<'info> {
    pub yield_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RESERVE_POOL_SEED, reserve_pool.scope.as_ref()],
        bump = reserve_pool.bump,
        constraint = reserve_pool.yield_authority == yield_authority.key() @ ErrorCode::Unauthorized,
    )]
    pub reserve_pool: Box<Account<'info, ReservePool>>,

    #[account(
        mut,
        seeds = [RESERVE_TOKEN_SEED, reserve_pool.scope.as_ref()],
        bump = reserve_pool.token_account_bump,
    )]
    pub reserve_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = source_token_account.owner == yield_authority.key() @ ErrorCode::Unauthorized,
        constraint = source_token_account.mint == reserve_token_account.mint @ ErrorCode::InvalidParameter,
    )]
    pub source_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<DepositYield>, amount: u64) -> Result<()> {
    let index_increment = ctx.accounts.reserve_pool.deposit_yield(amount)?;
    if index_increment == 0 {
        msg!("No shares outstanding; {} held in reserve balance", amount);
    }

    anchor_spl::token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.source_token_account.to_account_info(),
                to: ctx.accounts.reserve_token_account.to_account_info(),
                authority: ctx.accounts.yield_authority.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(YieldDeposited {
        reserve_pool: ctx.accounts.reserve_pool.key(),
        amount,
        index_increment,
        global_index: ctx.accounts.reserve_pool.global_index,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
