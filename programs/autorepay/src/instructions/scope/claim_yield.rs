use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::YieldClaimed;
use crate::state::{ReservePool, SupporterPosition};

#[derive(Accounts)]
pub struct ClaimYield<'info> {
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [POSITION_SEED, position.scope.as_ref(), &position.position_index.to_le_bytes()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, SupporterPosition>>,

    #[account(
        mut,
        seeds = [RESERVE_POOL_SEED, position.scope.as_ref()],
        bump = reserve_pool.bump,
    )]
    pub reserve_pool: Box<Account<'info, ReservePool>>,

    #[account(
        mut,
        seeds = [RESERVE_TOKEN_SEED, position.scope.as_ref()],
        bump = reserve_pool.token_account_bump,
    )]
    pub reserve_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = holder_token_account.owner == holder.key() @ ErrorCode::Unauthorized,
        constraint = holder_token_account.mint == reserve_token_account.mint @ ErrorCode::InvalidParameter,
    )]
    pub holder_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Claim an unpledged position's yield. Pledged positions are held by the
/// loan vault and can only be harvested against their loan.
pub fn handler(ctx: Context<ClaimYield>) -> Result<()> {
    let holder = ctx.accounts.holder.key();
    ctx.accounts.position.assert_holder(&holder)?;

    let amount = ctx.accounts.reserve_pool.claim(&mut ctx.accounts.position)?;
    if amount == 0 {
        msg!("Nothing to claim");
        return Ok(());
    }

    let scope_key = ctx.accounts.reserve_pool.scope;
    let seeds = &[
        RESERVE_POOL_SEED,
        scope_key.as_ref(),
        &[ctx.accounts.reserve_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    anchor_spl::token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: ctx.accounts.reserve_token_account.to_account_info(),
                to: ctx.accounts.holder_token_account.to_account_info(),
                authority: ctx.accounts.reserve_pool.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(YieldClaimed {
        reserve_pool: ctx.accounts.reserve_pool.key(),
        position: ctx.accounts.position.key(),
        holder,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
