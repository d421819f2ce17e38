use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PositionIssued;
use crate::state::{ReservePool, SupporterPosition, SupporterScope};

#[derive(Accounts)]
pub struct IssuePosition<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SCOPE_SEED, &scope.scope_id.to_le_bytes()],
        bump = scope.bump,
        constraint = scope.authority == authority.key() @ ErrorCode::Unauthorized,
    )]
    pub scope: Box<Account<'info, SupporterScope>>,

    #[account(
        mut,
        seeds = [RESERVE_POOL_SEED, scope.key().as_ref()],
        bump = reserve_pool.bump,
    )]
    pub reserve_pool: Box<Account<'info, ReservePool>>,

    #[account(
        init,
        payer = authority,
        space = SupporterPosition::LEN,
        seeds = [POSITION_SEED, scope.key().as_ref(), &scope.positions_issued.to_le_bytes()],
        bump,
    )]
    pub position: Box<Account<'info, SupporterPosition>>,

    pub system_program: Program<'info, System>,
}

/// Mint a position whose cursor starts at the current index, so it earns
/// only yield deposited after issuance.
pub fn handler(
    ctx: Context<IssuePosition>,
    shares: u128,
    principal: u64,
    holder: Pubkey,
) -> Result<()> {
    require_keys_neq!(holder, Pubkey::default(), ErrorCode::InvalidParameter);

    let scope_key = ctx.accounts.scope.key();
    let position_key = ctx.accounts.position.key();
    let now = Clock::get()?.unix_timestamp;

    let scope = &mut ctx.accounts.scope;
    let position_index = scope.positions_issued;
    scope.record_issuance(shares, principal)?;

    let reserve = &mut ctx.accounts.reserve_pool;
    reserve.register_shares(shares)?;

    let position = &mut ctx.accounts.position;
    position.scope = scope_key;
    position.position_index = position_index;
    position.bump = ctx.bumps.position;
    position.holder = holder;
    position.shares = shares;
    position.claim_cursor = reserve.global_index;
    position.issued_at = now;

    emit!(PositionIssued {
        scope: scope_key,
        position: position_key,
        holder,
        shares,
        principal,
        claim_cursor: position.claim_cursor,
        timestamp: now,
    });

    Ok(())
}
