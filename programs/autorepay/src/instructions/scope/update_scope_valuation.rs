use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::ScopeRevalued;
use crate::state::SupporterScope;

#[derive(Accounts)]
pub struct UpdateScopeValuation<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SCOPE_SEED, &scope.scope_id.to_le_bytes()],
        bump = scope.bump,
        constraint = scope.authority == authority.key() @ ErrorCode::Unauthorized,
    )]
    pub scope: Box<Account<'info, SupporterScope>>,
}

pub fn handler(ctx: Context<UpdateScopeValuation>, total_principal: u64) -> Result<()> {
    let scope = &mut ctx.accounts.scope;
    let old_total_principal = scope.total_principal;
    scope.total_principal = total_principal;

    emit!(ScopeRevalued {
        scope: scope.key(),
        old_total_principal,
        new_total_principal: total_principal,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
