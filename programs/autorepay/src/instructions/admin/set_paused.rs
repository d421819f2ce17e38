use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PauseToggled;
use crate::state::LoanVault;

#[derive(Accounts)]
pub struct SetPaused<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [LOAN_VAULT_SEED],
        bump = loan_vault.bump,
        constraint = loan_vault.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub loan_vault: Box<Account<'info, LoanVault>>,
}

/// Pausing only stops new borrows. Repay, harvest, liquidate and collateral
/// withdrawal stay open so existing loans can always be resolved.
pub fn handler(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let vault = &mut ctx.accounts.loan_vault;
    vault.paused = paused;

    emit!(PauseToggled {
        loan_vault: vault.key(),
        paused,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
