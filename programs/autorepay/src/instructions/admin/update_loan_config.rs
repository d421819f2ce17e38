use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::LoanConfigUpdated;
use crate::state::{LoanConfig, LoanVault};

#[derive(Accounts)]
pub struct UpdateLoanConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [LOAN_VAULT_SEED],
        bump = loan_vault.bump,
        constraint = loan_vault.admin == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub loan_vault: Box<Account<'info, LoanVault>>,
}

/// Replace the risk parameters. Open loans are re-evaluated against the new
/// values on their next touch.
pub fn handler(ctx: Context<UpdateLoanConfig>, config: LoanConfig) -> Result<()> {
    let vault = &mut ctx.accounts.loan_vault;
    let old_config = vault.config;
    vault.update_config(config)?;

    emit!(LoanConfigUpdated {
        loan_vault: vault.key(),
        old_config,
        new_config: config,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
