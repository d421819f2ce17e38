use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::{HarvestExecuted, LoanFullyRepaid, LoanRepayment, RepaymentSource};
use crate::state::{LoanRecord, LoanVault, ReservePool, SupporterPosition};

#[derive(Accounts)]
pub struct HarvestAndRepay<'info> {
    pub keeper: Signer<'info>,

    #[account(
        mut,
        seeds = [LOAN_VAULT_SEED],
        bump = loan_vault.bump,
    )]
    pub loan_vault: Box<Account<'info, LoanVault>>,

    #[account(
        mut,
        seeds = [LOAN_RECORD_SEED, &loan_record.loan_id.to_le_bytes()],
        bump = loan_record.bump,
    )]
    pub loan_record: Box<Account<'info, LoanRecord>>,

    #[account(
        mut,
        constraint = position.key() == loan_record.collateral @ ErrorCode::InvalidParameter,
    )]
    pub position: Box<Account<'info, SupporterPosition>>,

    #[account(
        mut,
        seeds = [RESERVE_POOL_SEED, loan_record.scope.as_ref()],
        bump = reserve_pool.bump,
    )]
    pub reserve_pool: Box<Account<'info, ReservePool>>,

    #[account(
        mut,
        seeds = [RESERVE_TOKEN_SEED, loan_record.scope.as_ref()],
        bump = reserve_pool.token_account_bump,
    )]
    pub reserve_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [VAULT_TOKEN_SEED],
        bump = loan_vault.token_account_bump,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = keeper_token_account.owner == keeper.key() @ ErrorCode::Unauthorized,
        constraint = keeper_token_account.mint == loan_vault.settlement_mint @ ErrorCode::InvalidParameter,
    )]
    pub keeper_token_account: Account<'info, TokenAccount>,

    /// Only needed when the reward overshoots the loan balance.
    #[account(
        mut,
        constraint = borrower_token_account.owner == loan_record.borrower @ ErrorCode::Unauthorized,
        constraint = borrower_token_account.mint == loan_vault.settlement_mint @ ErrorCode::InvalidParameter,
    )]
    pub borrower_token_account: Option<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Permissionless: any keeper may sweep a pledged position's yield into its
/// loan and collect the tip.
pub fn handler(mut ctx: Context<HarvestAndRepay>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let accounts = &mut ctx.accounts;
    let outcome = accounts.loan_vault.harvest_loan(
        &mut accounts.loan_record,
        &mut accounts.position,
        &mut accounts.reserve_pool,
        now,
    )?;

    if outcome.is_noop() {
        msg!("No claimable yield for loan {}", accounts.loan_record.loan_id);
        return Ok(());
    }

    let scope_key = accounts.loan_record.scope;
    let seeds = &[
        RESERVE_POOL_SEED,
        scope_key.as_ref(),
        &[accounts.reserve_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    // Reserve -> vault, keeper, borrower; zero legs are skipped
    let mut legs = vec![
        (accounts.vault_token_account.to_account_info(), outcome.applied),
        (accounts.keeper_token_account.to_account_info(), outcome.keeper_tip),
    ];
    let borrower_account = accounts.borrower_token_account.as_ref();
    if let Some(borrower) = excess_recipient(outcome.excess, borrower_account)? {
        legs.push((borrower.to_account_info(), outcome.excess));
    }
    for (to, amount) in legs {
        if amount == 0 {
            continue;
        }
        anchor_spl::token::transfer(
            CpiContext::new_with_signer(
                accounts.token_program.to_account_info(),
                anchor_spl::token::Transfer {
                    from: accounts.reserve_token_account.to_account_info(),
                    to,
                    authority: accounts.reserve_pool.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;
    }

    let loan = &accounts.loan_record;
    emit!(HarvestExecuted {
        loan_id: loan.loan_id,
        keeper: accounts.keeper.key(),
        reward: outcome.reward,
        keeper_tip: outcome.keeper_tip,
        applied: outcome.applied,
        excess: outcome.excess,
        insurance_share: outcome.insurance_share,
        timestamp: now,
    });

    emit!(LoanRepayment {
        loan_id: loan.loan_id,
        payer: accounts.keeper.key(),
        source: RepaymentSource::Harvest,
        amount: outcome.applied,
        refund: outcome.excess,
        interest_accrued: outcome.interest_accrued,
        outstanding: outcome.outstanding_after,
        timestamp: now,
    });

    if outcome.fully_repaid {
        emit!(LoanFullyRepaid {
            loan_id: loan.loan_id,
            borrower: loan.borrower,
            total_repaid: loan.amount_repaid,
            timestamp: now,
        });
    }

    Ok(())
}

/// The borrower's account is required only when there is excess to return.
fn excess_recipient<T>(excess: u64, account: Option<T>) -> Result<Option<T>> {
    if excess == 0 {
        return Ok(None);
    }
    match account {
        Some(account) => Ok(Some(account)),
        None => err!(ErrorCode::MissingExcessRecipient),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrower_account_optional_without_excess() {
        assert_eq!(excess_recipient::<u8>(0, None).unwrap(), None);
        assert_eq!(excess_recipient(0, Some(1u8)).unwrap(), None);
    }

    #[test]
    fn test_excess_requires_borrower_account() {
        assert_eq!(excess_recipient(5, Some(1u8)).unwrap(), Some(1));
        assert!(excess_recipient::<u8>(5, None).is_err());
    }
}
