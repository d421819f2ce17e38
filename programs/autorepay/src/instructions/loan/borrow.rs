use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::engine::BorrowArgs;
use crate::error::ErrorCode;
use crate::events::LoanCreated;
use crate::state::{LoanReceipt, LoanRecord, LoanVault, SupporterPosition, SupporterScope};

#[derive(Accounts)]
pub struct Borrow<'info> {
    #[account(mut)]
    pub borrower: Signer<'info>,

    #[account(
        mut,
        seeds = [LOAN_VAULT_SEED],
        bump = loan_vault.bump,
    )]
    pub loan_vault: Box<Account<'info, LoanVault>>,

    #[account(
        seeds = [SCOPE_SEED, &scope.scope_id.to_le_bytes()],
        bump = scope.bump,
    )]
    pub scope: Box<Account<'info, SupporterScope>>,

    #[account(
        mut,
        seeds = [POSITION_SEED, scope.key().as_ref(), &position.position_index.to_le_bytes()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, SupporterPosition>>,

    #[account(
        init,
        payer = borrower,
        space = LoanRecord::LEN,
        seeds = [LOAN_RECORD_SEED, &loan_vault.total_loans_created.to_le_bytes()],
        bump,
    )]
    pub loan_record: Box<Account<'info, LoanRecord>>,

    #[account(
        init,
        payer = borrower,
        space = LoanReceipt::LEN,
        seeds = [LOAN_RECEIPT_SEED, &loan_vault.total_loans_created.to_le_bytes()],
        bump,
    )]
    pub loan_receipt: Box<Account<'info, LoanReceipt>>,

    #[account(
        mut,
        seeds = [VAULT_TOKEN_SEED],
        bump = loan_vault.token_account_bump,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = borrower_token_account.owner == borrower.key() @ ErrorCode::Unauthorized,
        constraint = borrower_token_account.mint == loan_vault.settlement_mint @ ErrorCode::InvalidParameter,
    )]
    pub borrower_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(mut ctx: Context<Borrow>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let args = BorrowArgs {
        borrower: ctx.accounts.borrower.key(),
        position_key: ctx.accounts.position.key(),
        custodian: ctx.accounts.loan_vault.key(),
        amount,
        now,
    };

    let accounts = &mut ctx.accounts;
    let outcome = accounts.loan_vault.open_loan(
        args,
        &accounts.scope,
        &mut accounts.position,
        &mut accounts.loan_record,
        &mut accounts.loan_receipt,
    )?;
    accounts.loan_record.bump = ctx.bumps.loan_record;
    accounts.loan_receipt.bump = ctx.bumps.loan_receipt;

    // Disburse principal net of the origination fee
    let seeds = &[LOAN_VAULT_SEED, &[accounts.loan_vault.bump]];
    let signer_seeds = &[&seeds[..]];

    anchor_spl::token::transfer(
        CpiContext::new_with_signer(
            accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: accounts.vault_token_account.to_account_info(),
                to: accounts.borrower_token_account.to_account_info(),
                authority: accounts.loan_vault.to_account_info(),
            },
            signer_seeds,
        ),
        outcome.disbursed,
    )?;

    emit!(LoanCreated {
        loan_id: outcome.loan_id,
        borrower: accounts.borrower.key(),
        collateral: accounts.position.key(),
        principal: amount,
        origination_fee: outcome.origination_fee,
        disbursed: outcome.disbursed,
        collateral_value: outcome.collateral_value,
        timestamp: now,
    });

    Ok(())
}
