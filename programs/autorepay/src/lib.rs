#![allow(ambiguous_glob_reexports)]

pub mod constants;
pub mod error;
pub mod events;
pub mod state;
pub mod math;
pub mod engine;
pub mod instructions;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("AutoRpay11111111111111111111111111111111111");

#[program]
pub mod autorepay {
    use super::*;

    // ── Admin ───────────────────────────────────────────────

    pub fn initialize_loan_vault(
        ctx: Context<InitializeLoanVault>,
        config: LoanConfig,
    ) -> Result<()> {
        instructions::admin::initialize_loan_vault::handler(ctx, config)
    }

    pub fn update_loan_config(ctx: Context<UpdateLoanConfig>, config: LoanConfig) -> Result<()> {
        instructions::admin::update_loan_config::handler(ctx, config)
    }

    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::admin::set_paused::handler(ctx, paused)
    }

    pub fn deposit_liquidity(ctx: Context<DepositLiquidity>, amount: u64) -> Result<()> {
        instructions::admin::deposit_liquidity::handler(ctx, amount)
    }

    pub fn withdraw_liquidity(ctx: Context<WithdrawLiquidity>, amount: u64) -> Result<()> {
        instructions::admin::withdraw_liquidity::handler(ctx, amount)
    }

    pub fn withdraw_insurance(ctx: Context<WithdrawInsurance>, amount: u64) -> Result<()> {
        instructions::admin::withdraw_insurance::handler(ctx, amount)
    }

    // ── Scope / reward pool ─────────────────────────────────

    pub fn create_scope(
        ctx: Context<CreateScope>,
        scope_id: u64,
        yield_authority: Pubkey,
    ) -> Result<()> {
        instructions::scope::create_scope::handler(ctx, scope_id, yield_authority)
    }

    pub fn issue_position(
        ctx: Context<IssuePosition>,
        shares: u128,
        principal: u64,
        holder: Pubkey,
    ) -> Result<()> {
        instructions::scope::issue_position::handler(ctx, shares, principal, holder)
    }

    pub fn update_scope_valuation(
        ctx: Context<UpdateScopeValuation>,
        total_principal: u64,
    ) -> Result<()> {
        instructions::scope::update_scope_valuation::handler(ctx, total_principal)
    }

    pub fn transfer_position(ctx: Context<TransferPosition>, new_holder: Pubkey) -> Result<()> {
        instructions::scope::transfer_position::handler(ctx, new_holder)
    }

    pub fn deposit_yield(ctx: Context<DepositYield>, amount: u64) -> Result<()> {
        instructions::scope::deposit_yield::handler(ctx, amount)
    }

    pub fn claim_yield(ctx: Context<ClaimYield>) -> Result<()> {
        instructions::scope::claim_yield::handler(ctx)
    }

    // ── Loans ───────────────────────────────────────────────

    pub fn borrow(ctx: Context<Borrow>, amount: u64) -> Result<()> {
        instructions::loan::borrow::handler(ctx, amount)
    }

    pub fn repay(ctx: Context<Repay>, max_payment: u64) -> Result<()> {
        instructions::loan::repay::handler(ctx, max_payment)
    }

    pub fn harvest_and_repay(ctx: Context<HarvestAndRepay>) -> Result<()> {
        instructions::loan::harvest_and_repay::handler(ctx)
    }

    pub fn liquidate(ctx: Context<Liquidate>, max_payment: u64) -> Result<()> {
        instructions::loan::liquidate::handler(ctx, max_payment)
    }

    pub fn withdraw_collateral(ctx: Context<WithdrawCollateral>) -> Result<()> {
        instructions::loan::withdraw_collateral::handler(ctx)
    }

    pub fn transfer_receipt(ctx: Context<TransferReceipt>, new_holder: Pubkey) -> Result<()> {
        instructions::loan::transfer_receipt::handler(ctx, new_holder)
    }
}
