use anchor_lang::prelude::*;
use crate::state::LoanConfig;

// Admin events
#[event]
pub struct LoanVaultInitialized {
    pub loan_vault: Pubkey,
    pub admin: Pubkey,
    pub settlement_mint: Pubkey,
    pub config: LoanConfig,
    pub timestamp: i64,
}

#[event]
pub struct LoanConfigUpdated {
    pub loan_vault: Pubkey,
    pub old_config: LoanConfig,
    pub new_config: LoanConfig,
    pub timestamp: i64,
}

#[event]
pub struct PauseToggled {
    pub loan_vault: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}

#[event]
pub struct LiquidityDeposited {
    pub loan_vault: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub liquidity: u64,
    pub timestamp: i64,
}

#[event]
pub struct LiquidityWithdrawn {
    pub loan_vault: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub liquidity: u64,
    pub timestamp: i64,
}

#[event]
pub struct InsuranceWithdrawn {
    pub loan_vault: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub insurance_reserve: u64,
    pub timestamp: i64,
}

// Scope / reward pool events
#[event]
pub struct ScopeCreated {
    pub scope: Pubkey,
    pub scope_id: u64,
    pub authority: Pubkey,
    pub reserve_pool: Pubkey,
    pub yield_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PositionIssued {
    pub scope: Pubkey,
    pub position: Pubkey,
    pub holder: Pubkey,
    pub shares: u128,
    pub principal: u64,
    pub claim_cursor: u128,
    pub timestamp: i64,
}

#[event]
pub struct ScopeRevalued {
    pub scope: Pubkey,
    pub old_total_principal: u64,
    pub new_total_principal: u64,
    pub timestamp: i64,
}

#[event]
pub struct PositionTransferred {
    pub position: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct YieldDeposited {
    pub reserve_pool: Pubkey,
    pub amount: u64,
    pub index_increment: u128,
    pub global_index: u128,
    pub timestamp: i64,
}

#[event]
pub struct YieldClaimed {
    pub reserve_pool: Pubkey,
    pub position: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

// Loan events
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepaymentSource {
    Manual,
    Harvest,
}

#[event]
pub struct LoanCreated {
    pub loan_id: u64,
    pub borrower: Pubkey,
    pub collateral: Pubkey,
    pub principal: u64,
    pub origination_fee: u64,
    pub disbursed: u64,
    pub collateral_value: u64,
    pub timestamp: i64,
}

#[event]
pub struct LoanRepayment {
    pub loan_id: u64,
    pub payer: Pubkey,
    pub source: RepaymentSource,
    pub amount: u64,
    pub refund: u64,
    pub interest_accrued: u64,
    pub outstanding: u64,
    pub timestamp: i64,
}

#[event]
pub struct LoanFullyRepaid {
    pub loan_id: u64,
    pub borrower: Pubkey,
    pub total_repaid: u64,
    pub timestamp: i64,
}

#[event]
pub struct HarvestExecuted {
    pub loan_id: u64,
    pub keeper: Pubkey,
    pub reward: u64,
    pub keeper_tip: u64,
    pub applied: u64,
    pub excess: u64,
    pub insurance_share: u64,
    pub timestamp: i64,
}

#[event]
pub struct LoanLiquidated {
    pub loan_id: u64,
    pub liquidator: Pubkey,
    pub borrower: Pubkey,
    pub outstanding: u64,
    pub collateral_value: u64,
    pub liquidation_fee: u64,
    pub refund: u64,
    pub timestamp: i64,
}

#[event]
pub struct CollateralWithdrawn {
    pub loan_id: u64,
    pub holder: Pubkey,
    pub collateral: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ReceiptTransferred {
    pub loan_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
    pub timestamp: i64,
}
