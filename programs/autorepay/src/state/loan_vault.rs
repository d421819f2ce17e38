use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::math::fixed_point::{checked_add, checked_sub};
use crate::state::SupporterScope;

/// Risk and fee parameters. All rates in basis points.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoanConfig {
    pub max_ltv_bps: u64,
    pub liquidation_threshold_bps: u64,
    pub interest_rate_bps: u64,
    pub origination_fee_bps: u64,
    pub liquidation_fee_bps: u64,
    pub keeper_tip_bps: u64,
    pub insurance_fund_bps: u64,
    pub min_loan_amount: u64,
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            max_ltv_bps: DEFAULT_MAX_LTV_BPS,
            liquidation_threshold_bps: DEFAULT_LIQUIDATION_THRESHOLD_BPS,
            interest_rate_bps: DEFAULT_INTEREST_RATE_BPS,
            origination_fee_bps: DEFAULT_ORIGINATION_FEE_BPS,
            liquidation_fee_bps: DEFAULT_LIQUIDATION_FEE_BPS,
            keeper_tip_bps: DEFAULT_KEEPER_TIP_BPS,
            insurance_fund_bps: DEFAULT_INSURANCE_FUND_BPS,
            min_loan_amount: DEFAULT_MIN_LOAN_AMOUNT,
        }
    }
}

impl LoanConfig {
    pub const LEN: usize = 8 * 8;

    pub fn validate(&self) -> Result<()> {
        require!(self.max_ltv_bps > 0, ErrorCode::InvalidConfig);
        require!(
            self.max_ltv_bps <= self.liquidation_threshold_bps,
            ErrorCode::InvalidConfig
        );
        require!(
            self.liquidation_threshold_bps <= BPS_DENOMINATOR,
            ErrorCode::InvalidConfig
        );
        require!(
            self.interest_rate_bps <= MAX_INTEREST_RATE_BPS,
            ErrorCode::InvalidConfig
        );
        require!(
            self.origination_fee_bps <= MAX_ORIGINATION_FEE_BPS,
            ErrorCode::InvalidConfig
        );
        require!(
            self.liquidation_fee_bps <= MAX_LIQUIDATION_FEE_BPS,
            ErrorCode::InvalidConfig
        );
        require!(
            self.keeper_tip_bps <= MAX_KEEPER_TIP_BPS,
            ErrorCode::InvalidConfig
        );
        require!(
            self.insurance_fund_bps <= BPS_DENOMINATOR,
            ErrorCode::InvalidConfig
        );
        require!(self.min_loan_amount > 0, ErrorCode::InvalidConfig);
        Ok(())
    }
}

#[account]
#[derive(Default, Debug, PartialEq)]
pub struct LoanVault {
    pub admin: Pubkey,
    pub bump: u8,

    // Settlement asset
    pub settlement_mint: Pubkey,
    pub token_account: Pubkey,
    pub token_account_bump: u8,

    // Ledgers, both held in `token_account`
    pub liquidity: u64,
    pub insurance_reserve: u64,

    // Stats
    pub total_borrowed: u64,
    pub total_repaid: u64,
    pub total_fees_earned: u64,
    pub active_loan_count: u64,
    pub total_loans_created: u64,

    pub config: LoanConfig,
    pub paused: bool,

    // Reserved
    pub _reserved: [u8; 32],
}

impl LoanVault {
    pub const LEN: usize = 8  // discriminator
        + 32  // admin
        + 1   // bump
        + 32  // settlement_mint
        + 32  // token_account
        + 1   // token_account_bump
        + 8   // liquidity
        + 8   // insurance_reserve
        + 8 * 5 // stats
        + LoanConfig::LEN
        + 1   // paused
        + 32; // reserved

    pub fn deposit_liquidity(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::ZeroAmount);
        self.liquidity = checked_add(self.liquidity, amount)?;
        Ok(())
    }

    pub fn withdraw_liquidity(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::ZeroAmount);
        require!(amount <= self.liquidity, ErrorCode::InsufficientReserve);
        self.liquidity = checked_sub(self.liquidity, amount)?;
        Ok(())
    }

    pub fn withdraw_insurance(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::ZeroAmount);
        require!(amount <= self.insurance_reserve, ErrorCode::InsufficientReserve);
        self.insurance_reserve = checked_sub(self.insurance_reserve, amount)?;
        Ok(())
    }

    pub fn update_config(&mut self, config: LoanConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn assert_admin(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.admin, *signer, ErrorCode::Unauthorized);
        Ok(())
    }

    /// Only scopes opened by the vault admin may value collateral.
    pub fn assert_recognized_scope(&self, scope: &SupporterScope) -> Result<()> {
        self.assert_admin(&scope.authority)
    }

    /// Tokens the vault token account must hold to back both ledgers.
    pub fn total_backing(&self) -> Result<u64> {
        checked_add(self.liquidity, self.insurance_reserve)
    }
}
