use anchor_lang::prelude::*;

// PDA Seeds
#[constant]
pub const LOAN_VAULT_SEED: &[u8] = b"loan_vault";
#[constant]
pub const VAULT_TOKEN_SEED: &[u8] = b"vault_token";
#[constant]
pub const SCOPE_SEED: &[u8] = b"scope";
#[constant]
pub const RESERVE_POOL_SEED: &[u8] = b"reserve_pool";
#[constant]
pub const RESERVE_TOKEN_SEED: &[u8] = b"reserve_token";
#[constant]
pub const POSITION_SEED: &[u8] = b"position";
#[constant]
pub const LOAN_RECORD_SEED: &[u8] = b"loan";
#[constant]
pub const LOAN_RECEIPT_SEED: &[u8] = b"receipt";

// Reward index precision (1e18)
pub const REWARD_PRECISION: u128 = 1_000_000_000_000_000_000;

// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

// Simple interest is quoted per 365-day year
pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 3600;

// Config limits (in basis points)
pub const MAX_INTEREST_RATE_BPS: u64 = 10_000; // 100% APR
pub const MAX_ORIGINATION_FEE_BPS: u64 = 500; // 5%
pub const MAX_LIQUIDATION_FEE_BPS: u64 = 1_000; // 10%
pub const MAX_KEEPER_TIP_BPS: u64 = 500; // 5%

// Config defaults
pub const DEFAULT_MAX_LTV_BPS: u64 = 4_000; // 40%
pub const DEFAULT_LIQUIDATION_THRESHOLD_BPS: u64 = 7_500; // 75%
pub const DEFAULT_INTEREST_RATE_BPS: u64 = 500; // 5% APR
pub const DEFAULT_ORIGINATION_FEE_BPS: u64 = 100; // 1%
pub const DEFAULT_LIQUIDATION_FEE_BPS: u64 = 500; // 5%
pub const DEFAULT_KEEPER_TIP_BPS: u64 = 50; // 0.5%
pub const DEFAULT_INSURANCE_FUND_BPS: u64 = 1_000; // 10%
pub const DEFAULT_MIN_LOAN_AMOUNT: u64 = 1_000_000_000; // 1 token at 9 decimals
