#![allow(dead_code)]

use anchor_lang::prelude::*;
use autorepay::engine::{BorrowArgs, BorrowOutcome};
use autorepay::error::ErrorCode;
use autorepay::state::{
    LoanConfig, LoanReceipt, LoanRecord, LoanVault, ReservePool, SupporterPosition, SupporterScope,
};

/// One token at 9 decimals.
pub const UNIT: u64 = 1_000_000_000;
pub const DAY: i64 = 24 * 3600;
pub const YEAR: i64 = 365 * DAY;
pub const T0: i64 = 1_700_000_000;

pub const INITIAL_LIQUIDITY: u64 = 1_000 * UNIT;

#[derive(Debug)]
pub struct Pledge {
    pub key: Pubkey,
    pub position: SupporterPosition,
}

#[derive(Debug)]
pub struct OpenLoan {
    pub record: LoanRecord,
    pub receipt: LoanReceipt,
    pub outcome: BorrowOutcome,
}

/// A funded loan vault with a single scope and its reward pool, wired the
/// way the on-chain handlers wire them.
pub struct Harness {
    pub vault_key: Pubkey,
    pub vault: LoanVault,
    pub scope_key: Pubkey,
    pub scope: SupporterScope,
    pub reserve: ReservePool,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(LoanConfig::default())
    }

    pub fn with_config(config: LoanConfig) -> Self {
        config.validate().unwrap();
        let scope_key = Pubkey::new_unique();
        let admin = Pubkey::new_unique();
        let mut vault = LoanVault {
            admin,
            settlement_mint: Pubkey::new_unique(),
            config,
            ..LoanVault::default()
        };
        vault.deposit_liquidity(INITIAL_LIQUIDITY).unwrap();

        Self {
            vault_key: Pubkey::new_unique(),
            vault,
            scope_key,
            scope: SupporterScope {
                authority: admin,
                scope_id: 1,
                ..SupporterScope::default()
            },
            reserve: ReservePool {
                scope: scope_key,
                yield_authority: Pubkey::new_unique(),
                ..ReservePool::default()
            },
        }
    }

    pub fn issue(&mut self, holder: Pubkey, shares: u128, principal: u64) -> Pledge {
        let position_index = self.scope.positions_issued;
        self.scope.record_issuance(shares, principal).unwrap();
        self.reserve.register_shares(shares).unwrap();
        Pledge {
            key: Pubkey::new_unique(),
            position: SupporterPosition {
                scope: self.scope_key,
                position_index,
                holder,
                shares,
                claim_cursor: self.reserve.global_index,
                issued_at: T0,
                ..SupporterPosition::default()
            },
        }
    }

    pub fn borrow(
        &mut self,
        borrower: Pubkey,
        pledge: &mut Pledge,
        amount: u64,
        now: i64,
    ) -> Result<OpenLoan> {
        let mut record = LoanRecord::default();
        let mut receipt = LoanReceipt::default();
        let args = BorrowArgs {
            borrower,
            position_key: pledge.key,
            custodian: self.vault_key,
            amount,
            now,
        };
        let outcome = self.vault.open_loan(
            args,
            &self.scope,
            &mut pledge.position,
            &mut record,
            &mut receipt,
        )?;
        Ok(OpenLoan {
            record,
            receipt,
            outcome,
        })
    }
}

pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(e)) => {
            assert_eq!(
                e.error_code_number,
                u32::from(expected),
                "expected {:?}, got {}",
                expected,
                e.error_name
            );
        }
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
