use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::fixed_point::{checked_add, checked_sub};
use crate::math::rewards::{claimable, index_increment};
use crate::state::SupporterPosition;

/// Reward accounting vault for one scope.
///
/// Yield is distributed through a cumulative reward-per-share index
/// (REWARD_PRECISION scaled). A position's claim is
/// `shares * (global_index - claim_cursor) / REWARD_PRECISION`, truncated,
/// so rounding dust accrues to the pool and the sum of all claims never
/// exceeds `balance`.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct ReservePool {
    pub scope: Pubkey,
    pub bump: u8,

    // Holder of the deposit capability
    pub yield_authority: Pubkey,

    pub token_account: Pubkey,
    pub token_account_bump: u8,

    pub balance: u64,
    pub global_index: u128,
    pub total_shares: u128,
    pub total_distributed: u64,

    // Reserved
    pub _reserved: [u8; 32],
}

impl ReservePool {
    pub const LEN: usize = 8  // discriminator
        + 32  // scope
        + 1   // bump
        + 32  // yield_authority
        + 32  // token_account
        + 1   // token_account_bump
        + 8   // balance
        + 16  // global_index
        + 16  // total_shares
        + 8   // total_distributed
        + 32; // reserved

    /// Credit new yield. The index only moves while shares exist; yield
    /// deposited into a share-less pool stays in `balance`.
    pub fn deposit_yield(&mut self, amount: u64) -> Result<u128> {
        require!(amount > 0, ErrorCode::ZeroAmount);
        let increment = index_increment(amount, self.total_shares)?;
        let balance = checked_add(self.balance, amount)?;
        self.global_index = self
            .global_index
            .checked_add(increment)
            .ok_or(ErrorCode::MathOverflow)?;
        self.balance = balance;
        Ok(increment)
    }

    pub fn claimable(&self, shares: u128, cursor: u128) -> Result<u64> {
        claimable(shares, self.global_index, cursor)
    }

    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.balance, ErrorCode::InsufficientYieldBalance);
        self.balance = checked_sub(self.balance, amount)?;
        self.total_distributed = checked_add(self.total_distributed, amount)?;
        Ok(())
    }

    /// Pull everything claimable for `position` and advance its cursor to
    /// the current index. The cursor moves only if the withdrawal succeeds;
    /// a zero claim leaves it in place so sub-unit dust keeps accruing.
    pub fn claim(&mut self, position: &mut SupporterPosition) -> Result<u64> {
        require_keys_eq!(position.scope, self.scope, ErrorCode::ScopeMismatch);
        let amount = self.claimable(position.shares, position.claim_cursor)?;
        if amount == 0 {
            return Ok(0);
        }
        self.withdraw(amount)?;
        position.claim_cursor = self.global_index;
        Ok(amount)
    }

    pub fn register_shares(&mut self, shares: u128) -> Result<()> {
        self.total_shares = self
            .total_shares
            .checked_add(shares)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REWARD_PRECISION;

    fn pool_with_shares(total_shares: u128) -> ReservePool {
        ReservePool {
            scope: Pubkey::new_unique(),
            total_shares,
            ..ReservePool::default()
        }
    }

    fn position_in(pool: &ReservePool, shares: u128) -> SupporterPosition {
        SupporterPosition {
            scope: pool.scope,
            shares,
            claim_cursor: pool.global_index,
            ..SupporterPosition::default()
        }
    }

    #[test]
    fn test_yield_without_shares_accumulates() {
        let mut pool = pool_with_shares(0);
        assert_eq!(pool.deposit_yield(1_000).unwrap(), 0);
        assert_eq!(pool.global_index, 0);
        assert_eq!(pool.balance, 1_000);
    }

    #[test]
    fn test_claim_advances_cursor_and_balance() {
        let mut pool = pool_with_shares(100);
        let mut position = position_in(&pool, 40);
        pool.deposit_yield(1_000).unwrap();
        assert_eq!(pool.global_index, 10 * REWARD_PRECISION);

        assert_eq!(pool.claim(&mut position).unwrap(), 400);
        assert_eq!(position.claim_cursor, pool.global_index);
        assert_eq!(pool.balance, 600);
        assert_eq!(pool.total_distributed, 400);

        // Nothing left until the next deposit
        assert_eq!(pool.claim(&mut position).unwrap(), 0);
        assert_eq!(pool.balance, 600);
    }

    #[test]
    fn test_late_position_does_not_claim_past_yield() {
        let mut pool = pool_with_shares(100);
        pool.deposit_yield(1_000).unwrap();
        pool.register_shares(100).unwrap();
        let mut late = position_in(&pool, 100);
        assert_eq!(pool.claim(&mut late).unwrap(), 0);
    }

    #[test]
    fn test_failed_withdrawal_leaves_cursor() {
        let mut pool = pool_with_shares(10);
        let mut position = position_in(&pool, 10);
        pool.deposit_yield(500).unwrap();
        pool.balance = 100; // drained out of band
        let cursor_before = position.claim_cursor;
        assert!(pool.claim(&mut position).is_err());
        assert_eq!(position.claim_cursor, cursor_before);
        assert_eq!(pool.balance, 100);
    }

    #[test]
    fn test_foreign_position_rejected() {
        let mut pool = pool_with_shares(10);
        let mut stranger = SupporterPosition {
            scope: Pubkey::new_unique(),
            shares: 10,
            ..SupporterPosition::default()
        };
        pool.deposit_yield(500).unwrap();
        assert!(pool.claim(&mut stranger).is_err());
    }
}
