use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::math::fixed_point::checked_add;
use crate::math::valuation::collateral_value;

/// Valuation source for one capital raise. The loan engine only reads
/// `total_principal` and `total_shares`.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct SupporterScope {
    pub authority: Pubkey,
    pub scope_id: u64,
    pub bump: u8,

    pub total_principal: u64,
    pub total_shares: u128,
    pub positions_issued: u64,

    pub created_at: i64,

    // Reserved
    pub _reserved: [u8; 32],
}

impl SupporterScope {
    pub const LEN: usize = 8  // discriminator
        + 32  // authority
        + 8   // scope_id
        + 1   // bump
        + 8   // total_principal
        + 16  // total_shares
        + 8   // positions_issued
        + 8   // created_at
        + 32; // reserved

    /// Conservative value of `shares` against the live scope totals.
    pub fn value_of(&self, shares: u128) -> Result<u64> {
        collateral_value(self.total_principal, shares, self.total_shares)
    }

    pub fn record_issuance(&mut self, shares: u128, principal: u64) -> Result<()> {
        require!(shares > 0, ErrorCode::ZeroAmount);
        self.total_shares = self
            .total_shares
            .checked_add(shares)
            .ok_or(ErrorCode::MathOverflow)?;
        self.total_principal = checked_add(self.total_principal, principal)?;
        self.positions_issued = self
            .positions_issued
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}
