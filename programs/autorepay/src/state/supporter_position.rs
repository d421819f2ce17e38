use anchor_lang::prelude::*;
use crate::error::ErrorCode;

/// A supporter's proportional claim on a scope's yield and principal.
/// `shares` is fixed at issuance; `claim_cursor` only moves forward through
/// ReservePool::claim.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct SupporterPosition {
    pub scope: Pubkey,
    pub position_index: u64,
    pub bump: u8,

    // Current owner; the LoanVault PDA while pledged
    pub holder: Pubkey,

    pub shares: u128,
    pub claim_cursor: u128,

    pub issued_at: i64,
}

impl SupporterPosition {
    pub const LEN: usize = 8  // discriminator
        + 32  // scope
        + 8   // position_index
        + 1   // bump
        + 32  // holder
        + 16  // shares
        + 16  // claim_cursor
        + 8;  // issued_at

    pub fn assert_holder(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.holder, *signer, ErrorCode::NotAuthorizedHolder);
        Ok(())
    }

    /// Move the position to `new_holder`. Custodied positions can only be
    /// moved by the vault itself, which never signs this path.
    pub fn transfer(&mut self, signer: &Pubkey, new_holder: Pubkey) -> Result<()> {
        self.assert_holder(signer)?;
        require_keys_neq!(new_holder, Pubkey::default(), ErrorCode::InvalidParameter);
        self.holder = new_holder;
        Ok(())
    }
}
