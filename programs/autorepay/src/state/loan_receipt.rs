use anchor_lang::prelude::*;
use crate::error::ErrorCode;

/// Redemption capability for one loan's collateral. Whoever is recorded as
/// `holder` may reclaim the position once the loan is repaid.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct LoanReceipt {
    pub loan_id: u64,
    pub bump: u8,
    pub holder: Pubkey,
    pub borrower: Pubkey,
    pub collateral: Pubkey,
    pub principal: u64,
}

impl LoanReceipt {
    pub const LEN: usize = 8  // discriminator
        + 8   // loan_id
        + 1   // bump
        + 32  // holder
        + 32  // borrower
        + 32  // collateral
        + 8;  // principal

    pub fn assert_holder(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.holder, *signer, ErrorCode::NotAuthorizedHolder);
        Ok(())
    }

    pub fn transfer(&mut self, signer: &Pubkey, new_holder: Pubkey) -> Result<()> {
        self.assert_holder(signer)?;
        require_keys_neq!(new_holder, Pubkey::default(), ErrorCode::InvalidParameter);
        self.holder = new_holder;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_holder_can_transfer() {
        let holder = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut receipt = LoanReceipt {
            holder,
            ..LoanReceipt::default()
        };

        assert!(receipt.transfer(&stranger, stranger).is_err());
        assert_eq!(receipt.holder, holder);

        receipt.transfer(&holder, stranger).unwrap();
        assert_eq!(receipt.holder, stranger);
        assert!(receipt.assert_holder(&holder).is_err());
    }
}
