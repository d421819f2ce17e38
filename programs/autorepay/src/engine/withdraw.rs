use anchor_lang::prelude::*;
use crate::error::ErrorCode;
use crate::state::{LoanReceipt, LoanRecord, LoanStatus, SupporterPosition};

/// Redeem `receipt` for the custodied position of a repaid loan.
///
/// Liquidated loans have no redemption path: their collateral already went
/// to the liquidator, so the record stays behind as a Liquidated tombstone
/// and this fails with LoanNotRepaid.
pub fn release_collateral(
    loan: &LoanRecord,
    receipt: &LoanReceipt,
    position: &mut SupporterPosition,
    caller: Pubkey,
) -> Result<()> {
    receipt.assert_holder(&caller)?;
    require!(receipt.loan_id == loan.loan_id, ErrorCode::InvalidParameter);
    require_keys_eq!(receipt.collateral, loan.collateral, ErrorCode::InvalidParameter);
    require!(loan.status == LoanStatus::Repaid, ErrorCode::LoanNotRepaid);

    position.holder = caller;
    Ok(())
}
