use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::ReceiptTransferred;
use crate::state::LoanReceipt;

#[derive(Accounts)]
pub struct TransferReceipt<'info> {
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [LOAN_RECEIPT_SEED, &loan_receipt.loan_id.to_le_bytes()],
        bump = loan_receipt.bump,
    )]
    pub loan_receipt: Box<Account<'info, LoanReceipt>>,
}

pub fn handler(ctx: Context<TransferReceipt>, new_holder: Pubkey) -> Result<()> {
    let holder = ctx.accounts.holder.key();
    let receipt = &mut ctx.accounts.loan_receipt;
    receipt.transfer(&holder, new_holder)?;

    emit!(ReceiptTransferred {
        loan_id: receipt.loan_id,
        from: holder,
        to: new_holder,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
