use anchor_lang::prelude::*;
use crate::constants::*;
use crate::events::PositionTransferred;
use crate::state::SupporterPosition;

#[derive(Accounts)]
pub struct TransferPosition<'info> {
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [POSITION_SEED, position.scope.as_ref(), &position.position_index.to_le_bytes()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, SupporterPosition>>,
}

pub fn handler(ctx: Context<TransferPosition>, new_holder: Pubkey) -> Result<()> {
    let holder = ctx.accounts.holder.key();
    let position = &mut ctx.accounts.position;
    position.transfer(&holder, new_holder)?;

    emit!(PositionTransferred {
        position: position.key(),
        from: holder,
        to: new_holder,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
