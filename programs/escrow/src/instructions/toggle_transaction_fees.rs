use anchor_lang::prelude::*;

use crate::constants::ESCROW_SEED;
use crate::state::EscrowState;

pub fn handler(ctx: Context<ToggleTransactionFees>) -> Result<()> {
    let st = &mut ctx.accounts.escrow_state;
    st.require_owner(&ctx.accounts.owner.key())?;

    let waive_fees = st.fee_policy.toggle_waive_fees();

    emit!(ToggleWaiveFees { waive_fees });
    msg!("[escrow] waive_fees={}", waive_fees);
    Ok(())
}

#[derive(Accounts)]
pub struct ToggleTransactionFees<'info> {
    #[account(mut, seeds = [ESCROW_SEED, escrow_state.mint.as_ref()], bump = escrow_state.bump)]
    pub escrow_state: Account<'info, EscrowState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct ToggleWaiveFees {
    pub waive_fees: bool,
}
