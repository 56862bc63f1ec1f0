use anchor_lang::prelude::*;

use crate::constants::ESCROW_SEED;
use crate::error::EscrowError;
use crate::state::EscrowState;

pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let st = &mut ctx.accounts.escrow_state;
    let previous_owner = hand_over(st, &ctx.accounts.owner.key(), new_owner)?;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    msg!("[escrow] owner {} -> {}", previous_owner, new_owner);
    Ok(())
}

/// Replaces the owner and returns the previous one.
pub fn hand_over(
    st: &mut EscrowState,
    caller: &Pubkey,
    new_owner: Pubkey,
) -> std::result::Result<Pubkey, EscrowError> {
    st.require_owner(caller)?;
    if new_owner == Pubkey::default() {
        return Err(EscrowError::InvalidConfiguration);
    }
    let previous_owner = st.owner;
    st.owner = new_owner;
    Ok(previous_owner)
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [ESCROW_SEED, escrow_state.mint.as_ref()], bump = escrow_state.bump)]
    pub escrow_state: Account<'info, EscrowState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
