use anchor_lang::prelude::*;

use crate::constants::VESTING_CONFIG_SEED;
use crate::state::VestingConfig;

pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let st = &mut ctx.accounts.vesting_config;
    let previous_owner = st.transfer_ownership(&ctx.accounts.owner.key(), new_owner)?;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    msg!("[vesting] owner {} -> {}", previous_owner, new_owner);
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [VESTING_CONFIG_SEED, vesting_config.mint.as_ref()], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
