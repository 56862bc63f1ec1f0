use anchor_lang::prelude::*;

use crate::constants::VESTING_CONFIG_SEED;
use crate::state::VestingConfig;

pub fn handler(ctx: Context<SetOperator>, new_operator: Pubkey) -> Result<()> {
    let st = &mut ctx.accounts.vesting_config;
    let old = st.set_operator(&ctx.accounts.owner.key(), new_operator)?;

    emit!(OperatorSet {
        operator: new_operator,
    });
    msg!("[vesting] operator {} -> {}", old, new_operator);
    Ok(())
}

#[derive(Accounts)]
pub struct SetOperator<'info> {
    #[account(mut, seeds = [VESTING_CONFIG_SEED, vesting_config.mint.as_ref()], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OperatorSet {
    pub operator: Pubkey,
}
