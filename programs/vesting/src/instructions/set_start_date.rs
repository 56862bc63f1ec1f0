use anchor_lang::prelude::*;

use crate::constants::VESTING_CONFIG_SEED;
use crate::state::VestingConfig;

// Existing records are not re-checked against the new date.
pub fn handler(ctx: Context<SetStartDate>, start_date: i64) -> Result<()> {
    let st = &mut ctx.accounts.vesting_config;
    st.require_owner(&ctx.accounts.owner.key())?;

    st.start_date = start_date;

    emit!(StartDateSet { start_date });
    msg!("[vesting] start_date={}", start_date);
    Ok(())
}

#[derive(Accounts)]
pub struct SetStartDate<'info> {
    #[account(mut, seeds = [VESTING_CONFIG_SEED, vesting_config.mint.as_ref()], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct StartDateSet {
    pub start_date: i64,
}
