use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MAX_VESTING_BATCH, VAULT_SEED, VESTING_CONFIG_SEED};
use crate::error::VestingError;
use crate::state::VestingConfig;

/// Construction-time checks: a real mint, a start date strictly in the
/// future and a usable batch limit.
pub fn validate_params(
    mint: &Pubkey,
    start_date: i64,
    max_batch: u8,
    now: i64,
) -> std::result::Result<(), VestingError> {
    if *mint == Pubkey::default()
        || start_date <= now
        || max_batch == 0
        || max_batch > MAX_VESTING_BATCH
    {
        return Err(VestingError::InvalidConfiguration);
    }
    Ok(())
}

pub fn handler(ctx: Context<Initialize>, start_date: i64, max_batch: u8) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    validate_params(&ctx.accounts.mint.key(), start_date, max_batch, now)?;

    let st = &mut ctx.accounts.vesting_config;
    st.owner = ctx.accounts.owner.key();
    st.operator = ctx.accounts.owner.key();
    st.mint = ctx.accounts.mint.key();
    st.vault = ctx.accounts.vault.key();
    st.start_date = start_date;
    st.max_batch = max_batch;
    st.beneficiary_count = 0;
    st.total_vesting_amount = 0;
    st.total_claimed = 0;
    st.bump = ctx.bumps.vesting_config;
    st.vault_bump = ctx.bumps.vault;

    emit!(VestingInitialized {
        owner: st.owner,
        mint: st.mint,
        vault: st.vault,
        start_date,
        max_batch,
    });

    msg!("[vesting] initialized mint={} start_date={}", st.mint, start_date);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + VestingConfig::SIZE,
        seeds = [VESTING_CONFIG_SEED, mint.key().as_ref()],
        bump
    )]
    pub vesting_config: Account<'info, VestingConfig>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = vesting_config,
        seeds = [VAULT_SEED, vesting_config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub start_date: i64,
    pub max_batch: u8,
}
