use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{VAULT_SEED, VESTING_CONFIG_SEED};
use crate::error::VestingError;
use crate::state::VestingConfig;

pub fn handler(ctx: Context<FundVault>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::ZeroAmount);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(VaultFunded {
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    msg!(
        "[vesting] vault funded amount={} vault_balance={} outstanding={}",
        amount,
        ctx.accounts.vault.amount,
        ctx.accounts.vesting_config.outstanding()
    );
    Ok(())
}

#[derive(Accounts)]
pub struct FundVault<'info> {
    #[account(seeds = [VESTING_CONFIG_SEED, vesting_config.mint.as_ref()], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vesting_config.key().as_ref()],
        bump = vesting_config.vault_bump,
        constraint = vault.mint == vesting_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = funder_token_account.mint == vesting_config.mint @ VestingError::InvalidTokenMint,
        constraint = funder_token_account.owner == funder.key() @ VestingError::InvalidTokenAccount,
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VaultFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
