use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ESCROW_SEED, ESCROW_VAULT_SEED};
use crate::error::EscrowError;
use crate::state::{EscrowState, FeePolicy};

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    require!(
        ctx.accounts.mint.key() != Pubkey::default(),
        EscrowError::InvalidConfiguration
    );

    let st = &mut ctx.accounts.escrow_state;
    st.owner = ctx.accounts.owner.key();
    st.mint = ctx.accounts.mint.key();
    st.vault = ctx.accounts.vault.key();
    st.total_staked = 0;
    st.fee_policy = FeePolicy::default();
    st.bump = ctx.bumps.escrow_state;
    st.vault_bump = ctx.bumps.vault;

    emit!(EscrowInitialized {
        owner: st.owner,
        mint: st.mint,
        vault: st.vault,
        tax_fee: st.fee_policy.tax_fee,
        tax_fee_decimals: st.fee_policy.tax_fee_decimals,
        tax_address: st.fee_policy.tax_address,
    });

    msg!(
        "[escrow] initialized mint={} tax_fee={} tax_fee_decimals={}",
        st.mint,
        st.fee_policy.tax_fee,
        st.fee_policy.tax_fee_decimals
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + EscrowState::SIZE,
        seeds = [ESCROW_SEED, mint.key().as_ref()],
        bump
    )]
    pub escrow_state: Account<'info, EscrowState>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = escrow_state,
        seeds = [ESCROW_VAULT_SEED, escrow_state.key().as_ref()],
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
pub struct EscrowInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub tax_fee: u64,
    pub tax_fee_decimals: u8,
    pub tax_address: Pubkey,
}
