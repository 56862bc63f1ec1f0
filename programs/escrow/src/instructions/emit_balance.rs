use anchor_lang::prelude::*;

use crate::constants::{ESCROW_SEED, STAKE_SEED};
use crate::state::{balance_of, EscrowState, StakeAccount};

/// Read-only balance lookup for any depositor. A depositor without a stake
/// account reports zero.
pub fn handler(ctx: Context<EmitBalance>, depositor: Pubkey) -> Result<()> {
    let st = &ctx.accounts.escrow_state;
    let balance = ctx.accounts.stake_account.as_ref().map_or(0, |s| balance_of(s));

    msg!("[escrow] balance depositor={} balance={}", depositor, balance);
    emit!(BalanceQuote {
        depositor,
        balance,
        total_staked: st.total_staked,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(depositor: Pubkey)]
pub struct EmitBalance<'info> {
    #[account(seeds = [ESCROW_SEED, escrow_state.mint.as_ref()], bump = escrow_state.bump)]
    pub escrow_state: Account<'info, EscrowState>,

    #[account(
        seeds = [STAKE_SEED, escrow_state.key().as_ref(), depositor.as_ref()],
        bump
    )]
    pub stake_account: Option<Account<'info, StakeAccount>>,
}

#[event]
pub struct BalanceQuote {
    pub depositor: Pubkey,
    pub balance: u64,
    pub total_staked: u64,
}
