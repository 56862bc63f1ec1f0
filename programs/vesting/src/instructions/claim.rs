use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{VAULT_SEED, VESTING_CONFIG_SEED, VESTING_RECORD_SEED};
use crate::error::VestingError;
use crate::state::{ClaimWindow, VestingConfig, VestingRecord};

pub fn handler(ctx: Context<Claim>) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let vesting_config_ai = ctx.accounts.vesting_config.to_account_info();
    let record_ai = ctx.accounts.vesting_record.to_account_info();
    let beneficiary = ctx.accounts.beneficiary.key();
    let now = Clock::get()?.unix_timestamp;

    let mut record = VestingRecord::load(&record_ai, ctx.program_id)?;
    require_keys_eq!(record.beneficiary, beneficiary, VestingError::InvalidRecordAccount);

    let st = &mut ctx.accounts.vesting_config;
    let payable = claimable(st, &record, now)?;
    require!(
        ctx.accounts.vault.amount >= payable,
        VestingError::InsufficientVaultBalance
    );

    settle(st, &mut record, payable, now)?;
    record.store(&record_ai)?;

    let mint = st.mint;
    let signer_seeds: &[&[&[u8]]] = &[&[VESTING_CONFIG_SEED, mint.as_ref(), &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: vesting_config_ai,
            },
            signer_seeds,
        ),
        payable,
    )?;

    emit!(Claimed {
        beneficiary,
        amount: payable,
    });

    msg!(
        "[vesting] claim beneficiary={} amount={} claimed_total={} total_claimed={}",
        beneficiary,
        payable,
        record.claimed_amount,
        st.total_claimed
    );
    Ok(())
}

/// Amount the record's owner may claim at `now`. Errors instead of returning
/// zero: a claim that would pay nothing is rejected.
pub fn claimable(
    st: &VestingConfig,
    record: &VestingRecord,
    now: i64,
) -> std::result::Result<u64, VestingError> {
    ClaimWindow::at(now, st.start_date, record).require_open()?;
    let payable = record.payable_at(now)?;
    if payable == 0 {
        return Err(VestingError::NothingToClaim);
    }
    Ok(payable)
}

/// Books a payout against the record and the engine totals.
pub fn settle(
    st: &mut VestingConfig,
    record: &mut VestingRecord,
    amount: u64,
    now: i64,
) -> std::result::Result<(), VestingError> {
    let total_claimed = st
        .total_claimed
        .checked_add(amount)
        .ok_or(VestingError::MathOverflow)?;
    record.record_claim(amount, now)?;
    st.total_claimed = total_claimed;
    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [VESTING_CONFIG_SEED, vesting_config.mint.as_ref()], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    /// CHECK: address pinned by seeds; contents decoded by `VestingRecord::load`,
    /// which reports `NoSchedule` for an unregistered beneficiary.
    #[account(
        mut,
        seeds = [VESTING_RECORD_SEED, vesting_config.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub vesting_record: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vesting_config.key().as_ref()],
        bump = vesting_config.vault_bump,
        constraint = vault.mint == vesting_config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == vesting_config.mint @ VestingError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ VestingError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Claimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
}
