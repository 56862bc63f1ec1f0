use anchor_lang::prelude::*;

use crate::constants::{VESTING_CONFIG_SEED, VESTING_RECORD_SEED};
use crate::error::VestingError;
use crate::state::{ClaimWindow, VestingConfig, VestingRecord};

/// Read-only view of any beneficiary's schedule; mutates nothing.
pub fn handler(ctx: Context<EmitVestingQuote>, beneficiary: Pubkey) -> Result<()> {
    let st = &ctx.accounts.vesting_config;
    let now = Clock::get()?.unix_timestamp;

    let record = VestingRecord::load(&ctx.accounts.vesting_record.to_account_info(), ctx.program_id)?;
    require_keys_eq!(record.beneficiary, beneficiary, VestingError::InvalidRecordAccount);

    let vesting_quote = quote(st, &record, now)?;
    msg!(
        "[vesting] quote beneficiary={} claimable={}",
        beneficiary,
        vesting_quote.claimable
    );
    emit!(vesting_quote);
    Ok(())
}

pub fn quote(
    st: &VestingConfig,
    record: &VestingRecord,
    now: i64,
) -> std::result::Result<VestingQuote, VestingError> {
    let claimable = match ClaimWindow::at(now, st.start_date, record) {
        ClaimWindow::Open => record.payable_at(now)?,
        ClaimWindow::NotStarted | ClaimWindow::BeforeClaimStart => 0,
    };
    Ok(VestingQuote {
        beneficiary: record.beneficiary,
        vesting_amount: record.vesting_amount,
        initial_amount: record.initial_amount,
        initial_claimed: record.is_initial_claimed(),
        duration: record.duration,
        claim_start_time: record.claim_start_time,
        claimed_amount: record.claimed_amount,
        last_claimed_time: record.last_claimed_time,
        claimable,
    })
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [VESTING_CONFIG_SEED, vesting_config.mint.as_ref()], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    /// CHECK: address pinned by seeds; decoded by `VestingRecord::load`.
    #[account(
        seeds = [VESTING_RECORD_SEED, vesting_config.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub vesting_record: UncheckedAccount<'info>,
}

#[event]
pub struct VestingQuote {
    pub beneficiary: Pubkey,
    pub vesting_amount: u64,
    pub initial_amount: u64,
    pub initial_claimed: bool,
    pub duration: i64,
    pub claim_start_time: i64,
    pub claimed_amount: u64,
    pub last_claimed_time: i64,
    pub claimable: u64,
}
