#![allow(unexpected_cfgs)]

//! # Investor vesting
//!
//! Per-beneficiary token vesting held in a program-owned vault:
//!  - an optional initial tranche released at the record's claim start
//!  - linear release of the remainder over the record's duration
//!  - an engine-wide start date gating every claim
//!  - owner / operator roles, checked arithmetic, events for indexers

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;
use state::VestingInput;

declare_id!("VestRe1easeProgram1111111111111111111111111");

#[program]
pub mod vesting {
    use super::*;

    /// Create the engine for a mint. The signer becomes owner and operator.
    pub fn initialize(ctx: Context<Initialize>, start_date: i64, max_batch: u8) -> Result<()> {
        initialize::handler(ctx, start_date, max_batch)
    }

    pub fn set_operator(ctx: Context<SetOperator>, new_operator: Pubkey) -> Result<()> {
        set_operator::handler(ctx, new_operator)
    }

    pub fn set_start_date(ctx: Context<SetStartDate>, start_date: i64) -> Result<()> {
        set_start_date::handler(ctx, start_date)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        transfer_ownership::handler(ctx, new_owner)
    }

    /// Register a batch of schedules (operator only, all-or-nothing).
    /// `remaining_accounts`: one writable record PDA per input, in order.
    pub fn set_vesting<'info>(
        ctx: Context<'_, '_, 'info, 'info, SetVesting<'info>>,
        inputs: Vec<VestingInput>,
    ) -> Result<()> {
        set_vesting::handler(ctx, inputs)
    }

    /// Pay the signer everything unlocked so far.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        claim::handler(ctx)
    }

    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        fund_vault::handler(ctx, amount)
    }

    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, beneficiary: Pubkey) -> Result<()> {
        emit_vesting_quote::handler(ctx, beneficiary)
    }
}
