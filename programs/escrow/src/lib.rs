#![allow(unexpected_cfgs)]

//! # Tax-fee escrow
//!
//! Pooled custody of one SPL mint. Depositors approve the escrow state as
//! delegate and deposit; withdrawals pay a proportional tax to a configured
//! collector unless the owner has waived fees.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("EscrowTaxFeeProgram111111111111111111111111");

#[program]
pub mod escrow {
    use super::*;

    /// Create the escrow for a mint with the default fee policy. The signer becomes owner.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handler(ctx)
    }

    /// Pull `amount` from the signer's token account through its delegate approval.
    pub fn deposit(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        deposit::handler(ctx, amount)
    }

    /// Return `amount` of the signer's balance, minus tax.
    pub fn withdraw(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        withdraw::handler(ctx, amount)
    }

    pub fn set_tax_fee(
        ctx: Context<SetTaxFeeAccounts>,
        tax_fee: u64,
        tax_fee_decimals: u8,
    ) -> Result<()> {
        set_tax_fee::handler(ctx, tax_fee, tax_fee_decimals)
    }

    pub fn update_tax_address(
        ctx: Context<UpdateTaxAddressAccounts>,
        tax_address: Pubkey,
    ) -> Result<()> {
        update_tax_address::handler(ctx, tax_address)
    }

    pub fn toggle_transaction_fees(ctx: Context<ToggleTransactionFees>) -> Result<()> {
        toggle_transaction_fees::handler(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        transfer_ownership::handler(ctx, new_owner)
    }

    pub fn emit_balance(ctx: Context<EmitBalance>, depositor: Pubkey) -> Result<()> {
        emit_balance::handler(ctx, depositor)
    }
}
