use anchor_lang::prelude::*;
use custody_math::{checked_add, checked_sub};

use crate::error::EscrowError;
use crate::state::EscrowState;

/// Per-depositor balance PDA (seeds = [b"stake", escrow, depositor]).
#[account]
#[derive(Default)]
pub struct StakeAccount {
    pub escrow: Pubkey,
    pub depositor: Pubkey,
    pub balance: u64,
    pub bump: u8,
}

impl StakeAccount {
    pub const SIZE: usize = 32 + 32 + 8 + 1;

    /// Fills in identity on first use; `init_if_needed` hands us a zeroed account.
    pub fn bind(&mut self, escrow: Pubkey, depositor: Pubkey, bump: u8) {
        if self.depositor == Pubkey::default() {
            self.escrow = escrow;
            self.depositor = depositor;
            self.bump = bump;
        }
    }
}

pub fn balance_of(stake: &StakeAccount) -> u64 {
    stake.balance
}

/// Adds `amount` to the depositor and to `total_staked`.
pub fn credit(
    escrow: &mut EscrowState,
    stake: &mut StakeAccount,
    amount: u64,
) -> std::result::Result<(), EscrowError> {
    let balance = checked_add(stake.balance, amount).ok_or(EscrowError::MathOverflow)?;
    let total = checked_add(escrow.total_staked, amount).ok_or(EscrowError::MathOverflow)?;
    stake.balance = balance;
    escrow.total_staked = total;
    Ok(())
}

/// Removes `amount` from the depositor and from `total_staked`.
pub fn debit(
    escrow: &mut EscrowState,
    stake: &mut StakeAccount,
    amount: u64,
) -> std::result::Result<(), EscrowError> {
    if amount > stake.balance {
        return Err(EscrowError::ExceedsBalance);
    }
    let balance = checked_sub(stake.balance, amount).ok_or(EscrowError::MathOverflow)?;
    let total = checked_sub(escrow.total_staked, amount).ok_or(EscrowError::MathOverflow)?;
    stake.balance = balance;
    escrow.total_staked = total;
    Ok(())
}
