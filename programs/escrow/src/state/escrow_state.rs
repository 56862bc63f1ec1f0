use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::state::FeePolicy;

/// Escrow engine state PDA, one per mint.
#[account]
pub struct EscrowState {
    /// Owner authority: fee policy and ownership changes.
    pub owner: Pubkey,
    /// Token mint held in escrow.
    pub mint: Pubkey,
    /// Vault token account (PDA-owned) holding every deposit.
    pub vault: Pubkey,
    /// Sum of all depositor balances.
    pub total_staked: u64,
    pub fee_policy: FeePolicy,
    pub bump: u8,
    pub vault_bump: u8,
}

impl EscrowState {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // vault
        8 +  // total_staked
        FeePolicy::SIZE +
        1 +  // bump
        1;   // vault_bump

    pub fn require_owner(&self, caller: &Pubkey) -> std::result::Result<(), EscrowError> {
        if *caller != self.owner {
            return Err(EscrowError::Unauthorized);
        }
        Ok(())
    }
}
