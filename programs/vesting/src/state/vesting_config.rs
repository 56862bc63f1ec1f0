use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Vesting engine state PDA, one per mint.
#[account]
pub struct VestingConfig {
    /// Owner authority: start date, operator and ownership changes.
    pub owner: Pubkey,
    /// Operator authority: registers vesting schedules.
    pub operator: Pubkey,
    /// Token mint being vested.
    pub mint: Pubkey,
    /// Vault token account (PDA-owned) paying out claims.
    pub vault: Pubkey,
    /// Global gate: no claim succeeds before this timestamp (Unix seconds, UTC).
    pub start_date: i64,
    /// Max inputs accepted by a single `set_vesting` call.
    pub max_batch: u8,
    /// Number of registered vesting records.
    pub beneficiary_count: u32,
    /// Sum of `vesting_amount` over all records.
    pub total_vesting_amount: u64,
    /// Sum of `claimed_amount` over all records.
    pub total_claimed: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl VestingConfig {
    pub const SIZE: usize =
        32 + // owner
        32 + // operator
        32 + // mint
        32 + // vault
        8 +  // start_date
        1 +  // max_batch
        4 +  // beneficiary_count
        8 +  // total_vesting_amount
        8 +  // total_claimed
        1 +  // bump
        1;   // vault_bump

    pub fn require_owner(&self, caller: &Pubkey) -> std::result::Result<(), VestingError> {
        if *caller != self.owner {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    pub fn require_operator(&self, caller: &Pubkey) -> std::result::Result<(), VestingError> {
        if *caller != self.operator {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    /// Owner reassigns the operator; returns the previous one.
    pub fn set_operator(
        &mut self,
        caller: &Pubkey,
        new_operator: Pubkey,
    ) -> std::result::Result<Pubkey, VestingError> {
        self.require_owner(caller)?;
        if new_operator == Pubkey::default() {
            return Err(VestingError::InvalidConfiguration);
        }
        Ok(core::mem::replace(&mut self.operator, new_operator))
    }

    /// Owner hands over ownership; returns the previous owner.
    pub fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_owner: Pubkey,
    ) -> std::result::Result<Pubkey, VestingError> {
        self.require_owner(caller)?;
        if new_owner == Pubkey::default() {
            return Err(VestingError::InvalidConfiguration);
        }
        Ok(core::mem::replace(&mut self.owner, new_owner))
    }

    /// Tokens promised to beneficiaries but not yet paid out.
    pub fn outstanding(&self) -> u64 {
        self.total_vesting_amount.saturating_sub(self.total_claimed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(owner: Pubkey, operator: Pubkey) -> VestingConfig {
        VestingConfig {
            owner,
            operator,
            mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            start_date: 1_000,
            max_batch: 20,
            beneficiary_count: 0,
            total_vesting_amount: 30_000,
            total_claimed: 300,
            bump: 255,
            vault_bump: 254,
        }
    }

    #[test]
    fn roles_are_distinct() {
        let owner = Pubkey::new_unique();
        let operator = Pubkey::new_unique();
        let cfg = config(owner, operator);

        assert!(cfg.require_owner(&owner).is_ok());
        assert!(matches!(
            cfg.require_owner(&operator),
            Err(VestingError::Unauthorized)
        ));
        assert!(cfg.require_operator(&operator).is_ok());
        assert!(matches!(
            cfg.require_operator(&owner),
            Err(VestingError::Unauthorized)
        ));
    }

    #[test]
    fn role_is_checked_before_arguments() {
        let owner = Pubkey::new_unique();
        let operator = Pubkey::new_unique();
        let mut cfg = config(owner, operator);

        assert!(matches!(
            cfg.set_operator(&operator, Pubkey::default()),
            Err(VestingError::Unauthorized)
        ));
        assert!(matches!(
            cfg.transfer_ownership(&operator, Pubkey::default()),
            Err(VestingError::Unauthorized)
        ));
        assert!(matches!(
            cfg.set_operator(&owner, Pubkey::default()),
            Err(VestingError::InvalidConfiguration)
        ));
        assert!(matches!(
            cfg.transfer_ownership(&owner, Pubkey::default()),
            Err(VestingError::InvalidConfiguration)
        ));
        assert_eq!(cfg.owner, owner);
        assert_eq!(cfg.operator, operator);
    }

    #[test]
    fn reassignments_return_previous_holder() {
        let owner = Pubkey::new_unique();
        let operator = Pubkey::new_unique();
        let mut cfg = config(owner, operator);

        let next_operator = Pubkey::new_unique();
        assert_eq!(cfg.set_operator(&owner, next_operator).unwrap(), operator);
        assert_eq!(cfg.operator, next_operator);

        let next_owner = Pubkey::new_unique();
        assert_eq!(cfg.transfer_ownership(&owner, next_owner).unwrap(), owner);
        assert!(matches!(
            cfg.set_operator(&owner, Pubkey::new_unique()),
            Err(VestingError::Unauthorized)
        ));
    }

    #[test]
    fn outstanding_is_unclaimed_total() {
        let key = Pubkey::new_unique();
        assert_eq!(config(key, key).outstanding(), 29_700);
    }
}
