use anchor_lang::prelude::*;
use custody_math::{checked_sub, percentage_of, pow10};

use crate::constants::{
    DEFAULT_TAX_ADDRESS, DEFAULT_TAX_FEE, DEFAULT_TAX_FEE_DECIMALS, MAX_TAX_FEE_DECIMALS,
};
use crate::error::EscrowError;

/// Withdrawal tax settings. The rate is the percentage
/// `tax_fee / 10^tax_fee_decimals`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeePolicy {
    pub tax_fee: u64,
    pub tax_fee_decimals: u8,
    /// Owner of the token account that receives the tax.
    pub tax_address: Pubkey,
    /// Forces the effective rate to zero while set.
    pub waive_fees: bool,
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self {
            tax_fee: DEFAULT_TAX_FEE,
            tax_fee_decimals: DEFAULT_TAX_FEE_DECIMALS,
            tax_address: DEFAULT_TAX_ADDRESS,
            waive_fees: false,
        }
    }
}

/// Gross withdrawal split into the tax and what the depositor receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee: u64,
    pub net: u64,
}

impl FeePolicy {
    pub const SIZE: usize =
        8 +  // tax_fee
        1 +  // tax_fee_decimals
        32 + // tax_address
        1;   // waive_fees

    /// Integer tax on `amount`; truncates, so small withdrawals pay nothing.
    pub fn fee_for(&self, amount: u64) -> std::result::Result<u64, EscrowError> {
        if self.waive_fees {
            return Ok(0);
        }
        percentage_of(amount, self.tax_fee, self.tax_fee_decimals).ok_or(EscrowError::MathOverflow)
    }

    pub fn split(&self, amount: u64) -> std::result::Result<FeeSplit, EscrowError> {
        let fee = self.fee_for(amount)?;
        let net = checked_sub(amount, fee).ok_or(EscrowError::MathOverflow)?;
        Ok(FeeSplit { fee, net })
    }

    pub fn set_rate(&mut self, tax_fee: u64, tax_fee_decimals: u8) -> std::result::Result<(), EscrowError> {
        if tax_fee_decimals > MAX_TAX_FEE_DECIMALS {
            return Err(EscrowError::InvalidFeeConfig);
        }
        // 100% is 100 * 10^decimals.
        let full = pow10(tax_fee_decimals)
            .and_then(|scale| scale.checked_mul(100))
            .ok_or(EscrowError::InvalidFeeConfig)?;
        if tax_fee > full {
            return Err(EscrowError::InvalidFeeConfig);
        }
        self.tax_fee = tax_fee;
        self.tax_fee_decimals = tax_fee_decimals;
        Ok(())
    }

    pub fn set_tax_address(&mut self, tax_address: Pubkey) -> std::result::Result<(), EscrowError> {
        if tax_address == Pubkey::default() {
            return Err(EscrowError::InvalidConfiguration);
        }
        self.tax_address = tax_address;
        Ok(())
    }

    /// Flips the waiver and returns the new value.
    pub fn toggle_waive_fees(&mut self) -> bool {
        self.waive_fees = !self.waive_fees;
        self.waive_fees
    }
}
