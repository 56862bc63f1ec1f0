//! Program-wide constants.

use anchor_lang::prelude::Pubkey;
use anchor_lang::pubkey;

/// Default withdrawal tax: 5 / 10^1 percent, i.e. 0.5%.
pub const DEFAULT_TAX_FEE: u64 = 5;
pub const DEFAULT_TAX_FEE_DECIMALS: u8 = 1;

/// Tax collector until the owner points it elsewhere.
pub const DEFAULT_TAX_ADDRESS: Pubkey = pubkey!("TaxCo11ectorDefau1tAddress11111111111111111");

/// Keeps `100 * 10^decimals` within `u64`.
pub const MAX_TAX_FEE_DECIMALS: u8 = 16;

pub const ESCROW_SEED: &[u8] = b"escrow";
pub const ESCROW_VAULT_SEED: &[u8] = b"escrow_vault";
pub const STAKE_SEED: &[u8] = b"stake";
