//! Program-wide constants.

/// Hard ceiling for the per-call `set_vesting` batch limit chosen at initialize.
/// Each input brings its own record account, so this also bounds transaction size.
pub const MAX_VESTING_BATCH: u8 = 20;

pub const VESTING_CONFIG_SEED: &[u8] = b"vesting_config";
pub const VESTING_RECORD_SEED: &[u8] = b"vesting";
pub const VAULT_SEED: &[u8] = b"vault";
