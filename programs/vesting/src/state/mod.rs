pub mod vesting_config;
pub mod vesting_record;

pub use vesting_config::*;
pub use vesting_record::*;
