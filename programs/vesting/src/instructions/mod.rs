#![allow(ambiguous_glob_reexports)]

pub mod claim;
pub mod emit_vesting_quote;
pub mod fund_vault;
pub mod initialize;
pub mod set_operator;
pub mod set_start_date;
pub mod set_vesting;
pub mod transfer_ownership;

pub use claim::*;
pub use emit_vesting_quote::*;
pub use fund_vault::*;
pub use initialize::*;
pub use set_operator::*;
pub use set_start_date::*;
pub use set_vesting::*;
pub use transfer_ownership::*;
