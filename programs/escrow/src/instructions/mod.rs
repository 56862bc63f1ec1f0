#![allow(ambiguous_glob_reexports)]

pub mod deposit;
pub mod emit_balance;
pub mod initialize;
pub mod set_tax_fee;
pub mod toggle_transaction_fees;
pub mod transfer_ownership;
pub mod update_tax_address;
pub mod withdraw;

pub use deposit::*;
pub use emit_balance::*;
pub use initialize::*;
pub use set_tax_fee::*;
pub use toggle_transaction_fees::*;
pub use transfer_ownership::*;
pub use update_tax_address::*;
pub use withdraw::*;
