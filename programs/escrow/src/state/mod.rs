pub mod escrow_state;
pub mod fee_policy;
pub mod ledger;

pub use escrow_state::*;
pub use fee_policy::*;
pub use ledger::*;
