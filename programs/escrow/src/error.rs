use anchor_lang::prelude::*;

/// Custom error codes for the escrow program.
#[error_code]
pub enum EscrowError {
    #[msg("Unauthorized: owner signature required")]
    Unauthorized,

    #[msg("Invalid configuration")]
    InvalidConfiguration,

    #[msg("Not enough allowance")]
    InsufficientAllowance,

    #[msg("Withdrawal amount exceeds held balance")]
    ExceedsBalance,

    #[msg("Tax fee must be at most 100% with at most 16 decimals")]
    InvalidFeeConfig,

    #[msg("Tax token account is not owned by the tax address")]
    InvalidTaxAccount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
