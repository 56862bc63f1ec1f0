use anchor_lang::prelude::*;

/// Custom error codes for the investor vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: caller lacks the required role")]
    Unauthorized,

    #[msg("Invalid configuration")]
    InvalidConfiguration,

    #[msg("Vesting already exists")]
    AlreadyExists,

    #[msg("Initial claimed is not valid")]
    InvalidInitialClaim,

    #[msg("Invalid vesting schedule")]
    InvalidSchedule,

    #[msg("No vesting schedule for caller")]
    NoSchedule,

    #[msg("Claim is not allowed before start")]
    ClaimNotStarted,

    #[msg("Claim is not allowed before claim start date")]
    ClaimBeforeClaimStart,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Vesting record account does not match the beneficiary")]
    InvalidRecordAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Math overflow")]
    MathOverflow,
}
