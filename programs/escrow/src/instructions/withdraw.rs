use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ESCROW_SEED, ESCROW_VAULT_SEED, STAKE_SEED};
use crate::error::EscrowError;
use crate::state::{debit, EscrowState, FeeSplit, StakeAccount};

pub fn handler(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let escrow_state_ai = ctx.accounts.escrow_state.to_account_info();
    let escrow_key = ctx.accounts.escrow_state.key();
    let depositor = ctx.accounts.depositor.key();

    let st = &mut ctx.accounts.escrow_state;
    let stake = &mut ctx.accounts.stake_account;
    stake.bind(escrow_key, depositor, ctx.bumps.stake_account);
    let split = settle_withdrawal(st, stake, amount)?;

    let mint = st.mint;
    let signer_seeds: &[&[&[u8]]] = &[&[ESCROW_SEED, mint.as_ref(), &[st.bump]]];

    if let Some(tax_token_account) = tax_recipient(split.fee, ctx.accounts.tax_token_account.as_ref())? {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: tax_token_account.to_account_info(),
                    authority: escrow_state_ai.clone(),
                },
                signer_seeds,
            ),
            split.fee,
        )?;
    }

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.depositor_token_account.to_account_info(),
                authority: escrow_state_ai,
            },
            signer_seeds,
        ),
        split.net,
    )?;

    // Gross amount, matching the request.
    emit!(Withdraw { depositor, amount });

    msg!(
        "[escrow] withdraw depositor={} amount={} fee={} net={} total_staked={}",
        depositor,
        amount,
        split.fee,
        split.net,
        st.total_staked
    );
    Ok(())
}

/// Debits the gross `amount` and splits it per the current fee policy.
pub fn settle_withdrawal(
    st: &mut EscrowState,
    stake: &mut StakeAccount,
    amount: u64,
) -> std::result::Result<FeeSplit, EscrowError> {
    if amount > stake.balance {
        return Err(EscrowError::ExceedsBalance);
    }
    let split = st.fee_policy.split(amount)?;
    debit(st, stake, amount)?;
    Ok(split)
}

/// Where the tax goes. No transfer when the tax rounds down or is waived, and
/// the collector account is only required when there is something to pay.
pub fn tax_recipient<T>(fee: u64, account: Option<T>) -> std::result::Result<Option<T>, EscrowError> {
    if fee == 0 {
        return Ok(None);
    }
    account.map(Some).ok_or(EscrowError::InvalidTaxAccount)
}

#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
    #[account(mut, seeds = [ESCROW_SEED, escrow_state.mint.as_ref()], bump = escrow_state.bump)]
    pub escrow_state: Account<'info, EscrowState>,

    // Created on the fly so a depositor who never deposited gets `ExceedsBalance`;
    // the failed instruction rolls the creation back.
    #[account(
        init_if_needed,
        payer = depositor,
        space = 8 + StakeAccount::SIZE,
        seeds = [STAKE_SEED, escrow_state.key().as_ref(), depositor.key().as_ref()],
        bump
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(
        mut,
        seeds = [ESCROW_VAULT_SEED, escrow_state.key().as_ref()],
        bump = escrow_state.vault_bump,
        constraint = vault.mint == escrow_state.mint @ EscrowError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = depositor_token_account.mint == escrow_state.mint @ EscrowError::InvalidTokenMint,
        constraint = depositor_token_account.owner == depositor.key() @ EscrowError::InvalidTokenAccount,
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,

    // Checked whenever supplied; may be omitted while no tax is due.
    #[account(
        mut,
        constraint = tax_token_account.mint == escrow_state.mint @ EscrowError::InvalidTokenMint,
        constraint = tax_token_account.owner == escrow_state.fee_policy.tax_address @ EscrowError::InvalidTaxAccount,
    )]
    pub tax_token_account: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct Withdraw {
    pub depositor: Pubkey,
    pub amount: u64,
}
