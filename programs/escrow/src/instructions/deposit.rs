use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ESCROW_SEED, ESCROW_VAULT_SEED, STAKE_SEED};
use crate::error::EscrowError;
use crate::state::{credit, EscrowState, StakeAccount};

pub fn handler(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let escrow_state_ai = ctx.accounts.escrow_state.to_account_info();
    let escrow_key = ctx.accounts.escrow_state.key();
    let depositor = ctx.accounts.depositor.key();

    let source = &ctx.accounts.depositor_token_account;
    let delegate = match source.delegate {
        COption::Some(key) => Some(key),
        COption::None => None,
    };
    require!(
        allowance_of(delegate, source.delegated_amount, &escrow_key) >= amount,
        EscrowError::InsufficientAllowance
    );

    let st = &mut ctx.accounts.escrow_state;
    let stake = &mut ctx.accounts.stake_account;
    stake.bind(escrow_key, depositor, ctx.bumps.stake_account);
    credit(st, stake, amount)?;

    // Pull as the approved delegate, signed by the escrow PDA.
    let mint = st.mint;
    let signer_seeds: &[&[&[u8]]] = &[&[ESCROW_SEED, mint.as_ref(), &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: escrow_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(Deposit { depositor, amount });

    msg!(
        "[escrow] deposit depositor={} amount={} balance={} total_staked={}",
        depositor,
        amount,
        stake.balance,
        st.total_staked
    );
    Ok(())
}

/// How much `spender` may pull from a token account, given its SPL delegate.
pub fn allowance_of(delegate: Option<Pubkey>, delegated_amount: u64, spender: &Pubkey) -> u64 {
    match delegate {
        Some(key) if key == *spender => delegated_amount,
        _ => 0,
    }
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(mut, seeds = [ESCROW_SEED, escrow_state.mint.as_ref()], bump = escrow_state.bump)]
    pub escrow_state: Account<'info, EscrowState>,

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

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct Deposit {
    pub depositor: Pubkey,
    pub amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowance_requires_escrow_as_delegate() {
        let escrow = Pubkey::new_unique();
        assert_eq!(allowance_of(None, 0, &escrow), 0);
        assert_eq!(allowance_of(Some(escrow), 100, &escrow), 100);
        // Approval granted to someone else does not count.
        assert_eq!(allowance_of(Some(Pubkey::new_unique()), 100, &escrow), 0);
    }

    #[test]
    fn zero_deposit_needs_no_allowance() {
        let escrow = Pubkey::new_unique();
        let amount = 0;
        assert!(allowance_of(None, 0, &escrow) >= amount);

        let mut st = EscrowState {
            owner: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            total_staked: 0,
            fee_policy: Default::default(),
            bump: 255,
            vault_bump: 255,
        };
        let mut stake = StakeAccount::default();
        credit(&mut st, &mut stake, 0).unwrap();
        assert_eq!(stake.balance, 0);
        assert_eq!(st.total_staked, 0);
    }
}
