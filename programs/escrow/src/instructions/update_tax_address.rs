use anchor_lang::prelude::*;

use crate::constants::ESCROW_SEED;
use crate::state::EscrowState;

pub fn handler(ctx: Context<UpdateTaxAddressAccounts>, tax_address: Pubkey) -> Result<()> {
    let st = &mut ctx.accounts.escrow_state;
    st.require_owner(&ctx.accounts.owner.key())?;

    let old = st.fee_policy.tax_address;
    st.fee_policy.set_tax_address(tax_address)?;

    emit!(UpdateTaxAddress { tax_address });
    msg!("[escrow] tax address {} -> {}", old, tax_address);
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateTaxAddressAccounts<'info> {
    #[account(mut, seeds = [ESCROW_SEED, escrow_state.mint.as_ref()], bump = escrow_state.bump)]
    pub escrow_state: Account<'info, EscrowState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct UpdateTaxAddress {
    pub tax_address: Pubkey,
}
