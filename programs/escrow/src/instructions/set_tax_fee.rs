use anchor_lang::prelude::*;

use crate::constants::ESCROW_SEED;
use crate::state::EscrowState;

pub fn handler(ctx: Context<SetTaxFeeAccounts>, tax_fee: u64, tax_fee_decimals: u8) -> Result<()> {
    let st = &mut ctx.accounts.escrow_state;
    st.require_owner(&ctx.accounts.owner.key())?;
    st.fee_policy.set_rate(tax_fee, tax_fee_decimals)?;

    emit!(SetTaxFee {
        tax_fee,
        tax_fee_decimals,
    });
    msg!(
        "[escrow] tax fee set tax_fee={} tax_fee_decimals={}",
        tax_fee,
        tax_fee_decimals
    );
    Ok(())
}

#[derive(Accounts)]
pub struct SetTaxFeeAccounts<'info> {
    #[account(mut, seeds = [ESCROW_SEED, escrow_state.mint.as_ref()], bump = escrow_state.bump)]
    pub escrow_state: Account<'info, EscrowState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct SetTaxFee {
    pub tax_fee: u64,
    pub tax_fee_decimals: u8,
}
