use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::constants::{VESTING_CONFIG_SEED, VESTING_RECORD_SEED};
use crate::error::VestingError;
use crate::state::{VestingConfig, VestingInput, VestingRecord};

/// Registers a batch of schedules. `remaining_accounts` holds one writable
/// record PDA per input, in input order.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, SetVesting<'info>>,
    inputs: Vec<VestingInput>,
) -> Result<()> {
    let config_key = ctx.accounts.vesting_config.key();
    let program_id = ctx.program_id;
    let record_infos = ctx.remaining_accounts;
    require!(
        record_infos.len() == inputs.len(),
        VestingError::InvalidRecordAccount
    );

    let mut bumps = Vec::with_capacity(inputs.len());
    let mut registered = Vec::new();
    for (input, info) in inputs.iter().zip(record_infos.iter()) {
        let (expected, bump) = Pubkey::find_program_address(
            &[VESTING_RECORD_SEED, config_key.as_ref(), input.beneficiary.as_ref()],
            program_id,
        );
        require_keys_eq!(info.key(), expected, VestingError::InvalidRecordAccount);
        if info.owner == program_id && !info.data_is_empty() {
            registered.push(input.beneficiary);
        }
        bumps.push(bump);
    }

    let st = &mut ctx.accounts.vesting_config;
    st.require_operator(&ctx.accounts.operator.key())?;
    apply_batch(st, &inputs, |beneficiary| registered.contains(beneficiary))?;

    let payer = ctx.accounts.operator.to_account_info();
    let system = ctx.accounts.system_program.to_account_info();
    for ((input, info), bump) in inputs.iter().zip(record_infos.iter()).zip(bumps) {
        let bump_seed = [bump];
        let seeds: &[&[u8]] = &[
            VESTING_RECORD_SEED,
            config_key.as_ref(),
            input.beneficiary.as_ref(),
            &bump_seed,
        ];
        create_record_account(&payer, info, &system, program_id, seeds)?;
        input.to_record(bump).store(info)?;

        emit!(VestingSet {
            beneficiary: input.beneficiary,
            vesting_amount: input.vesting_amount,
            initial_amount: input.initial_amount,
            initial_claimed: input.initial_claimed,
            duration: input.duration,
            claim_start_time: input.claim_start_time,
            claimed_amount: input.claimed_amount,
        });
    }

    msg!(
        "[vesting] set_vesting added={} total={} total_vesting_amount={}",
        inputs.len(),
        st.beneficiary_count,
        st.total_vesting_amount
    );
    Ok(())
}

/// Validates the whole batch and books it into the engine totals. Nothing is
/// written unless every input is accepted.
pub fn apply_batch(
    st: &mut VestingConfig,
    inputs: &[VestingInput],
    is_registered: impl Fn(&Pubkey) -> bool,
) -> std::result::Result<(), VestingError> {
    if inputs.is_empty() {
        return Err(VestingError::EmptyBatch);
    }
    if inputs.len() > st.max_batch as usize {
        return Err(VestingError::BatchTooLarge);
    }

    let mut total_vesting = st.total_vesting_amount;
    let mut total_claimed = st.total_claimed;

    for (i, input) in inputs.iter().enumerate() {
        if is_registered(&input.beneficiary) {
            return Err(VestingError::AlreadyExists);
        }
        // Reject duplicates within the batch itself.
        if inputs[..i].iter().any(|p| p.beneficiary == input.beneficiary) {
            return Err(VestingError::AlreadyExists);
        }
        input.validate()?;

        total_vesting = total_vesting
            .checked_add(input.vesting_amount)
            .ok_or(VestingError::MathOverflow)?;
        total_claimed = total_claimed
            .checked_add(input.claimed_amount)
            .ok_or(VestingError::MathOverflow)?;
    }

    let count = u32::try_from(inputs.len())
        .ok()
        .and_then(|n| st.beneficiary_count.checked_add(n))
        .ok_or(VestingError::MathOverflow)?;

    st.beneficiary_count = count;
    st.total_vesting_amount = total_vesting;
    st.total_claimed = total_claimed;
    Ok(())
}

/// Creates a program-owned record PDA, tolerating lamports sent to the
/// address ahead of time.
fn create_record_account<'info>(
    payer: &AccountInfo<'info>,
    record: &AccountInfo<'info>,
    system: &AccountInfo<'info>,
    program_id: &Pubkey,
    seeds: &[&[u8]],
) -> Result<()> {
    let space = 8 + VestingRecord::SIZE;
    let rent = Rent::get()?.minimum_balance(space);
    let signer: &[&[&[u8]]] = &[seeds];

    if record.lamports() == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: record.clone(),
                },
                signer,
            ),
            rent,
            space as u64,
            program_id,
        );
    }

    let top_up = rent.saturating_sub(record.lamports());
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system.clone(),
                Transfer {
                    from: payer.clone(),
                    to: record.clone(),
                },
            ),
            top_up,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system.clone(),
            Allocate {
                account_to_allocate: record.clone(),
            },
            signer,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system.clone(),
            Assign {
                account_to_assign: record.clone(),
            },
            signer,
        ),
        program_id,
    )
}

#[derive(Accounts)]
pub struct SetVesting<'info> {
    #[account(mut, seeds = [VESTING_CONFIG_SEED, vesting_config.mint.as_ref()], bump = vesting_config.bump)]
    pub vesting_config: Account<'info, VestingConfig>,

    /// Pays rent for the new record accounts.
    #[account(mut)]
    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingSet {
    pub beneficiary: Pubkey,
    pub vesting_amount: u64,
    pub initial_amount: u64,
    pub initial_claimed: bool,
    pub duration: i64,
    pub claim_start_time: i64,
    pub claimed_amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const YEAR: i64 = 31_556_926;
    const START: i64 = 1_659_561_482;

    fn config() -> VestingConfig {
        VestingConfig {
            owner: Pubkey::new_unique(),
            operator: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            start_date: START,
            max_batch: 20,
            beneficiary_count: 0,
            total_vesting_amount: 0,
            total_claimed: 0,
            bump: 255,
            vault_bump: 255,
        }
    }

    fn input(beneficiary: Pubkey, vesting_amount: u64, initial_amount: u64) -> VestingInput {
        VestingInput {
            beneficiary,
            vesting_amount,
            initial_amount,
            initial_claimed: initial_amount == 0,
            duration: YEAR,
            claim_start_time: START + 2_592_000,
            claimed_amount: 0,
            last_claimed_time: 0,
        }
    }

    // Mirrors the handler with a map standing in for the record PDAs.
    fn register(
        st: &mut VestingConfig,
        records: &mut HashMap<Pubkey, VestingRecord>,
        inputs: &[VestingInput],
    ) -> std::result::Result<(), VestingError> {
        apply_batch(st, inputs, |b| records.contains_key(b))?;
        for input in inputs {
            records.insert(input.beneficiary, input.to_record(255));
        }
        Ok(())
    }

    #[test]
    fn registers_batch_and_updates_totals() {
        let mut st = config();
        let mut records = HashMap::new();
        let user = Pubkey::new_unique();
        let user2 = Pubkey::new_unique();

        register(
            &mut st,
            &mut records,
            &[input(user, 10_000, 100), input(user2, 20_000, 200)],
        )
        .unwrap();

        assert_eq!(st.beneficiary_count, 2);
        assert_eq!(st.total_vesting_amount, 30_000);
        assert_eq!(st.total_claimed, 0);
        assert_eq!(records[&user].vesting_amount, 10_000);
        assert_eq!(records[&user2].vesting_amount, 20_000);
    }

    #[test]
    fn existing_beneficiary_is_rejected() {
        let mut st = config();
        let mut records = HashMap::new();
        let user = Pubkey::new_unique();
        register(&mut st, &mut records, &[input(user, 10_000, 100)]).unwrap();

        let err = register(&mut st, &mut records, &[input(user, 10_000, 100)]).unwrap_err();
        assert!(matches!(err, VestingError::AlreadyExists));
        assert_eq!(st.beneficiary_count, 1);
        assert_eq!(st.total_vesting_amount, 10_000);
    }

    #[test]
    fn duplicate_within_batch_is_rejected() {
        let mut st = config();
        let user = Pubkey::new_unique();
        let err = apply_batch(
            &mut st,
            &[input(user, 1_000, 100), input(user, 2_000, 100)],
            |_| false,
        )
        .unwrap_err();
        assert!(matches!(err, VestingError::AlreadyExists));
        assert_eq!(st.beneficiary_count, 0);
    }

    #[test]
    fn batch_is_all_or_nothing() {
        let mut st = config();
        let mut records = HashMap::new();
        let good = input(Pubkey::new_unique(), 1_000, 100);
        let mut bad = input(Pubkey::new_unique(), 1_000, 100);
        bad.initial_claimed = true;

        let err = register(&mut st, &mut records, &[good, bad]).unwrap_err();
        assert!(matches!(err, VestingError::InvalidInitialClaim));
        assert_eq!(st.beneficiary_count, 0);
        assert_eq!(st.total_vesting_amount, 0);
        assert!(records.is_empty());
    }

    #[test]
    fn migrated_claims_count_toward_total_claimed() {
        let mut st = config();
        let mut records = HashMap::new();
        let mut seeded = input(Pubkey::new_unique(), 10_000, 100);
        seeded.claimed_amount = 2_500;
        seeded.last_claimed_time = START - 60;
        register(&mut st, &mut records, &[seeded]).unwrap();

        assert_eq!(st.total_claimed, 2_500);
        let record = &records[&seeded.beneficiary];
        assert_eq!(record.claimed_amount, 2_500);
        assert_eq!(record.last_claimed_time, START - 60);
    }

    #[test]
    fn batch_limits() {
        let mut st = config();
        assert!(matches!(
            apply_batch(&mut st, &[], |_| false),
            Err(VestingError::EmptyBatch)
        ));

        st.max_batch = 1;
        let two = [
            input(Pubkey::new_unique(), 1_000, 100),
            input(Pubkey::new_unique(), 1_000, 100),
        ];
        assert!(matches!(
            apply_batch(&mut st, &two, |_| false),
            Err(VestingError::BatchTooLarge)
        ));
    }

    #[test]
    fn registrations_are_not_capped() {
        let mut st = config();
        let mut records = HashMap::new();
        for _ in 0..50 {
            register(&mut st, &mut records, &[input(Pubkey::new_unique(), 1_000, 0)]).unwrap();
        }
        let batch: Vec<_> = (0..20)
            .map(|_| input(Pubkey::new_unique(), 1_000, 0))
            .collect();
        register(&mut st, &mut records, &batch).unwrap();

        assert_eq!(st.beneficiary_count, 70);
        assert_eq!(records.len(), 70);
        assert_eq!(st.total_vesting_amount, 70_000);
    }
}
