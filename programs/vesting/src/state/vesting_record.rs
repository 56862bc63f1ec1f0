use anchor_lang::prelude::*;
use custody_math::linear_release;

use crate::error::VestingError;

/// A single beneficiary's schedule, one PDA per beneficiary
/// (seeds = [b"vesting", config, beneficiary]).
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct VestingRecord {
    pub beneficiary: Pubkey,
    /// Total releasable over the schedule's lifetime, initial tranche included.
    pub vesting_amount: u64,
    /// Lump sum released at `claim_start_time`.
    pub initial_amount: u64,
    pub claimed_amount: u64,
    /// Linear release window in seconds, counted from `claim_start_time`.
    pub duration: i64,
    pub claim_start_time: i64,
    pub last_claimed_time: i64,
    pub initial_claimed: bool,
    pub bump: u8,
}

impl VestingRecord {
    pub const SIZE: usize =
        32 + // beneficiary
        8 +  // vesting_amount
        8 +  // initial_amount
        8 +  // claimed_amount
        8 +  // duration
        8 +  // claim_start_time
        8 +  // last_claimed_time
        1 +  // initial_claimed
        1;   // bump

    /// Decodes a record account. An address nobody registered (not yet owned
    /// by this program, or empty) means the beneficiary has no schedule.
    pub fn decode(
        owner: &Pubkey,
        program_id: &Pubkey,
        data: &[u8],
    ) -> std::result::Result<Self, VestingError> {
        if owner != program_id || data.is_empty() {
            return Err(VestingError::NoSchedule);
        }
        Self::try_deserialize(&mut &data[..]).map_err(|_| VestingError::InvalidRecordAccount)
    }

    pub fn load(info: &AccountInfo, program_id: &Pubkey) -> Result<Self> {
        let data = info.try_borrow_data()?;
        Ok(Self::decode(info.owner, program_id, &data)?)
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        self.try_serialize(&mut &mut data[..])
    }

    pub fn is_initial_claimed(&self) -> bool {
        self.initial_claimed
    }
    /// Amount unlocked at `now`: the initial tranche plus the linear share of
    /// the remainder. Exactly `vesting_amount` once the window has elapsed.
    pub fn vested_at(&self, now: i64) -> std::result::Result<u64, VestingError> {
        if self.duration <= 0 {
            return Err(VestingError::InvalidSchedule);
        }
        if now < self.claim_start_time {
            return Ok(0);
        }
        let elapsed = now
            .checked_sub(self.claim_start_time)
            .ok_or(VestingError::MathOverflow)?;
        let linear_pool = self
            .vesting_amount
            .checked_sub(self.initial_amount)
            .ok_or(VestingError::InvalidSchedule)?;
        let linear = linear_release(linear_pool, elapsed, self.duration)
            .ok_or(VestingError::MathOverflow)?;
        self.initial_amount
            .checked_add(linear)
            .ok_or(VestingError::MathOverflow)
    }

    /// Newly unlocked amount not yet paid out. Records migrated with a
    /// `claimed_amount` ahead of the curve owe nothing until it catches up.
    pub fn payable_at(&self, now: i64) -> std::result::Result<u64, VestingError> {
        Ok(self.vested_at(now)?.saturating_sub(self.claimed_amount))
    }

    pub fn record_claim(&mut self, amount: u64, now: i64) -> std::result::Result<(), VestingError> {
        let claimed = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if claimed > self.vesting_amount {
            return Err(VestingError::MathOverflow);
        }
        self.claimed_amount = claimed;
        self.initial_claimed = true;
        self.last_claimed_time = now;
        Ok(())
    }
}

/// Where a record stands relative to the two time gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimWindow {
    /// Before the engine-wide `start_date`.
    NotStarted,
    /// Past `start_date` but before the record's `claim_start_time`.
    BeforeClaimStart,
    Open,
}

impl ClaimWindow {
    pub fn at(now: i64, start_date: i64, record: &VestingRecord) -> Self {
        if now < start_date {
            ClaimWindow::NotStarted
        } else if now < record.claim_start_time {
            ClaimWindow::BeforeClaimStart
        } else {
            ClaimWindow::Open
        }
    }

    pub fn require_open(self) -> std::result::Result<(), VestingError> {
        match self {
            ClaimWindow::NotStarted => Err(VestingError::ClaimNotStarted),
            ClaimWindow::BeforeClaimStart => Err(VestingError::ClaimBeforeClaimStart),
            ClaimWindow::Open => Ok(()),
        }
    }
}

/// Instruction input for one schedule.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingInput {
    pub beneficiary: Pubkey,
    pub vesting_amount: u64,
    pub initial_amount: u64,
    pub initial_claimed: bool,
    pub duration: i64,
    pub claim_start_time: i64,
    /// Non-zero only when migrating a schedule that already paid out.
    pub claimed_amount: u64,
    pub last_claimed_time: i64,
}

impl VestingInput {
    pub fn validate(&self) -> std::result::Result<(), VestingError> {
        if self.beneficiary == Pubkey::default() {
            return Err(VestingError::InvalidConfiguration);
        }
        // The initial tranche is marked claimed iff there is none.
        let initial_ok = (self.initial_amount == 0 && self.initial_claimed)
            || (self.initial_amount > 0 && !self.initial_claimed);
        if !initial_ok {
            return Err(VestingError::InvalidInitialClaim);
        }
        if self.vesting_amount == 0
            || self.duration <= 0
            || self.initial_amount > self.vesting_amount
            || self.claimed_amount > self.vesting_amount
        {
            return Err(VestingError::InvalidSchedule);
        }
        Ok(())
    }

    pub fn to_record(&self, bump: u8) -> VestingRecord {
        VestingRecord {
            beneficiary: self.beneficiary,
            vesting_amount: self.vesting_amount,
            initial_amount: self.initial_amount,
            claimed_amount: self.claimed_amount,
            duration: self.duration,
            claim_start_time: self.claim_start_time,
            last_claimed_time: self.last_claimed_time,
            initial_claimed: self.initial_claimed,
            bump,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i64 = 31_556_926;
    const CLAIM_START: i64 = 1_700_000_000;

    fn input(vesting_amount: u64, initial_amount: u64, initial_claimed: bool) -> VestingInput {
        VestingInput {
            beneficiary: Pubkey::new_unique(),
            vesting_amount,
            initial_amount,
            initial_claimed,
            duration: YEAR,
            claim_start_time: CLAIM_START,
            claimed_amount: 0,
            last_claimed_time: 0,
        }
    }

    #[test]
    fn record_account_round_trips() {
        let program_id = Pubkey::new_unique();
        let mut record = input(10_000, 100, false).to_record(254);
        record.record_claim(100, CLAIM_START).unwrap();

        let mut data = Vec::new();
        record.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), 8 + VestingRecord::SIZE);

        let decoded = VestingRecord::decode(&program_id, &program_id, &data).unwrap();
        assert_eq!(decoded, record);
        assert!(decoded.is_initial_claimed());
        assert_eq!(decoded.bump, 254);
    }

    #[test]
    fn unregistered_address_has_no_schedule() {
        let program_id = Pubkey::new_unique();
        let system = Pubkey::default();
        assert!(matches!(
            VestingRecord::decode(&system, &program_id, &[]),
            Err(VestingError::NoSchedule)
        ));
        assert!(matches!(
            VestingRecord::decode(&program_id, &program_id, &[]),
            Err(VestingError::NoSchedule)
        ));
        // Owned by us but holding some other account type.
        assert!(matches!(
            VestingRecord::decode(&program_id, &program_id, &[0u8; 8 + VestingRecord::SIZE]),
            Err(VestingError::InvalidRecordAccount)
        ));
    }

    #[test]
    fn initial_claimed_flag_must_match_initial_amount() {
        assert!(input(10_000, 100, false).validate().is_ok());
        assert!(input(1_010, 0, true).validate().is_ok());
        assert!(matches!(
            input(1_000, 100, true).validate(),
            Err(VestingError::InvalidInitialClaim)
        ));
        assert!(matches!(
            input(1_010, 0, false).validate(),
            Err(VestingError::InvalidInitialClaim)
        ));
    }

    #[test]
    fn degenerate_schedules_are_rejected() {
        let mut zero_duration = input(1_000, 100, false);
        zero_duration.duration = 0;
        assert!(matches!(zero_duration.validate(), Err(VestingError::InvalidSchedule)));

        assert!(matches!(
            input(100, 101, false).validate(),
            Err(VestingError::InvalidSchedule)
        ));

        let mut overclaimed = input(1_000, 100, false);
        overclaimed.claimed_amount = 1_001;
        assert!(matches!(overclaimed.validate(), Err(VestingError::InvalidSchedule)));

        let mut nobody = input(1_000, 100, false);
        nobody.beneficiary = Pubkey::default();
        assert!(matches!(nobody.validate(), Err(VestingError::InvalidConfiguration)));
    }

    #[test]
    fn claim_window_checks_global_gate_first() {
        let record = input(10_000, 100, false).to_record(255);
        let start_date = CLAIM_START - 2_592_000;

        assert_eq!(
            ClaimWindow::at(start_date - 1, start_date, &record),
            ClaimWindow::NotStarted
        );
        assert_eq!(
            ClaimWindow::at(start_date, start_date, &record),
            ClaimWindow::BeforeClaimStart
        );
        assert_eq!(
            ClaimWindow::at(CLAIM_START, start_date, &record),
            ClaimWindow::Open
        );
        // A claim start earlier than the global start still waits for it.
        assert_eq!(
            ClaimWindow::at(CLAIM_START - 1, CLAIM_START, &record),
            ClaimWindow::NotStarted
        );
        assert!(matches!(
            ClaimWindow::NotStarted.require_open(),
            Err(VestingError::ClaimNotStarted)
        ));
        assert!(matches!(
            ClaimWindow::BeforeClaimStart.require_open(),
            Err(VestingError::ClaimBeforeClaimStart)
        ));
    }

    #[test]
    fn initial_then_linear_then_remainder() {
        let mut record = input(10_000, 100, false).to_record(255);

        assert_eq!(record.payable_at(CLAIM_START - 1).unwrap(), 0);
        assert_eq!(record.payable_at(CLAIM_START).unwrap(), 100);
        record.record_claim(100, CLAIM_START).unwrap();
        assert!(record.is_initial_claimed());
        assert_eq!(record.last_claimed_time, CLAIM_START);

        // floor(7200 * 9900 / 31556926) = 2
        assert_eq!(record.payable_at(CLAIM_START + 7_200).unwrap(), 2);
        record.record_claim(2, CLAIM_START + 7_200).unwrap();
        assert_eq!(record.claimed_amount, 102);

        let after_end = CLAIM_START + YEAR + 1_000;
        assert_eq!(record.payable_at(after_end).unwrap(), 9_898);
        record.record_claim(9_898, after_end).unwrap();
        assert_eq!(record.claimed_amount, 10_000);
        assert_eq!(record.payable_at(after_end + YEAR).unwrap(), 0);
    }

    #[test]
    fn linear_only_schedule() {
        let record = input(1_010, 0, true).to_record(255);
        // floor(1010 * 2593000 / 31556926) = 82
        assert_eq!(record.payable_at(CLAIM_START + 2_593_000).unwrap(), 82);
        assert_eq!(record.payable_at(CLAIM_START + YEAR).unwrap(), 1_010);
    }

    #[test]
    fn many_small_claims_converge_exactly() {
        let mut record = input(999_999, 333, false).to_record(255);
        let mut paid = 0u64;
        let mut now = CLAIM_START;
        while now <= CLAIM_START + YEAR + 86_400 {
            let payable = record.payable_at(now).unwrap();
            if payable > 0 {
                record.record_claim(payable, now).unwrap();
                paid += payable;
            }
            now += 86_399;
        }
        assert_eq!(paid, 999_999);
        assert_eq!(record.claimed_amount, record.vesting_amount);
    }

    #[test]
    fn migrated_record_ahead_of_curve_owes_nothing() {
        let mut seeded = input(10_000, 100, false);
        seeded.claimed_amount = 5_000;
        seeded.last_claimed_time = CLAIM_START - 10;
        let record = seeded.to_record(255);
        assert_eq!(record.payable_at(CLAIM_START + 7_200).unwrap(), 0);
        assert_eq!(record.payable_at(CLAIM_START + YEAR).unwrap(), 5_000);
    }

    #[test]
    fn overpaying_a_record_fails() {
        let mut record = input(1_000, 100, false).to_record(255);
        assert!(matches!(
            record.record_claim(1_001, CLAIM_START),
            Err(VestingError::MathOverflow)
        ));
        assert_eq!(record.claimed_amount, 0);
        assert!(!record.is_initial_claimed());
    }
}
