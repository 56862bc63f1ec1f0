//! Integer arithmetic shared by the custody programs.
//!
//! Every helper is pure and returns `None` instead of panicking, so callers
//! decide which program error an overflow maps to:
//!
//! ```ignore
//! let fee = percentage_of(amount, rate, decimals).ok_or(EscrowError::MathOverflow)?;
//! ```
#![no_std]

/// SPL token amount.
pub type Amount = u64;

/// Unix seconds, as reported by the `Clock` sysvar.
pub type UnixTimestamp = i64;

#[inline(always)]
pub fn checked_add(a: Amount, b: Amount) -> Option<Amount> {
    a.checked_add(b)
}

#[inline(always)]
pub fn checked_sub(a: Amount, b: Amount) -> Option<Amount> {
    a.checked_sub(b)
}

/// `floor(value * numerator / denominator)` with a `u128` intermediate.
pub fn mul_div_floor(value: Amount, numerator: u64, denominator: u64) -> Option<Amount> {
    if denominator == 0 {
        return None;
    }
    let product = (value as u128).checked_mul(numerator as u128)?;
    u64::try_from(product / denominator as u128).ok()
}

/// `10^exp`, or `None` past `u64::MAX`.
pub fn pow10(exp: u8) -> Option<u64> {
    10u64.checked_pow(exp as u32)
}

/// Portion of `pool` unlocked after `elapsed` of `duration` seconds.
///
/// `elapsed` is clamped to `[0, duration]`; at or past the end the full pool
/// is returned so rounding never leaves dust behind.
pub fn linear_release(pool: Amount, elapsed: UnixTimestamp, duration: UnixTimestamp) -> Option<Amount> {
    if duration <= 0 {
        return None;
    }
    if elapsed >= duration {
        return Some(pool);
    }
    let elapsed = elapsed.max(0);
    mul_div_floor(pool, elapsed as u64, duration as u64)
}

/// `floor(amount * rate / (100 * 10^rate_decimals))`, i.e. `amount` times the
/// percentage `rate / 10^rate_decimals`.
pub fn percentage_of(amount: Amount, rate: u64, rate_decimals: u8) -> Option<Amount> {
    let scale = pow10(rate_decimals)?.checked_mul(100)?;
    mul_div_floor(amount, rate, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i64 = 31_556_926;

    #[test]
    fn mul_div_floor_truncates() {
        assert_eq!(mul_div_floor(9_900, 7_200, YEAR as u64), Some(2));
        assert_eq!(mul_div_floor(10, 1, 3), Some(3));
        assert_eq!(mul_div_floor(10, 1, 0), None);
    }

    #[test]
    fn mul_div_floor_uses_wide_intermediate() {
        assert_eq!(mul_div_floor(u64::MAX, u64::MAX, u64::MAX), Some(u64::MAX));
        assert_eq!(mul_div_floor(u64::MAX, 2, 1), None);
    }

    #[test]
    fn pow10_bounds() {
        assert_eq!(pow10(0), Some(1));
        assert_eq!(pow10(19), Some(10_000_000_000_000_000_000));
        assert_eq!(pow10(20), None);
    }

    #[test]
    fn linear_release_clamps_both_ends() {
        assert_eq!(linear_release(9_900, -5, YEAR), Some(0));
        assert_eq!(linear_release(9_900, 0, YEAR), Some(0));
        assert_eq!(linear_release(9_900, YEAR / 2, YEAR), Some(4_950));
        // 9900 * 7200 / 31556926 = 2.25..
        assert_eq!(linear_release(9_900, 7_200, YEAR), Some(2));
        assert_eq!(linear_release(9_900, YEAR - 1, YEAR), Some(9_899));
        assert_eq!(linear_release(9_900, YEAR, YEAR), Some(9_900));
        assert_eq!(linear_release(9_900, YEAR * 3, YEAR), Some(9_900));
    }

    #[test]
    fn linear_release_rejects_empty_window() {
        assert_eq!(linear_release(100, 10, 0), None);
        assert_eq!(linear_release(100, 10, -1), None);
    }

    #[test]
    fn half_percent_fee() {
        let unit = 1_000_000_000u64;
        assert_eq!(percentage_of(100 * unit, 5, 1), Some(unit / 2));
        // 10 * 10^18 still fits u64.
        let wei = 1_000_000_000_000_000_000u64;
        assert_eq!(percentage_of(10 * wei, 5, 1), Some(wei / 20));
    }

    #[test]
    fn small_amounts_round_to_zero_fee() {
        assert_eq!(percentage_of(199, 5, 1), Some(0));
        assert_eq!(percentage_of(200, 5, 1), Some(1));
        assert_eq!(percentage_of(99, 1, 0), Some(0));
        assert_eq!(percentage_of(100, 1, 0), Some(1));
    }

    #[test]
    fn percentage_rejects_unrepresentable_scale() {
        assert_eq!(percentage_of(100, 5, 18), None);
    }
}
