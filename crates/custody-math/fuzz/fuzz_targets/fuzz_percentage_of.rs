#![no_main]

use custody_math::{checked_sub, percentage_of};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u64, u64, u8)| {
    let (amount, rate, decimals) = input;
    let decimals = decimals % 17;
    let full = 100u64 * 10u64.pow(decimals as u32);
    let rate = rate % (full + 1);

    let fee = percentage_of(amount, rate, decimals).expect("rate within 100%");
    assert!(fee <= amount);
    let net = checked_sub(amount, fee).expect("fee never exceeds amount");
    assert_eq!(fee + net, amount);
    assert_eq!(
        fee as u128,
        amount as u128 * rate as u128 / full as u128
    );
});
