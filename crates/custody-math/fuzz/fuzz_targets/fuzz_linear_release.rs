#![no_main]

use custody_math::linear_release;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u64, i64, i64, u32)| {
    let (pool, elapsed, duration, step) = input;
    if duration <= 0 {
        assert_eq!(linear_release(pool, elapsed, duration), None);
        return;
    }

    let here = linear_release(pool, elapsed, duration).expect("positive duration");
    assert!(here <= pool);

    // Never decreases as time moves forward.
    let later = elapsed.saturating_add(step as i64);
    let there = linear_release(pool, later, duration).expect("positive duration");
    assert!(there >= here);

    if elapsed >= duration {
        assert_eq!(here, pool);
    }
    if elapsed <= 0 {
        assert_eq!(here, 0);
    }
});
