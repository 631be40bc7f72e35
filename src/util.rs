/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */
use rand::Rng;
use std::time::Duration;

pub fn num_milliseconds(duration: &Duration) -> u64 {
    duration.as_millis() as u64
}

/// Proportional part of the drift allowance for a given TTL.
pub fn calculate_drift(ttl: Duration, drift_factor: f64) -> Duration {
    let drift_ms = (ttl.as_millis() as f64 * drift_factor).ceil() as u64;
    Duration::from_millis(drift_ms)
}

/// Uniform jitter of up to `max_jitter` on either side of `base_delay`,
/// clamped below at zero.
pub fn jitter_delay(base_delay: Duration, max_jitter: Duration) -> Duration {
    let jitter_ms = num_milliseconds(&max_jitter);
    if jitter_ms == 0 {
        return base_delay;
    }

    let mut rng = rand::thread_rng();
    let jitter = Duration::from_millis(rng.gen_range(0..=jitter_ms));
    if rng.gen_bool(0.5) {
        base_delay + jitter
    } else {
        base_delay - jitter.min(base_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_drift() {
        assert_eq!(
            calculate_drift(Duration::from_millis(100), 0.01),
            Duration::from_millis(1)
        );
        assert_eq!(
            calculate_drift(Duration::from_millis(10_000), 0.01),
            Duration::from_millis(100)
        );
        // 150 * 0.01 = 1.5, rounded up
        assert_eq!(
            calculate_drift(Duration::from_millis(150), 0.01),
            Duration::from_millis(2)
        );
    }

    #[test]
    fn test_jitter_delay_stays_in_bounds() {
        let base = Duration::from_millis(200);
        let jitter = Duration::from_millis(50);

        for _ in 0..100 {
            let delay = jitter_delay(base, jitter);
            assert!(delay >= Duration::from_millis(150));
            assert!(delay <= Duration::from_millis(250));
        }
    }

    #[test]
    fn test_jitter_delay_never_goes_negative() {
        let base = Duration::from_millis(10);
        let jitter = Duration::from_millis(50);

        for _ in 0..100 {
            let delay = jitter_delay(base, jitter);
            assert!(delay <= Duration::from_millis(60));
        }
    }

    #[test]
    fn test_zero_jitter_returns_base_delay() {
        let base = Duration::from_millis(200);
        assert_eq!(jitter_delay(base, Duration::ZERO), base);
    }
}
