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
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant, SystemTime};

/// What a stopped timer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerReading {
    /// Time spent between start and stop
    pub elapsed: Duration,
    /// Absolute wall-clock time at which the timer was started
    pub origin: SystemTime,
}

/// Named start/stop timers used to measure how long an acquisition
/// attempt took.
pub trait ElapsedTimeMeter: Send + Sync {
    fn start(&self, key: &str);

    fn stop(&self, key: &str) -> TimerReading;
}

/// Meter backed by the system clock. Elapsed time is measured with a
/// monotonic `Instant`; the origin is the wall clock at start.
#[derive(Debug, Default)]
pub struct SystemTimeMeter {
    timers: Mutex<HashMap<String, (Instant, SystemTime)>>,
}

impl SystemTimeMeter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElapsedTimeMeter for SystemTimeMeter {
    fn start(&self, key: &str) {
        self.timers
            .lock()
            .insert(key.to_string(), (Instant::now(), SystemTime::now()));
    }

    fn stop(&self, key: &str) -> TimerReading {
        match self.timers.lock().remove(key) {
            Some((started, origin)) => TimerReading {
                elapsed: started.elapsed(),
                origin,
            },
            // Stopping a timer that was never started yields an empty reading
            None => TimerReading {
                elapsed: Duration::ZERO,
                origin: SystemTime::now(),
            },
        }
    }
}
