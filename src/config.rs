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
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedLockConfig {
    /// Clock offset factor applied to the TTL when judging validity
    pub drift_factor: f64,
    /// Fixed network slack added on top of the proportional drift
    pub drift_constant: Duration,
    /// Default number of retries after the first attempt
    pub retry_count: u32,
    /// Default base delay between attempts
    pub retry_delay: Duration,
    /// Maximum jitter applied around the retry delay
    pub retry_jitter: Duration,
    /// Connection pool size of the bundled Redis store
    pub pool_size: u32,
    /// Connection timeout of the bundled Redis store
    pub connection_timeout: Duration,
}

impl Default for RedLockConfig {
    fn default() -> Self {
        Self {
            drift_factor: 0.01,
            drift_constant: Duration::from_millis(2),
            retry_count: 3,
            retry_delay: Duration::from_millis(200),
            retry_jitter: Duration::from_millis(50),
            pool_size: 10,
            connection_timeout: Duration::from_secs(3),
        }
    }
}

impl RedLockConfig {
    pub fn with_drift_factor(mut self, factor: f64) -> Self {
        self.drift_factor = factor;
        self
    }

    pub fn with_drift_constant(mut self, constant: Duration) -> Self {
        self.drift_constant = constant;
        self
    }

    pub fn with_retry_count(mut self, count: u32) -> Self {
        self.retry_count = count;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn with_retry_jitter(mut self, jitter: Duration) -> Self {
        self.retry_jitter = jitter;
        self
    }

    pub fn with_pool_size(mut self, size: u32) -> Self {
        self.pool_size = size;
        self
    }

    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }
}
