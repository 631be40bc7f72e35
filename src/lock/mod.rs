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
mod red_lock;

pub use red_lock::*;

use std::time::{Duration, SystemTime};

/// Proof of a believed-successful acquisition. Immutable once issued;
/// passed back to release the resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lock {
    resource: String,
    token: String,
    valid_until: SystemTime,
}

impl Lock {
    pub(crate) fn new(resource: String, token: String, valid_until: SystemTime) -> Self {
        Self {
            resource,
            token,
            valid_until,
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Nominal end of the TTL window, counted from the attempt's start
    pub fn valid_until(&self) -> SystemTime {
        self.valid_until
    }

    pub fn is_expired(&self) -> bool {
        SystemTime::now() >= self.valid_until
    }

    pub fn remaining_time(&self) -> Duration {
        self.valid_until
            .duration_since(SystemTime::now())
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_exposes_its_attributes() {
        let valid_until = SystemTime::now() + Duration::from_millis(100);
        let lock = Lock::new("resource".to_string(), "token".to_string(), valid_until);

        assert_eq!(lock.resource(), "resource");
        assert_eq!(lock.token(), "token");
        assert_eq!(lock.valid_until(), valid_until);
    }

    #[test]
    fn test_lock_in_the_future_is_not_expired() {
        let lock = Lock::new(
            "resource".to_string(),
            "token".to_string(),
            SystemTime::now() + Duration::from_secs(60),
        );

        assert!(!lock.is_expired());
        assert!(lock.remaining_time() > Duration::from_secs(50));
    }

    #[test]
    fn test_lock_in_the_past_is_expired() {
        let lock = Lock::new(
            "resource".to_string(),
            "token".to_string(),
            SystemTime::now() - Duration::from_secs(1),
        );

        assert!(lock.is_expired());
        assert_eq!(lock.remaining_time(), Duration::ZERO);
    }
}
