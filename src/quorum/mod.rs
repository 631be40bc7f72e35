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
use crate::errors::{RedLockError, RedLockResult};

/// Decides how many stores must cooperate for an operation to be
/// considered authoritative.
pub trait Quorum: Send + Sync {
    /// Record the number of participating stores and derive the threshold
    fn init(&mut self, total: usize) -> RedLockResult<()>;

    /// Whether the observed success count satisfies the threshold
    fn is_met(&self, successes: usize) -> RedLockResult<bool>;
}

/// Strict majority: two disjoint holder groups would have to overlap on
/// at least one store.
#[derive(Debug, Default)]
pub struct MajorityQuorum {
    total: usize,
    required: Option<usize>,
}

impl MajorityQuorum {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Quorum for MajorityQuorum {
    fn init(&mut self, total: usize) -> RedLockResult<()> {
        if total < 1 {
            return Err(RedLockError::ConfigError(
                "at least one store is required".to_string(),
            ));
        }

        self.total = total;
        self.required = Some(total / 2 + 1);
        Ok(())
    }

    fn is_met(&self, successes: usize) -> RedLockResult<bool> {
        let required = self.required.ok_or(RedLockError::QuorumNotInitialized)?;

        if successes > self.total {
            return Err(RedLockError::InvalidOperation(format!(
                "success count {} exceeds the number of stores ({})",
                successes, self.total
            )));
        }

        Ok(successes >= required)
    }
}
