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
mod redis;

pub use self::redis::*;

use crate::errors::RedLockResult;
use std::time::Duration;

/// One independent backing key-value service participating in the lock.
///
/// Each store is treated on its own; the engine never assumes two stores
/// agree with each other.
pub trait LockStore: Send + Sync {
    /// Set `key` to `value` only if absent, expiring after `ttl`.
    /// Returns whether the set happened.
    fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> RedLockResult<bool>;

    /// Current value for `key`, if present
    fn get(&self, key: &str) -> RedLockResult<Option<String>>;

    /// Delete `key` only if its current value equals `expected`, as a
    /// single server-side operation. Returns whether the delete happened.
    fn release_if_matches(&self, key: &str, expected: &str) -> RedLockResult<bool>;

    /// Connectivity probe, consulted at engine construction
    fn is_connected(&self) -> bool;
}
