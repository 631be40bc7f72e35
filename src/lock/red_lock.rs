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
use crate::config::RedLockConfig;
use crate::errors::{RedLockError, RedLockResult};
use crate::lock::Lock;
use crate::quorum::{MajorityQuorum, Quorum};
use crate::store::LockStore;
use crate::timing::ElapsedTimeMeter;
use crate::token::TokenGenerator;
use crate::util::{calculate_drift, jitter_delay, num_milliseconds};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// === RedLock (distributed lock over independent stores) ===
///
/// Acquires a named resource by writing the same token to every store and
/// trusting the result only when a quorum of stores took the write within
/// the TTL, minus a clock-drift allowance. Holds no per-call state, so one
/// engine serves concurrent calls for different resources.
pub struct RedLock {
    stores: Vec<Arc<dyn LockStore>>,
    token_generator: Box<dyn TokenGenerator>,
    meter: Box<dyn ElapsedTimeMeter>,
    quorum: Box<dyn Quorum>,
    config: RedLockConfig,
}

impl RedLock {
    /// Engine with a majority quorum sized to the store count.
    pub fn new(
        stores: Vec<Arc<dyn LockStore>>,
        token_generator: Box<dyn TokenGenerator>,
        meter: Box<dyn ElapsedTimeMeter>,
    ) -> RedLockResult<Self> {
        Self::with_quorum(stores, token_generator, meter, Box::new(MajorityQuorum::new()))
    }

    /// Engine with a caller-supplied quorum rule.
    pub fn with_quorum(
        stores: Vec<Arc<dyn LockStore>>,
        token_generator: Box<dyn TokenGenerator>,
        meter: Box<dyn ElapsedTimeMeter>,
        mut quorum: Box<dyn Quorum>,
    ) -> RedLockResult<Self> {
        if stores.is_empty() {
            return Err(RedLockError::ConfigError(
                "at least one store is required".to_string(),
            ));
        }

        // Fail-fast sanity check, not a guarantee maintained afterwards
        if let Some(idx) = stores.iter().position(|store| !store.is_connected()) {
            return Err(RedLockError::ConfigError(format!(
                "store {} is not connected",
                idx
            )));
        }

        quorum.init(stores.len())?;

        Ok(Self {
            stores,
            token_generator,
            meter,
            quorum,
            config: RedLockConfig::default(),
        })
    }

    pub fn with_config(mut self, config: RedLockConfig) -> Self {
        self.config = config;
        self
    }

    /// Acquire `resource` using the configured retry defaults.
    pub fn lock(&self, resource: &str, ttl: Duration) -> RedLockResult<Lock> {
        self.lock_with_retries(resource, ttl, self.config.retry_delay, self.config.retry_count)
    }

    /// Acquire `resource` for `ttl`, retrying up to `retry_count` times
    /// after the first attempt with a jittered `retry_delay` in between.
    pub fn lock_with_retries(
        &self,
        resource: &str,
        ttl: Duration,
        retry_delay: Duration,
        retry_count: u32,
    ) -> RedLockResult<Lock> {
        if resource.is_empty() {
            return Err(RedLockError::ConfigError(
                "resource name cannot be empty".to_string(),
            ));
        }
        if ttl.is_zero() {
            return Err(RedLockError::ConfigError(
                "ttl must be positive".to_string(),
            ));
        }

        // One token for the whole call, so keys left behind by a failed
        // attempt can still be released by a later cleanup.
        let token = self.token_generator.generate_token();

        for attempt in 0..=retry_count {
            if let Some(lock) = self.try_acquire(resource, &token, ttl)? {
                return Ok(lock);
            }

            if attempt < retry_count {
                thread::sleep(jitter_delay(retry_delay, self.config.retry_jitter));
            }
        }

        warn!(
            "failed to acquire '{}' after {} attempt(s)",
            resource,
            retry_count + 1
        );
        Err(RedLockError::LockAcquisitionError(resource.to_string()))
    }

    fn try_acquire(
        &self,
        resource: &str,
        token: &str,
        ttl: Duration,
    ) -> RedLockResult<Option<Lock>> {
        self.meter.start(token);

        let mut acquired = Vec::new();
        for (idx, store) in self.stores.iter().enumerate() {
            // A store error counts the same as a refused set
            if let Ok(true) = store.set_if_absent(resource, token, ttl) {
                acquired.push(idx);
            }
        }

        let reading = self.meter.stop(token);

        let drift = calculate_drift(ttl, self.config.drift_factor) + self.config.drift_constant;
        let validity = ttl
            .checked_sub(reading.elapsed + drift)
            .unwrap_or(Duration::ZERO);

        let quorum_met = match self.quorum.is_met(acquired.len()) {
            Ok(met) => met,
            Err(err) => {
                self.release_acquired(resource, token, &acquired);
                return Err(err);
            }
        };

        if quorum_met && !validity.is_zero() {
            debug!(
                "acquired '{}' on {}/{} stores, {}ms of validity left",
                resource,
                acquired.len(),
                self.stores.len(),
                num_milliseconds(&validity)
            );

            // The caller sees the nominal TTL window; drift only gates
            // whether this attempt is trusted.
            return Ok(Some(Lock::new(
                resource.to_string(),
                token.to_string(),
                reading.origin + ttl,
            )));
        }

        debug!(
            "attempt on '{}' rejected: {}/{} stores acquired, {}ms of validity left",
            resource,
            acquired.len(),
            self.stores.len(),
            num_milliseconds(&validity)
        );
        self.release_acquired(resource, token, &acquired);

        Ok(None)
    }

    /// Roll back the stores a failed attempt managed to lock. Best-effort;
    /// a store that cannot be cleaned falls back to its own TTL.
    fn release_acquired(&self, resource: &str, token: &str, acquired: &[usize]) {
        for &idx in acquired {
            let _ = self.stores[idx].release_if_matches(resource, token);
        }
    }

    /// Release a previously obtained lock on every store, in order.
    ///
    /// A store refusing the delete is benign when the key is already gone
    /// (expired or never set there). A key verifiably still present means
    /// the release cannot be confirmed; the call fails immediately and the
    /// remaining stores are left to their TTLs.
    pub fn unlock(&self, lock: &Lock) -> RedLockResult<()> {
        for (idx, store) in self.stores.iter().enumerate() {
            if let Ok(true) = store.release_if_matches(lock.resource(), lock.token()) {
                continue;
            }

            match store.get(lock.resource()) {
                Ok(None) => continue,
                _ => {
                    warn!(
                        "could not confirm release of '{}' on store {}",
                        lock.resource(),
                        idx
                    );
                    return Err(RedLockError::LockReleaseError(lock.resource().to_string()));
                }
            }
        }

        Ok(())
    }

    /// Whether any store still holds a key for `resource`. Stops at the
    /// first store reporting it present; a single stale, not-yet-expired
    /// key is enough to report locked.
    pub fn is_resource_locked(&self, resource: &str) -> bool {
        self.stores
            .iter()
            .any(|store| matches!(store.get(resource), Ok(Some(_))))
    }
}
