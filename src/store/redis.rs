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
use crate::errors::RedLockResult;
use crate::scripts;
use crate::store::LockStore;
use crate::util::num_milliseconds;
use r2d2::Pool;
use redis::Client;
use std::time::Duration;
use tracing::warn;

/// `LockStore` over a single Redis instance, pooled with r2d2.
///
/// The conditional set maps to `SET key value NX PX ttl`; the release
/// runs the compare-and-delete script server-side.
pub struct RedisLockStore {
    pool: Pool<Client>,
}

impl RedisLockStore {
    pub fn new(url: &str) -> RedLockResult<Self> {
        Self::with_config(url, &RedLockConfig::default())
    }

    pub fn with_config(url: &str, config: &RedLockConfig) -> RedLockResult<Self> {
        let client = Client::open(url)?;
        let pool = Pool::builder()
            .max_size(config.pool_size)
            .connection_timeout(config.connection_timeout)
            .test_on_check_out(true)
            .build(client)?;

        Ok(Self { pool })
    }
}

impl LockStore for RedisLockStore {
    fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> RedLockResult<bool> {
        let mut conn = self.pool.get()?;
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("PX")
            .arg(num_milliseconds(&ttl))
            .query(&mut *conn)?;

        Ok(reply.is_some())
    }

    fn get(&self, key: &str) -> RedLockResult<Option<String>> {
        let mut conn = self.pool.get()?;
        let value: Option<String> = redis::cmd("GET").arg(key).query(&mut *conn)?;

        Ok(value)
    }

    fn release_if_matches(&self, key: &str, expected: &str) -> RedLockResult<bool> {
        let mut conn = self.pool.get()?;
        let released: i32 = scripts::RELEASE_SCRIPT
            .key(key)
            .arg(expected)
            .invoke(&mut *conn)?;

        Ok(released > 0)
    }

    fn is_connected(&self) -> bool {
        let mut conn = match self.pool.get() {
            Ok(conn) => conn,
            Err(err) => {
                warn!("connectivity probe could not get a connection: {}", err);
                return false;
            }
        };

        match redis::cmd("PING").query::<String>(&mut *conn) {
            Ok(reply) => reply == "PONG",
            Err(_) => false,
        }
    }
}
