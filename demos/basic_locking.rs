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
use redlock::{
    LockStore, RandomTokenGenerator, RedLock, RedLockConfig, RedLockResult, RedisLockStore,
    SystemTimeMeter,
};
use std::sync::Arc;
use std::time::Duration;

fn main() -> RedLockResult<()> {
    // 1. One store per independent Redis instance
    let stores: Vec<Arc<dyn LockStore>> = vec![
        Arc::new(RedisLockStore::new("redis://127.0.0.1:6379")?),
        Arc::new(RedisLockStore::new("redis://127.0.0.1:6380")?),
        Arc::new(RedisLockStore::new("redis://127.0.0.1:6381")?),
    ];

    // 2. Create the engine
    let engine = RedLock::new(
        stores,
        Box::new(RandomTokenGenerator::new()),
        Box::new(SystemTimeMeter::new()),
    )?
    .with_config(
        RedLockConfig::default()
            .with_retry_count(3)
            .with_retry_delay(Duration::from_millis(200)),
    );

    // 3. Acquire the lock
    let lock = engine.lock("orders:refresh", Duration::from_secs(10))?;
    println!(
        "Acquired '{}' with token {}",
        lock.resource(),
        lock.token()
    );
    println!("Remaining validity: {:?}", lock.remaining_time());

    // Execute protected code
    println!("Resource reported locked: {}", engine.is_resource_locked("orders:refresh"));

    // 4. Release
    engine.unlock(&lock)?;
    println!("Released '{}'", lock.resource());

    Ok(())
}
