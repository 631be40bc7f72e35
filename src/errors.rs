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

use redis::RedisError;
use thiserror::Error;

pub type RedLockResult<T> = std::result::Result<T, RedLockError>;

#[derive(Error, Debug)]
pub enum RedLockError {
    #[error("Redis error: {0}")]
    RedisError(#[from] RedisError),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Quorum must be initialized before it is queried")]
    QuorumNotInitialized,

    #[error("Failed to acquire lock on '{0}'")]
    LockAcquisitionError(String),

    #[error("Failed to release lock on '{0}'")]
    LockReleaseError(String),

    #[error("Connection pool error: {0}")]
    PoolError(String),
}

impl From<r2d2::Error> for RedLockError {
    fn from(err: r2d2::Error) -> Self {
        RedLockError::PoolError(err.to_string())
    }
}
