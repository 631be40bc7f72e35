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
use uuid::Uuid;

/// Produces the opaque value that proves ownership of an acquisition.
pub trait TokenGenerator: Send + Sync {
    fn generate_token(&self) -> String;
}

/// UUID v4 tokens. Unpredictable, so a stale holder cannot forge a
/// release of someone else's lock.
#[derive(Debug, Default)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for RandomTokenGenerator {
    fn generate_token(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Always returns the same token. Deterministic, so only suitable for
/// tests where no two independent holders can collide.
#[derive(Debug, Clone)]
pub struct FixedTokenGenerator {
    token: String,
}

impl FixedTokenGenerator {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenGenerator for FixedTokenGenerator {
    fn generate_token(&self) -> String {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_generator_returns_its_token() {
        let generator = FixedTokenGenerator::new("token");
        assert_eq!(generator.generate_token(), "token");
        assert_eq!(generator.generate_token(), "token");
    }

    #[test]
    fn test_random_generator_returns_unique_tokens() {
        let generator = RandomTokenGenerator::new();
        let first = generator.generate_token();
        let second = generator.generate_token();

        assert!(!first.is_empty());
        assert_ne!(first, second);
    }
}
