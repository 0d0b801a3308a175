// SPDX-License-Identifier: MIT

//! Credential hashing for account registration.
//!
//! PBKDF2-HMAC-SHA256 with a random per-account salt. Stored form is
//! `hex(salt)$hex(derived_key)`; verification re-derives through
//! `ring::pbkdf2::verify`, which compares in constant time.

use std::num::NonZeroU32;

use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};

use crate::error::AppError;

const ITERATIONS: NonZeroU32 = match NonZeroU32::new(100_000) {
    Some(n) => n,
    None => unreachable!(),
};
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Hash a password for storage.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let rng = SystemRandom::new();
    let mut salt = [0u8; SALT_LEN];
    rng.fill(&mut salt)
        .map_err(|_| AppError::Database("Failed to generate salt".to_string()))?;

    let mut key = [0u8; KEY_LEN];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        ITERATIONS,
        &salt,
        password.as_bytes(),
        &mut key,
    );

    Ok(format!("{}${}", hex::encode(salt), hex::encode(key)))
}

/// Check a password against a stored `salt$key` hash.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, key_hex)) = stored.split_once('$') else {
        return false;
    };
    let (Ok(salt), Ok(key)) = (hex::decode(salt_hex), hex::decode(key_hex)) else {
        return false;
    };

    pbkdf2::verify(
        pbkdf2::PBKDF2_HMAC_SHA256,
        ITERATIONS,
        &salt,
        password.as_bytes(),
        &key,
    )
    .is_ok()
}
