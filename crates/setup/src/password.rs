//! Administrator password handling.
//!
//! The password is stored as an Argon2id PHC string, so the salt and cost
//! parameters travel with the hash. Setup never rejects a weak password (the
//! development default is short); it only reports why it is weak.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use suitable_core::setup::credentials::DEFAULT_ADMIN_PASSWORD;

/// Passwords shorter than this are accepted for setup but logged as weak.
pub const RECOMMENDED_MIN_LENGTH: usize = 12;

/// Hash the administrator password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Why `password` should be changed after first login, if it should.
pub fn password_warning(password: &str) -> Option<String> {
    if password == DEFAULT_ADMIN_PASSWORD {
        return Some("the built-in default password is in use".to_string());
    }
    if password.chars().count() < RECOMMENDED_MIN_LENGTH {
        return Some(format!(
            "password is shorter than {RECOMMENDED_MIN_LENGTH} characters"
        ));
    }
    None
}
