//! Password hashing.
//!
//! Submitted passwords never reach the store in plain text; they are hashed
//! to an argon2 PHC string (e.g. `$argon2id$v=19$…`) at the edge.

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use rand_core::OsRng;

use crate::error::Error;

/// Hash `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, Error> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| Error::Credential(e.to_string()))
}

#[cfg(test)]
mod tests {
  use argon2::{PasswordHash, PasswordVerifier};

  use super::*;

  #[test]
  fn hash_is_phc_and_verifies() {
    let hash = hash_password("secret").unwrap();
    assert!(hash.starts_with("$argon2"));

    let parsed = PasswordHash::new(&hash).unwrap();
    assert!(
      Argon2::default()
        .verify_password(b"secret", &parsed)
        .is_ok()
    );
    assert!(
      Argon2::default()
        .verify_password(b"wrong", &parsed)
        .is_err()
    );
  }

  #[test]
  fn same_password_hashes_differently() {
    // Fresh salt per call.
    let a = hash_password("secret").unwrap();
    let b = hash_password("secret").unwrap();
    assert_ne!(a, b);
  }
}
