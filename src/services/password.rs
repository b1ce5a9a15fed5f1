//! Password digests for the user store.
//!
//! SHA-256 hex, computed once at registration and compared at login. The
//! stored digest never leaves the process.

use sha2::{Digest, Sha256};

pub fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

pub fn matches(password: &str, stored_digest: &str) -> bool {
    digest(password) == stored_digest
}
