//! Answer fingerprinting
//!
//! The fingerprint is a SHA-256 digest over the user id followed by every
//! answer in order, with no separator between fields. It carries no secret,
//! so anyone who knows the inputs can reproduce it.

use sha2::{Digest, Sha256};

/// Compute the lowercase hex fingerprint of a user's answers
///
/// Fields are concatenated without a delimiter, so `("ab", ["c"])` and
/// `("a", ["bc"])` produce the same value. Stored signatures depend on this
/// exact layout.
pub fn fingerprint<S: AsRef<str>>(user_id: &str, answers: &[S]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_bytes());
    for answer in answers {
        hasher.update(answer.as_ref().as_bytes());
    }
    hex::encode(hasher.finalize())
}
