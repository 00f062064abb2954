//! Short code generation and validation utilities.
//!
//! Codes are eight characters drawn uniformly from `[a-zA-Z0-9]`, giving
//! 62^8 (about 2.18e14) possible values. Uniqueness is probabilistic; the
//! store rejects the rare duplicate instead of overwriting.

use rand::Rng;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 8;

/// Characters a generated code is drawn from.
pub const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random short code.
///
/// Uses the thread-local generator. Codes are identifiers, not secrets, so no
/// unpredictability guarantee is made.
///
/// # Examples
///
/// ```
/// use mem_shortener::utils::code_generator::{CODE_LENGTH, generate_code};
///
/// let code = generate_code();
/// assert_eq!(code.len(), CODE_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` has the shape of a generated code.
///
/// Anything else can never be in the store, so lookups for it can be
/// answered without touching it.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| CODE_ALPHABET.contains(&b))
}
