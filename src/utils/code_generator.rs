//! Short code generation.
//!
//! Codes are drawn uniformly from a 62-symbol alphanumeric alphabet using the
//! thread-local generator from [`rand::rng`], which is seeded once from the OS
//! and never reseeded per call. No uniqueness is promised here: uniqueness is
//! the storage layer's concern.

use rand::Rng;

/// Symbols a short code is built from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Path segments served by other routes.
///
/// A code equal to one of these would never be reachable through `GET /{code}`.
pub const RESERVED_CODES: &[&str] = &["shorten", "stats", "health"];

/// Generates a short code of [`DEFAULT_CODE_LENGTH`] characters.
pub fn generate_code() -> String {
    generate_code_with_length(DEFAULT_CODE_LENGTH)
}

/// Generates a short code of exactly `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code_with_length(8);
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code_with_length(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if `code` collides with a route segment.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
