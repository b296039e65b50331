//! Random todo-id generation.

use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of every generated id.
pub const ID_LEN: usize = 7;

/// Mint a random 7-character alphanumeric id.
///
/// Uniqueness is probabilistic, not enforced: with 62^7 possible ids a
/// collision within one process lifetime is treated as negligible.
pub fn random_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
