//! Identifier helpers: sequential library keys and random uid tokens

use rand::Rng;

/// Prefix for track keys
pub const TRACK_PREFIX: char = 't';

/// Prefix for playlist keys
pub const PLAYLIST_PREFIX: char = 'p';

/// Build a sequential key such as `t04` or `p12`.
///
/// Ordinals below 10 are zero-padded to two digits; larger ones are not padded.
pub fn sequential_key(prefix: char, ordinal: usize) -> String {
    format!("{}{:02}", prefix, ordinal)
}

/// Next free sequential key, starting at `count + 1`.
///
/// Skips ordinals whose key is already taken so loaded catalogs with
/// sparse keys never collide.
pub fn next_key(prefix: char, count: usize, taken: impl Fn(&str) -> bool) -> String {
    let mut ordinal = count + 1;
    loop {
        let key = sequential_key(prefix, ordinal);
        if !taken(&key) {
            return key;
        }
        log::debug!("Key {} already taken, trying next ordinal", key);
        ordinal += 1;
    }
}

/// Generate a random 4-digit lowercase hex token using the thread RNG
pub fn generate_uid() -> String {
    generate_uid_with(&mut rand::rng())
}

/// Generate a random 4-digit lowercase hex token from `rng`.
///
/// Draws from `0x10000..0x20000` and drops the leading `1`, so every
/// token has exactly four digits including leading zeros.
pub fn generate_uid_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let value: u32 = rng.random_range(0x1_0000..0x2_0000);
    let hex = format!("{:x}", value);
    hex[1..].to_string()
}
