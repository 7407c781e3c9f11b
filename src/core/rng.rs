//! RNG module - seeded generator for reproducible deck shuffles
//!
//! A session is fully reproducible from its seed string: the seed is folded
//! into a 32-bit hash, and every draw derives from that hash alone. Shared
//! seeds must replay the exact same game on every platform, so the hash and
//! output formulas below are fixed; swapping in a higher-quality PRNG would
//! break every previously shared seed.

use rand::Rng;

/// Fold a seed string into a 32-bit signed hash.
///
/// Accumulates `hash = (hash << 5) - hash + code` over the string's UTF-16
/// code units with 32-bit wrapping, starting from 0. The empty string hashes
/// to 0 and is a valid seed.
pub fn seed_hash(seed: &str) -> i32 {
    let mut hash: i32 = 0;
    for code in seed.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(code));
    }
    hash
}

/// Deterministic seeded generator.
///
/// Each draw increments the hash state, takes `sin(state) * 10000`, and
/// returns the fractional part: a float in `[0, 1)`. Low quality by design;
/// reproducibility is the contract, not statistical strength.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: i32,
}

impl SeededRng {
    /// Create a generator from a seed string.
    pub fn from_seed(seed: &str) -> Self {
        Self {
            state: seed_hash(seed),
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(1);
        let x = f64::from(self.state).sin() * 10000.0;
        x - x.floor()
    }

    /// Next index in `[0, bound)`.
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64).floor() as usize
    }

    /// Shuffle a slice with a backward Fisher-Yates pass.
    ///
    /// Swap index is `floor(next_f64() * (i + 1))` for `i` from `len - 1`
    /// down to 1.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_index(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Generate a fresh seed string for a new game.
///
/// Gameplay randomness never touches this; it only picks the seed that the
/// deterministic generator is then built from.
pub fn random_seed() -> String {
    base36(rand::thread_rng().gen::<u64>())
}

fn base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut buf = [0u8; 13];
    let mut i = buf.len();
    while value > 0 {
        i -= 1;
        buf[i] = DIGITS[(value % 36) as usize];
        value /= 36;
    }
    // Safe: buf only ever holds ASCII digits.
    String::from_utf8_lossy(&buf[i..]).into_owned()
}
