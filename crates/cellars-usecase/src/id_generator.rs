//! Identifier generation for new creatures
//!
//! `PseudoUuidGenerator` formats tokens in the UUID v4 textual layout from a
//! general-purpose PRNG. It is NOT cryptographically secure and collisions
//! are only as unlikely as the birthday bound on 122 random bits allows.
//! `UuidV4Generator` delegates to the `uuid` crate instead.

use std::sync::Mutex;

use cellars_domain::CreatureId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of fresh creature ids
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> CreatureId;
}

/// `x` = random nibble, `y` = variant nibble (binary 10xx), `4` = version
const LAYOUT: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Format one pseudo-UUID token, advancing `rng`
///
/// The result is 36 lowercase characters in 8-4-4-4-12 groups with the
/// version nibble fixed to `4` and the variant nibble in `8..=b`.
pub fn generate_token<R: Rng>(rng: &mut R) -> String {
    LAYOUT
        .chars()
        .map(|c| match c {
            'x' => hex_digit(rng.gen_range(0..16)),
            'y' => hex_digit(rng.gen_range(8..12)),
            literal => literal,
        })
        .collect()
}

fn hex_digit(nibble: usize) -> char {
    HEX_DIGITS[nibble] as char
}

/// Pseudo-UUID generator over an owned, seeded-once PRNG
///
/// The PRNG sits behind a mutex so one generator can be shared by every
/// facade in the process.
#[derive(Debug)]
pub struct PseudoUuidGenerator {
    rng: Mutex<StdRng>,
}

impl PseudoUuidGenerator {
    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seed deterministically (reproducible ids for tests and demos)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn generate_token(&self) -> String {
        // Poisoning leaves the PRNG state intact
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        generate_token(&mut *rng)
    }
}

impl Default for PseudoUuidGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl IdGenerator for PseudoUuidGenerator {
    fn generate(&self) -> CreatureId {
        CreatureId::new(self.generate_token())
    }
}

/// Random v4 UUIDs from the `uuid` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> CreatureId {
        CreatureId::new(uuid::Uuid::new_v4().to_string())
    }
}
