//! Search for magic numbers.
//!
//! The shipped constants in [`super::constants`] make this unnecessary at
//! startup; the finder exists to regenerate them and to build tables from a
//! fresh seed.

use super::MagicError;
use crate::masks::{occupancy_subset, ray_attacks, relevant_occupancy_mask, Slider};
use crate::rng::{XorShift32, DEFAULT_SEED};
use crate::Bitboard;
use board_core::Square;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Candidates tried per square before giving up.
pub const DEFAULT_ATTEMPT_LIMIT: u64 = 1_000_000_000;

/// Candidates whose spread into the top byte is weaker than this are skipped.
const MIN_HIGH_BYTE_BITS: u32 = 6;

/// Settings for a magic number search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Seed for the candidate generator.
    pub seed: u32,
    /// Candidates drawn per square before the search fails.
    pub max_attempts: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            seed: DEFAULT_SEED,
            max_attempts: DEFAULT_ATTEMPT_LIMIT,
        }
    }
}

/// Magic number search over a single candidate stream.
///
/// Successive calls draw from the same generator, so the result of a call
/// depends on every call made before it.
#[derive(Debug, Clone)]
pub struct MagicFinder {
    rng: XorShift32,
    max_attempts: u64,
}

impl MagicFinder {
    pub fn new(config: &SearchConfig) -> Self {
        MagicFinder {
            rng: XorShift32::new(config.seed),
            max_attempts: config.max_attempts,
        }
    }

    /// Finds a magic constant for `slider` on `sq`.
    ///
    /// A candidate is accepted once every occupancy subset of the relevant
    /// mask hashes to a slot that is either unused or already holds the same
    /// attack set.
    pub fn find(&mut self, slider: Slider, sq: Square) -> Result<u64, MagicError> {
        let mask = relevant_occupancy_mask(slider, sq);
        let bits = mask.count();
        let size = 1usize << bits;
        let shift = 64 - bits;

        let occupancies: Vec<Bitboard> = (0..size)
            .map(|index| occupancy_subset(index, bits, mask))
            .collect();
        let reference: Vec<Bitboard> = occupancies
            .iter()
            .map(|&occupancy| ray_attacks(slider, sq, occupancy))
            .collect();

        // A slot counts as used only if its epoch equals the current attempt,
        // so the table never has to be cleared between candidates.
        let mut used = vec![Bitboard::EMPTY; size];
        let mut epoch = vec![0u64; size];

        for attempt in 1..=self.max_attempts {
            let magic = self.rng.sparse_u64();

            if (mask.0.wrapping_mul(magic) & 0xFF00_0000_0000_0000).count_ones()
                < MIN_HIGH_BYTE_BITS
            {
                continue;
            }

            let mut collided = false;
            for (occupancy, attacks) in occupancies.iter().zip(&reference) {
                let index = (occupancy.0.wrapping_mul(magic) >> shift) as usize;
                if epoch[index] != attempt {
                    epoch[index] = attempt;
                    used[index] = *attacks;
                } else if used[index] != *attacks {
                    collided = true;
                    break;
                }
            }

            if !collided {
                debug!(%slider, square = %sq, attempt, magic, "magic found");
                return Ok(magic);
            }
        }

        Err(MagicError::Exhausted {
            slider,
            square: sq,
            attempts: self.max_attempts,
        })
    }

    /// Finds magics for every square, a8 first.
    pub fn find_all(&mut self, slider: Slider) -> Result<[u64; 64], MagicError> {
        let mut magics = [0u64; 64];
        for sq in Square::iter() {
            magics[sq.index() as usize] = self.find(slider, sq)?;
        }
        info!(%slider, "found magics for all squares");
        Ok(magics)
    }
}

impl Default for MagicFinder {
    fn default() -> Self {
        MagicFinder::new(&SearchConfig::default())
    }
}

/// Returns true if `magic` hashes every occupancy of `sq` without a
/// destructive collision.
pub fn verify_magic(slider: Slider, sq: Square, magic: u64) -> bool {
    super::MagicEntry::build(slider, sq, magic).is_ok()
}
