//! Magic bitboard tables for sliding piece attack generation.
//!
//! Magic bitboards use a perfect hashing technique to map blocker configurations
//! to precomputed attack bitboards in O(1) time: the relevant blockers are
//! multiplied by a per-square constant and the top bits of the product index a
//! dense table.

mod constants;
mod finder;

pub use constants::{BISHOP_MAGICS, BISHOP_RELEVANT_BITS, ROOK_MAGICS, ROOK_RELEVANT_BITS};
pub use finder::{verify_magic, MagicFinder, SearchConfig, DEFAULT_ATTEMPT_LIMIT};

use crate::masks::{ray_attacks, relevant_occupancy_mask, Slider, Subsets};
use crate::Bitboard;
use board_core::Square;
use thiserror::Error;

/// Errors raised while searching for or loading magic numbers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MagicError {
    /// No candidate survived within the attempt limit.
    #[error("no {slider} magic found for {square} after {attempts} attempts")]
    Exhausted {
        slider: Slider,
        square: Square,
        attempts: u64,
    },

    /// The constant maps two blocker sets with different attacks to one slot.
    #[error("{slider} magic {magic:#018x} collides on {square}")]
    Collision {
        slider: Slider,
        square: Square,
        magic: u64,
    },
}

impl Slider {
    /// Fixed number of relevant occupancy bits for this slider on `sq`.
    #[inline]
    pub const fn relevant_bits(self, sq: Square) -> u8 {
        match self {
            Slider::Bishop => BISHOP_RELEVANT_BITS[sq.index() as usize],
            Slider::Rook => ROOK_RELEVANT_BITS[sq.index() as usize],
        }
    }
}

/// Magic entry for a single square.
#[derive(Clone)]
pub struct MagicEntry {
    /// Mask of relevant blocker squares (excludes edges).
    mask: Bitboard,
    /// The magic number for this square.
    magic: u64,
    /// Right shift amount (64 - number of bits in mask).
    shift: u8,
    /// Attack sets, `2^(64 - shift)` entries.
    attacks: Box<[Bitboard]>,
}

impl MagicEntry {
    /// Builds the attack table for `sq` with an accepted magic constant.
    ///
    /// Every subset of the relevant mask is hashed and the ray-cast attack
    /// set stored at its slot. Fails if two subsets with different attacks
    /// land on the same slot.
    pub fn build(slider: Slider, sq: Square, magic: u64) -> Result<Self, MagicError> {
        let mask = relevant_occupancy_mask(slider, sq);
        let bits = mask.count();
        let shift = (64 - bits) as u8;
        let mut slots: Vec<Option<Bitboard>> = vec![None; 1 << bits];

        for blockers in Subsets::new(mask) {
            let attacks = ray_attacks(slider, sq, blockers);
            let index = magic_index(blockers, mask, magic, shift);
            match slots[index] {
                None => slots[index] = Some(attacks),
                Some(existing) if existing == attacks => {}
                Some(_) => {
                    return Err(MagicError::Collision {
                        slider,
                        square: sq,
                        magic,
                    })
                }
            }
        }

        let attacks = slots
            .into_iter()
            .map(|slot| slot.unwrap_or(Bitboard::EMPTY))
            .collect();

        Ok(MagicEntry {
            mask,
            magic,
            shift,
            attacks,
        })
    }

    /// Computes the table index for a given blocker configuration.
    #[inline]
    pub fn index(&self, occupied: Bitboard) -> usize {
        magic_index(occupied, self.mask, self.magic, self.shift)
    }

    /// Returns the attacks for the given board occupancy.
    #[inline]
    pub fn attacks(&self, occupied: Bitboard) -> Bitboard {
        self.attacks[self.index(occupied)]
    }

    #[inline]
    pub fn mask(&self) -> Bitboard {
        self.mask
    }

    #[inline]
    pub fn magic(&self) -> u64 {
        self.magic
    }

    #[inline]
    pub fn shift(&self) -> u8 {
        self.shift
    }

    /// Number of slots in the attack table.
    #[inline]
    pub fn table_len(&self) -> usize {
        self.attacks.len()
    }
}

impl std::fmt::Debug for MagicEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MagicEntry")
            .field("mask", &format_args!("{:#018x}", self.mask.0))
            .field("magic", &format_args!("{:#018x}", self.magic))
            .field("shift", &self.shift)
            .field("table_len", &self.attacks.len())
            .finish()
    }
}

#[inline]
fn magic_index(occupied: Bitboard, mask: Bitboard, magic: u64, shift: u8) -> usize {
    let relevant = occupied & mask;
    (relevant.0.wrapping_mul(magic) >> shift) as usize
}
