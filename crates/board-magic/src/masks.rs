//! Attack masks computed directly from board geometry.
//!
//! Everything here is pure and works on single squares. Leaper masks are
//! `const fn` so the lookup tables can be filled at compile time; the slider
//! functions are the ray-casting ground truth that magic tables are built
//! from and checked against.

use crate::Bitboard;
use board_core::{Color, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sliding piece kind that owns a magic table.
///
/// Queens have no table of their own; their attacks are the union of both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    pub const ALL: [Slider; 2] = [Slider::Bishop, Slider::Rook];

    /// Ray directions as (row delta, column delta).
    const fn directions(self) -> [(i8, i8); 4] {
        match self {
            Slider::Bishop => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
            Slider::Rook => [(1, 0), (-1, 0), (0, 1), (0, -1)],
        }
    }
}

impl fmt::Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slider::Bishop => write!(f, "bishop"),
            Slider::Rook => write!(f, "rook"),
        }
    }
}

/// Squares attacked by a pawn of `color` standing on `sq`.
pub const fn pawn_attack_mask(color: Color, sq: Square) -> Bitboard {
    let bb = Bitboard::from_square(sq);
    match color {
        Color::White => Bitboard(bb.north_east().0 | bb.north_west().0),
        Color::Black => Bitboard(bb.south_east().0 | bb.south_west().0),
    }
}

/// Squares attacked by a knight on `sq`.
pub const fn knight_attack_mask(sq: Square) -> Bitboard {
    let bb = sq.bitboard();
    let mut attacks = 0u64;

    attacks |= (bb >> 15) & Bitboard::NOT_A_FILE.0; // up 2, right 1
    attacks |= (bb >> 17) & Bitboard::NOT_H_FILE.0; // up 2, left 1
    attacks |= (bb >> 6) & Bitboard::NOT_AB_FILE.0; // up 1, right 2
    attacks |= (bb >> 10) & Bitboard::NOT_GH_FILE.0; // up 1, left 2
    attacks |= (bb << 17) & Bitboard::NOT_A_FILE.0; // down 2, right 1
    attacks |= (bb << 15) & Bitboard::NOT_H_FILE.0; // down 2, left 1
    attacks |= (bb << 10) & Bitboard::NOT_AB_FILE.0; // down 1, right 2
    attacks |= (bb << 6) & Bitboard::NOT_GH_FILE.0; // down 1, left 2

    Bitboard(attacks)
}

/// Squares attacked by a king on `sq`.
pub const fn king_attack_mask(sq: Square) -> Bitboard {
    let bb = Bitboard::from_square(sq);
    Bitboard(
        bb.north().0
            | bb.south().0
            | bb.east().0
            | bb.west().0
            | bb.north_east().0
            | bb.north_west().0
            | bb.south_east().0
            | bb.south_west().0,
    )
}

#[inline]
fn square_bit(row: i8, col: i8) -> Bitboard {
    Bitboard(1u64 << (row * 8 + col))
}

/// Squares whose occupancy can change a slider's attacks from `sq`.
///
/// Each ray stops one square short of the board edge: a piece on the last
/// square of a ray blocks nothing beyond it.
pub fn relevant_occupancy_mask(slider: Slider, sq: Square) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    let (row, col) = (sq.row() as i8, sq.column() as i8);

    for (dr, dc) in slider.directions() {
        let mut r = row + dr;
        let mut c = col + dc;
        while (dr == 0 || (1..=6).contains(&r)) && (dc == 0 || (1..=6).contains(&c)) {
            mask |= square_bit(r, c);
            r += dr;
            c += dc;
        }
    }

    mask
}

/// Slider attacks from `sq` computed by walking each ray.
///
/// A ray includes the first occupied square it reaches and stops there.
/// Used to build and validate the magic tables.
pub fn ray_attacks(slider: Slider, sq: Square, occupancy: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    let (row, col) = (sq.row() as i8, sq.column() as i8);

    for (dr, dc) in slider.directions() {
        let mut r = row + dr;
        let mut c = col + dc;
        while (0..8).contains(&r) && (0..8).contains(&c) {
            let bit = square_bit(r, c);
            attacks |= bit;
            if (occupancy & bit).is_not_empty() {
                break;
            }
            r += dr;
            c += dc;
        }
    }

    attacks
}

/// Returns the `index`-th subset of `mask`.
///
/// Bit `n` of `index` selects the `n`-th lowest set square of `mask`; only
/// the first `bit_count` squares are considered.
pub fn occupancy_subset(index: usize, bit_count: u32, mask: Bitboard) -> Bitboard {
    let mut remaining = mask;
    let mut occupancy = Bitboard::EMPTY;

    for n in 0..bit_count {
        let Some(sq) = remaining.pop_lsb() else {
            break;
        };
        if index & (1 << n) != 0 {
            occupancy.set(sq);
        }
    }

    occupancy
}

/// Iterator over every subset of a mask, starting with the empty set.
///
/// Uses the carry-rippler step `next = (current - mask) & mask`.
pub struct Subsets {
    mask: Bitboard,
    next: Option<Bitboard>,
}

impl Subsets {
    pub fn new(mask: Bitboard) -> Self {
        Subsets {
            mask,
            next: Some(Bitboard::EMPTY),
        }
    }
}

impl Iterator for Subsets {
    type Item = Bitboard;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let following = Bitboard(current.0.wrapping_sub(self.mask.0) & self.mask.0);
        self.next = following.is_not_empty().then_some(following);
        Some(current)
    }
}
