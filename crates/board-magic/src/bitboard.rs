//! Bitboard representation and operations.
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the
//! chess board. This allows efficient parallel operations on multiple squares.

use board_core::Square;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A 64-bit board representation.
///
/// Bit 0 = a8, bit 7 = h8, bit 56 = a1, bit 63 = h1 (same numbering as
/// [`Square`]). Shifting right by 8 moves every square one rank toward
/// rank 8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// Empty bitboard (no squares set).
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Full bitboard (all squares set).
    pub const FULL: Bitboard = Bitboard(!0);

    // File masks
    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_B: Bitboard = Bitboard(0x0202_0202_0202_0202);
    pub const FILE_G: Bitboard = Bitboard(0x4040_4040_4040_4040);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    // Wrap guards for leaper shifts
    pub const NOT_A_FILE: Bitboard = Bitboard(!Self::FILE_A.0);
    pub const NOT_H_FILE: Bitboard = Bitboard(!Self::FILE_H.0);
    pub const NOT_AB_FILE: Bitboard = Bitboard(!(Self::FILE_A.0 | Self::FILE_B.0));
    pub const NOT_GH_FILE: Bitboard = Bitboard(!(Self::FILE_G.0 | Self::FILE_H.0));

    // Rank masks
    pub const RANK_8: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_7: Bitboard = Bitboard(0x0000_0000_0000_FF00);
    pub const RANK_2: Bitboard = Bitboard(0x00FF_0000_0000_0000);
    pub const RANK_1: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    /// The outer ring of the board.
    pub const EDGES: Bitboard =
        Bitboard(Self::FILE_A.0 | Self::FILE_H.0 | Self::RANK_1.0 | Self::RANK_8.0);

    /// Creates a bitboard from a raw u64.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Creates a bitboard with a single square set.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1u64 << sq.index())
    }

    /// Returns true if the bitboard is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the bitboard is not empty.
    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// Returns the number of set bits (population count).
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    /// Sets the given square.
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    /// Clears the given square.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1u64 << sq.index());
    }

    /// Toggles the given square.
    #[inline]
    pub fn toggle(&mut self, sq: Square) {
        self.0 ^= 1u64 << sq.index();
    }

    /// Returns the least significant set square.
    /// Returns None if the bitboard is empty.
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        Square::from_index(self.0.trailing_zeros() as u8)
    }

    /// Pops and returns the least significant bit.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let sq = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1; // Clear the LSB
            Some(unsafe { Square::from_index_unchecked(sq) })
        }
    }

    /// Shifts the bitboard north (toward rank 8).
    #[inline]
    pub const fn north(self) -> Bitboard {
        Bitboard(self.0 >> 8)
    }

    /// Shifts the bitboard south (toward rank 1).
    #[inline]
    pub const fn south(self) -> Bitboard {
        Bitboard(self.0 << 8)
    }

    /// Shifts the bitboard east (toward file H).
    #[inline]
    pub const fn east(self) -> Bitboard {
        Bitboard((self.0 << 1) & Self::NOT_A_FILE.0)
    }

    /// Shifts the bitboard west (toward file A).
    #[inline]
    pub const fn west(self) -> Bitboard {
        Bitboard((self.0 >> 1) & Self::NOT_H_FILE.0)
    }

    /// Shifts the bitboard northeast.
    #[inline]
    pub const fn north_east(self) -> Bitboard {
        Bitboard((self.0 >> 7) & Self::NOT_A_FILE.0)
    }

    /// Shifts the bitboard northwest.
    #[inline]
    pub const fn north_west(self) -> Bitboard {
        Bitboard((self.0 >> 9) & Self::NOT_H_FILE.0)
    }

    /// Shifts the bitboard southeast.
    #[inline]
    pub const fn south_east(self) -> Bitboard {
        Bitboard((self.0 << 9) & Self::NOT_A_FILE.0)
    }

    /// Shifts the bitboard southwest.
    #[inline]
    pub const fn south_west(self) -> Bitboard {
        Bitboard((self.0 << 7) & Self::NOT_H_FILE.0)
    }
}

macro_rules! impl_bit_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $sym:tt) => {
        impl $op for Bitboard {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Bitboard(self.0 $sym rhs.0)
            }
        }

        impl $assign for Bitboard {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Self {
        Bitboard::from_square(sq)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard({:#018x})", self.0)?;
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for file in 0..8 {
                let sq = row * 8 + file;
                if (self.0 >> sq) & 1 == 1 {
                    write!(f, "X ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

/// Iterator over set squares in a bitboard.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIter(self)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Bitboard::EMPTY, |bb, sq| bb | Bitboard::from_square(sq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bitboard_from_square() {
        let bb = Bitboard::from_square(Square::A8);
        assert_eq!(bb.0, 1);
        assert!(bb.contains(Square::A8));
        assert!(!bb.contains(Square::B8));
        assert_eq!(Bitboard::from(Square::H1).0, 1 << 63);
    }

    #[test]
    fn bitboard_count() {
        assert_eq!(Bitboard::EMPTY.count(), 0);
        assert_eq!(Bitboard::FULL.count(), 64);
        assert_eq!(Bitboard::FILE_A.count(), 8);
        assert_eq!(Bitboard::RANK_1.count(), 8);
        assert_eq!(Bitboard::EDGES.count(), 28);
    }

    #[test]
    fn rank_masks_follow_square_numbering() {
        assert!(Bitboard::RANK_8.contains(Square::A8));
        assert!(Bitboard::RANK_1.contains(Square::H1));
        assert!(Bitboard::RANK_2.contains(Square::E2));
        assert!(Bitboard::RANK_7.contains(Square::E7));
        assert!(Bitboard::FILE_H.contains(Square::H4));
        assert!(!Bitboard::NOT_AB_FILE.contains(Square::B5));
        assert!(!Bitboard::NOT_GH_FILE.contains(Square::G5));
    }

    #[test]
    fn set_clear_toggle() {
        let mut bb = Bitboard::EMPTY;
        bb.set(Square::E4);
        assert!(bb.contains(Square::E4));
        bb.toggle(Square::D4);
        assert_eq!(bb.count(), 2);
        bb.clear(Square::E4);
        assert!(!bb.contains(Square::E4));
        bb.toggle(Square::D4);
        assert!(bb.is_empty());
    }

    #[test]
    fn bitboard_shifts() {
        let e4 = Bitboard::from_square(Square::E4);
        assert_eq!(e4.north(), Bitboard::from_square(Square::E5));
        assert_eq!(e4.south(), Bitboard::from_square(Square::E3));
        assert_eq!(e4.east(), Bitboard::from_square(Square::F4));
        assert_eq!(e4.west(), Bitboard::from_square(Square::D4));
        assert_eq!(e4.north_east(), Bitboard::from_square(Square::F5));
        assert_eq!(e4.north_west(), Bitboard::from_square(Square::D5));
        assert_eq!(e4.south_east(), Bitboard::from_square(Square::F3));
        assert_eq!(e4.south_west(), Bitboard::from_square(Square::D3));
    }

    #[test]
    fn shifts_do_not_wrap() {
        let h4 = Bitboard::from_square(Square::H4);
        assert!(h4.east().is_empty());
        assert!(h4.north_east().is_empty());
        let a4 = Bitboard::from_square(Square::A4);
        assert!(a4.west().is_empty());
        assert!(a4.south_west().is_empty());
        assert!(Bitboard::RANK_8.north().is_empty());
        assert!(Bitboard::RANK_1.south().is_empty());
    }

    #[test]
    fn bitboard_iterator() {
        let bb = Bitboard::FILE_A;
        let squares: Vec<Square> = bb.into_iter().collect();
        assert_eq!(squares.len(), 8);
        assert_eq!(squares[0], Square::A8);
        assert_eq!(squares[7], Square::A1);
        assert_eq!(squares.into_iter().collect::<Bitboard>(), Bitboard::FILE_A);
    }

    #[test]
    fn bitboard_pop_lsb() {
        let mut bb = Bitboard::new(0b1010);
        assert_eq!(bb.lsb(), Some(Square::B8));
        assert_eq!(bb.pop_lsb().map(|s| s.index()), Some(1));
        assert_eq!(bb.pop_lsb().map(|s| s.index()), Some(3));
        assert_eq!(bb.pop_lsb(), None);
        assert_eq!(bb.lsb(), None);
    }

    proptest! {
        #[test]
        fn iteration_visits_each_bit_once(bits in any::<u64>()) {
            let bb = Bitboard(bits);
            let squares: Vec<Square> = bb.into_iter().collect();
            prop_assert_eq!(squares.len() as u32, bb.count());
            prop_assert!(squares.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(squares.into_iter().collect::<Bitboard>(), bb);
        }

        #[test]
        fn lsb_is_lowest_member(bits in 1u64..) {
            let bb = Bitboard(bits);
            let sq = bb.lsb().unwrap();
            prop_assert!(bb.contains(sq));
            prop_assert_eq!(Bitboard(bits & (Bitboard::from_square(sq).0 - 1)), Bitboard::EMPTY);
        }
    }
}
