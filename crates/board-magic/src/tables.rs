//! Attack table lookup for all piece types.
//!
//! [`AttackTables`] is built once and then only read. It owns every table the
//! queries need, so callers pass it around by shared reference instead of
//! reaching for process-wide statics.

use crate::magic::{MagicEntry, MagicError, MagicFinder, SearchConfig, BISHOP_MAGICS, ROOK_MAGICS};
use crate::masks::{king_attack_mask, knight_attack_mask, pawn_attack_mask, Slider};
use crate::Bitboard;
use board_core::{Color, Square};
use tracing::info;

/// Precomputed knight attack tables.
const KNIGHT_ATTACKS: [Bitboard; 64] = compute_knight_attacks();

/// Precomputed king attack tables.
const KING_ATTACKS: [Bitboard; 64] = compute_king_attacks();

/// Precomputed pawn attack tables [color][square].
const PAWN_ATTACKS: [[Bitboard; 64]; 2] = compute_pawn_attacks();

/// Stores all precomputed attack tables.
pub struct AttackTables {
    pawn: [[Bitboard; 64]; 2],
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
    /// Magic entries for bishops, indexed by square.
    bishop: Vec<MagicEntry>,
    /// Magic entries for rooks, indexed by square.
    rook: Vec<MagicEntry>,
}

impl AttackTables {
    /// Builds the tables from the shipped magic constants.
    pub fn new() -> Self {
        Self::from_magics(&BISHOP_MAGICS, &ROOK_MAGICS).expect("shipped magics are valid")
    }

    /// Builds the tables from the given magic constants.
    pub fn from_magics(bishop: &[u64; 64], rook: &[u64; 64]) -> Result<Self, MagicError> {
        Ok(AttackTables {
            pawn: PAWN_ATTACKS,
            knight: KNIGHT_ATTACKS,
            king: KING_ATTACKS,
            bishop: build_entries(Slider::Bishop, bishop)?,
            rook: build_entries(Slider::Rook, rook)?,
        })
    }

    /// Searches fresh magics and builds the tables from them.
    ///
    /// Rooks are searched before bishops, from one generator. With the
    /// default config this rebuilds the shipped constants.
    pub fn search(config: &SearchConfig) -> Result<Self, MagicError> {
        info!(seed = config.seed, max_attempts = config.max_attempts, "searching magics");
        let mut finder = MagicFinder::new(config);
        let rook = finder.find_all(Slider::Rook)?;
        let bishop = finder.find_all(Slider::Bishop)?;
        Self::from_magics(&bishop, &rook)
    }

    /// Returns bishop attacks for a square given occupied squares.
    #[inline]
    pub fn bishop_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.bishop[sq.index() as usize].attacks(occupied)
    }

    /// Returns rook attacks for a square given occupied squares.
    #[inline]
    pub fn rook_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.rook[sq.index() as usize].attacks(occupied)
    }

    /// Returns queen attacks (bishop + rook).
    #[inline]
    pub fn queen_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occupied) | self.rook_attacks(sq, occupied)
    }

    /// Returns slider attacks for either table.
    #[inline]
    pub fn slider_attacks(&self, slider: Slider, sq: Square, occupied: Bitboard) -> Bitboard {
        self.entry(slider, sq).attacks(occupied)
    }

    /// Returns knight attacks from the given square.
    #[inline]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.knight[sq.index() as usize]
    }

    /// Returns king attacks from the given square.
    #[inline]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.king[sq.index() as usize]
    }

    /// Returns pawn attacks from the given square for the given color.
    #[inline]
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        self.pawn[color.index()][sq.index() as usize]
    }

    /// Returns the magic entry backing a slider lookup.
    pub fn entry(&self, slider: Slider, sq: Square) -> &MagicEntry {
        match slider {
            Slider::Bishop => &self.bishop[sq.index() as usize],
            Slider::Rook => &self.rook[sq.index() as usize],
        }
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        Self::new()
    }
}

fn build_entries(slider: Slider, magics: &[u64; 64]) -> Result<Vec<MagicEntry>, MagicError> {
    Square::iter()
        .map(|sq| MagicEntry::build(slider, sq, magics[sq.index() as usize]))
        .collect()
}

/// Computes knight attacks for all squares at compile time.
const fn compute_knight_attacks() -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut i = 0u8;

    while i < 64 {
        if let Some(sq) = Square::from_index(i) {
            attacks[i as usize] = knight_attack_mask(sq);
        }
        i += 1;
    }

    attacks
}

/// Computes king attacks for all squares at compile time.
const fn compute_king_attacks() -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut i = 0u8;

    while i < 64 {
        if let Some(sq) = Square::from_index(i) {
            attacks[i as usize] = king_attack_mask(sq);
        }
        i += 1;
    }

    attacks
}

/// Computes pawn attacks for all squares at compile time.
const fn compute_pawn_attacks() -> [[Bitboard; 64]; 2] {
    let mut attacks = [[Bitboard::EMPTY; 64]; 2];
    let mut i = 0u8;

    while i < 64 {
        if let Some(sq) = Square::from_index(i) {
            attacks[0][i as usize] = pawn_attack_mask(Color::White, sq);
            attacks[1][i as usize] = pawn_attack_mask(Color::Black, sq);
        }
        i += 1;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bishop_attacks_empty_board() {
        let tables = AttackTables::new();
        // D4 bishop on empty board attacks 13 squares
        assert_eq!(tables.bishop_attacks(Square::D4, Bitboard::EMPTY).count(), 13);
    }

    #[test]
    fn rook_attacks_empty_board() {
        let tables = AttackTables::new();
        // D4 rook on empty board attacks 14 squares
        assert_eq!(tables.rook_attacks(Square::D4, Bitboard::EMPTY).count(), 14);
    }

    #[test]
    fn queen_attacks_empty_board() {
        let tables = AttackTables::new();
        // D4 queen on empty board attacks 27 squares
        assert_eq!(tables.queen_attacks(Square::D4, Bitboard::EMPTY).count(), 27);
    }

    #[test]
    fn bishop_attacks_with_blockers() {
        let tables = AttackTables::new();
        let blockers = Bitboard::from_square(Square::E5) | Bitboard::from_square(Square::C3);
        let attacks = tables.bishop_attacks(Square::D4, blockers);
        // Should include e5 and c3 (captures) but not beyond
        assert!(attacks.contains(Square::E5));
        assert!(attacks.contains(Square::C3));
        assert!(!attacks.contains(Square::F6));
        assert!(!attacks.contains(Square::B2));
    }

    #[test]
    fn rook_attacks_with_blockers() {
        let tables = AttackTables::new();
        let blockers = Bitboard::from_square(Square::D6);
        let attacks = tables.rook_attacks(Square::D4, blockers);
        assert!(attacks.contains(Square::D6));
        assert!(!attacks.contains(Square::D7));
        assert_eq!(
            tables.slider_attacks(Slider::Rook, Square::D4, blockers),
            attacks
        );
    }

    #[test]
    fn corner_sliders() {
        let tables = AttackTables::new();
        assert_eq!(tables.bishop_attacks(Square::A1, Bitboard::EMPTY).count(), 7);
        assert_eq!(tables.rook_attacks(Square::A1, Bitboard::EMPTY).count(), 14);
        assert_eq!(tables.rook_attacks(Square::H8, Bitboard::FULL).count(), 2);
    }

    #[test]
    fn leaper_lookups() {
        let tables = AttackTables::new();
        assert_eq!(tables.knight_attacks(Square::D4).count(), 8);
        assert_eq!(tables.knight_attacks(Square::A1).count(), 2);
        assert_eq!(tables.king_attacks(Square::E1).count(), 5);
        assert_eq!(tables.pawn_attacks(Color::White, Square::E2).count(), 2);
        assert!(tables.pawn_attacks(Color::White, Square::E2).contains(Square::D3));
        assert!(tables.pawn_attacks(Color::Black, Square::E7).contains(Square::F6));
    }

    #[test]
    fn leaper_tables_match_masks() {
        let tables = AttackTables::new();
        for sq in Square::iter() {
            assert_eq!(tables.knight_attacks(sq), knight_attack_mask(sq));
            assert_eq!(tables.king_attacks(sq), king_attack_mask(sq));
            for color in Color::ALL {
                assert_eq!(tables.pawn_attacks(color, sq), pawn_attack_mask(color, sq));
            }
        }
    }

    #[test]
    fn table_sizes_are_bounded() {
        let tables = AttackTables::new();
        for sq in Square::iter() {
            let bishop = tables.entry(Slider::Bishop, sq);
            let rook = tables.entry(Slider::Rook, sq);
            assert!(bishop.table_len() <= 512);
            assert!(rook.table_len() <= 4096);
            assert_eq!(bishop.table_len(), 1 << Slider::Bishop.relevant_bits(sq));
            assert_eq!(rook.table_len(), 1 << Slider::Rook.relevant_bits(sq));
        }
    }

    #[test]
    fn bad_magic_is_reported() {
        let mut rook = ROOK_MAGICS;
        rook[Square::C5.index() as usize] = 1;
        assert!(matches!(
            AttackTables::from_magics(&BISHOP_MAGICS, &rook),
            Err(MagicError::Collision { slider: Slider::Rook, square: Square::C5, .. })
        ));
    }

    #[test]
    fn tables_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AttackTables>();
    }
}
