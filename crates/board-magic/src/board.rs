//! Board state: piece bitboards plus the rest of a FEN position.

use std::str::FromStr;

use board_core::{CastlingRights, Color, ColoredPiece, FenError, FenParser, Piece, Square};

use crate::{AttackTables, Bitboard};

const BOTH: usize = 2;

/// Complete board state.
///
/// The three occupancy bitboards are derived from the twelve piece
/// bitboards and recomputed by every method that changes placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    /// Bitboards for each colored piece, indexed by [`ColoredPiece::index`].
    pieces: [Bitboard; 12],

    /// White, black, and all occupied squares.
    occupancies: [Bitboard; 3],

    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,

    /// Halfmove clock for 50-move rule.
    halfmove_clock: u32,

    /// Fullmove number (starts at 1, increments after Black's move).
    fullmove_number: u32,
}

impl BoardState {
    /// Creates an empty board with White to move.
    pub fn empty() -> Self {
        BoardState {
            pieces: [Bitboard::EMPTY; 12],
            occupancies: [Bitboard::EMPTY; 3],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(FenParser::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a board from a FEN string.
    ///
    /// The string is fully validated before any bitboard is written.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        let mut board = BoardState::empty();

        for sq in Square::iter() {
            if let Some(cp) = parsed.placement[sq.index() as usize] {
                board.pieces[cp.index()].set(sq);
            }
        }
        board.update_occupancies();

        board.side_to_move = parsed.active_color;
        board.castling = parsed.castling;
        board.en_passant = parsed.en_passant;
        board.halfmove_clock = parsed.halfmove_clock;
        board.fullmove_number = parsed.fullmove_number;

        Ok(board)
    }

    /// Converts the board to a FEN string.
    pub fn to_fen(&self) -> String {
        let mut placement = [None; 64];
        for sq in Square::iter() {
            placement[sq.index() as usize] = self.piece_at(sq);
        }

        FenParser {
            placement,
            active_color: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
        .to_fen()
    }

    /// Recomputes the color and combined occupancies from the piece bitboards.
    fn update_occupancies(&mut self) {
        let mut white = Bitboard::EMPTY;
        let mut black = Bitboard::EMPTY;
        for cp in ColoredPiece::ALL {
            match cp.color() {
                Color::White => white |= self.pieces[cp.index()],
                Color::Black => black |= self.pieces[cp.index()],
            }
        }
        self.occupancies = [white, black, white | black];
    }

    /// Places a piece, replacing whatever stood on the square.
    pub fn put_piece(&mut self, cp: ColoredPiece, sq: Square) {
        for bb in &mut self.pieces {
            bb.clear(sq);
        }
        self.pieces[cp.index()].set(sq);
        self.update_occupancies();
    }

    /// Removes and returns the piece on the square, if any.
    pub fn remove_piece(&mut self, sq: Square) -> Option<ColoredPiece> {
        let cp = self.piece_at(sq)?;
        self.pieces[cp.index()].clear(sq);
        self.update_occupancies();
        Some(cp)
    }

    /// Returns the piece on the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        if !self.occupancies[BOTH].contains(sq) {
            return None;
        }
        ColoredPiece::ALL
            .into_iter()
            .find(|cp| self.pieces[cp.index()].contains(sq))
    }

    /// Returns the bitboard of one colored piece.
    #[inline]
    pub fn pieces(&self, cp: ColoredPiece) -> Bitboard {
        self.pieces[cp.index()]
    }

    /// Returns a bitboard of pieces of the given type and color.
    #[inline]
    pub fn pieces_of(&self, piece: Piece, color: Color) -> Bitboard {
        self.pieces[ColoredPiece::new(piece, color).index()]
    }

    /// Returns the squares occupied by one side.
    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupancies[color.index()]
    }

    /// Returns a bitboard of all occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupancies[BOTH]
    }

    /// Returns a bitboard of all empty squares.
    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Returns the square of the given side's king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(Piece::King, color).lsb()
    }

    /// Returns true if any piece of color `by` attacks `sq`.
    ///
    /// Pawns are found by looking up the attacks of an opposite-colored pawn
    /// on `sq`: those are exactly the squares a `by` pawn attacks it from.
    pub fn is_square_attacked(&self, tables: &AttackTables, sq: Square, by: Color) -> bool {
        let occupied = self.occupied();

        (tables.pawn_attacks(by.opposite(), sq) & self.pieces_of(Piece::Pawn, by)).is_not_empty()
            || (tables.knight_attacks(sq) & self.pieces_of(Piece::Knight, by)).is_not_empty()
            || (tables.bishop_attacks(sq, occupied) & self.pieces_of(Piece::Bishop, by))
                .is_not_empty()
            || (tables.rook_attacks(sq, occupied) & self.pieces_of(Piece::Rook, by)).is_not_empty()
            || (tables.queen_attacks(sq, occupied) & self.pieces_of(Piece::Queen, by))
                .is_not_empty()
            || (tables.king_attacks(sq) & self.pieces_of(Piece::King, by)).is_not_empty()
    }

    /// Returns every piece of color `by` that attacks `sq`.
    pub fn attackers_to(&self, tables: &AttackTables, sq: Square, by: Color) -> Bitboard {
        let occupied = self.occupied();
        let queens = self.pieces_of(Piece::Queen, by);

        (tables.pawn_attacks(by.opposite(), sq) & self.pieces_of(Piece::Pawn, by))
            | (tables.knight_attacks(sq) & self.pieces_of(Piece::Knight, by))
            | (tables.bishop_attacks(sq, occupied) & (self.pieces_of(Piece::Bishop, by) | queens))
            | (tables.rook_attacks(sq, occupied) & (self.pieces_of(Piece::Rook, by) | queens))
            | (tables.king_attacks(sq) & self.pieces_of(Piece::King, by))
    }

    /// Returns true if the side to move has its king attacked.
    pub fn in_check(&self, tables: &AttackTables) -> bool {
        match self.king_square(self.side_to_move) {
            Some(king) => self.is_square_attacked(tables, king, self.side_to_move.opposite()),
            None => false,
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::startpos()
    }
}

impl FromStr for BoardState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}
