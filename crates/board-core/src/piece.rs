//! Chess piece representation.

use crate::Color;

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    /// All piece types in order.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Returns the index of this piece type (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase FEN letter for this piece type.
    const fn letter(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece of a specific color.
///
/// The discriminant is the board's bitboard ordinal: the six white pieces
/// (`P N B R Q K`) occupy 0-5 and the six black pieces (`p n b r q k`)
/// occupy 6-11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColoredPiece {
    WhitePawn = 0,
    WhiteKnight = 1,
    WhiteBishop = 2,
    WhiteRook = 3,
    WhiteQueen = 4,
    WhiteKing = 5,
    BlackPawn = 6,
    BlackKnight = 7,
    BlackBishop = 8,
    BlackRook = 9,
    BlackQueen = 10,
    BlackKing = 11,
}

impl ColoredPiece {
    /// Number of colored piece kinds.
    pub const NUM: usize = 12;

    /// All colored pieces in ordinal order.
    pub const ALL: [ColoredPiece; 12] = [
        ColoredPiece::WhitePawn,
        ColoredPiece::WhiteKnight,
        ColoredPiece::WhiteBishop,
        ColoredPiece::WhiteRook,
        ColoredPiece::WhiteQueen,
        ColoredPiece::WhiteKing,
        ColoredPiece::BlackPawn,
        ColoredPiece::BlackKnight,
        ColoredPiece::BlackBishop,
        ColoredPiece::BlackRook,
        ColoredPiece::BlackQueen,
        ColoredPiece::BlackKing,
    ];

    /// Combines a piece type and a color.
    #[inline]
    pub const fn new(piece: Piece, color: Color) -> Self {
        Self::ALL[color.index() * 6 + piece.index()]
    }

    /// Returns the ordinal (0-11).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the piece type.
    #[inline]
    pub const fn piece(self) -> Piece {
        Piece::ALL[self as usize % 6]
    }

    /// Returns the color.
    #[inline]
    pub const fn color(self) -> Color {
        if (self as u8) < 6 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Parses a FEN piece letter. Anything outside `PNBRQKpnbrqk` is rejected.
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let cp = match c {
            'P' => ColoredPiece::WhitePawn,
            'N' => ColoredPiece::WhiteKnight,
            'B' => ColoredPiece::WhiteBishop,
            'R' => ColoredPiece::WhiteRook,
            'Q' => ColoredPiece::WhiteQueen,
            'K' => ColoredPiece::WhiteKing,
            'p' => ColoredPiece::BlackPawn,
            'n' => ColoredPiece::BlackKnight,
            'b' => ColoredPiece::BlackBishop,
            'r' => ColoredPiece::BlackRook,
            'q' => ColoredPiece::BlackQueen,
            'k' => ColoredPiece::BlackKing,
            _ => return None,
        };
        Some(cp)
    }

    /// Returns the FEN letter (uppercase for White).
    pub const fn to_fen_char(self) -> char {
        let c = self.piece().letter();
        match self.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl std::fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_piece_to_fen() {
        assert_eq!(ColoredPiece::WhitePawn.to_fen_char(), 'P');
        assert_eq!(ColoredPiece::BlackPawn.to_fen_char(), 'p');
        assert_eq!(ColoredPiece::WhiteKing.to_fen_char(), 'K');
        assert_eq!(ColoredPiece::BlackKnight.to_fen_char(), 'n');
    }

    #[test]
    fn colored_piece_from_fen() {
        assert_eq!(
            ColoredPiece::from_fen_char('P'),
            Some(ColoredPiece::WhitePawn)
        );
        assert_eq!(
            ColoredPiece::from_fen_char('q'),
            Some(ColoredPiece::BlackQueen)
        );
        assert_eq!(ColoredPiece::from_fen_char('x'), None);
        assert_eq!(ColoredPiece::from_fen_char('1'), None);
        assert_eq!(ColoredPiece::from_fen_char('\u{e9}'), None);
    }

    #[test]
    fn fen_letters_roundtrip() {
        for cp in ColoredPiece::ALL {
            assert_eq!(ColoredPiece::from_fen_char(cp.to_fen_char()), Some(cp));
        }
    }

    #[test]
    fn ordinal_matches_piece_and_color() {
        for (i, cp) in ColoredPiece::ALL.iter().enumerate() {
            assert_eq!(cp.index(), i);
            assert_eq!(ColoredPiece::new(cp.piece(), cp.color()), *cp);
        }
        assert_eq!(ColoredPiece::new(Piece::Rook, Color::Black).index(), 9);
        assert_eq!(ColoredPiece::BlackKing.piece(), Piece::King);
        assert_eq!(ColoredPiece::BlackKing.color(), Color::Black);
    }
}
