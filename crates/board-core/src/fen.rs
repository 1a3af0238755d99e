//! FEN (Forsyth-Edwards Notation) parsing and serialization.

use crate::{CastlingRights, Color, ColoredPiece, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 to 6 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid piece placement: unexpected character '{ch}' in rank {rank}")]
    InvalidPieceChar { ch: char, rank: u8 },

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: unexpected character '{0}'")]
    InvalidCastlingRights(char),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Parsed and validated FEN data.
///
/// Every field is already typed; a value of this struct always describes
/// exactly 64 squares. The halfmove clock and fullmove number are optional
/// in the input and default to 0 and 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Piece on each square, indexed by [`Square::index`] (a8 first).
    pub placement: [Option<ColoredPiece>; 64],
    /// Side to move.
    pub active_color: Color,
    /// Castling availability.
    pub castling: CastlingRights,
    /// En passant target square.
    pub en_passant: Option<Square>,
    /// Halfmove clock (for 50-move rule)
    pub halfmove_clock: u32,
    /// Fullmove number
    pub fullmove_number: u32,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    ///
    /// The first four fields are required; the clocks may be omitted.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::InvalidFieldCount(parts.len()));
        }

        let placement = Self::parse_piece_placement(parts[0])?;

        let active_color = Color::from_fen(parts[1])
            .ok_or_else(|| FenError::InvalidActiveColor(parts[1].to_string()))?;

        let castling = Self::parse_castling(parts[2])?;
        let en_passant = Self::parse_en_passant(parts[3])?;

        let halfmove_clock = match parts.get(4) {
            Some(s) => s
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(s.to_string()))?,
            None => 0,
        };

        let fullmove_number = match parts.get(5) {
            Some(s) => s
                .parse::<u32>()
                .map_err(|_| FenError::InvalidFullmoveNumber(s.to_string()))?,
            None => 1,
        };

        Ok(FenParser {
            placement,
            active_color,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn parse_piece_placement(placement: &str) -> Result<[Option<ColoredPiece>; 64], FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut board = [None; 64];
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - row as u8;
            let mut file = 0usize;

            for c in rank_str.chars() {
                let (width, piece) = match c {
                    '1'..='8' => (c as usize - '0' as usize, None),
                    _ => match ColoredPiece::from_fen_char(c) {
                        Some(cp) => (1, Some(cp)),
                        None => return Err(FenError::InvalidPieceChar { ch: c, rank }),
                    },
                };

                if file + width > 8 {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "rank {} has more than 8 squares",
                        rank
                    )));
                }
                if let Some(cp) = piece {
                    board[row * 8 + file] = Some(cp);
                }
                file += width;
            }

            if file != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    rank, file
                )));
            }
        }

        Ok(board)
    }

    fn parse_castling(castling: &str) -> Result<CastlingRights, FenError> {
        if castling == "-" {
            return Ok(CastlingRights::NONE);
        }

        let mut flags = 0u8;
        for c in castling.chars() {
            match CastlingRights::flag_for_char(c) {
                Some(flag) if flags & flag == 0 => flags |= flag,
                _ => return Err(FenError::InvalidCastlingRights(c)),
            }
        }

        Ok(CastlingRights::new(flags))
    }

    fn parse_en_passant(ep: &str) -> Result<Option<Square>, FenError> {
        if ep == "-" {
            return Ok(None);
        }

        match Square::from_algebraic(ep) {
            Some(sq) if matches!(sq.rank().to_char(), '3' | '6') => Ok(Some(sq)),
            _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
        }
    }

    /// Converts the parsed FEN back to a six-field FEN string.
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for row in 0..8 {
            let mut empty_count = 0;
            for file in 0..8 {
                match self.placement[row * 8 + file] {
                    Some(cp) => {
                        if empty_count > 0 {
                            placement.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        placement.push(cp.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                placement.push_str(&empty_count.to_string());
            }
            if row < 7 {
                placement.push('/');
            }
        }

        let en_passant = match self.en_passant {
            Some(sq) => sq.to_algebraic(),
            None => "-".to_string(),
        };

        format!(
            "{} {} {} {} {} {}",
            placement,
            self.active_color.to_fen_char(),
            self.castling,
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl Default for FenParser {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}
