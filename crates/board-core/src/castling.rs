//! Castling rights.

use crate::Color;
use std::fmt;

/// Castling rights flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Creates new castling rights from flags.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    /// Returns the flag for a FEN castling letter (`K`, `Q`, `k`, `q`).
    pub const fn flag_for_char(c: char) -> Option<u8> {
        match c {
            'K' => Some(Self::WHITE_KINGSIDE),
            'Q' => Some(Self::WHITE_QUEENSIDE),
            'k' => Some(Self::BLACK_KINGSIDE),
            'q' => Some(Self::BLACK_QUEENSIDE),
            _ => None,
        }
    }

    /// Returns true if the given side can castle kingside.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        let flag = match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        };
        (self.0 & flag) != 0
    }

    /// Returns true if the given side can castle queenside.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        let flag = match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        };
        (self.0 & flag) != 0
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// Formats the rights as the FEN castling field (`KQkq`, `Kq`, `-`, ...).
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        for (flag, c) in [
            (Self::WHITE_KINGSIDE, 'K'),
            (Self::WHITE_QUEENSIDE, 'Q'),
            (Self::BLACK_KINGSIDE, 'k'),
            (Self::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.0 & flag != 0 {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castling_rights_all() {
        let rights = CastlingRights::ALL;
        assert!(rights.can_castle_kingside(Color::White));
        assert!(rights.can_castle_queenside(Color::White));
        assert!(rights.can_castle_kingside(Color::Black));
        assert!(rights.can_castle_queenside(Color::Black));
        assert_eq!(rights.to_string(), "KQkq");
    }

    #[test]
    fn castling_rights_none() {
        let rights = CastlingRights::NONE;
        assert!(!rights.can_castle_kingside(Color::White));
        assert!(!rights.can_castle_queenside(Color::Black));
        assert_eq!(rights.raw(), 0);
        assert_eq!(rights.to_string(), "-");
    }

    #[test]
    fn flags_are_independent() {
        let rights = CastlingRights::new(
            CastlingRights::WHITE_KINGSIDE | CastlingRights::BLACK_QUEENSIDE,
        );
        assert!(rights.can_castle_kingside(Color::White));
        assert!(!rights.can_castle_queenside(Color::White));
        assert!(!rights.can_castle_kingside(Color::Black));
        assert!(rights.can_castle_queenside(Color::Black));
        assert_eq!(rights.to_string(), "Kq");
    }

    #[test]
    fn flag_for_char() {
        assert_eq!(
            CastlingRights::flag_for_char('K'),
            Some(CastlingRights::WHITE_KINGSIDE)
        );
        assert_eq!(
            CastlingRights::flag_for_char('q'),
            Some(CastlingRights::BLACK_QUEENSIDE)
        );
        assert_eq!(CastlingRights::flag_for_char('x'), None);
        assert_eq!(CastlingRights::new(0xFF), CastlingRights::ALL);
    }
}
