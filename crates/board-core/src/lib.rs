//! Board vocabulary shared by the bitboard core.
//!
//! This crate provides the plain types every other layer talks in:
//! - [`Color`] for the two sides
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Piece`] and [`ColoredPiece`] for piece identity
//! - [`CastlingRights`] for the four castling flags
//! - FEN parsing and validation ([`FenParser`], [`FenError`])
//!
//! Squares are numbered from the top-left corner: a8 = 0, b8 = 1, ...,
//! h1 = 63. Bitboards built on top of this crate use the same numbering.

mod castling;
mod color;
mod fen;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use color::Color;
pub use fen::{FenError, FenParser};
pub use piece::{ColoredPiece, Piece};
pub use square::{File, Rank, Square};
