//! Magic-bitboard attack generation.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit square set with a8 as bit 0 and h1 as bit 63
//! - [`XorShift32`] - deterministic generator used to search for magic numbers
//! - [`masks`] - leaper masks, relevant occupancy masks and ray-walk attacks
//! - [`MagicFinder`] - search for multipliers that index slider attack tables
//! - [`AttackTables`] - constant-time attack lookup for every piece type
//! - [`BoardState`] - piece bitboards loaded from FEN plus attacked-square queries
//!
//! # Architecture
//!
//! Slider attacks depend on the pieces standing between the slider and the
//! board edge. A magic number maps every relevant blocker configuration of a
//! square onto a dense index by multiplication and shift, so a lookup costs a
//! mask, a multiply, a shift and a load. The tables are built once into an
//! [`AttackTables`] value and shared by reference afterwards.
//!
//! # Example
//!
//! ```
//! use board_core::{Color, Square};
//! use board_magic::{AttackTables, BoardState};
//!
//! let tables = AttackTables::new();
//! let board = BoardState::startpos();
//!
//! assert!(board.is_square_attacked(&tables, Square::F3, Color::White));
//! assert!(!board.is_square_attacked(&tables, Square::E4, Color::White));
//! ```

mod bitboard;
mod board;
pub mod magic;
pub mod masks;
mod rng;
mod tables;

pub use bitboard::{Bitboard, BitboardIter};
pub use board::BoardState;
pub use magic::{MagicEntry, MagicError, MagicFinder, SearchConfig};
pub use masks::Slider;
pub use rng::{XorShift32, DEFAULT_SEED};
pub use tables::AttackTables;
