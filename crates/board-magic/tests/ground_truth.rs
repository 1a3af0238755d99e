//! Integration tests comparing magic lookups against ray walking.
//!
//! Every relevant blocker subset of every square is checked, so a single bad
//! multiplier or a mis-sized table shows up here.

use board_core::Square;
use board_magic::magic::{BISHOP_MAGICS, ROOK_MAGICS};
use board_magic::masks::{occupancy_subset, ray_attacks, relevant_occupancy_mask, Subsets};
use board_magic::{AttackTables, Bitboard, MagicFinder, SearchConfig, Slider};

/// Asserts that `tables` agrees with ray walking for every subset of every mask.
fn assert_matches_ray_walk(tables: &AttackTables) {
    for slider in Slider::ALL {
        for sq in Square::iter() {
            let mask = relevant_occupancy_mask(slider, sq);
            for occupancy in Subsets::new(mask) {
                assert_eq!(
                    tables.slider_attacks(slider, sq, occupancy),
                    ray_attacks(slider, sq, occupancy),
                    "{} on {} with blockers {:#018x}",
                    slider,
                    sq,
                    occupancy.0
                );
            }
        }
    }
}

#[test]
fn test_shipped_tables_match_ray_walk() {
    let tables = AttackTables::new();
    assert_matches_ray_walk(&tables);
}

#[test]
fn test_irrelevant_blockers_do_not_change_attacks() {
    let tables = AttackTables::new();

    for slider in Slider::ALL {
        for sq in Square::iter() {
            let mask = relevant_occupancy_mask(slider, sq);
            let outside = !mask & !Bitboard::from_square(sq);
            let bits = mask.count();

            // A handful of subsets is enough; the exhaustive check lives above.
            for index in [0usize, 1, (1 << bits) - 1] {
                let occupancy = occupancy_subset(index, bits, mask);
                assert_eq!(
                    tables.slider_attacks(slider, sq, occupancy | outside),
                    tables.slider_attacks(slider, sq, occupancy),
                    "{} on {} should ignore blockers outside its mask",
                    slider,
                    sq
                );
            }
        }
    }
}

#[test]
fn test_queen_is_union_of_bishop_and_rook() {
    let tables = AttackTables::new();
    let occupied = Bitboard(0x0042_1800_2400_8100);

    for sq in Square::iter() {
        assert_eq!(
            tables.queen_attacks(sq, occupied),
            tables.bishop_attacks(sq, occupied) | tables.rook_attacks(sq, occupied)
        );
    }
}

#[test]
fn test_searched_bishop_magics_build_correct_tables() {
    let config = SearchConfig {
        seed: 42,
        ..SearchConfig::default()
    };
    let bishops = MagicFinder::new(&config)
        .find_all(Slider::Bishop)
        .expect("bishop search should succeed");

    let tables = AttackTables::from_magics(&bishops, &ROOK_MAGICS)
        .expect("searched magics should build tables");
    assert_matches_ray_walk(&tables);
}

#[test]
fn test_default_search_rebuilds_shipped_tables() {
    let tables =
        AttackTables::search(&SearchConfig::default()).expect("default search should succeed");
    assert_matches_ray_walk(&tables);

    for sq in Square::iter() {
        let i = sq.index() as usize;
        assert_eq!(tables.entry(Slider::Rook, sq).magic(), ROOK_MAGICS[i], "rook {}", sq);
        assert_eq!(tables.entry(Slider::Bishop, sq).magic(), BISHOP_MAGICS[i], "bishop {}", sq);
    }
}

#[test]
fn test_entries_expose_shipped_magics() {
    let tables = AttackTables::new();

    for sq in Square::iter() {
        let i = sq.index() as usize;

        let bishop = tables.entry(Slider::Bishop, sq);
        assert_eq!(bishop.magic(), BISHOP_MAGICS[i]);
        assert_eq!(bishop.mask(), relevant_occupancy_mask(Slider::Bishop, sq));
        assert_eq!(bishop.table_len(), 1 << Slider::Bishop.relevant_bits(sq));

        let rook = tables.entry(Slider::Rook, sq);
        assert_eq!(rook.magic(), ROOK_MAGICS[i]);
        assert_eq!(rook.shift(), 64 - Slider::Rook.relevant_bits(sq));
    }
}
