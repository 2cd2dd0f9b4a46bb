//! Behavioural properties of the move engine, player and checker together.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use facetcube::moves::{apply, apply_all};
use facetcube::{
    Algorithm, AlgorithmPlayer, Face, FacetPermutation, Move, SolvabilityChecker,
};

fn random_move(rng: &mut StdRng) -> Move {
    let face = Face::TURNABLE[rng.gen_range(0..Face::TURNABLE.len())];
    match rng.gen_range(0..3) {
        0 => Move::new(face),
        1 => Move::inverted(face),
        _ => Move::double(face),
    }
}

fn random_algorithm(rng: &mut StdRng, len: usize) -> Algorithm {
    Algorithm::from((0..len).map(|_| random_move(rng)).collect::<Vec<_>>())
}

fn assert_legal_looking(cube: &FacetPermutation, context: &str) {
    let checker = SolvabilityChecker::new(cube);
    assert!(checker.has_correct_unique_facets(), "{context}: facets");
    assert!(checker.has_correct_edges(), "{context}: edges");
    assert!(checker.has_correct_corners(), "{context}: corners");
    assert!(checker.has_orientable_edges(), "{context}: edge flips");
    assert!(checker.has_orientable_corners(), "{context}: corner twists");
}

#[test_log::test]
fn random_sequences_keep_every_invariant() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for trial in 0..200 {
        let algorithm = random_algorithm(&mut rng, 30);
        let mut cube = FacetPermutation::solved();
        apply_all(&mut cube, &algorithm).unwrap();

        assert!(FacetPermutation::from_facets(*cube.facets()).is_ok());
        assert_legal_looking(&cube, &format!("trial {trial} ({algorithm})"));
    }
}

#[test_log::test]
fn every_move_is_undone_by_its_reversal() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut cube = FacetPermutation::solved();
    apply_all(&mut cube, &random_algorithm(&mut rng, 25)).unwrap();
    let start = cube;

    for face in Face::TURNABLE {
        for turn in [Move::new(face), Move::inverted(face), Move::double(face)] {
            apply(&mut cube, turn, false).unwrap();
            assert_ne!(cube, start, "{turn} should change a scrambled cube");
            apply(&mut cube, turn, true).unwrap();
            assert_eq!(cube, start, "{turn} was not undone");
        }
    }
}

#[test_log::test]
fn turns_have_the_expected_order_from_any_state() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut cube = FacetPermutation::solved();
    apply_all(&mut cube, &random_algorithm(&mut rng, 25)).unwrap();
    let start = cube;

    for face in Face::TURNABLE {
        for _ in 0..4 {
            cube.turn(Move::new(face)).unwrap();
        }
        assert_eq!(cube, start, "{face} four times");

        for _ in 0..2 {
            cube.turn(Move::double(face)).unwrap();
        }
        assert_eq!(cube, start, "{face}2 twice");
    }
}

#[test_log::test]
fn stepping_agrees_with_direct_application() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let algorithm = random_algorithm(&mut rng, 15);

        let mut direct = FacetPermutation::solved();
        apply_all(&mut direct, &algorithm).unwrap();

        let mut cube = FacetPermutation::solved();
        let mut player = AlgorithmPlayer::new(algorithm.clone(), &mut cube);
        for _ in 0..algorithm.len() {
            player.step().unwrap();
        }
        assert!(player.is_finished());
        assert_eq!(*player.cube(), direct, "stepping {algorithm}");

        for _ in 0..algorithm.len() {
            player.step_back().unwrap();
        }
        assert_eq!(player.cursor(), 0);
        assert!(player.cube().is_solved(), "rewinding {algorithm}");
    }
}

#[test_log::test]
fn splitting_a_piece_breaks_rigidity() {
    let mut cube = FacetPermutation::solved();
    apply_all(&mut cube, &"R U F' D2".parse::<Algorithm>().unwrap()).unwrap();
    assert_legal_looking(&cube, "before the split");

    // trade one sticker of the UB slot with a sticker of the DR slot
    cube.cycle(&[1, 30]).unwrap();
    let checker = SolvabilityChecker::new(&cube);
    assert!(checker.has_correct_unique_facets());
    assert!(!checker.has_correct_edges() || !checker.has_correct_corners());
}

#[test_log::test]
fn edge_orientation_parity_tracks_raw_swaps() {
    let mut cube = FacetPermutation::solved();
    assert!(SolvabilityChecker::new(&cube).has_orientable_edges());

    // the UB key facet moves onto the UL slot's partner position
    cube.cycle(&[1, 9]).unwrap();
    assert!(!SolvabilityChecker::new(&cube).has_orientable_edges());

    // a second, unrelated key facet leaves its key position
    cube.cycle(&[4, 30]).unwrap();
    assert!(SolvabilityChecker::new(&cube).has_orientable_edges());
}

#[test_log::test]
fn repeated_execute_then_l_and_r() {
    let mut cube = FacetPermutation::solved();
    let algorithm: Algorithm = "R U R' U R U2 R'".parse().unwrap();

    let mut player = AlgorithmPlayer::new(algorithm, &mut cube);
    player.execute().unwrap();
    // the cursor is already at the end, so this plays nothing
    player.execute().unwrap();
    assert!(player.is_finished());

    cube.turn("L".parse().unwrap()).unwrap();
    cube.turn("R".parse().unwrap()).unwrap();
    info!("final state: {:?}", cube.facets());

    insta::assert_snapshot!(
        format!("{:?}", cube.facets()),
        @"[47, 4, 8, 44, 20, 24, 6, 23, 13, 11, 7, 14, 41, 15, 12, 40, 18, 17, 34, 1, 36, 26, 22, 39, 29, 27, 0, 30, 9, 31, 28, 10, 2, 33, 45, 19, 43, 21, 38, 16, 42, 25, 37, 3, 35, 5, 46, 32]"
    );

    let checker = SolvabilityChecker::new(&cube);
    assert!(checker.has_orientable_edges());
    assert!(checker.has_orientable_corners());
}

#[test_log::test]
fn raw_swap_keeps_facets_unique_but_breaks_edges() {
    let mut cube = FacetPermutation::solved();
    cube.cycle(&[1, 2]).unwrap();
    let checker = SolvabilityChecker::new(&cube);
    assert!(checker.has_correct_unique_facets());
    assert!(!checker.has_correct_edges());
}
