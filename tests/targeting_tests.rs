use broadside::{
    place_ship, process_shot, select_target, Board, GameError, Orientation, ShipDef,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const CRUISER: ShipDef = ShipDef::new(3, "Cruiser", 3);
const CARRIER: ShipDef = ShipDef::new(1, "Carrier", 5);
const DESTROYER: ShipDef = ShipDef::new(5, "Destroyer", 2);

/// One live hit: the next shot must probe an orthogonal, unresolved,
/// in-bounds neighbor.
#[test]
fn single_live_hit_probes_a_neighbor() {
    for seed in 0..50 {
        let mut board = Board::new(10);
        place_ship(&mut board, &CRUISER, 5, 5, Orientation::Horizontal).unwrap();
        process_shot(&mut board, 5, 5).unwrap();

        let mut rng = SmallRng::seed_from_u64(seed);
        let target = select_target(&board, &mut rng).unwrap();
        assert!(
            [(4, 5), (6, 5), (5, 4), (5, 6)].contains(&target),
            "expected an orthogonal neighbor of (5, 5), got {:?}",
            target
        );
    }
}

#[test]
fn horizontal_line_extends_past_the_high_end_first() {
    let mut board = Board::new(10);
    place_ship(&mut board, &CARRIER, 2, 5, Orientation::Horizontal).unwrap();
    process_shot(&mut board, 3, 5).unwrap();
    process_shot(&mut board, 4, 5).unwrap();

    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(select_target(&board, &mut rng).unwrap(), (5, 5));
}

#[test]
fn horizontal_line_falls_back_to_the_low_end_at_the_edge() {
    let mut board = Board::new(10);
    place_ship(&mut board, &CRUISER, 7, 5, Orientation::Horizontal).unwrap();
    process_shot(&mut board, 8, 5).unwrap();
    process_shot(&mut board, 9, 5).unwrap();

    // high end would be x = 10, out of bounds
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(select_target(&board, &mut rng).unwrap(), (7, 5));
}

#[test]
fn vertical_line_extends_along_its_axis() {
    let mut board = Board::new(10);
    place_ship(&mut board, &CRUISER, 3, 2, Orientation::Vertical).unwrap();
    process_shot(&mut board, 3, 3).unwrap();
    process_shot(&mut board, 3, 4).unwrap();

    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(select_target(&board, &mut rng).unwrap(), (3, 5));
}

#[test]
fn high_end_miss_redirects_to_the_low_end() {
    let mut board = Board::new(10);
    place_ship(&mut board, &CRUISER, 2, 5, Orientation::Horizontal).unwrap();
    process_shot(&mut board, 3, 5).unwrap();
    process_shot(&mut board, 4, 5).unwrap();
    // resolve the cell past the high end as a miss
    process_shot(&mut board, 5, 5).unwrap();

    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(select_target(&board, &mut rng).unwrap(), (2, 5));
}

#[test]
fn sunk_ship_hits_are_not_live() {
    let mut board = Board::new(10);
    place_ship(&mut board, &DESTROYER, 0, 0, Orientation::Horizontal).unwrap();
    place_ship(&mut board, &CRUISER, 5, 5, Orientation::Horizontal).unwrap();
    process_shot(&mut board, 0, 0).unwrap();
    process_shot(&mut board, 1, 0).unwrap();

    // the destroyer is sunk, so targeting must not orbit its cells
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let target = select_target(&board, &mut rng).unwrap();
        assert!(
            !board.cell_state(target.0, target.1).is_resolved(),
            "target {:?} was already resolved",
            target
        );
    }
}

#[test]
fn search_picks_an_unresolved_cell() {
    let mut board = Board::new(7);
    place_ship(&mut board, &DESTROYER, 0, 0, Orientation::Horizontal).unwrap();
    // resolve a scattering of cells without wounding the ship
    for &(x, y) in &[(3, 3), (4, 4), (5, 5), (6, 6), (2, 5)] {
        process_shot(&mut board, x, y).unwrap();
    }
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (x, y) = select_target(&board, &mut rng).unwrap();
        assert!(!board.cell_state(x, y).is_resolved());
    }
}

#[test]
fn exhausted_board_is_an_error() {
    let mut board = Board::new(5);
    place_ship(&mut board, &DESTROYER, 0, 0, Orientation::Horizontal).unwrap();
    for y in 0..5 {
        for x in 0..5 {
            process_shot(&mut board, x, y).unwrap();
        }
    }
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(select_target(&board, &mut rng), Err(GameError::BoardExhausted));
}
