use broadside::{
    is_fleet_sunk, place_ship, process_shot, Board, CellState, GameError, Orientation, ShipDef,
    ShotOutcome,
};

const DESTROYER: ShipDef = ShipDef::new(5, "Destroyer", 2);
const CRUISER: ShipDef = ShipDef::new(3, "Cruiser", 3);

#[test]
fn shot_on_water_is_a_miss() {
    let mut board = Board::new(10);
    assert_eq!(process_shot(&mut board, 4, 4).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.cell_state(4, 4), CellState::Miss);
}

/// The first shot hits; re-firing at the same cell is a
/// no-op that reports no hit and leaves the board unchanged.
#[test]
fn repeat_shot_is_idempotent() {
    let mut board = Board::new(10);
    place_ship(&mut board, &DESTROYER, 0, 0, Orientation::Horizontal).unwrap();

    let first = process_shot(&mut board, 0, 0).unwrap();
    assert!(first.is_hit());
    let after_first = board.clone();

    let second = process_shot(&mut board, 0, 0).unwrap();
    assert_eq!(second, ShotOutcome::Repeat);
    assert!(!second.is_hit());
    assert_eq!(board, after_first);

    // a resolved miss behaves the same way
    process_shot(&mut board, 5, 5).unwrap();
    let after_miss = board.clone();
    assert_eq!(process_shot(&mut board, 5, 5).unwrap(), ShotOutcome::Repeat);
    assert_eq!(board, after_miss);
}

/// The second hit on a size-2 ship sinks it and, when it
/// was the last ship afloat, reports the fleet as destroyed.
#[test]
fn sinking_the_last_ship_ends_the_fleet() {
    let mut board = Board::new(10);
    place_ship(&mut board, &DESTROYER, 0, 0, Orientation::Horizontal).unwrap();

    assert_eq!(
        process_shot(&mut board, 0, 0).unwrap(),
        ShotOutcome::Hit { sunk: None, fleet_sunk: false }
    );
    let outcome = process_shot(&mut board, 1, 0).unwrap();
    match outcome {
        ShotOutcome::Hit { sunk: Some(ship), fleet_sunk } => {
            assert_eq!(ship.id, 5);
            assert_eq!(ship.name, "Destroyer");
            assert!(fleet_sunk);
        }
        other => panic!("expected a sinking hit, got {:?}", other),
    }
    assert!(is_fleet_sunk(&board));
    let ship = board.ship(5).unwrap();
    assert_eq!(ship.hits(), ship.size());
    assert!(ship.is_sunk());
}

#[test]
fn sinking_one_of_two_ships_does_not_end_the_fleet() {
    let mut board = Board::new(10);
    place_ship(&mut board, &DESTROYER, 0, 0, Orientation::Horizontal).unwrap();
    place_ship(&mut board, &CRUISER, 0, 5, Orientation::Horizontal).unwrap();

    process_shot(&mut board, 0, 0).unwrap();
    let outcome = process_shot(&mut board, 1, 0).unwrap();
    match outcome {
        ShotOutcome::Hit { sunk: Some(ship), fleet_sunk } => {
            assert_eq!(ship.name, "Destroyer");
            assert!(!fleet_sunk);
        }
        other => panic!("expected a sinking hit, got {:?}", other),
    }
    assert!(!is_fleet_sunk(&board));
}

#[test]
fn out_of_bounds_shot_is_an_error() {
    let mut board = Board::new(7);
    assert_eq!(
        process_shot(&mut board, 7, 0),
        Err(GameError::OutOfBounds { x: 7, y: 0 })
    );
}

#[test]
fn empty_board_fleet_is_not_sunk() {
    let board = Board::new(10);
    assert!(!is_fleet_sunk(&board));
}
