use broadside::{place_fleet_randomly, process_shot, Board, CellState, FleetConfig, ShotOutcome};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_board(fleet: &FleetConfig, seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(fleet.board_size());
    place_fleet_randomly(&mut board, fleet, &mut rng).unwrap();
    board
}

fn shoot_randomly(board: &mut Board, seed: u64, shots: usize) {
    let mut rng = SmallRng::seed_from_u64(seed);
    for _ in 0..shots {
        let x = rng.random_range(0..board.size());
        let y = rng.random_range(0..board.size());
        process_shot(board, x, y).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// No two distinct ships overlap or occupy 8-adjacent cells.
    #[test]
    fn placement_respects_no_touch(seed in any::<u64>()) {
        let board = random_board(&FleetConfig::CLASSIC, seed);
        for a in board.ships() {
            for b in board.ships() {
                if a.id() == b.id() {
                    continue;
                }
                for &(ax, ay) in a.positions() {
                    for &(bx, by) in b.positions() {
                        prop_assert!(ax.abs_diff(bx) > 1 || ay.abs_diff(by) > 1);
                    }
                }
            }
        }
    }

    /// Every cell marked as occupied or hit references a ship on the board.
    #[test]
    fn occupied_cells_have_owners(seed in any::<u64>(), shots in 0usize..60) {
        let mut board = random_board(&FleetConfig::CLASSIC, seed);
        shoot_randomly(&mut board, seed ^ 0x5eed, shots);
        for y in 0..board.size() {
            for x in 0..board.size() {
                let cell = board.cell(x, y).unwrap();
                if matches!(cell.state(), CellState::Ship | CellState::Hit) {
                    let id = cell.ship();
                    prop_assert!(id.is_some());
                    prop_assert!(board.ship(id.unwrap()).is_some());
                }
            }
        }
    }

    /// For every ship, hits stay within size and the sunk flag tracks
    /// hits == size exactly.
    #[test]
    fn hit_counters_stay_consistent(seed in any::<u64>(), shots in 0usize..120) {
        let mut board = random_board(&FleetConfig::CLASSIC, seed);
        shoot_randomly(&mut board, seed.rotate_left(13), shots);
        for ship in board.ships() {
            prop_assert!(ship.hits() <= ship.size());
            prop_assert_eq!(ship.is_sunk(), ship.hits() == ship.size());
            let hit_cells = ship
                .positions()
                .iter()
                .filter(|&&(x, y)| board.cell_state(x, y) == CellState::Hit)
                .count();
            prop_assert_eq!(ship.hits(), hit_cells);
        }
    }

    /// Re-firing at any resolved cell reports a repeat and changes nothing.
    #[test]
    fn repeat_shots_change_nothing(
        seed in any::<u64>(),
        x in 0usize..10,
        y in 0usize..10,
    ) {
        let mut board = random_board(&FleetConfig::CLASSIC, seed);
        let first = process_shot(&mut board, x, y).unwrap();
        prop_assert_ne!(first, ShotOutcome::Repeat);
        let after = board.clone();
        let second = process_shot(&mut board, x, y).unwrap();
        prop_assert_eq!(second, ShotOutcome::Repeat);
        prop_assert_eq!(board, after);
    }

    /// The compact fleet always fits its 7x7 board within the retry budget.
    #[test]
    fn compact_fleet_always_places(seed in any::<u64>()) {
        let board = random_board(&FleetConfig::COMPACT, seed);
        prop_assert_eq!(board.ships().len(), 3);
    }
}
