//! Ship placement: validation, execution and randomized fleet setup.

use log::debug;
use rand::Rng;

use crate::board::{Board, CellState, Orientation, Ship};
use crate::config::{FleetConfig, ShipDef};
use crate::error::{GameError, PlacementError};

/// Samples per ship before randomized placement gives up. Generous for any
/// sane fleet/board combination; exhausting it means the configuration is
/// too dense to place under the no-touch rule.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Cells covered by a run of `size` cells starting at (x, y).
fn run_cells(
    board: &Board,
    size: usize,
    x: usize,
    y: usize,
    orientation: Orientation,
) -> Option<Vec<(usize, usize)>> {
    if !board.in_bounds(x, y) {
        return None;
    }
    match orientation {
        Orientation::Horizontal if x + size > board.size() => return None,
        Orientation::Vertical if y + size > board.size() => return None,
        _ => {}
    }
    let cells = (0..size)
        .map(|i| match orientation {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        })
        .collect();
    Some(cells)
}

fn check_run(
    board: &Board,
    size: usize,
    x: usize,
    y: usize,
    orientation: Orientation,
) -> Result<Vec<(usize, usize)>, PlacementError> {
    let cells = run_cells(board, size, x, y, orientation).ok_or(PlacementError::OutOfBounds)?;
    for &(cx, cy) in &cells {
        if board.cell_state(cx, cy) == CellState::Ship {
            return Err(PlacementError::Overlap);
        }
        // no-touch rule: none of the 8 neighbors may hold a ship
        for dx in -1i64..=1 {
            for dy in -1i64..=1 {
                let nx = cx as i64 + dx;
                let ny = cy as i64 + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if board.in_bounds(nx, ny) && board.cell_state(nx, ny) == CellState::Ship {
                    return Err(PlacementError::Adjacent);
                }
            }
        }
    }
    Ok(cells)
}

/// Pure predicate: would a ship of `size` fit at (x, y) with `orientation`?
///
/// True iff the run stays in bounds, crosses no occupied cell and touches
/// no occupied cell. Suitable for client-side placement previews.
pub fn can_place(board: &Board, size: usize, x: usize, y: usize, orientation: Orientation) -> bool {
    check_run(board, size, x, y, orientation).is_ok()
}

/// Place one ship, or report why it cannot be placed.
///
/// Unlike `can_place` this also rejects a second placement of the same id.
/// Rejection is an explicit error rather than a silent no-op; either way
/// the board is left unchanged on failure.
pub fn place_ship(
    board: &mut Board,
    def: &ShipDef,
    x: usize,
    y: usize,
    orientation: Orientation,
) -> Result<(), GameError> {
    if board.ship(def.id()).is_some() {
        return Err(PlacementError::AlreadyPlaced.into());
    }
    let cells = check_run(board, def.size(), x, y, orientation)?;
    for &(cx, cy) in &cells {
        board.set_cell(cx, cy, CellState::Ship, Some(def.id()));
    }
    board.add_ship(Ship::new(def.id(), def.name(), def.size(), cells, orientation));
    debug!(
        "placed ship {} ({}) at ({}, {}) {:?}",
        def.id(),
        def.name(),
        x,
        y,
        orientation
    );
    Ok(())
}

/// Place one ship at a uniformly random valid position.
///
/// Samples a fair-coin orientation and a uniform (x, y) until `can_place`
/// succeeds, up to [`MAX_PLACEMENT_ATTEMPTS`]; exhaustion is a
/// configuration error.
pub fn place_ship_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    def: &ShipDef,
    rng: &mut R,
) -> Result<(), GameError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let x = rng.random_range(0..board.size());
        let y = rng.random_range(0..board.size());
        if can_place(board, def.size(), x, y, orientation) {
            return place_ship(board, def, x, y, orientation);
        }
    }
    Err(GameError::Config(format!(
        "could not place ship {} ({}) after {} attempts",
        def.id(),
        def.name(),
        MAX_PLACEMENT_ATTEMPTS
    )))
}

/// Place every ship of the fleet at uniformly random valid positions,
/// in fleet definition order.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    board: &mut Board,
    fleet: &FleetConfig,
    rng: &mut R,
) -> Result<(), GameError> {
    for def in fleet.ships() {
        place_ship_randomly(board, def, rng)?;
    }
    Ok(())
}
