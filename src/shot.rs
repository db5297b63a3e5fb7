//! Shot resolution: the per-cell state machine and fleet-defeat detection.

use log::debug;
use serde::Serialize;

use crate::board::{Board, CellState, ShipId};
use crate::error::GameError;

/// A ship sunk by a shot, reported with its configured name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SunkShip {
    pub id: ShipId,
    pub name: &'static str,
    pub size: usize,
}

/// Outcome of resolving one shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Target cell was already hit or missed; the board is unchanged.
    Repeat,
    /// Shot landed on water.
    Miss,
    /// Shot landed on a ship.
    Hit {
        /// The ship this shot sank, if it was the ship's last intact cell.
        sunk: Option<SunkShip>,
        /// Whether the shot left the whole fleet sunk.
        fleet_sunk: bool,
    },
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit { .. })
    }

    pub fn fleet_sunk(&self) -> bool {
        matches!(self, ShotOutcome::Hit { fleet_sunk: true, .. })
    }
}

/// True iff every ship on the board is sunk. Vacuously false for a board
/// with no ships placed.
pub fn is_fleet_sunk(board: &Board) -> bool {
    !board.ships().is_empty() && board.ships().iter().all(|s| s.is_sunk())
}

/// Resolve a shot at (x, y).
///
/// `Empty -> Miss` and `Ship -> Hit` are the only transitions; firing at an
/// already resolved cell is a safe no-op reported as [`ShotOutcome::Repeat`].
pub fn process_shot(board: &mut Board, x: usize, y: usize) -> Result<ShotOutcome, GameError> {
    let cell = *board.cell(x, y).ok_or(GameError::OutOfBounds { x, y })?;

    match cell.state() {
        CellState::Hit | CellState::Miss => Ok(ShotOutcome::Repeat),
        CellState::Empty => {
            board.set_cell(x, y, CellState::Miss, None);
            debug!("shot at ({}, {}): miss", x, y);
            Ok(ShotOutcome::Miss)
        }
        CellState::Ship => {
            let id = cell.ship().ok_or(GameError::UnknownShipHit)?;
            board.set_cell(x, y, CellState::Hit, None);
            let ship = board.ship_mut(id).ok_or(GameError::UnknownShipHit)?;
            let sunk = if ship.record_hit() {
                Some(SunkShip {
                    id: ship.id(),
                    name: ship.name(),
                    size: ship.size(),
                })
            } else {
                None
            };
            let fleet_sunk = sunk.is_some() && is_fleet_sunk(board);
            if let Some(s) = &sunk {
                debug!("shot at ({}, {}): sank {} (fleet sunk: {})", x, y, s.name, fleet_sunk);
            } else {
                debug!("shot at ({}, {}): hit ship {}", x, y, id);
            }
            Ok(ShotOutcome::Hit { sunk, fleet_sunk })
        }
    }
}
