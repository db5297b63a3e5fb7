//! Hunt/target heuristic for the computer opponent.
//!
//! Searches randomly until a shot lands, then probes around known live hits:
//! one live hit on a ship tries its four orthogonal neighbors in random
//! order; two or more reveal the ship's axis, and the line of hits is
//! extended past its high end, then its low end.

use std::collections::BTreeMap;

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, CellState, ShipId};
use crate::error::GameError;

/// Cells currently hit whose owning ship is still afloat, grouped by ship.
///
/// A `BTreeMap` keyed by ship id gives a deterministic group order: wounded
/// ships are worked on in ascending id order.
fn live_hits(board: &Board) -> BTreeMap<ShipId, Vec<(usize, usize)>> {
    let mut groups: BTreeMap<ShipId, Vec<(usize, usize)>> = BTreeMap::new();
    for y in 0..board.size() {
        for x in 0..board.size() {
            let cell = match board.cell(x, y) {
                Some(c) => *c,
                None => continue,
            };
            if cell.state() != CellState::Hit {
                continue;
            }
            if let Some(id) = cell.ship() {
                if board.ship(id).is_some_and(|s| !s.is_sunk()) {
                    groups.entry(id).or_default().push((x, y));
                }
            }
        }
    }
    groups
}

/// Candidate around a single live hit: a random untried orthogonal neighbor.
fn probe_around<R: Rng + ?Sized>(
    board: &Board,
    (x, y): (usize, usize),
    rng: &mut R,
) -> Option<(usize, usize)> {
    let mut directions = [(1i64, 0i64), (-1, 0), (0, 1), (0, -1)];
    directions.shuffle(rng);
    for (dx, dy) in directions {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx < 0 || ny < 0 {
            continue;
        }
        let (nx, ny) = (nx as usize, ny as usize);
        if board.in_bounds(nx, ny) && !board.cell_state(nx, ny).is_resolved() {
            return Some((nx, ny));
        }
    }
    None
}

/// Candidate extending a line of hits along the revealed axis, trying past
/// the high end first, then the low end.
fn extend_line(board: &Board, hits: &mut Vec<(usize, usize)>) -> Option<(usize, usize)> {
    let vertical = hits.iter().all(|&(x, _)| x == hits[0].0);
    let horizontal = hits.iter().all(|&(_, y)| y == hits[0].1);

    if horizontal {
        hits.sort_by_key(|&(x, _)| x);
        let y = hits[0].1;
        let high = hits[hits.len() - 1].0 + 1;
        if board.in_bounds(high, y) && !board.cell_state(high, y).is_resolved() {
            return Some((high, y));
        }
        if let Some(low) = hits[0].0.checked_sub(1) {
            if !board.cell_state(low, y).is_resolved() {
                return Some((low, y));
            }
        }
    } else if vertical {
        hits.sort_by_key(|&(_, y)| y);
        let x = hits[0].0;
        let high = hits[hits.len() - 1].1 + 1;
        if board.in_bounds(x, high) && !board.cell_state(x, high).is_resolved() {
            return Some((x, high));
        }
        if let Some(low) = hits[0].1.checked_sub(1) {
            if !board.cell_state(x, low).is_resolved() {
                return Some((x, low));
            }
        }
    }
    None
}

/// Select the opponent's next shot against `board`.
///
/// Falls back to a uniformly random unresolved cell when no wounded ship
/// yields a candidate. A board with nothing left to shoot at means the game
/// was sequenced incorrectly and is reported as an error.
pub fn select_target<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<(usize, usize), GameError> {
    for (id, mut hits) in live_hits(board) {
        let candidate = if hits.len() == 1 {
            probe_around(board, hits[0], rng)
        } else {
            extend_line(board, &mut hits)
        };
        if let Some(target) = candidate {
            trace!("targeting wounded ship {} at {:?}", id, target);
            return Ok(target);
        }
    }

    let open = board.unresolved_cells();
    if open.is_empty() {
        return Err(GameError::BoardExhausted);
    }
    let target = open[rng.random_range(0..open.len())];
    trace!("searching randomly at {:?}", target);
    Ok(target)
}
