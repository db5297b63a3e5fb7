//! Serializable snapshots of session state for external consumers.
//!
//! The opponent board is redacted while the game is running: unresolved
//! ship cells serialize as empty with no owning ship, and opponent ship
//! positions appear only once the ship is sunk. Everything is revealed when
//! the game is over.

use serde::Serialize;

use crate::board::{Board, CellState, Orientation, Ship, ShipId};
use crate::game::{GameSession, OpponentShot, Outcome, Phase, ShotReport, Turn};
use crate::registry::SessionId;
use crate::shot::{ShotOutcome, SunkShip};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionView {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub x: usize,
    pub y: usize,
    pub state: CellState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_id: Option<ShipId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipView {
    pub id: ShipId,
    pub name: &'static str,
    pub size: usize,
    pub hits: usize,
    pub is_sunk: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<PositionView>>,
}

impl ShipView {
    fn new(ship: &Ship, reveal: bool) -> Self {
        let show = reveal || ship.is_sunk();
        ShipView {
            id: ship.id(),
            name: ship.name(),
            size: ship.size(),
            hits: ship.hits(),
            is_sunk: ship.is_sunk(),
            orientation: show.then(|| ship.orientation()),
            positions: show.then(|| {
                ship.positions()
                    .iter()
                    .map(|&(x, y)| PositionView { x, y })
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub size: usize,
    /// Rows of cells, indexed `cells[y][x]`.
    pub cells: Vec<Vec<CellView>>,
    pub ships: Vec<ShipView>,
}

impl BoardView {
    /// Full snapshot: the player's own board.
    pub fn full(board: &Board) -> Self {
        Self::build(board, true)
    }

    /// Redacted snapshot: intact opponent ship cells read as empty.
    pub fn redacted(board: &Board) -> Self {
        Self::build(board, false)
    }

    fn build(board: &Board, reveal: bool) -> Self {
        let size = board.size();
        let mut cells = Vec::with_capacity(size);
        for y in 0..size {
            let mut row = Vec::with_capacity(size);
            for x in 0..size {
                let owner = board.cell(x, y).and_then(|c| c.ship());
                let (state, ship_id) = match board.cell_state(x, y) {
                    CellState::Ship if !reveal => (CellState::Empty, None),
                    state if state.is_resolved() || reveal => (state, owner),
                    state => (state, None),
                };
                row.push(CellView { x, y, state, ship_id });
            }
            cells.push(row);
        }
        BoardView {
            size,
            cells,
            ships: board.ships().iter().map(|s| ShipView::new(s, reveal)).collect(),
        }
    }
}

/// Snapshot of a whole session as exposed to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: SessionId,
    pub phase: Phase,
    pub turn: Turn,
    pub winner: Option<Outcome>,
    pub player_board: BoardView,
    pub opponent_board: BoardView,
}

impl SessionView {
    pub fn new(id: SessionId, session: &GameSession) -> Self {
        let reveal = session.phase() == Phase::Over;
        SessionView {
            id,
            phase: session.phase(),
            turn: session.turn(),
            winner: session.outcome(),
            player_board: BoardView::full(session.player_board()),
            opponent_board: if reveal {
                BoardView::full(session.opponent_board())
            } else {
                BoardView::redacted(session.opponent_board())
            },
        }
    }
}

/// Wire shape of one shot outcome, mirroring the flat hit/sunk fields the
/// client consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotOutcomeView {
    pub hit: bool,
    pub repeat: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunk_ship: Option<SunkShip>,
    pub fleet_sunk: bool,
}

impl From<&ShotOutcome> for ShotOutcomeView {
    fn from(outcome: &ShotOutcome) -> Self {
        match outcome {
            ShotOutcome::Repeat => ShotOutcomeView {
                hit: false,
                repeat: true,
                sunk_ship: None,
                fleet_sunk: false,
            },
            ShotOutcome::Miss => ShotOutcomeView {
                hit: false,
                repeat: false,
                sunk_ship: None,
                fleet_sunk: false,
            },
            ShotOutcome::Hit { sunk, fleet_sunk } => ShotOutcomeView {
                hit: true,
                repeat: false,
                sunk_ship: sunk.clone(),
                fleet_sunk: *fleet_sunk,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentShotView {
    pub x: usize,
    pub y: usize,
    #[serde(flatten)]
    pub outcome: ShotOutcomeView,
}

impl From<&OpponentShot> for OpponentShotView {
    fn from(shot: &OpponentShot) -> Self {
        OpponentShotView {
            x: shot.x,
            y: shot.y,
            outcome: ShotOutcomeView::from(&shot.outcome),
        }
    }
}

/// Result of a shoot request: both halves of the turn cycle plus the
/// updated session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotView {
    pub player_shot: ShotOutcomeView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent_shot: Option<OpponentShotView>,
    pub session: SessionView,
}

impl ShotView {
    pub fn new(id: SessionId, report: &ShotReport, session: &GameSession) -> Self {
        ShotView {
            player_shot: ShotOutcomeView::from(&report.player),
            opponent_shot: report.opponent.as_ref().map(OpponentShotView::from),
            session: SessionView::new(id, session),
        }
    }
}
