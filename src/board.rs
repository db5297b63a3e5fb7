//! Board state: a square grid of cells plus the ships placed on it.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a ship, unique per board, drawn from the fleet definition.
pub type ShipId = usize;

/// State of a single grid cell.
///
/// Transitions are one-way: `Empty -> Ship` during placement, `Ship -> Hit`
/// and `Empty -> Miss` during shot resolution. `Hit` and `Miss` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// A cell is resolved once a shot has landed on it.
    pub fn is_resolved(&self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One grid cell: its state and, if occupied, the owning ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    state: CellState,
    ship: Option<ShipId>,
}

impl Cell {
    fn empty() -> Self {
        Cell {
            state: CellState::Empty,
            ship: None,
        }
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }
}

/// A ship placed on the board. Created once by the placement engine; only
/// the hit counter and sunk flag change afterwards, via shot resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    name: &'static str,
    size: usize,
    positions: Vec<(usize, usize)>,
    orientation: Orientation,
    hits: usize,
    sunk: bool,
}

impl Ship {
    pub(crate) fn new(
        id: ShipId,
        name: &'static str,
        size: usize,
        positions: Vec<(usize, usize)>,
        orientation: Orientation,
    ) -> Self {
        debug_assert_eq!(positions.len(), size);
        Ship {
            id,
            name,
            size,
            positions,
            orientation,
            hits: 0,
            sunk: false,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Occupied positions, ordered from the placement origin.
    pub fn positions(&self) -> &[(usize, usize)] {
        &self.positions
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Register one hit. Returns `true` when this hit sinks the ship.
    pub(crate) fn record_hit(&mut self) -> bool {
        debug_assert!(self.hits < self.size);
        self.hits += 1;
        if self.hits == self.size {
            self.sunk = true;
        }
        self.sunk
    }
}

/// An N x N grid of cells and the ships placed on it.
///
/// The no-overlap and no-touch invariants are enforced by the placement
/// engine at insertion time; the board itself is a data container.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board with every cell `Empty` and no ships.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::empty(); size * size],
            ships: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Cell at (x, y), or `None` when out of bounds.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            self.cells.get(y * self.size + x)
        } else {
            None
        }
    }

    pub(crate) fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            self.cells.get_mut(y * self.size + x)
        } else {
            None
        }
    }

    /// State of the cell at (x, y); out-of-bounds reads as `Empty`.
    pub fn cell_state(&self, x: usize, y: usize) -> CellState {
        self.cell(x, y).map(|c| c.state).unwrap_or(CellState::Empty)
    }

    pub(crate) fn set_cell(&mut self, x: usize, y: usize, state: CellState, ship: Option<ShipId>) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.state = state;
            if ship.is_some() {
                cell.ship = ship;
            }
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id == id)
    }

    pub(crate) fn ship_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.id == id)
    }

    pub(crate) fn add_ship(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    /// Coordinates of every cell no shot has landed on yet.
    pub fn unresolved_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if !self.cell_state(x, y).is_resolved() {
                    cells.push((x, y));
                }
            }
        }
        cells
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.size, self.size)?;
        for y in 0..self.size {
            write!(f, "  ")?;
            for x in 0..self.size {
                let ch = match self.cell_state(x, y) {
                    CellState::Empty => '.',
                    CellState::Ship => 'S',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}
