//! Fleet definitions: board size plus the ships both sides place.

use crate::board::ShipId;
use crate::error::GameError;

/// One entry of a fleet definition: id, display name and length in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    id: ShipId,
    name: &'static str,
    size: usize,
}

impl ShipDef {
    pub const fn new(id: ShipId, name: &'static str, size: usize) -> Self {
        Self { id, name, size }
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
}

const CLASSIC_SHIPS: [ShipDef; 5] = [
    ShipDef::new(1, "Carrier", 5),
    ShipDef::new(2, "Battleship", 4),
    ShipDef::new(3, "Cruiser", 3),
    ShipDef::new(4, "Submarine", 3),
    ShipDef::new(5, "Destroyer", 2),
];

const COMPACT_SHIPS: [ShipDef; 3] = [
    ShipDef::new(1, "Carrier", 5),
    ShipDef::new(2, "Cruiser", 3),
    ShipDef::new(3, "Destroyer", 2),
];

/// Immutable fleet configuration shared by both sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetConfig {
    board_size: usize,
    ships: &'static [ShipDef],
}

impl FleetConfig {
    /// Standard game: 10x10 board, five ships.
    pub const CLASSIC: FleetConfig = FleetConfig {
        board_size: 10,
        ships: &CLASSIC_SHIPS,
    };

    /// Small-board variant: 7x7 board, three ships.
    pub const COMPACT: FleetConfig = FleetConfig {
        board_size: 7,
        ships: &COMPACT_SHIPS,
    };

    /// Build a custom fleet, rejecting configurations that cannot be placed.
    pub fn custom(board_size: usize, ships: &'static [ShipDef]) -> Result<Self, GameError> {
        let config = FleetConfig { board_size, ships };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 {
            return Err(GameError::Config("board size must be positive".into()));
        }
        if self.ships.is_empty() {
            return Err(GameError::Config("fleet has no ships".into()));
        }
        for (i, ship) in self.ships.iter().enumerate() {
            if ship.size == 0 {
                return Err(GameError::Config(format!(
                    "ship {} ({}) has zero size",
                    ship.id, ship.name
                )));
            }
            if ship.size > self.board_size {
                return Err(GameError::Config(format!(
                    "ship {} ({}) is longer than the board",
                    ship.id, ship.name
                )));
            }
            if self.ships[..i].iter().any(|s| s.id == ship.id) {
                return Err(GameError::Config(format!("duplicate ship id {}", ship.id)));
            }
        }
        // Each ship claims its cells plus a one-cell halo under the no-touch
        // rule. This coarse capacity bound rejects fleets that could never
        // fit; the bounded retry loop in placement catches marginal ones.
        let padded: usize = self.ships.iter().map(|s| (s.size + 1) * 2).sum();
        if padded > self.board_size * self.board_size {
            return Err(GameError::Config(
                "fleet does not fit the board under the no-touch rule".into(),
            ));
        }
        Ok(())
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn ships(&self) -> &'static [ShipDef] {
        self.ships
    }

    /// Look up a ship definition by id.
    pub fn ship(&self, id: ShipId) -> Option<&'static ShipDef> {
        self.ships.iter().find(|s| s.id == id)
    }

    /// Total number of ship cells in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.ships.iter().map(|s| s.size).sum()
    }
}
