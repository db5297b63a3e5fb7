//! Error types for the game engine and session layer.

use core::fmt;

/// Reason a ship placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship run extends past the board edge.
    OutOfBounds,
    /// Ship run crosses a cell already occupied by another ship.
    Overlap,
    /// Ship run touches another ship (8-connected neighborhood).
    Adjacent,
    /// Ship id does not appear in the fleet definition.
    UnknownShip,
    /// Ship with this id is already on the board.
    AlreadyPlaced,
    /// Requested size does not match the fleet definition for this id.
    SizeMismatch,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship placement is out of bounds"),
            PlacementError::Overlap => write!(f, "ship placement overlaps another ship"),
            PlacementError::Adjacent => write!(f, "ship placement touches another ship"),
            PlacementError::UnknownShip => write!(f, "ship id is not part of the fleet"),
            PlacementError::AlreadyPlaced => write!(f, "ship is already placed on the board"),
            PlacementError::SizeMismatch => {
                write!(f, "ship size does not match the fleet definition")
            }
        }
    }
}

/// Errors returned by engine, session and registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Referenced session id does not exist in the registry.
    NotFound,
    /// Operation requested in a phase that forbids it.
    InvalidState(&'static str),
    /// Geometrically or structurally illegal ship placement.
    InvalidPlacement(PlacementError),
    /// Shot coordinate outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Fleet definition incompatible with the board size.
    Config(String),
    /// A cell marked as occupied carries no owning ship.
    UnknownShipHit,
    /// No unresolved cell left to target.
    BoardExhausted,
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotFound => write!(f, "game session not found"),
            GameError::InvalidState(msg) => write!(f, "invalid state: {}", msg),
            GameError::InvalidPlacement(e) => write!(f, "invalid placement: {}", e),
            GameError::OutOfBounds { x, y } => {
                write!(f, "coordinate ({}, {}) is outside the board", x, y)
            }
            GameError::Config(msg) => write!(f, "configuration error: {}", msg),
            GameError::UnknownShipHit => write!(f, "occupied cell has no owning ship"),
            GameError::BoardExhausted => write!(f, "no unresolved cell left to target"),
        }
    }
}

impl std::error::Error for GameError {}
