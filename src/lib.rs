//! Single-player Battleship engine.
//!
//! The core is a board model with a no-touch placement rule, a shot
//! resolution state machine and a hunt/target heuristic for the computer
//! opponent. [`GameSession`] sequences one game; [`GameService`] exposes the
//! four operations a transport layer calls (new game, place ship, start,
//! shoot) over an in-memory session registry.

mod ai;
mod board;
mod config;
mod error;
mod game;
mod logging;
mod placement;
mod registry;
mod service;
mod shot;
mod view;

pub use ai::select_target;
pub use board::{Board, Cell, CellState, Orientation, Ship, ShipId};
pub use config::{FleetConfig, ShipDef};
pub use error::{GameError, PlacementError};
pub use game::{GameSession, OpponentShot, Outcome, Phase, ShotReport, Turn};
pub use logging::init_logging;
pub use placement::{
    can_place, place_fleet_randomly, place_ship, place_ship_randomly, MAX_PLACEMENT_ATTEMPTS,
};
pub use registry::{SessionId, SessionRegistry};
pub use service::GameService;
pub use shot::{is_fleet_sunk, process_shot, ShotOutcome, SunkShip};
pub use view::{
    BoardView, CellView, OpponentShotView, PositionView, SessionView, ShipView, ShotOutcomeView,
    ShotView,
};
