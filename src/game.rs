//! Game session: two boards, phase and turn sequencing, terminal outcome.

use log::info;
use rand::Rng;
use serde::Serialize;

use crate::ai;
use crate::board::{Board, Orientation, ShipId};
use crate::config::FleetConfig;
use crate::error::{GameError, PlacementError};
use crate::placement;
use crate::shot::{self, ShotOutcome};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Placing,
    InProgress,
    Over,
}

/// Whose shot is next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    Player,
    Opponent,
}

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    #[serde(rename = "player")]
    PlayerWins,
    #[serde(rename = "opponent")]
    OpponentWins,
}

/// The opponent's counter-shot within one turn cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentShot {
    pub x: usize,
    pub y: usize,
    pub outcome: ShotOutcome,
}

/// What happened during one call to [`GameSession::shoot`]: the player's
/// shot and, unless the game ended or the shot was a repeat, the opponent's
/// immediate reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotReport {
    pub player: ShotOutcome,
    pub opponent: Option<OpponentShot>,
}

/// One single-player game: the player's board, the computer opponent's
/// board, and the flags sequencing placement, alternating shots and the
/// terminal outcome. Once the outcome is set every mutation is rejected.
pub struct GameSession {
    config: FleetConfig,
    player_board: Board,
    opponent_board: Board,
    phase: Phase,
    turn: Turn,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Start a session in the placing phase with two empty boards. The
    /// opponent fleet is placed when the game starts, not at creation.
    pub fn new(config: FleetConfig) -> Self {
        GameSession {
            config,
            player_board: Board::new(config.board_size()),
            opponent_board: Board::new(config.board_size()),
            phase: Phase::Placing,
            turn: Turn::Player,
            outcome: None,
        }
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    /// Whether every ship of the fleet is placed on the player board.
    pub fn all_ships_placed(&self) -> bool {
        self.player_board.ships().len() == self.config.ships().len()
    }

    /// Place one of the player's ships. Legal only while placing. The ship
    /// id must come from the fleet definition and `size` must match it.
    pub fn place_ship(
        &mut self,
        ship_id: ShipId,
        size: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.phase != Phase::Placing {
            return Err(GameError::InvalidState("ships can only be placed before the game starts"));
        }
        let def = self
            .config
            .ship(ship_id)
            .ok_or(PlacementError::UnknownShip)?;
        if def.size() != size {
            return Err(PlacementError::SizeMismatch.into());
        }
        placement::place_ship(&mut self.player_board, def, x, y, orientation)
    }

    /// Randomly place whichever fleet ships the player has not placed yet.
    pub fn auto_place<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != Phase::Placing {
            return Err(GameError::InvalidState("ships can only be placed before the game starts"));
        }
        for def in self.config.ships() {
            if self.player_board.ship(def.id()).is_none() {
                placement::place_ship_randomly(&mut self.player_board, def, rng)?;
            }
        }
        Ok(())
    }

    /// Start the game: requires the full player fleet on the board, places
    /// the opponent fleet randomly and opens the shot exchange.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != Phase::Placing {
            return Err(GameError::InvalidState("game has already started"));
        }
        if !self.all_ships_placed() {
            return Err(GameError::InvalidState("player fleet is not fully placed"));
        }
        placement::place_fleet_randomly(&mut self.opponent_board, &self.config, rng)?;
        self.phase = Phase::InProgress;
        self.turn = Turn::Player;
        info!("game started on a {0}x{0} board", self.config.board_size());
        Ok(())
    }

    /// Resolve a player shot at the opponent board and, unless the game
    /// ended or the shot was a repeat, the opponent's immediate counter-shot
    /// against the player board.
    pub fn shoot<R: Rng + ?Sized>(
        &mut self,
        x: usize,
        y: usize,
        rng: &mut R,
    ) -> Result<ShotReport, GameError> {
        match self.phase {
            Phase::Placing => {
                return Err(GameError::InvalidState("game has not started yet"));
            }
            Phase::Over => return Err(GameError::InvalidState("game is over")),
            Phase::InProgress => {}
        }
        if self.turn != Turn::Player {
            return Err(GameError::InvalidState("not the player's turn"));
        }

        let player = shot::process_shot(&mut self.opponent_board, x, y)?;

        // A repeat shot neither consumes the turn nor triggers a reply.
        if player == ShotOutcome::Repeat {
            return Ok(ShotReport { player, opponent: None });
        }
        if player.fleet_sunk() {
            self.finish(Outcome::PlayerWins);
            return Ok(ShotReport { player, opponent: None });
        }

        self.turn = Turn::Opponent;
        let (ox, oy) = ai::select_target(&self.player_board, rng)?;
        let outcome = shot::process_shot(&mut self.player_board, ox, oy)?;
        if outcome.fleet_sunk() {
            self.finish(Outcome::OpponentWins);
        } else {
            self.turn = Turn::Player;
        }
        Ok(ShotReport {
            player,
            opponent: Some(OpponentShot { x: ox, y: oy, outcome }),
        })
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Over;
        self.outcome = Some(outcome);
        info!("game over: {:?}", outcome);
    }
}
