//! The four operations a transport collaborator calls into the core with:
//! new game, place ship, start game, shoot.

use log::info;

use crate::board::{Orientation, ShipId};
use crate::config::FleetConfig;
use crate::error::GameError;
use crate::game::GameSession;
use crate::registry::{SessionId, SessionRegistry};
use crate::view::{SessionView, ShotView};

/// Entry point for external callers: owns the session registry and the
/// fleet configuration every new game is created with. All methods take
/// `&self`; per-session locking lives in the registry.
pub struct GameService {
    registry: SessionRegistry,
    config: FleetConfig,
}

impl GameService {
    pub fn new(config: FleetConfig) -> Self {
        GameService {
            registry: SessionRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Create a session in the placing phase and return its first snapshot.
    pub fn new_game(&self) -> Result<SessionView, GameError> {
        let id = self.registry.insert(GameSession::new(self.config));
        info!("created game {}", id);
        self.registry
            .with_session(id, |session| Ok(SessionView::new(id, session)))
    }

    /// Place one player ship. `ship_size` comes from the request and is
    /// validated against the fleet definition.
    pub fn place_ship(
        &self,
        id: SessionId,
        ship_id: ShipId,
        ship_size: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<SessionView, GameError> {
        self.registry.with_session(id, |session| {
            session.place_ship(ship_id, ship_size, x, y, orientation)?;
            Ok(SessionView::new(id, session))
        })
    }

    /// Randomly place the rest of the player's fleet.
    pub fn auto_place(&self, id: SessionId) -> Result<SessionView, GameError> {
        self.registry.with_session(id, |session| {
            session.auto_place(&mut rand::rng())?;
            Ok(SessionView::new(id, session))
        })
    }

    /// Start the game once the player fleet is fully placed.
    pub fn start_game(&self, id: SessionId) -> Result<SessionView, GameError> {
        self.registry.with_session(id, |session| {
            session.start(&mut rand::rng())?;
            Ok(SessionView::new(id, session))
        })
    }

    /// Fire at the opponent board; the response also carries the opponent's
    /// counter-shot when one was taken.
    pub fn shoot(&self, id: SessionId, x: usize, y: usize) -> Result<ShotView, GameError> {
        self.registry.with_session(id, |session| {
            let report = session.shoot(x, y, &mut rand::rng())?;
            Ok(ShotView::new(id, &report, session))
        })
    }

    /// Evict a session from the registry.
    pub fn end_game(&self, id: SessionId) -> Result<(), GameError> {
        if self.registry.remove(id) {
            Ok(())
        } else {
            Err(GameError::NotFound)
        }
    }
}
