//! Match coordinator: the placement → shooting → game-over state machine.
//!
//! All access to the boards is turn-serialized here; a fleet board is only
//! mutated by its owner during placement and by an opponent shot during the
//! shooting phase.

use log::{debug, info};

use crate::common::{ActionError, Coord, HitOutcome, Orientation, PlayerId, ShipId};
use crate::config::ShipKind;
use crate::player::Player;

pub const PLAYER_COUNT: usize = 2;

/// Current phase of a match. Indices refer to player slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Player `p` is placing ships.
    Placing(usize),
    /// Player `a` is to fire.
    Shooting(usize),
    /// Terminal; the winner's fleet survived.
    GameOver(usize),
}

/// Who shoots next after a resolved shot.
///
/// `Alternate` is the canonical rule: the turn passes after every shot.
/// `ExtraShotOnHit` preserves the variant where a hit grants another shot;
/// it is an explicit opt-in, never implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRule {
    Alternate,
    ExtraShotOnHit,
}

/// Match parameters fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub turn_rule: TurnRule,
    /// Player slot that fires first once both fleets are complete.
    pub first_shooter: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            turn_rule: TurnRule::Alternate,
            first_shooter: 0,
        }
    }
}

/// Drives a two-player match through its phases.
pub struct MatchCoordinator {
    players: [Player; PLAYER_COUNT],
    phase: MatchPhase,
    config: MatchConfig,
}

impl MatchCoordinator {
    /// Start a match in `Placing(0)` with the default configuration.
    pub fn new(names: [&'static str; PLAYER_COUNT]) -> Self {
        Self::with_config(names, MatchConfig::default())
    }

    pub fn with_config(names: [&'static str; PLAYER_COUNT], config: MatchConfig) -> Self {
        let config = MatchConfig {
            first_shooter: config.first_shooter % PLAYER_COUNT,
            ..config
        };
        MatchCoordinator {
            players: [
                Player::new(PlayerId(0), names[0]),
                Player::new(PlayerId(1), names[1]),
            ],
            phase: MatchPhase::Placing(0),
            config,
        }
    }

    fn slot(&self, player: PlayerId) -> Result<usize, ActionError> {
        if player.0 < PLAYER_COUNT {
            Ok(player.0)
        } else {
            Err(ActionError::UnknownPlayer)
        }
    }

    /// Place a ship for `player`. Only valid in that player's placing turn.
    /// Completing the fleet advances the phase.
    pub fn place_ship(
        &mut self,
        player: PlayerId,
        kind: ShipKind,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<ShipId, ActionError> {
        let slot = self.slot(player)?;
        match self.phase {
            MatchPhase::Placing(p) if p == slot => {}
            _ => return Err(ActionError::OutOfPhase),
        }

        let id = self.players[slot]
            .fleet_mut()
            .try_place(kind, anchor, orientation)?;

        if self.players[slot].fleet().is_complete() {
            self.phase = if slot + 1 < PLAYER_COUNT {
                MatchPhase::Placing(slot + 1)
            } else {
                MatchPhase::Shooting(self.config.first_shooter)
            };
            debug!(
                "fleet of {} complete, phase now {:?}",
                self.players[slot].name(),
                self.phase
            );
        }
        Ok(id)
    }

    /// Fire at `coord` for `attacker` against the other player.
    ///
    /// The duplicate check runs against the attacker's targeting board
    /// before the defender's fleet is touched, so a rejected shot mutates
    /// nothing.
    pub fn fire_shot(&mut self, attacker: PlayerId, coord: Coord) -> Result<HitOutcome, ActionError> {
        let slot = self.slot(attacker)?;
        match self.phase {
            MatchPhase::Shooting(a) if a == slot => {}
            _ => return Err(ActionError::OutOfPhase),
        }
        if !coord.in_bounds() {
            return Err(ActionError::InvalidCoordinate);
        }
        if self.players[slot].targeting().has_shot(coord) {
            return Err(ActionError::DuplicateShot);
        }

        let defender = 1 - slot;
        let outcome = self.players[defender].fleet_mut().register_hit(coord);
        self.players[slot].targeting_mut().resolve_shot(coord, outcome)?;
        debug!(
            "{} fires at {}: {:?}",
            self.players[slot].name(),
            coord,
            outcome
        );

        if self.players[defender].fleet().all_sunk() {
            self.phase = MatchPhase::GameOver(slot);
            info!("{} wins", self.players[slot].name());
        } else {
            let next = match self.config.turn_rule {
                TurnRule::Alternate => defender,
                TurnRule::ExtraShotOnHit if outcome.is_hit() => slot,
                TurnRule::ExtraShotOnHit => defender,
            };
            self.phase = MatchPhase::Shooting(next);
        }
        Ok(outcome)
    }

    /// Current phase. Read-only and stable between mutations.
    pub fn current_phase(&self) -> MatchPhase {
        self.phase
    }

    /// The winning player once the match is over.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            MatchPhase::GameOver(w) => Some(PlayerId(w)),
            _ => None,
        }
    }

    /// Read access for rendering collaborators.
    pub fn player(&self, player: PlayerId) -> Result<&Player, ActionError> {
        let slot = self.slot(player)?;
        Ok(&self.players[slot])
    }
}
