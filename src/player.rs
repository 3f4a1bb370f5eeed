//! A match participant: identity plus the two boards they exclusively own.

use crate::board::{FleetBoard, TargetingBoard};
use crate::common::PlayerId;

pub struct Player {
    id: PlayerId,
    name: &'static str,
    fleet: FleetBoard,
    targeting: TargetingBoard,
}

impl Player {
    pub fn new(id: PlayerId, name: &'static str) -> Self {
        Player {
            id,
            name,
            fleet: FleetBoard::new(),
            targeting: TargetingBoard::new(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The player's own grid of ships and incoming shot marks.
    pub fn fleet(&self) -> &FleetBoard {
        &self.fleet
    }

    /// The player's record of outgoing shots.
    pub fn targeting(&self) -> &TargetingBoard {
        &self.targeting
    }

    pub(crate) fn fleet_mut(&mut self) -> &mut FleetBoard {
        &mut self.fleet
    }

    pub(crate) fn targeting_mut(&mut self) -> &mut TargetingBoard {
        &mut self.targeting
    }
}
