#![cfg_attr(not(feature = "std"), no_std)]

//! Two-player naval combat engine: board and ship model, shot resolution,
//! the match phase state machine and a finite-state computer opponent.
//!
//! The crate owns game state only. Rendering, menus and input collection
//! are collaborators that drive the [`MatchCoordinator`] request/result API
//! and poll board state through the read accessors.

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod ship;

pub use ai::{random_fleet, OpponentAi, SearchMode};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{FleetBoard, TargetingBoard};
pub use common::{
    ActionError, Coord, HitOutcome, Orientation, PlacementError, PlayerId, ShipId,
};
pub use config::{
    Placement, ShipKind, BOARD_SIZE, FALLBACK_LAYOUT, FLEET, FLEET_SIZE, KINDS,
    MAX_BOARD_RESTARTS, MAX_SHIP_LEN, NUM_KINDS, PLACE_ATTEMPTS_PER_SHIP, TOTAL_SHIP_CELLS,
};
pub use game::{MatchConfig, MatchCoordinator, MatchPhase, TurnRule, PLAYER_COUNT};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::Player;
pub use ship::Ship;
