//! Shared value types and the error taxonomy of the engine core.
//!
//! Every error here is recoverable: the core reports and lets the caller
//! re-prompt, it never retries or panics on behalf of a player.

use crate::config::BOARD_SIZE;
use core::fmt;

/// A board coordinate. Equality and ordering are by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Returns true when the coordinate lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Offsets the coordinate, returning `None` when the result would leave
    /// the board.
    pub fn offset(&self, dr: i32, dc: i32) -> Option<Coord> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if row < 0 || row >= BOARD_SIZE as i32 || col < 0 || col >= BOARD_SIZE as i32 {
            None
        } else {
            Some(Coord::new(row as usize, col as usize))
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Handle to a placed ship, an index into its owning fleet's ship list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShipId(pub usize);

/// Identity of one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerId(pub usize);

/// What a shot did to the defender's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// No ship occupies the target cell.
    Miss,
    /// A ship segment was struck but the ship still floats.
    Hit,
    /// The hit completed the ship.
    Sunk(ShipId),
}

impl HitOutcome {
    /// True for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, HitOutcome::Miss)
    }
}

/// Why a placement request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some cell of the ship would leave the board.
    OutOfBounds,
    /// Some cell of the ship is already occupied.
    Overlap,
    /// Some cell of the ship touches another ship, diagonals included.
    TooClose,
    /// The fleet already carries the maximum number of ships of this kind.
    LimitExceeded,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship placement is out of bounds"),
            PlacementError::Overlap => write!(f, "ship placement overlaps another ship"),
            PlacementError::TooClose => write!(f, "ship placement touches another ship"),
            PlacementError::LimitExceeded => {
                write!(f, "fleet already carries the maximum of this ship kind")
            }
        }
    }
}

/// Why a coordinator request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// Placement rejected by the fleet board.
    Placement(PlacementError),
    /// The attacker already fired at this coordinate.
    DuplicateShot,
    /// The target coordinate lies outside the board.
    InvalidCoordinate,
    /// The request does not match the current phase or acting player.
    OutOfPhase,
    /// Player id is not part of this match.
    UnknownPlayer,
}

impl From<PlacementError> for ActionError {
    fn from(err: PlacementError) -> Self {
        ActionError::Placement(err)
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Placement(e) => write!(f, "placement rejected: {}", e),
            ActionError::DuplicateShot => write!(f, "coordinate was already fired at"),
            ActionError::InvalidCoordinate => write!(f, "coordinate lies outside the board"),
            ActionError::OutOfPhase => write!(f, "action out of phase"),
            ActionError::UnknownPlayer => write!(f, "player id is not part of this match"),
        }
    }
}
