//! Ship catalog and board constants. Plain data, threaded explicitly —
//! nothing here is mutable at runtime.

use crate::common::{Coord, Orientation};

pub const BOARD_SIZE: usize = 10;

/// Number of distinct ship kinds in the catalog.
pub const NUM_KINDS: usize = 4;

/// Ships per complete fleet: 1 + 2 + 3 + 4.
pub const FLEET_SIZE: usize = 10;

/// Cells occupied by a complete fleet: 5 + 2*4 + 3*3 + 4*2.
pub const TOTAL_SHIP_CELLS: usize = 30;

/// Longest ship in the catalog.
pub const MAX_SHIP_LEN: usize = 5;

/// Random placement tries per ship before the whole board is restarted.
pub const PLACE_ATTEMPTS_PER_SHIP: usize = 100;

/// Board restarts before falling back to [`FALLBACK_LAYOUT`].
pub const MAX_BOARD_RESTARTS: usize = 10;

/// Kind of ship: identifies a row in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipKind {
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipKind {
    /// Cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Battleship => 5,
            ShipKind::Cruiser => 4,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 2,
        }
    }

    /// How many ships of this kind a fleet carries.
    pub const fn max_count(self) -> usize {
        match self {
            ShipKind::Battleship => 1,
            ShipKind::Cruiser => 2,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 4,
        }
    }

    /// Display name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
        }
    }

    /// Catalog index, used for per-kind placement counters.
    pub const fn index(self) -> usize {
        match self {
            ShipKind::Battleship => 0,
            ShipKind::Cruiser => 1,
            ShipKind::Destroyer => 2,
            ShipKind::Submarine => 3,
        }
    }
}

/// The full catalog, largest first.
pub const KINDS: [ShipKind; NUM_KINDS] = [
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
    ShipKind::Submarine,
];

/// One ship of a complete fleet, expanded from the per-kind counts.
/// Placement routines walk this list in order (largest ships first).
pub const FLEET: [ShipKind; FLEET_SIZE] = [
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
];

/// A single ship placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: ShipKind,
    pub anchor: Coord,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(kind: ShipKind, row: usize, col: usize, orientation: Orientation) -> Self {
        Placement {
            kind,
            anchor: Coord::new(row, col),
            orientation,
        }
    }
}

/// Known-valid complete layout used when random placement exhausts its
/// restart budget. Every pair of ships here is separated by at least one
/// empty row or column, satisfying the no-touch rule.
pub const FALLBACK_LAYOUT: [Placement; FLEET_SIZE] = [
    Placement::new(ShipKind::Battleship, 0, 0, Orientation::Horizontal),
    Placement::new(ShipKind::Cruiser, 0, 6, Orientation::Horizontal),
    Placement::new(ShipKind::Cruiser, 2, 0, Orientation::Horizontal),
    Placement::new(ShipKind::Destroyer, 2, 5, Orientation::Horizontal),
    Placement::new(ShipKind::Destroyer, 4, 0, Orientation::Horizontal),
    Placement::new(ShipKind::Destroyer, 4, 4, Orientation::Horizontal),
    Placement::new(ShipKind::Submarine, 4, 8, Orientation::Horizontal),
    Placement::new(ShipKind::Submarine, 6, 0, Orientation::Horizontal),
    Placement::new(ShipKind::Submarine, 6, 3, Orientation::Horizontal),
    Placement::new(ShipKind::Submarine, 6, 6, Orientation::Horizontal),
];
