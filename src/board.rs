//! The two board views of a player: the fleet board holding their own
//! ships and incoming hits, and the targeting board recording their
//! outgoing shots against the opponent.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{ActionError, Coord, HitOutcome, Orientation, PlacementError, ShipId};
use crate::config::{ShipKind, BOARD_SIZE, FLEET_SIZE, NUM_KINDS};
use crate::ship::Ship;

type BB = BitBoard<u128, BOARD_SIZE>;

/// A player's own grid: ship placements and incoming shot marks.
///
/// Ships are looked up per cell through a fixed 10×10 map, so hit
/// resolution is O(1). Ships are never removed once placed.
pub struct FleetBoard {
    /// Per-cell owner map; at most one ship per cell.
    cells: [[Option<ShipId>; BOARD_SIZE]; BOARD_SIZE],
    ships: [Option<Ship>; FLEET_SIZE],
    placed: usize,
    kind_counts: [usize; NUM_KINDS],
    occupied: BB,
    /// Occupied cells plus their 8-neighborhood; placements must avoid it.
    halo: BB,
    incoming_hits: BB,
    incoming_misses: BB,
}

impl FleetBoard {
    /// Create an empty fleet board.
    pub fn new() -> Self {
        FleetBoard {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            ships: [None; FLEET_SIZE],
            placed: 0,
            kind_counts: [0; NUM_KINDS],
            occupied: BB::new(),
            halo: BB::new(),
            incoming_hits: BB::new(),
            incoming_misses: BB::new(),
        }
    }

    /// Validate and register a ship. The board is untouched on failure.
    ///
    /// Rejections, in check order: `LimitExceeded` when the kind is already
    /// at its catalog maximum, `OutOfBounds`, `Overlap`, and `TooClose`
    /// when any cell falls within Chebyshev distance 1 of another ship.
    pub fn try_place(
        &mut self,
        kind: ShipKind,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<ShipId, PlacementError> {
        if self.kind_counts[kind.index()] == kind.max_count() {
            return Err(PlacementError::LimitExceeded);
        }
        let ship = Ship::new(kind, anchor, orientation)?;
        let mask = ship.mask();
        if !(self.occupied & mask).is_empty() {
            return Err(PlacementError::Overlap);
        }
        if !(self.halo & mask).is_empty() {
            return Err(PlacementError::TooClose);
        }

        let id = ShipId(self.placed);
        for cell in ship.cells() {
            self.cells[cell.row][cell.col] = Some(id);
        }
        self.occupied |= mask;
        self.halo |= mask.dilated();
        self.ships[self.placed] = Some(ship);
        self.placed += 1;
        self.kind_counts[kind.index()] += 1;
        Ok(id)
    }

    /// Resolve an incoming shot against this fleet.
    ///
    /// The caller is responsible for filtering duplicate shots; the board
    /// itself only classifies the cell.
    pub fn register_hit(&mut self, coord: Coord) -> HitOutcome {
        if !coord.in_bounds() {
            return HitOutcome::Miss;
        }
        match self.cells[coord.row][coord.col] {
            Some(id) => {
                let _ = self.incoming_hits.set(coord.row, coord.col);
                // the cell map never points at an empty slot
                match self.ships[id.0].as_mut() {
                    Some(ship) => {
                        ship.record_hit(coord);
                        if ship.is_sunk() {
                            HitOutcome::Sunk(id)
                        } else {
                            HitOutcome::Hit
                        }
                    }
                    None => HitOutcome::Miss,
                }
            }
            None => {
                let _ = self.incoming_misses.set(coord.row, coord.col);
                HitOutcome::Miss
            }
        }
    }

    /// True once the fleet carries its full complement.
    pub fn is_complete(&self) -> bool {
        self.placed == FLEET_SIZE
    }

    /// True iff the fleet is complete and every ship is sunk. A partial
    /// fleet is never reported as all sunk; callers gate on placement
    /// completion first.
    pub fn all_sunk(&self) -> bool {
        self.is_complete() && self.ships.iter().flatten().all(Ship::is_sunk)
    }

    /// Ship owning `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<ShipId> {
        if coord.in_bounds() {
            self.cells[coord.row][coord.col]
        } else {
            None
        }
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0).and_then(Option::as_ref)
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    pub fn placed_count(&self) -> usize {
        self.placed
    }

    pub fn kind_count(&self, kind: ShipKind) -> usize {
        self.kind_counts[kind.index()]
    }

    /// Occupancy mask of all ships, for the owner's rendering view.
    pub fn occupied(&self) -> BB {
        self.occupied
    }

    /// Incoming shots that struck a ship.
    pub fn incoming_hits(&self) -> BB {
        self.incoming_hits
    }

    /// Incoming shots that struck water.
    pub fn incoming_misses(&self) -> BB {
        self.incoming_misses
    }
}

impl Default for FleetBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FleetBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "FleetBoard {{ placed: {}, occupied: {:?}, hits: {:?} }}",
            self.placed, self.occupied, self.incoming_hits
        )
    }
}

/// A player's record of their own outgoing shots and outcomes.
///
/// Grows monotonically during the shooting phase; each coordinate appears
/// at most once.
#[derive(Clone, Copy, Default)]
pub struct TargetingBoard {
    hits: BB,
    misses: BB,
}

impl TargetingBoard {
    pub fn new() -> Self {
        TargetingBoard {
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    /// Record the outcome of a shot. Pure record-keeping: classification is
    /// the defender's fleet board's job.
    pub fn resolve_shot(&mut self, coord: Coord, outcome: HitOutcome) -> Result<(), ActionError> {
        if !coord.in_bounds() {
            return Err(ActionError::InvalidCoordinate);
        }
        if self.has_shot(coord) {
            return Err(ActionError::DuplicateShot);
        }
        let board = if outcome.is_hit() {
            &mut self.hits
        } else {
            &mut self.misses
        };
        // in bounds by the check above
        let _ = board.set(coord.row, coord.col);
        Ok(())
    }

    /// Whether this player has already fired at `coord`.
    pub fn has_shot(&self, coord: Coord) -> bool {
        self.hits.get(coord.row, coord.col).unwrap_or(false)
            || self.misses.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Recorded outcome at `coord`, reduced to hit-or-miss.
    pub fn outcome_at(&self, coord: Coord) -> Option<HitOutcome> {
        if self.hits.get(coord.row, coord.col).unwrap_or(false) {
            Some(HitOutcome::Hit)
        } else if self.misses.get(coord.row, coord.col).unwrap_or(false) {
            Some(HitOutcome::Miss)
        } else {
            None
        }
    }

    pub fn shot_count(&self) -> usize {
        self.hits.count_ones() + self.misses.count_ones()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    /// Shots that hit, for the rendering view.
    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Shots that missed, for the rendering view.
    pub fn misses(&self) -> BB {
        self.misses
    }
}

impl fmt::Debug for TargetingBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "TargetingBoard {{ hits: {:?}, misses: {:?} }}",
            self.hits, self.misses
        )
    }
}
