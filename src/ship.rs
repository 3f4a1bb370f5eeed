//! Ship shape and hit state. A `Ship` is owned exclusively by the fleet
//! board that placed it.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{Coord, Orientation, PlacementError};
use crate::config::{ShipKind, BOARD_SIZE};

type BB = BitBoard<u128, BOARD_SIZE>;

/// A ship placed on the board, with hits tracked in a bitboard.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    anchor: Coord,
    orientation: Orientation,
    mask: BB,
    hits: BB,
}

impl Ship {
    /// Build a ship at `anchor` extending right (horizontal) or down
    /// (vertical). Fails with `OutOfBounds` when any cell leaves the board.
    pub fn new(kind: ShipKind, anchor: Coord, orientation: Orientation) -> Result<Self, PlacementError> {
        let len = kind.length();
        if !anchor.in_bounds() {
            return Err(PlacementError::OutOfBounds);
        }
        match orientation {
            Orientation::Horizontal if anchor.col + len > BOARD_SIZE => {
                return Err(PlacementError::OutOfBounds)
            }
            Orientation::Vertical if anchor.row + len > BOARD_SIZE => {
                return Err(PlacementError::OutOfBounds)
            }
            _ => {}
        }

        let mut mask = BB::new();
        for cell in CellIter::new(anchor, orientation, len) {
            // In bounds by the checks above.
            let _ = mask.set(cell.row, cell.col);
        }

        Ok(Ship {
            kind,
            anchor,
            orientation,
            mask,
            hits: BB::new(),
        })
    }

    /// Cells the ship occupies, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        CellIter::new(self.anchor, self.orientation, self.kind.length())
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn occupies(&self, coord: Coord) -> bool {
        self.mask.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Mark the cell hit. Returns `true` when `coord` belongs to the ship.
    pub fn record_hit(&mut self, coord: Coord) -> bool {
        if self.occupies(coord) {
            let _ = self.hits.set(coord.row, coord.col);
            true
        } else {
            false
        }
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.kind.length()
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }

    /// Number of distinct cells hit so far.
    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {}, anchor: {}, orientation: {:?}, hits: {}/{} }}",
            self.kind.name(),
            self.anchor,
            self.orientation,
            self.hits.count_ones(),
            self.kind.length(),
        )
    }
}

/// Iterator over the cells of a ship shape.
struct CellIter {
    anchor: Coord,
    orientation: Orientation,
    len: usize,
    idx: usize,
}

impl CellIter {
    fn new(anchor: Coord, orientation: Orientation, len: usize) -> Self {
        CellIter {
            anchor,
            orientation,
            len,
            idx: 0,
        }
    }
}

impl Iterator for CellIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.idx >= self.len {
            return None;
        }
        let i = self.idx;
        self.idx += 1;
        Some(match self.orientation {
            Orientation::Horizontal => Coord::new(self.anchor.row, self.anchor.col + i),
            Orientation::Vertical => Coord::new(self.anchor.row + i, self.anchor.col),
        })
    }
}
