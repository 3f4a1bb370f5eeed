//! Computer opponent: a finite-state targeting search plus bounded random
//! fleet placement.
//!
//! The search runs without probability weighting. Seek fires at uniformly
//! random untried cells; a hit opens a cluster and Hunt probes the four
//! neighbors of its first cell; two colinear hits fix the direction and
//! Sink extends the line, reversing to the other end when blocked. Every
//! candidate is bounds-checked and checked against the player's own
//! targeting board, so no coordinate is ever proposed twice.

use log::debug;
use rand::Rng;

use crate::board::{FleetBoard, TargetingBoard};
use crate::common::{Coord, HitOutcome, Orientation};
use crate::config::{
    Placement, BOARD_SIZE, FALLBACK_LAYOUT, FLEET, FLEET_SIZE, MAX_BOARD_RESTARTS,
    PLACE_ATTEMPTS_PER_SHIP,
};

/// Search state of the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Undirected search for a fresh cell.
    Seek,
    /// One hit; probing its four neighbors for the ship's direction.
    Hunt,
    /// Direction known; extending the line of hits end to end.
    Sink,
}

/// Candidate directions probed in Hunt, in fixed order: N, S, E, W.
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Stateful shot selector for a computer player.
///
/// [`next_shot`](OpponentAi::next_shot) proposes a coordinate; after the
/// coordinator resolves it, the outcome must be fed back through
/// [`observe`](OpponentAi::observe) before the next proposal.
pub struct OpponentAi {
    mode: SearchMode,
    /// Confirmed hits of the ship currently pursued, ordered along the
    /// direction of travel.
    cluster: [Coord; BOARD_SIZE],
    cluster_len: usize,
    /// Next index into `DIRECTIONS` to pop while hunting.
    pending_next: usize,
    /// Sink probes the far end of the line once the near end is blocked.
    reversed: bool,
}

impl OpponentAi {
    pub fn new() -> Self {
        OpponentAi {
            mode: SearchMode::Seek,
            cluster: [Coord::new(0, 0); BOARD_SIZE],
            cluster_len: 0,
            pending_next: DIRECTIONS.len(),
            reversed: false,
        }
    }

    /// Current search mode, exposed for diagnostics.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Choose the next shot coordinate against `targeting`, the player's own
    /// record of past shots. The proposal is always in bounds and untried.
    pub fn next_shot<R: Rng + ?Sized>(&mut self, targeting: &TargetingBoard, rng: &mut R) -> Coord {
        match self.mode {
            SearchMode::Seek => self.seek(targeting, rng),
            SearchMode::Hunt => {
                while self.pending_next < DIRECTIONS.len() {
                    let (dr, dc) = DIRECTIONS[self.pending_next];
                    self.pending_next += 1;
                    if let Some(candidate) = self.cluster[0].offset(dr, dc) {
                        if !targeting.has_shot(candidate) {
                            return candidate;
                        }
                    }
                }
                // every neighbor illegal or already tried
                self.reset();
                self.seek(targeting, rng)
            }
            SearchMode::Sink => {
                let (dr, dc) = self.travel();
                if !self.reversed {
                    let tail = self.cluster[self.cluster_len - 1];
                    if let Some(candidate) = tail.offset(dr, dc) {
                        if !targeting.has_shot(candidate) {
                            return candidate;
                        }
                    }
                    self.reversed = true;
                }
                if let Some(candidate) = self.cluster[0].offset(-dr, -dc) {
                    if !targeting.has_shot(candidate) {
                        return candidate;
                    }
                }
                // both ends blocked: the ship is presumed resolved
                self.reset();
                self.seek(targeting, rng)
            }
        }
    }

    /// Feed back the outcome of the shot the AI proposed at `coord`.
    pub fn observe(&mut self, coord: Coord, outcome: HitOutcome) {
        match self.mode {
            SearchMode::Seek => match outcome {
                HitOutcome::Hit => {
                    self.cluster[0] = coord;
                    self.cluster_len = 1;
                    self.pending_next = 0;
                    self.mode = SearchMode::Hunt;
                }
                HitOutcome::Sunk(_) => self.reset(),
                HitOutcome::Miss => {}
            },
            SearchMode::Hunt => match outcome {
                HitOutcome::Hit => {
                    self.push_back(coord);
                    if self.cluster_len == 2 {
                        self.mode = SearchMode::Sink;
                        self.reversed = false;
                    }
                }
                HitOutcome::Sunk(_) => self.reset(),
                HitOutcome::Miss => {}
            },
            SearchMode::Sink => match outcome {
                HitOutcome::Hit => {
                    if self.reversed {
                        self.push_front(coord);
                    } else {
                        self.push_back(coord);
                    }
                }
                HitOutcome::Sunk(_) => self.reset(),
                HitOutcome::Miss => {
                    if self.reversed {
                        self.reset();
                    } else {
                        self.reversed = true;
                    }
                }
            },
        }
    }

    /// Unit step from the first cluster cell to the second. Only meaningful
    /// in Sink mode, where the cluster holds at least two cells.
    fn travel(&self) -> (i32, i32) {
        let a = self.cluster[0];
        let b = self.cluster[1];
        (
            b.row as i32 - a.row as i32,
            b.col as i32 - a.col as i32,
        )
    }

    fn push_back(&mut self, coord: Coord) {
        if self.cluster_len < self.cluster.len() {
            self.cluster[self.cluster_len] = coord;
            self.cluster_len += 1;
        }
    }

    fn push_front(&mut self, coord: Coord) {
        if self.cluster_len < self.cluster.len() {
            for i in (0..self.cluster_len).rev() {
                self.cluster[i + 1] = self.cluster[i];
            }
            self.cluster[0] = coord;
            self.cluster_len += 1;
        }
    }

    fn reset(&mut self) {
        self.mode = SearchMode::Seek;
        self.cluster_len = 0;
        self.pending_next = DIRECTIONS.len();
        self.reversed = false;
    }

    /// Uniformly random untried cell: the k-th free cell in row-major order
    /// for a random k. Allocation-free.
    fn seek<R: Rng + ?Sized>(&self, targeting: &TargetingBoard, rng: &mut R) -> Coord {
        let untried = BOARD_SIZE * BOARD_SIZE - targeting.shot_count();
        if untried == 0 {
            // board exhausted; nothing sensible left to propose
            return Coord::new(BOARD_SIZE - 1, BOARD_SIZE - 1);
        }
        let mut k = rng.random_range(0..untried);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row, col);
                if !targeting.has_shot(coord) {
                    if k == 0 {
                        return coord;
                    }
                    k -= 1;
                }
            }
        }
        Coord::new(BOARD_SIZE - 1, BOARD_SIZE - 1)
    }
}

impl Default for OpponentAi {
    fn default() -> Self {
        Self::new()
    }
}

/// Produce a complete, valid random fleet layout.
///
/// Each ship gets [`PLACE_ATTEMPTS_PER_SHIP`] random anchor/orientation
/// guesses against a scratch board; when a ship cannot be placed the board
/// is cleared and placement restarts, up to [`MAX_BOARD_RESTARTS`] times.
/// After that the deterministic [`FALLBACK_LAYOUT`] is returned, so the
/// caller never observes a failure.
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> [Placement; FLEET_SIZE] {
    for _ in 0..=MAX_BOARD_RESTARTS {
        if let Some(layout) = try_random_fleet(rng) {
            return layout;
        }
    }
    debug!("random fleet placement exhausted its restarts, using the fallback layout");
    FALLBACK_LAYOUT
}

fn try_random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Option<[Placement; FLEET_SIZE]> {
    let mut board = FleetBoard::new();
    let mut layout = [FALLBACK_LAYOUT[0]; FLEET_SIZE];
    for (i, &kind) in FLEET.iter().enumerate() {
        let len = kind.length();
        let mut placed = false;
        for _ in 0..PLACE_ATTEMPTS_PER_SHIP {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - len),
                Orientation::Vertical => (BOARD_SIZE - len, BOARD_SIZE - 1),
            };
            let anchor = Coord::new(
                rng.random_range(0..=max_row),
                rng.random_range(0..=max_col),
            );
            if board.try_place(kind, anchor, orientation).is_ok() {
                layout[i] = Placement {
                    kind,
                    anchor,
                    orientation,
                };
                placed = true;
                break;
            }
        }
        if !placed {
            return None;
        }
    }
    Some(layout)
}
