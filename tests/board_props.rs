use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    random_fleet, Coord, FleetBoard, HitOutcome, Orientation, BOARD_SIZE, TOTAL_SHIP_CELLS,
};

fn cells_of(anchor: Coord, orientation: Orientation, len: usize) -> Vec<Coord> {
    (0..len)
        .map(|i| match orientation {
            Orientation::Horizontal => Coord::new(anchor.row, anchor.col + i),
            Orientation::Vertical => Coord::new(anchor.row + i, anchor.col),
        })
        .collect()
}

fn chebyshev(a: Coord, b: Coord) -> usize {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    dr.max(dc)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Accepted random fleets are in bounds, pairwise disjoint and keep
    /// Chebyshev distance >= 2 between cells of different ships.
    #[test]
    fn random_fleet_upholds_placement_invariants(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = random_fleet(&mut rng);

        let ships: Vec<Vec<Coord>> = layout
            .iter()
            .map(|p| cells_of(p.anchor, p.orientation, p.kind.length()))
            .collect();

        let mut total = 0;
        for cells in &ships {
            for &c in cells {
                prop_assert!(c.row < BOARD_SIZE && c.col < BOARD_SIZE);
            }
            total += cells.len();
        }
        prop_assert_eq!(total, TOTAL_SHIP_CELLS);

        for (i, a) in ships.iter().enumerate() {
            for b in ships.iter().skip(i + 1) {
                for &ca in a {
                    for &cb in b {
                        prop_assert!(
                            chebyshev(ca, cb) >= 2,
                            "ships touch at {} / {}", ca, cb
                        );
                    }
                }
            }
        }
    }

    /// Replaying a generated layout through the fleet board accepts every
    /// placement and reproduces the occupancy count.
    #[test]
    fn random_fleet_replays_cleanly(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = random_fleet(&mut rng);

        let mut board = FleetBoard::new();
        for p in layout {
            prop_assert!(board.try_place(p.kind, p.anchor, p.orientation).is_ok());
        }
        prop_assert!(board.is_complete());
        prop_assert_eq!(board.occupied().count_ones(), TOTAL_SHIP_CELLS);
    }

    /// A fleet board classifies exactly its ship cells as hits.
    #[test]
    fn register_hit_matches_occupancy(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = random_fleet(&mut rng);
        let mut board = FleetBoard::new();
        for p in layout {
            board.try_place(p.kind, p.anchor, p.orientation).unwrap();
        }

        let coord = Coord::new(row, col);
        let occupied = board.occupied().get(row, col).unwrap();
        let outcome = board.register_hit(coord);
        prop_assert_eq!(outcome.is_hit(), occupied);
        match outcome {
            HitOutcome::Miss => {
                prop_assert!(board.incoming_misses().get(row, col).unwrap());
            }
            _ => {
                prop_assert!(board.incoming_hits().get(row, col).unwrap());
            }
        }
    }

    /// Hitting every ship cell, in any order, sinks the fleet; leaving one
    /// cell out does not.
    #[test]
    fn all_sunk_iff_every_cell_hit(seed in any::<u64>(), skip in 0..TOTAL_SHIP_CELLS) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = random_fleet(&mut rng);
        let mut board = FleetBoard::new();
        let mut cells = Vec::new();
        for p in layout {
            board.try_place(p.kind, p.anchor, p.orientation).unwrap();
            cells.extend(cells_of(p.anchor, p.orientation, p.kind.length()));
        }

        for (i, &cell) in cells.iter().enumerate() {
            if i != skip {
                prop_assert!(board.register_hit(cell).is_hit());
            }
        }
        prop_assert!(!board.all_sunk());
        prop_assert!(matches!(board.register_hit(cells[skip]), HitOutcome::Hit | HitOutcome::Sunk(_)));
        prop_assert!(board.all_sunk());
    }
}
