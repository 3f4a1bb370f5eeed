use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    random_fleet, ActionError, Coord, HitOutcome, MatchConfig, MatchCoordinator, MatchPhase,
    OpponentAi, Orientation, PlacementError, PlayerId, ShipKind, TurnRule, FALLBACK_LAYOUT,
    TOTAL_SHIP_CELLS,
};

fn place_fleet(coordinator: &mut MatchCoordinator, player: PlayerId) {
    for p in FALLBACK_LAYOUT {
        coordinator
            .place_ship(player, p.kind, p.anchor, p.orientation)
            .unwrap();
    }
}

/// Both fleets placed, ready to shoot, player 0 first.
fn ready_match(config: MatchConfig) -> MatchCoordinator {
    let mut coordinator = MatchCoordinator::with_config(["one", "two"], config);
    place_fleet(&mut coordinator, PlayerId(0));
    place_fleet(&mut coordinator, PlayerId(1));
    coordinator
}

#[test]
fn placement_advances_through_both_players() {
    let mut coordinator = MatchCoordinator::new(["one", "two"]);
    assert_eq!(coordinator.current_phase(), MatchPhase::Placing(0));

    place_fleet(&mut coordinator, PlayerId(0));
    assert_eq!(coordinator.current_phase(), MatchPhase::Placing(1));

    place_fleet(&mut coordinator, PlayerId(1));
    assert_eq!(coordinator.current_phase(), MatchPhase::Shooting(0));
    assert_eq!(coordinator.winner(), None);
}

#[test]
fn wrong_player_cannot_place() {
    let mut coordinator = MatchCoordinator::new(["one", "two"]);
    assert_eq!(
        coordinator
            .place_ship(
                PlayerId(1),
                ShipKind::Submarine,
                Coord::new(0, 0),
                Orientation::Horizontal
            )
            .unwrap_err(),
        ActionError::OutOfPhase
    );
    assert_eq!(
        coordinator
            .place_ship(
                PlayerId(2),
                ShipKind::Submarine,
                Coord::new(0, 0),
                Orientation::Horizontal
            )
            .unwrap_err(),
        ActionError::UnknownPlayer
    );
}

#[test]
fn placement_errors_pass_through() {
    let mut coordinator = MatchCoordinator::new(["one", "two"]);
    coordinator
        .place_ship(
            PlayerId(0),
            ShipKind::Battleship,
            Coord::new(0, 0),
            Orientation::Horizontal,
        )
        .unwrap();
    assert_eq!(
        coordinator
            .place_ship(
                PlayerId(0),
                ShipKind::Battleship,
                Coord::new(5, 0),
                Orientation::Horizontal
            )
            .unwrap_err(),
        ActionError::Placement(PlacementError::LimitExceeded)
    );
    assert_eq!(
        coordinator
            .place_ship(
                PlayerId(0),
                ShipKind::Cruiser,
                Coord::new(1, 2),
                Orientation::Vertical
            )
            .unwrap_err(),
        ActionError::Placement(PlacementError::TooClose)
    );
}

#[test]
fn shots_rejected_during_placement() {
    let mut coordinator = MatchCoordinator::new(["one", "two"]);
    assert_eq!(
        coordinator
            .fire_shot(PlayerId(0), Coord::new(0, 0))
            .unwrap_err(),
        ActionError::OutOfPhase
    );
}

#[test]
fn placement_rejected_during_shooting() {
    let mut coordinator = ready_match(MatchConfig::default());
    assert_eq!(
        coordinator
            .place_ship(
                PlayerId(0),
                ShipKind::Submarine,
                Coord::new(9, 0),
                Orientation::Horizontal
            )
            .unwrap_err(),
        ActionError::OutOfPhase
    );
}

#[test]
fn turn_alternates_after_every_shot() {
    let mut coordinator = ready_match(MatchConfig::default());

    // hit: fallback layout has the battleship on (0,0)
    let outcome = coordinator.fire_shot(PlayerId(0), Coord::new(0, 0)).unwrap();
    assert_eq!(outcome, HitOutcome::Hit);
    assert_eq!(coordinator.current_phase(), MatchPhase::Shooting(1));

    // miss: (9,9) is open water in the fallback layout
    let outcome = coordinator.fire_shot(PlayerId(1), Coord::new(9, 9)).unwrap();
    assert_eq!(outcome, HitOutcome::Miss);
    assert_eq!(coordinator.current_phase(), MatchPhase::Shooting(0));
}

#[test]
fn extra_shot_on_hit_retains_the_turn() {
    let config = MatchConfig {
        turn_rule: TurnRule::ExtraShotOnHit,
        first_shooter: 0,
    };
    let mut coordinator = ready_match(config);

    assert_eq!(
        coordinator.fire_shot(PlayerId(0), Coord::new(0, 0)).unwrap(),
        HitOutcome::Hit
    );
    assert_eq!(coordinator.current_phase(), MatchPhase::Shooting(0));

    assert_eq!(
        coordinator.fire_shot(PlayerId(0), Coord::new(9, 9)).unwrap(),
        HitOutcome::Miss
    );
    assert_eq!(coordinator.current_phase(), MatchPhase::Shooting(1));
}

#[test]
fn duplicate_shot_rejected_without_mutation() {
    let mut coordinator = ready_match(MatchConfig {
        turn_rule: TurnRule::ExtraShotOnHit,
        first_shooter: 0,
    });

    coordinator.fire_shot(PlayerId(0), Coord::new(0, 0)).unwrap();
    let shots_before = coordinator.player(PlayerId(0)).unwrap().targeting().shot_count();
    let hits_before = coordinator
        .player(PlayerId(1))
        .unwrap()
        .fleet()
        .incoming_hits()
        .count_ones();

    assert_eq!(
        coordinator
            .fire_shot(PlayerId(0), Coord::new(0, 0))
            .unwrap_err(),
        ActionError::DuplicateShot
    );

    assert_eq!(
        coordinator.player(PlayerId(0)).unwrap().targeting().shot_count(),
        shots_before
    );
    assert_eq!(
        coordinator
            .player(PlayerId(1))
            .unwrap()
            .fleet()
            .incoming_hits()
            .count_ones(),
        hits_before
    );
    // phase unchanged by the rejected shot
    assert_eq!(coordinator.current_phase(), MatchPhase::Shooting(0));
}

#[test]
fn off_board_shot_rejected() {
    let mut coordinator = ready_match(MatchConfig::default());
    assert_eq!(
        coordinator
            .fire_shot(PlayerId(0), Coord::new(0, 10))
            .unwrap_err(),
        ActionError::InvalidCoordinate
    );
    assert_eq!(coordinator.current_phase(), MatchPhase::Shooting(0));
}

#[test]
fn sinking_the_last_ship_ends_the_match() {
    // ExtraShotOnHit lets player 0 run the board in one sequence.
    let mut coordinator = ready_match(MatchConfig {
        turn_rule: TurnRule::ExtraShotOnHit,
        first_shooter: 0,
    });

    let mut cells = Vec::new();
    for p in FALLBACK_LAYOUT {
        let len = p.kind.length();
        for i in 0..len {
            cells.push(match p.orientation {
                Orientation::Horizontal => Coord::new(p.anchor.row, p.anchor.col + i),
                Orientation::Vertical => Coord::new(p.anchor.row + i, p.anchor.col),
            });
        }
    }
    assert_eq!(cells.len(), TOTAL_SHIP_CELLS);

    for &cell in &cells {
        assert!(coordinator.fire_shot(PlayerId(0), cell).unwrap().is_hit());
    }

    assert_eq!(coordinator.current_phase(), MatchPhase::GameOver(0));
    assert_eq!(coordinator.winner(), Some(PlayerId(0)));

    // repeated reads agree
    assert_eq!(coordinator.current_phase(), MatchPhase::GameOver(0));
    assert_eq!(coordinator.winner(), Some(PlayerId(0)));

    // terminal: every further request is out of phase
    assert_eq!(
        coordinator
            .fire_shot(PlayerId(1), Coord::new(9, 9))
            .unwrap_err(),
        ActionError::OutOfPhase
    );
    assert_eq!(
        coordinator
            .place_ship(
                PlayerId(0),
                ShipKind::Submarine,
                Coord::new(9, 0),
                Orientation::Horizontal
            )
            .unwrap_err(),
        ActionError::OutOfPhase
    );
}

#[test]
fn first_shooter_configuration_respected() {
    let config = MatchConfig {
        turn_rule: TurnRule::Alternate,
        first_shooter: 1,
    };
    let coordinator = ready_match(config);
    assert_eq!(coordinator.current_phase(), MatchPhase::Shooting(1));
}

#[test]
fn full_ai_game_terminates_with_a_winner() {
    let mut rngs = [
        SmallRng::seed_from_u64(11),
        SmallRng::seed_from_u64(22),
    ];
    let mut coordinator = MatchCoordinator::new(["one", "two"]);
    for slot in 0..2 {
        for p in random_fleet(&mut rngs[slot]) {
            coordinator
                .place_ship(PlayerId(slot), p.kind, p.anchor, p.orientation)
                .unwrap();
        }
    }

    let mut ais = [OpponentAi::new(), OpponentAi::new()];
    let mut shots = 0;
    let winner = loop {
        match coordinator.current_phase() {
            MatchPhase::Shooting(a) => {
                let targeting = *coordinator.player(PlayerId(a)).unwrap().targeting();
                let coord = ais[a].next_shot(&targeting, &mut rngs[a]);
                let outcome = coordinator.fire_shot(PlayerId(a), coord).unwrap();
                ais[a].observe(coord, outcome);
                shots += 1;
                // two players, 100 cells each: the duplicate-free invariant
                // bounds the match
                assert!(shots <= 200, "match did not terminate");
            }
            MatchPhase::GameOver(w) => break w,
            MatchPhase::Placing(_) => unreachable!("both fleets are complete"),
        }
    };

    assert_eq!(coordinator.winner(), Some(PlayerId(winner)));
    let targeting = coordinator.player(PlayerId(winner)).unwrap().targeting();
    assert_eq!(targeting.hit_count(), TOTAL_SHIP_CELLS);
    assert!(coordinator
        .player(PlayerId(1 - winner))
        .unwrap()
        .fleet()
        .all_sunk());
}
