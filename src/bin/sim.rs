//! AI-vs-AI simulation harness: plays full matches between two computer
//! opponents and prints per-game results plus a summary.

use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    init_logging, random_fleet, MatchConfig, MatchCoordinator, MatchPhase, OpponentAi, PlayerId,
    TurnRule,
};

#[derive(Parser)]
#[command(about = "AI vs AI sea-battle simulation")]
struct Args {
    /// RNG seed for player one.
    #[arg(long, default_value_t = 1)]
    seed1: u64,

    /// RNG seed for player two.
    #[arg(long, default_value_t = 2)]
    seed2: u64,

    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u64,

    /// Grant the attacker another shot after each hit instead of strict
    /// turn alternation.
    #[arg(long)]
    extra_shot_on_hit: bool,
}

struct GameReport {
    winner: usize,
    shots: [usize; 2],
}

fn play_game(rngs: &mut [SmallRng; 2], turn_rule: TurnRule) -> Result<GameReport> {
    let config = MatchConfig {
        turn_rule,
        first_shooter: 0,
    };
    let mut coordinator = MatchCoordinator::with_config(["AI-1", "AI-2"], config);

    for slot in 0..2 {
        for p in random_fleet(&mut rngs[slot]) {
            coordinator
                .place_ship(PlayerId(slot), p.kind, p.anchor, p.orientation)
                .map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    let mut ais = [OpponentAi::new(), OpponentAi::new()];
    loop {
        match coordinator.current_phase() {
            MatchPhase::Shooting(a) => {
                let targeting = *coordinator.player(PlayerId(a)).map_err(|e| anyhow::anyhow!(e))?.targeting();
                let coord = ais[a].next_shot(&targeting, &mut rngs[a]);
                let outcome = coordinator
                    .fire_shot(PlayerId(a), coord)
                    .map_err(|e| anyhow::anyhow!(e))?;
                ais[a].observe(coord, outcome);
            }
            MatchPhase::GameOver(winner) => {
                let shots = [
                    coordinator
                        .player(PlayerId(0))
                        .map_err(|e| anyhow::anyhow!(e))?
                        .targeting()
                        .shot_count(),
                    coordinator
                        .player(PlayerId(1))
                        .map_err(|e| anyhow::anyhow!(e))?
                        .targeting()
                        .shot_count(),
                ];
                return Ok(GameReport { winner, shots });
            }
            MatchPhase::Placing(_) => {
                anyhow::bail!("match still placing after both fleets were submitted")
            }
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let turn_rule = if args.extra_shot_on_hit {
        TurnRule::ExtraShotOnHit
    } else {
        TurnRule::Alternate
    };

    let mut wins = [0u64; 2];
    for game in 0..args.games {
        let mut rngs = [
            SmallRng::seed_from_u64(args.seed1.wrapping_add(game)),
            SmallRng::seed_from_u64(args.seed2.wrapping_add(game)),
        ];
        let report = play_game(&mut rngs, turn_rule)?;
        wins[report.winner] += 1;
        println!(
            "game {}: winner=AI-{} shots={}/{}",
            game + 1,
            report.winner + 1,
            report.shots[0],
            report.shots[1]
        );
    }

    println!(
        "summary: {} games, AI-1 wins {}, AI-2 wins {}",
        args.games, wins[0], wins[1]
    );
    Ok(())
}
