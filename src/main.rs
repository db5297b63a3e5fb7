use anyhow::Result;
use broadside::{
    init_logging, select_target, Board, CellState, FleetConfig, GameSession, Outcome, Phase,
    ShotOutcome,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play one automated game and print it turn by turn.
    Demo {
        #[arg(long, help = "Fix RNG seed for a reproducible game")]
        seed: Option<u64>,
        #[arg(long, help = "Use the 7x7 three-ship fleet instead of the classic one")]
        compact: bool,
    },
    /// Run a batch of automated games and print aggregate stats as JSON.
    Sim {
        #[arg(long, default_value_t = 100)]
        games: u64,
        #[arg(long, help = "Base RNG seed; game i uses seed + i")]
        seed: Option<u64>,
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { seed, compact } => demo(seed, fleet(compact)),
        Commands::Sim { games, seed, compact } => sim(games, seed, fleet(compact)),
    }
}

fn fleet(compact: bool) -> FleetConfig {
    if compact {
        FleetConfig::COMPACT
    } else {
        FleetConfig::CLASSIC
    }
}

fn rng_for(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_os_rng(),
    }
}

/// Play one game to completion, with the player's shots also chosen by the
/// targeting heuristic. Returns the outcome and the number of turn cycles.
fn play_out(session: &mut GameSession, rng: &mut SmallRng, verbose: bool) -> Result<(Outcome, u32)> {
    session.auto_place(rng)?;
    session.start(rng)?;

    let mut turns = 0u32;
    while session.phase() != Phase::Over {
        turns += 1;
        let (x, y) = select_target(session.opponent_board(), rng)?;
        let report = session.shoot(x, y, rng)?;
        if verbose {
            println!("turn {:>3}: player fires at ({}, {}): {}", turns, x, y, describe(&report.player));
            if let Some(reply) = &report.opponent {
                println!("          opponent fires at ({}, {}): {}", reply.x, reply.y, describe(&reply.outcome));
            }
        }
    }

    let outcome = session
        .outcome()
        .ok_or_else(|| anyhow::anyhow!("game over without an outcome"))?;
    Ok((outcome, turns))
}

fn demo(seed: Option<u64>, config: FleetConfig) -> Result<()> {
    let mut rng = rng_for(seed);
    let mut session = GameSession::new(config);
    let (outcome, turns) = play_out(&mut session, &mut rng, true)?;

    println!();
    println!("player board:");
    print_board(session.player_board(), false);
    println!("opponent board:");
    print_board(session.opponent_board(), false);
    println!(
        "{} in {} turns",
        match outcome {
            Outcome::PlayerWins => "player wins",
            Outcome::OpponentWins => "opponent wins",
        },
        turns
    );
    Ok(())
}

fn sim(games: u64, seed: Option<u64>, config: FleetConfig) -> Result<()> {
    let mut player_wins = 0u64;
    let mut opponent_wins = 0u64;
    let mut total_turns = 0u64;

    for i in 0..games {
        let mut rng = rng_for(seed.map(|s| s + i));
        let mut session = GameSession::new(config);
        let (outcome, turns) = play_out(&mut session, &mut rng, false)?;
        total_turns += u64::from(turns);
        match outcome {
            Outcome::PlayerWins => player_wins += 1,
            Outcome::OpponentWins => opponent_wins += 1,
        }
    }

    let summary = json!({
        "games": games,
        "playerWins": player_wins,
        "opponentWins": opponent_wins,
        "avgTurns": total_turns as f64 / games.max(1) as f64,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn describe(outcome: &ShotOutcome) -> String {
    match outcome {
        ShotOutcome::Repeat => "repeat".into(),
        ShotOutcome::Miss => "miss".into(),
        ShotOutcome::Hit { sunk: None, .. } => "hit".into(),
        ShotOutcome::Hit { sunk: Some(ship), fleet_sunk } => {
            if *fleet_sunk {
                format!("sank the {} - fleet destroyed", ship.name)
            } else {
                format!("sank the {}", ship.name)
            }
        }
    }
}

fn print_board(board: &Board, hide_ships: bool) {
    print!("   ");
    for c in 0..board.size() {
        print!(" {}", (b'A' + c as u8) as char);
    }
    println!();
    for y in 0..board.size() {
        print!("{:2} ", y + 1);
        for x in 0..board.size() {
            let ch = match board.cell_state(x, y) {
                CellState::Empty => '.',
                CellState::Ship if hide_ships => '.',
                CellState::Ship => 'S',
                CellState::Hit => 'X',
                CellState::Miss => 'o',
            };
            print!(" {}", ch);
        }
        println!();
    }
}
