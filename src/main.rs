#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    init_logging, ui, AiPlayer, CliPlayer, Match, MatchStatus, Player, Side,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the autonomous opponent in this terminal.
    Play {
        #[arg(long, default_value = "Player 1")]
        name: String,
        #[arg(long, default_value = "Poseidon")]
        opponent_name: String,
        #[arg(long, help = "Fix the opponent's RNG seed (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two autonomous players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seeds for a reproducible match (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Only print the final boards")]
        quiet: bool,
    },
}

#[cfg(feature = "std")]
fn ai_player(name: &str, seed: Option<u64>) -> AiPlayer {
    match seed {
        Some(s) => AiPlayer::seeded(name, s),
        None => AiPlayer::new(name),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            name,
            opponent_name,
            seed,
        } => {
            println!("SEA BATTLE BOARD GAME");
            println!("You will play against {}. Enter cells like A1 or J10.", opponent_name);
            let human = CliPlayer::stdio(name);
            let opponent = ai_player(&opponent_name, seed);
            let mut game = Match::new(human, opponent);
            game.place_fleets()?;
            let report = game.run()?;
            println!("\n{}'s hit results", game.first().name());
            println!("{}", ui::render_targets(game.first().history()));
            println!("{}'s fleet", game.second().name());
            println!("{}", ui::render_fleet(game.second().fleet(), true));
            if let Some(winner) = report.winner {
                println!("{} wins!", winner);
            }
        }
        Commands::Watch { seed, quiet } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (match will be reproducible)", s);
            }
            let first = ai_player("Poseidon", seed);
            let second = ai_player("Triton", seed.map(|s| s.wrapping_add(1)));
            let mut game = Match::new(first, second);
            game.place_fleets()?;
            while game.status() == MatchStatus::InProgress {
                let turn = game.play_turn()?;
                if !quiet {
                    let shooter = match turn.shooter {
                        Side::First => game.first().name(),
                        Side::Second => game.second().name(),
                    };
                    println!(
                        "Turn {:>3}: {} fires at {} -> {:?}",
                        game.turns(),
                        shooter,
                        turn.target,
                        turn.result
                    );
                }
            }
            println!("\n{}'s fleet", game.first().name());
            println!("{}", ui::render_fleet(game.first().fleet(), true));
            println!("{}'s fleet", game.second().name());
            println!("{}", ui::render_fleet(game.second().fleet(), true));
            let report = game.report();
            println!(
                "{} wins after {} turns!",
                report.winner.as_deref().unwrap_or("Nobody"),
                report.turns
            );
        }
    }
    Ok(())
}
