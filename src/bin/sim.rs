use sea_battle::{init_logging, AiPlayer, Match, Player};

/// Runs one autonomous match and prints the report as a single JSON line.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    init_logging();

    let mut p1 = AiPlayer::seeded("player1", seed1);
    let mut p2 = AiPlayer::seeded("player2", seed2);
    p1.create_fleet()?;
    p2.create_fleet()?;

    let mut game = Match::new(p1, p2);
    let report = game.run()?;

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
