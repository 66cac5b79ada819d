use rand::{rngs::SmallRng, SeedableRng};
use sea_duel::{init_logging, random_grid, AiPlayer, GameEvent, Match, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <placement-seed> <match-seed>", args[0]);
        std::process::exit(1);
    }
    let placement_seed: u64 = args[1].parse()?;
    let match_seed: u64 = args[2].parse()?;

    let mut placement_rng = SmallRng::seed_from_u64(placement_seed);
    let first = random_grid(&mut placement_rng);
    let second = random_grid(&mut placement_rng);

    let mut game = Match::new(
        first,
        second,
        AiPlayer::new(),
        AiPlayer::new(),
        SmallRng::seed_from_u64(match_seed),
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    let mut events: Vec<GameEvent> = Vec::new();
    let winner = game.run(&mut events).map_err(|e| anyhow::anyhow!(e))?;

    let result = json!({
        "player1": {
            "shots": game.shots_fired(Side::First),
            "vessels_left": game.grid(Side::First).live_vessels(),
        },
        "player2": {
            "shots": game.shots_fired(Side::Second),
            "vessels_left": game.grid(Side::Second).live_vessels(),
        },
        "moves": game.turn_order().index(),
        "events": events.len(),
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
