use tz_engine::{DiceGame, EngineConfig};

pub fn run(seed: u64) -> Result<(), String> {
    let game = DiceGame::new(&EngineConfig::default().with_seed(seed));
    let json = serde_json::to_string_pretty(game.state())
        .map_err(|e| format!("serialization error: {e}"))?;
    println!("{json}");
    Ok(())
}
