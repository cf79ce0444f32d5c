use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use tz_engine::{DiceGame, EngineConfig, RoundReport, play_round};

/// Aggregate over all simulated rounds.
#[derive(Debug, Serialize)]
struct Summary {
    games: u32,
    seed: u64,
    mean_rolls: f64,
    mean_seconds: f64,
    best_score: u64,
    worst_score: u64,
    rounds: Vec<RoundReport>,
}

pub fn run(
    games: u32,
    seed: u64,
    seconds_per_roll: u32,
    max_rolls: u32,
    json: bool,
) -> Result<(), String> {
    if games == 0 {
        return Err("--games must be at least 1".into());
    }

    let mut game = DiceGame::new(&EngineConfig::default().with_seed(seed));
    let mut rounds = Vec::with_capacity(games as usize);
    for n in 0..games {
        if n > 0 {
            game.new_game();
        }
        let report = play_round(&mut game, seconds_per_roll, max_rolls)
            .map_err(|e| format!("round {}: {e}", n + 1))?;
        log::debug!("round {} won on face {}: {:?}", n + 1, report.value, report);
        rounds.push(report);
    }

    let summary = summarize(seed, rounds);

    if json {
        let out = serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({games} rounds, seed={seed}, {seconds_per_roll}s/roll)").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Round", "Face", "Rolls", "Time", "Score"]);
    for (i, r) in summary.rounds.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            r.value.to_string(),
            r.rolls.to_string(),
            format!("{}s", r.seconds),
            r.score.to_string(),
        ]);
    }
    println!("{table}");
    println!();

    println!("  {}", "Summary".bold().underline());
    println!("  Mean rolls:   {:.2}", summary.mean_rolls);
    println!("  Mean time:    {:.2}s", summary.mean_seconds);
    println!(
        "  Best score:   {}",
        summary.best_score.to_string().green().bold()
    );
    println!(
        "  Worst score:  {}",
        summary.worst_score.to_string().red()
    );
    println!();

    Ok(())
}

/// Lower scores are better: fewer rolls.
fn summarize(seed: u64, rounds: Vec<RoundReport>) -> Summary {
    let n = rounds.len().max(1) as f64;
    let total_rolls: u64 = rounds.iter().map(|r| u64::from(r.rolls)).sum();
    let total_seconds: u64 = rounds.iter().map(|r| r.seconds).sum();
    Summary {
        games: rounds.len() as u32,
        seed,
        mean_rolls: total_rolls as f64 / n,
        mean_seconds: total_seconds as f64 / n,
        best_score: rounds.iter().map(|r| r.score).min().unwrap_or(0),
        worst_score: rounds.iter().map(|r| r.score).max().unwrap_or(0),
        rounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(rolls: u32) -> RoundReport {
        RoundReport {
            rolls,
            seconds: u64::from(rolls),
            score: u64::from(rolls) * 100,
            value: 6,
        }
    }

    #[test]
    fn summary_stats() {
        let s = summarize(1, vec![report(10), report(20), report(30)]);
        assert_eq!(s.games, 3);
        assert!((s.mean_rolls - 20.0).abs() < f64::EPSILON);
        assert!((s.mean_seconds - 20.0).abs() < f64::EPSILON);
        assert_eq!(s.best_score, 1000);
        assert_eq!(s.worst_score, 3000);
    }

    #[test]
    fn empty_summary() {
        let s = summarize(1, Vec::new());
        assert_eq!(s.games, 0);
        assert_eq!(s.best_score, 0);
    }
}
