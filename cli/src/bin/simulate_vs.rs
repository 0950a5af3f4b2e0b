use clap::Parser;
use duel_engine::{simulate_many, MatchupStats, Role, Side};

#[derive(Parser)]
#[command(name = "simulate-vs")]
#[command(about = "Monte Carlo sim: many duels between archetypes")]
struct Args {
    /// First archetype (tank | medic | damage | sniper); omit for the full matrix
    #[arg(long)]
    first: Option<String>,

    /// Second archetype; omit for the full matrix
    #[arg(long)]
    second: Option<String>,

    /// Number of trials per matchup
    #[arg(long, default_value_t = 1000)]
    trials: u32,

    /// Safety cap on turns per trial
    #[arg(long, default_value_t = 500)]
    max_turns: u32,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,
}

fn print_matchup(stats: &MatchupStats) {
    println!("simulate-vs results");
    println!("-------------------");
    println!("trials:             {}", stats.trials);
    println!("matchup:            {} vs {}", stats.first, stats.second);
    println!();
    println!(
        "{:<20}{:.1}%",
        format!("{} win rate:", stats.first),
        stats.win_rate(Side::First) * 100.0
    );
    println!(
        "{:<20}{:.1}%",
        format!("{} win rate:", stats.second),
        stats.win_rate(Side::Second) * 100.0
    );
    println!("stalemates:         {}", stats.stalemates);
    println!("avg turns:          {:.2}", stats.average_turns());
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cap = Some(args.max_turns);

    match (args.first.as_deref(), args.second.as_deref()) {
        (Some(first), Some(second)) => {
            let first: Role = first.parse()?;
            let second: Role = second.parse()?;
            let stats = simulate_many(first, second, args.trials, args.seed, cap)?;
            print_matchup(&stats);
        }
        (None, None) => {
            println!("first-side win rate, {} trials per cell", args.trials);
            print!("{:<8}", "");
            for role in Role::ALL {
                print!(" {:>8}", role);
            }
            println!();
            for first in Role::ALL {
                print!("{:<8}", first);
                for second in Role::ALL {
                    let stats = simulate_many(first, second, args.trials, args.seed, cap)?;
                    print!(" {:>7.1}%", stats.win_rate(Side::First) * 100.0);
                }
                println!();
            }
        }
        _ => anyhow::bail!("pass both --first and --second, or neither for the full matrix"),
    }

    Ok(())
}
