use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use duel_engine::{
    builtin_roster, pick_pair, run_duel, Dice, DuelOptions, DuelOutcome, Fighter, Role,
    ThreadSleep, Verdict,
};
use serde::Serialize;

#[derive(Copy, Clone, ValueEnum)]
enum Archetype {
    Tank,
    Medic,
    Damage,
    Sniper,
}

#[derive(Subcommand)]
enum Cmd {
    /// Fight two archetypes against each other
    Duel {
        /// Archetype of the first fighter
        #[arg(long, value_enum)]
        first: Archetype,
        /// Archetype of the second fighter
        #[arg(long, value_enum)]
        second: Archetype,
        /// Display name for the first fighter (defaults to the archetype)
        #[arg(long)]
        first_name: Option<String>,
        /// Display name for the second fighter (defaults to the archetype)
        #[arg(long)]
        second_name: Option<String>,
        /// RNG seed for determinism (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Delay between turns in milliseconds
        #[arg(long, default_value_t = 0)]
        pause_ms: u64,
        /// Declare a stalemate after this many turns
        #[arg(long)]
        max_turns: Option<u32>,
        /// Suppress turn-by-turn narration
        #[arg(long, default_value_t = false)]
        quiet: bool,
        /// Print the final report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Pick two fighters from the built-in roster and let them fight
    Demo {
        /// RNG seed for determinism (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Delay between turns in milliseconds
        #[arg(long, default_value_t = 150)]
        pause_ms: u64,
    },
    /// List the archetypes and their stats
    Roster,
}

#[derive(Parser)]
#[command(name = "duel-cli")]
#[command(about = "Turn-based duel simulator")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Serialize)]
struct Report<'a> {
    first: &'a Fighter,
    second: &'a Fighter,
    winner: Option<&'a str>,
    #[serde(flatten)]
    outcome: &'a DuelOutcome,
}

fn to_role(a: Archetype) -> Role {
    match a {
        Archetype::Tank => Role::Tank,
        Archetype::Medic => Role::Medic,
        Archetype::Damage => Role::Damage,
        Archetype::Sniper => Role::Sniper,
    }
}

fn dice_for(seed: Option<u64>) -> Dice {
    match seed {
        Some(seed) => Dice::from_seed(seed),
        None => Dice::from_entropy(),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Duel {
            first,
            second,
            first_name,
            second_name,
            seed,
            pause_ms,
            max_turns,
            quiet,
            json,
        } => {
            let mut a = Fighter::from_role(to_role(first), first_name.as_deref());
            let mut b = Fighter::from_role(to_role(second), second_name.as_deref());
            let options = DuelOptions {
                verbose: !quiet && !json,
                pause: Duration::from_millis(pause_ms),
                max_turns,
            };
            tracing::debug!(?seed, first = a.name(), second = b.name(), "starting duel");
            let mut dice = dice_for(seed);
            let outcome = run_duel(&mut a, &mut b, &options, &mut dice, &mut ThreadSleep, |line| {
                println!("{}", line)
            })?;

            if json {
                let report = Report {
                    first: &a,
                    second: &b,
                    winner: outcome.winner_of(&a, &b).map(Fighter::name),
                    outcome: &outcome,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_summary(&a, &b, &outcome);
            }
        }
        Cmd::Demo { seed, pause_ms } => {
            let mut dice = dice_for(seed);
            let (mut a, mut b) = pick_pair(builtin_roster(), &mut dice)
                .ok_or_else(|| anyhow::anyhow!("built-in roster needs at least two fighters"))?;
            let options = DuelOptions {
                verbose: true,
                pause: Duration::from_millis(pause_ms),
                max_turns: None,
            };
            let outcome = run_duel(&mut a, &mut b, &options, &mut dice, &mut ThreadSleep, |line| {
                println!("{}", line)
            })?;
            print_summary(&a, &b, &outcome);
        }
        Cmd::Roster => {
            println!("{:<8} {:>4} {:>4} {:>6}  heal", "role", "hp", "dmg", "acc");
            for role in Role::ALL {
                let p = role.preset();
                let heal = match p.heal {
                    Some(h) => format!("{} @ {:.0}%", h.amount, h.chance * 100.0),
                    None => "-".to_string(),
                };
                println!(
                    "{:<8} {:>4} {:>4} {:>5.0}%  {}",
                    role,
                    p.max_health,
                    p.damage,
                    p.accuracy * 100.0,
                    heal
                );
            }
        }
    }
    Ok(())
}

fn print_summary(a: &Fighter, b: &Fighter, outcome: &DuelOutcome) {
    println!();
    println!("=== Result ===");
    println!("{}", a);
    println!("{}", b);
    match outcome.verdict {
        Verdict::Winner(_) => {
            if let Some(winner) = outcome.winner_of(a, b) {
                println!("Winner: {} after {} turns", winner.name(), outcome.turn_count());
            }
        }
        Verdict::Stalemate => {
            println!("Stalemate after {} turns", outcome.turn_count());
        }
    }
}
