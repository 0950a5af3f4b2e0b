//! Human-readable duel narration. Purely presentational: nothing here feeds
//! back into resolution.

use crate::combat::turn::TurnOutcome;
use crate::fighter::Fighter;

pub fn opening(first: &Fighter, second: &Fighter) -> String {
    format!("[START] 1) {}  2) {}", first, second)
}

pub fn initiative(attacker: &Fighter) -> String {
    format!("[INIT] {} moves first", attacker.name())
}

pub fn turn_header(number: u32, actor: &Fighter, target: &Fighter) -> String {
    format!("[TURN {}] {} -> {}", number, actor.name(), target.name())
}

pub fn outcome(actor: &Fighter, target: &Fighter, outcome: TurnOutcome) -> String {
    match outcome {
        TurnOutcome::Hit { damage } => format!(
            "[HIT][{}] deals {} damage. {} HP: {}/{}",
            actor.name(),
            damage,
            target.name(),
            target.health(),
            target.max_health()
        ),
        TurnOutcome::Miss => format!("[MISS][{}] misses", actor.name()),
        TurnOutcome::Heal { amount } => format!(
            "[HEAL][{}] heals {} HP. Now: {}/{}",
            actor.name(),
            amount,
            actor.health(),
            actor.max_health()
        ),
    }
}

pub fn defeat(winner: &Fighter, loser: &Fighter) -> String {
    format!("[END] {} falls. {} wins!", loser.name(), winner.name())
}

pub fn walkover(winner: &Fighter) -> String {
    format!("[END] Winner: {}", winner.name())
}

pub fn stalemate(turns: u32) -> String {
    format!("[STALEMATE] both fighters still standing after {} turns", turns)
}
