use std::{thread, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::combat::turn::{resolve_turn, TurnOutcome};
use crate::error::DuelError;
use crate::fighter::{Fighter, Role};
use crate::{narrate, Dice, RandomSource};

/// Which of the two fighters handed to [`run_duel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DuelOptions {
    /// Emit narration lines to the caller's sink.
    pub verbose: bool,
    /// Delay between turns; only honoured while verbose.
    pub pause: Duration,
    /// Stop with [`Verdict::Stalemate`] once this many turns have been played.
    pub max_turns: Option<u32>,
}

/// Hook invoked between turns for cosmetic pacing.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self, _delay: Duration) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pacer for ThreadSleep {
    fn pause(&mut self, delay: Duration) {
        thread::sleep(delay);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "side", rename_all = "snake_case")]
pub enum Verdict {
    Winner(Side),
    /// The turn cap was reached with both fighters standing.
    Stalemate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelState {
    NotStarted,
    InProgress { attacker: Side, defender: Side },
    Finished(Verdict),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub number: u32,
    pub actor: Side,
    pub outcome: TurnOutcome,
    /// Actor health after the turn resolved.
    pub actor_health: u32,
    /// Target health after the turn resolved.
    pub target_health: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuelOutcome {
    pub verdict: Verdict,
    pub first_attacker: Side,
    pub turns: Vec<TurnRecord>,
}

impl DuelOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self.verdict {
            Verdict::Winner(side) => Some(side),
            Verdict::Stalemate => None,
        }
    }

    pub fn turn_count(&self) -> u32 {
        self.turns.len() as u32
    }

    /// Resolve the winning side back to one of the fighters that fought.
    pub fn winner_of<'a>(&self, first: &'a Fighter, second: &'a Fighter) -> Option<&'a Fighter> {
        self.winner().map(|side| match side {
            Side::First => first,
            Side::Second => second,
        })
    }
}

fn pair<'a>(
    actor: Side,
    first: &'a mut Fighter,
    second: &'a mut Fighter,
) -> (&'a mut Fighter, &'a mut Fighter) {
    match actor {
        Side::First => (first, second),
        Side::Second => (second, first),
    }
}

/// The side that is still standing, if exactly one is.
fn sole_survivor(first: &Fighter, second: &Fighter) -> Result<Side, DuelError> {
    match (first.is_alive(), second.is_alive()) {
        (true, false) => Ok(Side::First),
        (false, true) => Ok(Side::Second),
        (false, false) => Err(DuelError::NoSurvivors {
            first: first.name().to_string(),
            second: second.name().to_string(),
        }),
        (true, true) => Err(DuelError::BothStanding {
            first: first.name().to_string(),
            second: second.name().to_string(),
        }),
    }
}

/// Fight `first` against `second` until one of them drops to 0 HP.
///
/// The opening attacker is picked with one coin draw (below 0.5 means
/// `first`), after which the two alternate. Both fighters are mutated in
/// place and keep their final health. If a fighter enters already at 0 HP no
/// turn is played and the other one wins outright.
pub fn run_duel(
    first: &mut Fighter,
    second: &mut Fighter,
    options: &DuelOptions,
    rng: &mut impl RandomSource,
    pacer: &mut impl Pacer,
    mut narration: impl FnMut(String),
) -> Result<DuelOutcome, DuelError> {
    let mut say = |line: String| {
        if options.verbose {
            narration(line);
        }
    };

    say(narrate::opening(first, second));

    let mut state = DuelState::NotStarted;
    let mut first_attacker = Side::First;
    let mut turns: Vec<TurnRecord> = Vec::new();

    let verdict = loop {
        state = match state {
            DuelState::NotStarted => {
                let attacker = if rng.coin() { Side::First } else { Side::Second };
                first_attacker = attacker;
                let (actor, _) = pair(attacker, first, second);
                say(narrate::initiative(actor));
                DuelState::InProgress {
                    attacker,
                    defender: attacker.other(),
                }
            }
            DuelState::InProgress { attacker, defender } => {
                if !(first.is_alive() && second.is_alive()) {
                    let winner = sole_survivor(first, second)?;
                    warn!(?winner, "fighter entered the duel at 0 HP; no turns played");
                    let (survivor, _) = pair(winner, first, second);
                    say(narrate::walkover(survivor));
                    DuelState::Finished(Verdict::Winner(winner))
                } else if options
                    .max_turns
                    .is_some_and(|cap| turns.len() as u32 >= cap)
                {
                    warn!(turns = turns.len(), "turn cap reached; declaring stalemate");
                    say(narrate::stalemate(turns.len() as u32));
                    DuelState::Finished(Verdict::Stalemate)
                } else {
                    let number = turns.len() as u32 + 1;
                    let (actor, target) = pair(attacker, first, second);
                    say(narrate::turn_header(number, actor, target));

                    let outcome = resolve_turn(actor, target, rng);
                    say(narrate::outcome(actor, target, outcome));
                    debug!(
                        turn = number,
                        actor = actor.name(),
                        ?outcome,
                        actor_hp = actor.health(),
                        target_hp = target.health(),
                        "turn resolved"
                    );
                    turns.push(TurnRecord {
                        number,
                        actor: attacker,
                        outcome,
                        actor_health: actor.health(),
                        target_health: target.health(),
                    });

                    if !target.is_alive() {
                        say(narrate::defeat(actor, target));
                        DuelState::Finished(Verdict::Winner(attacker))
                    } else {
                        if options.verbose && !options.pause.is_zero() {
                            pacer.pause(options.pause);
                        }
                        DuelState::InProgress {
                            attacker: defender,
                            defender: attacker,
                        }
                    }
                }
            }
            DuelState::Finished(verdict) => break verdict,
        };
    };

    if let Verdict::Winner(side) = verdict {
        let survivor = sole_survivor(first, second)?;
        debug_assert_eq!(survivor, side, "winner must be the only fighter standing");
    }

    info!(
        ?verdict,
        turns = turns.len(),
        first_hp = first.health(),
        second_hp = second.health(),
        "duel finished"
    );

    Ok(DuelOutcome {
        verdict,
        first_attacker,
        turns,
    })
}

/// Aggregate results of many independent duels between two archetypes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupStats {
    pub first: Role,
    pub second: Role,
    pub trials: u32,
    pub first_wins: u32,
    pub second_wins: u32,
    pub stalemates: u32,
    pub total_turns: u64,
}

impl MatchupStats {
    pub fn average_turns(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.trials as f64
        }
    }

    pub fn win_rate(&self, side: Side) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let wins = match side {
            Side::First => self.first_wins,
            Side::Second => self.second_wins,
        };
        wins as f64 / self.trials as f64
    }
}

/// Run `trials` quiet duels between fresh fighters; trial `i` is seeded with
/// `seed + i`.
pub fn simulate_many(
    first: Role,
    second: Role,
    trials: u32,
    seed: u64,
    max_turns: Option<u32>,
) -> Result<MatchupStats, DuelError> {
    let options = DuelOptions {
        max_turns,
        ..DuelOptions::default()
    };
    let mut stats = MatchupStats {
        first,
        second,
        trials,
        first_wins: 0,
        second_wins: 0,
        stalemates: 0,
        total_turns: 0,
    };

    for i in 0..trials {
        let mut a = Fighter::from_role(first, None);
        let mut b = Fighter::from_role(second, None);
        let mut dice = Dice::from_seed(seed.wrapping_add(i as u64));
        let outcome = run_duel(&mut a, &mut b, &options, &mut dice, &mut NoPause, |_| {})?;

        stats.total_turns += outcome.turns.len() as u64;
        match outcome.verdict {
            Verdict::Winner(Side::First) => stats.first_wins += 1,
            Verdict::Winner(Side::Second) => stats.second_wins += 1,
            Verdict::Stalemate => stats.stalemates += 1,
        }
    }

    debug!(?first, ?second, trials, "matchup simulated");
    Ok(stats)
}
