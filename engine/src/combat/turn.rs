use serde::Serialize;

use crate::fighter::{Fighter, Role};
use crate::RandomSource;

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TurnOutcome {
    Hit { damage: u32 },
    Miss,
    Heal { amount: u32 },
}

impl TurnOutcome {
    pub fn is_hit(self) -> bool {
        matches!(self, TurnOutcome::Hit { .. })
    }
}

/// Resolve one turn of `actor` against `target`.
///
/// A wounded Medic first rolls against its heal chance; a successful heal
/// ends the turn. Everyone else, and a Medic whose heal did not trigger,
/// attacks with a fresh draw.
pub fn resolve_turn(
    actor: &mut Fighter,
    target: &mut Fighter,
    rng: &mut impl RandomSource,
) -> TurnOutcome {
    if actor.role() == Role::Medic {
        if let Some(heal) = actor.heal_profile() {
            // The heal roll is drawn even at full health.
            let roll = rng.next_unit();
            if roll < heal.chance && !actor.is_full_health() {
                actor.apply_heal(heal.amount);
                return TurnOutcome::Heal { amount: heal.amount };
            }
        }
    }

    let strike = actor.attempt_attack(target, rng);
    if strike.hit {
        TurnOutcome::Hit { damage: strike.damage }
    } else {
        TurnOutcome::Miss
    }
}
