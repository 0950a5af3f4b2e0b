use thiserror::Error;

/// Internal-consistency failures of the duel state machine. Neither can
/// happen while health clamping and turn alternation are correct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DuelError {
    #[error("duel finished with no fighter standing ({first} and {second} are both at 0 HP)")]
    NoSurvivors { first: String, second: String },
    #[error("duel finished with both fighters standing ({first} and {second})")]
    BothStanding { first: String, second: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown archetype '{0}' (expected tank, medic, damage or sniper)")]
pub struct UnknownArchetype(pub String);
