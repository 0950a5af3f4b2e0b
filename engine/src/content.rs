use crate::fighter::{Fighter, HealProfile, Role};
use crate::RandomSource;

/// Fixed stat block for one archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypePreset {
    pub role: Role,
    pub max_health: u32,
    pub damage: u32,
    pub accuracy: f64,
    pub heal: Option<HealProfile>,
}

pub const TANK: ArchetypePreset = ArchetypePreset {
    role: Role::Tank,
    max_health: 140,
    damage: 14,
    accuracy: 0.45,
    heal: None,
};

pub const MEDIC: ArchetypePreset = ArchetypePreset {
    role: Role::Medic,
    max_health: 90,
    damage: 10,
    accuracy: 0.55,
    heal: Some(HealProfile { amount: 18, chance: 0.30 }),
};

pub const DAMAGE: ArchetypePreset = ArchetypePreset {
    role: Role::Damage,
    max_health: 75,
    damage: 18,
    accuracy: 0.55,
    heal: None,
};

pub const SNIPER: ArchetypePreset = ArchetypePreset {
    role: Role::Sniper,
    max_health: 80,
    damage: 15,
    accuracy: 0.78,
    heal: None,
};

impl Role {
    pub fn preset(self) -> &'static ArchetypePreset {
        match self {
            Role::Tank => &TANK,
            Role::Medic => &MEDIC,
            Role::Damage => &DAMAGE,
            Role::Sniper => &SNIPER,
        }
    }
}

pub fn tank(name: Option<&str>) -> Fighter {
    Fighter::from_role(Role::Tank, name)
}

pub fn medic(name: Option<&str>) -> Fighter {
    Fighter::from_role(Role::Medic, name)
}

pub fn damage(name: Option<&str>) -> Fighter {
    Fighter::from_role(Role::Damage, name)
}

pub fn sniper(name: Option<&str>) -> Fighter {
    Fighter::from_role(Role::Sniper, name)
}

/// The demo roster: one named fighter per archetype.
pub fn builtin_roster() -> Vec<Fighter> {
    vec![
        tank(Some("Tank = Islam")),
        medic(Some("Medic = Alina")),
        damage(Some("Damage = Abdu")),
        sniper(Some("Sniper = Nurbol")),
    ]
}

/// Draw two distinct fighters out of `roster`, in draw order.
/// Returns `None` when the roster holds fewer than two fighters.
pub fn pick_pair(
    mut roster: Vec<Fighter>,
    rng: &mut impl RandomSource,
) -> Option<(Fighter, Fighter)> {
    if roster.len() < 2 {
        return None;
    }
    let first = roster.swap_remove(draw_index(rng, roster.len()));
    let second = roster.swap_remove(draw_index(rng, roster.len()));
    Some((first, second))
}

fn draw_index(rng: &mut impl RandomSource, len: usize) -> usize {
    // min() guards against a source that returns exactly 1.0
    ((rng.next_unit() * len as f64) as usize).min(len - 1)
}
