use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::content::ArchetypePreset;
use crate::error::UnknownArchetype;
use crate::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Tank,
    Medic,
    Damage,
    Sniper,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Tank, Role::Medic, Role::Damage, Role::Sniper];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Medic => "Medic",
            Role::Damage => "Damage",
            Role::Sniper => "Sniper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownArchetype;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tank" => Ok(Role::Tank),
            "medic" => Ok(Role::Medic),
            "damage" => Ok(Role::Damage),
            "sniper" => Ok(Role::Sniper),
            _ => Err(UnknownArchetype(s.to_string())),
        }
    }
}

/// Self-heal parameters carried by the Medic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealProfile {
    pub amount: u32,
    /// Probability in `[0, 1]` that a turn is spent healing.
    pub chance: f64,
}

/// Result of a single attack attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub hit: bool,
    pub damage: u32,
}

/// One combatant. Health always stays within `0..=max_health`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fighter {
    name: String,
    role: Role,
    max_health: u32,
    health: u32,
    damage: u32,
    accuracy: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    heal: Option<HealProfile>,
}

impl Fighter {
    pub fn new(name: impl Into<String>, preset: &ArchetypePreset) -> Self {
        Self {
            name: name.into(),
            role: preset.role,
            max_health: preset.max_health,
            health: preset.max_health,
            damage: preset.damage,
            accuracy: preset.accuracy,
            heal: preset.heal,
        }
    }

    /// Build a fresh fighter of `role`, named after the role unless `name` is given.
    pub fn from_role(role: Role, name: Option<&str>) -> Self {
        let name = name.unwrap_or(role.as_str());
        Self::new(name, role.preset())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn heal_profile(&self) -> Option<HealProfile> {
        self.heal
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_full_health(&self) -> bool {
        self.health >= self.max_health
    }

    pub fn apply_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn apply_heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Roll once against accuracy; a roll equal to the accuracy still hits.
    pub fn attempt_attack(&self, target: &mut Fighter, rng: &mut impl RandomSource) -> Strike {
        let roll = rng.next_unit();
        if roll <= self.accuracy {
            target.apply_damage(self.damage);
            Strike { hit: true, damage: self.damage }
        } else {
            Strike { hit: false, damage: 0 }
        }
    }
}

impl fmt::Display for Fighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) HP:{}/{}",
            self.name, self.role, self.health, self.max_health
        )
    }
}
