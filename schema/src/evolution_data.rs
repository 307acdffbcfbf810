use serde::{Deserialize, Serialize};

/// Trigger name that species data uses for level-based evolution.
pub const LEVEL_UP_TRIGGER: &str = "level-up";

/// Evolution trigger as species data providers describe it: a trigger kind
/// plus whatever optional fields that kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionTrigger {
    pub trigger: String,
    #[serde(default)]
    pub min_level: Option<u8>,
}

/// A single way a creature can reach an evolution target.
///
/// Species data is read through [`EvolutionTrigger`], so a level trigger
/// without a minimum level never reaches this type as `LevelUp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EvolutionTrigger", into = "EvolutionTrigger")]
pub enum EvolutionCondition {
    LevelUp(u8),
    /// Item use, trade, friendship and any other trigger that cannot be
    /// checked against roster state.
    Other(String),
}

impl EvolutionCondition {
    pub fn min_level(&self) -> Option<u8> {
        match self {
            EvolutionCondition::LevelUp(level) => Some(*level),
            EvolutionCondition::Other(_) => None,
        }
    }
}

impl From<EvolutionTrigger> for EvolutionCondition {
    fn from(trigger: EvolutionTrigger) -> Self {
        match trigger.min_level {
            Some(level) if trigger.trigger == LEVEL_UP_TRIGGER => EvolutionCondition::LevelUp(level),
            _ => EvolutionCondition::Other(trigger.trigger),
        }
    }
}

impl From<EvolutionCondition> for EvolutionTrigger {
    fn from(condition: EvolutionCondition) -> Self {
        match condition {
            EvolutionCondition::LevelUp(level) => EvolutionTrigger {
                trigger: LEVEL_UP_TRIGGER.to_string(),
                min_level: Some(level),
            },
            EvolutionCondition::Other(kind) => EvolutionTrigger {
                trigger: kind,
                min_level: None,
            },
        }
    }
}

/// One node of a species' evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub target_species: String,
    /// OR-combined; an empty list means the target is always reachable.
    #[serde(default)]
    pub conditions: Vec<EvolutionCondition>,
    /// Later stages reachable from `target_species`.
    #[serde(default)]
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn new(target_species: impl Into<String>, conditions: Vec<EvolutionCondition>) -> Self {
        Self {
            target_species: target_species.into(),
            conditions,
            children: Vec::new(),
        }
    }
}
