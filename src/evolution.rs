//! Which next-stage evolutions a creature can reach right now.

use crate::roster::Creature;
use log::debug;
use schema::{EvolutionCondition, EvolutionNode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How triggers the engine cannot check against roster state are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionPolicy {
    /// Treat item, trade, friendship and other non-level triggers as already met.
    pub assume_non_level_triggers_satisfied: bool,
}

impl Default for EvolutionPolicy {
    fn default() -> Self {
        Self {
            assume_non_level_triggers_satisfied: true,
        }
    }
}

impl EvolutionPolicy {
    pub fn strict() -> Self {
        Self {
            assume_non_level_triggers_satisfied: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionOption {
    pub target_species: String,
    pub min_level: Option<u8>,
    pub eligible: bool,
    pub blocking_reason: Option<String>,
}

impl EvolutionOption {
    fn ready(node: &EvolutionNode, min_level: Option<u8>) -> Self {
        Self {
            target_species: node.target_species.clone(),
            min_level,
            eligible: true,
            blocking_reason: None,
        }
    }

    fn blocked(node: &EvolutionNode, min_level: Option<u8>, reason: String) -> Self {
        Self {
            target_species: node.target_species.clone(),
            min_level,
            eligible: false,
            blocking_reason: Some(reason),
        }
    }
}

impl fmt::Display for EvolutionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_species)?;
        if let Some(level) = self.min_level {
            write!(f, " (Lv. {})", level)?;
        }
        match &self.blocking_reason {
            Some(reason) if !self.eligible => write!(f, " - {}", reason),
            _ => write!(f, " - ready"),
        }
    }
}

/// One option per immediate next-stage node, in source order.
pub fn resolve_evolutions(creature: &Creature, policy: &EvolutionPolicy) -> Vec<EvolutionOption> {
    let options: Vec<EvolutionOption> = creature
        .evolution_chain
        .iter()
        .map(|node| resolve_node(creature.level, node, policy))
        .collect();
    debug!(
        "{} (Lv. {}) has {} evolution options, {} eligible",
        creature.display_name,
        creature.level,
        options.len(),
        options.iter().filter(|option| option.eligible).count()
    );
    options
}

pub fn can_evolve(creature: &Creature, policy: &EvolutionPolicy) -> bool {
    resolve_evolutions(creature, policy)
        .iter()
        .any(|option| option.eligible)
}

fn resolve_node(level: u8, node: &EvolutionNode, policy: &EvolutionPolicy) -> EvolutionOption {
    // The lowest level trigger is the met one whenever any level trigger is met,
    // and the lowest unmet one otherwise.
    let min_level = node
        .conditions
        .iter()
        .filter_map(EvolutionCondition::min_level)
        .min();

    if node.conditions.is_empty() {
        return EvolutionOption::ready(node, None);
    }

    let satisfied = node.conditions.iter().any(|condition| match condition {
        EvolutionCondition::LevelUp(required) => level >= *required,
        EvolutionCondition::Other(_) => policy.assume_non_level_triggers_satisfied,
    });
    if satisfied {
        return EvolutionOption::ready(node, min_level);
    }

    match min_level {
        Some(required) => EvolutionOption::blocked(node, min_level, format!("Requires level {}", required)),
        None => {
            let kind = node
                .conditions
                .iter()
                .find_map(|condition| match condition {
                    EvolutionCondition::Other(kind) => Some(kind.as_str()),
                    EvolutionCondition::LevelUp(_) => None,
                })
                .unwrap_or("an unverified trigger");
            EvolutionOption::blocked(node, None, format!("Requires {}", kind))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(target: &str, conditions: Vec<EvolutionCondition>) -> EvolutionNode {
        EvolutionNode::new(target, conditions)
    }

    #[test]
    fn test_lowest_level_trigger_is_reported() {
        let node = node(
            "Target",
            vec![EvolutionCondition::LevelUp(30), EvolutionCondition::LevelUp(20)],
        );

        let blocked = resolve_node(10, &node, &EvolutionPolicy::default());
        assert_eq!(blocked.min_level, Some(20));
        assert_eq!(blocked.blocking_reason.as_deref(), Some("Requires level 20"));

        let met = resolve_node(25, &node, &EvolutionPolicy::default());
        assert!(met.eligible);
        assert_eq!(met.min_level, Some(20));
        assert_eq!(met.blocking_reason, None);
    }

    #[test]
    fn test_strict_policy_blocks_other_triggers() {
        let trade_only = node("Alakazam", vec![EvolutionCondition::Other("trade".to_string())]);
        let option = resolve_node(50, &trade_only, &EvolutionPolicy::strict());
        assert_eq!(
            option,
            EvolutionOption {
                target_species: "Alakazam".to_string(),
                min_level: None,
                eligible: false,
                blocking_reason: Some("Requires trade".to_string()),
            }
        );
    }

    #[test]
    fn test_strict_policy_still_honours_level() {
        let mixed = node(
            "Target",
            vec![EvolutionCondition::Other("trade".to_string()), EvolutionCondition::LevelUp(16)],
        );
        assert!(resolve_node(16, &mixed, &EvolutionPolicy::strict()).eligible);

        let early = resolve_node(15, &mixed, &EvolutionPolicy::strict());
        assert!(!early.eligible);
        assert_eq!(early.blocking_reason.as_deref(), Some("Requires level 16"));
    }

    #[test]
    fn test_option_display() {
        let ready = node("Raichu", vec![EvolutionCondition::Other("use-item".to_string())]);
        assert_eq!(resolve_node(1, &ready, &EvolutionPolicy::default()).to_string(), "Raichu - ready");

        let waiting = node("Charizard", vec![EvolutionCondition::LevelUp(36)]);
        assert_eq!(
            resolve_node(35, &waiting, &EvolutionPolicy::default()).to_string(),
            "Charizard (Lv. 36) - Requires level 36"
        );
    }
}
