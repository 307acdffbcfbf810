use crate::roster::{Creature, CreatureStatus};
use crate::type_chart::TypeChart;
use schema::{ElementalType, EvolutionCondition, EvolutionNode};

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```
/// let creature = TestCreatureBuilder::new("Blaze", &[ElementalType::Fire, ElementalType::Flying])
///     .with_level(50)
///     .with_evolution("Charizard", vec![EvolutionCondition::LevelUp(36)])
///     .build();
/// ```
pub struct TestCreatureBuilder {
    display_name: String,
    types: Vec<ElementalType>,
    level: u8,
    status: CreatureStatus,
    evolution_chain: Vec<EvolutionNode>,
}

impl TestCreatureBuilder {
    /// Creates a new level 50 party member with the given types.
    pub fn new(display_name: &str, types: &[ElementalType]) -> Self {
        Self {
            display_name: display_name.to_string(),
            types: types.to_vec(),
            level: 50,
            status: CreatureStatus::Party,
            evolution_chain: Vec::new(),
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_status(mut self, status: CreatureStatus) -> Self {
        self.status = status;
        self
    }

    /// Adds an immediate next-stage evolution target.
    pub fn with_evolution(mut self, target: &str, conditions: Vec<EvolutionCondition>) -> Self {
        self.evolution_chain.push(EvolutionNode::new(target, conditions));
        self
    }

    pub fn build(self) -> Creature {
        Creature {
            id: format!("test-{}", self.display_name.to_ascii_lowercase()),
            display_name: self.display_name,
            types: self.types,
            level: self.level,
            status: self.status,
            evolution_chain: self.evolution_chain,
        }
    }
}

/// The built-in chart; panics if it is incomplete.
pub fn standard_chart() -> TypeChart {
    match TypeChart::standard() {
        Ok(chart) => chart,
        Err(err) => panic!("Built-in type chart failed to load: {}", err),
    }
}

pub fn names(contributors: &[String]) -> Vec<&str> {
    contributors.iter().map(String::as_str).collect()
}
