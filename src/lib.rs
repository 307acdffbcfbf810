// In: src/lib.rs

//! Team Analysis Engine
//!
//! Deterministic analysis over a creature roster: offense/defense type
//! synergy for the active party, and the evolution targets each creature can
//! currently reach. Both computations are pure functions over immutable
//! inputs and a read-only type chart.

// --- MODULE DECLARATIONS ---
pub mod analysis_interface;
pub mod config;
pub mod errors;
pub mod evolution;
pub mod roster;
pub mod synergy;
pub mod type_chart;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{ElementalType, EvolutionCondition, EvolutionNode, EvolutionTrigger, TypeChartData};

// --- From this crate's modules (`src/`) ---

// Core computations.
pub use evolution::{can_evolve, resolve_evolutions, EvolutionOption, EvolutionPolicy};
pub use synergy::{compute_synergy, SynergyBucket, SynergyEntry, SynergySection, TeamSynergySummary};
pub use type_chart::{initialize_type_chart, type_chart, TypeChart, TypeChartSource};

// Roster data and the service surface.
pub use analysis_interface::{AnalysisService, EvolutionReport, SynergyReport};
pub use config::AnalysisConfig;
pub use roster::{Creature, CreatureStatus, DataStore, PARTY_SIZE};

// Crate-specific error and result types.
pub use errors::{
    AnalysisError, AnalysisResult, ConfigError, DataError, DataResult, LookupError, LookupResult,
    TypeChartError, TypeChartResult,
};
