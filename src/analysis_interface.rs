//! Read-only analysis operations shared by the CLI and the MCP server.
//!
//! Each operation looks the roster or creature up in the [`DataStore`] and runs
//! the matching pure computation. Lookups are the only failure path here; chart
//! and data problems surface when the service is built.

use crate::config::AnalysisConfig;
use crate::errors::AnalysisResult;
use crate::evolution::{can_evolve, resolve_evolutions, EvolutionOption, EvolutionPolicy};
use crate::roster::DataStore;
use crate::synergy::{compute_synergy, TeamSynergySummary};
use crate::type_chart::{initialize_type_chart, TypeChart};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyReport {
    pub profile_id: String,
    /// Display names of the active party, in roster order
    pub party: Vec<String>,
    pub synergy: TeamSynergySummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionReport {
    pub creature_id: String,
    pub display_name: String,
    pub level: u8,
    pub can_evolve: bool,
    pub options: Vec<EvolutionOption>,
}

#[derive(Debug, Clone)]
pub struct AnalysisService<'a> {
    chart: &'a TypeChart,
    store: DataStore,
    policy: EvolutionPolicy,
}

impl AnalysisService<'static> {
    /// Initialize the process-wide chart and load roster data. Any error here
    /// means the service must not start.
    pub fn from_config(config: &AnalysisConfig) -> AnalysisResult<Self> {
        let chart = initialize_type_chart(&config.type_chart_source())?;
        let store = DataStore::load(&config.data_dir)?;
        Ok(Self::new(chart, store, config.evolution))
    }
}

impl<'a> AnalysisService<'a> {
    pub fn new(chart: &'a TypeChart, store: DataStore, policy: EvolutionPolicy) -> Self {
        Self { chart, store, policy }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn roster_synergy(&self, profile_id: &str) -> AnalysisResult<SynergyReport> {
        let party = self.store.active_party(profile_id)?;
        let synergy = compute_synergy(self.chart, &party);
        Ok(SynergyReport {
            profile_id: profile_id.to_string(),
            party: party.into_iter().map(|creature| creature.display_name).collect(),
            synergy,
        })
    }

    pub fn evolution_options(&self, creature_id: &str) -> AnalysisResult<EvolutionReport> {
        let creature = self.store.creature(creature_id)?;
        let options = resolve_evolutions(creature, &self.policy);
        Ok(EvolutionReport {
            creature_id: creature.id.clone(),
            display_name: creature.display_name.clone(),
            level: creature.level,
            can_evolve: can_evolve(creature, &self.policy),
            options,
        })
    }

    /// Text rendering of [`Self::roster_synergy`], errors included.
    pub fn roster_synergy_display(&self, profile_id: &str) -> String {
        match self.roster_synergy(profile_id) {
            Ok(report) => report.to_string(),
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Text rendering of [`Self::evolution_options`], errors included.
    pub fn evolution_options_display(&self, creature_id: &str) -> String {
        match self.evolution_options(creature_id) {
            Ok(report) => report.to_string(),
            Err(e) => format!("Error: {}", e),
        }
    }
}

impl fmt::Display for SynergyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Team Synergy: {} ---", self.profile_id)?;
        if self.party.is_empty() {
            return writeln!(f, "No creatures in the active party.");
        }
        writeln!(f, "Party: {}", self.party.join(", "))?;
        write!(f, "{}", self.synergy)
    }
}

impl fmt::Display for EvolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Evolutions: {} (Lv. {}) ---", self.display_name, self.level)?;
        if self.options.is_empty() {
            return writeln!(f, "This creature does not evolve.");
        }
        for option in &self.options {
            writeln!(f, "  {}", option)?;
        }
        if !self.can_evolve {
            writeln!(f, "No evolution is available yet.")?;
        }
        Ok(())
    }
}
