//! Roster members and the species/roster data they are hydrated from.

use crate::errors::{DataError, DataResult, LookupError, LookupResult};
use log::{info, warn};
use schema::{ElementalType, EvolutionNode};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Number of party slots a profile has.
pub const PARTY_SIZE: usize = 6;
pub const MAX_LEVEL: u8 = 100;

pub const SPECIES_FILE: &str = "species.ron";
pub const ROSTERS_FILE: &str = "rosters.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureStatus {
    Party,
    Stored,
    Fainted,
}

/// One roster member, as the analysis engine sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: String,
    /// Nickname if one was given, species name otherwise
    pub display_name: String,
    /// 1-2 distinct types, primary first
    pub types: Vec<ElementalType>,
    pub level: u8,
    pub status: CreatureStatus,
    /// Immediate next-stage evolution targets
    pub evolution_chain: Vec<EvolutionNode>,
}

impl Creature {
    /// Check the roster invariants: non-empty id, 1-2 distinct types, level 1-100.
    pub fn validate(&self) -> DataResult<()> {
        let invalid = |reason: String| DataError::InvalidCreature {
            creature_id: self.id.clone(),
            reason,
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id is empty".to_string()));
        }
        match self.types.as_slice() {
            [_] => {}
            [first, second] if first != second => {}
            [first, second] => {
                return Err(invalid(format!("type {} listed twice ({})", first, second)));
            }
            types => return Err(invalid(format!("expected 1-2 types, found {}", types.len()))),
        }
        if !(1..=MAX_LEVEL).contains(&self.level) {
            return Err(invalid(format!("level {} is outside 1-{}", self.level, MAX_LEVEL)));
        }
        Ok(())
    }
}

/// Species reference data: types and the evolution tree from this species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub name: String,
    pub types: Vec<ElementalType>,
    #[serde(default)]
    pub evolutions: Vec<EvolutionNode>,
}

/// A creature as stored in an imported save file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCreature {
    pub id: String,
    pub species: String,
    #[serde(default)]
    pub nickname: Option<String>,
    pub level: u8,
    pub status: CreatureStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRoster {
    pub profile_id: String,
    pub creatures: Vec<StoredCreature>,
}

/// Read-only roster and species data, hydrated into [`Creature`] values at load time.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    // profile id -> creatures in roster order
    profiles: HashMap<String, Vec<Creature>>,
    // creature id -> (profile id, position)
    creature_index: HashMap<String, (String, usize)>,
}

impl DataStore {
    /// Load `species.ron` and `rosters.ron` from `data_dir`.
    pub fn load(data_dir: &Path) -> DataResult<Self> {
        let species: Vec<SpeciesEntry> = read_ron(&data_dir.join(SPECIES_FILE))?;
        let rosters: Vec<ProfileRoster> = read_ron(&data_dir.join(ROSTERS_FILE))?;
        let store = Self::from_parts(species, rosters)?;
        info!(
            "Loaded {} profiles with {} creatures from {}",
            store.profiles.len(),
            store.creature_index.len(),
            data_dir.display()
        );
        Ok(store)
    }

    pub fn from_parts(species: Vec<SpeciesEntry>, rosters: Vec<ProfileRoster>) -> DataResult<Self> {
        let species_map: HashMap<String, SpeciesEntry> = species
            .into_iter()
            .map(|entry| (entry.name.to_ascii_lowercase(), entry))
            .collect();

        let mut store = DataStore::default();
        let mut seen_profiles = HashSet::new();

        for roster in rosters {
            if !seen_profiles.insert(roster.profile_id.clone()) {
                return Err(DataError::DuplicateProfileId(roster.profile_id));
            }

            let mut creatures = Vec::with_capacity(roster.creatures.len());
            for stored in roster.creatures {
                let creature = hydrate(stored, &species_map)?;
                creature.validate()?;
                if store.creature_index.contains_key(&creature.id) {
                    return Err(DataError::DuplicateCreatureId(creature.id));
                }
                store
                    .creature_index
                    .insert(creature.id.clone(), (roster.profile_id.clone(), creatures.len()));
                creatures.push(creature);
            }
            store.profiles.insert(roster.profile_id, creatures);
        }

        Ok(store)
    }

    /// The profile's active party: `Party` creatures in roster order, at most [`PARTY_SIZE`].
    pub fn active_party(&self, profile_id: &str) -> LookupResult<Vec<Creature>> {
        let roster = self
            .profiles
            .get(profile_id)
            .ok_or_else(|| LookupError::ProfileNotFound(profile_id.to_string()))?;

        let party: Vec<Creature> = roster
            .iter()
            .filter(|creature| creature.status == CreatureStatus::Party)
            .cloned()
            .collect();

        if party.len() > PARTY_SIZE {
            warn!(
                "Profile {} has {} creatures marked Party, keeping the first {}",
                profile_id,
                party.len(),
                PARTY_SIZE
            );
            return Ok(party.into_iter().take(PARTY_SIZE).collect());
        }
        Ok(party)
    }

    pub fn creature(&self, creature_id: &str) -> LookupResult<&Creature> {
        self.creature_index
            .get(creature_id)
            .and_then(|(profile_id, position)| self.profiles.get(profile_id)?.get(*position))
            .ok_or_else(|| LookupError::CreatureNotFound(creature_id.to_string()))
    }

    pub fn profile_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

fn hydrate(stored: StoredCreature, species_map: &HashMap<String, SpeciesEntry>) -> DataResult<Creature> {
    let species = species_map
        .get(&stored.species.to_ascii_lowercase())
        .ok_or_else(|| DataError::UnknownSpecies {
            creature_id: stored.id.clone(),
            species: stored.species.clone(),
        })?;

    Ok(Creature {
        id: stored.id,
        display_name: stored.nickname.unwrap_or_else(|| species.name.clone()),
        types: species.types.clone(),
        level: stored.level,
        status: stored.status,
        evolution_chain: species.evolutions.clone(),
    })
}

fn read_ron<T: serde::de::DeserializeOwned>(path: &Path) -> DataResult<T> {
    let content = fs::read_to_string(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    ron::from_str(&content).map_err(|e| DataError::Parse {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}
