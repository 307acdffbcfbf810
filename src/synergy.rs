//! Roster-wide offense/defense synergy.
//!
//! Offense asks how well the roster hits each defending type; a creature is
//! only as good as its best attacking type against that defender. Defense asks
//! how exposed each roster member is to each attacking type, using the product
//! of the matchups against all of the member's types.

use crate::roster::Creature;
use crate::type_chart::TypeChart;
use log::debug;
use ordered_float::OrderedFloat;
use schema::ElementalType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SynergyBucket {
    Strength,
    Weakness,
    Immunity,
}

impl fmt::Display for SynergyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynergyBucket::Strength => write!(f, "Strengths"),
            SynergyBucket::Weakness => write!(f, "Weaknesses"),
            SynergyBucket::Immunity => write!(f, "Immunities"),
        }
    }
}

impl SynergyBucket {
    /// Bucket for the roster's best multiplier against a defending type.
    fn for_offense(multiplier: f32) -> Option<Self> {
        if multiplier > 1.0 {
            Some(SynergyBucket::Strength)
        } else if multiplier == 0.0 {
            Some(SynergyBucket::Immunity)
        } else if multiplier < 1.0 {
            Some(SynergyBucket::Weakness)
        } else {
            None
        }
    }

    /// Bucket for the multiplier a creature takes from an attacking type.
    fn for_defense(multiplier: f32) -> Option<Self> {
        if multiplier > 1.0 {
            Some(SynergyBucket::Weakness)
        } else if multiplier == 0.0 {
            Some(SynergyBucket::Immunity)
        } else if multiplier < 1.0 {
            Some(SynergyBucket::Strength)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyEntry {
    #[serde(rename = "type")]
    pub elemental_type: ElementalType,
    pub multiplier: f32,
    /// Display names, in roster order
    pub contributors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynergySection {
    pub strengths: Vec<SynergyEntry>,
    pub weaknesses: Vec<SynergyEntry>,
    pub immunities: Vec<SynergyEntry>,
}

impl SynergySection {
    pub fn bucket(&self, bucket: SynergyBucket) -> &[SynergyEntry] {
        match bucket {
            SynergyBucket::Strength => &self.strengths,
            SynergyBucket::Weakness => &self.weaknesses,
            SynergyBucket::Immunity => &self.immunities,
        }
    }

    fn bucket_mut(&mut self, bucket: SynergyBucket) -> &mut Vec<SynergyEntry> {
        match bucket {
            SynergyBucket::Strength => &mut self.strengths,
            SynergyBucket::Weakness => &mut self.weaknesses,
            SynergyBucket::Immunity => &mut self.immunities,
        }
    }

    /// Every entry for `elemental_type`, with the bucket it sits in.
    pub fn entries_for(&self, elemental_type: ElementalType) -> Vec<(SynergyBucket, &SynergyEntry)> {
        [SynergyBucket::Strength, SynergyBucket::Weakness, SynergyBucket::Immunity]
            .into_iter()
            .flat_map(move |bucket| {
                self.bucket(bucket)
                    .iter()
                    .filter(move |entry| entry.elemental_type == elemental_type)
                    .map(move |entry| (bucket, entry))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty() && self.weaknesses.is_empty() && self.immunities.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamSynergySummary {
    pub offense: SynergySection,
    pub defense: SynergySection,
}

impl TeamSynergySummary {
    pub fn is_empty(&self) -> bool {
        self.offense.is_empty() && self.defense.is_empty()
    }
}

/// Aggregate type matchups across the whole roster.
pub fn compute_synergy(chart: &TypeChart, roster: &[Creature]) -> TeamSynergySummary {
    debug!("Computing synergy for a roster of {}", roster.len());

    TeamSynergySummary {
        offense: offense_section(chart, roster),
        defense: defense_section(chart, roster),
    }
}

/// The best multiplier any of the creature's own types achieves against `defending`.
pub fn best_attack_multiplier(chart: &TypeChart, creature: &Creature, defending: ElementalType) -> f32 {
    creature
        .types
        .iter()
        .map(|attacking| OrderedFloat(chart.lookup(*attacking, defending)))
        .max()
        .map_or(1.0, OrderedFloat::into_inner)
}

fn offense_section(chart: &TypeChart, roster: &[Creature]) -> SynergySection {
    let mut section = SynergySection::default();
    if roster.is_empty() {
        return section;
    }

    for defending in ElementalType::iter() {
        let bests: Vec<f32> = roster
            .iter()
            .map(|creature| best_attack_multiplier(chart, creature, defending))
            .collect();
        let Some(top) = bests.iter().copied().map(OrderedFloat).max().map(OrderedFloat::into_inner) else {
            continue;
        };
        let Some(bucket) = SynergyBucket::for_offense(top) else {
            continue;
        };

        let contributors = roster
            .iter()
            .zip(&bests)
            .filter(|(_, best)| **best == top)
            .map(|(creature, _)| creature.display_name.clone())
            .collect();

        section.bucket_mut(bucket).push(SynergyEntry {
            elemental_type: defending,
            multiplier: top,
            contributors,
        });
    }

    section
}

fn defense_section(chart: &TypeChart, roster: &[Creature]) -> SynergySection {
    let mut section = SynergySection::default();

    for attacking in ElementalType::iter() {
        let taken: Vec<(f32, Option<SynergyBucket>)> = roster
            .iter()
            .map(|creature| {
                let multiplier = chart.combined_defense_multiplier(attacking, &creature.types);
                (multiplier, SynergyBucket::for_defense(multiplier))
            })
            .collect();

        for bucket in [SynergyBucket::Strength, SynergyBucket::Weakness, SynergyBucket::Immunity] {
            let (multipliers, contributors): (Vec<f32>, Vec<String>) = roster
                .iter()
                .zip(&taken)
                .filter(|(_, (_, creature_bucket))| *creature_bucket == Some(bucket))
                .map(|(creature, (multiplier, _))| (*multiplier, creature.display_name.clone()))
                .unzip();

            if contributors.is_empty() {
                continue;
            }

            section.bucket_mut(bucket).push(SynergyEntry {
                elemental_type: attacking,
                multiplier: most_common_multiplier(&multipliers),
                contributors,
            });
        }
    }

    section
}

/// Mode of the values; ties go to the value seen first.
fn most_common_multiplier(values: &[f32]) -> f32 {
    let mut counts: Vec<(OrderedFloat<f32>, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == OrderedFloat(*value)) {
            Some((_, count)) => *count += 1,
            None => counts.push((OrderedFloat(*value), 1)),
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(OrderedFloat<f32>, usize)>, (value, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((value, count)),
        })
        .map_or(1.0, |(value, _)| value.into_inner())
}

/// Render a multiplier the way the roster UI shows it: whole numbers without a
/// fractional part, everything else with up to two decimals.
pub fn format_multiplier(multiplier: f32) -> String {
    if multiplier.fract() == 0.0 {
        format!("{}", multiplier as i64)
    } else {
        let text = format!("{:.2}", multiplier);
        text.trim_end_matches('0').to_string()
    }
}

impl fmt::Display for SynergySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in [SynergyBucket::Strength, SynergyBucket::Weakness, SynergyBucket::Immunity] {
            let entries = self.bucket(bucket);
            if entries.is_empty() {
                writeln!(f, "  {}: none", bucket)?;
                continue;
            }
            writeln!(f, "  {}:", bucket)?;
            for entry in entries {
                writeln!(
                    f,
                    "    {:<9} x{:<5} {}",
                    entry.elemental_type.to_string(),
                    format_multiplier(entry.multiplier),
                    entry.contributors.join(", ")
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for TeamSynergySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Offense")?;
        write!(f, "{}", self.offense)?;
        writeln!(f, "Defense")?;
        write!(f, "{}", self.defense)
    }
}
