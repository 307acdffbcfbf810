use crate::ElementalType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Raw type chart as it is authored: attacking type -> defending type -> multiplier.
///
/// Nothing here guarantees completeness; the analysis library checks that when it
/// builds its index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeChartData {
    pub rows: BTreeMap<ElementalType, BTreeMap<ElementalType, f32>>,
}

impl TypeChartData {
    /// A complete chart where every matchup is neutral.
    pub fn neutral() -> Self {
        let rows = ElementalType::iter()
            .map(|attacking| {
                let row = ElementalType::iter().map(|defending| (defending, 1.0)).collect();
                (attacking, row)
            })
            .collect();
        Self { rows }
    }

    pub fn multiplier(&self, attacking: ElementalType, defending: ElementalType) -> Option<f32> {
        self.rows.get(&attacking)?.get(&defending).copied()
    }

    pub fn set(&mut self, attacking: ElementalType, defending: ElementalType, multiplier: f32) -> &mut Self {
        self.rows.entry(attacking).or_default().insert(defending, multiplier);
        self
    }

    pub fn remove(&mut self, attacking: ElementalType, defending: ElementalType) -> Option<f32> {
        self.rows.get_mut(&attacking)?.remove(&defending)
    }
}
