//! Indexed elemental type chart.
//!
//! The chart is built once from a [`TypeChartData`] table, either the built-in
//! table compiled from `data/type_chart.ron` by the build script or an override
//! file, and is read-only afterwards.

use crate::errors::{TypeChartError, TypeChartResult};
use log::info;
use schema::{ElementalType, TypeChartData};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use strum::{EnumCount, IntoEnumIterator};

// Include the compiled chart
const BUILT_IN_CHART: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/type_chart.postcard"));

// Process-wide chart - initialized once at startup
static TYPE_CHART: OnceLock<TypeChart> = OnceLock::new();

const TYPE_COUNT: usize = ElementalType::COUNT;

/// Where the process-wide chart is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeChartSource {
    #[default]
    BuiltIn,
    File(PathBuf),
}

/// Dense attacking × defending multiplier table.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    multipliers: [[f32; TYPE_COUNT]; TYPE_COUNT],
}

impl TypeChart {
    /// Build the index, rejecting tables with gaps or unusable multipliers.
    pub fn from_data(data: &TypeChartData) -> TypeChartResult<Self> {
        let mut multipliers = [[1.0; TYPE_COUNT]; TYPE_COUNT];

        for attacking in ElementalType::iter() {
            for defending in ElementalType::iter() {
                let value = data
                    .multiplier(attacking, defending)
                    .ok_or(TypeChartError::MissingEntry {
                        attacking,
                        defending,
                    })?;
                if !value.is_finite() || value < 0.0 {
                    return Err(TypeChartError::InvalidMultiplier {
                        attacking,
                        defending,
                        value,
                    });
                }
                multipliers[attacking.index()][defending.index()] = value;
            }
        }

        Ok(Self { multipliers })
    }

    /// The chart compiled into the binary.
    pub fn standard() -> TypeChartResult<Self> {
        let data: TypeChartData = postcard::from_bytes(BUILT_IN_CHART)
            .map_err(|e| TypeChartError::MalformedSource(format!("built-in chart: {}", e)))?;
        Self::from_data(&data)
    }

    /// Load a chart from a RON file shaped like `data/type_chart.ron`.
    pub fn load_ron(path: &Path) -> TypeChartResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| TypeChartError::MalformedSource(format!("{}: {}", path.display(), e)))?;
        let data: TypeChartData = ron::from_str(&content)
            .map_err(|e| TypeChartError::MalformedSource(format!("{}: {}", path.display(), e)))?;
        Self::from_data(&data)
    }

    pub fn load(source: &TypeChartSource) -> TypeChartResult<Self> {
        match source {
            TypeChartSource::BuiltIn => Self::standard(),
            TypeChartSource::File(path) => Self::load_ron(path),
        }
    }

    /// Multiplier for a single attacking type against a single defending type.
    pub fn lookup(&self, attacking: ElementalType, defending: ElementalType) -> f32 {
        self.multipliers[attacking.index()][defending.index()]
    }

    /// Multiplier an attack of `attacking` type deals to a creature with the
    /// given types: the product of the per-type matchups.
    pub fn combined_defense_multiplier(&self, attacking: ElementalType, defending: &[ElementalType]) -> f32 {
        defending
            .iter()
            .map(|defending_type| self.lookup(attacking, *defending_type))
            .product()
    }

    pub fn is_immune(&self, attacking: ElementalType, defending: ElementalType) -> bool {
        self.lookup(attacking, defending) == 0.0
    }
}

/// Build the process-wide chart. Later calls return the chart from the first
/// successful call without reloading.
pub fn initialize_type_chart(source: &TypeChartSource) -> TypeChartResult<&'static TypeChart> {
    if let Some(chart) = TYPE_CHART.get() {
        return Ok(chart);
    }
    let chart = TypeChart::load(source)?;
    info!("Loaded type chart from {:?}", source);
    Ok(TYPE_CHART.get_or_init(|| chart))
}

/// The process-wide chart, if [`initialize_type_chart`] has run.
pub fn type_chart() -> TypeChartResult<&'static TypeChart> {
    TYPE_CHART.get().ok_or(TypeChartError::NotInitialized)
}
