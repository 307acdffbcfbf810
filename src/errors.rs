use schema::ElementalType;
use thiserror::Error;

/// Main error type for the team analysis engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Reference type chart could not be built or is not available
    #[error("Type chart error: {0}")]
    TypeChart(#[from] TypeChartError),
    /// Species or roster data could not be loaded
    #[error("Data error: {0}")]
    Data(#[from] DataError),
    /// A caller referenced a profile or creature that does not exist
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),
    /// Configuration file could not be read
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AnalysisError {
    /// True when the caller asked for something that does not exist, as
    /// opposed to the service itself being misconfigured.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalysisError::Lookup(_))
    }
}

/// Errors related to building the type chart index
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeChartError {
    /// The source table has no multiplier for this pair
    #[error("Type chart has no entry for {attacking} attacking {defending}")]
    MissingEntry {
        attacking: ElementalType,
        defending: ElementalType,
    },
    /// The source table holds a negative or non-finite multiplier
    #[error("Type chart entry {attacking} attacking {defending} has invalid multiplier {value}")]
    InvalidMultiplier {
        attacking: ElementalType,
        defending: ElementalType,
        value: f32,
    },
    /// The chart file could not be read or decoded
    #[error("Malformed type chart source: {0}")]
    MalformedSource(String),
    /// The process-wide chart was requested before initialization
    #[error("Type chart has not been initialized")]
    NotInitialized,
}

/// Errors related to loading species and roster data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// A data file could not be read
    #[error("Failed to read {path}: {details}")]
    Io { path: String, details: String },
    /// A data file could not be parsed
    #[error("Failed to parse {path}: {details}")]
    Parse { path: String, details: String },
    /// A stored creature references a species with no reference data
    #[error("Creature {creature_id} references unknown species {species}")]
    UnknownSpecies { creature_id: String, species: String },
    /// Two stored creatures share an id
    #[error("Duplicate creature id: {0}")]
    DuplicateCreatureId(String),
    /// Two profiles share an id
    #[error("Duplicate profile id: {0}")]
    DuplicateProfileId(String),
    /// A creature violates the roster invariants
    #[error("Invalid creature {creature_id}: {reason}")]
    InvalidCreature { creature_id: String, reason: String },
}

/// Errors for references to roster entries that do not exist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),
    #[error("Creature not found: {0}")]
    CreatureNotFound(String),
}

/// Errors related to reading the engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {details}")]
    Io { path: String, details: String },
    #[error("Failed to parse config {path}: {details}")]
    Parse { path: String, details: String },
}

/// Type alias for Results using AnalysisError
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Type alias for Results using TypeChartError
pub type TypeChartResult<T> = Result<T, TypeChartError>;

/// Type alias for Results using DataError
pub type DataResult<T> = Result<T, DataError>;

/// Type alias for Results using LookupError
pub type LookupResult<T> = Result<T, LookupError>;
