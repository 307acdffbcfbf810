// Team Analysis Schema - Shared type definitions
// This crate contains the reference-data enums and structs shared between
// the team-analysis library and its build script, which compiles the type
// chart into a postcard blob.

// Re-export the main types
pub use elemental_types::*;
pub use evolution_data::*;
pub use type_chart_data::*;

pub mod elemental_types;
pub mod evolution_data;
pub mod type_chart_data;
