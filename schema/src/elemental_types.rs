use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// The fixed set of elemental types that classify creatures and attacks.
///
/// The declaration order is the canonical order used for chart rows and for
/// every list the analysis engine produces.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ElementalType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl ElementalType {
    /// Position of this type in the canonical order, usable as an array index.
    pub const fn index(self) -> usize {
        self as usize
    }
}
