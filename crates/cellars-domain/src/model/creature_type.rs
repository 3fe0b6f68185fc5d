//! CreatureType - The kind of a creature
//!
//! CreatureType is a Value Object - two types with the same variant are equal.

use core::str::FromStr;

/// The fourteen creature kinds of the bestiary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CreatureType {
    Humanoid,
    Beast,
    Undead,
    Dragon,
    Giant,
    Fiend,
    Celestial,
    Elemental,
    Aberration,
    Construct,
    Ooze,
    Plant,
    Monstrosity,
    Fey,
}

/// Type given to a creature that is built from an id alone
pub const STANDARD_CREATURE_TYPE: CreatureType = CreatureType::Monstrosity;

impl CreatureType {
    /// Upper-case name, as used in stat blocks and storage
    pub fn name(&self) -> &'static str {
        match self {
            CreatureType::Humanoid => "HUMANOID",
            CreatureType::Beast => "BEAST",
            CreatureType::Undead => "UNDEAD",
            CreatureType::Dragon => "DRAGON",
            CreatureType::Giant => "GIANT",
            CreatureType::Fiend => "FIEND",
            CreatureType::Celestial => "CELESTIAL",
            CreatureType::Elemental => "ELEMENTAL",
            CreatureType::Aberration => "ABERRATION",
            CreatureType::Construct => "CONSTRUCT",
            CreatureType::Ooze => "OOZE",
            CreatureType::Plant => "PLANT",
            CreatureType::Monstrosity => "MONSTROSITY",
            CreatureType::Fey => "FEY",
        }
    }

    /// Get all creature types (useful for iteration)
    pub fn all() -> &'static [CreatureType] {
        &[
            CreatureType::Humanoid,
            CreatureType::Beast,
            CreatureType::Undead,
            CreatureType::Dragon,
            CreatureType::Giant,
            CreatureType::Fiend,
            CreatureType::Celestial,
            CreatureType::Elemental,
            CreatureType::Aberration,
            CreatureType::Construct,
            CreatureType::Ooze,
            CreatureType::Plant,
            CreatureType::Monstrosity,
            CreatureType::Fey,
        ]
    }
}

impl core::fmt::Display for CreatureType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returned when a string names no creature type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCreatureTypeError {
    pub input: String,
}

impl core::fmt::Display for ParseCreatureTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Unknown creature type: {}", self.input)
    }
}

impl std::error::Error for ParseCreatureTypeError {}

impl FromStr for CreatureType {
    type Err = ParseCreatureTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CreatureType::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCreatureTypeError {
                input: s.to_string(),
            })
    }
}
