//! Starting classes and level arithmetic.
//!
//! Every point spent on an attribute costs exactly one level, so a
//! character's level is its class's base level plus the sum of attribute
//! deltas above that class's base. Points spent are never stored: the level
//! of an attribute set is always recomputed against the cheapest compatible
//! class.

use core::str::FromStr;

use crate::attributes::Attributes;
use crate::error::{ErrorSeverity, PlannerError};

/// The ten starting archetypes.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StartingClass {
    #[default]
    Vagabond,
    Warrior,
    Hero,
    Bandit,
    Astrologer,
    Prophet,
    Samurai,
    Prisoner,
    Confessor,
    Wretch,
}

/// Base level and attributes of a starting class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartingStats {
    pub level: u32,
    pub attributes: Attributes,
}

impl StartingStats {
    const fn new(level: u32, values: [u8; 8]) -> Self {
        Self {
            level,
            attributes: Attributes::new(values),
        }
    }
}

impl StartingClass {
    pub const ALL: [StartingClass; 10] = [
        StartingClass::Vagabond,
        StartingClass::Warrior,
        StartingClass::Hero,
        StartingClass::Bandit,
        StartingClass::Astrologer,
        StartingClass::Prophet,
        StartingClass::Samurai,
        StartingClass::Prisoner,
        StartingClass::Confessor,
        StartingClass::Wretch,
    ];

    /// Parses a class name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`ClassError::Unknown`] for names outside the catalog.
    pub fn from_name(name: &str) -> Result<Self, ClassError> {
        Self::from_str(name.trim()).map_err(|_| ClassError::Unknown(name.to_owned()))
    }

    /// Base level and attributes for this class.
    pub const fn starting_stats(self) -> StartingStats {
        // level, [vig, min, end, str, dex, int, fai, arc]
        match self {
            Self::Vagabond => StartingStats::new(9, [15, 10, 11, 14, 13, 9, 9, 7]),
            Self::Warrior => StartingStats::new(8, [11, 12, 11, 10, 16, 10, 8, 9]),
            Self::Hero => StartingStats::new(7, [14, 9, 12, 16, 9, 7, 8, 11]),
            Self::Bandit => StartingStats::new(5, [10, 11, 10, 9, 13, 9, 8, 14]),
            Self::Astrologer => StartingStats::new(6, [9, 15, 9, 8, 12, 16, 7, 9]),
            Self::Prophet => StartingStats::new(7, [10, 14, 8, 11, 10, 7, 16, 10]),
            Self::Samurai => StartingStats::new(9, [12, 11, 13, 12, 15, 9, 8, 8]),
            Self::Prisoner => StartingStats::new(9, [11, 12, 11, 11, 14, 14, 6, 9]),
            Self::Confessor => StartingStats::new(10, [10, 13, 10, 12, 12, 9, 14, 9]),
            Self::Wretch => StartingStats::new(1, [10; 8]),
        }
    }
}

/// Lowest level at which `attributes` is reachable from some class, or
/// `None` if no class's base attributes are dominated by `attributes`.
fn lowest_reachable_level(attributes: &Attributes) -> Option<u32> {
    StartingClass::ALL
        .iter()
        .filter_map(|class| {
            let base = class.starting_stats();
            attributes
                .points_above(&base.attributes)
                .map(|spent| base.level + spent)
        })
        .min()
}

/// Reverse-maps attributes to the minimal character level producing them.
///
/// When no class is compatible (some attribute lies below every class's
/// base) this falls back to level 1 and logs a warning. Use
/// [`try_calculate_level`] to treat that case as an error instead.
pub fn calculate_level(attributes: &Attributes) -> u32 {
    lowest_reachable_level(attributes).unwrap_or_else(|| {
        tracing::warn!(
            ?attributes,
            "no starting class is compatible with attributes, assuming level 1"
        );
        1
    })
}

/// Strict variant of [`calculate_level`].
///
/// # Errors
///
/// Returns [`LevelError::NoCompatibleClass`] when the attributes are below
/// the base of every starting class in some dimension.
pub fn try_calculate_level(attributes: &Attributes) -> Result<u32, LevelError> {
    lowest_reachable_level(attributes).ok_or(LevelError::NoCompatibleClass(*attributes))
}

/// Errors raised when resolving a starting class by name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClassError {
    #[error("unknown starting class '{0}'")]
    Unknown(String),
}

impl PlannerError for ClassError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ClassError::Unknown(_) => "CLASS_UNKNOWN",
        }
    }
}

/// Errors raised by [`try_calculate_level`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("attributes {0:?} are below the base of every starting class")]
    NoCompatibleClass(Attributes),
}

impl PlannerError for LevelError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            LevelError::NoCompatibleClass(_) => "LEVEL_NO_COMPATIBLE_CLASS",
        }
    }
}
