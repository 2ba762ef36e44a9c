use crate::error::{ErrorSeverity, PlannerError};

/// Planner constants and tunable parameters.
///
/// The defaults reproduce the game's rules. Hosts may load overrides from
/// TOML (see `planner-content`), but every loaded config must pass
/// [`OptimizerConfig::validate`] before use.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptimizerConfig {
    /// Hard cap for any single attribute.
    pub max_attribute: u8,
    /// Maximum upgrade level of regular-tier weapons.
    pub max_regular_upgrade: u8,
    /// Maximum upgrade level of special (somber) tier weapons.
    pub max_special_upgrade: u8,
    /// Score subtracted for every attribute that fails a weapon requirement.
    pub requirement_penalty: f64,
    /// Multiplier applied to attack power or spell scaling of penalized types.
    pub ineffective_multiplier: f64,
    /// Weight used for selected weapons that carry no explicit weight.
    pub default_weapon_weight: f64,
}

impl OptimizerConfig {
    // ===== game rules =====
    pub const MAX_ATTRIBUTE: u8 = 99;
    pub const MAX_REGULAR_UPGRADE: u8 = 25;
    pub const MAX_SPECIAL_UPGRADE: u8 = 10;

    // ===== scoring defaults =====
    /// Several orders of magnitude above any realistic positive score.
    pub const DEFAULT_REQUIREMENT_PENALTY: f64 = 1e9;
    pub const DEFAULT_INEFFECTIVE_MULTIPLIER: f64 = 0.1;
    pub const DEFAULT_WEAPON_WEIGHT: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            max_attribute: Self::MAX_ATTRIBUTE,
            max_regular_upgrade: Self::MAX_REGULAR_UPGRADE,
            max_special_upgrade: Self::MAX_SPECIAL_UPGRADE,
            requirement_penalty: Self::DEFAULT_REQUIREMENT_PENALTY,
            ineffective_multiplier: Self::DEFAULT_INEFFECTIVE_MULTIPLIER,
            default_weapon_weight: Self::DEFAULT_WEAPON_WEIGHT,
        }
    }

    #[must_use]
    pub fn with_max_attribute(mut self, max_attribute: u8) -> Self {
        self.max_attribute = max_attribute;
        self
    }

    #[must_use]
    pub fn with_upgrade_maxima(mut self, regular: u8, special: u8) -> Self {
        self.max_regular_upgrade = regular;
        self.max_special_upgrade = special;
        self
    }

    #[must_use]
    pub fn with_requirement_penalty(mut self, penalty: f64) -> Self {
        self.requirement_penalty = penalty;
        self
    }

    #[must_use]
    pub fn with_ineffective_multiplier(mut self, multiplier: f64) -> Self {
        self.ineffective_multiplier = multiplier;
        self
    }

    /// Checks that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attribute == 0 || self.max_attribute > Self::MAX_ATTRIBUTE {
            return Err(ConfigError::AttributeCapOutOfRange(self.max_attribute));
        }
        if self.max_regular_upgrade == 0 || self.max_special_upgrade == 0 {
            return Err(ConfigError::ZeroUpgradeMaximum);
        }
        if self.max_special_upgrade > self.max_regular_upgrade {
            return Err(ConfigError::SpecialTierAboveRegular {
                regular: self.max_regular_upgrade,
                special: self.max_special_upgrade,
            });
        }
        if !self.requirement_penalty.is_finite() || self.requirement_penalty < 0.0 {
            return Err(ConfigError::InvalidPenalty(self.requirement_penalty));
        }
        if !(0.0..=1.0).contains(&self.ineffective_multiplier) {
            return Err(ConfigError::InvalidMultiplier(self.ineffective_multiplier));
        }
        if !self.default_weapon_weight.is_finite() || self.default_weapon_weight < 0.0 {
            return Err(ConfigError::InvalidWeaponWeight(self.default_weapon_weight));
        }
        Ok(())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors reported by [`OptimizerConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("attribute cap {0} must be between 1 and 99")]
    AttributeCapOutOfRange(u8),

    #[error("upgrade maxima must be positive")]
    ZeroUpgradeMaximum,

    #[error("special tier maximum +{special} exceeds regular tier maximum +{regular}")]
    SpecialTierAboveRegular { regular: u8, special: u8 },

    #[error("requirement penalty {0} must be a non-negative finite number")]
    InvalidPenalty(f64),

    #[error("ineffective multiplier {0} must lie in [0, 1]")]
    InvalidMultiplier(f64),

    #[error("default weapon weight {0} must be a non-negative finite number")]
    InvalidWeaponWeight(f64),
}

impl PlannerError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            AttributeCapOutOfRange(_) => "CONFIG_ATTRIBUTE_CAP_OUT_OF_RANGE",
            ZeroUpgradeMaximum => "CONFIG_ZERO_UPGRADE_MAXIMUM",
            SpecialTierAboveRegular { .. } => "CONFIG_SPECIAL_TIER_ABOVE_REGULAR",
            InvalidPenalty(_) => "CONFIG_INVALID_PENALTY",
            InvalidMultiplier(_) => "CONFIG_INVALID_MULTIPLIER",
            InvalidWeaponWeight(_) => "CONFIG_INVALID_WEAPON_WEIGHT",
        }
    }
}
