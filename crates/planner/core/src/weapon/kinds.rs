//! Enumerated weapon categories.

/// Damage and status types reported by the attack rating engine.
///
/// Status buildup shares the per-type structure of attack power, so both
/// live in one enumeration.
#[derive(
    Clone,
    Copy,
    Debug,
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
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackPowerType {
    Physical,
    Magic,
    Fire,
    Lightning,
    Holy,
    Poison,
    ScarletRot,
    Bleed,
    Frost,
    Sleep,
    Madness,
    DeathBlight,
}

impl AttackPowerType {
    pub const DAMAGE_TYPES: [AttackPowerType; 5] = [
        AttackPowerType::Physical,
        AttackPowerType::Magic,
        AttackPowerType::Fire,
        AttackPowerType::Lightning,
        AttackPowerType::Holy,
    ];

    pub const STATUS_TYPES: [AttackPowerType; 7] = [
        AttackPowerType::Poison,
        AttackPowerType::ScarletRot,
        AttackPowerType::Bleed,
        AttackPowerType::Frost,
        AttackPowerType::Sleep,
        AttackPowerType::Madness,
        AttackPowerType::DeathBlight,
    ];

    pub const fn is_damage(self) -> bool {
        matches!(
            self,
            Self::Physical | Self::Magic | Self::Fire | Self::Lightning | Self::Holy
        )
    }

    pub const fn is_status(self) -> bool {
        !self.is_damage()
    }
}

/// Infusion category of a weapon.
///
/// `Standard` is the uninfused variant; `Unique` marks weapons that can
/// never be infused.
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
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(ascii_case_insensitive)]
pub enum Affinity {
    #[default]
    Standard,
    Heavy,
    Keen,
    Quality,
    Fire,
    #[strum(to_string = "Flame Art", serialize = "FlameArt")]
    FlameArt,
    Lightning,
    Sacred,
    Magic,
    Cold,
    Poison,
    Blood,
    Occult,
    Unique,
}

/// Armament category.
#[derive(
    Clone,
    Copy,
    Debug,
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
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum WeaponType {
    Dagger,
    StraightSword,
    Greatsword,
    ColossalSword,
    CurvedSword,
    CurvedGreatsword,
    Katana,
    Twinblade,
    ThrustingSword,
    HeavyThrustingSword,
    Axe,
    Greataxe,
    Hammer,
    GreatHammer,
    Flail,
    Spear,
    GreatSpear,
    Halberd,
    Reaper,
    Fist,
    Claw,
    Whip,
    ColossalWeapon,
    LightBow,
    Bow,
    Greatbow,
    Crossbow,
    Ballista,
    GlintstoneStaff,
    DualCatalyst,
    SacredSeal,
    SmallShield,
    MediumShield,
    Greatshield,
    Torch,
    #[strum(to_string = "Hand-to-Hand", serialize = "Hand To Hand")]
    HandToHand,
    PerfumeBottle,
    ThrustingShield,
    ThrowingBlade,
    BackhandBlade,
    LightGreatsword,
    GreatKatana,
    BeastClaw,
}

impl WeaponType {
    /// Categories that can never take an affinity, so the standard/unique
    /// distinction does not apply to them.
    pub const UNINFUSABLE: [WeaponType; 8] = [
        WeaponType::LightBow,
        WeaponType::Bow,
        WeaponType::Greatbow,
        WeaponType::Crossbow,
        WeaponType::Ballista,
        WeaponType::Torch,
        WeaponType::GlintstoneStaff,
        WeaponType::SacredSeal,
    ];

    pub fn is_uninfusable(self) -> bool {
        Self::UNINFUSABLE.contains(&self)
    }

    /// Categories that can only be wielded with both hands.
    pub const fn is_two_handed_only(self) -> bool {
        matches!(
            self,
            Self::LightBow | Self::Bow | Self::Greatbow | Self::Ballista
        )
    }
}

/// Reinforcement track of a weapon.
///
/// Regular weapons use standard smithing stones; special weapons use somber
/// stones and have a much lower maximum level.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UpgradeTier {
    #[default]
    Regular,
    #[strum(to_string = "special", serialize = "somber")]
    Special,
}

impl UpgradeTier {
    /// Maximum upgrade level of this tier under `config`.
    pub const fn max_level(self, config: &crate::config::OptimizerConfig) -> u8 {
        match self {
            Self::Regular => config.max_regular_upgrade,
            Self::Special => config.max_special_upgrade,
        }
    }
}

/// Identifier of the scaling curve the attack rating engine applies to one
/// damage type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScalingCurve(pub u8);

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn tier_maxima_come_from_config() {
        let config = crate::config::OptimizerConfig::default();
        assert_eq!(UpgradeTier::Regular.max_level(&config), 25);
        assert_eq!(UpgradeTier::Special.max_level(&config), 10);

        let custom = config.with_upgrade_maxima(20, 8);
        assert_eq!(UpgradeTier::Special.max_level(&custom), 8);
    }

    #[test]
    fn partitions_damage_and_status() {
        for ty in AttackPowerType::DAMAGE_TYPES {
            assert!(ty.is_damage());
        }
        for ty in AttackPowerType::STATUS_TYPES {
            assert!(ty.is_status());
        }
        assert_eq!(
            AttackPowerType::DAMAGE_TYPES.len() + AttackPowerType::STATUS_TYPES.len(),
            12
        );
    }

    #[test]
    fn weapon_type_names_parse() {
        assert_eq!(WeaponType::from_str("axe").unwrap(), WeaponType::Axe);
        assert_eq!(
            WeaponType::from_str("Glintstone Staff").unwrap(),
            WeaponType::GlintstoneStaff
        );
        assert_eq!(WeaponType::LightBow.to_string(), "Light Bow");
        assert_eq!(WeaponType::HandToHand.to_string(), "Hand-to-Hand");
    }

    #[test]
    fn uninfusable_categories() {
        assert!(WeaponType::Torch.is_uninfusable());
        assert!(WeaponType::SacredSeal.is_uninfusable());
        assert!(!WeaponType::Axe.is_uninfusable());
        assert!(WeaponType::Ballista.is_two_handed_only());
        assert!(!WeaponType::Crossbow.is_two_handed_only());
    }

    #[test]
    fn special_tier_aliases() {
        assert_eq!(UpgradeTier::from_str("somber").unwrap(), UpgradeTier::Special);
        assert_eq!(UpgradeTier::Special.to_string(), "special");
        assert_eq!(Affinity::FlameArt.to_string(), "Flame Art");
    }
}
