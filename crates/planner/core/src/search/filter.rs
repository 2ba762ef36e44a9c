use crate::attributes::Attributes;
use crate::config::OptimizerConfig;
use crate::engine::{StandardTwoHanding, TwoHandingAdjustment};
use crate::weapon::{Affinity, UpgradeTier, Weapon, WeaponType};

/// Options for [`WeaponFilter::filter`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterOptions {
    /// Regular-tier upgrade level. Special weapons are matched against the
    /// equivalent special level.
    pub upgrade_level: u8,
    /// Only include these categories; empty means no restriction.
    pub weapon_types: Vec<WeaponType>,
    /// Only include these affinities; empty means no restriction.
    pub affinities: Vec<Affinity>,
    /// Only include weapons up to this weight.
    pub max_weight: f64,
    /// Only include weapons whose requirements these attributes meet.
    pub effective_with: Option<Attributes>,
    pub two_handing: bool,
}

impl FilterOptions {
    pub fn new(upgrade_level: u8) -> Self {
        Self {
            upgrade_level,
            weapon_types: Vec::new(),
            affinities: Vec::new(),
            max_weight: f64::INFINITY,
            effective_with: None,
            two_handing: false,
        }
    }

    #[must_use]
    pub fn with_weapon_types(mut self, weapon_types: impl IntoIterator<Item = WeaponType>) -> Self {
        self.weapon_types = weapon_types.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_affinities(mut self, affinities: impl IntoIterator<Item = Affinity>) -> Self {
        self.affinities = affinities.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    #[must_use]
    pub fn effective_with(mut self, attributes: Attributes, two_handing: bool) -> Self {
        self.effective_with = Some(attributes);
        self.two_handing = two_handing;
        self
    }
}

/// Converts a regular upgrade level to the equivalent special level.
///
/// Levels with no exact equivalent round down: someone asking for +24 most
/// likely wants +9 special weapons rather than spending the final somber
/// stone. Computed as `floor((level + 0.5) * special_max / regular_max)`
/// in exact integer arithmetic.
pub fn to_special_upgrade_level(regular_level: u8, config: &OptimizerConfig) -> u8 {
    let numerator = (2 * u32::from(regular_level) + 1) * u32::from(config.max_special_upgrade);
    let denominator = 2 * u32::from(config.max_regular_upgrade);
    // Bounded by special_max for any regular_level <= regular_max.
    numerator
        .checked_div(denominator)
        .map_or(0, |level| u8::try_from(level).unwrap_or(u8::MAX))
}

/// Weapon filter bound to a config and a two-handing rule.
#[derive(Clone, Copy, Debug)]
pub struct WeaponFilter<'a, T: TwoHandingAdjustment + ?Sized = StandardTwoHanding> {
    config: &'a OptimizerConfig,
    two_handing: &'a T,
}

impl<'a, T: TwoHandingAdjustment + ?Sized> WeaponFilter<'a, T> {
    pub fn new(config: &'a OptimizerConfig, two_handing: &'a T) -> Self {
        Self {
            config,
            two_handing,
        }
    }

    /// Returns the weapons matching `options`, in input order.
    ///
    /// Each input element is tested independently; duplicates in the input
    /// are not collapsed.
    pub fn filter<'w, I>(&self, weapons: I, options: &FilterOptions) -> Vec<&'w Weapon>
    where
        I: IntoIterator<Item = &'w Weapon>,
    {
        let special_level = to_special_upgrade_level(options.upgrade_level, self.config);
        let matches: Vec<&'w Weapon> = weapons
            .into_iter()
            .filter(|weapon| self.matches(weapon, options, special_level))
            .collect();

        tracing::debug!(
            upgrade_level = options.upgrade_level,
            special_level,
            matched = matches.len(),
            "filtered weapons"
        );
        matches
    }

    fn matches(&self, weapon: &Weapon, options: &FilterOptions, special_level: u8) -> bool {
        let meta = &weapon.metadata;

        let wanted_level = match meta.tier {
            UpgradeTier::Regular => options.upgrade_level,
            UpgradeTier::Special => special_level,
        };
        if meta.upgrade_level != wanted_level {
            return false;
        }

        if !options.weapon_types.is_empty() && !options.weapon_types.contains(&meta.weapon_type) {
            return false;
        }

        if !options.affinities.is_empty() && !Self::affinity_allowed(weapon, &options.affinities) {
            return false;
        }

        if meta.weight > options.max_weight {
            return false;
        }

        if let Some(attributes) = &options.effective_with {
            let adjusted = self
                .two_handing
                .adjust(attributes, weapon, options.two_handing);
            if weapon
                .requirements
                .iter()
                .any(|(attr, required)| adjusted[attr] < required)
            {
                return false;
            }
        }

        true
    }

    fn affinity_allowed(weapon: &Weapon, allowed: &[Affinity]) -> bool {
        allowed.iter().any(|&affinity| {
            affinity == weapon.metadata.affinity
                || (affinity == Affinity::Standard && weapon.metadata.weapon_type.is_uninfusable())
        })
    }
}

/// Filters `weapons` with the default config and two-handing rule.
pub fn filter_weapons<'w, I>(weapons: I, options: &FilterOptions) -> Vec<&'w Weapon>
where
    I: IntoIterator<Item = &'w Weapon>,
{
    let config = OptimizerConfig::default();
    WeaponFilter::new(&config, &StandardTwoHanding).filter(weapons, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attribute;
    use crate::weapon::AttackPowerType;

    fn weapon(name: &str, ty: WeaponType, affinity: Affinity, tier: UpgradeTier, level: u8) -> Weapon {
        Weapon::builder(name, ty)
            .weight(5.0)
            .affinity(affinity)
            .upgrade(tier, level)
            .attack(AttackPowerType::Physical, 100.0)
            .build()
    }

    fn names(weapons: &[&Weapon]) -> Vec<String> {
        weapons.iter().map(|w| w.name.clone()).collect()
    }

    #[test]
    fn special_equivalent_rounds_down() {
        let config = OptimizerConfig::default();
        assert_eq!(to_special_upgrade_level(24, &config), 9);
        assert_eq!(to_special_upgrade_level(25, &config), 10);
        assert_eq!(to_special_upgrade_level(0, &config), 0);
        assert_eq!(to_special_upgrade_level(12, &config), 5);
        assert_eq!(to_special_upgrade_level(13, &config), 5);
        assert_eq!(to_special_upgrade_level(14, &config), 5);
        assert_eq!(to_special_upgrade_level(15, &config), 6);
    }

    #[test]
    fn matches_regular_and_special_tiers() {
        let weapons = vec![
            weapon("Axe +24", WeaponType::Axe, Affinity::Standard, UpgradeTier::Regular, 24),
            weapon("Axe +25", WeaponType::Axe, Affinity::Standard, UpgradeTier::Regular, 25),
            weapon("Katana +9", WeaponType::Katana, Affinity::Unique, UpgradeTier::Special, 9),
            weapon("Katana +10", WeaponType::Katana, Affinity::Unique, UpgradeTier::Special, 10),
        ];

        let at_24 = filter_weapons(&weapons, &FilterOptions::new(24));
        assert_eq!(names(&at_24), ["Axe +24", "Katana +9"]);

        let at_25 = filter_weapons(&weapons, &FilterOptions::new(25));
        assert_eq!(names(&at_25), ["Axe +25", "Katana +10"]);
    }

    #[test]
    fn standard_affinity_includes_uninfusable_categories() {
        let weapons = vec![
            weapon("Bow +25", WeaponType::Bow, Affinity::Unique, UpgradeTier::Regular, 25),
            weapon("Torch +25", WeaponType::Torch, Affinity::Unique, UpgradeTier::Regular, 25),
            weapon("Keen Axe +25", WeaponType::Axe, Affinity::Keen, UpgradeTier::Regular, 25),
            weapon("Unique Axe +25", WeaponType::Axe, Affinity::Unique, UpgradeTier::Regular, 25),
        ];
        let options = FilterOptions::new(25).with_affinities([Affinity::Standard]);
        assert_eq!(names(&filter_weapons(&weapons, &options)), ["Bow +25", "Torch +25"]);

        let options = FilterOptions::new(25).with_affinities([Affinity::Keen]);
        assert_eq!(names(&filter_weapons(&weapons, &options)), ["Keen Axe +25"]);
    }

    #[test]
    fn rejects_heavier_than_max_weight() {
        let light = weapon("Light", WeaponType::Dagger, Affinity::Standard, UpgradeTier::Regular, 25);
        let mut heavy = light.clone();
        heavy.name = "Heavy".into();
        heavy.metadata.weight = 20.5;
        let weapons = [light, heavy];
        let options = FilterOptions::new(25).with_max_weight(20.0);
        assert_eq!(names(&filter_weapons(&weapons, &options)), ["Light"]);
    }

    #[test]
    fn effectiveness_uses_two_handing_adjustment() {
        let club = Weapon::builder("Great Club +25", WeaponType::GreatHammer)
            .upgrade(UpgradeTier::Regular, 25)
            .requirement(Attribute::Strength, 30)
            .build();
        let weapons = [club];
        let attrs = Attributes::uniform(20);

        let one_handed = FilterOptions::new(25).effective_with(attrs, false);
        assert!(filter_weapons(&weapons, &one_handed).is_empty());

        let two_handed = FilterOptions::new(25).effective_with(attrs, true);
        assert_eq!(filter_weapons(&weapons, &two_handed).len(), 1);
    }

    #[test]
    fn duplicates_are_tested_independently() {
        let axe = weapon("Axe +25", WeaponType::Axe, Affinity::Standard, UpgradeTier::Regular, 25);
        let weapons = [axe.clone(), axe];
        assert_eq!(filter_weapons(&weapons, &FilterOptions::new(25)).len(), 2);
    }
}
