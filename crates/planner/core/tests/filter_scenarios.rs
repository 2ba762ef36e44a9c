mod common;

use planner_core::{
    Affinity, Attribute, Attributes, FilterOptions, OptimizerConfig, StandardTwoHanding,
    UpgradeTier, WeaponFilter, WeaponType, filter_weapons,
};

use common::catalog;

#[test]
fn axe_standard_under_weight_limit() {
    let weapons = catalog();
    let options = FilterOptions::new(25)
        .with_weapon_types([WeaponType::Axe])
        .with_affinities([Affinity::Standard])
        .with_max_weight(20.0);

    let matched = filter_weapons(&weapons, &options);
    let names: Vec<&str> = matched.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, ["Battle Axe +25", "Iron Cleaver +25"]);

    for weapon in matched {
        assert_eq!(weapon.weapon_type(), WeaponType::Axe);
        assert_eq!(weapon.affinity(), Affinity::Standard);
        assert_eq!(weapon.metadata.tier, UpgradeTier::Regular);
        assert_eq!(weapon.metadata.upgrade_level, 25);
        assert!(weapon.weight() <= 20.0);
    }
}

#[test]
fn plus_24_pairs_with_plus_9_special() {
    let weapons = catalog();
    let options = FilterOptions::new(24).with_weapon_types([WeaponType::Katana]);
    let names: Vec<&str> = filter_weapons(&weapons, &options)
        .iter()
        .map(|w| w.name.as_str())
        .collect();
    assert_eq!(names, ["Moonveil +9"]);
}

#[test]
fn no_restrictions_keeps_input_order() {
    let weapons = catalog();
    let matched = filter_weapons(&weapons, &FilterOptions::new(25));
    let expected: Vec<&str> = weapons
        .iter()
        .filter(|w| match w.metadata.tier {
            UpgradeTier::Regular => w.metadata.upgrade_level == 25,
            UpgradeTier::Special => w.metadata.upgrade_level == 10,
        })
        .map(|w| w.name.as_str())
        .collect();
    let names: Vec<&str> = matched.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn custom_upgrade_maxima_change_special_equivalent() {
    let weapons = catalog();
    let config = OptimizerConfig::default().with_upgrade_maxima(10, 10);
    let filter = WeaponFilter::new(&config, &StandardTwoHanding);
    let matched = filter.filter(&weapons, &FilterOptions::new(10));
    assert!(matched.iter().all(|w| w.metadata.upgrade_level == 10));
    assert!(matched.iter().any(|w| w.name == "Moonveil +10"));
}

#[test]
fn effectiveness_filter_respects_requirements() {
    let mut weapons = catalog();
    weapons[0].requirements.set(Attribute::Strength, Some(30));
    let weak = Attributes::uniform(12);
    let options = FilterOptions::new(25)
        .with_weapon_types([WeaponType::Axe])
        .effective_with(weak, false);

    let names: Vec<&str> = filter_weapons(&weapons, &options)
        .iter()
        .map(|w| w.name.as_str())
        .collect();
    assert!(!names.contains(&"Battle Axe +25"));
    assert!(names.contains(&"Iron Cleaver +25"));
}
