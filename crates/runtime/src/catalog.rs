//! Read-only weapon collection indexed by display name.

use std::collections::HashMap;

use planner_core::Weapon;

use crate::api::{Result, RuntimeError};

/// Immutable weapon catalog shared by every request.
#[derive(Debug, Default)]
pub struct WeaponCatalog {
    weapons: Vec<Weapon>,
    by_name: HashMap<String, usize>,
}

impl WeaponCatalog {
    /// Indexes `weapons` by name, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::DuplicateWeapon`] when two weapons share a name.
    pub fn new(weapons: Vec<Weapon>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(weapons.len());
        for (index, weapon) in weapons.iter().enumerate() {
            if by_name.insert(weapon.name.clone(), index).is_some() {
                return Err(RuntimeError::DuplicateWeapon(weapon.name.clone()));
            }
        }
        Ok(Self { weapons, by_name })
    }

    pub fn get(&self, name: &str) -> Option<&Weapon> {
        self.by_name.get(name).map(|&index| &self.weapons[index])
    }

    /// Looks up a weapon, failing with [`RuntimeError::UnknownWeapon`].
    pub fn resolve(&self, name: &str) -> Result<&Weapon> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UnknownWeapon(name.to_owned()))
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use planner_core::testing::{sample_axe, sample_katana};

    use super::*;

    #[test]
    fn resolves_by_exact_name() {
        let catalog = WeaponCatalog::new(vec![sample_axe(), sample_katana()]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("Rivers of Blood +10").unwrap().name, "Rivers of Blood +10");
        assert!(matches!(
            catalog.resolve("rivers of blood +10"),
            Err(RuntimeError::UnknownWeapon(_))
        ));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = WeaponCatalog::new(vec![sample_axe(), sample_axe()]).unwrap_err();
        assert!(matches!(err, RuntimeError::DuplicateWeapon(name) if name == "Battle Axe +25"));
    }
}
