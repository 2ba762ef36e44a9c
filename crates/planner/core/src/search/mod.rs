//! Weapon search.
//!
//! Narrows a weapon collection to the candidates matching an upgrade tier,
//! category, affinity, weight and "usable without penalty" constraint.
mod filter;

pub use filter::{FilterOptions, WeaponFilter, filter_weapons, to_special_upgrade_level};
