use super::TwoHandingAdjustment;
use crate::attributes::{Attribute, Attributes};
use crate::weapon::Weapon;

/// The game's two-handing rule.
///
/// Two-handing multiplies strength by 1.5 (rounded down). Paired weapons
/// never receive the bonus; bows and ballistae always do, because they can
/// only be wielded with both hands. The adjusted strength may exceed the
/// attribute cap.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardTwoHanding;

impl StandardTwoHanding {
    fn applies(weapon: &Weapon, two_handing: bool) -> bool {
        if weapon.metadata.weapon_type.is_two_handed_only() {
            return true;
        }
        two_handing && !weapon.metadata.paired
    }
}

impl TwoHandingAdjustment for StandardTwoHanding {
    fn adjust(&self, attributes: &Attributes, weapon: &Weapon, two_handing: bool) -> Attributes {
        if !Self::applies(weapon, two_handing) {
            return *attributes;
        }
        let strength = u16::from(attributes[Attribute::Strength]) * 3 / 2;
        attributes.with(
            Attribute::Strength,
            u8::try_from(strength).unwrap_or(u8::MAX),
        )
    }
}
