//! Character attributes.
//!
//! Eight attributes gate weapon usability and drive weapon scaling. The
//! declaration order of [`Attribute`] is part of the public contract: the
//! greedy allocator breaks ties by it, so reordering the variants changes
//! optimizer output.

use core::ops::Index;
use std::collections::BTreeMap;

/// One of the eight character attributes.
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
#[strum(ascii_case_insensitive)]
pub enum Attribute {
    #[strum(to_string = "vigor", serialize = "vig")]
    #[cfg_attr(feature = "serde", serde(alias = "vig"))]
    Vigor,
    #[strum(to_string = "mind", serialize = "min")]
    #[cfg_attr(feature = "serde", serde(alias = "min"))]
    Mind,
    #[strum(to_string = "endurance", serialize = "end")]
    #[cfg_attr(feature = "serde", serde(alias = "end"))]
    Endurance,
    #[strum(to_string = "strength", serialize = "str")]
    #[cfg_attr(feature = "serde", serde(alias = "str"))]
    Strength,
    #[strum(to_string = "dexterity", serialize = "dex")]
    #[cfg_attr(feature = "serde", serde(alias = "dex"))]
    Dexterity,
    #[strum(to_string = "intelligence", serialize = "int")]
    #[cfg_attr(feature = "serde", serde(alias = "int"))]
    Intelligence,
    #[strum(to_string = "faith", serialize = "fai")]
    #[cfg_attr(feature = "serde", serde(alias = "fai"))]
    Faith,
    #[strum(to_string = "arcane", serialize = "arc")]
    #[cfg_attr(feature = "serde", serde(alias = "arc"))]
    Arcane,
}

impl Attribute {
    pub const COUNT: usize = 8;

    /// All attributes in declaration order.
    pub const ALL: [Attribute; Self::COUNT] = [
        Attribute::Vigor,
        Attribute::Mind,
        Attribute::Endurance,
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Intelligence,
        Attribute::Faith,
        Attribute::Arcane,
    ];

    /// Position of this attribute in declaration order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Three-letter code used by the in-game status screen.
    pub const fn short_code(self) -> &'static str {
        match self {
            Attribute::Vigor => "vig",
            Attribute::Mind => "min",
            Attribute::Endurance => "end",
            Attribute::Strength => "str",
            Attribute::Dexterity => "dex",
            Attribute::Intelligence => "int",
            Attribute::Faith => "fai",
            Attribute::Arcane => "arc",
        }
    }
}

/// A complete set of attribute values.
///
/// `Attributes` is an immutable value: every operation that changes a value
/// returns a new instance, so candidate sets evaluated by the optimizer
/// never alias each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    values: [u8; Attribute::COUNT],
}

impl Attributes {
    /// Creates attributes from values in declaration order
    /// (vig, min, end, str, dex, int, fai, arc).
    pub const fn new(values: [u8; Attribute::COUNT]) -> Self {
        Self { values }
    }

    /// Every attribute set to the same value.
    pub const fn uniform(value: u8) -> Self {
        Self {
            values: [value; Attribute::COUNT],
        }
    }

    pub const fn get(&self, attribute: Attribute) -> u8 {
        self.values[attribute.index()]
    }

    /// Returns a copy with one attribute replaced.
    #[must_use]
    pub const fn with(mut self, attribute: Attribute, value: u8) -> Self {
        self.values[attribute.index()] = value;
        self
    }

    /// Returns a copy with one attribute raised by a single point.
    ///
    /// Saturates at `u8::MAX`; callers enforce the real attribute cap.
    #[must_use]
    pub const fn incremented(self, attribute: Attribute) -> Self {
        let value = self.values[attribute.index()].saturating_add(1);
        self.with(attribute, value)
    }

    /// Elementwise maximum with the values present in `floor`.
    #[must_use]
    pub fn max_with(mut self, floor: &PartialAttributes) -> Self {
        for (attribute, value) in floor.iter() {
            let slot = &mut self.values[attribute.index()];
            *slot = (*slot).max(value);
        }
        self
    }

    /// Iterates `(attribute, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u8)> + '_ {
        Attribute::ALL.iter().map(|&attr| (attr, self.get(attr)))
    }

    /// Sum of all attribute values.
    pub fn total(&self) -> u32 {
        self.values.iter().map(|&v| u32::from(v)).sum()
    }

    /// True when every attribute is at least the corresponding one in `base`.
    pub fn dominates(&self, base: &Attributes) -> bool {
        self.values
            .iter()
            .zip(base.values.iter())
            .all(|(mine, theirs)| mine >= theirs)
    }

    /// Points that were spent raising `base` to `self`, or `None` if any
    /// attribute is below `base`.
    pub fn points_above(&self, base: &Attributes) -> Option<u32> {
        if !self.dominates(base) {
            return None;
        }
        Some(self.total() - base.total())
    }

    /// First attribute outside `1..=max`, if any.
    pub fn first_out_of_range(&self, max: u8) -> Option<(Attribute, u8)> {
        self.iter().find(|&(_, value)| value == 0 || value > max)
    }
}

impl Index<Attribute> for Attributes {
    type Output = u8;

    fn index(&self, attribute: Attribute) -> &u8 {
        &self.values[attribute.index()]
    }
}

/// Optional per-attribute values.
///
/// Used for user-specified minimums and weapon requirements; an absent
/// value means "no constraint". Serialized as a map from attribute to value
/// holding only the present entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "BTreeMap<Attribute, u8>",
        into = "BTreeMap<Attribute, u8>"
    )
)]
pub struct PartialAttributes {
    values: [Option<u8>; Attribute::COUNT],
}

impl PartialAttributes {
    pub const fn new() -> Self {
        Self {
            values: [None; Attribute::COUNT],
        }
    }

    pub const fn get(&self, attribute: Attribute) -> Option<u8> {
        self.values[attribute.index()]
    }

    /// Returns a copy with one attribute set.
    #[must_use]
    pub const fn with(mut self, attribute: Attribute, value: u8) -> Self {
        self.values[attribute.index()] = Some(value);
        self
    }

    pub fn set(&mut self, attribute: Attribute, value: Option<u8>) {
        self.values[attribute.index()] = value;
    }

    /// Iterates the present values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u8)> + '_ {
        Attribute::ALL
            .iter()
            .filter_map(|&attr| self.get(attr).map(|value| (attr, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Elementwise maximum of two partial sets; absent values stay absent
    /// only when absent on both sides.
    #[must_use]
    pub fn merge_max(mut self, other: &PartialAttributes) -> Self {
        for (attribute, value) in other.iter() {
            let slot = &mut self.values[attribute.index()];
            *slot = Some(slot.map_or(value, |current| current.max(value)));
        }
        self
    }
}

impl From<BTreeMap<Attribute, u8>> for PartialAttributes {
    fn from(map: BTreeMap<Attribute, u8>) -> Self {
        map.into_iter().collect()
    }
}

impl From<PartialAttributes> for BTreeMap<Attribute, u8> {
    fn from(partial: PartialAttributes) -> Self {
        partial.iter().collect()
    }
}

impl FromIterator<(Attribute, u8)> for PartialAttributes {
    fn from_iter<T: IntoIterator<Item = (Attribute, u8)>>(iter: T) -> Self {
        let mut partial = Self::new();
        for (attribute, value) in iter {
            partial.set(attribute, Some(value));
        }
        partial
    }
}
