//! Closed key enums for stats, damage types, status effects and affinities.

use super::table::{Table, TableKey};

/// The five attributes that scale weapon damage.
///
/// Declaration order is the order the optimizer uses when it has to spend a
/// short budget on unmet requirements.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Attribute {
    /// Strength
    #[strum(to_string = "str", serialize = "strength")]
    Str,
    /// Dexterity
    #[strum(to_string = "dex", serialize = "dexterity")]
    Dex,
    /// Intelligence
    #[strum(to_string = "int", serialize = "intelligence")]
    Int,
    /// Faith
    #[strum(to_string = "fai", serialize = "faith")]
    Fai,
    /// Arcane
    #[strum(to_string = "arc", serialize = "arcane")]
    Arc,
}

impl TableKey for Attribute {
    const ALL: &'static [Self] = &[Self::Str, Self::Dex, Self::Int, Self::Fai, Self::Arc];

    fn index(self) -> usize {
        self as usize
    }
}

/// The five damage channels that make up Attack Rating.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DamageType {
    Physical,
    Magic,
    Fire,
    Lightning,
    Holy,
}

impl TableKey for DamageType {
    const ALL: &'static [Self] = &[
        Self::Physical,
        Self::Magic,
        Self::Fire,
        Self::Lightning,
        Self::Holy,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Status buildups a weapon can inflict.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusEffect {
    Bleed,
    Frost,
    Poison,
    Sleep,
    Madness,
    ScarletRot,
}

impl TableKey for StatusEffect {
    const ALL: &'static [Self] = &[
        Self::Bleed,
        Self::Frost,
        Self::Poison,
        Self::Sleep,
        Self::Madness,
        Self::ScarletRot,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Weapon infusion.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Affinity {
    #[default]
    Standard,
    Heavy,
    Keen,
    Quality,
    Fire,
    #[cfg_attr(feature = "serde", serde(rename = "Flame Art", alias = "FlameArt"))]
    #[strum(to_string = "Flame Art", serialize = "FlameArt")]
    FlameArt,
    Lightning,
    Sacred,
    Magic,
    Cold,
    Poison,
    Blood,
    Occult,
}

impl Affinity {
    pub const ALL: [Affinity; 13] = [
        Self::Standard,
        Self::Heavy,
        Self::Keen,
        Self::Quality,
        Self::Fire,
        Self::FlameArt,
        Self::Lightning,
        Self::Sacred,
        Self::Magic,
        Self::Cold,
        Self::Poison,
        Self::Blood,
        Self::Occult,
    ];
}

/// Physical damage tag of a weapon or skill hit.
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
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AttackAttribute {
    #[default]
    Standard,
    Slash,
    Strike,
    Pierce,
}

/// Spell families a catalyst can boost.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SpellKind {
    Sorcery,
    Incantation,
}

/// One value per attribute.
pub type StatTable<T> = Table<Attribute, T, 5>;
/// One value per damage type.
pub type DamageTable<T> = Table<DamageType, T, 5>;
/// One value per status effect.
pub type StatusTable<T> = Table<StatusEffect, T, 6>;

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn parse_affinity_names() {
        assert_eq!(Affinity::from_str("flame art").unwrap(), Affinity::FlameArt);
        assert_eq!(Affinity::from_str("FlameArt").unwrap(), Affinity::FlameArt);
        assert_eq!(Affinity::from_str("keen").unwrap(), Affinity::Keen);
        assert!(Affinity::from_str("Mystic").is_err());
    }

    #[test]
    fn parse_attribute_aliases() {
        assert_eq!(Attribute::from_str("ARC").unwrap(), Attribute::Arc);
        assert_eq!(Attribute::from_str("strength").unwrap(), Attribute::Str);
    }
}
