//! Weapon class ids as used by the game's parameter tables.

/// Game weapon-class id (`wepType`).
///
/// Kept as a transparent id rather than an enum: unknown ids from newer data
/// must still load and simply fall outside every special-case list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeaponType(pub u16);

impl WeaponType {
    pub const DAGGER: Self = Self(1);
    pub const STRAIGHT_SWORD: Self = Self(3);
    pub const GREATSWORD: Self = Self(5);
    pub const COLOSSAL_SWORD: Self = Self(7);
    pub const CURVED_SWORD: Self = Self(9);
    pub const CURVED_GREATSWORD: Self = Self(11);
    pub const KATANA: Self = Self(13);
    pub const TWINBLADE: Self = Self(14);
    pub const THRUSTING_SWORD: Self = Self(15);
    pub const HEAVY_THRUSTING_SWORD: Self = Self(16);
    pub const AXE: Self = Self(17);
    pub const GREATAXE: Self = Self(19);
    pub const HAMMER: Self = Self(21);
    pub const GREAT_HAMMER: Self = Self(23);
    pub const FLAIL: Self = Self(24);
    pub const SPEAR: Self = Self(25);
    pub const GREAT_SPEAR: Self = Self(28);
    pub const HALBERD: Self = Self(29);
    pub const REAPER: Self = Self(31);
    pub const FIST: Self = Self(35);
    pub const CLAW: Self = Self(37);
    pub const WHIP: Self = Self(39);
    pub const COLOSSAL_WEAPON: Self = Self(41);
    pub const LIGHT_BOW: Self = Self(50);
    pub const BOW: Self = Self(51);
    pub const GREATBOW: Self = Self(53);
    pub const CROSSBOW: Self = Self(55);
    pub const BALLISTA: Self = Self(56);
    pub const GLINTSTONE_STAFF: Self = Self(57);
    pub const SACRED_SEAL: Self = Self(61);
    pub const SMALL_SHIELD: Self = Self(65);
    pub const MEDIUM_SHIELD: Self = Self(67);
    pub const GREATSHIELD: Self = Self(69);
    pub const TORCH: Self = Self(87);

    /// Fist weapons never receive the two-handed Strength bonus.
    pub const fn is_fist(self) -> bool {
        self.0 == Self::FIST.0
    }

    /// Bows are always held in both hands, so they always get the bonus.
    pub const fn is_always_two_handed(self) -> bool {
        matches!(
            self,
            Self::LIGHT_BOW | Self::BOW | Self::GREATBOW | Self::BALLISTA
        )
    }

    /// Critical (riposte/backstab) multiplier for this class.
    ///
    /// `None` for classes that cannot perform critical hits.
    pub const fn critical_multiplier(self) -> Option<f64> {
        let multiplier = match self {
            Self::DAGGER => 4.0,
            Self::THRUSTING_SWORD | Self::CLAW => 3.3,
            Self::STRAIGHT_SWORD
            | Self::CURVED_SWORD
            | Self::KATANA
            | Self::TWINBLADE
            | Self::HEAVY_THRUSTING_SWORD
            | Self::AXE
            | Self::HAMMER
            | Self::FLAIL
            | Self::SPEAR
            | Self::FIST
            | Self::SMALL_SHIELD
            | Self::TORCH => 3.0,
            Self::GREATSWORD
            | Self::COLOSSAL_SWORD
            | Self::CURVED_GREATSWORD
            | Self::GREATAXE
            | Self::GREAT_HAMMER
            | Self::GREAT_SPEAR
            | Self::HALBERD
            | Self::REAPER
            | Self::COLOSSAL_WEAPON
            | Self::MEDIUM_SHIELD => 2.5,
            Self::GREATSHIELD => 2.0,
            _ => return None,
        };
        Some(multiplier)
    }

    /// Display name of the class, if known.
    pub const fn class_name(self) -> Option<&'static str> {
        let name = match self {
            Self::DAGGER => "Dagger",
            Self::STRAIGHT_SWORD => "Straight Sword",
            Self::GREATSWORD => "Greatsword",
            Self::COLOSSAL_SWORD => "Colossal Sword",
            Self::CURVED_SWORD => "Curved Sword",
            Self::CURVED_GREATSWORD => "Curved Greatsword",
            Self::KATANA => "Katana",
            Self::TWINBLADE => "Twinblade",
            Self::THRUSTING_SWORD => "Thrusting Sword",
            Self::HEAVY_THRUSTING_SWORD => "Heavy Thrusting Sword",
            Self::AXE => "Axe",
            Self::GREATAXE => "Greataxe",
            Self::HAMMER => "Hammer",
            Self::GREAT_HAMMER => "Great Hammer",
            Self::FLAIL => "Flail",
            Self::SPEAR => "Spear",
            Self::GREAT_SPEAR => "Great Spear",
            Self::HALBERD => "Halberd",
            Self::REAPER => "Reaper",
            Self::FIST => "Fist",
            Self::CLAW => "Claw",
            Self::WHIP => "Whip",
            Self::COLOSSAL_WEAPON => "Colossal Weapon",
            Self::LIGHT_BOW => "Light Bow",
            Self::BOW => "Bow",
            Self::GREATBOW => "Greatbow",
            Self::CROSSBOW => "Crossbow",
            Self::BALLISTA => "Ballista",
            Self::GLINTSTONE_STAFF => "Glintstone Staff",
            Self::SACRED_SEAL => "Sacred Seal",
            Self::SMALL_SHIELD => "Small Shield",
            Self::MEDIUM_SHIELD => "Medium Shield",
            Self::GREATSHIELD => "Greatshield",
            Self::TORCH => "Torch",
            _ => return None,
        };
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bows_are_always_two_handed() {
        assert!(WeaponType::BOW.is_always_two_handed());
        assert!(WeaponType::BALLISTA.is_always_two_handed());
        assert!(!WeaponType::CROSSBOW.is_always_two_handed());
        assert!(!WeaponType::STRAIGHT_SWORD.is_always_two_handed());
    }

    #[test]
    fn class_names() {
        assert_eq!(WeaponType::KATANA.class_name(), Some("Katana"));
        assert_eq!(WeaponType::SACRED_SEAL.class_name(), Some("Sacred Seal"));
        assert_eq!(WeaponType(0).class_name(), None);
    }

    #[test]
    fn non_critable_classes() {
        assert_eq!(WeaponType::DAGGER.critical_multiplier(), Some(4.0));
        assert_eq!(WeaponType::GREATSWORD.critical_multiplier(), Some(2.5));
        assert_eq!(WeaponType::THRUSTING_SWORD.critical_multiplier(), Some(3.3));
        assert_eq!(WeaponType::BOW.critical_multiplier(), None);
        assert_eq!(WeaponType::CROSSBOW.critical_multiplier(), None);
        assert_eq!(WeaponType::GLINTSTONE_STAFF.critical_multiplier(), None);
        assert_eq!(WeaponType::WHIP.critical_multiplier(), None);
        assert_eq!(WeaponType(0).critical_multiplier(), None);
    }
}
