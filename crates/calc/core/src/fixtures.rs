//! Small, hand-built data bundles for tests and the `export-fixtures` task.
//!
//! Values are shaped like the game's tables but rounded to numbers that make
//! the arithmetic in tests easy to follow.

use std::collections::BTreeMap;

use crate::data::{
    Affinity, AffinityData, AffinityFlags, AttackAttribute, AttackElementCorrect, Attribute,
    BaseDamageType, BaseStatScaling, CurveDefinition, DamageTable, DamageType,
    ElementCorrectEntry, FinalDamageRate, GemCompatibility, GuardData, PrecomputedAowAttack,
    PrecomputedAowData, PrecomputedData, ReinforceRates, ResolvedWeapon, SpEffect,
    SpellScalingRecord, StatPointBonus, StatTable, StatusEffect, StatusEffectRecord,
    StatusScaling, SwordArt, WeaponType,
};

// ===== curve ids =====
pub const CURVE_PHYSICAL: u32 = 0;
pub const CURVE_ELEMENTAL: u32 = 4;
pub const CURVE_STATUS: u32 = 6;
pub const CURVE_CATALYST: u32 = 12;

// ===== reinforce tables =====
pub const REINFORCE_STANDARD: u32 = 0;
pub const REINFORCE_HEAVY: u32 = 100;
pub const REINFORCE_SOMBER: u32 = 2200;

pub const SP_EFFECT_BLEED: u32 = 6400;

// ===== weapons =====
pub const LORDSWORN: &str = "Lordsworn's Straight Sword";
pub const LONGSWORD: &str = "Longsword";
pub const RIVERS_OF_BLOOD: &str = "Rivers of Blood";
pub const MISERICORDE: &str = "Misericorde";
pub const SHORTBOW: &str = "Shortbow";
pub const CAESTUS: &str = "Caestus";
pub const TWINNED_SWORDS: &str = "Godskin Stitcher Twinblade";
pub const GLINTSTONE_STAFF: &str = "Glintstone Staff";
pub const FINGER_SEAL: &str = "Finger Seal";

// ===== skills =====
pub const LIONS_CLAW: &str = "Lion's Claw";
pub const GLINTBLADE_PHALANX: &str = "Glintblade Phalanx";
pub const GLINTBLADE_OWN_SCALING: &str = "Glintblade Phalanx (Unshaped)";
pub const WAR_CRY: &str = "War Cry";

pub const ELEMENT_CORRECT_INT: i32 = 300;
pub const FINAL_DAMAGE_RATE_PVP: u32 = 1;

// ============================================================================
// Weapon bundle
// ============================================================================

/// Weapon bundle covering every branch of the AR engine.
pub fn weapon_data() -> PrecomputedData {
    let mut data = PrecomputedData::new();

    for curve in curves() {
        data.insert_curve(curve);
    }

    data.reinforce_rates
        .insert(REINFORCE_STANDARD, (0..=25).map(standard_level).collect());
    data.reinforce_rates
        .insert(REINFORCE_HEAVY, (0..=25).map(heavy_level).collect());
    data.reinforce_rates
        .insert(REINFORCE_SOMBER, (0..=10).map(somber_level).collect());

    data.insert_sp_effect(SpEffect::new(SP_EFFECT_BLEED).with_buildup(StatusEffect::Bleed, 50.0));

    for weapon in [
        lordsworn(),
        longsword(),
        rivers_of_blood(),
        misericorde(),
        shortbow(),
        caestus(),
        twinned_swords(),
        glintstone_staff(),
        finger_seal(),
    ] {
        data.insert_weapon(weapon);
    }

    data
}

fn curves() -> [CurveDefinition; 4] {
    [
        CurveDefinition::new(
            CURVE_PHYSICAL,
            [1.0, 18.0, 60.0, 80.0, 150.0],
            [0.0, 25.0, 75.0, 90.0, 110.0],
            [1.2, -1.2, 1.0, 1.0],
        ),
        CurveDefinition::new(
            CURVE_ELEMENTAL,
            [1.0, 20.0, 50.0, 80.0, 99.0],
            [0.0, 40.0, 80.0, 95.0, 100.0],
            [1.0; 4],
        ),
        // Flat until 25, so low Arcane adds nothing
        CurveDefinition::new(
            CURVE_STATUS,
            [1.0, 25.0, 45.0, 60.0, 99.0],
            [0.0, 0.0, 75.0, 90.0, 100.0],
            [1.0; 4],
        ),
        CurveDefinition::new(
            CURVE_CATALYST,
            [1.0, 20.0, 50.0, 80.0, 99.0],
            [0.0, 20.0, 80.0, 95.0, 100.0],
            [1.0; 4],
        ),
    ]
}

fn standard_level(level: u32) -> ReinforceRates {
    let l = f64::from(level);
    ReinforceRates {
        attack: DamageTable::from_fn(|_| 1.0 + 0.058 * l),
        correct: StatTable::from_fn(|_| 1.0),
        stamina_atk: 1.0 + 0.006 * l,
        poise_atk: 1.0,
        guard_cut: DamageTable::from_fn(|_| 1.0 + 0.004 * l),
        guard_boost: 1.0 + 0.01 * l,
        sp_effect_ids: [None, None],
    }
}

fn heavy_level(level: u32) -> ReinforceRates {
    let l = f64::from(level);
    let mut rates = standard_level(level);
    rates.correct[Attribute::Str] = 1.0 + 0.02 * l;
    rates.correct[Attribute::Dex] = 0.0;
    rates
}

fn somber_level(level: u32) -> ReinforceRates {
    let l = f64::from(level);
    ReinforceRates {
        attack: DamageTable::from_fn(|_| 1.0 + 0.14 * l),
        guard_cut: DamageTable::from_fn(|_| 1.0 + 0.01 * l),
        guard_boost: 1.0 + 0.04 * l,
        ..ReinforceRates::identity()
    }
    .with_sp_effect(0, SP_EFFECT_BLEED)
}

fn physical(base: f64, scaling: &[(Attribute, f64)]) -> BaseDamageType {
    scaling
        .iter()
        .fold(BaseDamageType::new(base), |channel, &(attribute, percent)| {
            channel.with_scaling(attribute, BaseStatScaling::new(percent, CURVE_PHYSICAL))
        })
}

fn requirements(str: i32, dex: i32, int: i32, fai: i32, arc: i32) -> StatTable<i32> {
    StatTable::from_array([str, dex, int, fai, arc])
}

fn sword_guard() -> GuardData {
    let mut cut_rate = DamageTable::from_fn(|_| 35.0);
    cut_rate[DamageType::Physical] = 75.0;
    GuardData {
        cut_rate,
        guard_boost: 38.0,
        status_resist: 15.0,
    }
}

fn weapon(name: &str, weapon_type: WeaponType, max_upgrade_level: u32) -> ResolvedWeapon {
    ResolvedWeapon {
        name: name.to_owned(),
        weapon_type,
        max_upgrade_level,
        dual_blade: false,
        stamina_cost: 10.0,
        skill_damage_multiplier: 1.0,
        primary_attribute: AttackAttribute::Standard,
        secondary_attribute: None,
        requirements: StatTable::default(),
        throw_atk_rate: 0,
        attack_base_stamina: 100.0,
        poise_damage: 10.0,
        affinities: BTreeMap::new(),
    }
}

fn lordsworn() -> ResolvedWeapon {
    let mut weapon = weapon(LORDSWORN, WeaponType::STRAIGHT_SWORD, 25);
    weapon.requirements = requirements(10, 10, 0, 0, 0);
    weapon.secondary_attribute = Some(AttackAttribute::Pierce);

    let mut standard = AffinityData {
        id: 0,
        reinforce_type_id: REINFORCE_STANDARD,
        guard: Some(sword_guard()),
        ..AffinityData::default()
    };
    standard.damage[DamageType::Physical] =
        Some(physical(110.0, &[(Attribute::Str, 47.0), (Attribute::Dex, 33.0)]));
    standard.stat_scaling = StatTable::from_array([47.0, 33.0, 0.0, 0.0, 0.0]);

    let mut heavy = AffinityData {
        id: 100,
        reinforce_type_id: REINFORCE_HEAVY,
        guard: Some(sword_guard()),
        ..AffinityData::default()
    };
    heavy.damage[DamageType::Physical] = Some(physical(105.0, &[(Attribute::Str, 60.0)]));
    heavy.stat_scaling = StatTable::from_array([60.0, 0.0, 0.0, 0.0, 0.0]);

    let mut keen = standard.clone();
    keen.id = 200;
    keen.damage[DamageType::Physical] = Some(physical(105.0, &[(Attribute::Dex, 65.0)]));
    keen.stat_scaling = StatTable::from_array([0.0, 65.0, 0.0, 0.0, 0.0]);

    weapon.affinities.insert(Affinity::Standard, standard);
    weapon.affinities.insert(Affinity::Heavy, heavy);
    weapon.affinities.insert(Affinity::Keen, keen);
    weapon
}

fn longsword() -> ResolvedWeapon {
    let mut weapon = weapon(LONGSWORD, WeaponType::STRAIGHT_SWORD, 25);
    weapon.requirements = requirements(10, 10, 0, 0, 0);
    let mut standard = AffinityData {
        reinforce_type_id: REINFORCE_STANDARD,
        guard: Some(sword_guard()),
        ..AffinityData::default()
    };
    standard.damage[DamageType::Physical] =
        Some(physical(110.0, &[(Attribute::Str, 40.0), (Attribute::Dex, 40.0)]));
    standard.stat_scaling = StatTable::from_array([40.0, 40.0, 0.0, 0.0, 0.0]);
    weapon.affinities.insert(Affinity::Standard, standard);
    weapon
}

fn rivers_of_blood() -> ResolvedWeapon {
    let mut weapon = weapon(RIVERS_OF_BLOOD, WeaponType::KATANA, 10);
    weapon.requirements = requirements(12, 18, 0, 0, 20);
    weapon.secondary_attribute = Some(AttackAttribute::Slash);

    let mut standard = AffinityData {
        reinforce_type_id: REINFORCE_SOMBER,
        guard: Some(sword_guard()),
        ..AffinityData::default()
    };
    standard.damage[DamageType::Physical] = Some(physical(76.0, &[(Attribute::Dex, 55.0)]));
    standard.damage[DamageType::Fire] = Some(
        BaseDamageType::new(76.0)
            .with_scaling(Attribute::Arc, BaseStatScaling::new(55.0, CURVE_ELEMENTAL)),
    );
    standard.status[StatusEffect::Bleed] = Some(StatusEffectRecord {
        base_value: 0.0,
        sp_effect_slot: Some(0),
        scaling: Some(StatusScaling {
            attribute: Attribute::Arc,
            percent: 100.0,
            curve_id: CURVE_STATUS,
            is_override: false,
        }),
    });
    standard.stat_scaling = StatTable::from_array([0.0, 55.0, 0.0, 0.0, 55.0]);
    weapon.affinities.insert(Affinity::Standard, standard);
    weapon
}

fn misericorde() -> ResolvedWeapon {
    let mut weapon = weapon(MISERICORDE, WeaponType::DAGGER, 25);
    weapon.requirements = requirements(7, 12, 0, 0, 0);
    weapon.throw_atk_rate = 40;
    let mut standard = AffinityData {
        reinforce_type_id: REINFORCE_STANDARD,
        ..AffinityData::default()
    };
    standard.damage[DamageType::Physical] =
        Some(physical(73.0, &[(Attribute::Str, 28.0), (Attribute::Dex, 45.0)]));
    standard.stat_scaling = StatTable::from_array([28.0, 45.0, 0.0, 0.0, 0.0]);
    weapon.affinities.insert(Affinity::Standard, standard);
    weapon
}

fn shortbow() -> ResolvedWeapon {
    let mut weapon = weapon(SHORTBOW, WeaponType::LIGHT_BOW, 25);
    weapon.requirements = requirements(8, 9, 0, 0, 0);
    let mut standard = AffinityData {
        reinforce_type_id: REINFORCE_STANDARD,
        ..AffinityData::default()
    };
    standard.damage[DamageType::Physical] =
        Some(physical(62.0, &[(Attribute::Str, 20.0), (Attribute::Dex, 50.0)]));
    weapon.affinities.insert(Affinity::Standard, standard);
    weapon
}

fn caestus() -> ResolvedWeapon {
    let mut weapon = weapon(CAESTUS, WeaponType::FIST, 25);
    weapon.requirements = requirements(8, 8, 0, 0, 0);
    let mut standard = AffinityData {
        reinforce_type_id: REINFORCE_STANDARD,
        ..AffinityData::default()
    };
    standard.damage[DamageType::Physical] =
        Some(physical(79.0, &[(Attribute::Str, 40.0), (Attribute::Dex, 40.0)]));
    weapon.affinities.insert(Affinity::Standard, standard);
    weapon
}

fn twinned_swords() -> ResolvedWeapon {
    let mut weapon = weapon(TWINNED_SWORDS, WeaponType::TWINBLADE, 25);
    weapon.requirements = requirements(17, 17, 0, 0, 0);
    weapon.dual_blade = true;
    let mut standard = AffinityData {
        reinforce_type_id: REINFORCE_STANDARD,
        ..AffinityData::default()
    };
    standard.damage[DamageType::Physical] =
        Some(physical(102.0, &[(Attribute::Str, 40.0), (Attribute::Dex, 40.0)]));
    weapon.affinities.insert(Affinity::Standard, standard);
    weapon
}

fn spell(attribute: Attribute) -> SpellScalingRecord {
    let mut scaling = StatTable::default();
    scaling[attribute] = Some(BaseStatScaling::new(100.0, CURVE_CATALYST));
    SpellScalingRecord {
        base: 100.0,
        scaling,
    }
}

fn glintstone_staff() -> ResolvedWeapon {
    let mut weapon = weapon(GLINTSTONE_STAFF, WeaponType::GLINTSTONE_STAFF, 25);
    weapon.requirements = requirements(6, 0, 10, 0, 0);
    let mut standard = AffinityData {
        reinforce_type_id: REINFORCE_STANDARD,
        sorcery: Some(spell(Attribute::Int)),
        ..AffinityData::default()
    };
    standard.damage[DamageType::Physical] = Some(physical(25.0, &[(Attribute::Str, 30.0)]));
    weapon.affinities.insert(Affinity::Standard, standard);
    weapon
}

fn finger_seal() -> ResolvedWeapon {
    let mut weapon = weapon(FINGER_SEAL, WeaponType::SACRED_SEAL, 25);
    weapon.requirements = requirements(4, 0, 0, 10, 0);
    let mut standard = AffinityData {
        reinforce_type_id: REINFORCE_STANDARD,
        incantation: Some(spell(Attribute::Fai)),
        ..AffinityData::default()
    };
    standard.damage[DamageType::Physical] = Some(physical(25.0, &[(Attribute::Str, 30.0)]));
    weapon.affinities.insert(Affinity::Standard, standard);
    weapon
}

// ============================================================================
// Skill bundle
// ============================================================================

/// Skill bundle: one motion skill, two bullet skills and a buff.
pub fn aow_data() -> PrecomputedAowData {
    let mut aow = PrecomputedAowData::new();

    aow.insert_sword_art(lions_claw());
    aow.insert_sword_art(glintblade_phalanx(GLINTBLADE_PHALANX, 200, ELEMENT_CORRECT_INT));
    aow.insert_sword_art(glintblade_phalanx(GLINTBLADE_OWN_SCALING, 201, -1));
    aow.insert_sword_art(war_cry());

    let mut int_to_magic = AttackElementCorrect {
        id: ELEMENT_CORRECT_INT,
        ..AttackElementCorrect::default()
    };
    int_to_magic.entries[Attribute::Int][DamageType::Magic] = ElementCorrectEntry {
        curve_id: Some(CURVE_CATALYST),
        ..ElementCorrectEntry::scaling(56.25)
    };
    aow.attack_element_correct
        .insert(ELEMENT_CORRECT_INT, int_to_magic);

    aow.final_damage_rates.insert(
        FINAL_DAMAGE_RATE_PVP,
        FinalDamageRate {
            id: FINAL_DAMAGE_RATE_PVP,
            damage: DamageTable::from_fn(|_| 0.5),
            stamina: 0.7,
            poise: 0.8,
        },
    );

    let swords = vec![
        WeaponType::STRAIGHT_SWORD,
        WeaponType::GREATSWORD,
        WeaponType::KATANA,
    ];
    aow.equip_param_gem.insert(
        10_100,
        GemCompatibility {
            gem_id: 10_100,
            weapon_types: swords.clone(),
            affinities: [Affinity::Standard, Affinity::Heavy, Affinity::Keen]
                .into_iter()
                .collect(),
        },
    );
    aow.equip_param_gem.insert(
        10_200,
        GemCompatibility {
            gem_id: 10_200,
            weapon_types: vec![WeaponType::STRAIGHT_SWORD, WeaponType::DAGGER],
            affinities: AffinityFlags::STANDARD | AffinityFlags::MAGIC,
        },
    );
    aow.sword_arts_id_to_gem_id.insert(100, 10_100);
    aow.sword_arts_id_to_gem_id.insert(200, 10_200);

    aow.aow_stat_point_bonuses.insert(
        WAR_CRY.to_owned(),
        StatPointBonus {
            points: StatTable::from_array([10.0, 0.0, 0.0, 0.0, 0.0]),
        },
    );

    aow
}

fn lions_claw() -> SwordArt {
    let mut motion = DamageTable::default();
    motion[DamageType::Physical] = 200.0;
    let flip = PrecomputedAowAttack {
        attack_attribute: AttackAttribute::Strike,
        guard_cut_cancel_rate: 20.0,
        final_damage_rate_id: Some(FINAL_DAMAGE_RATE_PVP),
        stamina_motion: 300.0,
        poise_motion: 250.0,
        poise_flat: 5.0,
        ..PrecomputedAowAttack::motion("Lion's Claw", motion)
    };

    let mut motion = DamageTable::default();
    motion[DamageType::Physical] = 100.0;
    let landing = PrecomputedAowAttack {
        attack_attribute: AttackAttribute::Strike,
        disable_two_hand_bonus: true,
        stamina_motion: 100.0,
        poise_motion: 100.0,
        ..PrecomputedAowAttack::motion("Lion's Claw Landing", motion)
    };

    SwordArt {
        id: 100,
        name: LIONS_CLAW.to_owned(),
        attacks: vec![flip, landing],
    }
}

fn glintblade_phalanx(name: &str, id: u32, element_correct: i32) -> SwordArt {
    let mut flat = DamageTable::default();
    flat[DamageType::Magic] = 80.0;
    let blade = PrecomputedAowAttack {
        overwrite_attack_element_correct_id: element_correct,
        stamina_flat: 20.0,
        poise_flat: 8.0,
        ..PrecomputedAowAttack::bullet("Glintblade", flat)
    };
    SwordArt {
        id,
        name: name.to_owned(),
        attacks: vec![blade],
    }
}

fn war_cry() -> SwordArt {
    let mut motion = DamageTable::default();
    motion[DamageType::Physical] = 150.0;
    SwordArt {
        id: 400,
        name: WAR_CRY.to_owned(),
        attacks: vec![PrecomputedAowAttack {
            attack_attribute: AttackAttribute::Slash,
            stamina_motion: 100.0,
            poise_motion: 100.0,
            ..PrecomputedAowAttack::motion("War Cry Charged R2", motion)
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_bundles_are_consistent() {
        assert_eq!(weapon_data().validate(), vec![]);
        assert_eq!(aow_data().validate(), vec![]);
    }
}
