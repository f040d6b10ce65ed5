//! Loader round trips through real files.

use std::fs;

use calc_content::{AowDataLoader, ContentFactory, WeaponDataLoader, write_bundle};
use calc_core::fixtures;
use calc_core::{
    Affinity, ArOptions, AowCalculatorInput, DataError, PlayerStats, calculate_ar,
    calculate_skill,
};
use tempfile::TempDir;

#[test]
fn weapon_bundle_round_trips_as_json_and_ron() {
    let dir = TempDir::new().unwrap();
    let data = fixtures::weapon_data();

    for file in ["weapons.json", "weapons.ron"] {
        let path = dir.path().join(file);
        write_bundle(&path, &data).unwrap();
        let (loaded, findings) = WeaponDataLoader::load(&path).unwrap();
        assert_eq!(loaded, data, "{file}");
        assert!(findings.is_empty());
    }
}

#[test]
fn skill_bundle_round_trips() {
    let dir = TempDir::new().unwrap();
    let aow = fixtures::aow_data();

    for file in ["aow.json", "aow.ron"] {
        let path = dir.path().join(file);
        write_bundle(&path, &aow).unwrap();
        let (loaded, findings) = AowDataLoader::load(&path).unwrap();
        assert_eq!(loaded, aow, "{file}");
        assert!(findings.is_empty());
    }
}

#[test]
fn dangling_references_are_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let mut data = fixtures::weapon_data();
    data.curves.remove(&fixtures::CURVE_STATUS);
    let path = dir.path().join("weapons.json");
    write_bundle(&path, &data).unwrap();

    let (loaded, findings) = WeaponDataLoader::load(&path).unwrap();
    assert!(findings.iter().any(|f| matches!(
        f,
        DataError::DanglingCurve { curve_id, .. } if *curve_id == fixtures::CURVE_STATUS
    )));
    // Weapons that do not use the curve still calculate
    let stats = PlayerStats::new(20, 20, 10, 10, 10);
    assert!(
        calculate_ar(&loaded, fixtures::LORDSWORN, Affinity::Standard, 25, &stats, ArOptions::default())
            .is_some()
    );
}

#[test]
fn unsupported_extension_and_bad_content_fail() {
    let dir = TempDir::new().unwrap();

    let yaml = dir.path().join("weapons.yaml");
    fs::write(&yaml, "weapons: {}").unwrap();
    assert!(WeaponDataLoader::load(&yaml).is_err());

    let broken = dir.path().join("weapons.json");
    fs::write(&broken, "{ \"weapons\": [").unwrap();
    let err = WeaponDataLoader::load(&broken).unwrap_err();
    assert!(format!("{err:#}").contains("weapons.json"));
}

#[test]
fn factory_loads_a_data_directory() {
    let dir = TempDir::new().unwrap();
    write_bundle(&dir.path().join("weapons.ron"), &fixtures::weapon_data()).unwrap();
    write_bundle(&dir.path().join("aow.json"), &fixtures::aow_data()).unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[optimizer]\nlookahead_points = 3\n",
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().unwrap();
    assert_eq!(config.optimizer.lookahead_points, 3);

    let (weapons, _) = factory.load_weapons().unwrap();
    let (aow, _) = factory.load_aow().unwrap();
    let input = AowCalculatorInput::new(
        fixtures::LORDSWORN,
        Affinity::Standard,
        25,
        PlayerStats::new(10, 10, 35, 10, 10),
        fixtures::GLINTBLADE_PHALANX,
    );
    let result = calculate_skill(&aow, &weapons, &input).unwrap();
    assert_eq!(result.total().rounded(), Some(410));
}

#[test]
fn factory_without_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let factory = ContentFactory::new(dir.path());
    assert_eq!(factory.load_config().unwrap(), calc_core::CalcConfig::default());
    assert!(factory.load_weapons().is_err());
}

#[test]
fn json_is_preferred_over_ron() {
    let dir = TempDir::new().unwrap();
    write_bundle(&dir.path().join("weapons.json"), &fixtures::weapon_data()).unwrap();
    write_bundle(&dir.path().join("weapons.ron"), &calc_core::PrecomputedData::new()).unwrap();

    let factory = ContentFactory::new(dir.path());
    let path = factory.bundle_path(ContentFactory::WEAPONS_STEM).unwrap();
    assert_eq!(path.extension().unwrap(), "json");
    let (weapons, _) = factory.load_weapons().unwrap();
    assert!(!weapons.weapons.is_empty());
}
