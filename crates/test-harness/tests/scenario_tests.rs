//! End-to-end scenarios: build a scene through the fluent API, export the
//! deck, and check the text with the harness assertions.

use test_harness::assertions::{
    assert_deck_contains, assert_deck_lacks, assert_section_order, assert_single_record,
};
use test_harness::helpers::{air_spec, origin_sphere, unit_cube, upright_cylinder, water_spec};
use test_harness::{HarnessError, SceneBuilder};

#[test]
fn water_ball_in_air() -> Result<(), HarnessError> {
    let mut scene = SceneBuilder::new();
    scene
        .material(water_spec())?
        .material(air_spec())?
        .surface("ball", "MAT_WATER", origin_sphere(1.0))?
        .cell_inside("inside", "ball", "MAT_WATER", None)?
        .cell_outside_all("world", &["ball"], "MAT_AIR")?;

    let deck = scene.deck()?;
    assert_section_order(&deck, &["[ Material ]", "[ Mat Name Color ]", "[ Surface ]", "[ Cell ]"])?;
    assert_single_record(&deck, "    mat[1] H 2 O 1  GAS=0 $ name: 'MAT_WATER'")?;
    assert_deck_contains(&deck, "SPH  0.0 0.0 0.0  1.0")?;
    assert_deck_contains(&deck, "    100 1  1.0  (-1)   $ name: 'inside' ")?;
    assert_deck_contains(&deck, "    101 2  0.001205  (1)   $ name: 'world' ")?;
    Ok(())
}

#[test]
fn sentinel_owned_outer_cell_has_no_density() -> Result<(), HarnessError> {
    let mut scene = SceneBuilder::new();
    scene
        .material(water_spec())?
        .surface("ball", "MAT_WATER", origin_sphere(2.0))?
        .cell_outside_all("outer", &["ball"], "MAT_OUTER")?;

    let deck = scene.deck()?;
    assert_deck_contains(&deck, "    100 -1  (1) $ name: 'outer' ")?;
    assert_deck_lacks(&deck, "VOL=")?;
    Ok(())
}

#[test]
fn catalog_material_gets_catalog_density() -> Result<(), HarnessError> {
    let mut scene = SceneBuilder::new();
    scene
        .material_from_catalog("POLYETHYLENE")?
        .surface("moderator", "MAT_POLYETHYLENE", unit_cube())?
        .cell_inside("inside", "moderator", "MAT_POLYETHYLENE", Some(1.0))?;

    let deck = scene.deck()?;
    assert_deck_contains(&deck, "0.93")?;
    assert_deck_contains(&deck, "VOL=1.0")?;
    Ok(())
}

#[test]
fn multi_surface_world_cell_intersects_positives() -> Result<(), HarnessError> {
    let mut scene = SceneBuilder::new();
    scene
        .material(water_spec())?
        .surface("ball", "MAT_WATER", origin_sphere(1.0))?
        .surface("pipe", "MAT_WATER", upright_cylinder(0.5, 4.0))?
        .cell_outside_all("world", &["ball", "pipe"], "MAT_VOID")?;

    let deck = scene.deck()?;
    assert_deck_contains(&deck, "    100 0  (1) (2) $ name: 'world' ")?;
    Ok(())
}

#[test]
fn duplicate_names_are_rejected() {
    let mut scene = SceneBuilder::new();
    scene.material(water_spec()).unwrap();
    let err = scene.material(water_spec()).unwrap_err();
    assert!(matches!(err, HarnessError::DuplicateName { .. }));

    scene
        .surface("ball", "MAT_WATER", origin_sphere(1.0))
        .unwrap();
    let err = scene
        .surface("ball", "MAT_WATER", origin_sphere(2.0))
        .unwrap_err();
    assert!(matches!(err, HarnessError::DuplicateName { .. }));
}

#[test]
fn unknown_references_are_rejected() {
    let mut scene = SceneBuilder::new();
    let err = scene
        .surface("ball", "MAT_MISSING", origin_sphere(1.0))
        .unwrap_err();
    assert!(matches!(err, HarnessError::MaterialNotFound { .. }));

    scene.material(water_spec()).unwrap();
    let err = scene
        .cell_inside("inside", "nothing", "MAT_WATER", None)
        .unwrap_err();
    assert!(matches!(err, HarnessError::SurfaceNotFound { .. }));
}
