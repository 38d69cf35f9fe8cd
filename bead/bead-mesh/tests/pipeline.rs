//! End-to-end pipeline scenarios.

use bead_calibration::{CalibrationManager, CalibrationProfile};
use bead_mesh::lod::LodParams;
use bead_mesh::{build_bead_mesh, BeadMeshParams, BuildError, ColorScale};
use nalgebra::Point3;
use telemetry_types::{ProcessPath, Sample, Timestamp};

fn sample(t: f64, position: Point3<f64>, feed: f64, path_velocity: f64) -> Sample {
    Sample::new(Timestamp::from_secs_f64(t), position, feed, path_velocity)
}

/// A straight path along X with constant velocities.
fn straight_path(n: usize) -> ProcessPath {
    let samples: Vec<Sample> = (0..n)
        .map(|i| {
            let i = i as f64;
            sample(i * 0.1, Point3::new(i * 10.0, 0.0, 0.0), 50.0, 25.0)
        })
        .collect();
    ProcessPath::try_new(samples).expect("valid path")
}

#[test]
fn straight_three_sample_path_topology() {
    let result = build_bead_mesh(
        &straight_path(3),
        &CalibrationProfile::default(),
        &BeadMeshParams::default(),
    )
    .expect("build");

    // One island, two swept segments, 8 side triangles per segment, a
    // 4-triangle fan cap at each end.
    assert_eq!(result.geometry.islands.len(), 1);
    assert_eq!(result.geometry.vertices.len(), 3 * 4 + 2);
    assert_eq!(result.geometry.faces.len(), 2 * 8 + 2 * 4);
    assert!(result.geometry.is_well_formed());

    assert_eq!(result.diagnostics.meshed_samples, 3);
    assert_eq!(result.diagnostics.islands, 1);
    assert!(!result.diagnostics.has_warnings());
}

#[test]
fn bead_extents_match_calibrated_section() {
    // feed 50, path 25, area 161.29 mm² -> area 322.58 mm²;
    // width = sqrt(322.58 * 1.654), height = area / width.
    let result = build_bead_mesh(
        &straight_path(3),
        &CalibrationProfile::default(),
        &BeadMeshParams::default(),
    )
    .expect("build");

    let expected_width = (322.58_f64 * 1.654).sqrt();
    let expected_height = 322.58 / expected_width;

    let max_y = result
        .geometry
        .vertices
        .iter()
        .map(|v| v.position.y.abs())
        .fold(0.0_f64, f64::max);
    let max_z = result
        .geometry
        .vertices
        .iter()
        .map(|v| v.position.z.abs())
        .fold(0.0_f64, f64::max);

    // The section spans +/- half extents around the path axis; one of the
    // transverse axes carries the width, the other the height.
    let (max_wide, max_tall) = if max_y > max_z {
        (max_y, max_z)
    } else {
        (max_z, max_y)
    };
    assert!((max_wide - expected_width / 2.0).abs() < 1e-9);
    assert!((max_tall - expected_height / 2.0).abs() < 1e-9);
}

#[test]
fn stationary_middle_sample_splits_into_two_islands() {
    let samples = vec![
        sample(0.0, Point3::new(0.0, 0.0, 0.0), 50.0, 25.0),
        sample(0.1, Point3::new(10.0, 0.0, 0.0), 50.0, 25.0),
        sample(0.2, Point3::new(20.0, 0.0, 0.0), 50.0, 0.0),
        sample(0.3, Point3::new(30.0, 0.0, 0.0), 50.0, 25.0),
        sample(0.4, Point3::new(40.0, 0.0, 0.0), 50.0, 25.0),
    ];
    let path = ProcessPath::try_new(samples).expect("valid path");

    let result = build_bead_mesh(
        &path,
        &CalibrationProfile::default(),
        &BeadMeshParams::default(),
    )
    .expect("build");

    assert_eq!(result.geometry.islands.len(), 2);
    assert_eq!(result.diagnostics.stationary_samples, 1);
    assert_eq!(result.diagnostics.meshed_samples, 4);
    assert_eq!(result.diagnostics.dropped_samples, 1);
    assert!(result.diagnostics.has_warnings());
    assert!(result.geometry.is_well_formed());

    // No geometry spans the stationary sample: the islands come from the
    // runs on either side of it.
    let [first, second] = [result.geometry.islands[0], result.geometry.islands[1]];
    assert_eq!((first.first_sample, first.last_sample), (0, 1));
    assert_eq!((second.first_sample, second.last_sample), (3, 4));
    assert_eq!(first.vertex_range().end, second.vertex_range().start);
}

#[test]
fn zero_length_segment_splits_islands() {
    let samples = vec![
        sample(0.0, Point3::new(0.0, 0.0, 0.0), 50.0, 25.0),
        sample(0.1, Point3::new(10.0, 0.0, 0.0), 50.0, 25.0),
        // Tool dwells: same position, still reporting travel velocity.
        sample(0.2, Point3::new(10.0, 0.0, 0.0), 50.0, 25.0),
        sample(0.3, Point3::new(20.0, 0.0, 0.0), 50.0, 25.0),
    ];
    let path = ProcessPath::try_new(samples).expect("valid path");

    let result = build_bead_mesh(
        &path,
        &CalibrationProfile::default(),
        &BeadMeshParams::default(),
    )
    .expect("build");

    assert_eq!(result.diagnostics.zero_length_segments, 1);
    assert_eq!(result.geometry.islands.len(), 2);
    assert!(result.geometry.is_well_formed());
}

#[test]
fn all_stationary_path_fails_with_no_valid_geometry() {
    let samples = vec![
        sample(0.0, Point3::new(0.0, 0.0, 0.0), 50.0, 0.0),
        sample(0.1, Point3::new(10.0, 0.0, 0.0), 50.0, 0.0),
    ];
    let path = ProcessPath::try_new(samples).expect("valid path");

    let result = build_bead_mesh(
        &path,
        &CalibrationProfile::default(),
        &BeadMeshParams::default(),
    );
    assert!(matches!(result, Err(BuildError::NoValidGeometry { .. })));
}

#[test]
fn invalid_physics_sample_is_excluded_not_fatal() {
    let samples = vec![
        sample(0.0, Point3::new(0.0, 0.0, 0.0), 50.0, 25.0),
        sample(0.1, Point3::new(10.0, 0.0, 0.0), 50.0, 25.0),
        // Reverse feed produces a negative area.
        sample(0.2, Point3::new(20.0, 0.0, 0.0), -50.0, 25.0),
        sample(0.3, Point3::new(30.0, 0.0, 0.0), 50.0, 25.0),
        sample(0.4, Point3::new(40.0, 0.0, 0.0), 50.0, 25.0),
    ];
    let path = ProcessPath::try_new(samples).expect("valid path");

    let result = build_bead_mesh(
        &path,
        &CalibrationProfile::default(),
        &BeadMeshParams::default(),
    )
    .expect("build");

    assert_eq!(result.diagnostics.invalid_physics_samples, 1);
    assert_eq!(result.geometry.islands.len(), 2);
}

#[test]
fn zero_feed_sample_yields_zero_size_section_and_splits() {
    let samples = vec![
        sample(0.0, Point3::new(0.0, 0.0, 0.0), 50.0, 25.0),
        sample(0.1, Point3::new(10.0, 0.0, 0.0), 50.0, 25.0),
        // Feed stopped while the tool kept moving: zero deposited area.
        sample(0.2, Point3::new(20.0, 0.0, 0.0), 0.0, 25.0),
        sample(0.3, Point3::new(30.0, 0.0, 0.0), 50.0, 25.0),
        sample(0.4, Point3::new(40.0, 0.0, 0.0), 50.0, 25.0),
    ];
    let path = ProcessPath::try_new(samples).expect("valid path");

    let result = build_bead_mesh(
        &path,
        &CalibrationProfile::default(),
        &BeadMeshParams::default(),
    )
    .expect("build");

    assert_eq!(result.diagnostics.zero_area_samples, 1);
    assert_eq!(result.geometry.islands.len(), 2);
    assert!(result.geometry.is_well_formed());
}

#[test]
fn rebuild_is_bit_identical() {
    let path = straight_path(20);
    let calibration = CalibrationProfile::default().with_correction_factor(0.93);
    let params = BeadMeshParams::default().with_lod(LodParams::uniform(11));

    let first = build_bead_mesh(&path, &calibration, &params).expect("build");
    let second = build_bead_mesh(&path, &calibration, &params).expect("build");

    assert_eq!(first.geometry, second.geometry);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn calibration_round_trip_rebuild_is_bit_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("calibration.json");
    let path = straight_path(10);
    let params = BeadMeshParams::default();

    let profile = CalibrationProfile::default()
        .with_correction_factor(0.937)
        .with_area_offset(0.125)
        .with_width_multiplier(1.7);
    let mut manager = CalibrationManager::with_defaults();
    manager.apply(profile).expect("apply");

    let before = build_bead_mesh(&path, &manager.snapshot(), &params).expect("build");

    manager.persist(&file).expect("persist");
    let reloaded = CalibrationManager::load(&file).expect("load");

    let after = build_bead_mesh(&path, &reloaded.snapshot(), &params).expect("build");
    assert_eq!(before.geometry, after.geometry);
}

#[test]
fn snapshot_locks_calibration_for_inflight_build() {
    let path = straight_path(5);
    let params = BeadMeshParams::default();

    let mut manager = CalibrationManager::with_defaults();
    let snapshot = manager.snapshot();

    // Live profile changes after the snapshot was taken.
    manager
        .apply(CalibrationProfile::default().with_correction_factor(0.1))
        .expect("apply");

    let from_snapshot = build_bead_mesh(&path, &snapshot, &params).expect("build");
    let from_defaults =
        build_bead_mesh(&path, &CalibrationProfile::default(), &params).expect("build");
    assert_eq!(from_snapshot.geometry, from_defaults.geometry);
}

#[test]
fn lod_bounds_output_and_stays_deterministic() {
    let path = straight_path(200);
    let params = BeadMeshParams::default().with_lod(LodParams::uniform(20));

    let reduced = build_bead_mesh(&path, &CalibrationProfile::default(), &params).expect("build");
    let full = build_bead_mesh(
        &path,
        &CalibrationProfile::default(),
        &BeadMeshParams::default(),
    )
    .expect("build");

    assert_eq!(reduced.diagnostics.kept_samples, 20);
    assert!(reduced.geometry.vertices.len() < full.geometry.vertices.len());

    let again = build_bead_mesh(&path, &CalibrationProfile::default(), &params).expect("build");
    assert_eq!(reduced.geometry, again.geometry);
}

#[test]
fn scalar_coloring_with_carry_forward() {
    let samples = vec![
        sample(0.0, Point3::new(0.0, 0.0, 0.0), 50.0, 25.0).with_scalar("temperature", 100.0),
        // Dropped reading: carried forward from the previous sample.
        sample(0.1, Point3::new(10.0, 0.0, 0.0), 50.0, 25.0),
        sample(0.2, Point3::new(20.0, 0.0, 0.0), 50.0, 25.0).with_scalar("temperature", 300.0),
    ];
    let path = ProcessPath::try_new(samples).expect("valid path");

    let params = BeadMeshParams::default()
        .with_color_channel("temperature")
        .with_color_scale(ColorScale::Grayscale);
    let result =
        build_bead_mesh(&path, &CalibrationProfile::default(), &params).expect("build");

    assert_eq!(result.diagnostics.filled_scalars, 1);

    // Auto domain is [100, 300]; the first two sections sit at the low
    // end, the last at the high end.
    let island = result.geometry.islands[0];
    let vertices = &result.geometry.vertices[island.vertex_range()];
    assert!((vertices[0].scalar - 100.0).abs() < 1e-12);
    assert_eq!(vertices[0].color, vertices[4].color);
    assert_eq!(vertices[0].color.r, 0);
    assert_eq!(vertices[8].color.r, 255);
}

#[test]
fn unknown_channel_is_fatal() {
    let result = build_bead_mesh(
        &straight_path(3),
        &CalibrationProfile::default(),
        &BeadMeshParams::default().with_color_channel("nonexistent"),
    );
    assert!(matches!(
        result,
        Err(BuildError::UnknownChannel { name }) if name == "nonexistent"
    ));
}

#[test]
fn explicit_domain_overrides_auto() {
    let samples = vec![
        sample(0.0, Point3::new(0.0, 0.0, 0.0), 50.0, 25.0).with_scalar("t", 50.0),
        sample(0.1, Point3::new(10.0, 0.0, 0.0), 50.0, 25.0).with_scalar("t", 50.0),
    ];
    let path = ProcessPath::try_new(samples).expect("valid path");

    let params = BeadMeshParams::default()
        .with_color_channel("t")
        .with_color_scale(ColorScale::Grayscale)
        .with_scalar_domain(0.0, 100.0);
    let result =
        build_bead_mesh(&path, &CalibrationProfile::default(), &params).expect("build");

    // 50 over [0, 100] is mid-gray, not the degenerate-domain fallback.
    let mid = result.geometry.vertices[0].color;
    assert!((i32::from(mid.r) - 127).abs() <= 1);
}

#[test]
fn vertical_path_builds_cleanly() {
    // A climb a world-up frame reference would fail on.
    let samples: Vec<Sample> = (0..10)
        .map(|i| {
            let i = i as f64;
            sample(i * 0.1, Point3::new(0.0, 0.0, i * 5.0), 50.0, 25.0)
        })
        .collect();
    let path = ProcessPath::try_new(samples).expect("valid path");

    let result = build_bead_mesh(
        &path,
        &CalibrationProfile::default(),
        &BeadMeshParams::default(),
    )
    .expect("build");

    assert_eq!(result.geometry.islands.len(), 1);
    assert!(result.geometry.is_well_formed());
    for vertex in &result.geometry.vertices {
        assert!(vertex.normal.norm() > 0.99);
    }
}
