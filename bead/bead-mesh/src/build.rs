//! The bead mesh build pipeline.

use nalgebra::Point3;
use tracing::{debug, info, warn};

use bead_calibration::CalibrationProfile;
use bead_physics::{deposited_area, AreaSample, SectionProfile};
use telemetry_types::{ProcessPath, Sample};

use crate::color::{carry_forward_fill, ScalarDomain};
use crate::error::{BuildError, BuildResult};
use crate::frame::path_frames;
use crate::geometry::MeshGeometry;
use crate::lod;
use crate::params::BeadMeshParams;
use crate::result::{BeadMeshResult, BuildDiagnostics};
use crate::sweep::{sweep_island, Station};

/// Builds the deposited-bead mesh for a process path.
///
/// A pure function of `(path, calibration snapshot, params)`: no shared
/// mutable state, and identical inputs produce bit-identical geometry.
/// Recoverable conditions (stationary tool, invalid physics, zero-length
/// segments) split the mesh into islands and are tallied in the returned
/// [`BuildDiagnostics`]; only a path with nothing sweepable fails.
///
/// # Errors
///
/// - [`BuildError::UnknownChannel`] when `params.color_channel` names a
///   channel no sample carries
/// - [`BuildError::NoValidGeometry`] when degenerate samples or segments
///   span the entire path
///
/// # Example
///
/// ```
/// use bead_calibration::CalibrationProfile;
/// use bead_mesh::{build_bead_mesh, BeadMeshParams};
/// use telemetry_types::{ProcessPath, Sample, Timestamp};
/// use nalgebra::Point3;
///
/// let samples: Vec<Sample> = (0..3)
///     .map(|i| {
///         Sample::new(
///             Timestamp::from_secs_f64(f64::from(i)),
///             Point3::new(f64::from(i) * 10.0, 0.0, 0.0),
///             50.0,
///             25.0,
///         )
///     })
///     .collect();
/// let path = ProcessPath::try_new(samples).unwrap();
///
/// let result = build_bead_mesh(
///     &path,
///     &CalibrationProfile::default(),
///     &BeadMeshParams::default(),
/// )
/// .unwrap();
///
/// assert!(result.geometry.is_well_formed());
/// ```
pub fn build_bead_mesh(
    path: &ProcessPath,
    calibration: &CalibrationProfile,
    params: &BeadMeshParams,
) -> BuildResult<BeadMeshResult> {
    let samples = path.samples();
    let mut diagnostics = BuildDiagnostics {
        input_samples: samples.len(),
        ..BuildDiagnostics::default()
    };

    info!(
        samples = samples.len(),
        channel = params.color_channel.as_deref().unwrap_or("-"),
        "Starting bead mesh build"
    );

    // Level-of-detail reduction.
    let kept: Vec<usize> = match &params.lod {
        Some(lod_params) => {
            let positions = path.positions();
            let kept = lod::reduce(&positions, lod_params);
            debug!(
                kept = kept.len(),
                total = positions.len(),
                "Reduced path for level of detail"
            );
            kept
        }
        None => (0..samples.len()).collect(),
    };
    diagnostics.kept_samples = kept.len();

    // Scalar column, degenerate-consistent carry-forward, color domain.
    let scalars = scalar_column(path, &kept, params, &mut diagnostics)?;
    let domain = scalar_domain(params, &scalars);

    // Per-sample bead physics.
    let areas = area_column(samples, &kept, calibration, params, &mut diagnostics);

    // Frames over the kept positions.
    let kept_positions: Vec<Point3<f64>> = kept.iter().map(|&i| samples[i].position).collect();
    let frames = path_frames(&kept_positions);
    diagnostics.zero_length_segments = frames.zero_length_segments.len();

    let mut zero_segment = vec![false; kept.len().saturating_sub(1)];
    for &segment in &frames.zero_length_segments {
        zero_segment[segment] = true;
    }

    // Contiguous non-degenerate runs become islands.
    let runs = partition_runs(&areas, &zero_segment);

    let mut geometry = MeshGeometry::new();
    for (start, end) in runs {
        if end - start < 2 {
            continue;
        }

        let stations: Vec<Station> = (start..end)
            .filter_map(|j| {
                areas[j].map(|area| Station {
                    center: kept_positions[j],
                    frame: frames.frames[j],
                    profile: SectionProfile::from_area(area, calibration.width_multiplier),
                    scalar: scalars[j],
                    color: params.color_scale.sample(domain.normalize(scalars[j])),
                    sample_index: kept[j],
                })
            })
            .collect();

        let island = sweep_island(&mut geometry, &stations);
        diagnostics.meshed_samples += stations.len();
        geometry.islands.push(island);
    }

    diagnostics.islands = geometry.islands.len();
    diagnostics.dropped_samples = diagnostics.kept_samples - diagnostics.meshed_samples;

    if geometry.islands.is_empty() {
        return Err(BuildError::NoValidGeometry {
            reason: format!(
                "{} of {} samples degenerate or in runs too short to sweep",
                diagnostics.dropped_samples, diagnostics.kept_samples
            ),
        });
    }

    info!(
        islands = diagnostics.islands,
        vertices = geometry.vertex_count(),
        faces = geometry.face_count(),
        "Bead mesh build complete"
    );

    Ok(BeadMeshResult {
        geometry,
        diagnostics,
    })
}

/// Extracts and gap-fills the selected scalar channel over the kept
/// samples.
fn scalar_column(
    path: &ProcessPath,
    kept: &[usize],
    params: &BeadMeshParams,
    diagnostics: &mut BuildDiagnostics,
) -> BuildResult<Vec<f64>> {
    let Some(name) = &params.color_channel else {
        return Ok(vec![0.0; kept.len()]);
    };

    let column = path
        .scalar_channel(name)
        .ok_or_else(|| BuildError::UnknownChannel { name: name.clone() })?;

    let mut scalars: Vec<f64> = kept.iter().map(|&i| column[i]).collect();
    diagnostics.filled_scalars = carry_forward_fill(&mut scalars);

    // A channel can survive on the full path but vanish from the kept
    // subset; default the column rather than render NaN holes.
    let unfilled = scalars.iter().filter(|v| v.is_nan()).count();
    if unfilled > 0 {
        warn!(
            channel = name.as_str(),
            unfilled, "Scalar channel has no values among kept samples"
        );
        for value in &mut scalars {
            *value = 0.0;
        }
        diagnostics.filled_scalars += unfilled;
    }

    Ok(scalars)
}

/// Resolves the color normalization domain.
fn scalar_domain(params: &BeadMeshParams, scalars: &[f64]) -> ScalarDomain {
    if let Some(domain) = params.scalar_domain {
        return domain;
    }
    if params.color_channel.is_some() {
        ScalarDomain::from_values(scalars).unwrap_or(ScalarDomain::new(0.0, 1.0))
    } else {
        // No channel selected: everything sits at the scale's low end.
        ScalarDomain::new(0.0, 1.0)
    }
}

/// Computes the deposited area per kept sample; `None` marks a degenerate
/// sample that splits the mesh.
fn area_column(
    samples: &[Sample],
    kept: &[usize],
    calibration: &CalibrationProfile,
    params: &BeadMeshParams,
    diagnostics: &mut BuildDiagnostics,
) -> Vec<Option<f64>> {
    let mut areas = Vec::with_capacity(kept.len());
    let mut last_valid: Option<f64> = None;

    for &i in kept {
        let sample = &samples[i];
        match deposited_area(
            sample.feed_velocity,
            sample.path_velocity,
            calibration,
            params.stationary_epsilon,
        ) {
            Ok(AreaSample::Deposited(area)) => {
                // A zero area (e.g. feed stopped) is valid physics but
                // yields a zero-size section the sweep must skip.
                if area > 0.0 {
                    last_valid = Some(area);
                    areas.push(Some(area));
                } else {
                    diagnostics.zero_area_samples += 1;
                    areas.push(None);
                }
            }
            Ok(AreaSample::Stationary) => {
                diagnostics.stationary_samples += 1;
                if last_valid.is_none() {
                    debug!(sample = i, "Leading stationary sample dropped");
                }
                areas.push(None);
            }
            Err(err) => {
                diagnostics.invalid_physics_samples += 1;
                warn!(sample = i, error = %err, "Invalid physics result, sample excluded");
                areas.push(None);
            }
        }
    }

    areas
}

/// Splits the kept samples into maximal sweepable runs: contiguous
/// non-degenerate samples with no zero-length segment inside.
fn partition_runs(areas: &[Option<f64>], zero_segment: &[bool]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut run_start: Option<usize> = None;

    for (j, area) in areas.iter().enumerate() {
        if area.is_some() {
            match run_start {
                None => run_start = Some(j),
                Some(start) => {
                    if zero_segment.get(j - 1) == Some(&true) {
                        runs.push((start, j));
                        run_start = Some(j);
                    }
                }
            }
        } else if let Some(start) = run_start.take() {
            runs.push((start, j));
        }
    }
    if let Some(start) = run_start {
        runs.push((start, areas.len()));
    }

    runs
}
