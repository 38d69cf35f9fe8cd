//! Rectangle-section sweeping.
//!
//! Connects consecutive bead cross-sections with quad "tube" sides and
//! closes each contiguous run with end caps. No corner mitering is
//! computed: the straight sweep between successive frames is a linear
//! approximation, acceptable at telemetry sample density.

use nalgebra::Point3;

use bead_physics::SectionProfile;

use crate::color::Rgba;
use crate::frame::Frame;
use crate::geometry::{MeshGeometry, MeshIsland, MeshVertex};

/// Corners per rectangular cross-section.
const CORNERS: usize = 4;

/// Sign pattern of the rectangle corners in the (normal, binormal) plane,
/// in rotational order from normal toward binormal.
const CORNER_SIGNS: [(f64, f64); CORNERS] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// One cross-section ready to sweep: where it sits, how it is oriented,
/// its size, and what it is colored by.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Station {
    pub center: Point3<f64>,
    pub frame: Frame,
    pub profile: SectionProfile,
    pub scalar: f64,
    pub color: Rgba,
    pub sample_index: usize,
}

/// Sweeps one contiguous island of stations into the mesh.
///
/// Emits 4 shared corner vertices per station, 4 quads (8 triangles) per
/// adjacent station pair, and a center-vertex triangle fan (4 triangles)
/// capping each end. Faces wind counter-clockwise viewed from outside.
///
/// Callers guarantee `stations.len() >= 2`.
pub(crate) fn sweep_island(mesh: &mut MeshGeometry, stations: &[Station]) -> MeshIsland {
    let vertex_offset = mesh.vertices.len();
    let face_offset = mesh.faces.len();

    // Corner rings, shared between adjacent side quads.
    for (station_idx, station) in stations.iter().enumerate() {
        let n = station.frame.normal;
        let b = station.frame.binormal;
        let hh = station.profile.half_height();
        let hw = station.profile.half_width();

        for (sn, sb) in CORNER_SIGNS {
            let offset = n * (sn * hh) + b * (sb * hw);
            let normal = (n * sn + b * sb)
                .try_normalize(f64::EPSILON)
                .unwrap_or(station.frame.normal);

            mesh.vertices.push(MeshVertex {
                position: station.center + offset,
                normal,
                scalar: station.scalar,
                color: station.color,
            });
        }

        if station_idx > 0 {
            emit_segment_sides(mesh, vertex_offset, station_idx);
        }
    }

    emit_cap(mesh, stations, vertex_offset, true);
    emit_cap(mesh, stations, vertex_offset, false);

    MeshIsland {
        vertex_offset,
        vertex_count: mesh.vertices.len() - vertex_offset,
        face_offset,
        face_count: mesh.faces.len() - face_offset,
        first_sample: stations[0].sample_index,
        last_sample: stations[stations.len() - 1].sample_index,
    }
}

/// Emits the 4 side quads between station `station_idx - 1` and
/// `station_idx`.
#[allow(clippy::cast_possible_truncation)]
// Vertex counts stay far below u32::MAX in practice
fn emit_segment_sides(mesh: &mut MeshGeometry, vertex_offset: usize, station_idx: usize) {
    let prev_ring = vertex_offset + (station_idx - 1) * CORNERS;
    let next_ring = vertex_offset + station_idx * CORNERS;

    for k in 0..CORNERS {
        let k_next = (k + 1) % CORNERS;

        let curr = (prev_ring + k) as u32;
        let curr_next = (prev_ring + k_next) as u32;
        let ahead = (next_ring + k) as u32;
        let ahead_next = (next_ring + k_next) as u32;

        mesh.faces.push([curr, curr_next, ahead]);
        mesh.faces.push([curr_next, ahead_next, ahead]);
    }
}

/// Closes one end of an island with a center-vertex triangle fan.
#[allow(clippy::cast_possible_truncation)]
// Vertex counts stay far below u32::MAX in practice
fn emit_cap(mesh: &mut MeshGeometry, stations: &[Station], vertex_offset: usize, is_start: bool) {
    let (station, ring_start) = if is_start {
        (&stations[0], vertex_offset)
    } else {
        (
            &stations[stations.len() - 1],
            vertex_offset + (stations.len() - 1) * CORNERS,
        )
    };

    let normal = if is_start {
        -station.frame.tangent
    } else {
        station.frame.tangent
    };

    let center_idx = mesh.vertices.len() as u32;
    mesh.vertices.push(MeshVertex {
        position: station.center,
        normal,
        scalar: station.scalar,
        color: station.color,
    });

    for k in 0..CORNERS {
        let curr = (ring_start + k) as u32;
        let next = (ring_start + (k + 1) % CORNERS) as u32;

        if is_start {
            // Wind counter-clockwise when looking from outside (behind
            // the first station).
            mesh.faces.push([center_idx, next, curr]);
        } else {
            mesh.faces.push([center_idx, curr, next]);
        }
    }
}
