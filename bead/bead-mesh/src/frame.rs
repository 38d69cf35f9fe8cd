//! Moving frames along the deposition path.
//!
//! Provides parallel transport (rotation minimizing) frames so that every
//! bead cross-section is oriented consistently, without the flip artifacts
//! a fixed world-up reference produces when the path turns near-vertical.

use nalgebra::{Point3, UnitVector3, Vector3};

/// Segments shorter than this are zero-length for framing purposes, in mm.
pub(crate) const ZERO_LENGTH_EPSILON: f64 = 1e-9;

/// An orthonormal frame at one path sample.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Tangent direction (forward along the path).
    pub tangent: Vector3<f64>,
    /// Normal direction (perpendicular to tangent; bead height axis).
    pub normal: Vector3<f64>,
    /// Binormal direction (perpendicular to both; bead width axis).
    pub binormal: Vector3<f64>,
}

impl Frame {
    /// Builds an initial frame around a tangent, choosing an arbitrary
    /// stable perpendicular for the normal.
    #[must_use]
    pub fn from_tangent(tangent: Vector3<f64>) -> Self {
        let tangent = tangent.try_normalize(f64::EPSILON).unwrap_or(Vector3::z());
        let normal = stable_perpendicular(tangent);
        let binormal = tangent.cross(&normal);

        Self {
            tangent,
            normal,
            binormal,
        }
    }
}

/// Frames for a whole path, with degenerate-segment bookkeeping.
#[derive(Debug, Clone)]
pub struct PathFrames {
    /// One frame per input point.
    pub frames: Vec<Frame>,

    /// Indices `i` of zero-length segments (between points `i` and `i+1`).
    pub zero_length_segments: Vec<usize>,
}

impl PathFrames {
    /// Whether every segment of the path was zero-length.
    #[must_use]
    pub fn all_degenerate(&self) -> bool {
        !self.frames.is_empty() && self.zero_length_segments.len() + 1 == self.frames.len()
    }
}

/// Computes parallel transport frames along the given positions.
///
/// The first tangent comes from the first non-zero segment; interior
/// tangents average the incoming and outgoing directions; the final
/// tangent reuses the last segment. Each frame is propagated from the
/// previous one by the rotation that maps the old tangent onto the new
/// (Rodrigues), which keeps consecutive normals from flipping sign.
///
/// Zero-length segments reuse the previous tangent and are reported in
/// [`PathFrames::zero_length_segments`]; the path continues through them.
///
/// Returns empty frames for fewer than 2 points.
#[must_use]
pub fn path_frames(points: &[Point3<f64>]) -> PathFrames {
    if points.len() < 2 {
        return PathFrames {
            frames: Vec::new(),
            zero_length_segments: Vec::new(),
        };
    }

    // Segment directions, with zero-length segments flagged.
    let mut zero_length_segments = Vec::new();
    let directions: Vec<Option<Vector3<f64>>> = points
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let dir = w[1] - w[0];
            if dir.norm() <= ZERO_LENGTH_EPSILON {
                zero_length_segments.push(i);
                None
            } else {
                Some(dir)
            }
        })
        .collect();

    // First tangent: first non-zero segment, or a fallback axis when the
    // whole path is coincident points.
    let first_tangent = directions
        .iter()
        .flatten()
        .next()
        .and_then(|d| d.try_normalize(f64::EPSILON))
        .unwrap_or(Vector3::z());

    let mut frames = Vec::with_capacity(points.len());
    frames.push(Frame::from_tangent(first_tangent));

    for i in 1..points.len() {
        let prev_frame = frames[i - 1];

        // Average incoming and outgoing directions where both exist;
        // carry the previous tangent across zero-length segments.
        let incoming = directions.get(i - 1).copied().flatten();
        let outgoing = directions.get(i).copied().flatten();
        let tangent = match (incoming, outgoing) {
            (Some(a), Some(b)) => (a + b)
                .try_normalize(f64::EPSILON)
                .unwrap_or(prev_frame.tangent),
            (Some(d), None) | (None, Some(d)) => d
                .try_normalize(f64::EPSILON)
                .unwrap_or(prev_frame.tangent),
            (None, None) => prev_frame.tangent,
        };

        frames.push(transport(&prev_frame, tangent));
    }

    PathFrames {
        frames,
        zero_length_segments,
    }
}

/// Transports a frame onto a new tangent.
///
/// Rotates the normal and binormal by the rotation that maps the old
/// tangent onto the new one.
fn transport(prev: &Frame, new_tangent: Vector3<f64>) -> Frame {
    let new_tangent = new_tangent
        .try_normalize(f64::EPSILON)
        .unwrap_or(prev.tangent);

    let axis = prev.tangent.cross(&new_tangent);
    let axis_len = axis.norm();

    if axis_len < f64::EPSILON {
        // Parallel tangents: keep or mirror the previous frame.
        if prev.tangent.dot(&new_tangent) > 0.0 {
            Frame {
                tangent: new_tangent,
                normal: prev.normal,
                binormal: prev.binormal,
            }
        } else {
            Frame {
                tangent: new_tangent,
                normal: -prev.normal,
                binormal: -prev.binormal,
            }
        }
    } else {
        let axis = UnitVector3::new_normalize(axis);
        let angle = prev.tangent.dot(&new_tangent).clamp(-1.0, 1.0).acos();

        // Rodrigues rotation formula.
        let rotate = |v: Vector3<f64>| {
            let k = axis.into_inner();
            let cos_a = angle.cos();
            let sin_a = angle.sin();
            v * cos_a + k.cross(&v) * sin_a + k * (k.dot(&v)) * (1.0 - cos_a)
        };

        Frame {
            tangent: new_tangent,
            normal: rotate(prev.normal),
            binormal: rotate(prev.binormal),
        }
    }
}

/// Picks a stable vector perpendicular to `v` by crossing with the axis
/// most perpendicular to it.
fn stable_perpendicular(v: Vector3<f64>) -> Vector3<f64> {
    let abs_x = v.x.abs();
    let abs_y = v.y.abs();
    let abs_z = v.z.abs();

    let pick = if abs_x <= abs_y && abs_x <= abs_z {
        Vector3::x()
    } else if abs_y <= abs_z {
        Vector3::y()
    } else {
        Vector3::z()
    };

    v.cross(&pick)
        .try_normalize(f64::EPSILON)
        .unwrap_or(Vector3::y())
}
