//! Deterministic level-of-detail reduction.
//!
//! Subsamples the process path before meshing to bound output size.
//! Both strategies are fully deterministic: the same positions and the
//! same budget always produce the same kept-index set, so repeated builds
//! of the same input stay byte-for-byte reproducible downstream.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sample selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LodStrategy {
    /// Evenly spaced samples along the index range.
    #[default]
    UniformStride,

    /// Keep the samples with the largest direction changes, so corners
    /// survive reduction at the expense of straightaways.
    Curvature,
}

/// Parameters for level-of-detail reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LodParams {
    /// Maximum number of samples to keep. Clamped to at least 2.
    pub max_samples: usize,

    /// Selection strategy.
    pub strategy: LodStrategy,
}

impl LodParams {
    /// Uniform-stride reduction to at most `max_samples` samples.
    #[must_use]
    pub const fn uniform(max_samples: usize) -> Self {
        Self {
            max_samples,
            strategy: LodStrategy::UniformStride,
        }
    }

    /// Curvature-priority reduction to at most `max_samples` samples.
    #[must_use]
    pub const fn curvature(max_samples: usize) -> Self {
        Self {
            max_samples,
            strategy: LodStrategy::Curvature,
        }
    }
}

/// Selects the sample indices to keep.
///
/// Always keeps the first and last sample; returns strictly increasing
/// indices. When the path already fits the budget, every index is kept.
///
/// # Example
///
/// ```
/// use bead_mesh::lod::{reduce, LodParams};
/// use nalgebra::Point3;
///
/// let positions: Vec<Point3<f64>> =
///     (0..100).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
///
/// let kept = reduce(&positions, &LodParams::uniform(10));
/// assert_eq!(kept.len(), 10);
/// assert_eq!(kept[0], 0);
/// assert_eq!(*kept.last().unwrap(), 99);
/// ```
#[must_use]
pub fn reduce(positions: &[Point3<f64>], params: &LodParams) -> Vec<usize> {
    let n = positions.len();
    let budget = params.max_samples.max(2);

    if n <= budget {
        return (0..n).collect();
    }

    match params.strategy {
        LodStrategy::UniformStride => uniform_stride(n, budget),
        LodStrategy::Curvature => curvature_priority(positions, budget),
    }
}

/// Evenly spaced indices including both endpoints.
///
/// Integer arithmetic throughout, so the selection is exact and
/// platform-independent.
fn uniform_stride(n: usize, budget: usize) -> Vec<usize> {
    let mut kept = Vec::with_capacity(budget);
    for k in 0..budget {
        kept.push(k * (n - 1) / (budget - 1));
    }
    kept.dedup();
    kept
}

/// Keeps the interior samples with the largest bend angles.
///
/// Ties break toward the lower index, which keeps the ordering total and
/// the selection deterministic.
fn curvature_priority(positions: &[Point3<f64>], budget: usize) -> Vec<usize> {
    let n = positions.len();

    // Bend angle at each interior vertex; straight runs score zero.
    let mut ranked: Vec<(f64, usize)> = (1..n - 1)
        .map(|i| {
            let incoming = (positions[i] - positions[i - 1])
                .try_normalize(f64::EPSILON)
                .unwrap_or_default();
            let outgoing = (positions[i + 1] - positions[i])
                .try_normalize(f64::EPSILON)
                .unwrap_or_default();
            let angle = incoming.dot(&outgoing).clamp(-1.0, 1.0).acos();
            (angle, i)
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });

    let mut kept: Vec<usize> = vec![0, n - 1];
    kept.extend(ranked.iter().take(budget - 2).map(|&(_, i)| i));
    kept.sort_unstable();
    kept.dedup();
    kept
}
