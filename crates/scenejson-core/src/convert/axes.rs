//! Axis convention remapping
//!
//! Blender-style exports are Z-up; the target renderer is Y-up. The
//! remap is applied exactly once to the raw position and normal
//! arrays, before triangulation and deduplication, so corners that
//! share a source vertex keep sharing it afterwards.

use crate::math::{normalize, Vec3};

/// Coordinate remapping applied to every raw position and normal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AxisRemap {
    /// Pass coordinates through unchanged (the file is already in the
    /// renderer's convention).
    #[default]
    Identity,
    /// Convert a Z-up right-handed system to a Y-up right-handed one:
    /// (x, y, z) → (x, z, −y).
    ZUpToYUp,
}

impl AxisRemap {
    /// Remap one vector.
    #[inline]
    #[must_use]
    pub fn apply(self, v: Vec3) -> Vec3 {
        match self {
            Self::Identity => v,
            Self::ZUpToYUp => [v[0], v[2], -v[1]],
        }
    }

    /// Remap a direction vector and renormalize it. Normals are
    /// renormalized even under `Identity`, since OBJ files are free to
    /// carry non-unit `vn` entries.
    #[inline]
    #[must_use]
    pub fn apply_normal(self, v: Vec3) -> Vec3 {
        normalize(self.apply(v))
    }
}
