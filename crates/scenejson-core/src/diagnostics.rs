//! Display-only scene statistics
//!
//! Bounding extents, a suggested camera distance, and the average
//! vertex normal for assembled entries. These feed the CLI's summary
//! output and are never serialized into the JSON document.

use crate::math::{normalize, Vec3};
use crate::output::SceneEntry;

/// Vertical field of view the camera-distance suggestion assumes.
pub const CAMERA_FOV_DEGREES: f64 = 90.0;

/// Axis-aligned bounds and derived metrics for a set of vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStats {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
    /// Component mean of all vertex normals
    pub average_normal: Vec3,
    /// Total unique vertices
    pub vertex_count: usize,
    /// Total triangles
    pub triangle_count: usize,
}

impl SceneStats {
    /// Stats for a single entry. Returns `None` for an entry with no
    /// vertices, since its bounds would be meaningless.
    #[must_use]
    pub fn from_entry(entry: &SceneEntry) -> Option<Self> {
        Self::from_entries(std::slice::from_ref(entry))
    }

    /// Combined stats across all entries. Returns `None` when no entry
    /// has any vertices.
    #[must_use]
    pub fn from_entries(entries: &[SceneEntry]) -> Option<Self> {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        let mut normal_sum = [0.0; 3];
        let mut vertex_count = 0;
        let mut triangle_count = 0;

        for entry in entries {
            triangle_count += entry.triangles.len();
            for vertex in &entry.vertices {
                vertex_count += 1;
                for axis in 0..3 {
                    min[axis] = min[axis].min(vertex[axis]);
                    max[axis] = max[axis].max(vertex[axis]);
                }
            }
            for normal in &entry.normals {
                for axis in 0..3 {
                    normal_sum[axis] += normal[axis];
                }
            }
        }

        if vertex_count == 0 {
            return None;
        }
        let count = vertex_count as f64;
        Some(Self {
            min,
            max,
            average_normal: [
                normal_sum[0] / count,
                normal_sum[1] / count,
                normal_sum[2] / count,
            ],
            vertex_count,
            triangle_count,
        })
    }

    /// Center of the bounding box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }

    /// Length of the bounding box diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        let d = [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ];
        (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
    }

    /// Camera distance at which the whole bounding diagonal fits a
    /// [`CAMERA_FOV_DEGREES`] view: half the diagonal divided by
    /// tan(fov / 2). At 90° that is exactly the half-diagonal.
    #[must_use]
    pub fn camera_distance(&self) -> f64 {
        (self.diagonal() / 2.0) / (CAMERA_FOV_DEGREES.to_radians() / 2.0).tan()
    }

    /// The average normal, renormalized for display.
    #[must_use]
    pub fn average_normal_unit(&self) -> Vec3 {
        normalize(self.average_normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    fn cube_entry() -> SceneEntry {
        let vertices = vec![
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [2.0, 2.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 2.0],
            [2.0, 0.0, 2.0],
            [2.0, 2.0, 2.0],
            [0.0, 2.0, 2.0],
        ];
        let count = vertices.len();
        SceneEntry {
            material: Material::fallback(),
            vertices,
            normals: vec![[0.0, 1.0, 0.0]; count],
            uvs: vec![[0.0, 0.0]; count],
            triangles: vec![[0, 1, 2], [0, 2, 3]],
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_cube_bounds_and_center() {
        let stats = SceneStats::from_entry(&cube_entry()).unwrap();
        assert_eq!(stats.min, [0.0, 0.0, 0.0]);
        assert_eq!(stats.max, [2.0, 2.0, 2.0]);
        assert_eq!(stats.center(), [1.0, 1.0, 1.0]);
        assert_eq!(stats.vertex_count, 8);
        assert_eq!(stats.triangle_count, 2);
    }

    #[test]
    fn test_camera_distance_is_half_diagonal_at_90_degrees() {
        let stats = SceneStats::from_entry(&cube_entry()).unwrap();
        let diagonal = (12.0f64).sqrt();
        assert!((stats.diagonal() - diagonal).abs() < 1e-12);
        assert!((stats.camera_distance() - diagonal / 2.0).abs() < 1e-9);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_average_normal() {
        let stats = SceneStats::from_entry(&cube_entry()).unwrap();
        assert_eq!(stats.average_normal, [0.0, 1.0, 0.0]);
        assert_eq!(stats.average_normal_unit(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_empty_scene_has_no_stats() {
        assert!(SceneStats::from_entries(&[]).is_none());
    }
}
