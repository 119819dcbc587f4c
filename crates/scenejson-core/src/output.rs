//! Output document model and JSON writer
//!
//! The converter emits a top-level JSON array with one entry per
//! output group. Field names here are the wire format consumed by the
//! renderer, so they are stable.

use crate::error::Result;
use crate::material::Material;
use crate::math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One output group: a resolved material plus a compact indexed
/// triangle mesh.
///
/// Invariants: `vertices`, `normals`, and `uvs` have equal length, and
/// every index in `triangles` is below that length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntry {
    /// Resolved material for the whole group
    pub material: Material,
    /// Deduplicated vertex positions
    pub vertices: Vec<Vec3>,
    /// Vertex normals, parallel to `vertices`
    pub normals: Vec<Vec3>,
    /// Texture coordinates, parallel to `vertices`
    pub uvs: Vec<Vec2>,
    /// Indexed triangles, three indices each
    pub triangles: Vec<[u32; 3]>,
}

/// Serialize scene entries to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (it should not for this
/// model; the variant exists to keep the error path explicit).
pub fn to_json_pretty(entries: &[SceneEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Write scene entries as pretty-printed JSON to `path`.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn write_json<P: AsRef<Path>>(path: P, entries: &[SceneEntry]) -> Result<()> {
    std::fs::write(path, to_json_pretty(entries)?)?;
    Ok(())
}
