//! Scene conversion pipeline
//!
//! Takes a parsed [`ObjScene`] and produces the output groups: remaps
//! the raw coordinate arrays once, fan-triangulates every face, groups
//! triangles by object (or by material/object pair), resolves each
//! corner's attributes, and deduplicates them into compact indexed
//! meshes.

mod axes;
mod dedup;

pub use axes::AxisRemap;
pub use dedup::VertexPool;

use crate::error::{Result, SceneError};
use crate::material::Material;
use crate::math::{face_normal, Vec3};
use crate::obj::{ObjScene, Triangle};
use crate::output::SceneEntry;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Material name assumed when a face was declared before any `usemtl`.
pub const DEFAULT_MATERIAL_NAME: &str = "default";

/// Object name assumed when a face was declared before any `o`.
pub const DEFAULT_OBJECT_NAME: &str = "unknown";

/// How triangles are grouped into output entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GroupBy {
    /// One entry per object name; the first material encountered for
    /// the object represents the whole entry.
    #[default]
    Object,
    /// One entry per (material, object) pair, so an object using
    /// several materials yields several entries.
    MaterialObject,
}

/// How each entry's texture assignment is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextureRule {
    /// Keep whatever the MTL file assigned (possibly nothing).
    Keep,
    /// Override with `<object name up to the first '.'>.png`, the
    /// asset-naming convention of the target renderer. An object named
    /// `tank.001` gets `tank.png`.
    #[default]
    ObjectStemPng,
}

/// Conversion settings. The two constructors correspond to the two
/// supported export pipelines.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Coordinate remap for raw positions and normals
    pub axis_remap: AxisRemap,
    /// Output grouping strategy
    pub group_by: GroupBy,
    /// Emit (1−u, 1−v) instead of (u, v), compensating for a
    /// shader-side flip
    pub flip_uvs: bool,
    /// Texture assignment rule
    pub texture_rule: TextureRule,
    /// Material used when a face references an unknown material name
    pub default_material: Material,
}

impl ConvertOptions {
    /// Coordinates pass through unchanged; one entry per object with
    /// its first material; UVs as authored. For OBJ files already
    /// exported in the renderer's convention.
    #[must_use]
    pub fn as_is() -> Self {
        Self {
            axis_remap: AxisRemap::Identity,
            group_by: GroupBy::Object,
            flip_uvs: false,
            texture_rule: TextureRule::ObjectStemPng,
            default_material: Material::fallback(),
        }
    }

    /// Z-up exports: remap (x, y, z) → (x, z, −y), split entries per
    /// (material, object) pair, and flip UVs to (1−u, 1−v).
    #[must_use]
    pub fn z_up_to_y_up() -> Self {
        Self {
            axis_remap: AxisRemap::ZUpToYUp,
            group_by: GroupBy::MaterialObject,
            flip_uvs: true,
            texture_rule: TextureRule::ObjectStemPng,
            default_material: Material::fallback(),
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::as_is()
    }
}

/// Grouping key. Under [`GroupBy::Object`] the material field holds
/// the object's representative (first-encountered) material.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    material: String,
    object: String,
}

/// Convert a parsed scene into output entries.
///
/// Groups appear in first-encounter order, and within each group the
/// vertex indices are assigned in corner-encounter order, so the
/// output is deterministic for a given input.
///
/// # Errors
///
/// Returns an error if a face references a vertex position that was
/// never declared. Out-of-range normal and uv indices are not errors;
/// they fall back to a synthesized face normal and `[0, 0]`.
pub fn convert_scene(scene: &ObjScene, options: &ConvertOptions) -> Result<Vec<SceneEntry>> {
    // Remap the raw arrays exactly once, never per triangle, so
    // corners sharing a source vertex stay bit-identical.
    let positions: Vec<Vec3> = scene
        .positions
        .iter()
        .map(|&p| options.axis_remap.apply(p))
        .collect();
    let normals: Vec<Vec3> = scene
        .normals
        .iter()
        .map(|&n| options.axis_remap.apply_normal(n))
        .collect();

    let (order, groups) = group_triangles(scene, options.group_by);

    let mut entries = Vec::with_capacity(order.len());
    for key in &order {
        let material = resolve_material(scene, options, key);

        let mut pool = VertexPool::new();
        let mut triangles = Vec::with_capacity(groups[key].len());
        for tri in &groups[key] {
            let corners = resolve_corner_positions(&positions, tri)?;
            let mut indices = [0u32; 3];
            for (i, corner) in tri.corners.iter().enumerate() {
                let normal = match corner.normal {
                    Some(idx) if idx < normals.len() => normals[idx],
                    // No usable normal index: synthesize the face
                    // normal from the containing triangle.
                    _ => face_normal(corners[0], corners[1], corners[2]),
                };
                let uv = match corner.uv {
                    Some(idx) if idx < scene.uvs.len() => {
                        let [u, v] = scene.uvs[idx];
                        if options.flip_uvs {
                            [1.0 - u, 1.0 - v]
                        } else {
                            [u, v]
                        }
                    }
                    _ => [0.0, 0.0],
                };
                indices[i] = pool.insert(corners[i], normal, uv);
            }
            triangles.push(indices);
        }

        entries.push(SceneEntry {
            material,
            vertices: pool.positions,
            normals: pool.normals,
            uvs: pool.uvs,
            triangles,
        });
    }
    Ok(entries)
}

/// Triangulate every face and bucket the triangles by group key,
/// preserving first-encounter order of the groups.
fn group_triangles(
    scene: &ObjScene,
    group_by: GroupBy,
) -> (Vec<GroupKey>, HashMap<GroupKey, Vec<Triangle>>) {
    let mut order = Vec::new();
    let mut groups: HashMap<GroupKey, Vec<Triangle>> = HashMap::new();
    let mut object_material: HashMap<String, String> = HashMap::new();

    for face in &scene.faces {
        let material = face
            .material
            .clone()
            .unwrap_or_else(|| DEFAULT_MATERIAL_NAME.to_string());
        let object = face
            .object
            .clone()
            .unwrap_or_else(|| DEFAULT_OBJECT_NAME.to_string());

        let key = match group_by {
            GroupBy::Object => {
                let representative = object_material
                    .entry(object.clone())
                    .or_insert(material)
                    .clone();
                GroupKey {
                    material: representative,
                    object,
                }
            }
            GroupBy::MaterialObject => GroupKey { material, object },
        };

        let triangles = face.triangulate();
        match groups.entry(key) {
            Entry::Occupied(mut slot) => slot.get_mut().extend(triangles),
            Entry::Vacant(slot) => {
                order.push(slot.key().clone());
                slot.insert(triangles);
            }
        }
    }

    (order, groups)
}

/// Look up the group's material, falling back to the configured
/// default, then apply the texture rule.
fn resolve_material(scene: &ObjScene, options: &ConvertOptions, key: &GroupKey) -> Material {
    let mut material = scene
        .materials
        .get(&key.material)
        .cloned()
        .unwrap_or_else(|| options.default_material.clone());
    if options.texture_rule == TextureRule::ObjectStemPng {
        material.texture = Some(object_stem_png(&key.object));
    }
    material
}

/// Resolve the three corner positions of a triangle.
fn resolve_corner_positions(positions: &[Vec3], tri: &Triangle) -> Result<[Vec3; 3]> {
    let mut out = [[0.0; 3]; 3];
    for (slot, corner) in out.iter_mut().zip(&tri.corners) {
        *slot = *positions
            .get(corner.position)
            .ok_or(SceneError::PositionOutOfRange {
                index: corner.position,
                count: positions.len(),
            })?;
    }
    Ok(out)
}

fn object_stem_png(object: &str) -> String {
    let stem = object.split('.').next().unwrap_or(object);
    format!("{stem}.png")
}
