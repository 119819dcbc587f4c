//! Vertex deduplication pool
//!
//! The central data structure of the converter: a growable arena of
//! resolved (position, normal, uv) triples plus a map from the
//! canonical rounded key to the arena index. Corners whose attributes
//! round to the same key share one output index; any component
//! difference at 6-decimal precision yields a distinct index.
//!
//! One pool is built per output group and discarded once the group is
//! emitted.

use crate::math::{round_component, Vec2, Vec3};
use std::collections::HashMap;

/// Canonical form of a resolved corner: every component rounded to six
/// decimal digits, stored as integer millionths so the key is
/// `Eq + Hash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VertexKey {
    position: [i64; 3],
    normal: [i64; 3],
    uv: [i64; 2],
}

impl VertexKey {
    fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.map(round_component),
            normal: normal.map(round_component),
            uv: uv.map(round_component),
        }
    }
}

/// Arena of deduplicated vertex attributes for one output group.
///
/// The three attribute vectors always have equal length, and every
/// index handed out by [`VertexPool::insert`] is a valid index into
/// all three.
#[derive(Debug, Clone, Default)]
pub struct VertexPool {
    /// Deduplicated positions
    pub positions: Vec<Vec3>,
    /// Deduplicated normals, parallel to `positions`
    pub normals: Vec<Vec3>,
    /// Deduplicated texture coordinates, parallel to `positions`
    pub uvs: Vec<Vec2>,
    index: HashMap<VertexKey, u32>,
}

impl VertexPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a resolved corner, returning its stable output index.
    ///
    /// The first corner with a given rounded key appends the (exact,
    /// unrounded) attributes and claims the next sequential index;
    /// later attribute-identical corners reuse it.
    pub fn insert(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        let key = VertexKey::new(position, normal, uv);
        if let Some(&existing) = self.index.get(&key) {
            return existing;
        }
        let next = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        self.index.insert(key, next);
        next
    }

    /// Number of unique vertices in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
