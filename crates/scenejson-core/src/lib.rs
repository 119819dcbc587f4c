//! # scenejson-core - OBJ scene to renderer JSON conversion
//!
//! Converts Wavefront OBJ scene files (with companion MTL material
//! files) into a consolidated indexed-triangle JSON document for
//! direct consumption by a rendering pipeline.
//!
//! The pipeline is a strict one-way pass: file text → raw attribute
//! arrays and tagged faces → fan-triangulated face list → per-group
//! deduplicated vertex buffers → JSON array. Deduplication
//! canonicalizes each corner's (position, normal, uv) triple at
//! six-decimal precision and assigns compact sequential indices per
//! output group.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scenejson_core::{convert_scene, write_json, ConvertOptions, ObjParser};
//!
//! let scene = ObjParser::parse_file("scene.obj")?;
//! let entries = convert_scene(&scene, &ConvertOptions::as_is())?;
//! write_json("scene.json", &entries)?;
//! # Ok::<(), scenejson_core::SceneError>(())
//! ```
//!
//! Two conversion profiles are built in: [`ConvertOptions::as_is`]
//! trusts the file's coordinate system and groups output by object;
//! [`ConvertOptions::z_up_to_y_up`] remaps Z-up exports to Y-up,
//! groups by (material, object) pair, and flips UVs.

pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod material;
pub mod math;
pub mod obj;
pub mod output;

pub use convert::{convert_scene, AxisRemap, ConvertOptions, GroupBy, TextureRule, VertexPool};
pub use diagnostics::SceneStats;
pub use error::{Result, SceneError};
pub use material::{load_mtl, parse_mtl, Material, MaterialLibrary};
pub use obj::{Corner, Face, ObjParser, ObjScene, Triangle};
pub use output::{to_json_pretty, write_json, SceneEntry};
