//! End-to-end conversion tests
//!
//! Exercise the full path: OBJ text on disk (with a sibling MTL file)
//! through parsing, conversion, and JSON serialization back into the
//! document model.

use scenejson_core::{
    convert_scene, to_json_pretty, write_json, ConvertOptions, ObjParser, SceneEntry, SceneStats,
    TextureRule,
};
use std::fs;

const MTL: &str = "newmtl steel\nKa 0.1 0.1 0.1\nKd 0.6 0.6 0.65\nKs 0.9 0.9 0.9\nNs 200\nmap_Kd steel.png\n";

const OBJ: &str = "mtllib scene.mtl\n\
o plate.001\nusemtl steel\n\
v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
vt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\n\
f 1/1 2/2 3/3 4/4\n\
o wedge\n\
v 0 0 1\nv 1 0 1\nv 0 1 1\n\
f 5 6 7\n";

fn write_fixture(dir: &std::path::Path) -> std::path::PathBuf {
    fs::write(dir.join("scene.mtl"), MTL).expect("write MTL fixture");
    let obj_path = dir.join("scene.obj");
    fs::write(&obj_path, OBJ).expect("write OBJ fixture");
    obj_path
}

#[test]
fn test_mtllib_resolved_relative_to_obj_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let obj_path = write_fixture(dir.path());

    let scene = ObjParser::parse_file(&obj_path).expect("parse OBJ");
    assert!(scene.warnings.is_empty());
    assert!(scene.materials.contains_key("steel"));
    assert!((scene.materials["steel"].n - 200.0).abs() < 1e-9);
}

#[test]
fn test_full_conversion_groups_and_materials() {
    let dir = tempfile::tempdir().expect("temp dir");
    let scene = ObjParser::parse_file(write_fixture(dir.path())).expect("parse OBJ");

    let mut options = ConvertOptions::as_is();
    options.texture_rule = TextureRule::Keep;
    let entries = convert_scene(&scene, &options).expect("convert");

    assert_eq!(entries.len(), 2);

    // Quad object: real material from the MTL table
    let plate = &entries[0];
    assert_eq!(plate.material.texture.as_deref(), Some("steel.png"));
    assert_eq!(plate.triangles.len(), 2);
    assert_eq!(plate.vertices.len(), 4);

    // Second object never saw a usemtl change, so it keeps "steel"
    let wedge = &entries[1];
    assert_eq!(wedge.triangles.len(), 1);
    assert_eq!(wedge.vertices.len(), 3);
}

#[test]
fn test_texture_override_uses_object_stem() {
    let dir = tempfile::tempdir().expect("temp dir");
    let scene = ObjParser::parse_file(write_fixture(dir.path())).expect("parse OBJ");
    let entries = convert_scene(&scene, &ConvertOptions::as_is()).expect("convert");
    // "plate.001" → "plate.png" regardless of the MTL assignment
    assert_eq!(entries[0].material.texture.as_deref(), Some("plate.png"));
    assert_eq!(entries[1].material.texture.as_deref(), Some("wedge.png"));
}

#[test]
fn test_json_file_round_trip_preserves_indexed_lookups() {
    let dir = tempfile::tempdir().expect("temp dir");
    let scene = ObjParser::parse_file(write_fixture(dir.path())).expect("parse OBJ");
    let entries = convert_scene(&scene, &ConvertOptions::as_is()).expect("convert");

    let json_path = dir.path().join("scene.json");
    write_json(&json_path, &entries).expect("write JSON");
    let back: Vec<SceneEntry> =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("read JSON"))
            .expect("re-parse JSON");
    assert_eq!(back, entries);

    // Every triangle index still resolves to the exact per-corner
    // attributes computed during conversion.
    for (entry, original) in back.iter().zip(&entries) {
        for tri in &entry.triangles {
            for &idx in tri {
                let idx = idx as usize;
                assert!(idx < entry.vertices.len());
                assert_eq!(entry.vertices[idx], original.vertices[idx]);
                assert_eq!(entry.normals[idx], original.normals[idx]);
                assert_eq!(entry.uvs[idx], original.uvs[idx]);
            }
        }
    }
}

#[test]
fn test_z_up_profile_remaps_and_flips() {
    let dir = tempfile::tempdir().expect("temp dir");
    let scene = ObjParser::parse_file(write_fixture(dir.path())).expect("parse OBJ");
    let entries = convert_scene(&scene, &ConvertOptions::z_up_to_y_up()).expect("convert");

    // v 0 1 0 → (0, 0, -1)
    assert!(entries[0]
        .vertices
        .iter()
        .any(|v| (v[2] - (-1.0)).abs() < 1e-12));
    // vt 1 1 → (0, 0) after the flip
    assert!(entries[0]
        .uvs
        .iter()
        .any(|uv| uv[0].abs() < 1e-12 && uv[1].abs() < 1e-12));
}

#[test]
fn test_stats_over_converted_scene() {
    let dir = tempfile::tempdir().expect("temp dir");
    let scene = ObjParser::parse_file(write_fixture(dir.path())).expect("parse OBJ");
    let entries = convert_scene(&scene, &ConvertOptions::as_is()).expect("convert");

    let stats = SceneStats::from_entries(&entries).expect("non-empty scene");
    assert_eq!(stats.vertex_count, 7);
    assert_eq!(stats.triangle_count, 3);
    assert!((stats.min[2] - 0.0).abs() < 1e-12);
    assert!((stats.max[2] - 1.0).abs() < 1e-12);
    assert!(stats.camera_distance() > 0.0);
}

#[test]
fn test_malformed_mtl_number_aborts_parse() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("bad.mtl"), "newmtl m\nKd 0.5 oops 0.5\n").expect("write MTL");
    let obj_path = dir.path().join("scene.obj");
    fs::write(&obj_path, "mtllib bad.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")
        .expect("write OBJ");

    // A present-but-malformed MTL file is fatal, unlike a missing one
    let err = ObjParser::parse_file(&obj_path).unwrap_err();
    assert!(matches!(
        err,
        scenejson_core::SceneError::Parse { line: 2, .. }
    ));
}

#[test]
fn test_missing_mtl_still_converts_with_fallback() {
    let dir = tempfile::tempdir().expect("temp dir");
    let obj_path = dir.path().join("lonely.obj");
    fs::write(
        &obj_path,
        "mtllib missing.mtl\nusemtl ghost\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
    )
    .expect("write OBJ");

    let scene = ObjParser::parse_file(&obj_path).expect("parse OBJ");
    assert_eq!(scene.warnings.len(), 1);

    let entries = convert_scene(&scene, &ConvertOptions::as_is()).expect("convert");
    // Unknown material "ghost" falls back to the default record
    assert!((entries[0].material.specular[0] - 0.3).abs() < 1e-9);
    let json = to_json_pretty(&entries).expect("serialize");
    assert!(json.contains("\"triangles\""));
}
