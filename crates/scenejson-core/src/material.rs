//! MTL material file parser
//!
//! Parses Wavefront MTL files (the material companion format for OBJ)
//! into a name → [`Material`] table. This is a simple line parser that
//! covers the commands a renderer cares about; everything else is
//! skipped silently, matching how exporters mix vendor extensions into
//! MTL files.

use crate::error::{Result, SceneError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Resolved material properties for one output group.
///
/// Serializes to the `material` field of the output JSON, so field
/// names here are the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Ambient reflectivity (`Ka`)
    pub ambient: [f64; 3],
    /// Diffuse reflectivity (`Kd`)
    pub diffuse: [f64; 3],
    /// Specular reflectivity (`Ks`)
    pub specular: [f64; 3],
    /// Specular (shininess) exponent (`Ns`)
    pub n: f64,
    /// Opacity: 1.0 opaque, 0.0 fully transparent (`d`, or `1 - Tr`)
    pub alpha: f64,
    /// Diffuse texture map path (`map_Kd` / `map_Ka` / `map_d`)
    pub texture: Option<String>,
}

impl Default for Material {
    /// Per-declaration defaults applied by `newmtl` before any
    /// property line is seen.
    fn default() -> Self {
        Self {
            ambient: [0.2, 0.2, 0.2],
            diffuse: [0.8, 0.8, 0.8],
            specular: [0.0, 0.0, 0.0],
            n: 1.0,
            alpha: 1.0,
            texture: None,
        }
    }
}

impl Material {
    /// Global fallback used when a face references a material name
    /// that no MTL file defined. Slightly shinier than the `newmtl`
    /// defaults so untextured geometry still reads as lit.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            specular: [0.3, 0.3, 0.3],
            n: 11.0,
            ..Self::default()
        }
    }
}

/// A parsed MTL file: the material table plus any non-fatal warnings
/// collected while loading it.
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    /// Materials by name
    pub materials: HashMap<String, Material>,
    /// Non-fatal problems (e.g. the file was missing)
    pub warnings: Vec<String>,
}

/// Load an MTL file from disk.
///
/// A missing file is not an error: conversion continues with an empty
/// table and a warning, since many OBJ exports reference MTL files
/// that were never shipped alongside them.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or if a
/// recognized property line carries a malformed numeric token.
pub fn load_mtl<P: AsRef<Path>>(path: P) -> Result<MaterialLibrary> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(MaterialLibrary {
            materials: HashMap::new(),
            warnings: vec![format!("material file not found: {}", path.display())],
        });
    }

    let content = std::fs::read_to_string(path)?;
    Ok(MaterialLibrary {
        materials: parse_mtl(&content)?,
        warnings: Vec::new(),
    })
}

/// Parse MTL content into a name → material table.
///
/// Blank lines and `#` comments are skipped, unrecognized commands are
/// ignored, and property lines that appear before any `newmtl` are
/// dropped. Repeated properties follow last-value-wins.
///
/// # Errors
///
/// Returns an error if a recognized property line carries a malformed
/// or missing numeric token, or if `newmtl` has no name.
pub fn parse_mtl(content: &str) -> Result<HashMap<String, Material>> {
    let mut materials: HashMap<String, Material> = HashMap::new();
    let mut current: Option<String> = None;

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        if command == "newmtl" {
            let name = args
                .first()
                .ok_or_else(|| SceneError::parse(line_no, "newmtl without a material name"))?;
            materials.insert((*name).to_string(), Material::default());
            current = Some((*name).to_string());
            continue;
        }

        // Property lines only apply inside a newmtl block.
        let Some(material) = current.as_ref().and_then(|name| materials.get_mut(name)) else {
            continue;
        };

        match command {
            "Ka" => material.ambient = parse_color(&args, line_no, "Ka")?,
            "Kd" => material.diffuse = parse_color(&args, line_no, "Kd")?,
            "Ks" => material.specular = parse_color(&args, line_no, "Ks")?,
            "Ns" => material.n = parse_scalar(&args, line_no, "Ns")?,
            "d" => material.alpha = parse_scalar(&args, line_no, "d")?,
            "Tr" => material.alpha = 1.0 - parse_scalar(&args, line_no, "Tr")?,
            "map_Kd" | "map_Ka" | "map_d" => {
                // Texture paths may contain spaces; take the rest of
                // the line verbatim (re-joined on single spaces).
                if !args.is_empty() {
                    material.texture = Some(args.join(" "));
                }
            }
            _ => {}
        }
    }

    Ok(materials)
}

/// Parse three float arguments of a color command.
fn parse_color(args: &[&str], line: usize, command: &str) -> Result<[f64; 3]> {
    if args.len() < 3 {
        return Err(SceneError::parse(
            line,
            format!("{command} expects 3 components, got {}", args.len()),
        ));
    }
    Ok([
        parse_float(args[0], line)?,
        parse_float(args[1], line)?,
        parse_float(args[2], line)?,
    ])
}

/// Parse the single float argument of a scalar command.
fn parse_scalar(args: &[&str], line: usize, command: &str) -> Result<f64> {
    let token = args
        .first()
        .ok_or_else(|| SceneError::parse(line, format!("{command} expects a value")))?;
    parse_float(token, line)
}

pub(crate) fn parse_float(token: &str, line: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| SceneError::parse(line, format!("invalid number '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_MATERIALS: &str = r"# exported materials
newmtl hull
Ka 0.1 0.1 0.1
Kd 0.5 0.6 0.7
Ks 1.0 1.0 1.0
Ns 96.078431
d 0.75
map_Kd textures/hull plating.png

newmtl glass
Tr 0.6
unknown_command 1 2 3
";

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_parse_two_materials() {
        let materials = parse_mtl(TWO_MATERIALS).unwrap();
        assert_eq!(materials.len(), 2);

        let hull = &materials["hull"];
        assert_eq!(hull.ambient, [0.1, 0.1, 0.1]);
        assert_eq!(hull.diffuse, [0.5, 0.6, 0.7]);
        assert_eq!(hull.specular, [1.0, 1.0, 1.0]);
        assert!((hull.n - 96.078_431).abs() < 1e-9);
        assert!((hull.alpha - 0.75).abs() < 1e-9);
        // Space in the path survives the rest-of-line join
        assert_eq!(hull.texture.as_deref(), Some("textures/hull plating.png"));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_defaults_and_tr_complement() {
        let materials = parse_mtl(TWO_MATERIALS).unwrap();
        let glass = &materials["glass"];
        // Untouched properties keep the newmtl defaults
        assert_eq!(glass.ambient, [0.2, 0.2, 0.2]);
        assert_eq!(glass.diffuse, [0.8, 0.8, 0.8]);
        assert_eq!(glass.specular, [0.0, 0.0, 0.0]);
        assert_eq!(glass.n, 1.0);
        assert_eq!(glass.texture, None);
        // Tr is the transparency complement of alpha
        assert!((glass.alpha - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_last_value_wins() {
        let materials = parse_mtl("newmtl m\nNs 5\nNs 50\n").unwrap();
        assert!((materials["m"].n - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_properties_before_newmtl_ignored() {
        let materials = parse_mtl("Kd 1 0 0\nnewmtl m\n").unwrap();
        assert!((materials["m"].diffuse[0] - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_number_is_fatal() {
        let err = parse_mtl("newmtl m\nKd 0.5 oops 0.5\n").unwrap_err();
        assert!(matches!(
            err,
            crate::SceneError::Parse { line: 2, .. }
        ));
    }

    #[test]
    fn test_missing_file_is_a_warning() {
        let library = load_mtl("/nonexistent/scene.mtl").unwrap();
        assert!(library.materials.is_empty());
        assert_eq!(library.warnings.len(), 1);
        assert!(library.warnings[0].contains("not found"));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_fallback_material() {
        let fallback = Material::fallback();
        assert_eq!(fallback.specular, [0.3, 0.3, 0.3]);
        assert_eq!(fallback.n, 11.0);
        assert_eq!(fallback.diffuse, [0.8, 0.8, 0.8]);
    }
}
