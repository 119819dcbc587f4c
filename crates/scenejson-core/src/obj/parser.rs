//! OBJ file parser
//!
//! Streams the file line by line, classifying each line into an
//! [`ObjCommand`] and dispatching to a handler. Parser state (the
//! material and object active at face-declaration time) lives in an
//! explicit [`ParserState`] value, so parsing is reentrant.
//!
//! All indices are 1-based in the source text and converted to 0-based
//! on ingestion.

use crate::error::{Result, SceneError};
use crate::material::{self, Material};
use crate::math::{Vec2, Vec3};
use std::collections::HashMap;
use std::path::Path;

/// One face corner: a mandatory position index plus optional texture
/// coordinate and normal indices. All 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    /// Index into the scene's position array
    pub position: usize,
    /// Index into the scene's uv array, if the corner declared one
    pub uv: Option<usize>,
    /// Index into the scene's normal array, if the corner declared one
    pub normal: Option<usize>,
}

/// A polygonal face (≥3 corners) tagged with the material and object
/// names that were active when it was declared.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Corners in declaration order
    pub corners: Vec<Corner>,
    /// Active `usemtl` name, if any
    pub material: Option<String>,
    /// Active `o` name, if any
    pub object: Option<String>,
}

/// A face reduced to exactly three corners, carrying the same tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// The three corners
    pub corners: [Corner; 3],
    /// Active `usemtl` name, if any
    pub material: Option<String>,
    /// Active `o` name, if any
    pub object: Option<String>,
}

impl Face {
    /// Fan-triangulate this face.
    ///
    /// Three-corner faces pass through as a single triangle. Larger
    /// polygons fan from corner 0: triangle i uses corners
    /// {0, i, i+1}, so an n-gon yields n−2 triangles. This assumes
    /// convex planar polygons, which is what OBJ exporters emit; no
    /// ear clipping is attempted.
    #[must_use]
    pub fn triangulate(&self) -> Vec<Triangle> {
        let mut triangles = Vec::with_capacity(self.corners.len().saturating_sub(2));
        for i in 1..self.corners.len().saturating_sub(1) {
            triangles.push(Triangle {
                corners: [self.corners[0], self.corners[i], self.corners[i + 1]],
                material: self.material.clone(),
                object: self.object.clone(),
            });
        }
        triangles
    }
}

/// Everything parsed from one OBJ file, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ObjScene {
    /// Raw vertex positions (`v`)
    pub positions: Vec<Vec3>,
    /// Raw vertex normals (`vn`), not yet normalized
    pub normals: Vec<Vec3>,
    /// Raw texture coordinates (`vt`)
    pub uvs: Vec<Vec2>,
    /// Faces with material/object tags
    pub faces: Vec<Face>,
    /// Material table from `mtllib` references
    pub materials: HashMap<String, Material>,
    /// Non-fatal problems (e.g. a missing MTL file)
    pub warnings: Vec<String>,
}

/// The fixed set of line commands the parser understands. Everything
/// else (groups, smoothing, parameter vertices, comments from tools)
/// is classified as `Other` and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjCommand {
    /// `o <name>`
    Object,
    /// `mtllib <relpath>`
    MaterialLibrary,
    /// `usemtl <name>`
    UseMaterial,
    /// `v x y z`
    Position,
    /// `vn x y z`
    Normal,
    /// `vt u v`
    TexCoord,
    /// `f <corner> ...`
    Face,
    /// Unrecognized command, ignored
    Other,
}

impl ObjCommand {
    fn classify(token: &str) -> Self {
        match token {
            "o" => Self::Object,
            "mtllib" => Self::MaterialLibrary,
            "usemtl" => Self::UseMaterial,
            "v" => Self::Position,
            "vn" => Self::Normal,
            "vt" => Self::TexCoord,
            "f" => Self::Face,
            _ => Self::Other,
        }
    }
}

/// OBJ parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjParser;

impl ObjParser {
    /// Parse an OBJ file from disk.
    ///
    /// `mtllib` references are resolved relative to the OBJ file's
    /// directory; a missing MTL file becomes a warning on the returned
    /// scene, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or on malformed
    /// geometry lines (non-numeric coordinates, bad face indices,
    /// faces with fewer than three corners).
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ObjScene> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse_str(&content, base_dir)
    }

    /// Parse OBJ content from a string.
    ///
    /// `base_dir` is the directory against which `mtllib` paths are
    /// resolved.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ObjParser::parse_file`], minus the initial
    /// file read.
    pub fn parse_str(content: &str, base_dir: &Path) -> Result<ObjScene> {
        let mut state = ParserState::default();
        for (idx, line) in content.lines().enumerate() {
            state.handle_line(idx + 1, line, base_dir)?;
        }
        Ok(state.scene)
    }
}

/// Running parser context: the scene being accumulated plus the
/// material/object names that tag subsequently declared faces.
#[derive(Debug, Default)]
struct ParserState {
    scene: ObjScene,
    current_material: Option<String>,
    current_object: Option<String>,
}

impl ParserState {
    fn handle_line(&mut self, line_no: usize, raw_line: &str, base_dir: &Path) -> Result<()> {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(());
        };
        let args: Vec<&str> = tokens.collect();

        match ObjCommand::classify(command) {
            ObjCommand::Object => {
                self.current_object = args.first().map(|name| (*name).to_string());
            }
            ObjCommand::MaterialLibrary => self.handle_mtllib(&args, base_dir)?,
            ObjCommand::UseMaterial => {
                let name = args
                    .first()
                    .ok_or_else(|| SceneError::parse(line_no, "usemtl without a material name"))?;
                self.current_material = Some((*name).to_string());
            }
            ObjCommand::Position => {
                let v = parse_components::<3>(&args, line_no, "v")?;
                self.scene.positions.push(v);
            }
            ObjCommand::Normal => {
                let v = parse_components::<3>(&args, line_no, "vn")?;
                self.scene.normals.push(v);
            }
            ObjCommand::TexCoord => {
                let v = parse_components::<2>(&args, line_no, "vt")?;
                self.scene.uvs.push(v);
            }
            ObjCommand::Face => self.handle_face(&args, line_no)?,
            ObjCommand::Other => {}
        }
        Ok(())
    }

    fn handle_mtllib(&mut self, args: &[&str], base_dir: &Path) -> Result<()> {
        if args.is_empty() {
            self.scene
                .warnings
                .push("mtllib without a file name".to_string());
            return Ok(());
        }
        // MTL file names may contain spaces. A missing file is a
        // warning (load_mtl handles that), but a malformed MTL file
        // aborts the conversion.
        let mtl_path = base_dir.join(args.join(" "));
        let library = material::load_mtl(&mtl_path)?;
        self.scene.materials.extend(library.materials);
        self.scene.warnings.extend(library.warnings);
        Ok(())
    }

    fn handle_face(&mut self, args: &[&str], line_no: usize) -> Result<()> {
        if args.len() < 3 {
            return Err(SceneError::parse(
                line_no,
                format!("face with {} corners, need at least 3", args.len()),
            ));
        }
        let corners = args
            .iter()
            .map(|token| parse_corner(token, line_no))
            .collect::<Result<Vec<Corner>>>()?;
        self.scene.faces.push(Face {
            corners,
            material: self.current_material.clone(),
            object: self.current_object.clone(),
        });
        Ok(())
    }
}

/// Parse exactly N float components from the argument list.
fn parse_components<const N: usize>(args: &[&str], line: usize, command: &str) -> Result<[f64; N]> {
    if args.len() < N {
        return Err(SceneError::parse(
            line,
            format!("{command} expects {N} components, got {}", args.len()),
        ));
    }
    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(args) {
        *slot = material::parse_float(token, line)?;
    }
    Ok(out)
}

/// Parse one face corner token: `v`, `v/vt`, `v/vt/vn`, or `v//vn`.
/// The position index is mandatory; uv and normal indices are
/// independently optional.
fn parse_corner(token: &str, line: usize) -> Result<Corner> {
    let mut parts = token.split('/');
    let position = match parts.next() {
        Some(text) if !text.is_empty() => parse_index(text, line)?,
        _ => {
            return Err(SceneError::parse(
                line,
                format!("face corner '{token}' is missing its position index"),
            ))
        }
    };
    let uv = parse_optional_index(parts.next(), line)?;
    let normal = parse_optional_index(parts.next(), line)?;
    Ok(Corner {
        position,
        uv,
        normal,
    })
}

fn parse_optional_index(part: Option<&str>, line: usize) -> Result<Option<usize>> {
    match part {
        Some(text) if !text.is_empty() => Ok(Some(parse_index(text, line)?)),
        _ => Ok(None),
    }
}

/// Parse a 1-based source index into a 0-based one.
fn parse_index(token: &str, line: usize) -> Result<usize> {
    let value: usize = token
        .parse()
        .map_err(|_| SceneError::parse(line, format!("invalid index '{token}'")))?;
    if value == 0 {
        return Err(SceneError::parse(line, "indices are 1-based, got 0"));
    }
    Ok(value - 1)
}
