//! OBJ file format support
//!
//! Wavefront OBJ is a line-oriented text format listing vertex
//! positions, normals, texture coordinates, and polygonal faces that
//! reference them by 1-based index. This module parses OBJ files into
//! raw attribute arrays plus tagged face records, and fan-triangulates
//! faces for the converter.

mod parser;

pub use parser::{Corner, Face, ObjParser, ObjScene, Triangle};
