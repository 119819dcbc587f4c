//! scenejson CLI - OBJ scene to renderer JSON converter
//!
//! One-shot batch tool: reads an OBJ scene (and any MTL file it
//! references), converts it, writes the JSON document, and prints a
//! summary of what it found. Runs to completion or exits with a
//! descriptive error.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use scenejson_core::{
    convert_scene, write_json, ConvertOptions, ObjParser, SceneStats, TextureRule,
};
use std::path::PathBuf;

/// Convert a Wavefront OBJ scene into renderer-ready JSON.
#[derive(Debug, Parser)]
#[command(name = "scenejson", version, about)]
struct Cli {
    /// Input OBJ file
    #[arg(default_value = "scene.obj")]
    input: PathBuf,

    /// Output JSON file
    #[arg(default_value = "scene.json")]
    output: PathBuf,

    /// Conversion profile
    #[arg(long, value_enum, default_value_t = Profile::AsIs)]
    profile: Profile,

    /// Keep MTL texture assignments instead of deriving
    /// `<object>.png` names from object names
    #[arg(long)]
    keep_textures: bool,
}

/// The two supported export pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Profile {
    /// Coordinates used as-is (export already matches the renderer);
    /// one output entry per object
    AsIs,
    /// Z-up export remapped to Y-up; one entry per material/object
    /// pair; UVs flipped
    ZUpToYUp,
}

impl Profile {
    fn options(self) -> ConvertOptions {
        match self {
            Self::AsIs => ConvertOptions::as_is(),
            Self::ZUpToYUp => ConvertOptions::z_up_to_y_up(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut options = cli.profile.options();
    if cli.keep_textures {
        options.texture_rule = TextureRule::Keep;
    }

    println!("Reading OBJ file: {}", cli.input.display().to_string().cyan());
    let scene = ObjParser::parse_file(&cli.input)
        .with_context(|| format!("failed to parse {}", cli.input.display()))?;

    for warning in &scene.warnings {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }
    println!(
        "Loaded: {} vertices, {} normals, {} UVs, {} faces, {} materials",
        scene.positions.len(),
        scene.normals.len(),
        scene.uvs.len(),
        scene.faces.len(),
        scene.materials.len()
    );

    let entries = convert_scene(&scene, &options)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;
    println!("Found {} output groups", entries.len().to_string().bold());

    for entry in &entries {
        let texture = entry.material.texture.as_deref().unwrap_or("none");
        if let Some(stats) = SceneStats::from_entry(entry) {
            let center = stats.center();
            println!(
                "  {} triangles, {} vertices (texture: {texture})",
                stats.triangle_count, stats.vertex_count
            );
            println!(
                "{}",
                format!(
                    "    bounds [{:.3}, {:.3}, {:.3}] to [{:.3}, {:.3}, {:.3}], center [{:.3}, {:.3}, {:.3}]",
                    stats.min[0], stats.min[1], stats.min[2],
                    stats.max[0], stats.max[1], stats.max[2],
                    center[0], center[1], center[2]
                )
                .dimmed()
            );
        }
    }

    if let Some(stats) = SceneStats::from_entries(&entries) {
        let center = stats.center();
        let avg = stats.average_normal_unit();
        println!(
            "{}",
            format!(
                "Scene bounds: [{:.3}, {:.3}, {:.3}] to [{:.3}, {:.3}, {:.3}]",
                stats.min[0], stats.min[1], stats.min[2], stats.max[0], stats.max[1], stats.max[2]
            )
            .dimmed()
        );
        println!(
            "{}",
            format!(
                "Center: [{:.3}, {:.3}, {:.3}], suggested camera distance: {:.3} (90° FOV)",
                center[0],
                center[1],
                center[2],
                stats.camera_distance()
            )
            .dimmed()
        );
        println!(
            "{}",
            format!(
                "Average vertex normal: [{:.3}, {:.3}, {:.3}]",
                avg[0], avg[1], avg[2]
            )
            .dimmed()
        );
    }

    write_json(&cli.output, &entries)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!("{} {}", "Wrote".green().bold(), cli.output.display());

    Ok(())
}
