use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trinket_assets::{EnvironmentMap, load_gltf_model};
use trinket_common::{MaterialParams, TweenSettings};
use trinket_orientation::{PRESET_COUNT, PresetOrientations};
use trinket_render::{DebugTextRenderer, RenderView, Renderer};
use trinket_scene::{ModelInfo, SceneState};

#[derive(Parser)]
#[command(name = "trinket-cli", about = "CLI tool for trinket viewer operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print viewer version and preset table info
    Info,
    /// Inspect a glTF model without opening a window
    Inspect {
        /// Path to the model
        model: PathBuf,
    },
    /// Inspect a Radiance HDR environment map
    Env {
        /// Path to the .hdr file
        path: PathBuf,
    },
    /// Simulate the orientation tween until it settles
    Converge {
        /// Slerp blend factor per frame
        #[arg(short, long, default_value = "0.02")]
        blend: f32,
        /// Settle threshold in radians
        #[arg(short, long, default_value = "0.22")]
        threshold: f32,
        /// Preset face to rotate toward
        #[arg(short, long, default_value = "0")]
        face: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("trinket-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("presets: {PRESET_COUNT} dodecahedron faces");
            let presets = PresetOrientations::new();
            for (i, q) in presets.iter().enumerate() {
                println!(
                    "  face {:>2}: ({:+.4}, {:+.4}, {:+.4}, {:+.4})",
                    i, q.x, q.y, q.z, q.w
                );
            }
        }
        Commands::Inspect { model } => {
            let (mesh, texture) = load_gltf_model(&model)?;
            let (min, max) = mesh.bounds();
            println!("Model: {}", model.display());
            println!("  vertices:  {}", mesh.vertex_count());
            println!("  triangles: {}", mesh.triangle_count());
            println!(
                "  bounds:    ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
                min.x, min.y, min.z, max.x, max.y, max.z
            );
            let c = mesh.centroid();
            println!("  centroid:  ({:.3}, {:.3}, {:.3})", c.x, c.y, c.z);
            println!("  face axes: {}", mesh.face_normals().len());
            println!("  texture:   {}x{}", texture.width, texture.height);
        }
        Commands::Env { path } => {
            let env = EnvironmentMap::load(&path)?;
            let avg = env.average_radiance();
            println!("Environment: {}", path.display());
            println!("  size:     {}x{}", env.width, env.height);
            println!(
                "  average:  ({:.4}, {:.4}, {:.4})",
                avg[0], avg[1], avg[2]
            );
        }
        Commands::Converge {
            blend,
            threshold,
            face,
        } => {
            anyhow::ensure!(face < PRESET_COUNT, "face must be below {PRESET_COUNT}");
            let mut scene = SceneState::new(
                MaterialParams::default(),
                TweenSettings {
                    blend,
                    settle_threshold: threshold,
                },
            );
            scene.attach_model(
                ModelInfo {
                    name: "simulation".into(),
                    vertex_count: 0,
                    triangle_count: 0,
                },
                Vec::new(),
                glam::Vec3::ZERO,
            );
            scene.snap_to_face(face);

            println!(
                "Converging toward face {face} (blend={blend}, threshold={threshold})"
            );
            let start_angle = scene.remaining_angle();
            let mut frames = 0u32;
            while scene.advance_frame() {
                frames += 1;
                anyhow::ensure!(frames < 100_000, "tween failed to settle");
            }
            println!(
                "Settled after {frames} frames ({start_angle:.4} rad -> {:.4} rad)",
                scene.remaining_angle()
            );
            println!();
            let renderer = DebugTextRenderer::new();
            print!("{}", renderer.render(&scene, &RenderView::default()));
        }
    }

    Ok(())
}
