//! Noisemap CLI - seed-reproducible height map generator.
//!
//! Generates deterministic 2D noise fields, quantizes them into a 16-bit
//! height grid, and writes the result as a grayscale PNG.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use noisemap::export::{export_png, PngExportOptions};
use noisemap::noise::{HeightSource, PerlinNoiseConfig, SmoothedRandomConfig};
use noisemap::terrain::HeightMap;

/// Seed-reproducible noise height map generator.
#[derive(Parser)]
#[command(name = "noisemap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a height map image.
    Generate {
        /// Image width in pixels.
        #[arg(short = 'W', long, default_value = "512")]
        width: u32,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value = "512")]
        height: u32,

        /// Depth of the height grid; cells are quantized into [0, max-depth - 1].
        #[arg(short, long, default_value = "65536")]
        max_depth: u32,

        /// Random seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Noise method.
        #[arg(long, default_value = "perlin")]
        method: NoiseMethod,

        /// Coordinate scale for the lattice noise (smaller = larger features).
        #[arg(long, default_value = "0.01")]
        frequency: f32,

        /// Output file path.
        #[arg(short, long, default_value = "terrain.png")]
        output: PathBuf,
    },

    /// Display buffer and file size information for a configuration.
    Info {
        /// Image width in pixels.
        #[arg(short = 'W', long, default_value = "512")]
        width: u32,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value = "512")]
        height: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum NoiseMethod {
    /// Lattice-gradient (Perlin) noise.
    Perlin,
    /// Seeded random draws smoothed with a sine transform.
    Smoothed,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            width,
            height,
            max_depth,
            seed,
            method,
            frequency,
            output,
        } => {
            run_generate(width, height, max_depth, seed, method, frequency, output);
        }
        Commands::Info { width, height } => {
            run_info(width, height);
        }
    }
}

fn run_generate(
    width: u32,
    height: u32,
    max_depth: u32,
    seed: Option<u64>,
    method: NoiseMethod,
    frequency: f32,
    output: PathBuf,
) {
    if frequency <= 0.0 {
        eprintln!("Error: Frequency must be positive");
        std::process::exit(1);
    }

    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    });

    println!("Noisemap - Height Map Generator");
    println!("===============================");
    println!("Dimensions: {}x{}", width, height);
    println!("Max depth: {}", max_depth);
    println!("Seed: {}", seed);
    println!("Output: {}", output.display());

    let start = Instant::now();

    let source: Box<dyn HeightSource> = match method {
        NoiseMethod::Perlin => {
            println!("Method: lattice-gradient (Perlin)");
            // Only the low 8 bits reach the permutation fold; seeds
            // congruent modulo 256 alias to the same field (see
            // `PerlinNoiseConfig::seed`).
            Box::new(PerlinNoiseConfig {
                frequency,
                seed: (seed % 256) as i32,
            })
        }
        NoiseMethod::Smoothed => {
            println!("Method: smoothed random");
            Box::new(SmoothedRandomConfig::with_seed(seed))
        }
    };

    println!("\nGenerating height map...");
    let map = HeightMap::generate(source.as_ref(), width, height, max_depth).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let gen_time = start.elapsed();
    println!("Generation completed in {:.2?}", gen_time);

    println!("Exporting PNG...");
    let export_start = Instant::now();
    export_png(&map, &output, &PngExportOptions::default()).unwrap_or_else(|e| {
        eprintln!("Error exporting PNG: {}", e);
        std::process::exit(1);
    });

    let export_time = export_start.elapsed();
    println!("Export completed in {:.2?}", export_time);
    println!("\nSaved height map as {}", output.display());
    println!("Total time: {:.2?}", start.elapsed());
}

fn run_info(width: u32, height: u32) {
    let pixels = (width as u64) * (height as u64);
    let bytes_grid = pixels * 2; // u16 cells
    let bytes_field = pixels * 4; // f32 working buffer

    println!("Noisemap - Configuration Info");
    println!("=============================");
    println!();
    println!("Dimensions: {}x{}", width, height);
    println!("Pixels:     {:>12}", pixels);
    println!();
    println!("Memory usage (in-memory):");
    println!(
        "  Noise field: {:>12} bytes ({:.2} MB)",
        bytes_field,
        bytes_field as f64 / 1024.0 / 1024.0
    );
    println!(
        "  Height grid: {:>12} bytes ({:.2} MB)",
        bytes_grid,
        bytes_grid as f64 / 1024.0 / 1024.0
    );
    println!();
    println!("Export sizes:");
    println!(
        "  PNG payload (16-bit, pre-compression): {:>12} bytes ({:.2} MB)",
        bytes_grid,
        bytes_grid as f64 / 1024.0 / 1024.0
    );
}
