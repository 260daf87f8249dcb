//! SimpliGis CLI - geometry generalization for GeoJSON files

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use geo::{CoordsIter, HasDimensions};
use geojson::{Feature, FeatureCollection, GeoJson};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use simpligis_algorithms::simplify::{simplify, simplify_with};
use simpligis_core::Euclidean;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "simpligis")]
#[command(author, version, about = "Geometry generalization toolkit", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a GeoJSON file
    Info {
        /// Input GeoJSON file
        input: PathBuf,
    },
    /// Simplify all geometries in a GeoJSON file
    Simplify {
        /// Input GeoJSON file
        input: PathBuf,
        /// Output GeoJSON file
        #[arg(short, long)]
        output: PathBuf,
        /// Maximum allowed deviation, in input coordinate units
        #[arg(short, long, default_value = "1.0")]
        tolerance: f64,
        /// Use true (non-squared) distances internally
        #[arg(long)]
        exact: bool,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn read_geojson(path: &PathBuf) -> Result<GeoJson> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    contents
        .parse::<GeoJson>()
        .with_context(|| format!("Failed to parse {} as GeoJSON", path.display()))
}

fn write_geojson(geojson: &GeoJson, path: &PathBuf) -> Result<()> {
    std::fs::write(path, geojson.to_string())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Normalize any GeoJSON top level into a feature collection.
fn to_feature_collection(geojson: GeoJson) -> FeatureCollection {
    match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        GeoJson::Feature(feature) => FeatureCollection {
            bbox: None,
            features: vec![feature],
            foreign_members: None,
        },
        GeoJson::Geometry(geometry) => FeatureCollection {
            bbox: None,
            features: vec![Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: None,
                foreign_members: None,
            }],
            foreign_members: None,
        },
    }
}

fn feature_geometry(feature: &Feature) -> Result<Option<geo_types::Geometry<f64>>> {
    match &feature.geometry {
        Some(geometry) => {
            let geom = geo_types::Geometry::<f64>::try_from(geometry)
                .context("Unsupported geometry in input")?;
            Ok(Some(geom))
        }
        None => Ok(None),
    }
}

fn vertex_count(geom: &geo_types::Geometry<f64>) -> usize {
    geom.coords_count()
}

fn progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} {msg}")
            .unwrap(),
    );
    pb
}

// ─── Commands ───────────────────────────────────────────────────────────

fn run_info(input: PathBuf) -> Result<()> {
    let fc = to_feature_collection(read_geojson(&input)?);

    let mut vertices = 0usize;
    let mut by_kind: std::collections::BTreeMap<&'static str, usize> = Default::default();
    for feature in &fc.features {
        if let Some(geom) = feature_geometry(feature)? {
            vertices += vertex_count(&geom);
            let kind = match geom {
                geo_types::Geometry::Point(_) => "Point",
                geo_types::Geometry::Line(_) => "Line",
                geo_types::Geometry::LineString(_) => "LineString",
                geo_types::Geometry::Polygon(_) => "Polygon",
                geo_types::Geometry::MultiPoint(_) => "MultiPoint",
                geo_types::Geometry::MultiLineString(_) => "MultiLineString",
                geo_types::Geometry::MultiPolygon(_) => "MultiPolygon",
                geo_types::Geometry::GeometryCollection(_) => "GeometryCollection",
                geo_types::Geometry::Rect(_) => "Rect",
                geo_types::Geometry::Triangle(_) => "Triangle",
            };
            *by_kind.entry(kind).or_insert(0) += 1;
        }
    }

    println!("File: {}", input.display());
    println!("Features: {}", fc.features.len());
    println!("Vertices: {}", vertices);
    println!("\nGeometry types:");
    for (kind, count) in by_kind {
        println!("  {}: {}", kind, count);
    }
    Ok(())
}

fn run_simplify(input: PathBuf, output: PathBuf, tolerance: f64, exact: bool) -> Result<()> {
    if !tolerance.is_finite() {
        bail!("tolerance must be a finite number, got {tolerance}");
    }

    let fc = to_feature_collection(read_geojson(&input)?);
    let feature_count = fc.features.len();
    info!("Input: {} features", feature_count);

    let pb = progress(feature_count as u64);
    let start = Instant::now();

    // Features are independent, so fan out across cores.
    let results: Vec<(Option<Feature>, usize, usize)> = fc
        .features
        .into_par_iter()
        .map(|mut feature| {
            let geom = match feature_geometry(&feature)? {
                Some(geom) => geom,
                None => {
                    pb.inc(1);
                    return Ok((Some(feature), 0, 0));
                }
            };
            let before = vertex_count(&geom);
            let simplified = if exact {
                simplify_with(&geom, tolerance, &Euclidean)
            } else {
                simplify(&geom, tolerance)
            };
            let after = vertex_count(&simplified);
            pb.inc(1);
            if simplified.is_empty() {
                // Geometry vanished at this tolerance; drop the feature.
                return Ok((None, before, after));
            }
            feature.geometry = Some(geojson::Geometry::new(geojson::Value::from(&simplified)));
            Ok((Some(feature), before, after))
        })
        .collect::<Result<_>>()?;
    pb.finish_and_clear();
    let elapsed = start.elapsed();

    let mut features = Vec::with_capacity(results.len());
    let mut vertices_before = 0usize;
    let mut vertices_after = 0usize;
    for (feature, before, after) in results {
        vertices_before += before;
        vertices_after += after;
        if let Some(feature) = feature {
            features.push(feature);
        }
    }

    let dropped = feature_count - features.len();
    info!(
        "Vertices: {} -> {} ({:.1}% kept)",
        vertices_before,
        vertices_after,
        if vertices_before > 0 {
            100.0 * vertices_after as f64 / vertices_before as f64
        } else {
            100.0
        }
    );
    if dropped > 0 {
        info!("Dropped {} feature(s) that simplified to empty", dropped);
    }

    let out = GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    });
    write_geojson(&out, &output)?;

    println!("Simplified GeoJSON saved to: {}", output.display());
    println!("  Processing time: {:.2?}", elapsed);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Info { input } => run_info(input),
        Commands::Simplify {
            input,
            output,
            tolerance,
            exact,
        } => run_simplify(input, output, tolerance, exact),
    }
}
