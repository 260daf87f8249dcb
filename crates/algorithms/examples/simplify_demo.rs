//! Simplify demo: generalizing a synthetic coastline
//!
//! Generates a noisy closed "island" ring (a wobbly circle with small-scale
//! jitter) and a noisy open "river" polyline, then simplifies both at a
//! ladder of tolerances, printing vertex counts and area drift at each step.
//!
//! Run:
//!   cargo run -p simpligis-algorithms --example simplify_demo

use geo_types::{LineString, Polygon};
use simpligis_algorithms::simplify::{simplify_line, simplify_polygon};
use simpligis_core::measures::ring_signed_area;

fn build_island(vertices: usize) -> Polygon<f64> {
    let mut coords: Vec<(f64, f64)> = (0..vertices)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / vertices as f64;
            // Base circle, a few large lobes, and fine jitter
            let r = 1000.0 + 80.0 * (angle * 5.0).sin() + ((i * 13 + 7) % 11) as f64;
            (r * angle.cos(), r * angle.sin())
        })
        .collect();
    coords.push(coords[0]);
    Polygon::new(LineString::from(coords), vec![])
}

fn build_river(vertices: usize) -> LineString<f64> {
    let coords: Vec<(f64, f64)> = (0..vertices)
        .map(|i| {
            let x = i as f64 * 2.0;
            let y = 200.0 * (x * 0.004).sin() + 15.0 * (x * 0.09).sin() + ((i * 7) % 5) as f64;
            (x, y)
        })
        .collect();
    LineString::from(coords)
}

fn main() {
    let island = build_island(5000);
    let river = build_river(5000);

    let input_area = ring_signed_area(island.exterior());
    println!(
        "Island: {} vertices, area {:.0}",
        island.exterior().0.len(),
        input_area
    );
    println!("River: {} vertices", river.0.len());

    for tolerance in [1.0, 5.0, 20.0, 100.0] {
        let island_out = simplify_polygon(&island, tolerance);
        let river_out = simplify_line(&river, tolerance);

        let out_area = ring_signed_area(island_out.exterior());
        let drift = if input_area != 0.0 {
            100.0 * (out_area - input_area).abs() / input_area.abs()
        } else {
            0.0
        };
        println!(
            "tolerance {:>6.1}: island {} -> {} vertices (area drift {:.2}%), river {} -> {}",
            tolerance,
            island.exterior().0.len(),
            island_out.exterior().0.len(),
            drift,
            river.0.len(),
            river_out.0.len()
        );
    }
}
