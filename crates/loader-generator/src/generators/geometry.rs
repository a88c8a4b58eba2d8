//! WKT geometry generator.

use crate::config::GeometryShape;
use loader_core::GeneratedValue;
use rand::Rng;
use std::f64::consts::PI;

/// Generate a random geometry in WKT form.
pub fn generate_geometry<R: Rng>(rng: &mut R, shape: GeometryShape) -> GeneratedValue {
    let wkt = match shape {
        GeometryShape::Point => {
            let (x, y) = random_coordinate(rng);
            format!("POINT({x:.6} {y:.6})")
        }
        GeometryShape::LineString => {
            let points = rng.random_range(2..=4);
            let coords: Vec<String> = (0..points)
                .map(|_| {
                    let (x, y) = random_coordinate(rng);
                    format!("{x:.6} {y:.6}")
                })
                .collect();
            format!("LINESTRING({})", coords.join(", "))
        }
        GeometryShape::Polygon => format!("POLYGON(({}))", polygon_ring(rng).join(", ")),
    };
    GeneratedValue::String(wkt)
}

/// Longitude in [-180, 180], latitude in [-90, 90].
fn random_coordinate<R: Rng>(rng: &mut R) -> (f64, f64) {
    let x = rng.random::<f64>() * 360.0 - 180.0;
    let y = rng.random::<f64>() * 180.0 - 90.0;
    (x, y)
}

/// A closed ring of 4 to 6 points around a random centre.
fn polygon_ring<R: Rng>(rng: &mut R) -> Vec<String> {
    let points = rng.random_range(4..=6);
    let (center_x, center_y) = random_coordinate(rng);
    let radius = rng.random::<f64>() * 10.0;

    let mut ring: Vec<String> = (0..points - 1)
        .map(|i| {
            let angle = 2.0 * i as f64 * PI / (points - 1) as f64;
            let jitter_x = rng.random_range(5..15i32) as f64 * 0.1;
            let jitter_y = rng.random_range(5..15i32) as f64 * 0.1;
            let x = center_x + radius * 0.5 * jitter_x * angle.cos();
            let y = center_y + radius * 0.5 * jitter_y * angle.sin();
            format!("{x:.6} {y:.6}")
        })
        .collect();

    // Last point repeats the first to close the ring
    let first = ring[0].clone();
    ring.push(first);
    ring
}
