//! Arc probe: builds a few arcs and prints their query results.
//!
//! Usage:
//! ```text
//! cargo run --example probe
//! RUST_LOG=arcseg=debug cargo run --example probe
//! ```

use std::f64::consts::FRAC_PI_2;

use arcseg::{ArcsegError, Circle, CircleSegment, LineSegment, Point2};
use nalgebra::{Isometry2, Similarity2, Vector2};

fn main() -> Result<(), ArcsegError> {
    // Default: WARN for everything, INFO for arcseg.
    // Override with RUST_LOG env var (e.g. RUST_LOG=arcseg=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("probe=info".parse().unwrap_or_default())
        .add_directive("arcseg=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let circle = Circle::new(1.0, Point2::origin())?;
    let arc = CircleSegment::from_angles(&circle, 0.0, FRAC_PI_2, true)?;
    tracing::info!(length = arc.length(), "quarter arc");

    for p in arc.to_points(5)? {
        tracing::info!(x = p.x, y = p.y, "sample");
    }

    for query in [Point2::new(2.0, 0.0), Point2::new(0.0, -1.0), Point2::new(-1.0, 0.2)] {
        let closest = arc.closest_point(&query);
        tracing::info!(
            %query,
            %closest,
            dist_from_start = arc.dist_from_start(&query),
            "closest point"
        );
    }

    let chord = LineSegment::new(Point2::new(-2.0, 0.5), Point2::new(2.0, 0.5));
    for hit in arc.intersect(&chord) {
        tracing::info!(point = %hit.point, k = hit.k, "segment hit");
    }

    let moved = arc.try_transform(&Isometry2::new(Vector2::new(3.0, 1.0), FRAC_PI_2))?;
    tracing::info!(start = %moved.start_point(), end = %moved.end_point(), "rigidly moved");

    if let Err(err) = arc.try_transform(&Similarity2::from_scaling(2.0)) {
        tracing::warn!(%err, "scaling rejected");
    }

    Ok(())
}
