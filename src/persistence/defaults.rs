//! Erzeugung der Standard-Punktmenge.

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{MapPoint, PointStore};
use crate::shared::EngineOptions;

/// Mittelpunkt plus zufällig verteilte Punkte darum (WGS84).
///
/// Der Mittelpunkt hat ID 0 und heißt "Center Point", die übrigen heißen
/// "Point N" mit ID N. Gleicher Seed ergibt gleiche Punkte.
pub fn generate_default_points(options: &EngineOptions) -> PointStore {
    let center = DVec2::from_array(options.default_center);
    let jitter = options.default_jitter_deg.abs();
    let mut rng = StdRng::seed_from_u64(options.default_seed);

    let mut points = Vec::with_capacity(options.default_point_count);
    if options.default_point_count > 0 {
        points.push(MapPoint::geographic(0, center.x, center.y).with_name("Center Point"));
    }
    for i in 1..options.default_point_count {
        let offset = if jitter > 0.0 {
            DVec2::new(
                rng.gen_range(-jitter..=jitter),
                rng.gen_range(-jitter..=jitter),
            )
        } else {
            DVec2::ZERO
        };
        let position = center + offset;
        points.push(
            MapPoint::geographic(i as u64, position.x, position.y).with_name(format!("Point {i}")),
        );
    }

    log::info!("{} Standard-Punkte erzeugt", points.len());
    PointStore::from_points(points)
}
