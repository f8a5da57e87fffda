use glam::DVec2;
use map_point_select::{CoordinateFrame, EngineOptions, MapPoint, PointStore, SelectionEngine};
use std::collections::HashSet;

pub const LOCAL: CoordinateFrame = CoordinateFrame::Local(0);

/// Store aus den Ablauf-Szenarien: 0:(0,0), 1:(5,5), 2:(100,100).
pub fn scenario_engine() -> SelectionEngine {
    let points = PointStore::from_points([
        MapPoint::new(0, DVec2::new(0.0, 0.0), LOCAL),
        MapPoint::new(1, DVec2::new(5.0, 5.0), LOCAL),
        MapPoint::new(2, DVec2::new(100.0, 100.0), LOCAL),
    ]);
    SelectionEngine::new(points, EngineOptions::default())
}

pub fn ids(values: &[u64]) -> HashSet<u64> {
    values.iter().copied().collect()
}
