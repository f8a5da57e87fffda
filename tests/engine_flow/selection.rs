use approx::assert_relative_eq;
use glam::DVec2;
use map_point_select::app::MembershipChange;
use map_point_select::core::reproject;
use map_point_select::persistence::generate_default_points;
use map_point_select::{CoordinateFrame, EngineOptions, Geometry, MapPoint, PointStore, SelectionEngine};

use super::common::{ids, scenario_engine, LOCAL};

fn covering_rect() -> Geometry {
    Geometry::rectangle(LOCAL, DVec2::new(-1.0, -1.0), DVec2::new(10.0, 10.0))
}

#[test]
fn test_rect_selects_contained_points_and_undo_reverts() {
    let mut engine = scenario_engine();

    let outcome = engine.select_by_geometry(&covering_rect(), None);

    assert_eq!(outcome.selected, 2);
    assert_eq!(engine.current_selection(), &ids(&[0, 1]));
    assert_eq!(engine.undo_depth(), 1);
    let entry = engine.last_undo_entry().expect("Undo-Eintrag erwartet");
    assert_eq!(
        entry.changes,
        vec![
            MembershipChange {
                id: 0,
                previous: false,
                new: true
            },
            MembershipChange {
                id: 1,
                previous: false,
                new: true
            },
        ]
    );

    assert!(engine.undo());
    assert!(engine.current_selection().is_empty());
}

#[test]
fn test_rect_toggles_already_selected_points() {
    let mut engine = scenario_engine();
    engine.select_by_tap(1);

    let outcome = engine.select_by_geometry(&covering_rect(), None);

    assert_eq!(outcome.selected, 1);
    assert_eq!(outcome.deselected, 1);
    assert_eq!(engine.current_selection(), &ids(&[0]));
}

#[test]
fn test_same_shape_twice_restores_selection() {
    let mut engine = scenario_engine();
    engine.select_by_tap(2);
    let lasso = Geometry::polygon(
        LOCAL,
        vec![
            DVec2::new(-5.0, -5.0),
            DVec2::new(20.0, -5.0),
            DVec2::new(-5.0, 20.0),
        ],
    );

    engine.select_by_geometry(&lasso, None);
    assert_eq!(engine.current_selection(), &ids(&[0, 1, 2]));
    engine.select_by_geometry(&lasso, None);
    assert_eq!(engine.current_selection(), &ids(&[2]));
    assert_eq!(engine.undo_depth(), 3);
}

#[test]
fn test_shape_without_hits_pushes_nothing() {
    let mut engine = scenario_engine();
    let far = Geometry::ellipse(LOCAL, DVec2::new(500.0, 500.0), DVec2::new(3.0, 2.0));

    let outcome = engine.select_by_geometry(&far, None);

    assert_eq!(outcome.toggled(), 0);
    assert!(!engine.can_undo());
}

#[test]
fn test_rect_edge_is_inclusive() {
    let mut engine = scenario_engine();
    let edge = Geometry::rectangle(LOCAL, DVec2::new(5.0, 5.0), DVec2::new(50.0, 50.0));
    engine.select_by_geometry(&edge, None);
    assert_eq!(engine.current_selection(), &ids(&[1]));
}

#[test]
fn test_line_uses_default_corridor_or_explicit_distance() {
    let points = PointStore::from_points([
        MapPoint::new(0, DVec2::new(50.0, 15.0), LOCAL),
        MapPoint::new(1, DVec2::new(50.0, 25.0), LOCAL),
    ]);
    let mut engine = SelectionEngine::new(points, EngineOptions::default());
    let line = Geometry::polyline(LOCAL, vec![DVec2::new(0.0, 0.0), DVec2::new(100.0, 0.0)]);

    engine.select_by_geometry(&line, None);
    assert_eq!(engine.current_selection(), &ids(&[0]));

    engine.select_by_geometry(&line, Some(30.0));
    assert_eq!(engine.current_selection(), &ids(&[1]));
}

#[test]
fn test_geographic_line_default_corridor_stays_local() {
    let options = EngineOptions::default();
    let mut engine = SelectionEngine::new(generate_default_points(&options), options);
    let far_line = Geometry::polyline(
        CoordinateFrame::Wgs84,
        vec![DVec2::new(3.0, 56.06), DVec2::new(3.1, 56.06)],
    );

    let outcome = engine.select_by_geometry(&far_line, None);

    assert_eq!(outcome.toggled(), 0);
    assert!(engine.current_selection().is_empty());
    assert!(!engine.can_undo());
}

#[test]
fn test_geographic_line_selects_points_within_twenty_meters() {
    let points = PointStore::from_points([
        MapPoint::geographic(0, -2.7126, 56.0628),
        MapPoint::geographic(1, -2.7126, 56.0629),
        MapPoint::geographic(2, -2.7126, 56.0640),
    ]);
    let mut engine = SelectionEngine::new(points, EngineOptions::default());
    let line = Geometry::polyline(
        CoordinateFrame::Wgs84,
        vec![DVec2::new(-2.7136, 56.0628), DVec2::new(-2.7116, 56.0628)],
    );

    engine.select_by_geometry(&line, None);

    assert_eq!(engine.current_selection(), &ids(&[0, 1]));
}

#[test]
fn test_failed_buffer_is_no_op() {
    let mut engine = scenario_engine();
    engine.select_by_tap(0);

    let degenerate = Geometry::polyline(LOCAL, vec![DVec2::new(1.0, 1.0)]);
    let outcome = engine.select_by_geometry(&degenerate, Some(5.0));
    assert_eq!(outcome.toggled(), 0);

    let negative = Geometry::polyline(LOCAL, vec![DVec2::ZERO, DVec2::new(10.0, 0.0)]);
    engine.select_by_geometry(&negative, Some(-1.0));

    engine.select_by_geometry(&covering_rect(), Some(2.0));

    assert_eq!(engine.current_selection(), &ids(&[0]));
    assert_eq!(engine.undo_depth(), 1);
}

#[test]
fn test_wgs84_points_are_reprojected_into_mercator_shape() {
    let points = PointStore::from_points([
        MapPoint::geographic(0, 0.0005, 0.0005),
        MapPoint::geographic(1, 0.01, 0.01),
        MapPoint::new(2, DVec2::new(50.0, 50.0), CoordinateFrame::Local(7)),
    ]);
    let mut engine = SelectionEngine::new(points, EngineOptions::default());

    let projected = reproject(
        DVec2::new(0.0005, 0.0005),
        CoordinateFrame::Wgs84,
        CoordinateFrame::WebMercator,
    )
    .expect("Reprojektion erwartet");
    assert_relative_eq!(projected.x, 55.659_745, epsilon = 1e-3);

    let rect = Geometry::rectangle(
        CoordinateFrame::WebMercator,
        DVec2::ZERO,
        DVec2::splat(100.0),
    );
    let outcome = engine.select_by_geometry(&rect, None);

    assert_eq!(engine.current_selection(), &ids(&[0]));
    assert_eq!(outcome.skipped_unprojectable, 1);
}

#[test]
fn test_tap_toggles_and_ignores_unknown_ids() {
    let mut engine = scenario_engine();

    assert!(engine.select_by_tap(2));
    assert!(engine.is_selected(2));
    assert!(engine.select_by_tap(2));
    assert!(!engine.is_selected(2));
    assert!(!engine.select_by_tap(99));

    assert_eq!(engine.undo_depth(), 2);
}

#[test]
fn test_select_nearest_resolves_position() {
    let mut engine = scenario_engine();

    assert_eq!(engine.select_nearest(DVec2::new(4.0, 4.5), LOCAL, 2.0), Some(1));
    assert_eq!(engine.select_nearest(DVec2::new(50.0, 50.0), LOCAL, 2.0), None);
    assert_eq!(
        engine.select_nearest(DVec2::new(0.0, 0.0), CoordinateFrame::Local(3), 2.0),
        None
    );
    assert_eq!(engine.current_selection(), &ids(&[1]));
}
