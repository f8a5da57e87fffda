use glam::DVec2;
use map_point_select::app::ExclusionChange;
use map_point_select::{EngineOptions, Geometry, MapPoint, PointStore, SelectionEngine};

use super::common::{ids, scenario_engine, LOCAL};

#[test]
fn test_select_all_skips_excluded_and_clears_history() {
    let mut engine = scenario_engine();
    engine.set_excluded(2, true);
    engine.select_by_tap(0);

    engine.select_all();

    assert_eq!(engine.current_selection(), &ids(&[0, 1]));
    assert!(!engine.can_undo());
    assert!(!engine.undo());
}

#[test]
fn test_excluding_selected_point_deselects_it() {
    let mut engine = scenario_engine();
    engine.select_by_tap(0);

    assert!(engine.set_excluded(0, true));

    assert!(engine.current_selection().is_empty());
    assert!(engine.is_excluded(0));
    assert_eq!(
        engine.last_undo_entry().and_then(|e| e.exclusion),
        Some(ExclusionChange {
            id: 0,
            previous: false,
            new: true
        })
    );
}

#[test]
fn test_excluded_points_are_ignored_by_every_selection() {
    let mut engine = scenario_engine();
    engine.set_excluded(1, true);
    let everything = Geometry::rectangle(LOCAL, DVec2::splat(-1000.0), DVec2::splat(1000.0));

    engine.select_by_geometry(&everything, None);
    assert!(!engine.select_by_tap(1));
    assert_eq!(engine.select_nearest(DVec2::new(5.0, 5.0), LOCAL, 1.0), None);

    assert_eq!(engine.current_selection(), &ids(&[0, 2]));
    assert!(engine.state().selection_respects_exclusions());
}

#[test]
fn test_undo_restores_exclusion_and_selection_together() {
    let mut engine = scenario_engine();
    engine.select_by_tap(0);
    engine.set_excluded(0, true);

    assert!(engine.undo());

    assert!(!engine.is_excluded(0));
    assert_eq!(engine.current_selection(), &ids(&[0]));
    assert_eq!(engine.undo_depth(), 1);
}

#[test]
fn test_undo_across_exclusion_keeps_invariant() {
    let mut engine = scenario_engine();
    engine.select_by_tap(0);
    engine.select_all();
    engine.set_excluded(1, true);
    engine.select_by_tap(0);

    // Eintrag für tap(0) zurücknehmen: 0 wird wieder selektiert
    assert!(engine.undo());
    assert!(engine.is_selected(0));

    // Ausschluss zurücknehmen: 1 wieder selektiert und zugelassen
    assert!(engine.undo());
    assert!(engine.is_selected(1));
    assert!(!engine.is_excluded(1));
    assert!(!engine.can_undo());
    assert!(engine.state().selection_respects_exclusions());
}

#[test]
fn test_clear_all_keeps_flags() {
    let mut engine = scenario_engine();
    engine.set_excluded(2, true);
    engine.select_all();

    engine.clear_all();

    assert!(engine.current_selection().is_empty());
    assert!(engine.is_excluded(2));
    assert!(!engine.can_undo());
}

#[test]
fn test_history_depth_drops_oldest_entries() {
    let points = PointStore::from_points(
        (0..5).map(|i| MapPoint::new(i, DVec2::new(i as f64, 0.0), LOCAL)),
    );
    let options = EngineOptions {
        history_depth: 3,
        ..EngineOptions::default()
    };
    let mut engine = SelectionEngine::new(points, options);

    for id in 0..5 {
        engine.select_by_tap(id);
    }
    assert_eq!(engine.undo_depth(), 3);

    while engine.undo() {}
    assert_eq!(engine.current_selection(), &ids(&[0, 1]));
}

#[test]
fn test_sequence_undoes_exactly_in_reverse() {
    let mut engine = scenario_engine();
    let rect = Geometry::rectangle(LOCAL, DVec2::splat(-1.0), DVec2::splat(10.0));
    let mut snapshots = vec![engine.current_selection().clone()];

    engine.select_by_tap(1);
    snapshots.push(engine.current_selection().clone());
    engine.select_by_geometry(&rect, None);
    snapshots.push(engine.current_selection().clone());
    engine.select_by_tap(2);
    snapshots.push(engine.current_selection().clone());

    snapshots.pop();
    while let Some(expected) = snapshots.pop() {
        assert!(engine.undo());
        assert_eq!(engine.current_selection(), &expected);
    }
    assert!(!engine.can_undo());
}
