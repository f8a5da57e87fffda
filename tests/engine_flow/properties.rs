//! Eigenschaften über zufällige Operationsfolgen.

use glam::DVec2;
use map_point_select::{EngineOptions, Geometry, MapPoint, PointStore, SelectionEngine};
use proptest::prelude::*;
use std::collections::HashSet;

use super::common::LOCAL;

#[derive(Debug, Clone)]
enum Op {
    Tap(u64),
    Rect(DVec2, DVec2),
    Lasso(DVec2, DVec2, DVec2),
    Line(DVec2, DVec2, Option<f64>),
    Exclude(u64, bool),
    SelectAll,
    ClearAll,
    Undo,
}

/// 4x3-Raster mit 10 Einheiten Abstand, IDs 0..12.
fn grid_engine() -> SelectionEngine {
    let points = PointStore::from_points((0..12u64).map(|id| {
        MapPoint::new(
            id,
            DVec2::new((id % 4) as f64 * 10.0, (id / 4) as f64 * 10.0),
            LOCAL,
        )
    }));
    SelectionEngine::new(points, EngineOptions::default())
}

fn vertex() -> impl Strategy<Value = DVec2> {
    (-5.0f64..40.0, -5.0f64..30.0).prop_map(|(x, y)| DVec2::new(x, y))
}

/// IDs schließen zwei unbekannte Punkte ein.
fn point_id() -> impl Strategy<Value = u64> {
    0u64..14
}

fn recorded_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => point_id().prop_map(Op::Tap),
        2 => (vertex(), vertex()).prop_map(|(a, b)| Op::Rect(a, b)),
        1 => (vertex(), vertex(), vertex()).prop_map(|(a, b, c)| Op::Lasso(a, b, c)),
        1 => (vertex(), vertex(), proptest::option::of(0.5f64..8.0))
            .prop_map(|(a, b, width)| Op::Line(a, b, width)),
        2 => (point_id(), any::<bool>()).prop_map(|(id, excluded)| Op::Exclude(id, excluded)),
    ]
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        9 => recorded_op(),
        1 => Just(Op::SelectAll),
        1 => Just(Op::ClearAll),
        2 => Just(Op::Undo),
    ]
}

fn apply(engine: &mut SelectionEngine, op: &Op) {
    match op {
        Op::Tap(id) => {
            engine.select_by_tap(*id);
        }
        Op::Rect(a, b) => {
            engine.select_by_geometry(&Geometry::rectangle(LOCAL, *a, *b), None);
        }
        Op::Lasso(a, b, c) => {
            engine.select_by_geometry(&Geometry::polygon(LOCAL, vec![*a, *b, *c]), None);
        }
        Op::Line(a, b, width) => {
            engine.select_by_geometry(&Geometry::polyline(LOCAL, vec![*a, *b]), *width);
        }
        Op::Exclude(id, excluded) => {
            engine.set_excluded(*id, *excluded);
        }
        Op::SelectAll => engine.select_all(),
        Op::ClearAll => engine.clear_all(),
        Op::Undo => {
            engine.undo();
        }
    }
}

/// Selektion plus ausgeschlossene IDs.
fn snapshot(engine: &SelectionEngine) -> (HashSet<u64>, Vec<u64>) {
    (
        engine.current_selection().clone(),
        engine.points().excluded_ids().collect(),
    )
}

proptest! {
    #[test]
    fn excluded_points_are_never_selected(ops in prop::collection::vec(any_op(), 1..60)) {
        let mut engine = grid_engine();
        for op in &ops {
            apply(&mut engine, op);
            prop_assert!(engine.state().selection_respects_exclusions(), "nach {:?}", op);
        }
    }

    #[test]
    fn recorded_operation_is_undone_exactly(
        prefix in prop::collection::vec(any_op(), 0..30),
        op in recorded_op(),
    ) {
        let mut engine = grid_engine();
        for step in &prefix {
            apply(&mut engine, step);
        }
        let before = snapshot(&engine);
        let depth = engine.undo_depth();

        apply(&mut engine, &op);

        if engine.undo_depth() > depth {
            prop_assert!(engine.undo());
            prop_assert_eq!(engine.undo_depth(), depth);
        }
        prop_assert_eq!(snapshot(&engine), before);
    }

    #[test]
    fn undoing_every_entry_restores_start(ops in prop::collection::vec(recorded_op(), 1..40)) {
        let mut engine = grid_engine();
        let start = snapshot(&engine);
        for op in &ops {
            apply(&mut engine, op);
        }

        while engine.undo() {}

        prop_assert_eq!(snapshot(&engine), start);
    }

    #[test]
    fn same_shape_twice_is_identity(a in vertex(), b in vertex(), selected in prop::collection::vec(point_id(), 0..8)) {
        let mut engine = grid_engine();
        for id in selected {
            engine.select_by_tap(id);
        }
        let before = snapshot(&engine);
        let rect = Geometry::rectangle(LOCAL, a, b);

        engine.select_by_geometry(&rect, None);
        engine.select_by_geometry(&rect, None);

        prop_assert_eq!(snapshot(&engine), before);
    }
}
