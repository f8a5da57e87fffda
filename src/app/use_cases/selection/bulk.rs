//! Use-Case: Alles selektieren / Selektion aufheben.
//!
//! Beide Operationen sind Reset-Grenzen: sie verwerfen den Undo-Verlauf und
//! sind selbst nicht rückgängig zu machen.

use crate::app::EngineState;

/// Selektiert alle nicht ausgeschlossenen Punkte und leert den Verlauf.
pub fn select_all(state: &mut EngineState) -> usize {
    let ids = state
        .points
        .all_points()
        .filter(|p| !p.excluded)
        .map(|p| p.id)
        .collect();
    state.selection.replace(ids);
    state.history.clear();
    state.selection.len()
}

/// Hebt die gesamte Selektion auf und leert den Verlauf.
pub fn clear_all(state: &mut EngineState) {
    state.selection.replace(Default::default());
    state.history.clear();
}
