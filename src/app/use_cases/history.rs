//! Use-Case: Undo der letzten Selektionsoperation.

use crate::app::EngineState;

/// Macht den jüngsten Eintrag rückgängig. Gibt `false` zurück, wenn der Verlauf leer ist.
///
/// Erst wird ein Ausschluss-Flag zurückgesetzt, dann jede Mitgliedschaft auf
/// ihren `previous`-Wert. Eine Wiederherstellung, die einen ausgeschlossenen
/// Punkt selektieren würde, entfällt.
pub fn undo(state: &mut EngineState) -> bool {
    let Some(entry) = state.history.pop() else {
        log::debug!("Undo: nichts zu tun");
        return false;
    };

    if let Some(exclusion) = entry.exclusion {
        state.points.set_excluded(exclusion.id, exclusion.previous);
    }

    for change in entry.changes.iter().rev() {
        if change.previous && state.points.is_excluded(change.id) {
            log::warn!(
                "Undo: Punkt {} ist ausgeschlossen und wird nicht reselektiert",
                change.id
            );
            continue;
        }
        state.selection.set_member(change.id, change.previous);
    }

    true
}
