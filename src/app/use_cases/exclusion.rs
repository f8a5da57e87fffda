//! Use-Case: CGI-Ausschluss von Punkten.

use crate::app::history::{ExclusionChange, MembershipChange, UndoEntry};
use crate::app::EngineState;

/// Setzt oder löscht das Ausschluss-Flag eines Punkts.
///
/// Wird ein selektierter Punkt ausgeschlossen, fällt er sofort aus der
/// Selektion. Flag und Abwahl landen gemeinsam in einem Undo-Eintrag.
/// Gibt `true` zurück, wenn sich das Flag geändert hat.
pub fn set_excluded(state: &mut EngineState, point_id: u64, excluded: bool) -> bool {
    let Some(previous) = state.points.set_excluded(point_id, excluded) else {
        log::debug!("Ausschluss für unbekannten Punkt {} ignoriert", point_id);
        return false;
    };
    if previous == excluded {
        return false;
    }

    let mut changes = Vec::new();
    if excluded && state.selection.set_member(point_id, false) {
        changes.push(MembershipChange {
            id: point_id,
            previous: true,
            new: false,
        });
    }

    state.history.push(UndoEntry {
        changes,
        exclusion: Some(ExclusionChange {
            id: point_id,
            previous,
            new: excluded,
        }),
    });
    true
}
