//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::history::{MembershipChange, UndoEntry};
use crate::app::EngineState;

/// Schaltet die Mitgliedschaft aller übergebenen IDs um (Toggle-Regel).
///
/// Unbekannte und ausgeschlossene IDs werden übersprungen. Die Änderungen
/// kommen in Reihenfolge von `ids` zurück.
pub(super) fn toggle_members(state: &mut EngineState, ids: &[u64]) -> Vec<MembershipChange> {
    let mut changes = Vec::with_capacity(ids.len());
    for &id in ids {
        if !state.points.contains(id) || state.points.is_excluded(id) {
            continue;
        }
        let previous = state.selection.contains(id);
        state.selection.set_member(id, !previous);
        changes.push(MembershipChange {
            id,
            previous,
            new: !previous,
        });
    }
    changes
}

/// Legt die Änderungen als einen Undo-Eintrag ab (leere Listen nicht).
pub(super) fn record_changes(state: &mut EngineState, changes: Vec<MembershipChange>) {
    state.history.push(UndoEntry::from_changes(changes));
}
