use crate::app::history::UndoStack;
use crate::core::PointStore;
use crate::shared::EngineOptions;

use super::SelectionState;

/// Gesamter veränderlicher Zustand einer Selektions-Sitzung
#[derive(Debug, Clone)]
pub struct EngineState {
    /// Feste Menge selektierbarer Punkte
    pub points: PointStore,
    /// Aktuelle Selektion (disjunkt zu den ausgeschlossenen Punkten)
    pub selection: SelectionState,
    /// Undo-Verlauf (exakte vorher/nachher-Zustände)
    pub history: UndoStack,
    /// Laufzeit-Optionen (Pufferabstand, Undo-Tiefe, …)
    pub options: EngineOptions,
}

impl EngineState {
    /// Erstellt einen Zustand über den gegebenen Punkten ohne Selektion.
    pub fn new(points: PointStore, options: EngineOptions) -> Self {
        Self {
            points,
            selection: SelectionState::new(),
            history: UndoStack::new_with_capacity(options.effective_history_depth()),
            options,
        }
    }

    /// Prüft die Invariante: keine ausgeschlossene ID ist selektiert.
    pub fn selection_respects_exclusions(&self) -> bool {
        self.points
            .excluded_ids()
            .all(|id| !self.selection.contains(id))
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new(PointStore::new(), EngineOptions::default())
    }
}
