use std::collections::HashSet;
use std::sync::Arc;

/// Auswahlbezogener Engine-Zustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Menge der aktuell selektierten Punkt-IDs (Arc für O(1)-Clone beim Auslesen)
    selected_ids: Arc<HashSet<u64>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_ids: Arc::new(HashSet::new()),
        }
    }

    /// Read-only Sicht auf die selektierten IDs.
    pub fn ids(&self) -> &HashSet<u64> {
        &self.selected_ids
    }

    /// Geteilte Referenz für Anzeige-Snapshots (O(1)).
    pub fn shared_ids(&self) -> Arc<HashSet<u64>> {
        Arc::clone(&self.selected_ids)
    }

    /// Gibt eine mutable Referenz auf die HashSet zurück (CoW: klont nur wenn nötig).
    #[inline]
    pub(crate) fn ids_mut(&mut self) -> &mut HashSet<u64> {
        Arc::make_mut(&mut self.selected_ids)
    }

    /// Prüft ob eine ID selektiert ist.
    pub fn contains(&self, id: u64) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Setzt die Mitgliedschaft einer ID. Gibt `true` zurück, wenn sich etwas geändert hat.
    pub(crate) fn set_member(&mut self, id: u64, member: bool) -> bool {
        if self.contains(id) == member {
            return false;
        }
        if member {
            self.ids_mut().insert(id)
        } else {
            self.ids_mut().remove(&id)
        }
    }

    /// Ersetzt die gesamte Selektion.
    pub(crate) fn replace(&mut self, ids: HashSet<u64>) {
        self.selected_ids = Arc::new(ids);
    }

    /// Anzahl selektierter IDs.
    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }
}
