//! Undo-Verlauf der Selektions-Engine.
//!
//! Jeder Eintrag hält die exakten vorher/nachher-Zustände, die eine Operation
//! verursacht hat. Undo setzt nur auf `previous` zurück und ist damit auch
//! dann exakt, wenn ein Punkt vorher schon selektiert war.

/// Mitgliedschaftsänderung eines Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipChange {
    pub id: u64,
    pub previous: bool,
    pub new: bool,
}

/// Änderung des CGI-Ausschluss-Flags eines Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionChange {
    pub id: u64,
    pub previous: bool,
    pub new: bool,
}

/// Alle Änderungen genau einer Engine-Operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoEntry {
    /// Mitgliedschaftsänderungen in PointStore-Reihenfolge
    pub changes: Vec<MembershipChange>,
    /// Flag-Änderung, falls die Operation ein Ausschluss war
    pub exclusion: Option<ExclusionChange>,
}

impl UndoEntry {
    /// Eintrag aus reinen Mitgliedschaftsänderungen.
    pub fn from_changes(changes: Vec<MembershipChange>) -> Self {
        Self {
            changes,
            exclusion: None,
        }
    }

    /// `true` wenn der Eintrag nichts ändert.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.exclusion.is_none()
    }
}

/// Geordneter Undo-Stack mit maximaler Tiefe.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    entries: Vec<UndoEntry>,
    max_depth: usize,
}

impl UndoStack {
    /// Erstellt einen neuen Stack mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            entries: Vec::with_capacity(max_depth.min(64)),
            max_depth,
        }
    }

    /// Legt einen Eintrag ab. Leere Einträge werden ignoriert.
    /// Ist der Stack voll, fällt der älteste Eintrag heraus.
    pub fn push(&mut self, entry: UndoEntry) -> bool {
        if entry.is_empty() {
            return false;
        }
        if self.entries.len() >= self.max_depth {
            self.entries.remove(0);
        }
        self.entries.push(entry);
        true
    }

    /// Entnimmt den jüngsten Eintrag.
    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop()
    }

    /// Jüngster Eintrag ohne Entnahme.
    pub fn last(&self) -> Option<&UndoEntry> {
        self.entries.last()
    }

    /// Verwirft den gesamten Verlauf.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Anzahl gespeicherter Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn kein Eintrag vorhanden ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximale Tiefe.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Setzt eine neue maximale Tiefe (mindestens 1).
    /// Überzählige älteste Einträge werden sofort verworfen.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        if self.entries.len() > self.max_depth {
            let overflow = self.entries.len() - self.max_depth;
            self.entries.drain(..overflow);
        }
    }
}
