use std::path::PathBuf;

use glam::DVec2;

use crate::core::{CoordinateFrame, Geometry};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Alle Punkte innerhalb einer Form umschalten
    SelectByGeometry {
        geometry: Geometry,
        buffer_distance: Option<f64>,
    },
    /// Einzelnen Punkt per ID umschalten
    SelectByTap { point_id: u64 },
    /// Nächsten Punkt zu einer Position umschalten
    SelectNearest {
        position: DVec2,
        frame: CoordinateFrame,
        max_distance: f64,
    },
    /// Alle nicht ausgeschlossenen Punkte selektieren
    SelectAll,
    /// Selektion aufheben
    ClearAll,
    /// CGI-Ausschluss setzen oder löschen
    SetExcluded { point_id: u64, excluded: bool },
    /// Letzte Operation rückgängig machen
    Undo,
    /// Punktmenge aus Datei laden (ersetzt Selektion und Verlauf)
    LoadPoints { path: PathBuf },
    /// Punktmenge in Datei speichern
    SavePoints { path: PathBuf },
}
