//! Öffentliche Fassade der Selektions-Engine.

use std::collections::HashSet;

use glam::DVec2;

use super::history::UndoEntry;
use super::use_cases;
use super::use_cases::selection::SelectionOutcome;
use super::EngineState;
use crate::core::{
    CoordinateFrame, Geometry, GeometryEngine, MapPoint, PlanarGeometryEngine, PointStore,
};
use crate::shared::EngineOptions;

/// Zustandsbehaftete Selektions-Engine über einer festen Punktmenge.
///
/// Eine Instanz gehört einem einzelnen Akteur. Hosts mit mehreren Threads
/// nutzen [`SharedSelectionEngine`](super::SharedSelectionEngine).
#[derive(Debug, Clone)]
pub struct SelectionEngine<G = PlanarGeometryEngine> {
    state: EngineState,
    geometry: G,
}

impl SelectionEngine<PlanarGeometryEngine> {
    /// Engine mit planarer Standard-Geometrie.
    pub fn new(points: PointStore, options: EngineOptions) -> Self {
        Self::with_geometry(points, options, PlanarGeometryEngine::new())
    }
}

impl<G: GeometryEngine> SelectionEngine<G> {
    /// Engine mit eigener Geometrie-Implementierung.
    pub fn with_geometry(points: PointStore, options: EngineOptions, geometry: G) -> Self {
        log::info!("Selektions-Engine mit {} Punkten erstellt", points.len());
        Self {
            state: EngineState::new(points, options),
            geometry,
        }
    }

    // ── Operationen ─────────────────────────────────────────────────

    /// Schaltet alle Punkte innerhalb der Form um (ein Undo-Eintrag).
    pub fn select_by_geometry(
        &mut self,
        geometry: &Geometry,
        buffer_distance: Option<f64>,
    ) -> SelectionOutcome {
        let outcome = use_cases::selection::select_by_geometry(
            &mut self.state,
            &self.geometry,
            geometry,
            buffer_distance,
        );
        log::info!(
            "{}-Selektion: {} selektiert, {} abgewählt, {} übersprungen",
            geometry.kind_name(),
            outcome.selected,
            outcome.deselected,
            outcome.skipped_unprojectable
        );
        outcome
    }

    /// Schaltet einen einzelnen Punkt um.
    pub fn select_by_tap(&mut self, point_id: u64) -> bool {
        use_cases::selection::select_by_tap(&mut self.state, point_id)
    }

    /// Schaltet den nächsten Punkt im Radius um (Tipp auf eine Position).
    pub fn select_nearest(
        &mut self,
        position: DVec2,
        frame: CoordinateFrame,
        max_distance: f64,
    ) -> Option<u64> {
        use_cases::selection::select_nearest(&mut self.state, position, frame, max_distance)
    }

    /// Selektiert alle nicht ausgeschlossenen Punkte (verwirft den Verlauf).
    pub fn select_all(&mut self) {
        let count = use_cases::selection::select_all(&mut self.state);
        log::info!("Alle {} Punkte selektiert", count);
    }

    /// Hebt die Selektion auf (verwirft den Verlauf).
    pub fn clear_all(&mut self) {
        use_cases::selection::clear_all(&mut self.state);
        log::info!("Selektion aufgehoben");
    }

    /// Setzt oder löscht den CGI-Ausschluss eines Punkts.
    pub fn set_excluded(&mut self, point_id: u64, excluded: bool) -> bool {
        let changed = use_cases::exclusion::set_excluded(&mut self.state, point_id, excluded);
        if changed {
            log::info!(
                "Punkt {} {}",
                point_id,
                if excluded { "ausgeschlossen" } else { "wieder zugelassen" }
            );
        }
        changed
    }

    /// Macht die jüngste Operation rückgängig.
    pub fn undo(&mut self) -> bool {
        let undone = use_cases::history::undo(&mut self.state);
        if undone {
            log::info!("Undo ausgeführt");
        }
        undone
    }

    /// Ersetzt die Punktmenge; Selektion und Verlauf beginnen neu.
    pub fn replace_points(&mut self, points: PointStore) {
        log::info!("Punktmenge ersetzt: {} Punkte", points.len());
        let options = self.state.options.clone();
        self.state = EngineState::new(points, options);
    }

    /// Übernimmt neue Optionen. Eine kleinere Undo-Tiefe kürzt den Verlauf sofort.
    pub fn set_options(&mut self, options: EngineOptions) {
        self.state
            .history
            .set_max_depth(options.effective_history_depth());
        self.state.options = options;
    }

    // ── Lesezugriff ─────────────────────────────────────────────────

    /// Aktuell selektierte IDs.
    pub fn current_selection(&self) -> &HashSet<u64> {
        self.state.selection.ids()
    }

    /// Selektierte IDs in PointStore-Reihenfolge (für deterministische Ausgabe).
    pub fn ordered_selection(&self) -> Vec<u64> {
        self.state
            .points
            .ids()
            .filter(|id| self.state.selection.contains(*id))
            .collect()
    }

    /// Prüft ob ein Punkt selektiert ist.
    pub fn is_selected(&self, point_id: u64) -> bool {
        self.state.selection.contains(point_id)
    }

    /// Prüft ob ein Punkt ausgeschlossen ist.
    pub fn is_excluded(&self, point_id: u64) -> bool {
        self.state.points.is_excluded(point_id)
    }

    /// Anzahl selektierter Punkte.
    pub fn selected_count(&self) -> usize {
        self.state.selection.len()
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.state.history.can_undo()
    }

    /// Anzahl der Undo-Einträge.
    pub fn undo_depth(&self) -> usize {
        self.state.history.len()
    }

    /// Jüngster Undo-Eintrag (für Anzeige und Tests).
    pub fn last_undo_entry(&self) -> Option<&UndoEntry> {
        self.state.history.last()
    }

    /// Die Punktmenge.
    pub fn points(&self) -> &PointStore {
        &self.state.points
    }

    /// Einzelner Punkt per ID.
    pub fn point(&self, point_id: u64) -> Option<&MapPoint> {
        self.state.points.get(point_id)
    }

    /// Aktive Optionen.
    pub fn options(&self) -> &EngineOptions {
        &self.state.options
    }

    /// Vollständiger Zustand (read-only).
    pub fn state(&self) -> &EngineState {
        &self.state
    }
}
