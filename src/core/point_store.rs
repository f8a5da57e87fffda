//! Die feste Menge selektierbarer Punkte.

use std::collections::HashMap;

use glam::DVec2;
use indexmap::IndexMap;

use super::{CoordinateFrame, MapPoint, SpatialIndex, SpatialMatch};

/// Container aller selektierbaren Punkte in Einfügereihenfolge.
///
/// Punkte werden nie gelöscht; nach dem Aufbau ändert sich nur noch das
/// Ausschluss-Flag (über die Engine).
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: IndexMap<u64, MapPoint>,
    /// Ein Nearest-Index pro Koordinatensystem
    spatial: HashMap<CoordinateFrame, SpatialIndex>,
}

impl PointStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut einen Store aus Punkten; doppelte IDs werden verworfen.
    pub fn from_points(points: impl IntoIterator<Item = MapPoint>) -> Self {
        let mut store = Self::new();
        for point in points {
            let id = point.id;
            if !store.insert_unindexed(point) {
                log::warn!("Punkt-ID {} doppelt, Punkt verworfen", id);
            }
        }
        store.rebuild_spatial_index();
        store
    }

    fn insert_unindexed(&mut self, point: MapPoint) -> bool {
        if self.points.contains_key(&point.id) {
            return false;
        }
        self.points.insert(point.id, point);
        true
    }

    /// Fügt einen Punkt hinzu. Gibt `false` zurück, wenn die ID schon existiert.
    pub fn insert(&mut self, point: MapPoint) -> bool {
        let inserted = self.insert_unindexed(point);
        if inserted {
            self.rebuild_spatial_index();
        }
        inserted
    }

    /// Baut die Nearest-Indizes aller Koordinatensysteme neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        let mut grouped: HashMap<CoordinateFrame, Vec<(u64, DVec2)>> = HashMap::new();
        for point in self.points.values() {
            grouped
                .entry(point.frame)
                .or_default()
                .push((point.id, point.position));
        }
        self.spatial = grouped
            .into_iter()
            .map(|(frame, positions)| (frame, SpatialIndex::from_positions(positions)))
            .collect();
    }

    /// Alle Punkte in Einfügereihenfolge.
    pub fn all_points(&self) -> impl Iterator<Item = &MapPoint> {
        self.points.values()
    }

    /// Alle IDs in Einfügereihenfolge.
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.keys().copied()
    }

    /// IDs aller ausgeschlossenen Punkte.
    pub fn excluded_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.values().filter(|p| p.excluded).map(|p| p.id)
    }

    /// Findet einen Punkt per ID.
    pub fn get(&self, id: u64) -> Option<&MapPoint> {
        self.points.get(&id)
    }

    /// Prüft ob eine ID existiert.
    pub fn contains(&self, id: u64) -> bool {
        self.points.contains_key(&id)
    }

    /// `true` wenn der Punkt existiert und ausgeschlossen ist.
    pub fn is_excluded(&self, id: u64) -> bool {
        self.points.get(&id).is_some_and(|p| p.excluded)
    }

    /// Setzt das Ausschluss-Flag. Gibt den vorherigen Wert zurück (None = unbekannte ID).
    ///
    /// Nur die Engine ruft dies auf, damit die Selektion konsistent bleibt.
    pub(crate) fn set_excluded(&mut self, id: u64, excluded: bool) -> Option<bool> {
        let point = self.points.get_mut(&id)?;
        let previous = point.excluded;
        point.excluded = excluded;
        Some(previous)
    }

    /// Gibt die Anzahl der Punkte zurück.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Berechnet die nächste freie Punkt-ID.
    pub fn next_point_id(&self) -> u64 {
        self.points.keys().max().map_or(0, |max| max + 1)
    }

    /// Findet den nächsten Punkt im System `frame` innerhalb von `max_distance`.
    ///
    /// Punkte anderer Koordinatensysteme werden nicht berücksichtigt.
    pub fn nearest_point(
        &self,
        position: DVec2,
        frame: CoordinateFrame,
        max_distance: f64,
    ) -> Option<SpatialMatch> {
        if max_distance.is_sign_negative() {
            return None;
        }
        self.spatial
            .get(&frame)?
            .nearest(position)
            .filter(|hit| hit.distance <= max_distance)
    }
}
