//! Spatial-Index (KD-Tree) für schnelle Nearest-Abfragen auf Punkten.

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Punkts
    pub point_id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index über den Punkten eines Koordinatensystems.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    point_ids: Vec<u64>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            point_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus (ID, Position)-Paaren.
    ///
    /// Nicht-endliche Positionen werden nicht indexiert.
    pub fn from_positions(positions: impl IntoIterator<Item = (u64, DVec2)>) -> Self {
        let (point_ids, entries): (Vec<u64>, Vec<[f64; 2]>) = positions
            .into_iter()
            .filter(|(_, position)| position.is_finite())
            .map(|(id, position)| (id, [position.x, position.y]))
            .unzip();

        Self {
            tree: (&entries).into(),
            point_ids,
        }
    }

    /// Gibt die Anzahl indexierter Punkte zurück.
    pub fn len(&self) -> usize {
        self.point_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty()
    }

    /// Findet den nächsten Punkt zur gegebenen Position.
    pub fn nearest(&self, query: DVec2) -> Option<SpatialMatch> {
        if self.is_empty() || !query.is_finite() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let point_id = *self.point_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            point_id,
            distance: result.distance.sqrt(),
        })
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}
