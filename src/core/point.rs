//! Ein selektierbarer Kartenpunkt.

use glam::DVec2;

use super::CoordinateFrame;

/// Zusätzliche, unverändert durchgereichte Attribute aus der Punktdatei.
pub type PointAttributes = serde_json::Map<String, serde_json::Value>;

/// Selektierbarer Punkt mit stabiler ID.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    /// Eindeutige ID, stabil für die Laufzeit des Prozesses
    pub id: u64,
    /// Position im eigenen Koordinatensystem
    pub position: DVec2,
    /// Koordinatensystem der Position
    pub frame: CoordinateFrame,
    /// CGI-Ausschluss: nie selektierbar solange gesetzt
    pub excluded: bool,
    /// Anzeigename (optional)
    pub name: Option<String>,
    /// Weitere Attribute aus der Punktdatei
    pub attributes: PointAttributes,
}

impl MapPoint {
    /// Erstellt einen nicht ausgeschlossenen Punkt ohne Attribute.
    pub fn new(id: u64, position: DVec2, frame: CoordinateFrame) -> Self {
        Self {
            id,
            position,
            frame,
            excluded: false,
            name: None,
            attributes: PointAttributes::new(),
        }
    }

    /// Builder: setzt den Anzeigenamen.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Geografischer Punkt aus Länge/Breite.
    pub fn geographic(id: u64, longitude: f64, latitude: f64) -> Self {
        Self::new(id, DVec2::new(longitude, latitude), CoordinateFrame::Wgs84)
    }
}
