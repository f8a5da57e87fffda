//! Abfrage-Geometrien und die Geometrie-Schnittstelle der Engine.
//!
//! Die Engine rechnet selbst keine Geometrie. Enthaltensein, Reprojektion und
//! Pufferung kommen über [`GeometryEngine`]; `PlanarGeometryEngine` ist die
//! mitgelieferte Standard-Implementierung.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::CoordinateFrame;

/// Form einer Abfrage-Geometrie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Achsen-alignierte Box (Rechteck-Werkzeug)
    Envelope { min: DVec2, max: DVec2 },
    /// Geschlossener Ring ohne Wiederholung des Startpunkts (Lasso, Polygon, Dreieck)
    Polygon { ring: Vec<DVec2> },
    /// Ellipse mit Halbachsen `radii`, gedreht um `rotation` (Radiant)
    Ellipse {
        center: DVec2,
        radii: DVec2,
        #[serde(default)]
        rotation: f64,
    },
    /// Linienzug ohne Innenfläche (Freihand-Linie, Polyline)
    Polyline { path: Vec<DVec2> },
    /// Gepufferter Linienzug: alle Punkte mit Abstand ≤ `half_width` zum Pfad
    Corridor { path: Vec<DVec2>, half_width: f64 },
}

/// Vom Aufrufer geliefertes Gebiet in einem Koordinatensystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub frame: CoordinateFrame,
    pub shape: Shape,
}

impl Geometry {
    /// Rechteck aus zwei beliebigen Eckpunkten.
    pub fn rectangle(frame: CoordinateFrame, corner_a: DVec2, corner_b: DVec2) -> Self {
        Self {
            frame,
            shape: Shape::Envelope {
                min: corner_a.min(corner_b),
                max: corner_a.max(corner_b),
            },
        }
    }

    /// Polygon (Lasso, Freihand-Fläche, Dreieck).
    pub fn polygon(frame: CoordinateFrame, ring: Vec<DVec2>) -> Self {
        Self {
            frame,
            shape: Shape::Polygon { ring },
        }
    }

    /// Achsen-parallele Ellipse.
    pub fn ellipse(frame: CoordinateFrame, center: DVec2, radii: DVec2) -> Self {
        Self {
            frame,
            shape: Shape::Ellipse {
                center,
                radii,
                rotation: 0.0,
            },
        }
    }

    /// Linienzug (muss vor der Abfrage gepuffert werden).
    pub fn polyline(frame: CoordinateFrame, path: Vec<DVec2>) -> Self {
        Self {
            frame,
            shape: Shape::Polyline { path },
        }
    }

    /// `true` für eindimensionale Formen ohne Innenfläche.
    pub fn is_line(&self) -> bool {
        matches!(self.shape, Shape::Polyline { .. })
    }

    /// Kurzbezeichnung der Form für Logs.
    pub fn kind_name(&self) -> &'static str {
        match self.shape {
            Shape::Envelope { .. } => "Rechteck",
            Shape::Polygon { .. } => "Polygon",
            Shape::Ellipse { .. } => "Ellipse",
            Shape::Polyline { .. } => "Linie",
            Shape::Corridor { .. } => "Korridor",
        }
    }
}

/// Fehler der Geometrie-Schnittstelle.
///
/// Keiner davon ist fatal: Reprojektionsfehler überspringen einen Punkt,
/// Pufferfehler machen die ganze Abfrage zum No-op.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Punkt lässt sich nicht in das Zielsystem abbilden
    Reprojection {
        from: CoordinateFrame,
        to: CoordinateFrame,
    },
    /// Linie lässt sich nicht zu einer Fläche puffern
    Buffer { reason: &'static str },
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reprojection { from, to } => {
                write!(f, "Reprojektion von {from} nach {to} nicht möglich")
            }
            Self::Buffer { reason } => write!(f, "Pufferung fehlgeschlagen: {reason}"),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Geometrie-Fähigkeiten, die die Selektions-Engine konsumiert.
pub trait GeometryEngine {
    /// Prüft ob `position` (bereits im System der Geometrie) im Gebiet liegt.
    fn contains(&self, geometry: &Geometry, position: DVec2) -> bool;

    /// Bildet `position` von `from` nach `to` ab.
    fn reproject(
        &self,
        position: DVec2,
        from: CoordinateFrame,
        to: CoordinateFrame,
    ) -> Result<DVec2, GeometryError>;

    /// Erweitert eine Linie um `distance` zu einer Fläche.
    fn buffer(&self, geometry: &Geometry, distance: f64) -> Result<Geometry, GeometryError>;
}
