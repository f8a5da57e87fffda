//! Planare Standard-Implementierung der Geometrie-Schnittstelle.

use glam::DVec2;

use super::frame;
use super::{CoordinateFrame, Geometry, GeometryEngine, GeometryError, Shape};

/// Toleranz für Punkte auf einer Polygonkante (relativ zur Kantenlänge).
const EDGE_EPSILON: f64 = 1e-9;

/// Ebene Geometrie: Ray-Casting, Ellipsen- und Korridor-Test, Mercator-Reprojektion.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarGeometryEngine;

impl PlanarGeometryEngine {
    /// Erstellt die Standard-Geometrie.
    pub fn new() -> Self {
        Self
    }
}

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: DVec2, a: DVec2, b: DVec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    let ab_len_sq = ab.length_squared();
    if ab_len_sq == 0.0 {
        return ap.length_squared() <= EDGE_EPSILON * EDGE_EPSILON;
    }

    if ab.perp_dot(ap).abs() > EDGE_EPSILON * ab_len_sq.sqrt() {
        return false;
    }

    let dot = ap.dot(ab);
    (0.0..=ab_len_sq).contains(&dot)
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Ray-Casting, Rand inklusive).
fn point_in_polygon(point: DVec2, ring: &[DVec2]) -> bool {
    let Some(&last) = ring.last() else {
        return false;
    };
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = last;

    for &current in ring {
        if point_on_segment(point, previous, current) {
            return true;
        }

        // Bedingung garantiert previous.y != current.y
        if (current.y > point.y) != (previous.y > point.y) {
            let x_cross = (previous.x - current.x) * (point.y - current.y)
                / (previous.y - current.y)
                + current.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }

        previous = current;
    }

    inside
}

fn point_in_ellipse(point: DVec2, center: DVec2, radii: DVec2, rotation: f64) -> bool {
    if radii.x <= 0.0 || radii.y <= 0.0 {
        return false;
    }
    let local = DVec2::from_angle(-rotation).rotate(point - center);
    let nx = local.x / radii.x;
    let ny = local.y / radii.y;
    nx * nx + ny * ny <= 1.0
}

/// Kleinster Abstand eines Punkts zu einem Linienzug.
fn distance_to_path(point: DVec2, path: &[DVec2]) -> Option<f64> {
    match path {
        [] => None,
        [single] => Some(point.distance(*single)),
        _ => path
            .windows(2)
            .map(|segment| {
                let (a, b) = (segment[0], segment[1]);
                let ab = b - a;
                let len_sq = ab.length_squared();
                let t = if len_sq == 0.0 {
                    0.0
                } else {
                    ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0)
                };
                point.distance(a + ab * t)
            })
            .reduce(f64::min),
    }
}

impl GeometryEngine for PlanarGeometryEngine {
    fn contains(&self, geometry: &Geometry, position: DVec2) -> bool {
        if !position.is_finite() {
            return false;
        }
        match &geometry.shape {
            Shape::Envelope { min, max } => {
                position.x >= min.x
                    && position.x <= max.x
                    && position.y >= min.y
                    && position.y <= max.y
            }
            Shape::Polygon { ring } => point_in_polygon(position, ring),
            Shape::Ellipse {
                center,
                radii,
                rotation,
            } => point_in_ellipse(position, *center, *radii, *rotation),
            // Eine Linie hat keine Innenfläche
            Shape::Polyline { .. } => false,
            Shape::Corridor { path, half_width } => {
                distance_to_path(position, path).is_some_and(|d| d <= *half_width)
            }
        }
    }

    fn reproject(
        &self,
        position: DVec2,
        from: CoordinateFrame,
        to: CoordinateFrame,
    ) -> Result<DVec2, GeometryError> {
        frame::reproject(position, from, to)
    }

    fn buffer(&self, geometry: &Geometry, distance: f64) -> Result<Geometry, GeometryError> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(GeometryError::Buffer {
                reason: "Pufferabstand muss endlich und positiv sein",
            });
        }

        let (path, half_width) = match &geometry.shape {
            Shape::Polyline { path } => (path, distance),
            Shape::Corridor { path, half_width } => (path, half_width + distance),
            _ => {
                return Err(GeometryError::Buffer {
                    reason: "nur Linien lassen sich puffern",
                })
            }
        };

        let mut vertices: Vec<DVec2> = path.iter().copied().filter(|p| p.is_finite()).collect();
        vertices.dedup();
        if vertices.len() < 2 {
            return Err(GeometryError::Buffer {
                reason: "Linie braucht mindestens zwei verschiedene Stützpunkte",
            });
        }

        Ok(Geometry {
            frame: geometry.frame,
            shape: Shape::Corridor {
                path: vertices,
                half_width,
            },
        })
    }
}
