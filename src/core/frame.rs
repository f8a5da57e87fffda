//! Koordinatensysteme und Reprojektion zwischen ihnen.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::GeometryError;

/// WGS84 große Halbachse (Meter), Basis der Web-Mercator-Projektion.
pub const WGS84_A: f64 = 6_378_137.0;
/// Maximale Breite, die Web-Mercator noch abbilden kann.
pub const MERCATOR_MAX_LAT_DEG: f64 = 85.051_128_78;
/// Länge eines Breitengrads am Äquator (Meter).
pub const METERS_PER_DEGREE: f64 = WGS84_A * std::f64::consts::PI / 180.0;

/// Bezugssystem einer Koordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateFrame {
    /// Geografisch: x = Längengrad, y = Breitengrad (Grad)
    Wgs84,
    /// Web-Mercator (EPSG:3857) in Metern
    WebMercator,
    /// Frei definiertes planares System des Hosts, nicht reprojizierbar
    Local(u32),
}

impl CoordinateFrame {
    /// Kurzname für Logs und CLI.
    pub fn label(self) -> String {
        match self {
            Self::Wgs84 => "wgs84".to_string(),
            Self::WebMercator => "web-mercator".to_string(),
            Self::Local(id) => format!("local-{id}"),
        }
    }

    /// Rechnet eine Strecke in Metern in Koordinateneinheiten dieses Systems um.
    ///
    /// WGS84 nutzt die Gradlänge am Äquator; lokale Systeme gelten als metrisch.
    pub fn meters_to_units(self, meters: f64) -> f64 {
        match self {
            Self::Wgs84 => meters / METERS_PER_DEGREE,
            Self::WebMercator | Self::Local(_) => meters,
        }
    }
}

impl std::fmt::Display for CoordinateFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl std::str::FromStr for CoordinateFrame {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs84" | "epsg:4326" => Ok(Self::Wgs84),
            "web-mercator" | "mercator" | "epsg:3857" => Ok(Self::WebMercator),
            other => {
                let Some(id) = other.strip_prefix("local-") else {
                    anyhow::bail!("Unbekanntes Koordinatensystem: {s}");
                };
                Ok(Self::Local(id.parse()?))
            }
        }
    }
}

fn is_mercator_lat_valid(lat_deg: f64) -> bool {
    lat_deg.is_finite() && (-MERCATOR_MAX_LAT_DEG..=MERCATOR_MAX_LAT_DEG).contains(&lat_deg)
}

fn wgs84_to_mercator(position: DVec2) -> Option<DVec2> {
    if !position.x.is_finite() || !is_mercator_lat_valid(position.y) {
        return None;
    }
    let lat = position.y.to_radians();
    Some(DVec2::new(
        WGS84_A * position.x.to_radians(),
        WGS84_A * (std::f64::consts::FRAC_PI_4 + 0.5 * lat).tan().ln(),
    ))
}

fn mercator_to_wgs84(position: DVec2) -> Option<DVec2> {
    if !position.is_finite() {
        return None;
    }
    let lon = (position.x / WGS84_A).to_degrees();
    let lat = 2.0 * (position.y / WGS84_A).exp().atan() - std::f64::consts::FRAC_PI_2;
    Some(DVec2::new(lon, lat.to_degrees()))
}

/// Reprojiziert eine Position von `from` nach `to`.
///
/// Lokale Systeme lassen sich nur in sich selbst abbilden.
pub fn reproject(
    position: DVec2,
    from: CoordinateFrame,
    to: CoordinateFrame,
) -> Result<DVec2, GeometryError> {
    let converted = match (from, to) {
        _ if from == to => Some(position),
        (CoordinateFrame::Wgs84, CoordinateFrame::WebMercator) => wgs84_to_mercator(position),
        (CoordinateFrame::WebMercator, CoordinateFrame::Wgs84) => mercator_to_wgs84(position),
        _ => None,
    };
    converted.ok_or(GeometryError::Reprojection { from, to })
}
