//! Schreiben der Punktmenge.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::core::{reproject, CoordinateFrame, MapPoint, PointAttributes, PointStore};

/// Gespeicherte Form eines Punkts. Laufzeit-Felder (Ausschluss, System) fehlen.
#[derive(Debug, Serialize)]
struct SavedPoint {
    latitude: f64,
    longitude: f64,
    attributes: PointAttributes,
}

fn saved_point(point: &MapPoint) -> Option<SavedPoint> {
    let position = match reproject(point.position, point.frame, CoordinateFrame::Wgs84) {
        Ok(position) => position,
        Err(e) => {
            log::warn!("Punkt {} nicht gespeichert: {}", point.id, e);
            return None;
        }
    };

    let mut attributes = point.attributes.clone();
    attributes.insert("id".to_string(), Value::from(point.id));
    if let Some(name) = &point.name {
        attributes.insert("name".to_string(), Value::from(name.as_str()));
    }

    Some(SavedPoint {
        latitude: position.y,
        longitude: position.x,
        attributes,
    })
}

/// Serialisiert alle speicherbaren Punkte (Store-Reihenfolge) als formatiertes JSON.
///
/// Gibt das JSON und die Anzahl geschriebener Punkte zurück.
pub fn write_points_json(store: &PointStore) -> Result<(String, usize)> {
    let records: Vec<SavedPoint> = store.all_points().filter_map(saved_point).collect();
    let json =
        serde_json::to_string_pretty(&records).context("Punkte nicht serialisierbar")?;
    Ok((json, records.len()))
}

/// Schreibt die Punktmenge nach `path`. Gibt die Anzahl gespeicherter Punkte zurück.
pub fn save_points_to_file(store: &PointStore, path: &Path) -> Result<usize> {
    let (json, count) = write_points_json(store)?;
    std::fs::write(path, json)
        .with_context(|| format!("Punktdatei nicht schreibbar: {}", path.display()))?;
    log::info!("{} Punkte gespeichert in {}", count, path.display());
    Ok(count)
}
