//! Lesen gespeicherter Punkte.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::core::{MapPoint, PointAttributes, PointStore};

/// Ein Datensatz der Punktdatei, so tolerant wie möglich gelesen.
#[derive(Debug, Deserialize)]
struct PointRecord {
    #[serde(default)]
    latitude: Value,
    #[serde(default)]
    longitude: Value,
    #[serde(default)]
    attributes: Option<PointAttributes>,
}

/// Ein gültiger Datensatz vor der ID-Vergabe.
struct ParsedRecord {
    id: Option<u64>,
    longitude: f64,
    latitude: f64,
    name: Option<String>,
    extra: PointAttributes,
}

fn parse_record(index: usize, value: Value) -> Option<ParsedRecord> {
    let record: PointRecord = match serde_json::from_value(value) {
        Ok(record) => record,
        Err(e) => {
            log::debug!("Datensatz {} übersprungen: {}", index, e);
            return None;
        }
    };

    let (Some(latitude), Some(longitude)) = (record.latitude.as_f64(), record.longitude.as_f64())
    else {
        log::debug!("Datensatz {} ohne numerische Koordinaten übersprungen", index);
        return None;
    };

    let mut extra = record.attributes.unwrap_or_default();
    let id = match extra.remove("id") {
        Some(raw) => {
            let id = raw.as_u64();
            if id.is_none() {
                log::debug!("Datensatz {}: ungültige ID {} ignoriert", index, raw);
            }
            id
        }
        None => None,
    };
    let name = match extra.remove("name") {
        Some(Value::String(name)) => Some(name),
        Some(other) => {
            extra.insert("name".to_string(), other);
            None
        }
        None => None,
    };

    Some(ParsedRecord {
        id,
        longitude,
        latitude,
        name,
        extra,
    })
}

/// Liest Punkte aus einem JSON-String.
///
/// Schlägt nie fehl: ungültiges JSON ergibt einen leeren Store, ungültige
/// Datensätze werden einzeln übersprungen. Datensätze ohne ID bekommen die
/// nächste freie ID, doppelte IDs werden verworfen.
pub fn load_points_from_str(json: &str) -> PointStore {
    let values: Vec<Value> = match serde_json::from_str(json) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("Punktdatei fehlerhaft, keine Punkte geladen: {}", e);
            return PointStore::new();
        }
    };

    let total = values.len();
    let records: Vec<ParsedRecord> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| parse_record(index, value))
        .collect();

    let mut next_id = records
        .iter()
        .filter_map(|r| r.id)
        .max()
        .map_or(0, |max| max.saturating_add(1));

    let points = records.into_iter().map(|record| {
        let id = record.id.unwrap_or_else(|| {
            let id = next_id;
            next_id = next_id.saturating_add(1);
            id
        });
        let mut point = MapPoint::geographic(id, record.longitude, record.latitude);
        point.name = record.name;
        point.attributes = record.extra;
        point
    });
    let store = PointStore::from_points(points);

    log::info!("{} von {} gespeicherten Punkten geladen", store.len(), total);
    store
}

/// Liest Punkte aus einer Datei. Nur I/O-Fehler werden gemeldet.
pub fn load_points_from_file(path: &Path) -> Result<PointStore> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Punktdatei nicht lesbar: {}", path.display()))?;
    Ok(load_points_from_str(&content))
}
