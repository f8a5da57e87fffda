//! Zentrale Konfiguration der Selektions-Engine.
//!
//! `EngineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Selektion ───────────────────────────────────────────────────────

/// Standard-Korridorbreite für Linien-Selektion in Metern.
///
/// Für WGS84-Linien wird sie in Grad umgerechnet, lokale Systeme nutzen
/// den Wert direkt.
pub const LINE_BUFFER_DISTANCE: f64 = 20.0;
/// Maximale Anzahl Undo-Einträge.
pub const HISTORY_DEPTH: usize = 200;
/// Radius für Tipp-Selektion per Position (Koordinateneinheiten, Standard: Grad).
pub const TAP_RADIUS: f64 = 0.0005;

// ── Standard-Punkte ─────────────────────────────────────────────────

/// Anzahl generierter Punkte inklusive Mittelpunkt.
pub const DEFAULT_POINT_COUNT: usize = 49;
/// Mittelpunkt der generierten Punkte (Länge, Breite).
pub const DEFAULT_CENTER: [f64; 2] = [-2.712642647560347, 56.062812566811544];
/// Maximale Abweichung vom Mittelpunkt in Grad.
pub const DEFAULT_JITTER_DEG: f64 = 0.01;
/// Seed für reproduzierbare Standard-Punkte.
pub const DEFAULT_SEED: u64 = 0x5EED_2025;
/// Dateiname der gespeicherten Punkte.
pub const POINTS_FILE: &str = "saved_points.json";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `map_point_select.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Korridorbreite (Meter) für Linien ohne expliziten Pufferabstand
    pub line_buffer_distance: f64,
    /// Maximale Undo-Tiefe (älteste Einträge fallen heraus)
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
    /// Suchradius für Tipp-Selektion per Position
    #[serde(default = "default_tap_radius")]
    pub tap_radius: f64,

    // ── Standard-Punkte ─────────────────────────────────────────
    /// Anzahl generierter Punkte inklusive Mittelpunkt
    pub default_point_count: usize,
    /// Mittelpunkt (Länge, Breite)
    #[serde(default = "default_center")]
    pub default_center: [f64; 2],
    /// Maximale Abweichung vom Mittelpunkt in Grad
    pub default_jitter_deg: f64,
    /// Seed für die Generierung
    #[serde(default = "default_seed")]
    pub default_seed: u64,

    // ── Persistenz ──────────────────────────────────────────────
    /// Pfad der Punktdatei
    #[serde(default = "default_points_file")]
    pub points_file: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            line_buffer_distance: LINE_BUFFER_DISTANCE,
            history_depth: HISTORY_DEPTH,
            tap_radius: TAP_RADIUS,

            default_point_count: DEFAULT_POINT_COUNT,
            default_center: DEFAULT_CENTER,
            default_jitter_deg: DEFAULT_JITTER_DEG,
            default_seed: DEFAULT_SEED,

            points_file: POINTS_FILE.to_string(),
        }
    }
}

/// Serde-Default für `history_depth` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

fn default_tap_radius() -> f64 {
    TAP_RADIUS
}

fn default_center() -> [f64; 2] {
    DEFAULT_CENTER
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_points_file() -> String {
    POINTS_FILE.to_string()
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_point_select"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_point_select.toml")
    }

    /// Undo-Tiefe, mindestens 1.
    pub fn effective_history_depth(&self) -> usize {
        self.history_depth.max(1)
    }
}
