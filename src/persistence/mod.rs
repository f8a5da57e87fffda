//! Persistenz der Punktmenge als JSON-Datei.
//!
//! Format: Array aus `{ "latitude", "longitude", "attributes": { "id", "name", ... } }`.
//! Beim Start wird eine vorhandene Datei geladen, sonst werden Standard-Punkte
//! erzeugt und gespeichert.

pub mod defaults;
pub mod reader;
pub mod writer;

use std::path::Path;

use crate::core::PointStore;
use crate::shared::EngineOptions;

pub use defaults::generate_default_points;
pub use reader::{load_points_from_file, load_points_from_str};
pub use writer::{save_points_to_file, write_points_json};

/// Prüft ob unter `path` eine Punktdatei liegt.
pub fn has_saved_points(path: &Path) -> bool {
    path.is_file()
}

/// Startpfad: gespeicherte Punkte laden oder Standard-Punkte erzeugen.
///
/// Fehlt die Datei, werden Standard-Punkte erzeugt und gespeichert (ein
/// Speicherfehler wird nur geloggt). Eine vorhandene, aber unlesbare oder
/// leere Datei bleibt unangetastet; es werden nur für diese Sitzung
/// Standard-Punkte erzeugt.
pub fn load_or_generate(path: &Path, options: &EngineOptions) -> PointStore {
    if !has_saved_points(path) {
        let store = generate_default_points(options);
        match save_points_to_file(&store, path) {
            Ok(count) => log::info!("{} Standard-Punkte gespeichert in {}", count, path.display()),
            Err(e) => log::warn!("Standard-Punkte konnten nicht gespeichert werden: {:#}", e),
        }
        return store;
    }

    match load_points_from_file(path) {
        Ok(store) if !store.is_empty() => return store,
        Ok(_) => log::warn!("Punktdatei {} enthält keine Punkte", path.display()),
        Err(e) => log::warn!("Punktdatei nicht lesbar: {:#}", e),
    }
    log::warn!(
        "Verwende Standard-Punkte, {} bleibt unverändert",
        path.display()
    );
    generate_default_points(options)
}
